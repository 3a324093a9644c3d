//! Infineat face
//!
//! Hours and minutes stacked in the middle, date underneath.

use core::fmt::Write;

use wristlet_hal::storage::paths;
use wristlet_hal::{Surface, WidgetId};

use super::{display_hour, StatusBar};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{ScreenTraits, WatchFace};
use crate::screens::{LabelText, Screen, Widgets};

pub struct Infineat {
    widgets: Widgets,
    status: StatusBar,
    hours: WidgetId,
    minutes: WidgetId,
    meridiem: WidgetId,
    date: WidgetId,
    steps: WidgetId,

    minute_stamp: ChangeCell<u64>,
    days: ChangeCell<u64>,
    step_count: ChangeCell<u32>,
}

impl ScreenTraits<WatchFace> for Infineat {
    const ID: WatchFace = WatchFace::Infineat;
    const NAME: &'static str = "Infineat";
    const RESOURCES: &'static [&'static str] = &[paths::FONT_TEKO, paths::FONT_BEBAS];

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        let mut face = Self {
            status: StatusBar::create(&mut widgets, surface, 0),
            hours: widgets.label(surface, 2, 9),
            minutes: widgets.label(surface, 3, 9),
            meridiem: widgets.label(surface, 3, 12),
            date: widgets.label(surface, 5, 5),
            steps: widgets.label(surface, 7, 0),
            widgets,
            minute_stamp: ChangeCell::new(),
            days: ChangeCell::new(),
            step_count: ChangeCell::new(),
        };
        face.refresh(deps, surface);
        face
    }
}

impl Screen for Infineat {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.status.refresh(deps, surface);

        self.minute_stamp.set(deps.clock.timestamp() / 60);
        if self.minute_stamp.is_updated() {
            let (hour, suffix) = display_hour(deps.clock.hours(), deps.settings.clock_type());
            let mut text = LabelText::new();
            let _ = write!(text, "{:02}", hour);
            surface.set_text(self.hours, &text);

            let mut text = LabelText::new();
            let _ = write!(text, "{:02}", deps.clock.minutes());
            surface.set_text(self.minutes, &text);
            surface.set_text(self.meridiem, suffix.unwrap_or(""));

            self.days.set(deps.clock.days());
            if self.days.is_updated() {
                let mut text = LabelText::new();
                let _ = write!(
                    text,
                    "{} {:02} {}",
                    deps.clock.day_of_week().short_name_upper(),
                    deps.clock.day(),
                    deps.clock.month().short_name_upper()
                );
                surface.set_text(self.date, &text);
            }
        }

        self.step_count.set(deps.motion.step_count());
        if self.step_count.is_updated() {
            let mut text = LabelText::new();
            let _ = write!(text, "{}", self.step_count.get());
            surface.set_text(self.steps, &text);
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::FakeDevice;
    use wristlet_display::TextSurface;

    #[test]
    fn test_stacked_time() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut face = Infineat::create(&mut device.controllers(&mut settings), &mut surface);

        assert_eq!(surface.line(2).as_str(), "         13");
        assert_eq!(surface.line(3).as_str(), "         45");
        assert_eq!(surface.line(5).as_str(), "     THU 29 FEB");

        face.release(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.live_widgets(), 0);
    }
}
