//! Casio-style face
//!
//! Segment-display look: weekday and day on top, time with seconds, month
//! and year, and step progress towards the daily goal.

use core::fmt::Write;

use wristlet_hal::storage::paths;
use wristlet_hal::{Surface, WidgetId};

use super::{display_hour, StatusBar};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{ScreenTraits, WatchFace};
use crate::screens::{LabelText, Screen, Widgets};

pub struct CasioStyle {
    widgets: Widgets,
    status: StatusBar,
    day: WidgetId,
    time: WidgetId,
    meridiem: WidgetId,
    month: WidgetId,
    steps: WidgetId,

    timestamp: ChangeCell<u64>,
    days: ChangeCell<u64>,
    step_count: ChangeCell<u32>,
}

impl ScreenTraits<WatchFace> for CasioStyle {
    const ID: WatchFace = WatchFace::CasioStyle;
    const NAME: &'static str = "Casio G7710";
    const RESOURCES: &'static [&'static str] = &[
        paths::FONT_DOTS_40,
        paths::FONT_7SEGMENT_40,
        paths::FONT_7SEGMENT_115,
    ];

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        let mut face = Self {
            status: StatusBar::create(&mut widgets, surface, 0),
            day: widgets.label(surface, 2, 0),
            time: widgets.label(surface, 4, 4),
            meridiem: widgets.label(surface, 3, 4),
            month: widgets.label(surface, 2, 12),
            steps: widgets.label(surface, 7, 0),
            widgets,
            timestamp: ChangeCell::new(),
            days: ChangeCell::new(),
            step_count: ChangeCell::new(),
        };
        face.refresh(deps, surface);
        face
    }
}

impl Screen for CasioStyle {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.status.refresh(deps, surface);

        self.timestamp.set(deps.clock.timestamp());
        if self.timestamp.is_updated() {
            let (hour, suffix) = display_hour(deps.clock.hours(), deps.settings.clock_type());
            let mut text = LabelText::new();
            let _ = write!(
                text,
                "{:02}:{:02}:{:02}",
                hour,
                deps.clock.minutes(),
                deps.clock.seconds()
            );
            surface.set_text(self.time, &text);
            surface.set_text(self.meridiem, suffix.unwrap_or(""));

            self.days.set(deps.clock.days());
            if self.days.is_updated() {
                let mut text = LabelText::new();
                let _ = write!(
                    text,
                    "{} {:2}",
                    deps.clock.day_of_week().short_name_upper(),
                    deps.clock.day()
                );
                surface.set_text(self.day, &text);

                let mut text = LabelText::new();
                let _ = write!(
                    text,
                    "{} {}",
                    deps.clock.month().short_name_upper(),
                    deps.clock.year()
                );
                surface.set_text(self.month, &text);
            }
        }

        self.step_count.set(deps.motion.step_count());
        if self.step_count.is_updated() {
            let goal = deps.settings.steps_goal().max(1);
            let percent = u64::from(self.step_count.get()) * 100 / u64::from(goal);
            let mut text = LabelText::new();
            let _ = write!(text, "{:>6} STEPS {:>3}%", self.step_count.get(), percent);
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
    fn test_layout() {
        let device = FakeDevice {
            steps: 2500,
            connected: false,
            ..FakeDevice::default()
        };
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let _face = CasioStyle::create(&mut device.controllers(&mut settings), &mut surface);

        assert_eq!(surface.line(0).as_str(), "                  87%");
        assert_eq!(surface.line(2).as_str(), "THU 29      FEB 2024");
        assert_eq!(surface.line(4).as_str(), "    13:45:30");
        assert_eq!(surface.line(7).as_str(), "  2500 STEPS  25%");
    }
}
