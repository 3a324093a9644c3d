//! Digital face
//!
//! Large time in the middle, date below, steps at the bottom. Needs no
//! resources, so it is the fallback when the chosen face is unavailable.

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use super::{display_hour, StatusBar};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{ScreenTraits, WatchFace};
use crate::screens::{LabelText, Screen, Widgets};

pub struct Digital {
    widgets: Widgets,
    status: StatusBar,
    time: WidgetId,
    meridiem: WidgetId,
    date: WidgetId,
    steps: WidgetId,

    minutes: ChangeCell<u64>,
    days: ChangeCell<u64>,
    step_count: ChangeCell<u32>,
}

impl ScreenTraits<WatchFace> for Digital {
    const ID: WatchFace = WatchFace::Digital;
    const NAME: &'static str = "Digital";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        let mut face = Self {
            status: StatusBar::create(&mut widgets, surface, 0),
            time: widgets.label(surface, 3, 8),
            meridiem: widgets.label(surface, 3, 14),
            date: widgets.label(surface, 5, 3),
            steps: widgets.label(surface, 7, 0),
            widgets,
            minutes: ChangeCell::new(),
            days: ChangeCell::new(),
            step_count: ChangeCell::new(),
        };
        face.refresh(deps, surface);
        face
    }
}

impl Screen for Digital {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.status.refresh(deps, surface);

        self.minutes.set(deps.clock.timestamp() / 60);
        if self.minutes.is_updated() {
            let (hour, suffix) = display_hour(deps.clock.hours(), deps.settings.clock_type());
            let mut text = LabelText::new();
            let _ = write!(text, "{:02}:{:02}", hour, deps.clock.minutes());
            surface.set_text(self.time, &text);
            surface.set_text(self.meridiem, suffix.unwrap_or(""));

            self.days.set(deps.clock.days());
            if self.days.is_updated() {
                let mut text = LabelText::new();
                let _ = write!(
                    text,
                    "{} {:02} {} {}",
                    deps.clock.day_of_week().short_name_upper(),
                    deps.clock.day(),
                    deps.clock.month().short_name_upper(),
                    deps.clock.year()
                );
                surface.set_text(self.date, &text);
            }
        }

        self.step_count.set(deps.motion.step_count());
        if self.step_count.is_updated() {
            let mut text = LabelText::new();
            let _ = write!(text, "{} steps", self.step_count.get());
            surface.set_text(self.steps, &text);
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
