//! Fallback screen shown when something went wrong at boot

use wristlet_hal::Surface;

use super::{Screen, Widgets};
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};

pub struct ErrorScreen {
    widgets: Widgets,
}

impl ScreenTraits<Apps> for ErrorScreen {
    const ID: Apps = Apps::Error;
    const NAME: &'static str = "Error";

    fn create(_deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "====== ERROR ======");
        widgets.static_label(surface, 2, 0, "The system could not");
        widgets.static_label(surface, 3, 0, "start correctly.");
        widgets.static_label(surface, 5, 0, "Press BACK to go on.");
        Self { widgets }
    }
}

impl Screen for ErrorScreen {
    fn refresh(&mut self, _deps: &mut Controllers<'_>, _surface: &mut dyn Surface) {}

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
