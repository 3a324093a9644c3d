//! Notification summary

use core::fmt::Write;

use wristlet_hal::{Surface, WidgetId};

use super::{LabelText, Screen, Widgets};
use crate::change::ChangeCell;
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};

pub struct Notifications {
    widgets: Widgets,
    summary: WidgetId,
    count: ChangeCell<usize>,
}

impl ScreenTraits<Apps> for Notifications {
    const ID: Apps = Apps::Notifications;
    const NAME: &'static str = "Notifications";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "== NOTIFICATIONS ==");

        let mut screen = Self {
            summary: widgets.label(surface, 3, 0),
            widgets,
            count: ChangeCell::new(),
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for Notifications {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.count.set(deps.notifications.count());
        if self.count.is_updated() {
            let mut text = LabelText::new();
            match self.count.get() {
                0 => {
                    let _ = text.push_str("No notifications");
                }
                1 => {
                    let _ = text.push_str("1 new notification");
                }
                count => {
                    let _ = write!(text, "{} new notifications", count);
                }
            }
            surface.set_text(self.summary, &text);
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
    fn test_summary() {
        let mut device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut screen =
            Notifications::create(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.line(3).as_str(), "No notifications");

        device.notifications = 1;
        screen.refresh(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.line(3).as_str(), "1 new notification");

        device.notifications = 12;
        screen.refresh(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.line(3).as_str(), "12 new notifications");
    }
}
