//! 12/24-hour picker

use wristlet_hal::{Input, Surface};

use super::{Menu, MenuStyle, Navigation, Screen, Widgets};
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};
use crate::settings::ClockType;

const OPTIONS: [(ClockType, &str); 2] = [(ClockType::H12, " 12-hour"), (ClockType::H24, " 24-hour")];

pub struct SettingTimeFormat {
    widgets: Widgets,
    menu: Menu,
}

impl ScreenTraits<Apps> for SettingTimeFormat {
    const ID: Apps = Apps::SettingTimeFormat;
    const NAME: &'static str = "Time format";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "=== TIME FORMAT ===");

        let mut menu = Menu::new(MenuStyle::Radio, 2);
        for (_, name) in OPTIONS {
            menu.push(&mut widgets, surface, name);
        }
        let current = OPTIONS
            .iter()
            .position(|(clock_type, _)| *clock_type == deps.settings.clock_type());
        menu.set_checked(current);

        let mut screen = Self { widgets, menu };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for SettingTimeFormat {
    fn refresh(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.menu.refresh(surface);
    }

    fn on_input(
        &mut self,
        input: Input,
        deps: &mut Controllers<'_>,
        _surface: &mut dyn Surface,
    ) -> Navigation {
        if input == Input::Back {
            return Navigation::Back;
        }
        if let Some(index) = self.menu.on_input(input) {
            if let Some((clock_type, _)) = OPTIONS.get(index) {
                deps.settings.set_clock_type(*clock_type);
                self.menu.set_checked(Some(index));
            }
        }
        Navigation::Stay
    }

    fn release(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
        deps.settings.request_save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::FakeDevice;
    use wristlet_display::TextSurface;

    #[test]
    fn test_switch_to_12_hour() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut screen =
            SettingTimeFormat::create(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(surface.line(2).as_str(), ">( ) 12-hour");
        assert_eq!(surface.line(3).as_str(), " (*) 24-hour");

        let mut deps = device.controllers(&mut settings);
        screen.on_input(Input::Select, &mut deps, &mut surface);
        screen.refresh(&mut deps, &mut surface);
        screen.release(&mut deps, &mut surface);
        assert_eq!(settings.clock_type(), ClockType::H12);
        assert!(settings.take_pending_save());
    }

    #[test]
    fn test_no_save_without_change() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut screen =
            SettingTimeFormat::create(&mut device.controllers(&mut settings), &mut surface);
        screen.release(&mut device.controllers(&mut settings), &mut surface);
        assert!(!settings.take_pending_save());
    }
}
