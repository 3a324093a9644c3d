//! Disconnect alert picker

use wristlet_hal::{Input, Surface};

use super::{Menu, MenuStyle, Navigation, Screen, Widgets};
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits};
use crate::settings::BleDisconnectAlert;

const OPTIONS: [(BleDisconnectAlert, &str); 2] = [
    (BleDisconnectAlert::Off, " never"),
    (BleDisconnectAlert::On, " always"),
];

pub struct SettingBleDisconnectAlert {
    widgets: Widgets,
    menu: Menu,
}

impl ScreenTraits<Apps> for SettingBleDisconnectAlert {
    const ID: Apps = Apps::SettingBleDisconnectAlert;
    const NAME: &'static str = "Disconnect Alert";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "BT Disconnect Alert");

        let mut menu = Menu::new(MenuStyle::Radio, 2);
        for (_, name) in OPTIONS {
            menu.push(&mut widgets, surface, name);
        }
        let current = OPTIONS
            .iter()
            .position(|(option, _)| *option == deps.settings.ble_disconnect_alert());
        menu.set_checked(current);

        let mut screen = Self { widgets, menu };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for SettingBleDisconnectAlert {
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
            if let Some((option, _)) = OPTIONS.get(index) {
                deps.settings.set_ble_disconnect_alert(*option);
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
