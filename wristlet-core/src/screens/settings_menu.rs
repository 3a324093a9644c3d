//! Settings menu

use wristlet_hal::{Input, Surface};

use super::{Menu, MenuStyle, Navigation, Screen, Widgets};
use crate::controllers::Controllers;
use crate::registry::{Apps, ScreenTraits, SETTING_APPS};

pub struct SettingsMenu {
    widgets: Widgets,
    menu: Menu,
}

impl ScreenTraits<Apps> for SettingsMenu {
    const ID: Apps = Apps::Settings;
    const NAME: &'static str = "Settings";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "==== SETTINGS ====");

        let mut menu = Menu::new(MenuStyle::Plain, 1);
        for app in SETTING_APPS {
            menu.push(&mut widgets, surface, app.name());
        }

        let mut screen = Self { widgets, menu };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for SettingsMenu {
    fn refresh(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.menu.refresh(surface);
    }

    fn on_input(
        &mut self,
        input: Input,
        _deps: &mut Controllers<'_>,
        _surface: &mut dyn Surface,
    ) -> Navigation {
        if input == Input::Back {
            return Navigation::Back;
        }
        match self.menu.on_input(input).and_then(|index| SETTING_APPS.get(index)) {
            Some(app) => Navigation::Open(app),
            None => Navigation::Stay,
        }
    }

    fn release(&mut self, _deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.widgets.release(surface);
    }
}
