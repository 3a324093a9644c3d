//! Launcher
//!
//! Menu over the user apps that are available on this device.

use heapless::Vec;
use wristlet_hal::{Input, Surface};

use super::menu::MAX_MENU_ITEMS;
use super::{Menu, MenuStyle, Navigation, Screen, Widgets};
use crate::controllers::Controllers;
use crate::registry::{AppScreen, Apps, ScreenTraits, USER_APPS};

pub struct Launcher {
    widgets: Widgets,
    menu: Menu,
    apps: Vec<Apps, MAX_MENU_ITEMS>,
}

impl ScreenTraits<Apps> for Launcher {
    const ID: Apps = Apps::Launcher;
    const NAME: &'static str = "Launcher";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "====== APPS ======");

        let mut menu = Menu::new(MenuStyle::Plain, 1);
        let mut apps = Vec::new();
        for app in USER_APPS.available::<AppScreen>(deps.storage) {
            if apps.push(app).is_err() {
                break;
            }
            menu.push(&mut widgets, surface, app.name());
        }

        let mut launcher = Self {
            widgets,
            menu,
            apps,
        };
        launcher.refresh(deps, surface);
        launcher
    }
}

impl Screen for Launcher {
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
        match self.menu.on_input(input).and_then(|index| self.apps.get(index)) {
            Some(app) => Navigation::Open(*app),
            None => Navigation::Stay,
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
    fn test_lists_available_apps() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut launcher = Launcher::create(&mut device.controllers(&mut settings), &mut surface);

        assert_eq!(surface.line(1).as_str(), "> Steps");
        assert_eq!(surface.line(2).as_str(), "  Stopwatch");
        // Weather needs its icon font
        assert_eq!(surface.line(3).as_str(), "  Notifications");

        let mut deps = device.controllers(&mut settings);
        launcher.on_input(Input::Next, &mut deps, &mut surface);
        assert_eq!(
            launcher.on_input(Input::Select, &mut deps, &mut surface),
            Navigation::Open(Apps::StopWatch)
        );
        assert_eq!(
            launcher.on_input(Input::Back, &mut deps, &mut surface),
            Navigation::Back
        );
    }
}
