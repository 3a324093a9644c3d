//! Watch face picker
//!
//! Only faces whose resources are installed are offered.

use heapless::Vec;
use wristlet_hal::{Input, Surface};

use super::menu::MAX_MENU_ITEMS;
use super::{Menu, MenuStyle, Navigation, Screen, Widgets};
use crate::controllers::Controllers;
use crate::registry::{Apps, FaceScreen, ScreenTraits, WatchFace, WATCH_FACES};

pub struct SettingWatchFace {
    widgets: Widgets,
    menu: Menu,
    faces: Vec<WatchFace, MAX_MENU_ITEMS>,
}

impl ScreenTraits<Apps> for SettingWatchFace {
    const ID: Apps = Apps::SettingWatchFace;
    const NAME: &'static str = "Watch face";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut widgets = Widgets::new();
        widgets.static_label(surface, 0, 0, "=== WATCH FACE ===");

        let mut menu = Menu::new(MenuStyle::Radio, 1);
        let mut faces = Vec::new();
        for face in WATCH_FACES.available::<FaceScreen>(deps.storage) {
            if faces.push(face).is_err() {
                break;
            }
            menu.push(&mut widgets, surface, face.name());
        }

        let current = faces.iter().position(|face| *face == deps.settings.watch_face());
        menu.set_checked(current);
        if let Some(index) = current {
            menu.select(index);
        }

        let mut screen = Self {
            widgets,
            menu,
            faces,
        };
        screen.refresh(deps, surface);
        screen
    }
}

impl Screen for SettingWatchFace {
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
            if let Some(face) = self.faces.get(index) {
                deps.settings.set_watch_face(*face);
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
