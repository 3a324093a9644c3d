//! Clock app
//!
//! Hosts the watch face chosen in settings. If that face cannot be
//! constructed on this device the Digital face is shown instead.

use wristlet_hal::{Input, Surface};

use super::{Navigation, Screen};
use crate::controllers::Controllers;
use crate::registry::{Apps, FaceScreen, Registry, ScreenTraits, WatchFace};

pub struct Clock {
    face: FaceScreen,
}

impl Clock {
    /// Face currently shown
    pub fn face(&self) -> WatchFace {
        self.face.id()
    }
}

impl ScreenTraits<Apps> for Clock {
    const ID: Apps = Apps::Clock;
    const NAME: &'static str = "Clock";

    fn create(deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> Self {
        let mut face = deps.settings.watch_face();
        if !FaceScreen::is_available(face, deps.storage) {
            face = WatchFace::Digital;
        }
        Self {
            face: FaceScreen::construct(face, deps, surface),
        }
    }
}

impl Screen for Clock {
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.face.refresh(deps, surface);
    }

    fn on_input(
        &mut self,
        input: Input,
        _deps: &mut Controllers<'_>,
        _surface: &mut dyn Surface,
    ) -> Navigation {
        match input {
            Input::Select => Navigation::Open(Apps::Launcher),
            Input::Next => Navigation::Open(Apps::Notifications),
            Input::Previous => Navigation::Open(Apps::Settings),
            Input::Back => Navigation::Stay,
        }
    }

    fn release(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) {
        self.face.release(deps, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::FakeDevice;
    use wristlet_display::TextSurface;
    use wristlet_hal::storage::paths;
    use wristlet_hal::ResourceList;

    #[test]
    fn test_falls_back_to_digital() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        settings.set_watch_face(WatchFace::Infineat);
        let mut surface = TextSurface::new();
        let clock = Clock::create(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(clock.face(), WatchFace::Digital);
    }

    #[test]
    fn test_shows_available_choice() {
        let device = FakeDevice {
            resources: ResourceList::new(&[paths::FONT_TEKO, paths::FONT_BEBAS]),
            ..FakeDevice::default()
        };
        let mut settings = Settings::default();
        settings.set_watch_face(WatchFace::Infineat);
        let mut surface = TextSurface::new();
        let clock = Clock::create(&mut device.controllers(&mut settings), &mut surface);
        assert_eq!(clock.face(), WatchFace::Infineat);
    }

    #[test]
    fn test_buttons_open_apps() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut clock = Clock::create(&mut device.controllers(&mut settings), &mut surface);
        let mut deps = device.controllers(&mut settings);
        assert_eq!(
            clock.on_input(Input::Select, &mut deps, &mut surface),
            Navigation::Open(Apps::Launcher)
        );
        assert_eq!(
            clock.on_input(Input::Next, &mut deps, &mut surface),
            Navigation::Open(Apps::Notifications)
        );
        assert_eq!(
            clock.on_input(Input::Previous, &mut deps, &mut surface),
            Navigation::Open(Apps::Settings)
        );
        assert_eq!(
            clock.on_input(Input::Back, &mut deps, &mut surface),
            Navigation::Stay
        );
    }
}
