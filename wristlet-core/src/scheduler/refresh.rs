//! Active screen slot and periodic refresh
//!
//! The host loop calls [`RefreshScheduler::tick`] every
//! `WatchConfig::refresh_period_ms` and forwards button presses to
//! [`RefreshScheduler::handle_input`]. At most one screen exists at a time:
//! switching releases the old screen before the registry constructs the
//! new one.

use wristlet_hal::{Input, Surface};

use crate::controllers::Controllers;
use crate::registry::{AppScreen, Apps, Registry};
use crate::screens::{Navigation, Screen};

/// Externally visible scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerState {
    /// No screen constructed yet
    Idle,
    /// A screen is receiving ticks
    Active(Apps),
}

/// Reasons a switch was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchError {
    /// The app's resources are missing from storage
    Unavailable(Apps),
}

/// Single-slot screen owner
pub struct RefreshScheduler {
    active: Option<AppScreen>,
    /// Refresh calls delivered to a screen
    refreshes: u32,
    /// Screens released by a switch
    teardowns: u32,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshScheduler {
    /// Create an idle scheduler
    pub const fn new() -> Self {
        Self {
            active: None,
            refreshes: 0,
            teardowns: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        match &self.active {
            None => SchedulerState::Idle,
            Some(screen) => SchedulerState::Active(screen.id()),
        }
    }

    /// Identifier of the active app
    pub fn active(&self) -> Option<Apps> {
        self.active.as_ref().map(Registry::id)
    }

    /// Refresh calls delivered since creation
    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }

    /// Screens torn down by switches since creation
    pub fn teardowns(&self) -> u32 {
        self.teardowns
    }

    /// Replace the active screen
    ///
    /// Availability is checked first; a refused switch leaves the current
    /// screen untouched. Otherwise the current screen is released and
    /// dropped before the new one is constructed.
    pub fn switch_to(
        &mut self,
        app: Apps,
        deps: &mut Controllers<'_>,
        surface: &mut dyn Surface,
    ) -> Result<(), SwitchError> {
        if !AppScreen::is_available(app, deps.storage) {
            #[cfg(feature = "defmt")]
            defmt::warn!("{} unavailable, staying on {}", app, self.active());
            return Err(SwitchError::Unavailable(app));
        }

        if let Some(mut previous) = self.active.take() {
            previous.release(deps, surface);
            self.teardowns = self.teardowns.wrapping_add(1);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Switching to {}", app);

        self.active = Some(AppScreen::construct(app, deps, surface));
        Ok(())
    }

    /// Refresh the active screen
    ///
    /// Returns false when idle.
    pub fn tick(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface) -> bool {
        let Some(screen) = self.active.as_mut() else {
            return false;
        };
        screen.refresh(deps, surface);
        self.refreshes = self.refreshes.wrapping_add(1);
        true
    }

    /// Deliver a button press to the active screen and follow its navigation
    ///
    /// Returns the navigation the screen asked for. A refused switch is
    /// reported as an error with the current screen still active.
    pub fn handle_input(
        &mut self,
        input: Input,
        deps: &mut Controllers<'_>,
        surface: &mut dyn Surface,
    ) -> Result<Navigation, SwitchError> {
        let Some(screen) = self.active.as_mut() else {
            return Ok(Navigation::Stay);
        };

        let navigation = screen.on_input(input, deps, surface);
        match navigation {
            Navigation::Stay => {}
            Navigation::Open(app) => self.switch_to(app, deps, surface)?,
            Navigation::Back => {
                let current = screen.id();
                let target = current.return_app();
                if target != current {
                    self.switch_to(target, deps, surface)?;
                }
            }
        }
        Ok(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::WatchFace;
    use crate::settings::Settings;
    use crate::testing::FakeDevice;
    use wristlet_display::{TextSurface, SCREEN_ROWS};
    use wristlet_hal::ResourceList;

    #[test]
    fn test_idle_until_first_switch() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(!scheduler.tick(&mut device.controllers(&mut settings), &mut surface));

        scheduler
            .switch_to(Apps::Clock, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        assert_eq!(scheduler.state(), SchedulerState::Active(Apps::Clock));
        assert_eq!(scheduler.teardowns(), 0);
        assert!(scheduler.tick(&mut device.controllers(&mut settings), &mut surface));
        assert_eq!(scheduler.refreshes(), 1);
    }

    #[test]
    fn test_switch_releases_previous_widgets() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();

        scheduler
            .switch_to(Apps::Clock, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        scheduler
            .switch_to(Apps::SysInfo, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        assert_eq!(scheduler.teardowns(), 1);
        assert!(!surface.contains("steps"));
        assert!(surface.contains("SYSTEM INFO"));
    }

    #[test]
    fn test_unavailable_switch_keeps_screen() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(Apps::Steps, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        let live = surface.live_widgets();

        let result =
            scheduler.switch_to(Apps::Weather, &mut device.controllers(&mut settings), &mut surface);
        assert_eq!(result, Err(SwitchError::Unavailable(Apps::Weather)));
        assert_eq!(scheduler.active(), Some(Apps::Steps));
        assert_eq!(scheduler.teardowns(), 0);
        assert_eq!(surface.live_widgets(), live);
    }

    #[test]
    fn test_back_follows_return_app() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(Apps::Clock, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();

        let mut press = |scheduler: &mut RefreshScheduler, input| {
            scheduler.handle_input(input, &mut device.controllers(&mut settings), &mut surface)
        };

        assert_eq!(
            press(&mut scheduler, Input::Previous),
            Ok(Navigation::Open(Apps::Settings))
        );
        assert_eq!(
            press(&mut scheduler, Input::Select),
            Ok(Navigation::Open(Apps::SettingWatchFace))
        );
        assert_eq!(press(&mut scheduler, Input::Back), Ok(Navigation::Back));
        assert_eq!(scheduler.active(), Some(Apps::Settings));
        press(&mut scheduler, Input::Back).unwrap();
        assert_eq!(scheduler.active(), Some(Apps::Clock));

        // Back on the clock stays put
        assert_eq!(press(&mut scheduler, Input::Back), Ok(Navigation::Stay));
        assert_eq!(scheduler.active(), Some(Apps::Clock));
        assert_eq!(scheduler.teardowns(), 4);
    }

    #[test]
    fn test_refused_switch_leaves_surface_untouched() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(Apps::Launcher, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        let before = surface.clone();

        let result =
            scheduler.switch_to(Apps::Weather, &mut device.controllers(&mut settings), &mut surface);
        assert_eq!(result, Err(SwitchError::Unavailable(Apps::Weather)));
        assert_eq!(scheduler.state(), SchedulerState::Active(Apps::Launcher));
        for row in 0..SCREEN_ROWS as u8 {
            assert_eq!(surface.line(row), before.line(row));
        }
        assert_eq!(surface.created_count(), before.created_count());
    }

    #[test]
    fn test_refused_first_switch_stays_idle() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();

        let result =
            scheduler.switch_to(Apps::Weather, &mut device.controllers(&mut settings), &mut surface);
        assert!(result.is_err());
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(surface.live_widgets(), 0);
    }

    #[test]
    fn test_ticks_only_redraw_changes() {
        let mut device = FakeDevice::default();
        let mut settings = Settings::default();
        settings.set_watch_face(WatchFace::Terminal);
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(Apps::Clock, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        assert!(surface.contains("[TIME] 13:45:30"));

        surface.mark_clean();
        for _ in 0..10 {
            scheduler.tick(&mut device.controllers(&mut settings), &mut surface);
        }
        assert!(!surface.is_dirty());
        assert_eq!(scheduler.refreshes(), 10);

        device.steps = 42;
        scheduler.tick(&mut device.controllers(&mut settings), &mut surface);
        assert!(surface.is_dirty());
        assert!(surface.contains("[STEP] 42 steps"));
    }

    #[test]
    fn test_clock_falls_back_when_face_missing() {
        let device = FakeDevice {
            resources: ResourceList::empty(),
            ..FakeDevice::default()
        };
        let mut settings = Settings::default();
        settings.set_watch_face(WatchFace::CasioStyle);
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(Apps::Clock, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();

        // Digital face shows the year in its date row
        assert!(surface.contains("THU 29 FEB 2024"));
        assert_eq!(settings.watch_face(), WatchFace::CasioStyle);
    }

    #[test]
    fn test_navigation_round_trip() {
        let device = FakeDevice::all_resources();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(Apps::Clock, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();

        let inputs = [
            (Input::Select, Apps::Launcher),
            (Input::Next, Apps::Launcher),
            (Input::Next, Apps::Launcher),
            (Input::Select, Apps::Weather),
            (Input::Back, Apps::Launcher),
            (Input::Back, Apps::Clock),
        ];
        for (input, expected) in inputs {
            scheduler
                .handle_input(input, &mut device.controllers(&mut settings), &mut surface)
                .unwrap();
            assert_eq!(scheduler.active(), Some(expected));
        }
        assert_eq!(scheduler.teardowns(), 4);
    }

    #[test]
    fn test_setting_change_is_saved_on_exit() {
        let device = FakeDevice::default();
        let mut settings = Settings::default();
        let mut surface = TextSurface::new();
        let mut scheduler = RefreshScheduler::new();
        scheduler
            .switch_to(
                Apps::SettingTimeFormat,
                &mut device.controllers(&mut settings),
                &mut surface,
            )
            .unwrap();

        let nav = scheduler
            .handle_input(Input::Select, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        assert_eq!(nav, Navigation::Stay);
        assert!(!settings.take_pending_save());

        scheduler
            .handle_input(Input::Back, &mut device.controllers(&mut settings), &mut surface)
            .unwrap();
        assert_eq!(scheduler.active(), Some(Apps::Settings));
        assert!(settings.take_pending_save());
    }
}
