//! Screens
//!
//! A screen is created when its app is switched to, refreshed on every
//! scheduler tick, and released when the scheduler switches away. Screens
//! keep the widgets they create in a [`Widgets`] arena so that release
//! frees everything they own.

pub mod battery_info;
pub mod clock;
pub mod error;
pub mod faces;
pub mod launcher;
pub mod menu;
pub mod notifications;
pub mod setting_ble_alert;
pub mod setting_time_format;
pub mod setting_watch_face;
pub mod settings_menu;
pub mod steps;
pub mod stopwatch;
pub mod sys_info;
pub mod weather;

pub use battery_info::BatteryInfo;
pub use clock::Clock;
pub use error::ErrorScreen;
pub use launcher::Launcher;
pub use menu::{Menu, MenuStyle};
pub use notifications::Notifications;
pub use setting_ble_alert::SettingBleDisconnectAlert;
pub use setting_time_format::SettingTimeFormat;
pub use setting_watch_face::SettingWatchFace;
pub use settings_menu::SettingsMenu;
pub use steps::Steps;
pub use stopwatch::StopWatch;
pub use sys_info::SysInfo;
pub use weather::WeatherApp;

use heapless::{String, Vec};
use wristlet_hal::{Input, Surface, WidgetId};

use crate::controllers::Controllers;
use crate::registry::Apps;

/// Maximum widgets a single screen can own
pub const MAX_WIDGETS: usize = 16;

/// Text buffer for one label
pub type LabelText = String<32>;

/// What the scheduler should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Navigation {
    /// Keep the current screen
    Stay,
    /// Switch to another app
    Open(Apps),
    /// Switch to the current app's return app
    Back,
}

/// Screen entry points
pub trait Screen {
    /// Poll data sources and update widgets that changed
    fn refresh(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface);

    /// Handle a button press
    ///
    /// The default leaves on Back and ignores everything else.
    fn on_input(
        &mut self,
        input: Input,
        _deps: &mut Controllers<'_>,
        _surface: &mut dyn Surface,
    ) -> Navigation {
        match input {
            Input::Back => Navigation::Back,
            _ => Navigation::Stay,
        }
    }

    /// Destroy every widget the screen owns
    ///
    /// Called exactly once, before the next screen is constructed.
    fn release(&mut self, deps: &mut Controllers<'_>, surface: &mut dyn Surface);
}

/// Widgets owned by one screen
#[derive(Debug, Default)]
pub struct Widgets {
    ids: Vec<WidgetId, MAX_WIDGETS>,
}

impl Widgets {
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Create a label and take ownership of it
    ///
    /// If the arena is full the label is destroyed again and a detached
    /// handle is returned.
    pub fn label(&mut self, surface: &mut dyn Surface, row: u8, col: u8) -> WidgetId {
        let widget = surface.create_label(row, col);
        if widget.is_detached() {
            return widget;
        }
        match self.ids.push(widget) {
            Ok(()) => widget,
            Err(widget) => {
                surface.destroy(widget);
                WidgetId::DETACHED
            }
        }
    }

    /// Create a label with fixed text
    pub fn static_label(
        &mut self,
        surface: &mut dyn Surface,
        row: u8,
        col: u8,
        text: &str,
    ) -> WidgetId {
        let widget = self.label(surface, row, col);
        surface.set_text(widget, text);
        widget
    }

    /// Number of widgets owned
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Destroy every owned widget
    pub fn release(&mut self, surface: &mut dyn Surface) {
        while let Some(widget) = self.ids.pop() {
            surface.destroy(widget);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wristlet_display::TextSurface;

    #[test]
    fn test_release_destroys_owned_widgets() {
        let mut surface = TextSurface::new();
        let mut widgets = Widgets::new();
        widgets.static_label(&mut surface, 0, 0, "one");
        widgets.static_label(&mut surface, 1, 0, "two");
        assert_eq!(widgets.len(), 2);
        assert_eq!(surface.live_widgets(), 2);

        widgets.release(&mut surface);
        assert!(widgets.is_empty());
        assert_eq!(surface.live_widgets(), 0);
    }

    #[test]
    fn test_detached_labels_are_not_owned() {
        let mut surface = TextSurface::new();
        let mut widgets = Widgets::new();
        let label = widgets.label(&mut surface, 200, 0);
        assert!(label.is_detached());
        assert!(widgets.is_empty());
    }

    #[test]
    fn test_full_arena_gives_back_surface_slot() {
        let mut surface = TextSurface::new();
        let mut widgets = Widgets::new();
        for _ in 0..MAX_WIDGETS {
            assert!(!widgets.label(&mut surface, 0, 0).is_detached());
        }
        assert!(widgets.label(&mut surface, 0, 0).is_detached());
        assert_eq!(surface.live_widgets(), MAX_WIDGETS);
    }
}
