//! User settings
//!
//! In-memory settings shared by the screens. Setting screens change values
//! while they are open and request a save when they are torn down; the
//! firmware decides what saving means.

use crate::config::WatchConfig;
use crate::registry::WatchFace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default daily step goal
pub const DEFAULT_STEPS_GOAL: u32 = 10_000;

/// Hour display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClockType {
    #[default]
    H24,
    H12,
}

/// Whether to vibrate when the companion disconnects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BleDisconnectAlert {
    #[default]
    Off,
    On,
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    clock_type: ClockType,
    watch_face: WatchFace,
    ble_disconnect_alert: BleDisconnectAlert,
    steps_goal: u32,
    /// A value changed since the last save request
    changed: bool,
    /// A save was requested and not yet taken by the firmware
    pending_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&WatchConfig::default())
    }
}

impl Settings {
    /// Create settings from the configured defaults
    pub fn from_config(config: &WatchConfig) -> Self {
        Self {
            clock_type: config.clock_type,
            watch_face: config.watch_face,
            ble_disconnect_alert: BleDisconnectAlert::Off,
            steps_goal: DEFAULT_STEPS_GOAL,
            changed: false,
            pending_save: false,
        }
    }

    pub fn clock_type(&self) -> ClockType {
        self.clock_type
    }

    pub fn set_clock_type(&mut self, clock_type: ClockType) {
        self.changed |= self.clock_type != clock_type;
        self.clock_type = clock_type;
    }

    pub fn watch_face(&self) -> WatchFace {
        self.watch_face
    }

    pub fn set_watch_face(&mut self, face: WatchFace) {
        self.changed |= self.watch_face != face;
        self.watch_face = face;
    }

    pub fn ble_disconnect_alert(&self) -> BleDisconnectAlert {
        self.ble_disconnect_alert
    }

    pub fn set_ble_disconnect_alert(&mut self, option: BleDisconnectAlert) {
        self.changed |= self.ble_disconnect_alert != option;
        self.ble_disconnect_alert = option;
    }

    pub fn steps_goal(&self) -> u32 {
        self.steps_goal
    }

    pub fn set_steps_goal(&mut self, goal: u32) {
        self.changed |= self.steps_goal != goal;
        self.steps_goal = goal;
    }

    /// Check if a value changed since the last save request
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Request a save if anything changed
    pub fn request_save(&mut self) {
        if self.changed {
            self.pending_save = true;
            self.changed = false;
        }
    }

    /// Take a pending save request
    ///
    /// Returns true at most once per request.
    pub fn take_pending_save(&mut self) -> bool {
        core::mem::take(&mut self.pending_save)
    }
}
