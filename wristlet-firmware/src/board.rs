//! Board adapter
//!
//! Implements the core's controller traits on top of the shared readings
//! and the embassy time driver. This board has no radio, no motion sensor
//! and no heart rate sensor, so those controllers report a disconnected,
//! idle watch.

use embassy_time::Instant;
use wristlet_core::traits::{
    Battery, Connectivity, DateTimeSource, HeartRateSensor, MotionSensor, NotificationCounter,
    Weather, WeatherSource,
};
use wristlet_core::{Controllers, Settings};
use wristlet_hal::{ResourceList, ResourceStore};

use crate::config::{BUILD_TIMESTAMP, INSTALLED_RESOURCES};
use crate::state;

/// Controllers backed by the RP2040 board
pub struct Board {
    resources: ResourceList<'static>,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            resources: ResourceList::new(INSTALLED_RESOURCES),
        }
    }

    /// Borrow every controller for one refresh or input
    pub fn controllers<'a>(&'a self, settings: &'a mut Settings) -> Controllers<'a> {
        Controllers {
            battery: self,
            ble: self,
            notifications: self,
            motion: self,
            heart_rate: self,
            clock: self,
            weather: self,
            settings,
            storage: self,
        }
    }
}

impl Battery for Board {
    fn percent_remaining(&self) -> u8 {
        state::battery().percent
    }

    fn voltage_mv(&self) -> u16 {
        state::battery().voltage_mv
    }

    fn is_power_present(&self) -> bool {
        state::battery().power_present
    }

    fn is_charging(&self) -> bool {
        state::battery().is_charging()
    }
}

impl Connectivity for Board {
    fn is_connected(&self) -> bool {
        false
    }

    fn is_radio_enabled(&self) -> bool {
        false
    }
}

impl NotificationCounter for Board {
    fn count(&self) -> usize {
        0
    }
}

impl MotionSensor for Board {
    fn step_count(&self) -> u32 {
        0
    }
}

impl HeartRateSensor for Board {
    fn bpm(&self) -> u8 {
        0
    }

    fn is_running(&self) -> bool {
        false
    }
}

impl DateTimeSource for Board {
    /// Wall time starts at the build timestamp; there is no RTC to set
    fn timestamp(&self) -> u64 {
        BUILD_TIMESTAMP + Instant::now().as_secs()
    }

    fn uptime_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

impl WeatherSource for Board {
    fn current(&self) -> Option<Weather> {
        None
    }
}

impl ResourceStore for Board {
    fn contains(&self, path: &str) -> bool {
        self.resources.contains(path)
    }
}
