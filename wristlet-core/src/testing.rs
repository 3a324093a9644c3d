//! Host-side controller doubles for unit tests

use wristlet_hal::storage::paths;
use wristlet_hal::{ResourceList, ResourceStore};

use crate::controllers::Controllers;
use crate::settings::Settings;
use crate::traits::{
    Battery, Connectivity, DateTimeSource, HeartRateSensor, MotionSensor, NotificationCounter,
    Weather, WeatherSource,
};

/// 2024-02-29T13:45:30, a Thursday
pub const LEAP_DAY: u64 = 1_709_214_330;

/// Every font the faces and apps may ask for
pub const ALL_RESOURCES: &[&str] = &[
    paths::FONT_DOTS_40,
    paths::FONT_7SEGMENT_40,
    paths::FONT_7SEGMENT_115,
    paths::FONT_TEKO,
    paths::FONT_BEBAS,
    paths::FONT_WEATHER_ICONS,
];

/// Every controller in one struct with writable readings
#[derive(Debug, Clone)]
pub struct FakeDevice {
    pub battery_percent: u8,
    pub battery_mv: u16,
    pub power_present: bool,
    pub charging: bool,
    pub connected: bool,
    pub radio_enabled: bool,
    pub notifications: usize,
    pub steps: u32,
    pub heart_rate_bpm: u8,
    pub heart_rate_running: bool,
    pub timestamp: u64,
    pub uptime_ms: u64,
    pub weather: Option<Weather>,
    pub resources: ResourceList<'static>,
}

impl Default for FakeDevice {
    fn default() -> Self {
        Self {
            battery_percent: 87,
            battery_mv: 3950,
            power_present: false,
            charging: false,
            connected: true,
            radio_enabled: true,
            notifications: 0,
            steps: 0,
            heart_rate_bpm: 0,
            heart_rate_running: false,
            timestamp: LEAP_DAY,
            uptime_ms: 0,
            weather: None,
            resources: ResourceList::empty(),
        }
    }
}

impl FakeDevice {
    /// Device with every known resource installed
    pub fn all_resources() -> Self {
        Self {
            resources: ResourceList::new(ALL_RESOURCES),
            ..Self::default()
        }
    }

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

impl Battery for FakeDevice {
    fn percent_remaining(&self) -> u8 {
        self.battery_percent
    }

    fn voltage_mv(&self) -> u16 {
        self.battery_mv
    }

    fn is_power_present(&self) -> bool {
        self.power_present
    }

    fn is_charging(&self) -> bool {
        self.charging
    }
}

impl Connectivity for FakeDevice {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn is_radio_enabled(&self) -> bool {
        self.radio_enabled
    }
}

impl NotificationCounter for FakeDevice {
    fn count(&self) -> usize {
        self.notifications
    }
}

impl MotionSensor for FakeDevice {
    fn step_count(&self) -> u32 {
        self.steps
    }
}

impl HeartRateSensor for FakeDevice {
    fn bpm(&self) -> u8 {
        self.heart_rate_bpm
    }

    fn is_running(&self) -> bool {
        self.heart_rate_running
    }
}

impl DateTimeSource for FakeDevice {
    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn uptime_ms(&self) -> u64 {
        self.uptime_ms
    }
}

impl WeatherSource for FakeDevice {
    fn current(&self) -> Option<Weather> {
        self.weather
    }
}

impl ResourceStore for FakeDevice {
    fn contains(&self, path: &str) -> bool {
        self.resources.contains(path)
    }
}
