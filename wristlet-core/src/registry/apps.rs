//! Application identifiers and the app registry

use super::{screen_registry, IdSet, Registry};
use crate::screens::{
    BatteryInfo, Clock, ErrorScreen, Launcher, Notifications, SettingBleDisconnectAlert,
    SettingTimeFormat, SettingWatchFace, SettingsMenu, Steps, StopWatch, SysInfo, WeatherApp,
};

/// Selectable applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Apps {
    Launcher,
    Clock,
    SysInfo,
    BatteryInfo,
    Notifications,
    Steps,
    StopWatch,
    Weather,
    Settings,
    SettingWatchFace,
    SettingTimeFormat,
    SettingBleDisconnectAlert,
    Error,
}

/// Apps listed by the launcher, in menu order
pub const USER_APPS: IdSet<Apps> = IdSet::new(&[
    Apps::Steps,
    Apps::StopWatch,
    Apps::Weather,
    Apps::Notifications,
    Apps::BatteryInfo,
    Apps::SysInfo,
]);

/// Apps listed by the settings menu, in menu order
pub const SETTING_APPS: IdSet<Apps> = IdSet::new(&[
    Apps::SettingWatchFace,
    Apps::SettingTimeFormat,
    Apps::SettingBleDisconnectAlert,
]);

/// Every app identifier
pub const ALL_APPS: IdSet<Apps> = IdSet::new(&[
    Apps::Launcher,
    Apps::Clock,
    Apps::SysInfo,
    Apps::BatteryInfo,
    Apps::Notifications,
    Apps::Steps,
    Apps::StopWatch,
    Apps::Weather,
    Apps::Settings,
    Apps::SettingWatchFace,
    Apps::SettingTimeFormat,
    Apps::SettingBleDisconnectAlert,
    Apps::Error,
]);

impl Apps {
    /// App that Back leads to
    pub fn return_app(self) -> Apps {
        match self {
            Apps::SettingWatchFace | Apps::SettingTimeFormat | Apps::SettingBleDisconnectAlert => {
                Apps::Settings
            }
            Apps::StopWatch
            | Apps::Steps
            | Apps::Weather
            | Apps::Notifications
            | Apps::BatteryInfo
            | Apps::SysInfo => Apps::Launcher,
            Apps::Launcher | Apps::Clock | Apps::Settings | Apps::Error => Apps::Clock,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        AppScreen::name_of(self)
    }
}

screen_registry! {
    /// The active application screen
    pub enum AppScreen for Apps {
        Launcher => Launcher,
        Clock => Clock,
        SysInfo => SysInfo,
        BatteryInfo => BatteryInfo,
        Notifications => Notifications,
        Steps => Steps,
        StopWatch => StopWatch,
        Weather => WeatherApp,
        Settings => SettingsMenu,
        SettingWatchFace => SettingWatchFace,
        SettingTimeFormat => SettingTimeFormat,
        SettingBleDisconnectAlert => SettingBleDisconnectAlert,
        Error => ErrorScreen,
    }
}
