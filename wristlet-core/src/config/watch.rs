//! Watch configuration
//!
//! Values that are fixed per device build: refresh cadence, first-boot
//! defaults for the user settings, and battery calibration.

use crate::registry::WatchFace;
use crate::settings::ClockType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default refresh period (matches the display's default refresh rate)
pub const DEFAULT_REFRESH_PERIOD_MS: u32 = 20;

/// Shortest accepted refresh period
pub const MIN_REFRESH_PERIOD_MS: u32 = 10;

/// Longest accepted refresh period
pub const MAX_REFRESH_PERIOD_MS: u32 = 1000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh period outside the accepted range
    RefreshPeriodOutOfRange,
    /// Battery calibration has empty voltage at or above full voltage
    InvalidBatteryCalibration,
}

/// Per-build watch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchConfig {
    /// Interval between refreshes of the active screen
    pub refresh_period_ms: u32,
    /// Hour format on first boot
    pub clock_type: ClockType,
    /// Watch face on first boot
    pub watch_face: WatchFace,
    /// Battery voltage reported as 0%
    pub battery_empty_mv: u16,
    /// Battery voltage reported as 100%
    pub battery_full_mv: u16,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            refresh_period_ms: DEFAULT_REFRESH_PERIOD_MS,
            clock_type: ClockType::H24,
            watch_face: WatchFace::Digital,
            battery_empty_mv: 3300,
            battery_full_mv: 4180,
        }
    }
}

impl WatchConfig {
    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_REFRESH_PERIOD_MS..=MAX_REFRESH_PERIOD_MS).contains(&self.refresh_period_ms) {
            return Err(ConfigError::RefreshPeriodOutOfRange);
        }
        if self.battery_empty_mv >= self.battery_full_mv {
            return Err(ConfigError::InvalidBatteryCalibration);
        }
        Ok(())
    }

    /// Convert a battery voltage to a charge percentage
    ///
    /// Linear between the calibration points, clamped to 0-100.
    pub fn battery_percent(&self, voltage_mv: u16) -> u8 {
        if voltage_mv <= self.battery_empty_mv {
            return 0;
        }
        if voltage_mv >= self.battery_full_mv {
            return 100;
        }
        let span = u32::from(self.battery_full_mv - self.battery_empty_mv);
        let above = u32::from(voltage_mv - self.battery_empty_mv);
        (above * 100 / span) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(WatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_refresh_period_range() {
        let config = WatchConfig {
            refresh_period_ms: 5,
            ..WatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RefreshPeriodOutOfRange)
        );

        let config = WatchConfig {
            refresh_period_ms: MAX_REFRESH_PERIOD_MS + 1,
            ..WatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RefreshPeriodOutOfRange)
        );
    }

    #[test]
    fn test_battery_calibration_order() {
        let config = WatchConfig {
            battery_empty_mv: 4200,
            battery_full_mv: 3300,
            ..WatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBatteryCalibration)
        );
    }

    #[test]
    fn test_battery_percent() {
        let config = WatchConfig::default();
        assert_eq!(config.battery_percent(3000), 0);
        assert_eq!(config.battery_percent(3300), 0);
        assert_eq!(config.battery_percent(3740), 50);
        assert_eq!(config.battery_percent(4180), 100);
        assert_eq!(config.battery_percent(4300), 100);
    }
}
