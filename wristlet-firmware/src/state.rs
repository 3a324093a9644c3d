//! Shared hardware readings
//!
//! Written by the sensor tasks, read by the board adapter on every refresh.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

static BATTERY_MV: AtomicU16 = AtomicU16::new(0);
static BATTERY_PERCENT: AtomicU8 = AtomicU8::new(0);
static POWER_PRESENT: AtomicBool = AtomicBool::new(false);

/// Latest battery sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryReading {
    pub voltage_mv: u16,
    pub percent: u8,
    pub power_present: bool,
}

impl BatteryReading {
    /// Charging while on external power and not yet full
    pub fn is_charging(&self) -> bool {
        self.power_present && self.percent < 100
    }
}

pub fn store_battery(reading: BatteryReading) {
    BATTERY_MV.store(reading.voltage_mv, Ordering::Relaxed);
    BATTERY_PERCENT.store(reading.percent, Ordering::Relaxed);
    POWER_PRESENT.store(reading.power_present, Ordering::Relaxed);
}

pub fn battery() -> BatteryReading {
    BatteryReading {
        voltage_mv: BATTERY_MV.load(Ordering::Relaxed),
        percent: BATTERY_PERCENT.load(Ordering::Relaxed),
        power_present: POWER_PRESENT.load(Ordering::Relaxed),
    }
}
