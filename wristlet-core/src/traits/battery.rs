//! Battery monitoring trait

/// Battery state as measured by the power subsystem
pub trait Battery {
    /// Remaining charge in percent (0-100)
    fn percent_remaining(&self) -> u8;

    /// Battery voltage in millivolts
    fn voltage_mv(&self) -> u16;

    /// Check if external power (USB/cradle) is connected
    fn is_power_present(&self) -> bool;

    /// Check if the battery is being charged
    fn is_charging(&self) -> bool;
}
