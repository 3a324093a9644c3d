//! Radio connectivity trait

/// Connection state of the companion link
pub trait Connectivity {
    /// Check if a companion device is connected
    fn is_connected(&self) -> bool;

    /// Check if the radio is switched on
    fn is_radio_enabled(&self) -> bool;
}
