//! User input abstractions
//!
//! The watch has four buttons. Whatever reads them (GPIO edge detection,
//! a touch controller translating gestures) reports one of these events.

/// Input event delivered to the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// Move to the next item / screen
    Next,
    /// Move to the previous item / screen
    Previous,
    /// Confirm the current item
    Select,
    /// Leave the current screen
    Back,
}
