//! Heart rate sensor trait

/// Optical heart rate measurement
pub trait HeartRateSensor {
    /// Latest measured rate in beats per minute
    fn bpm(&self) -> u8;

    /// Check if a measurement is in progress
    fn is_running(&self) -> bool;
}
