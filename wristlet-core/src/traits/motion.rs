//! Motion sensor trait

/// Step counter
pub trait MotionSensor {
    /// Steps counted today
    fn step_count(&self) -> u32;
}
