//! Controller abstraction traits
//!
//! These traits define the interface between the screens and the
//! subsystems that produce the data they show. Producers (ADC sampling,
//! radio stack, step counter, RTC) update asynchronously; every accessor
//! returns a plain snapshot taken at an unspecified but recent instant.

pub mod battery;
pub mod ble;
pub mod clock;
pub mod heart_rate;
pub mod motion;
pub mod notifications;
pub mod weather;

pub use battery::Battery;
pub use ble::Connectivity;
pub use clock::DateTimeSource;
pub use heart_rate::HeartRateSensor;
pub use motion::MotionSensor;
pub use notifications::NotificationCounter;
pub use weather::{Condition, Weather, WeatherSource};
