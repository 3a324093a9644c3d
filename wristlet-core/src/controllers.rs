//! Controller bundle
//!
//! Borrowed references to the long-lived controllers, threaded into screen
//! construction and every refresh. The bundle owns nothing; the firmware
//! (or a test) keeps the controllers alive and rebuilds the bundle for each
//! call.

use wristlet_hal::ResourceStore;

use crate::settings::Settings;
use crate::traits::{
    Battery, Connectivity, DateTimeSource, HeartRateSensor, MotionSensor, NotificationCounter,
    WeatherSource,
};

/// Dependencies handed to screens
pub struct Controllers<'a> {
    pub battery: &'a dyn Battery,
    pub ble: &'a dyn Connectivity,
    pub notifications: &'a dyn NotificationCounter,
    pub motion: &'a dyn MotionSensor,
    pub heart_rate: &'a dyn HeartRateSensor,
    pub clock: &'a dyn DateTimeSource,
    pub weather: &'a dyn WeatherSource,
    /// Only setting screens write here
    pub settings: &'a mut Settings,
    /// Resource presence, consulted through availability checks
    pub storage: &'a dyn ResourceStore,
}
