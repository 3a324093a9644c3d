//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use wristlet_hal::Input;

/// Channel capacity for button events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Debounced button presses, consumed by the UI task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Input, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Refresh tick, carrying milliseconds since the tick task started
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();
