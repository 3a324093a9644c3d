//! Refresh scheduler
//!
//! Owns the single active screen and drives it from the host loop.

pub mod refresh;

pub use refresh::{RefreshScheduler, SchedulerState, SwitchError};
