//! Configuration types
//!
//! Board-agnostic configuration. The firmware's build script turns
//! `watch.toml` into a [`WatchConfig`] constant; host tools can load the
//! same structure through serde.

pub mod watch;

pub use watch::*;
