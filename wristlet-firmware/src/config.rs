//! Compiled-in configuration
//!
//! Generated by the build script from `watch.toml`.

use wristlet_core::config::WatchConfig;
use wristlet_core::settings::ClockType;
use wristlet_core::WatchFace;

include!(concat!(env!("OUT_DIR"), "/watch_config.rs"));
