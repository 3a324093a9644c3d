//! Board-agnostic application core for the Wristlet watch firmware
//!
//! This crate contains everything above the hardware:
//!
//! - Controller traits the screens read from (battery, radio, clock, ...)
//! - [`ChangeCell`](change::ChangeCell), the change detector every screen
//!   polls its data through
//! - Compile-time registries mapping app and watch face identifiers to
//!   their screen types
//! - The screens themselves
//! - The refresh scheduler owning the single active screen
//! - Settings and configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod change;
pub mod config;
pub mod controllers;
pub mod registry;
pub mod scheduler;
pub mod screens;
pub mod settings;
pub mod time;
pub mod traits;

#[cfg(test)]
mod testing;

pub use change::ChangeCell;
pub use controllers::Controllers;
pub use registry::{AppScreen, Apps, FaceScreen, Registry, ScreenTraits, WatchFace};
pub use scheduler::{RefreshScheduler, SchedulerState, SwitchError};
pub use screens::{Navigation, Screen};
pub use settings::Settings;
