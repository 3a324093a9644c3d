//! Character-grid rendering for Wristlet
//!
//! This crate provides:
//! - `TextSurface`, a retained-mode label surface laid out on a character grid
//! - `DisplayBackend` trait for the panel that finally shows the grid
//!
//! # Architecture
//!
//! Screens in `wristlet-core` create and update labels through the
//! `wristlet_hal::Surface` trait. `TextSurface` keeps those labels in a fixed
//! slot table and tracks whether anything changed since the last
//! presentation. Once per refresh the firmware calls
//! [`TextSurface::present`], which composes the grid and pushes it through a
//! `DisplayBackend` only when the surface is dirty.
//!
//! The default geometry is 8 rows of 21 characters: a 128x64 OLED with a
//! 6x8 font.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod surface;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use surface::{TextSurface, LINE_CAPACITY, MAX_LABELS, SCREEN_COLS, SCREEN_ROWS};
