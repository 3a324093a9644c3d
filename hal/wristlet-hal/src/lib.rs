//! Wristlet Hardware Abstraction Layer
//!
//! This crate defines the narrow interfaces the application core needs from
//! its external collaborators. Screens and registries are written against
//! these traits, so the same application code drives the character-grid
//! surface on the watch and the in-memory doubles used by host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (wristlet-core screens)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wristlet-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   wristlet-   │       │   wristlet-   │
//! │    display    │       │   firmware    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`surface::Surface`] - Widget creation and text updates
//! - [`input::Input`] - Button / gesture events
//! - [`storage::ResourceStore`] - Read-only presence checks for on-device resources

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod storage;
pub mod surface;

// Re-export key traits at crate root for convenience
pub use input::Input;
pub use storage::{ResourceList, ResourceStore};
pub use surface::{Surface, WidgetId};
