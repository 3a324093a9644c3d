//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod battery;
pub mod buttons;
pub mod tick;
pub mod ui;

pub use battery::battery_task;
pub use buttons::buttons_task;
pub use tick::tick_task;
pub use ui::ui_task;
