//! Watch faces
//!
//! Faces are variations on the same data: time, date, battery,
//! connection, notifications and steps. Each keeps one change cell per
//! polled value and rewrites a label only when its cells moved.

pub mod casio;
pub mod digital;
pub mod infineat;
pub mod status;
pub mod terminal;

pub use casio::CasioStyle;
pub use digital::Digital;
pub use infineat::Infineat;
pub use status::StatusBar;
pub use terminal::Terminal;

use crate::settings::ClockType;
use crate::time::to_12_hour;

/// Hour to display and its AM/PM suffix, if any
pub fn display_hour(hour: u8, clock_type: ClockType) -> (u8, Option<&'static str>) {
    match clock_type {
        ClockType::H24 => (hour, None),
        ClockType::H12 => {
            let (hour, pm) = to_12_hour(hour);
            (hour, Some(if pm { "PM" } else { "AM" }))
        }
    }
}
