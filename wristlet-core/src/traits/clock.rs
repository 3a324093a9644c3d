//! Date/time trait

use crate::time::{CivilDateTime, DayOfWeek, Month, SECONDS_PER_DAY};

/// Wall clock and uptime
///
/// Only [`timestamp`](DateTimeSource::timestamp) and
/// [`uptime_ms`](DateTimeSource::uptime_ms) are required. The calendar
/// accessors each take their own reading, so hour, minute and second read
/// in sequence may straddle a tick of the clock.
pub trait DateTimeSource {
    /// Local time in seconds since 1970-01-01T00:00:00
    fn timestamp(&self) -> u64;

    /// Milliseconds since boot
    fn uptime_ms(&self) -> u64;

    /// Current broken-down date and time
    fn now(&self) -> CivilDateTime {
        CivilDateTime::from_timestamp(self.timestamp())
    }

    /// Days since 1970-01-01
    fn days(&self) -> u64 {
        self.timestamp() / SECONDS_PER_DAY
    }

    /// Hour of day (0-23)
    fn hours(&self) -> u8 {
        self.now().hour
    }

    /// Minute of hour (0-59)
    fn minutes(&self) -> u8 {
        self.now().minute
    }

    /// Second of minute (0-59)
    fn seconds(&self) -> u8 {
        self.now().second
    }

    /// Day of month (1-31)
    fn day(&self) -> u8 {
        self.now().day
    }

    /// Month of year
    fn month(&self) -> Month {
        self.now().month
    }

    /// Calendar year
    fn year(&self) -> u16 {
        self.now().year
    }

    /// Day of week
    fn day_of_week(&self) -> DayOfWeek {
        self.now().weekday
    }
}
