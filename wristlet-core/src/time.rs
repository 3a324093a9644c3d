//! Calendar arithmetic
//!
//! The clock controller only keeps a seconds counter. Calendar fields are
//! derived from it on demand with the days-from-civil algorithm, so there
//! is no calendar state to keep consistent.

/// Seconds in one day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Month of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Month from its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        use Month::*;
        let month = match number {
            1 => January,
            2 => February,
            3 => March,
            4 => April,
            5 => May,
            6 => June,
            7 => July,
            8 => August,
            9 => September,
            10 => October,
            11 => November,
            12 => December,
            _ => return None,
        };
        Some(month)
    }

    /// 1-based month number
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Three-letter lower-case name ("jan")
    pub fn short_name_lower(self) -> &'static str {
        use Month::*;
        match self {
            January => "jan",
            February => "feb",
            March => "mar",
            April => "apr",
            May => "may",
            June => "jun",
            July => "jul",
            August => "aug",
            September => "sep",
            October => "oct",
            November => "nov",
            December => "dec",
        }
    }

    /// Three-letter upper-case name ("JAN")
    pub fn short_name_upper(self) -> &'static str {
        use Month::*;
        match self {
            January => "JAN",
            February => "FEB",
            March => "MAR",
            April => "APR",
            May => "MAY",
            June => "JUN",
            July => "JUL",
            August => "AUG",
            September => "SEP",
            October => "OCT",
            November => "NOV",
            December => "DEC",
        }
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Weekday for a count of days since 1970-01-01 (a Thursday)
    pub fn from_days(days: u64) -> Self {
        use DayOfWeek::*;
        match (days + 3) % 7 {
            0 => Monday,
            1 => Tuesday,
            2 => Wednesday,
            3 => Thursday,
            4 => Friday,
            5 => Saturday,
            _ => Sunday,
        }
    }

    /// Three-letter lower-case name ("mon")
    pub fn short_name_lower(self) -> &'static str {
        use DayOfWeek::*;
        match self {
            Monday => "mon",
            Tuesday => "tue",
            Wednesday => "wed",
            Thursday => "thu",
            Friday => "fri",
            Saturday => "sat",
            Sunday => "sun",
        }
    }

    /// Three-letter upper-case name ("MON")
    pub fn short_name_upper(self) -> &'static str {
        use DayOfWeek::*;
        match self {
            Monday => "MON",
            Tuesday => "TUE",
            Wednesday => "WED",
            Thursday => "THU",
            Friday => "FRI",
            Saturday => "SAT",
            Sunday => "SUN",
        }
    }
}

/// Broken-down local date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilDateTime {
    pub year: u16,
    pub month: Month,
    /// Day of month (1-31)
    pub day: u8,
    pub weekday: DayOfWeek,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilDateTime {
    /// Break down a count of seconds since 1970-01-01T00:00:00
    pub fn from_timestamp(timestamp: u64) -> Self {
        let days = timestamp / SECONDS_PER_DAY;
        let secs_of_day = timestamp % SECONDS_PER_DAY;
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            // civil_from_days only yields 1..=12
            month: Month::from_number(month).unwrap_or(Month::January),
            day,
            weekday: DayOfWeek::from_days(days),
            hour: (secs_of_day / 3600) as u8,
            minute: (secs_of_day / 60 % 60) as u8,
            second: (secs_of_day % 60) as u8,
        }
    }
}

/// Convert days since 1970-01-01 into (year, month, day)
///
/// Howard Hinnant's algorithm, restricted to dates on or after the epoch.
pub fn civil_from_days(days: u64) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year as u16, month, day)
}

/// Convert a 24-hour value to 12-hour form
///
/// Returns the hour (1-12) and whether it is after noon.
pub fn to_12_hour(hour: u8) -> (u8, bool) {
    match hour {
        0 => (12, false),
        1..=11 => (hour, false),
        12 => (12, true),
        _ => (hour - 12, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let dt = CivilDateTime::from_timestamp(0);
        assert_eq!(dt.year, 1970);
        assert_eq!(dt.month, Month::January);
        assert_eq!(dt.day, 1);
        assert_eq!(dt.weekday, DayOfWeek::Thursday);
        assert_eq!((dt.hour, dt.minute, dt.second), (0, 0, 0));
    }

    #[test]
    fn test_known_date() {
        // 2024-02-29T13:45:30 (leap day, a Thursday)
        let dt = CivilDateTime::from_timestamp(1_709_214_330);
        assert_eq!(dt.year, 2024);
        assert_eq!(dt.month, Month::February);
        assert_eq!(dt.day, 29);
        assert_eq!(dt.weekday, DayOfWeek::Thursday);
        assert_eq!((dt.hour, dt.minute, dt.second), (13, 45, 30));
    }

    #[test]
    fn test_year_boundary() {
        // 2025-12-31T23:59:59 and one second later
        let last = CivilDateTime::from_timestamp(1_767_225_599);
        assert_eq!((last.year, last.month, last.day), (2025, Month::December, 31));
        let first = CivilDateTime::from_timestamp(1_767_225_600);
        assert_eq!((first.year, first.month, first.day), (2026, Month::January, 1));
        assert_eq!(first.weekday, DayOfWeek::Thursday);
    }

    #[test]
    fn test_12_hour() {
        assert_eq!(to_12_hour(0), (12, false));
        assert_eq!(to_12_hour(9), (9, false));
        assert_eq!(to_12_hour(12), (12, true));
        assert_eq!(to_12_hour(23), (11, true));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::from_number(3), Some(Month::March));
        assert_eq!(Month::from_number(13), None);
        assert_eq!(Month::October.number(), 10);
        assert_eq!(Month::May.short_name_lower(), "may");
        assert_eq!(DayOfWeek::Sunday.short_name_upper(), "SUN");
    }
}
