//! Calendar arithmetic behind the rings and the digit readouts
//!
//! Everything here is a pure function of a broken-down local time (and an
//! optional date range). Time zone handling belongs to the clock source.

mod calendar;
mod date;
mod progress;
mod readout;

use chrono::{Datelike, NaiveDateTime, Timelike};
use embassy_time::Instant;

pub use calendar::{QuarterInfo, days_in_month, days_in_year, is_leap_year, quarter_info};
pub use date::{DateParseError, DateRange, EPOCH_SECONDS, parse_date};
pub use progress::calculate_progress;
pub use readout::remaining_readout;

/// Seconds in one calendar day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Calendar unit a ring or the digits can track
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    DDay,
    Quarter,
}

/// Broken-down local time, already adjusted to the device time zone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    /// Month of year, 0 = January
    pub month: u8,
    /// Day of month, starting at 1
    pub day: u8,
    /// Day of year, 0 = January 1st
    pub day_of_year: u16,
    /// Day of week, 0 = Sunday
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl LocalTime {
    /// Build from a naive (zone-less) chrono timestamp
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_naive(value: &NaiveDateTime) -> Self {
        Self {
            year: value.year(),
            month: value.month0() as u8,
            day: value.day() as u8,
            day_of_year: value.ordinal0() as u16,
            weekday: value.weekday().num_days_from_sunday() as u8,
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
        }
    }

    /// Weekday index with Monday = 0 and Sunday = 6
    pub const fn iso_weekday(&self) -> u8 {
        (self.weekday + 6) % 7
    }

    /// Seconds elapsed since local midnight
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Fraction of the current day that has passed, in hour and minute
    /// resolution
    pub fn day_fraction_hm(&self) -> f32 {
        f32::from(self.hour) / 24.0 + f32::from(self.minute) / 1440.0
    }

    /// Seconds since the Unix epoch, treating this local time as UTC.
    ///
    /// Date ranges are parsed the same way, so differences between the two
    /// are exact. Returns `None` when the fields do not form a valid date.
    pub fn timestamp(&self) -> Option<i64> {
        chrono::NaiveDate::from_ymd_opt(
            self.year,
            u32::from(self.month) + 1,
            u32::from(self.day),
        )?
        .and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .map(|value| value.and_utc().timestamp())
    }
}

/// Source of monotonic and wall-clock time
///
/// Implement this trait for the platform clock. `local_time` returns `None`
/// until the wall clock has been synchronised.
pub trait ClockSource {
    /// Monotonic time since boot
    fn now(&self) -> Instant;

    /// Current local time, if known
    fn local_time(&self) -> Option<LocalTime>;
}
