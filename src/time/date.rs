use core::fmt;

/// Timestamp every unparsable date collapses to
pub const EPOCH_SECONDS: i64 = 0;

/// Error returned by [`parse_date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParseError {
    /// Not three dash separated integers
    Format,
    /// Fields do not form a calendar date
    OutOfRange,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => f.write_str("expected YYYY-MM-DD"),
            Self::OutOfRange => f.write_str("date out of range"),
        }
    }
}

/// Parse a `YYYY-MM-DD` string into seconds since the Unix epoch at local
/// midnight.
pub fn parse_date(text: &str) -> Result<i64, DateParseError> {
    let mut parts = text.trim().splitn(3, '-');
    let mut field = || -> Result<i32, DateParseError> {
        parts
            .next()
            .and_then(|part| part.trim().parse::<i32>().ok())
            .ok_or(DateParseError::Format)
    };
    let year = field()?;
    let month = field()?;
    let day = field()?;

    let month = u32::try_from(month).map_err(|_| DateParseError::OutOfRange)?;
    let day = u32::try_from(day).map_err(|_| DateParseError::OutOfRange)?;

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp())
        .ok_or(DateParseError::OutOfRange)
}

/// Resolved D-Day range, both ends in epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: i64,
    pub target: i64,
}

impl DateRange {
    pub const fn new(start: i64, target: i64) -> Self {
        Self { start, target }
    }

    /// Parse both ends; a string that does not parse becomes the epoch.
    pub fn from_strings(start: &str, target: &str) -> Self {
        Self {
            start: parse_or_epoch(start),
            target: parse_or_epoch(target),
        }
    }

    /// Fraction of the range elapsed at `now`
    ///
    /// Before (or at) the start this is 0, at or after the target it is 1.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, now: i64) -> f32 {
        if now <= self.start {
            return 0.0;
        }
        if now >= self.target {
            return 1.0;
        }
        let total = self.target - self.start;
        if total <= 0 {
            return 1.0;
        }
        let elapsed = now - self.start;
        (elapsed as f64 / total as f64) as f32
    }

    /// Whole days left until the target, never negative
    pub fn days_until_target(&self, now: i64) -> i64 {
        ((self.target - now) / i64::from(super::SECONDS_PER_DAY)).max(0)
    }
}

fn parse_or_epoch(text: &str) -> i64 {
    match parse_date(text) {
        Ok(timestamp) => timestamp,
        Err(error) => {
            log::debug!("unparsable date {:?} ({}), using epoch", text, error);
            EPOCH_SECONDS
        }
    }
}
