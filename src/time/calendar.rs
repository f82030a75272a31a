use super::LocalTime;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (0 = January) of `year`.
///
/// Months past December wrap around rather than fault.
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    let month = (month % 12) as usize;
    if month == 1 && is_leap_year(year) {
        return 29;
    }
    DAYS_IN_MONTH[month]
}

/// Number of days in `year`
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Length of the current quarter and how far into it we are
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuarterInfo {
    /// Total days in the quarter
    pub total_days: u16,
    /// Days passed since the quarter started, with hour/minute fraction
    pub passed_days: f32,
}

impl QuarterInfo {
    /// Fraction of the quarter that has passed
    pub fn progress(&self) -> f32 {
        if self.total_days == 0 {
            return 0.0;
        }
        (self.passed_days / f32::from(self.total_days)).clamp(0.0, 1.0)
    }
}

/// Quarter containing `time`; quarters start in January, April, July and
/// October.
pub fn quarter_info(time: &LocalTime) -> QuarterInfo {
    let start_month = (time.month % 12) / 3 * 3;

    let start_day_of_year: u16 = (0..start_month)
        .map(|month| u16::from(days_in_month(month, time.year)))
        .sum();
    let total_days: u16 = (start_month..start_month + 3)
        .map(|month| u16::from(days_in_month(month, time.year)))
        .sum();

    let whole_days = time.day_of_year.saturating_sub(start_day_of_year);
    QuarterInfo {
        total_days,
        passed_days: f32::from(whole_days) + time.day_fraction_hm(),
    }
}
