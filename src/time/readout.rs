//! Countdown numbers for the 3-digit display
//!
//! Each unit inverts its progress into "what is left", scaled so the
//! decimal point lands on a fixed digit:
//!
//! | Unit    | Shows                  | Decimal point |
//! |---------|------------------------|---------------|
//! | Year    | days left              | none          |
//! | Month   | days left × 10         | tens          |
//! | Week    | days left × 100        | hundreds      |
//! | Day     | hours left × 10        | tens          |
//! | D-Day   | whole days to target   | none          |
//! | Quarter | days left × 10         | tens          |

use super::{DateRange, LocalTime, TimeUnit, days_in_month, days_in_year, quarter_info};
use crate::segment::{DecimalPoint, DigitReadout};

/// Remaining-value readout for `unit` at `time`, clamped to `0..=999`
pub fn remaining_readout(
    unit: TimeUnit,
    time: &LocalTime,
    range: Option<&DateRange>,
) -> DigitReadout {
    match unit {
        TimeUnit::Year => {
            let left = i64::from(days_in_year(time.year)) - i64::from(time.day_of_year);
            DigitReadout::new(left, DecimalPoint::None)
        }
        TimeUnit::Month => {
            let passed = f32::from(time.day.saturating_sub(1)) + time.day_fraction_hm();
            let left = f32::from(days_in_month(time.month, time.year)) - passed;
            DigitReadout::scaled(left, 10.0, DecimalPoint::Tens)
        }
        TimeUnit::Week => {
            let passed = f32::from(time.iso_weekday()) + time.day_fraction_hm();
            DigitReadout::scaled(7.0 - passed, 100.0, DecimalPoint::Hundreds)
        }
        TimeUnit::Day => {
            let passed = f32::from(time.hour) + f32::from(time.minute) / 60.0;
            DigitReadout::scaled(24.0 - passed, 10.0, DecimalPoint::Tens)
        }
        TimeUnit::DDay => {
            let days = match (range, time.timestamp()) {
                (Some(range), Some(now)) => range.days_until_target(now),
                _ => 0,
            };
            DigitReadout::new(days, DecimalPoint::None)
        }
        TimeUnit::Quarter => {
            let quarter = quarter_info(time);
            let left = f32::from(quarter.total_days) - quarter.passed_days;
            DigitReadout::scaled(left, 10.0, DecimalPoint::Tens)
        }
    }
}
