use super::{
    DateRange, LocalTime, SECONDS_PER_DAY, TimeUnit, days_in_month, days_in_year,
    quarter_info,
};

/// Fraction (0..=1) of `unit` that has passed at `time`
///
/// `range` is only consulted for [`TimeUnit::DDay`]; without one the
/// D-Day progress is 0.
#[allow(clippy::cast_precision_loss)]
pub fn calculate_progress(
    unit: TimeUnit,
    time: &LocalTime,
    range: Option<&DateRange>,
) -> f32 {
    let progress = match unit {
        TimeUnit::Year => {
            f32::from(time.day_of_year) / f32::from(days_in_year(time.year))
        }
        TimeUnit::Month => {
            let total = days_in_month(time.month, time.year);
            f32::from(time.day.saturating_sub(1)) / f32::from(total)
        }
        TimeUnit::Week => {
            let day_fraction = time.seconds_of_day() as f32 / SECONDS_PER_DAY as f32;
            (f32::from(time.iso_weekday()) + day_fraction) / 7.0
        }
        TimeUnit::Day => time.seconds_of_day() as f32 / SECONDS_PER_DAY as f32,
        TimeUnit::DDay => match (range, time.timestamp()) {
            (Some(range), Some(now)) => range.progress(now),
            _ => 0.0,
        },
        TimeUnit::Quarter => quarter_info(time).progress(),
    };

    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}
