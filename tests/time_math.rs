mod tests {
    use chrono::NaiveDate;
    use timetape_composer::segment::{DecimalPoint, DigitReadout};
    use timetape_composer::time::{
        DateParseError, DateRange, EPOCH_SECONDS, LocalTime, TimeUnit, calculate_progress,
        days_in_month, days_in_year, is_leap_year, parse_date, quarter_info, remaining_readout,
    };

    fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> LocalTime {
        let value = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .unwrap();
        LocalTime::from_naive(&value)
    }

    fn range(start: &str, target: &str) -> DateRange {
        DateRange::from_strings(start, target)
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2024), 29);
        assert_eq!(days_in_month(1, 2025), 28);
        assert_eq!(days_in_month(3, 2025), 30);
        assert_eq!(days_in_month(11, 2025), 31);
        // wraps to January
        assert_eq!(days_in_month(12, 2025), 31);
    }

    #[test]
    fn test_local_time_fields() {
        // Sunday
        let time = local(2025, 4, 13, 8, 30);
        assert_eq!(time.month, 3);
        assert_eq!(time.weekday, 0);
        assert_eq!(time.iso_weekday(), 6);
        assert_eq!(time.seconds_of_day(), 8 * 3600 + 30 * 60);
    }

    #[test]
    fn test_quarter_start() {
        let quarter = quarter_info(&local(2025, 10, 1, 0, 0));
        assert_eq!(quarter.total_days, 31 + 30 + 31);
        assert!(quarter.passed_days.abs() < 1e-6);
        assert!(quarter.progress().abs() < 1e-6);
    }

    #[test]
    fn test_quarter_first_in_leap_year() {
        let quarter = quarter_info(&local(2024, 3, 31, 12, 0));
        assert_eq!(quarter.total_days, 31 + 29 + 31);
        assert!((quarter.passed_days - 90.5).abs() < 1e-4);
    }

    #[test]
    fn test_progress_per_unit() {
        let start_of_year = local(2025, 1, 1, 0, 0);
        assert_eq!(calculate_progress(TimeUnit::Year, &start_of_year, None), 0.0);
        assert_eq!(calculate_progress(TimeUnit::Month, &start_of_year, None), 0.0);

        let noon = local(2025, 4, 16, 12, 0);
        assert!((calculate_progress(TimeUnit::Day, &noon, None) - 0.5).abs() < 1e-6);
        assert!((calculate_progress(TimeUnit::Month, &noon, None) - 0.5).abs() < 1e-6);

        // Monday midnight starts the week, Sunday noon is 6.5 days in
        let monday = local(2025, 4, 7, 0, 0);
        assert_eq!(calculate_progress(TimeUnit::Week, &monday, None), 0.0);
        let sunday = local(2025, 4, 13, 12, 0);
        let week = calculate_progress(TimeUnit::Week, &sunday, None);
        assert!((week - 6.5 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_dday_progress() {
        let dday = range("2025-01-01", "2025-01-11");
        let at = |day, hour| calculate_progress(TimeUnit::DDay, &local(2025, 1, day, hour, 0), Some(&dday));

        assert_eq!(at(1, 0), 0.0);
        assert!((at(6, 0) - 0.5).abs() < 1e-6);
        assert_eq!(at(11, 0), 1.0);
        assert_eq!(at(20, 0), 1.0);
    }

    #[test]
    fn test_dday_without_range() {
        let time = local(2025, 6, 1, 0, 0);
        assert_eq!(calculate_progress(TimeUnit::DDay, &time, None), 0.0);
    }

    #[test]
    fn test_dday_degenerate_range() {
        let dday = range("2025-03-01", "2025-02-01");
        let before = local(2025, 1, 1, 0, 0);
        let after = local(2025, 3, 2, 0, 0);
        assert_eq!(calculate_progress(TimeUnit::DDay, &before, Some(&dday)), 0.0);
        assert_eq!(calculate_progress(TimeUnit::DDay, &after, Some(&dday)), 1.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1970-01-02"), Ok(86_400));
        assert!(parse_date("2025-1-5").is_ok());
        assert_eq!(parse_date("soon"), Err(DateParseError::Format));
        assert_eq!(parse_date("2025-13-01"), Err(DateParseError::OutOfRange));
        assert_eq!(parse_date("2025-02-30"), Err(DateParseError::OutOfRange));
    }

    #[test]
    fn test_unparsable_dates_become_epoch() {
        let dday = range("not a date", "2025-01-01");
        assert_eq!(dday.start, EPOCH_SECONDS);
        assert!(dday.target > EPOCH_SECONDS);
    }

    #[test]
    fn test_days_until_target() {
        let dday = range("2025-01-01", "2025-01-11");
        let now = local(2025, 1, 1, 12, 0).timestamp().unwrap();
        assert_eq!(dday.days_until_target(now), 9);
        let later = local(2025, 2, 1, 0, 0).timestamp().unwrap();
        assert_eq!(dday.days_until_target(later), 0);
    }

    #[test]
    fn test_readouts() {
        let time = local(2025, 4, 11, 0, 0);
        assert_eq!(
            remaining_readout(TimeUnit::Year, &time, None),
            DigitReadout::new(265, DecimalPoint::None)
        );
        assert_eq!(
            remaining_readout(TimeUnit::Month, &time, None),
            DigitReadout::new(200, DecimalPoint::Tens)
        );

        let monday = local(2025, 4, 7, 0, 0);
        assert_eq!(
            remaining_readout(TimeUnit::Week, &monday, None),
            DigitReadout::new(700, DecimalPoint::Hundreds)
        );

        let half_past_noon = local(2025, 4, 7, 12, 30);
        assert_eq!(
            remaining_readout(TimeUnit::Day, &half_past_noon, None),
            DigitReadout::new(115, DecimalPoint::Tens)
        );

        let october = local(2025, 10, 1, 0, 0);
        assert_eq!(
            remaining_readout(TimeUnit::Quarter, &october, None),
            DigitReadout::new(920, DecimalPoint::Tens)
        );
    }

    #[test]
    fn test_dday_readout() {
        let dday = range("2025-01-01", "2025-01-11");
        let time = local(2025, 1, 1, 12, 0);
        assert_eq!(remaining_readout(TimeUnit::DDay, &time, Some(&dday)).value, 9);
        assert_eq!(remaining_readout(TimeUnit::DDay, &time, None).value, 0);

        let far = range("2025-01-01", "2030-01-01");
        assert_eq!(remaining_readout(TimeUnit::DDay, &time, Some(&far)).value, 999);
    }
}
