mod tests {
    use timetape_composer::config::{
        AppConfig, ConfigError, DDay, MAX_PRESETS, ModePayload, NightMode, Preset, RingConfig,
        RingMode, SegmentConfig, SegmentMode,
    };
    use timetape_composer::effect::{ColorMode, Palette};
    use timetape_composer::session::SessionKind;

    fn ring(mode: RingMode, payload: ModePayload) -> RingConfig {
        RingConfig::new(mode, ColorMode::Solid, Palette::default(), payload)
    }

    fn year() -> RingConfig {
        ring(RingMode::Year, ModePayload::None)
    }

    #[test]
    fn test_mismatched_payload_gets_mode_default() {
        let timer = ring(RingMode::Timer, ModePayload::Counter { target: 3 });
        assert_eq!(
            *timer.payload(),
            ModePayload::Timer {
                total_seconds: 60,
                display_seconds: false
            }
        );

        let plain = ring(RingMode::Month, ModePayload::DDay { index: 2 });
        assert_eq!(*plain.payload(), ModePayload::None);

        let pomodoro = ring(RingMode::Pomodoro, ModePayload::None);
        assert_eq!(
            *pomodoro.payload(),
            ModePayload::Pomodoro {
                work_minutes: 25,
                rest_minutes: 5,
                display_seconds: false
            }
        );
    }

    #[test]
    fn test_matching_payload_is_kept() {
        let counter = ring(RingMode::Counter, ModePayload::Counter { target: 0 });
        assert_eq!(*counter.payload(), ModePayload::Counter { target: 0 });
    }

    #[test]
    fn test_set_mode_renormalizes() {
        let mut config = year();
        config.set_mode(RingMode::DDay);
        assert_eq!(*config.payload(), ModePayload::DDay { index: 0 });

        config.set_payload(ModePayload::Counter { target: 9 });
        assert_eq!(*config.payload(), ModePayload::DDay { index: 0 });

        config.set_mode(RingMode::Counter);
        assert_eq!(*config.payload(), ModePayload::Counter { target: 100 });
    }

    #[test]
    fn test_segment_payload_only_for_dday() {
        let dday = SegmentConfig::new(SegmentMode::DDay, ModePayload::None);
        assert_eq!(*dday.payload(), ModePayload::DDay { index: 0 });

        let week = SegmentConfig::new(SegmentMode::Week, ModePayload::DDay { index: 1 });
        assert_eq!(*week.payload(), ModePayload::None);
    }

    #[test]
    fn test_only_one_interactive_ring() {
        let preset = Preset::new(
            ring(RingMode::Counter, ModePayload::Counter { target: 5 }),
            ring(RingMode::Timer, ModePayload::None),
            SegmentConfig::default(),
        );
        assert_eq!(preset.inner().mode(), RingMode::Counter);
        assert_eq!(preset.outer().mode(), RingMode::Year);
        assert_eq!(*preset.outer().payload(), ModePayload::None);
        assert_eq!(preset.active_session(), Some(SessionKind::Counter));
    }

    #[test]
    fn test_outer_ring_can_own_the_session() {
        let preset = Preset::new(
            year(),
            ring(RingMode::Pomodoro, ModePayload::None),
            SegmentConfig::new(SegmentMode::Pomodoro, ModePayload::None),
        );
        assert_eq!(preset.active_session(), Some(SessionKind::Pomodoro));
        assert_eq!(preset.segment().mode(), SegmentMode::Pomodoro);
    }

    #[test]
    fn test_segment_session_must_match_ring() {
        let preset = Preset::new(
            ring(RingMode::Counter, ModePayload::None),
            year(),
            SegmentConfig::new(SegmentMode::Timer, ModePayload::None),
        );
        assert_eq!(preset.segment().mode(), SegmentMode::Auto);

        let plain = Preset::new(
            year(),
            year(),
            SegmentConfig::new(SegmentMode::Counter, ModePayload::None),
        );
        assert_eq!(plain.segment().mode(), SegmentMode::Auto);
        assert_eq!(plain.active_session(), None);
    }

    #[test]
    fn test_factory_default() {
        let config = AppConfig::default();
        assert_eq!(config.presets().len(), 1);
        assert_eq!(config.ddays().len(), 1);
        assert_eq!(config.brightness, 50);
        assert_eq!(config.night, NightMode::default());
        assert!(!config.night.enabled);

        let preset = config.active_preset().unwrap();
        assert_eq!(preset.inner().mode(), RingMode::Year);
        assert_eq!(preset.outer().mode(), RingMode::Year);
        assert_eq!(preset.segment().mode(), SegmentMode::Year);
        assert_eq!(preset.inner().palette().fill.r, 255);
        assert_eq!(preset.outer().palette().fill.b, 255);
    }

    #[test]
    fn test_preset_capacity() {
        let mut config = AppConfig::empty();
        for _ in 0..MAX_PRESETS {
            assert!(config.push_preset(Preset::default()).is_ok());
        }
        assert_eq!(
            config.push_preset(Preset::default()),
            Err(ConfigError::TooManyPresets)
        );
    }

    #[test]
    fn test_dday_text_limits() {
        let long = "x".repeat(64);
        assert_eq!(
            DDay::new(&long, "2025-01-01", "2025-02-01"),
            Err(ConfigError::TextTooLong)
        );
        let dday = DDay::new("Launch", "2025-01-01", "2025-02-01").unwrap();
        assert_eq!(dday.name(), "Launch");
        assert_eq!(dday.range().target - dday.range().start, 31 * 86_400);
    }

    #[test]
    fn test_current_preset_falls_back_to_first() {
        let mut config = AppConfig::empty();
        assert!(config.active_preset().is_none());

        config.push_preset(Preset::default()).unwrap();
        config
            .push_preset(Preset::new(
                ring(RingMode::Day, ModePayload::None),
                year(),
                SegmentConfig::default(),
            ))
            .unwrap();
        config.set_current_preset(1);
        assert_eq!(config.current_preset_index(), 1);
        assert_eq!(config.active_preset().unwrap().inner().mode(), RingMode::Day);

        config.set_current_preset(7);
        assert_eq!(config.current_preset_index(), 0);
    }

    #[test]
    fn test_invalid_dday_index_has_no_range() {
        let config = AppConfig::default();
        assert!(config.dday_range(0).is_some());
        assert!(config.dday_range(5).is_none());
    }

    #[test]
    fn test_night_window() {
        let wrapping = NightMode {
            enabled: true,
            start_hour: 22,
            end_hour: 7,
            brightness: 10,
        };
        assert!(wrapping.contains_hour(22));
        assert!(wrapping.contains_hour(23));
        assert!(wrapping.contains_hour(3));
        assert!(!wrapping.contains_hour(7));
        assert!(!wrapping.contains_hour(12));

        let early = NightMode {
            start_hour: 1,
            end_hour: 5,
            ..wrapping
        };
        assert!(early.contains_hour(3));
        assert!(!early.contains_hour(5));
        assert!(!early.contains_hour(23));
    }

    #[test]
    fn test_target_brightness() {
        let mut config = AppConfig::default();
        assert_eq!(config.target_brightness(23), 50);

        config.night.enabled = true;
        assert_eq!(config.target_brightness(23), 10);
        assert_eq!(config.target_brightness(12), 50);
    }

    #[test]
    fn test_mode_codes() {
        assert_eq!(RingMode::from_raw(5), Some(RingMode::Quarter));
        assert_eq!(RingMode::from_raw(12), Some(RingMode::Pomodoro));
        assert_eq!(RingMode::from_raw(7), None);
        assert_eq!(SegmentMode::from_raw(0), Some(SegmentMode::Auto));
        assert_eq!(SegmentMode::Quarter.as_raw(), 6);
        assert_eq!(RingMode::parse_from_str("dday"), Some(RingMode::DDay));
        assert_eq!(SegmentMode::Timer.as_str(), "timer");
        assert!(RingMode::Counter.is_interactive());
        assert!(!RingMode::Quarter.is_interactive());
    }
}
