mod tests {
    use chrono::NaiveDate;
    use embassy_time::Instant;
    use timetape_composer::animation::Drained;
    use timetape_composer::bounds::DeviceLayout;
    use timetape_composer::color::{BLACK, Rgb};
    use timetape_composer::config::{
        AppConfig, ModePayload, Preset, RingConfig, RingMode, SegmentConfig,
    };
    use timetape_composer::controller::Controller;
    use timetape_composer::effect::{ColorMode, Palette};
    use timetape_composer::frame::PixelSink;
    use timetape_composer::input::{Button, PressLatch};
    use timetape_composer::renderer::RenderOutcome;
    use timetape_composer::segment::{SegmentFrame, SegmentSink};
    use timetape_composer::session::PomodoroPhase;
    use timetape_composer::time::LocalTime;

    struct Pixels(Vec<Rgb>);

    impl PixelSink for Pixels {
        fn set_pixel_color(&mut self, index: usize, color: Rgb) {
            self.0[index] = color;
        }

        fn set_brightness(&mut self, _brightness: u8) {}

        fn clear(&mut self) {
            self.0.fill(BLACK);
        }

        fn show(&mut self) {}
    }

    #[derive(Default)]
    struct Digits(Vec<SegmentFrame>);

    impl SegmentSink for Digits {
        fn write_raw(&mut self, frame: SegmentFrame) {
            self.0.push(frame);
        }
    }

    type TestController<'a> = Controller<40, Pixels, Digits, &'a PressLatch>;

    fn controller(latch: &PressLatch) -> TestController<'_> {
        Controller::new(
            Drained::no_animation(),
            DeviceLayout::default(),
            Pixels(vec![BLACK; 40]),
            Digits::default(),
            latch,
        )
    }

    fn ring(mode: RingMode) -> RingConfig {
        RingConfig::new(mode, ColorMode::Solid, Palette::default(), ModePayload::None)
    }

    fn noon() -> LocalTime {
        let value = NaiveDate::from_ymd_opt(2025, 4, 11)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap();
        LocalTime::from_naive(&value)
    }

    /// Preset 0 is the factory year preset, preset 1 has `inner` as inner ring
    fn config(inner: RingMode) -> AppConfig {
        let mut config = AppConfig::default();
        config
            .push_preset(Preset::new(
                ring(inner),
                ring(RingMode::Year),
                SegmentConfig::default(),
            ))
            .unwrap();
        config.set_current_preset(1);
        config
    }

    #[test]
    fn test_presses_reach_active_session() {
        let latch = PressLatch::new();
        let mut controller = controller(&latch);
        let config = config(RingMode::Counter);
        let time = noon();

        latch.record(Button::Two);
        controller.tick(Instant::from_millis(0), &config, Some(&time));
        latch.record(Button::Two);
        controller.tick(Instant::from_millis(100), &config, Some(&time));
        assert_eq!(controller.session().counter_value(), 2);

        latch.record(Button::One);
        latch.record(Button::Two);
        controller.tick(Instant::from_millis(200), &config, Some(&time));
        assert_eq!(controller.session().counter_value(), 0);
    }

    #[test]
    fn test_presses_without_session_are_dropped() {
        let latch = PressLatch::new();
        let mut controller = controller(&latch);
        let config = config(RingMode::Week);

        latch.record(Button::Two);
        controller.tick(Instant::from_millis(0), &config, Some(&noon()));
        assert!(!latch.take(Button::Two));
        assert_eq!(controller.session().counter_value(), 0);
    }

    #[test]
    fn test_switching_presets_keeps_sessions() {
        let latch = PressLatch::new();
        let mut controller = controller(&latch);
        let mut config = config(RingMode::Counter);
        let time = noon();

        latch.record(Button::Two);
        controller.tick(Instant::from_millis(0), &config, Some(&time));

        config.set_current_preset(0);
        controller.tick(Instant::from_millis(100), &config, Some(&time));
        config.set_current_preset(1);
        controller.tick(Instant::from_millis(200), &config, Some(&time));
        assert_eq!(controller.session().counter_value(), 1);
    }

    #[test]
    fn test_tick_updates_sessions_without_clock() {
        let latch = PressLatch::new();
        let mut controller = controller(&latch);
        let mut config = AppConfig::empty();
        config
            .push_preset(Preset::new(
                RingConfig::new(
                    RingMode::Pomodoro,
                    ColorMode::Solid,
                    Palette::default(),
                    ModePayload::Pomodoro {
                        work_minutes: 1,
                        rest_minutes: 1,
                        display_seconds: false,
                    },
                ),
                ring(RingMode::Year),
                SegmentConfig::default(),
            ))
            .unwrap();

        latch.record(Button::Two);
        let outcome = controller.tick(Instant::from_millis(0), &config, None);
        assert!(matches!(outcome, RenderOutcome::Skipped(_)));
        assert!(controller.session().is_pomodoro_running());

        controller.tick(Instant::from_millis(60_000), &config, None);
        assert_eq!(controller.session().pomodoro_phase(), PomodoroPhase::WaitRest);
        assert!(controller.segments().0.is_empty());
    }

    #[test]
    fn test_tick_draws_both_sinks() {
        let latch = PressLatch::new();
        let mut controller = controller(&latch);
        let outcome = controller.tick(Instant::from_millis(0), &AppConfig::default(), Some(&noon()));
        assert!(matches!(outcome, RenderOutcome::Rendered(_)));
        assert_eq!(controller.segments().0.len(), 1);
        assert_ne!(controller.pixels().0[0], BLACK);
    }
}
