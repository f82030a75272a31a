mod tests {
    use chrono::NaiveDate;
    use embassy_time::Instant;
    use timetape_composer::bounds::DeviceLayout;
    use timetape_composer::color::{BLACK, Rgb, blend_colors};
    use timetape_composer::config::{
        AppConfig, ModePayload, Preset, RingConfig, RingMode, SegmentConfig, SegmentMode,
    };
    use timetape_composer::effect::{ColorMode, Palette};
    use timetape_composer::frame::PixelSink;
    use timetape_composer::renderer::{
        RenderOutcome, Renderer, SkipReason, resolve_segment_mode,
    };
    use timetape_composer::segment::{DecimalPoint, DigitReadout, SegmentFrame, SegmentSink};
    use timetape_composer::session::{Press, SessionKind, SessionSettings, SessionState};
    use timetape_composer::time::LocalTime;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[derive(Default)]
    struct MockPixels {
        pixels: Vec<Rgb>,
        brightness: u8,
        shows: usize,
    }

    impl MockPixels {
        fn new() -> Self {
            Self {
                pixels: vec![BLACK; 40],
                ..Self::default()
            }
        }
    }

    impl PixelSink for MockPixels {
        fn set_pixel_color(&mut self, index: usize, color: Rgb) {
            self.pixels[index] = color;
        }

        fn set_brightness(&mut self, brightness: u8) {
            self.brightness = brightness;
        }

        fn clear(&mut self) {
            self.pixels.fill(BLACK);
        }

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    #[derive(Default)]
    struct MockDigits {
        frames: Vec<SegmentFrame>,
    }

    impl SegmentSink for MockDigits {
        fn write_raw(&mut self, frame: SegmentFrame) {
            self.frames.push(frame);
        }
    }

    fn local(year: i32, month: u32, day: u32, hour: u32) -> LocalTime {
        let value = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .unwrap();
        LocalTime::from_naive(&value)
    }

    fn ring(mode: RingMode, payload: ModePayload) -> RingConfig {
        RingConfig::new(
            mode,
            ColorMode::Solid,
            Palette {
                fill: RED,
                fill2: BLUE,
                empty: BLACK,
            },
            payload,
        )
    }

    fn config_with(preset: Preset) -> AppConfig {
        let mut config = AppConfig::default();
        config.push_preset(preset).unwrap();
        config.set_current_preset(1);
        config
    }

    struct Harness {
        renderer: Renderer<40>,
        pixels: MockPixels,
        digits: MockDigits,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                renderer: Renderer::new(DeviceLayout::default()),
                pixels: MockPixels::new(),
                digits: MockDigits::default(),
            }
        }

        fn render(
            &mut self,
            config: &AppConfig,
            time: Option<&LocalTime>,
            session: &SessionState,
            now_ms: u64,
        ) -> RenderOutcome {
            self.renderer.render(
                config,
                time,
                session,
                Instant::from_millis(now_ms),
                &mut self.pixels,
                &mut self.digits,
            )
        }
    }

    fn summary(outcome: RenderOutcome) -> timetape_composer::renderer::FrameSummary {
        match outcome {
            RenderOutcome::Rendered(summary) => summary,
            RenderOutcome::Skipped(reason) => panic!("skipped: {reason:?}"),
        }
    }

    #[test]
    fn test_skip_without_clock() {
        let mut harness = Harness::new();
        let outcome = harness.render(&AppConfig::default(), None, &SessionState::new(), 0);
        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::NoClock));
        assert_eq!(harness.pixels.shows, 0);
        assert!(harness.digits.frames.is_empty());
    }

    #[test]
    fn test_skip_without_preset() {
        let mut harness = Harness::new();
        let time = local(2025, 4, 11, 12);
        let outcome = harness.render(&AppConfig::empty(), Some(&time), &SessionState::new(), 0);
        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::NoPreset));
        assert_eq!(harness.pixels.shows, 0);
        assert!(harness.digits.frames.is_empty());
    }

    #[test]
    fn test_factory_preset_frame() {
        let mut harness = Harness::new();
        let time = local(2025, 4, 11, 12);
        let config = AppConfig::default();
        let summary = summary(harness.render(&config, Some(&time), &SessionState::new(), 0));

        assert_eq!(summary.brightness, 50);
        assert_eq!(summary.segment_mode, SegmentMode::Year);
        assert_eq!(summary.readout, DigitReadout::new(265, DecimalPoint::None));
        assert!(!summary.rings_blanked);

        let pixels = &harness.pixels.pixels;
        assert_eq!(harness.pixels.brightness, 50);
        assert_eq!(harness.pixels.shows, 1);
        assert_eq!(&pixels[..4], &[RED; 4]);
        assert_eq!(&pixels[5..16], &[BLACK; 11]);
        // 100 / 365 of 24 pixels: six full, one partial
        assert_eq!(&pixels[16..22], &[BLUE; 6]);
        assert_eq!(pixels[22], blend_colors(BLACK, BLUE, 100.0 / 365.0 * 24.0 - 6.0));
        assert_eq!(pixels[39], BLACK);

        assert_eq!(
            harness.digits.frames,
            vec![SegmentFrame::encode(DigitReadout::new(265, DecimalPoint::None))]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut harness = Harness::new();
        let time = local(2025, 8, 20, 17);
        let config = AppConfig::default();
        let session = SessionState::new();

        harness.render(&config, Some(&time), &session, 1_234);
        let first = harness.pixels.pixels.clone();
        harness.render(&config, Some(&time), &session, 1_234);
        assert_eq!(harness.pixels.pixels, first);
        assert_eq!(harness.digits.frames[0], harness.digits.frames[1]);
    }

    #[test]
    fn test_night_brightness() {
        let mut harness = Harness::new();
        let mut config = AppConfig::default();
        config.night.enabled = true;

        let late = local(2025, 4, 11, 23);
        assert_eq!(summary(harness.render(&config, Some(&late), &SessionState::new(), 0)).brightness, 10);
        assert_eq!(harness.pixels.brightness, 10);

        let noon = local(2025, 4, 11, 12);
        assert_eq!(summary(harness.render(&config, Some(&noon), &SessionState::new(), 0)).brightness, 50);
    }

    #[test]
    fn test_running_timer_takes_the_digits() {
        let preset = Preset::new(
            ring(
                RingMode::Timer,
                ModePayload::Timer {
                    total_seconds: 120,
                    display_seconds: true,
                },
            ),
            ring(RingMode::Year, ModePayload::None),
            SegmentConfig::new(SegmentMode::Month, ModePayload::None),
        );
        let config = config_with(preset);
        let time = local(2025, 4, 11, 12);
        let mut session = SessionState::new();
        assert_eq!(resolve_segment_mode(&preset, &session), SegmentMode::Month);

        session.press(SessionKind::Timer, Press::Button2, Instant::from_millis(0));
        assert_eq!(resolve_segment_mode(&preset, &session), SegmentMode::Timer);

        let mut harness = Harness::new();
        let summary = summary(harness.render(&config, Some(&time), &session, 30_000));
        assert_eq!(summary.segment_mode, SegmentMode::Timer);
        assert_eq!(summary.readout.value, 90);
        // inner ring a quarter full
        assert_eq!(&harness.pixels.pixels[..4], &[RED; 4]);
        assert_eq!(harness.pixels.pixels[4], BLACK);
    }

    #[test]
    fn test_running_session_without_ring_does_not_override() {
        let mut session = SessionState::new();
        session.press(SessionKind::Timer, Press::Button2, Instant::from_millis(0));
        session.press(SessionKind::Pomodoro, Press::Button2, Instant::from_millis(0));

        let preset = Preset::new(
            ring(RingMode::Counter, ModePayload::None),
            ring(RingMode::Year, ModePayload::None),
            SegmentConfig::default(),
        );
        assert_eq!(resolve_segment_mode(&preset, &session), SegmentMode::Year);
    }

    #[test]
    fn test_running_pomodoro_takes_the_digits() {
        let preset = Preset::new(
            ring(RingMode::Year, ModePayload::None),
            ring(RingMode::Pomodoro, ModePayload::None),
            SegmentConfig::new(SegmentMode::Day, ModePayload::None),
        );
        let mut session = SessionState::new();
        assert_eq!(resolve_segment_mode(&preset, &session), SegmentMode::Day);
        session.press(SessionKind::Pomodoro, Press::Button2, Instant::from_millis(0));
        assert_eq!(resolve_segment_mode(&preset, &session), SegmentMode::Pomodoro);
    }

    #[test]
    fn test_waiting_pomodoro_blinks_rings_only() {
        let preset = Preset::new(
            ring(
                RingMode::Pomodoro,
                ModePayload::Pomodoro {
                    work_minutes: 0,
                    rest_minutes: 5,
                    display_seconds: false,
                },
            ),
            ring(RingMode::Year, ModePayload::None),
            SegmentConfig::new(SegmentMode::Pomodoro, ModePayload::None),
        );
        let config = config_with(preset);
        let time = local(2025, 4, 11, 12);
        let mut session = SessionState::new();
        session.press(SessionKind::Pomodoro, Press::Button2, Instant::from_millis(0));
        session.update(&SessionSettings::for_preset(&preset), Instant::from_millis(0));
        assert!(session.should_blink(SessionKind::Pomodoro));

        let mut harness = Harness::new();
        let dark = summary(harness.render(&config, Some(&time), &session, 500));
        assert!(dark.rings_blanked);
        assert!(harness.pixels.pixels.iter().all(|pixel| *pixel == BLACK));
        assert_eq!(harness.pixels.shows, 1);
        assert_eq!(dark.readout.value, 0);
        assert_eq!(harness.digits.frames.len(), 1);

        let lit = summary(harness.render(&config, Some(&time), &session, 1_000));
        assert!(!lit.rings_blanked);
        assert_eq!(&harness.pixels.pixels[..16], &[RED; 16]);
        assert_eq!(harness.digits.frames.len(), 2);
    }

    #[test]
    fn test_invalid_dday_index_renders_empty() {
        let preset = Preset::new(
            ring(RingMode::DDay, ModePayload::DDay { index: 9 }),
            ring(RingMode::Year, ModePayload::None),
            SegmentConfig::new(SegmentMode::DDay, ModePayload::DDay { index: 9 }),
        );
        let config = config_with(preset);
        let time = local(2025, 4, 11, 12);
        let mut harness = Harness::new();
        let summary = summary(harness.render(&config, Some(&time), &SessionState::new(), 0));

        assert_eq!(summary.segment_mode, SegmentMode::DDay);
        assert_eq!(summary.readout.value, 0);
        assert_eq!(&harness.pixels.pixels[..16], &[BLACK; 16]);
    }

    #[test]
    fn test_dday_ring_uses_configured_range() {
        let mut config = AppConfig::empty();
        config
            .push_dday(
                timetape_composer::config::DDay::new("Trip", "2025-04-01", "2025-04-21").unwrap(),
            )
            .unwrap();
        config
            .push_preset(Preset::new(
                ring(RingMode::DDay, ModePayload::DDay { index: 0 }),
                ring(RingMode::Year, ModePayload::None),
                SegmentConfig::new(SegmentMode::DDay, ModePayload::DDay { index: 0 }),
            ))
            .unwrap();
        let time = local(2025, 4, 11, 0);
        let mut harness = Harness::new();
        let summary = summary(harness.render(&config, Some(&time), &SessionState::new(), 0));

        assert_eq!(summary.readout.value, 10);
        assert_eq!(&harness.pixels.pixels[..8], &[RED; 8]);
        assert_eq!(&harness.pixels.pixels[8..16], &[BLACK; 8]);
    }
}
