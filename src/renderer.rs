use embassy_time::Instant;

use crate::bounds::{DeviceLayout, RingBounds, bounded};
use crate::color::{BLACK, Rgb};
use crate::config::{AppConfig, Preset, RingConfig, RingMode, RingSource, SegmentMode};
use crate::effect::render_ring;
use crate::frame::PixelSink;
use crate::segment::{DecimalPoint, DigitReadout, SegmentSink};
use crate::session::{SessionKind, SessionSettings, SessionState};
use crate::time::{LocalTime, calculate_progress, remaining_readout};

/// Length of one blink phase of a waiting pomodoro
pub const BLINK_PHASE_MS: u64 = 500;

/// Why a tick drew nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Wall clock not synchronised yet
    NoClock,
    /// Configuration has no presets
    NoPreset,
}

/// What a rendered tick put on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub brightness: u8,
    /// Digit mode after overrides
    pub segment_mode: SegmentMode,
    pub readout: DigitReadout,
    /// Rings left dark for the blink cue
    pub rings_blanked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Skipped(SkipReason),
    Rendered(FrameSummary),
}

/// Turns configuration, time and session state into pixels and digits
///
/// `MAX_LEDS` bounds the scratch buffer the effects draw into; rings
/// reaching past it are cut short.
pub struct Renderer<const MAX_LEDS: usize> {
    layout: DeviceLayout,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    pub const fn new(layout: DeviceLayout) -> Self {
        Self {
            layout,
            frame_buffer: [BLACK; MAX_LEDS],
        }
    }

    pub const fn layout(&self) -> &DeviceLayout {
        &self.layout
    }

    /// Draw one tick
    ///
    /// Skips without touching either sink when the wall clock is unknown or
    /// there is no preset. Otherwise commits exactly one pixel frame and one
    /// digit frame.
    pub fn render<P, S>(
        &mut self,
        config: &AppConfig,
        time: Option<&LocalTime>,
        session: &SessionState,
        now: Instant,
        pixels: &mut P,
        segments: &mut S,
    ) -> RenderOutcome
    where
        P: PixelSink + ?Sized,
        S: SegmentSink + ?Sized,
    {
        let Some(time) = time else {
            log::debug!("render skipped: no clock");
            return RenderOutcome::Skipped(SkipReason::NoClock);
        };
        let Some(preset) = config.active_preset() else {
            log::debug!("render skipped: no preset");
            return RenderOutcome::Skipped(SkipReason::NoPreset);
        };
        let settings = SessionSettings::for_preset(preset);

        let brightness = config.target_brightness(time.hour);
        pixels.set_brightness(brightness);
        pixels.clear();

        let rings_blanked = blink_dark(preset, session, now);
        if !rings_blanked {
            let rings = self.layout.rings();
            for (ring, bounds) in preset.rings().into_iter().zip(rings) {
                let fill = ring_progress(ring, config, time, session, &settings, now);
                self.draw_ring(ring, fill, bounds, pixels);
            }
        }
        pixels.show();

        let segment_mode = resolve_segment_mode(preset, session);
        let readout = segment_readout(segment_mode, preset, config, time, session, &settings, now);
        segments.draw_number(readout.value, readout.decimal_point, false);

        RenderOutcome::Rendered(FrameSummary {
            brightness,
            segment_mode,
            readout,
            rings_blanked,
        })
    }

    fn draw_ring<P: PixelSink + ?Sized>(
        &mut self,
        ring: &RingConfig,
        fill: f32,
        bounds: RingBounds,
        pixels: &mut P,
    ) {
        let leds = bounded(&mut self.frame_buffer, bounds);
        render_ring(ring.color_mode(), fill, ring.palette(), leds);
        for (index, color) in leds.iter().enumerate() {
            pixels.set_pixel_color(bounds.offset + index, *color);
        }
    }
}

/// Fill fraction of one ring
pub fn ring_progress(
    ring: &RingConfig,
    config: &AppConfig,
    time: &LocalTime,
    session: &SessionState,
    settings: &SessionSettings,
    now: Instant,
) -> f32 {
    match ring.mode().source() {
        RingSource::Session(kind) => session.progress(kind, settings, now),
        RingSource::Time(unit) => {
            let range = ring
                .payload()
                .dday_index()
                .and_then(|index| config.dday_range(index));
            calculate_progress(unit, time, range.as_ref())
        }
    }
}

/// Whether the rings are dark this tick: a waiting pomodoro blinks them
pub fn blink_dark(preset: &Preset, session: &SessionState, now: Instant) -> bool {
    preset.has_ring_mode(RingMode::Pomodoro)
        && session.should_blink(SessionKind::Pomodoro)
        && (now.as_millis() / BLINK_PHASE_MS) % 2 == 1
}

/// Digit mode after overrides
///
/// A running timer takes the digits if a ring shows the timer, then a
/// running pomodoro likewise. Without an override `Auto` means the year.
pub fn resolve_segment_mode(preset: &Preset, session: &SessionState) -> SegmentMode {
    if preset.has_ring_mode(RingMode::Timer) && session.is_timer_running() {
        return SegmentMode::Timer;
    }
    if preset.has_ring_mode(RingMode::Pomodoro) && session.is_pomodoro_running() {
        return SegmentMode::Pomodoro;
    }
    match preset.segment().mode() {
        SegmentMode::Auto => SegmentMode::Year,
        mode => mode,
    }
}

fn segment_readout(
    mode: SegmentMode,
    preset: &Preset,
    config: &AppConfig,
    time: &LocalTime,
    session: &SessionState,
    settings: &SessionSettings,
    now: Instant,
) -> DigitReadout {
    let Some(unit) = mode.time_unit() else {
        let Some(kind) = mode.session_kind() else {
            return DigitReadout::default();
        };
        return DigitReadout::new(session.display_number(kind, settings, now), DecimalPoint::None);
    };
    let range = preset
        .segment()
        .payload()
        .dday_index()
        .and_then(|index| config.dday_range(index));
    remaining_readout(unit, time, range.as_ref())
}
