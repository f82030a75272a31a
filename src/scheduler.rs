//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::config::AppConfig;
use crate::controller::Controller;
use crate::frame::PixelSink;
use crate::input::ButtonSource;
use crate::renderer::RenderOutcome;
use crate::segment::SegmentSink;
use crate::time::ClockSource;

/// Default tick period.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(100);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the controller drew.
    pub outcome: RenderOutcome,
}

/// Portable tick scheduler.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Reads the clock and runs the controller
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(controller);
///
/// loop {
///     let result = scheduler.tick(&clock, &config);
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<const MAX_LEDS: usize, P, S, B> {
    controller: Controller<MAX_LEDS, P, S, B>,
    next_tick: Option<Instant>,
    tick_duration: Duration,
}

impl<const MAX_LEDS: usize, P, S, B> TickScheduler<MAX_LEDS, P, S, B>
where
    P: PixelSink,
    S: SegmentSink,
    B: ButtonSource,
{
    /// Create a scheduler ticking every [`DEFAULT_TICK_DURATION`].
    pub fn new(controller: Controller<MAX_LEDS, P, S, B>) -> Self {
        Self::with_tick_duration(controller, DEFAULT_TICK_DURATION)
    }

    pub fn with_tick_duration(
        controller: Controller<MAX_LEDS, P, S, B>,
        tick_duration: Duration,
    ) -> Self {
        Self {
            controller,
            next_tick: None,
            tick_duration,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// If we have fallen more than two ticks behind, the schedule restarts
    /// from now instead of catching up with a burst of ticks.
    pub fn tick<C: ClockSource + ?Sized>(&mut self, clock: &C, config: &AppConfig) -> FrameResult {
        let now = clock.now();
        let max_drift = self.tick_duration * 2;
        let scheduled = match self.next_tick {
            Some(next) if now.checked_duration_since(next).is_none_or(|late| late <= max_drift) => {
                next
            }
            _ => now,
        };

        let time = clock.local_time();
        let outcome = self.controller.tick(now, config, time.as_ref());

        let next_tick = scheduled + self.tick_duration;
        self.next_tick = Some(next_tick);

        FrameResult {
            next_deadline: next_tick,
            sleep_duration: next_tick
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
            outcome,
        }
    }

    pub const fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub const fn controller(&self) -> &Controller<MAX_LEDS, P, S, B> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<MAX_LEDS, P, S, B> {
        &mut self.controller
    }
}
