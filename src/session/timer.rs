use embassy_time::Instant;

use super::clock::SessionClock;
use super::{TimerSettings, remaining_display};

/// Count-up timer with a fixed target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSession {
    clock: SessionClock,
    finished: bool,
}

impl TimerSession {
    pub const fn new() -> Self {
        Self {
            clock: SessionClock::new(),
            finished: false,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Set once a running timer reaches its target, cleared by `reset`
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Stop, clear elapsed time and the finished flag
    pub fn reset(&mut self, now: Instant) {
        self.clock.reset(now);
        self.finished = false;
        log::info!("timer reset");
    }

    /// Start, pause or resume
    pub fn toggle(&mut self, now: Instant) {
        if self.clock.toggle(now) {
            log::info!("timer started");
        } else {
            log::info!("timer paused");
        }
    }

    pub fn update(&mut self, settings: &TimerSettings, now: Instant) {
        if self.finished || !self.clock.is_running() {
            return;
        }
        if self.clock.elapsed(now).as_millis() >= settings.total_millis() {
            self.finished = true;
            log::info!("timer finished");
        }
    }

    /// `elapsed / target`, capped at 1. A target of zero or less is already
    /// complete.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, settings: &TimerSettings, now: Instant) -> f32 {
        let total = settings.total_millis();
        if total == 0 {
            return 1.0;
        }
        let elapsed = self.clock.elapsed(now).as_millis();
        if elapsed >= total {
            return 1.0;
        }
        (elapsed as f64 / total as f64) as f32
    }

    /// Remaining time in whole minutes (or seconds), rounded up
    pub fn display_number(&self, settings: &TimerSettings, now: Instant) -> i64 {
        let elapsed = self.clock.elapsed(now).as_millis();
        remaining_display(settings.total_millis(), elapsed, settings.display_seconds)
    }
}
