use embassy_time::{Duration, Instant};

const ZERO: Duration = Duration::from_ticks(0);

/// Time a session has been running
///
/// While running this is `now - started_at + accumulated`, otherwise just
/// `accumulated`. A `now` earlier than `started_at` counts as no time.
pub fn elapsed(started_at: Instant, accumulated: Duration, running: bool, now: Instant) -> Duration {
    if running {
        now.checked_duration_since(started_at).unwrap_or(ZERO) + accumulated
    } else {
        accumulated
    }
}

/// Pausable stopwatch on the monotonic clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    running: bool,
    started_at: Instant,
    accumulated: Duration,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    pub const fn new() -> Self {
        Self {
            running: false,
            started_at: Instant::from_ticks(0),
            accumulated: ZERO,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Start or resume counting from `now`, keeping accumulated time
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.started_at = now;
    }

    /// Stop counting and fold the running stretch into the accumulated time
    pub fn pause(&mut self, now: Instant) {
        if self.running {
            self.accumulated = elapsed(self.started_at, self.accumulated, true, now);
            self.running = false;
        }
    }

    /// Pause if running, resume otherwise. Returns the new running state.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.running {
            self.pause(now);
        } else {
            self.start(now);
        }
        self.running
    }

    /// Stop and forget all elapsed time; `now` becomes the new baseline
    pub fn reset(&mut self, now: Instant) {
        self.running = false;
        self.accumulated = ZERO;
        self.started_at = now;
    }

    /// Clear accumulated time and start counting from `now`
    pub fn restart(&mut self, now: Instant) {
        self.accumulated = ZERO;
        self.start(now);
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        elapsed(self.started_at, self.accumulated, self.running, now)
    }
}
