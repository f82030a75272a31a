use embassy_time::Instant;

use super::clock::SessionClock;
use super::{PomodoroSettings, remaining_display};

/// Phase of the work/rest cycle
///
/// The wait phases hold until the user acknowledges the end of the previous
/// phase: `Work -> WaitRest -> Rest -> WaitWork -> Work`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PomodoroPhase {
    #[default]
    Work,
    WaitRest,
    Rest,
    WaitWork,
}

impl PomodoroPhase {
    pub const fn is_waiting(self) -> bool {
        matches!(self, Self::WaitRest | Self::WaitWork)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::WaitRest => "wait-rest",
            Self::Rest => "rest",
            Self::WaitWork => "wait-work",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PomodoroSession {
    phase: PomodoroPhase,
    clock: SessionClock,
}

impl PomodoroSession {
    pub const fn new() -> Self {
        Self {
            phase: PomodoroPhase::Work,
            clock: SessionClock::new(),
        }
    }

    pub const fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    pub const fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Restart the current phase from zero without changing it
    pub fn reset(&mut self, now: Instant) {
        self.clock.reset(now);
        log::info!("pomodoro {} reset", self.phase.as_str());
    }

    /// Leave a wait phase, or pause/resume the running one
    pub fn advance(&mut self, now: Instant) {
        let next = match self.phase {
            PomodoroPhase::WaitRest => PomodoroPhase::Rest,
            PomodoroPhase::WaitWork => PomodoroPhase::Work,
            PomodoroPhase::Work | PomodoroPhase::Rest => {
                if self.clock.toggle(now) {
                    log::info!("pomodoro {} resumed", self.phase.as_str());
                } else {
                    log::info!("pomodoro {} paused", self.phase.as_str());
                }
                return;
            }
        };
        self.phase = next;
        self.clock.restart(now);
        log::info!("pomodoro {} started", next.as_str());
    }

    /// Move to the matching wait phase once the running phase is over
    pub fn update(&mut self, settings: &PomodoroSettings, now: Instant) {
        if !self.clock.is_running() {
            return;
        }
        let next = match self.phase {
            PomodoroPhase::Work => PomodoroPhase::WaitRest,
            PomodoroPhase::Rest => PomodoroPhase::WaitWork,
            PomodoroPhase::WaitRest | PomodoroPhase::WaitWork => return,
        };
        if self.clock.elapsed(now).as_millis() >= settings.phase_millis(self.phase) {
            self.clock.reset(now);
            self.phase = next;
            log::info!("pomodoro waiting: {}", next.as_str());
        }
    }

    /// Ring fill: full while waiting, elapsed fraction otherwise
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, settings: &PomodoroSettings, now: Instant) -> f32 {
        if self.phase.is_waiting() {
            return 1.0;
        }
        let duration = settings.phase_millis(self.phase);
        if duration == 0 {
            return 0.0;
        }
        let elapsed = self.clock.elapsed(now).as_millis();
        ((elapsed as f64 / duration as f64) as f32).min(1.0)
    }

    /// Remaining phase time, 0 while waiting
    pub fn display_number(&self, settings: &PomodoroSettings, now: Instant) -> i64 {
        if self.phase.is_waiting() {
            return 0;
        }
        let elapsed = self.clock.elapsed(now).as_millis();
        remaining_display(
            settings.phase_millis(self.phase),
            elapsed,
            settings.display_seconds,
        )
    }

    pub const fn should_blink(&self) -> bool {
        self.phase.is_waiting()
    }
}
