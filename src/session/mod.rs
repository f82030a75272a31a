//! Interactive sessions: counter, timer and pomodoro
//!
//! A single [`SessionState`] lives for the whole run and is shared by every
//! preset. Switching presets never resets it; only button presses and
//! [`SessionState::update`] change it.

mod clock;
mod counter;
mod pomodoro;
mod timer;

use embassy_time::Instant;

pub use clock::{SessionClock, elapsed};
pub use counter::CounterSession;
pub use pomodoro::{PomodoroPhase, PomodoroSession};
pub use timer::TimerSession;

use crate::config::{
    DEFAULT_COUNTER_TARGET, DEFAULT_REST_MINUTES, DEFAULT_TIMER_SECONDS, DEFAULT_WORK_MINUTES,
    ModePayload, Preset,
};

/// Interactive session type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    Counter,
    Timer,
    Pomodoro,
}

impl SessionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Timer => "timer",
            Self::Pomodoro => "pomodoro",
        }
    }
}

/// Button event delivered to the active session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    Button1,
    Button2,
    /// Both buttons pressed within the same poll
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSettings {
    pub total_seconds: i64,
    pub display_seconds: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            total_seconds: DEFAULT_TIMER_SECONDS,
            display_seconds: false,
        }
    }
}

impl TimerSettings {
    /// Target in milliseconds, 0 for a non-positive target
    pub fn total_millis(&self) -> u64 {
        seconds_to_millis(self.total_seconds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PomodoroSettings {
    pub work_minutes: i64,
    pub rest_minutes: i64,
    pub display_seconds: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            rest_minutes: DEFAULT_REST_MINUTES,
            display_seconds: false,
        }
    }
}

impl PomodoroSettings {
    /// Length of `phase` in milliseconds. Wait phases use the length of
    /// the phase they lead into.
    pub fn phase_millis(&self, phase: PomodoroPhase) -> u64 {
        let minutes = match phase {
            PomodoroPhase::Work | PomodoroPhase::WaitWork => self.work_minutes,
            PomodoroPhase::Rest | PomodoroPhase::WaitRest => self.rest_minutes,
        };
        seconds_to_millis(minutes.saturating_mul(60))
    }
}

/// Session parameters taken from the active preset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub counter_target: i64,
    pub timer: TimerSettings,
    pub pomodoro: PomodoroSettings,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            counter_target: DEFAULT_COUNTER_TARGET,
            timer: TimerSettings::default(),
            pomodoro: PomodoroSettings::default(),
        }
    }
}

impl SessionSettings {
    /// Collect settings from the interactive ring payloads of `preset`;
    /// sessions without a ring keep their defaults.
    pub fn for_preset(preset: &Preset) -> Self {
        let mut settings = Self::default();
        for ring in preset.rings() {
            match *ring.payload() {
                ModePayload::Counter { target } => settings.counter_target = target,
                ModePayload::Timer {
                    total_seconds,
                    display_seconds,
                } => {
                    settings.timer = TimerSettings {
                        total_seconds,
                        display_seconds,
                    };
                }
                ModePayload::Pomodoro {
                    work_minutes,
                    rest_minutes,
                    display_seconds,
                } => {
                    settings.pomodoro = PomodoroSettings {
                        work_minutes,
                        rest_minutes,
                        display_seconds,
                    };
                }
                ModePayload::None | ModePayload::DDay { .. } => {}
            }
        }
        settings
    }
}

/// State of all interactive sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    counter: CounterSession,
    timer: TimerSession,
    pomodoro: PomodoroSession,
}

impl SessionState {
    pub const fn new() -> Self {
        Self {
            counter: CounterSession::new(),
            timer: TimerSession::new(),
            pomodoro: PomodoroSession::new(),
        }
    }

    pub const fn counter(&self) -> &CounterSession {
        &self.counter
    }

    pub const fn timer(&self) -> &TimerSession {
        &self.timer
    }

    pub const fn pomodoro(&self) -> &PomodoroSession {
        &self.pomodoro
    }

    pub const fn counter_value(&self) -> u32 {
        self.counter.value()
    }

    pub const fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub const fn is_timer_finished(&self) -> bool {
        self.timer.is_finished()
    }

    pub const fn is_pomodoro_running(&self) -> bool {
        self.pomodoro.is_running()
    }

    pub const fn pomodoro_phase(&self) -> PomodoroPhase {
        self.pomodoro.phase()
    }

    pub fn reset_counter(&mut self) {
        self.counter.reset();
    }

    /// Apply a button press to the session of `kind`
    ///
    /// | Session  | Button 1          | Button 2                  | Both   |
    /// |----------|-------------------|---------------------------|--------|
    /// | Counter  | decrement         | increment                 | reset  |
    /// | Timer    | reset             | start / pause             | reset  |
    /// | Pomodoro | reset phase       | advance / pause / resume  | reset  |
    pub fn press(&mut self, kind: SessionKind, press: Press, now: Instant) {
        match (kind, press) {
            (SessionKind::Counter, Press::Button1) => self.counter.decrement(),
            (SessionKind::Counter, Press::Button2) => self.counter.increment(),
            (SessionKind::Counter, Press::Both) => self.counter.reset(),
            (SessionKind::Timer, Press::Button1 | Press::Both) => self.timer.reset(now),
            (SessionKind::Timer, Press::Button2) => self.timer.toggle(now),
            (SessionKind::Pomodoro, Press::Button1 | Press::Both) => self.pomodoro.reset(now),
            (SessionKind::Pomodoro, Press::Button2) => self.pomodoro.advance(now),
        }
    }

    /// Periodic tick: timer completion and pomodoro phase changes
    pub fn update(&mut self, settings: &SessionSettings, now: Instant) {
        self.timer.update(&settings.timer, now);
        self.pomodoro.update(&settings.pomodoro, now);
    }

    /// Ring fill fraction of the session, in `[0, 1]`
    pub fn progress(&self, kind: SessionKind, settings: &SessionSettings, now: Instant) -> f32 {
        match kind {
            SessionKind::Counter => self.counter.progress(settings.counter_target),
            SessionKind::Timer => self.timer.progress(&settings.timer, now),
            SessionKind::Pomodoro => self.pomodoro.progress(&settings.pomodoro, now),
        }
    }

    /// Number shown on the digits for the session
    pub fn display_number(
        &self,
        kind: SessionKind,
        settings: &SessionSettings,
        now: Instant,
    ) -> i64 {
        match kind {
            SessionKind::Counter => i64::from(self.counter.value()),
            SessionKind::Timer => self.timer.display_number(&settings.timer, now),
            SessionKind::Pomodoro => self.pomodoro.display_number(&settings.pomodoro, now),
        }
    }

    /// Whether rings showing `kind` should blink
    pub const fn should_blink(&self, kind: SessionKind) -> bool {
        match kind {
            SessionKind::Pomodoro => self.pomodoro.should_blink(),
            SessionKind::Counter | SessionKind::Timer => false,
        }
    }
}

fn seconds_to_millis(seconds: i64) -> u64 {
    u64::try_from(seconds).map_or(0, |seconds| seconds.saturating_mul(1000))
}

/// Remaining time rounded up to whole minutes, or whole seconds with
/// `in_seconds`. Never negative.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn remaining_display(total_ms: u64, elapsed_ms: u64, in_seconds: bool) -> i64 {
    let remaining = total_ms.saturating_sub(elapsed_ms);
    let unit = if in_seconds { 1_000 } else { 60_000 };
    remaining.div_ceil(unit).min(i64::MAX as u64) as i64
}
