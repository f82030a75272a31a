/// Default counter target
pub const DEFAULT_COUNTER_TARGET: i64 = 100;
/// Default timer length in seconds
pub const DEFAULT_TIMER_SECONDS: i64 = 60;
/// Default pomodoro work phase in minutes
pub const DEFAULT_WORK_MINUTES: i64 = 25;
/// Default pomodoro rest phase in minutes
pub const DEFAULT_REST_MINUTES: i64 = 5;

/// Which payload variant a mode expects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    None,
    DDay,
    Counter,
    Timer,
    Pomodoro,
}

/// Mode specific settings of a ring or the segment display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModePayload {
    #[default]
    None,
    /// Index into the D-Day list
    DDay { index: usize },
    /// Value at which the counter ring is full
    Counter { target: i64 },
    Timer {
        total_seconds: i64,
        /// Count down in seconds instead of minutes
        display_seconds: bool,
    },
    Pomodoro {
        work_minutes: i64,
        rest_minutes: i64,
        /// Count down in seconds instead of minutes
        display_seconds: bool,
    },
}

impl ModePayload {
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::None => PayloadKind::None,
            Self::DDay { .. } => PayloadKind::DDay,
            Self::Counter { .. } => PayloadKind::Counter,
            Self::Timer { .. } => PayloadKind::Timer,
            Self::Pomodoro { .. } => PayloadKind::Pomodoro,
        }
    }

    /// Payload a mode falls back to when its configured one does not fit
    pub const fn default_for(kind: PayloadKind) -> Self {
        match kind {
            PayloadKind::None => Self::None,
            PayloadKind::DDay => Self::DDay { index: 0 },
            PayloadKind::Counter => Self::Counter {
                target: DEFAULT_COUNTER_TARGET,
            },
            PayloadKind::Timer => Self::Timer {
                total_seconds: DEFAULT_TIMER_SECONDS,
                display_seconds: false,
            },
            PayloadKind::Pomodoro => Self::Pomodoro {
                work_minutes: DEFAULT_WORK_MINUTES,
                rest_minutes: DEFAULT_REST_MINUTES,
                display_seconds: false,
            },
        }
    }

    /// Coerce into a payload of `kind`, keeping `self` when it already
    /// matches. Returns the payload and whether it changed.
    pub(crate) fn coerce(self, kind: PayloadKind) -> (Self, bool) {
        if self.kind() == kind {
            (self, false)
        } else {
            (Self::default_for(kind), true)
        }
    }

    pub const fn dday_index(&self) -> Option<usize> {
        match self {
            Self::DDay { index } => Some(*index),
            _ => None,
        }
    }
}
