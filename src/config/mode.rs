use crate::session::SessionKind;
use crate::time::TimeUnit;

use super::PayloadKind;

const MODE_NAME_YEAR: &str = "year";
const MODE_NAME_MONTH: &str = "month";
const MODE_NAME_WEEK: &str = "week";
const MODE_NAME_DAY: &str = "day";
const MODE_NAME_DDAY: &str = "dday";
const MODE_NAME_QUARTER: &str = "quarter";
const MODE_NAME_COUNTER: &str = "counter";
const MODE_NAME_TIMER: &str = "timer";
const MODE_NAME_POMODORO: &str = "pomodoro";
const MODE_NAME_AUTO: &str = "auto";

const RING_MODE_ID_YEAR: u8 = 0;
const RING_MODE_ID_MONTH: u8 = 1;
const RING_MODE_ID_WEEK: u8 = 2;
const RING_MODE_ID_DAY: u8 = 3;
const RING_MODE_ID_DDAY: u8 = 4;
const RING_MODE_ID_QUARTER: u8 = 5;

const SEGMENT_MODE_ID_AUTO: u8 = 0;
const SEGMENT_MODE_ID_YEAR: u8 = 1;
const SEGMENT_MODE_ID_MONTH: u8 = 2;
const SEGMENT_MODE_ID_WEEK: u8 = 3;
const SEGMENT_MODE_ID_DAY: u8 = 4;
const SEGMENT_MODE_ID_DDAY: u8 = 5;
const SEGMENT_MODE_ID_QUARTER: u8 = 6;

// Interactive modes share their codes between rings and the segment display
const MODE_ID_COUNTER: u8 = 10;
const MODE_ID_TIMER: u8 = 11;
const MODE_ID_POMODORO: u8 = 12;

/// What drives a ring's fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingSource {
    Time(TimeUnit),
    Session(SessionKind),
}

/// What a ring shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum RingMode {
    #[default]
    Year = RING_MODE_ID_YEAR,
    Month = RING_MODE_ID_MONTH,
    Week = RING_MODE_ID_WEEK,
    Day = RING_MODE_ID_DAY,
    DDay = RING_MODE_ID_DDAY,
    Quarter = RING_MODE_ID_QUARTER,
    Counter = MODE_ID_COUNTER,
    Timer = MODE_ID_TIMER,
    Pomodoro = MODE_ID_POMODORO,
}

impl RingMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            RING_MODE_ID_YEAR => Self::Year,
            RING_MODE_ID_MONTH => Self::Month,
            RING_MODE_ID_WEEK => Self::Week,
            RING_MODE_ID_DAY => Self::Day,
            RING_MODE_ID_DDAY => Self::DDay,
            RING_MODE_ID_QUARTER => Self::Quarter,
            MODE_ID_COUNTER => Self::Counter,
            MODE_ID_TIMER => Self::Timer,
            MODE_ID_POMODORO => Self::Pomodoro,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => MODE_NAME_YEAR,
            Self::Month => MODE_NAME_MONTH,
            Self::Week => MODE_NAME_WEEK,
            Self::Day => MODE_NAME_DAY,
            Self::DDay => MODE_NAME_DDAY,
            Self::Quarter => MODE_NAME_QUARTER,
            Self::Counter => MODE_NAME_COUNTER,
            Self::Timer => MODE_NAME_TIMER,
            Self::Pomodoro => MODE_NAME_POMODORO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_YEAR => Some(Self::Year),
            MODE_NAME_MONTH => Some(Self::Month),
            MODE_NAME_WEEK => Some(Self::Week),
            MODE_NAME_DAY => Some(Self::Day),
            MODE_NAME_DDAY => Some(Self::DDay),
            MODE_NAME_QUARTER => Some(Self::Quarter),
            MODE_NAME_COUNTER => Some(Self::Counter),
            MODE_NAME_TIMER => Some(Self::Timer),
            MODE_NAME_POMODORO => Some(Self::Pomodoro),
            _ => None,
        }
    }

    pub const fn source(self) -> RingSource {
        match self {
            Self::Year => RingSource::Time(TimeUnit::Year),
            Self::Month => RingSource::Time(TimeUnit::Month),
            Self::Week => RingSource::Time(TimeUnit::Week),
            Self::Day => RingSource::Time(TimeUnit::Day),
            Self::DDay => RingSource::Time(TimeUnit::DDay),
            Self::Quarter => RingSource::Time(TimeUnit::Quarter),
            Self::Counter => RingSource::Session(SessionKind::Counter),
            Self::Timer => RingSource::Session(SessionKind::Timer),
            Self::Pomodoro => RingSource::Session(SessionKind::Pomodoro),
        }
    }

    /// Interactive session driving this ring, if any
    pub const fn session_kind(self) -> Option<SessionKind> {
        match self.source() {
            RingSource::Session(kind) => Some(kind),
            RingSource::Time(_) => None,
        }
    }

    pub const fn is_interactive(self) -> bool {
        self.session_kind().is_some()
    }

    /// Payload this mode carries
    pub const fn payload_kind(self) -> PayloadKind {
        match self {
            Self::DDay => PayloadKind::DDay,
            Self::Counter => PayloadKind::Counter,
            Self::Timer => PayloadKind::Timer,
            Self::Pomodoro => PayloadKind::Pomodoro,
            Self::Year | Self::Month | Self::Week | Self::Day | Self::Quarter => {
                PayloadKind::None
            }
        }
    }
}

impl From<SessionKind> for RingMode {
    fn from(kind: SessionKind) -> Self {
        match kind {
            SessionKind::Counter => Self::Counter,
            SessionKind::Timer => Self::Timer,
            SessionKind::Pomodoro => Self::Pomodoro,
        }
    }
}

/// What the 3-digit display shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SegmentMode {
    /// Follow the year countdown
    #[default]
    Auto = SEGMENT_MODE_ID_AUTO,
    Year = SEGMENT_MODE_ID_YEAR,
    Month = SEGMENT_MODE_ID_MONTH,
    Week = SEGMENT_MODE_ID_WEEK,
    Day = SEGMENT_MODE_ID_DAY,
    DDay = SEGMENT_MODE_ID_DDAY,
    Quarter = SEGMENT_MODE_ID_QUARTER,
    Counter = MODE_ID_COUNTER,
    Timer = MODE_ID_TIMER,
    Pomodoro = MODE_ID_POMODORO,
}

impl SegmentMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SEGMENT_MODE_ID_AUTO => Self::Auto,
            SEGMENT_MODE_ID_YEAR => Self::Year,
            SEGMENT_MODE_ID_MONTH => Self::Month,
            SEGMENT_MODE_ID_WEEK => Self::Week,
            SEGMENT_MODE_ID_DAY => Self::Day,
            SEGMENT_MODE_ID_DDAY => Self::DDay,
            SEGMENT_MODE_ID_QUARTER => Self::Quarter,
            MODE_ID_COUNTER => Self::Counter,
            MODE_ID_TIMER => Self::Timer,
            MODE_ID_POMODORO => Self::Pomodoro,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => MODE_NAME_AUTO,
            Self::Year => MODE_NAME_YEAR,
            Self::Month => MODE_NAME_MONTH,
            Self::Week => MODE_NAME_WEEK,
            Self::Day => MODE_NAME_DAY,
            Self::DDay => MODE_NAME_DDAY,
            Self::Quarter => MODE_NAME_QUARTER,
            Self::Counter => MODE_NAME_COUNTER,
            Self::Timer => MODE_NAME_TIMER,
            Self::Pomodoro => MODE_NAME_POMODORO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_AUTO => Some(Self::Auto),
            MODE_NAME_YEAR => Some(Self::Year),
            MODE_NAME_MONTH => Some(Self::Month),
            MODE_NAME_WEEK => Some(Self::Week),
            MODE_NAME_DAY => Some(Self::Day),
            MODE_NAME_DDAY => Some(Self::DDay),
            MODE_NAME_QUARTER => Some(Self::Quarter),
            MODE_NAME_COUNTER => Some(Self::Counter),
            MODE_NAME_TIMER => Some(Self::Timer),
            MODE_NAME_POMODORO => Some(Self::Pomodoro),
            _ => None,
        }
    }

    /// Calendar unit behind this mode; `Auto` resolves to the year
    pub const fn time_unit(self) -> Option<TimeUnit> {
        match self {
            Self::Auto | Self::Year => Some(TimeUnit::Year),
            Self::Month => Some(TimeUnit::Month),
            Self::Week => Some(TimeUnit::Week),
            Self::Day => Some(TimeUnit::Day),
            Self::DDay => Some(TimeUnit::DDay),
            Self::Quarter => Some(TimeUnit::Quarter),
            Self::Counter | Self::Timer | Self::Pomodoro => None,
        }
    }

    pub const fn session_kind(self) -> Option<SessionKind> {
        match self {
            Self::Counter => Some(SessionKind::Counter),
            Self::Timer => Some(SessionKind::Timer),
            Self::Pomodoro => Some(SessionKind::Pomodoro),
            _ => None,
        }
    }

    pub const fn payload_kind(self) -> PayloadKind {
        match self {
            Self::DDay => PayloadKind::DDay,
            _ => PayloadKind::None,
        }
    }
}

impl From<SessionKind> for SegmentMode {
    fn from(kind: SessionKind) -> Self {
        match kind {
            SessionKind::Counter => Self::Counter,
            SessionKind::Timer => Self::Timer,
            SessionKind::Pomodoro => Self::Pomodoro,
        }
    }
}
