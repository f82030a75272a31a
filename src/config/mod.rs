//! Display configuration snapshot
//!
//! The persistent store and its format live outside this crate. It hands
//! the render loop an [`AppConfig`] built from the types here, and these
//! types keep themselves consistent: a payload always matches its mode and
//! at most one ring runs an interactive session.

mod mode;
mod payload;
mod preset;

use core::fmt;

use heapless::Vec;

pub use mode::{RingMode, RingSource, SegmentMode};
pub use payload::{
    DEFAULT_COUNTER_TARGET, DEFAULT_REST_MINUTES, DEFAULT_TIMER_SECONDS,
    DEFAULT_WORK_MINUTES, ModePayload, PayloadKind,
};
pub use preset::{DATE_TEXT_LEN, DDAY_NAME_LEN, DDay, Preset, RingConfig, SegmentConfig};

use crate::color::{BLACK, rgb_from_u32};
use crate::effect::{ColorMode, Palette};
use crate::time::DateRange;

/// Maximum number of presets
pub const MAX_PRESETS: usize = 8;
/// Maximum number of D-Days
pub const MAX_DDAYS: usize = 16;

pub const DEFAULT_BRIGHTNESS: u8 = 50;
pub const DEFAULT_NIGHT_START_HOUR: u8 = 22;
pub const DEFAULT_NIGHT_END_HOUR: u8 = 7;
pub const DEFAULT_NIGHT_BRIGHTNESS: u8 = 10;

/// Error returned when a configuration does not fit its fixed capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    TooManyPresets,
    TooManyDDays,
    TextTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPresets => write!(f, "more than {MAX_PRESETS} presets"),
            Self::TooManyDDays => write!(f, "more than {MAX_DDAYS} d-days"),
            Self::TextTooLong => f.write_str("text does not fit"),
        }
    }
}

/// Reduced brightness during a daily window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NightMode {
    pub enabled: bool,
    /// First night hour (inclusive)
    pub start_hour: u8,
    /// First day hour (exclusive end of the window)
    pub end_hour: u8,
    pub brightness: u8,
}

impl Default for NightMode {
    fn default() -> Self {
        Self {
            enabled: false,
            start_hour: DEFAULT_NIGHT_START_HOUR,
            end_hour: DEFAULT_NIGHT_END_HOUR,
            brightness: DEFAULT_NIGHT_BRIGHTNESS,
        }
    }
}

impl NightMode {
    /// Whether `hour` falls inside the window.
    ///
    /// A window with `start_hour > end_hour` wraps past midnight.
    pub const fn contains_hour(&self, hour: u8) -> bool {
        if self.start_hour > self.end_hour {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            hour >= self.start_hour && hour < self.end_hour
        }
    }
}

/// Everything the render loop needs from the configuration store
#[derive(Clone, Debug)]
pub struct AppConfig {
    current_preset: usize,
    presets: Vec<Preset, MAX_PRESETS>,
    ddays: Vec<DDay, MAX_DDAYS>,
    /// Normal pixel brightness
    pub brightness: u8,
    pub night: NightMode,
}

impl Default for AppConfig {
    /// Factory configuration: both rings on the year, red inside, blue
    /// outside, digits counting down the days of the year.
    fn default() -> Self {
        let mut config = Self::empty();
        let inner = RingConfig::new(
            RingMode::Year,
            ColorMode::Solid,
            Palette {
                fill: rgb_from_u32(0xFF_0000),
                fill2: rgb_from_u32(0x00_FF00),
                empty: BLACK,
            },
            ModePayload::None,
        );
        let outer = RingConfig::new(
            RingMode::Year,
            ColorMode::Solid,
            Palette {
                fill: rgb_from_u32(0x00_00FF),
                fill2: rgb_from_u32(0xFF_FF00),
                empty: BLACK,
            },
            ModePayload::None,
        );
        let segment = SegmentConfig::new(SegmentMode::Year, ModePayload::None);

        let _ = config.presets.push(Preset::new(inner, outer, segment));
        if let Ok(dday) = DDay::new("New Year", "2025-01-01", "2026-01-01") {
            let _ = config.ddays.push(dday);
        }
        config
    }
}

impl AppConfig {
    /// Configuration with no presets and no D-Days
    pub const fn empty() -> Self {
        Self {
            current_preset: 0,
            presets: Vec::new(),
            ddays: Vec::new(),
            brightness: DEFAULT_BRIGHTNESS,
            night: NightMode {
                enabled: false,
                start_hour: DEFAULT_NIGHT_START_HOUR,
                end_hour: DEFAULT_NIGHT_END_HOUR,
                brightness: DEFAULT_NIGHT_BRIGHTNESS,
            },
        }
    }

    pub fn push_preset(&mut self, mut preset: Preset) -> Result<(), ConfigError> {
        preset.normalize();
        self.presets
            .push(preset)
            .map_err(|_| ConfigError::TooManyPresets)
    }

    pub fn push_dday(&mut self, dday: DDay) -> Result<(), ConfigError> {
        self.ddays.push(dday).map_err(|_| ConfigError::TooManyDDays)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn ddays(&self) -> &[DDay] {
        &self.ddays
    }

    pub fn dday(&self, index: usize) -> Option<&DDay> {
        self.ddays.get(index)
    }

    /// Date range of the D-Day at `index`; `None` if the index is invalid
    pub fn dday_range(&self, index: usize) -> Option<DateRange> {
        self.dday(index).map(DDay::range)
    }

    pub const fn current_preset_index(&self) -> usize {
        self.current_preset
    }

    /// Select the preset shown; out of range indices select the first one
    pub fn set_current_preset(&mut self, index: usize) {
        self.current_preset = if index < self.presets.len() { index } else { 0 };
    }

    /// Preset shown right now, `None` when there are no presets
    pub fn active_preset(&self) -> Option<&Preset> {
        self.presets
            .get(self.current_preset)
            .or_else(|| self.presets.first())
    }

    /// Pixel brightness for the given local hour
    pub const fn target_brightness(&self, hour: u8) -> u8 {
        if self.night.enabled && self.night.contains_hour(hour) {
            self.night.brightness
        } else {
            self.brightness
        }
    }

    /// Re-apply every normalization rule
    pub fn normalize(&mut self) {
        for preset in &mut self.presets {
            preset.normalize();
        }
        if self.current_preset >= self.presets.len() {
            self.current_preset = 0;
        }
    }
}
