use heapless::String;

use super::{ConfigError, ModePayload, RingMode, SegmentMode};
use crate::effect::{ColorMode, Palette};
use crate::session::SessionKind;
use crate::time::DateRange;

/// Maximum length of a D-Day name in bytes
pub const DDAY_NAME_LEN: usize = 32;
/// Maximum length of a D-Day date string in bytes
pub const DATE_TEXT_LEN: usize = 16;

/// Configuration of one LED ring
///
/// The payload always matches the mode; every constructor and setter
/// normalizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingConfig {
    mode: RingMode,
    color_mode: ColorMode,
    palette: Palette,
    payload: ModePayload,
}

impl RingConfig {
    pub fn new(
        mode: RingMode,
        color_mode: ColorMode,
        palette: Palette,
        payload: ModePayload,
    ) -> Self {
        let mut ring = Self {
            mode,
            color_mode,
            palette,
            payload,
        };
        ring.normalize();
        ring
    }

    pub const fn mode(&self) -> RingMode {
        self.mode
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn payload(&self) -> &ModePayload {
        &self.payload
    }

    /// Change the mode, replacing the payload if it no longer fits
    pub fn set_mode(&mut self, mode: RingMode) {
        self.mode = mode;
        self.normalize();
    }

    pub fn set_payload(&mut self, payload: ModePayload) {
        self.payload = payload;
        self.normalize();
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Coerce the payload to the mode's kind. Returns `true` if it changed.
    pub fn normalize(&mut self) -> bool {
        let (payload, changed) = self.payload.coerce(self.mode.payload_kind());
        if changed {
            log::warn!(
                "ring payload {:?} does not fit mode {}, using {:?}",
                self.payload,
                self.mode.as_str(),
                payload
            );
        }
        self.payload = payload;
        changed
    }
}

/// Configuration of the 3-digit display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentConfig {
    mode: SegmentMode,
    payload: ModePayload,
}

impl SegmentConfig {
    pub fn new(mode: SegmentMode, payload: ModePayload) -> Self {
        let mut segment = Self { mode, payload };
        segment.normalize();
        segment
    }

    pub const fn mode(&self) -> SegmentMode {
        self.mode
    }

    pub const fn payload(&self) -> &ModePayload {
        &self.payload
    }

    pub fn set_mode(&mut self, mode: SegmentMode) {
        self.mode = mode;
        self.normalize();
    }

    /// Only D-Day mode keeps a payload. Returns `true` if it changed.
    pub fn normalize(&mut self) -> bool {
        let (payload, changed) = self.payload.coerce(self.mode.payload_kind());
        self.payload = payload;
        changed
    }
}

/// One complete display setup: both rings and the digits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preset {
    inner: RingConfig,
    outer: RingConfig,
    segment: SegmentConfig,
}

impl Preset {
    pub fn new(inner: RingConfig, outer: RingConfig, segment: SegmentConfig) -> Self {
        let mut preset = Self {
            inner,
            outer,
            segment,
        };
        preset.normalize();
        preset
    }

    pub const fn inner(&self) -> &RingConfig {
        &self.inner
    }

    pub const fn outer(&self) -> &RingConfig {
        &self.outer
    }

    pub const fn segment(&self) -> &SegmentConfig {
        &self.segment
    }

    /// Inner ring first, then outer
    pub const fn rings(&self) -> [&RingConfig; 2] {
        [&self.inner, &self.outer]
    }

    /// Interactive session owning the buttons; the inner ring wins a tie
    pub fn active_session(&self) -> Option<SessionKind> {
        self.inner
            .mode()
            .session_kind()
            .or_else(|| self.outer.mode().session_kind())
    }

    /// Whether either ring shows `mode`
    pub fn has_ring_mode(&self, mode: RingMode) -> bool {
        self.inner.mode() == mode || self.outer.mode() == mode
    }

    /// Enforce the cross-field rules:
    ///
    /// - at most one interactive ring; the outer one is reset to the year
    /// - the digits may only show the session of the interactive ring
    /// - every payload matches its mode
    pub fn normalize(&mut self) {
        if self.inner.mode().is_interactive() && self.outer.mode().is_interactive() {
            log::warn!(
                "both rings interactive ({} / {}), resetting outer ring",
                self.inner.mode().as_str(),
                self.outer.mode().as_str()
            );
            self.outer.mode = RingMode::Year;
            self.outer.payload = ModePayload::None;
        }

        if let Some(kind) = self.segment.mode().session_kind() {
            if self.active_session() != Some(kind) {
                log::warn!(
                    "digit mode {} has no matching ring, using auto",
                    self.segment.mode().as_str()
                );
                self.segment.mode = SegmentMode::Auto;
                self.segment.payload = ModePayload::None;
            }
        }

        self.inner.normalize();
        self.outer.normalize();
        self.segment.normalize();
    }
}

/// Named date range referenced by index from D-Day payloads
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DDay {
    name: String<DDAY_NAME_LEN>,
    start: String<DATE_TEXT_LEN>,
    target: String<DATE_TEXT_LEN>,
}

impl DDay {
    /// Create a D-Day from ISO `YYYY-MM-DD` strings
    ///
    /// The dates are kept as text; unparsable ones resolve to the epoch
    /// when the range is used.
    pub fn new(name: &str, start: &str, target: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            name: copy_text(name)?,
            start: copy_text(start)?,
            target: copy_text(target)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn range(&self) -> DateRange {
        DateRange::from_strings(&self.start, &self.target)
    }
}

fn copy_text<const N: usize>(text: &str) -> Result<String<N>, ConfigError> {
    let mut out = String::new();
    out.push_str(text).map_err(|()| ConfigError::TextTooLong)?;
    Ok(out)
}
