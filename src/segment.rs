//! 3-digit 7-segment display encoding
//!
//! The display is driven through three daisy-chained shift registers with
//! common-anode digits, so a segment lights when its bit is **low**.
//! Bit 7 of each digit pattern is the decimal point.

/// Segment patterns for digits 0-9 (active low)
pub const DIGIT_PATTERNS: [u8; 10] = [
    0b1100_0000,
    0b1111_1001,
    0b1010_0100,
    0b1011_0000,
    0b1001_1001,
    0b1001_0010,
    0b1000_0010,
    0b1111_1000,
    0b1000_0000,
    0b1001_0000,
];

/// Pattern with every segment dark
pub const BLANK_PATTERN: u8 = 0xFF;

/// Mask that lights the decimal point of a digit
const DECIMAL_POINT_MASK: u8 = 0x7F;

/// Largest number the display can show
pub const MAX_DISPLAY_VALUE: u16 = 999;

/// Which digit carries the decimal point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DecimalPoint {
    #[default]
    None = 0,
    /// After the tens digit (`12.3`)
    Tens = 1,
    /// After the hundreds digit (`1.23`)
    Hundreds = 2,
}

impl DecimalPoint {
    pub fn from_raw(value: u8) -> Self {
        match value {
            1 => Self::Tens,
            2 => Self::Hundreds,
            _ => Self::None,
        }
    }
}

/// A number ready for the display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitReadout {
    pub value: u16,
    pub decimal_point: DecimalPoint,
}

impl DigitReadout {
    /// Clamp `value` into `0..=999`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(value: i64, decimal_point: DecimalPoint) -> Self {
        Self {
            value: value.clamp(0, i64::from(MAX_DISPLAY_VALUE)) as u16,
            decimal_point,
        }
    }

    /// Multiply a fractional amount by `scale`, truncate and clamp
    #[allow(clippy::cast_possible_truncation)]
    pub fn scaled(amount: f32, scale: f32, decimal_point: DecimalPoint) -> Self {
        let value = amount * scale;
        if value.is_nan() || value <= 0.0 {
            return Self::new(0, decimal_point);
        }
        Self::new(libm::floorf(value) as i64, decimal_point)
    }
}

/// Raw bytes for the three digits, in shift-out order: ones, tens, hundreds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentFrame(pub [u8; 3]);

impl SegmentFrame {
    /// All segments dark
    pub const BLANK: Self = Self([BLANK_PATTERN; 3]);

    /// Encode a readout; values above 999 are clamped
    pub fn encode(readout: DigitReadout) -> Self {
        let value = readout.value.min(MAX_DISPLAY_VALUE);
        let mut hundreds = DIGIT_PATTERNS[usize::from(value / 100 % 10)];
        let mut tens = DIGIT_PATTERNS[usize::from(value / 10 % 10)];
        let ones = DIGIT_PATTERNS[usize::from(value % 10)];

        match readout.decimal_point {
            DecimalPoint::Hundreds => hundreds &= DECIMAL_POINT_MASK,
            DecimalPoint::Tens => tens &= DECIMAL_POINT_MASK,
            DecimalPoint::None => {}
        }

        Self([ones, tens, hundreds])
    }

    pub const fn ones(&self) -> u8 {
        self.0[0]
    }

    pub const fn tens(&self) -> u8 {
        self.0[1]
    }

    pub const fn hundreds(&self) -> u8 {
        self.0[2]
    }
}

/// Sink for the 7-segment shift registers
///
/// Implement `write_raw` for the hardware; `draw_number` encodes and
/// forwards.
pub trait SegmentSink {
    /// Latch three raw digit patterns
    fn write_raw(&mut self, frame: SegmentFrame);

    /// Show `value` with a decimal point, or blank the display
    fn draw_number(&mut self, value: u16, decimal_point: DecimalPoint, blank: bool) {
        let frame = if blank {
            SegmentFrame::BLANK
        } else {
            SegmentFrame::encode(DigitReadout {
                value,
                decimal_point,
            })
        };
        self.write_raw(frame);
    }
}
