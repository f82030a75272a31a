//! Ring color effects with compile-time known variants
//!
//! Every effect shares one fill skeleton: with `boundary = fill * count`,
//! pixel `i` is fully lit when `boundary >= i + 1`, dark when
//! `boundary <= i`, and otherwise blended from the empty color towards its
//! lit color by `boundary - i`. Effects only differ in the lit color of
//! each pixel, see [`Effect::target`].
//!
//! All effects are stored in an enum to avoid heap allocations.

mod rainbow;
mod solid;
mod space_gradient;
mod time_gradient;

pub use rainbow::RainbowEffect;
pub use solid::SolidEffect;
pub use space_gradient::SpaceGradientEffect;
pub use time_gradient::TimeGradientEffect;

use crate::color::{Rgb, blend_colors};

const COLOR_MODE_NAME_SOLID: &str = "solid";
const COLOR_MODE_NAME_RAINBOW: &str = "rainbow";
const COLOR_MODE_NAME_TIME_GRADIENT: &str = "time_gradient";
const COLOR_MODE_NAME_SPACE_GRADIENT: &str = "space_gradient";

const COLOR_MODE_ID_SOLID: u8 = 0;
const COLOR_MODE_ID_RAINBOW: u8 = 1;
const COLOR_MODE_ID_TIME_GRADIENT: u8 = 2;
const COLOR_MODE_ID_SPACE_GRADIENT: u8 = 3;

pub trait Effect {
    /// Color of pixel `index` (of `count`) once it is fully lit
    fn target(&self, index: usize, count: usize, fill: f32) -> Rgb;

    /// Render a ring filled to `fill` (0..=1) into `leds`
    fn render(&self, fill: f32, empty: Rgb, leds: &mut [Rgb]) {
        fill_ring(leds, fill, empty, |index, count| {
            self.target(index, count, fill)
        });
    }
}

/// Colors a ring is painted with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    /// Primary fill color
    pub fill: Rgb,
    /// Secondary fill color, used by the gradients
    pub fill2: Rgb,
    /// Color of unlit pixels
    pub empty: Rgb,
}

/// How a ring colors its lit pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorMode {
    /// One color for every lit pixel
    #[default]
    Solid = COLOR_MODE_ID_SOLID,
    /// Hue wheel spread around the ring
    Rainbow = COLOR_MODE_ID_RAINBOW,
    /// Single color drifting from `fill` to `fill2` as the ring fills
    TimeGradient = COLOR_MODE_ID_TIME_GRADIENT,
    /// Fixed `fill` to `fill2` gradient along the ring
    SpaceGradient = COLOR_MODE_ID_SPACE_GRADIENT,
}

impl ColorMode {
    /// Map a stored code; unknown codes fall back to [`ColorMode::Solid`]
    pub fn from_raw(value: u8) -> Self {
        match value {
            COLOR_MODE_ID_RAINBOW => Self::Rainbow,
            COLOR_MODE_ID_TIME_GRADIENT => Self::TimeGradient,
            COLOR_MODE_ID_SPACE_GRADIENT => Self::SpaceGradient,
            _ => Self::Solid,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => COLOR_MODE_NAME_SOLID,
            Self::Rainbow => COLOR_MODE_NAME_RAINBOW,
            Self::TimeGradient => COLOR_MODE_NAME_TIME_GRADIENT,
            Self::SpaceGradient => COLOR_MODE_NAME_SPACE_GRADIENT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_MODE_NAME_SOLID => Some(Self::Solid),
            COLOR_MODE_NAME_RAINBOW => Some(Self::Rainbow),
            COLOR_MODE_NAME_TIME_GRADIENT => Some(Self::TimeGradient),
            COLOR_MODE_NAME_SPACE_GRADIENT => Some(Self::SpaceGradient),
            _ => None,
        }
    }

    pub fn to_slot(self, palette: &Palette) -> EffectSlot {
        match self {
            Self::Solid => EffectSlot::Solid(SolidEffect::new(palette.fill)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect),
            Self::TimeGradient => EffectSlot::TimeGradient(TimeGradientEffect::new(
                palette.fill,
                palette.fill2,
            )),
            Self::SpaceGradient => EffectSlot::SpaceGradient(
                SpaceGradientEffect::new(palette.fill, palette.fill2),
            ),
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy)]
pub enum EffectSlot {
    Solid(SolidEffect),
    Rainbow(RainbowEffect),
    TimeGradient(TimeGradientEffect),
    SpaceGradient(SpaceGradientEffect),
}

impl EffectSlot {
    /// Render the effect into a ring
    pub fn render(&self, fill: f32, empty: Rgb, leds: &mut [Rgb]) {
        match self {
            Self::Solid(effect) => effect.render(fill, empty, leds),
            Self::Rainbow(effect) => effect.render(fill, empty, leds),
            Self::TimeGradient(effect) => effect.render(fill, empty, leds),
            Self::SpaceGradient(effect) => effect.render(fill, empty, leds),
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        match self {
            Self::Solid(_) => ColorMode::Solid,
            Self::Rainbow(_) => ColorMode::Rainbow,
            Self::TimeGradient(_) => ColorMode::TimeGradient,
            Self::SpaceGradient(_) => ColorMode::SpaceGradient,
        }
    }
}

/// Render `fill` of a ring with the given color mode and palette
pub fn render_ring(mode: ColorMode, fill: f32, palette: &Palette, leds: &mut [Rgb]) {
    mode.to_slot(palette).render(fill, palette.empty, leds);
}

/// Shared fill skeleton with an anti-aliased boundary pixel
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fill_ring<F>(leds: &mut [Rgb], fill: f32, empty: Rgb, target: F)
where
    F: Fn(usize, usize) -> Rgb,
{
    let count = leds.len();
    if count == 0 {
        return;
    }

    let fill = if fill.is_nan() { 0.0 } else { fill.clamp(0.0, 1.0) };
    let boundary = fill * count as f32;

    for (index, led) in leds.iter_mut().enumerate() {
        let position = index as f32;
        *led = if boundary >= position + 1.0 {
            target(index, count)
        } else if boundary > position {
            blend_colors(empty, target(index, count), boundary - position)
        } else {
            empty
        };
    }
}
