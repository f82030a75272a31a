//! Rainbow ring effect
//!
//! The hue wheel is laid around the ring once, independent of the fill, so
//! a pixel keeps its color as the ring fills up.

use super::Effect;
use crate::color::{Rgb, hue_at};

/// Rainbow effect - full saturation, full value
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect;

impl Effect for RainbowEffect {
    fn target(&self, index: usize, count: usize, _fill: f32) -> Rgb {
        hue_at(index, count)
    }
}
