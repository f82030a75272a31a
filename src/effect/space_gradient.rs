use super::Effect;
use crate::color::{Rgb, blend_colors};

/// Space gradient effect - fixed gradient from the first to the last pixel
#[derive(Debug, Clone, Copy)]
pub struct SpaceGradientEffect {
    start: Rgb,
    end: Rgb,
}

impl SpaceGradientEffect {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }
}

impl Effect for SpaceGradientEffect {
    #[allow(clippy::cast_precision_loss)]
    fn target(&self, index: usize, count: usize, _fill: f32) -> Rgb {
        if count <= 1 {
            return self.start;
        }
        let ratio = index as f32 / (count - 1) as f32;
        blend_colors(self.start, self.end, ratio)
    }
}
