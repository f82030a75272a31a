use super::{Effect, fill_ring};
use crate::color::{Rgb, blend_colors};

/// Time gradient effect
///
/// All lit pixels share one color which moves from `from` to `to` as the
/// ring fills.
#[derive(Debug, Clone, Copy)]
pub struct TimeGradientEffect {
    from: Rgb,
    to: Rgb,
}

impl TimeGradientEffect {
    pub const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }
}

impl Effect for TimeGradientEffect {
    fn target(&self, _index: usize, _count: usize, fill: f32) -> Rgb {
        blend_colors(self.from, self.to, fill)
    }

    fn render(&self, fill: f32, empty: Rgb, leds: &mut [Rgb]) {
        let color = self.target(0, leds.len(), fill);
        fill_ring(leds, fill, empty, |_, _| color);
    }
}
