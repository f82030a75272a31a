use super::Effect;
use crate::color::Rgb;

/// Solid fill effect - every lit pixel gets the same color
#[derive(Debug, Clone, Copy)]
pub struct SolidEffect {
    color: Rgb,
}

impl SolidEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for SolidEffect {
    fn target(&self, _index: usize, _count: usize, _fill: f32) -> Rgb {
        self.color
    }
}
