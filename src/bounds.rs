use crate::Rgb;

/// Position of one ring inside the shared pixel chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingBounds {
    /// Global index of the first pixel
    pub offset: usize,
    pub count: usize,
}

impl RingBounds {
    pub const fn new(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    /// Global index one past the last pixel
    pub const fn end(self) -> usize {
        self.offset + self.count
    }
}

/// Default pixel count of the inner ring
pub const INNER_RING_LEDS: usize = 16;
/// Default pixel count of the outer ring
pub const OUTER_RING_LEDS: usize = 24;

/// Both rings on one chain: inner first, outer right after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceLayout {
    pub inner: RingBounds,
    pub outer: RingBounds,
}

impl Default for DeviceLayout {
    fn default() -> Self {
        Self {
            inner: RingBounds::new(0, INNER_RING_LEDS),
            outer: RingBounds::new(INNER_RING_LEDS, OUTER_RING_LEDS),
        }
    }
}

impl DeviceLayout {
    /// Inner ring first, then outer
    pub const fn rings(&self) -> [RingBounds; 2] {
        [self.inner, self.outer]
    }

    /// Number of pixels on the chain
    pub const fn total_leds(&self) -> usize {
        let inner = self.inner.end();
        let outer = self.outer.end();
        if inner > outer { inner } else { outer }
    }
}

/// Get the part of `leds` covered by `bounds`, cut short at the buffer end
pub(crate) fn bounded(leds: &mut [Rgb], bounds: RingBounds) -> &mut [Rgb] {
    let end = bounds.end().min(leds.len());
    let start = bounds.offset.min(end);
    &mut leds[start..end]
}
