//! Pixel sinks
//!
//! The renderer addresses pixels by global chain index through
//! [`PixelSink`]. [`FrameBuffer`] is the stock implementation: it keeps the
//! frame in memory and hands it to an [`OutputDriver`] with brightness
//! applied on `show`.

use smart_leds::{SmartLedsWrite, brightness};

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// Addressable pixel chain with a commit step
pub trait PixelSink {
    /// Set pixel `index`; indices past the end are ignored
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Global brightness applied on the next `show`
    fn set_brightness(&mut self, brightness: u8);

    /// Turn every pixel off
    fn clear(&mut self);

    /// Commit the frame to the hardware
    fn show(&mut self);
}

/// In-memory frame of `N` pixels in front of an output driver
pub struct FrameBuffer<const N: usize, O: OutputDriver> {
    pixels: [Rgb; N],
    scaled: [Rgb; N],
    brightness: u8,
    output: O,
}

impl<const N: usize, O: OutputDriver> FrameBuffer<N, O> {
    pub const fn new(output: O) -> Self {
        Self {
            pixels: [BLACK; N],
            scaled: [BLACK; N],
            brightness: u8::MAX,
            output,
        }
    }

    /// Colors as set, before brightness
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<const N: usize, O: OutputDriver> PixelSink for FrameBuffer<N, O> {
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    fn show(&mut self) {
        let scaled = brightness(self.pixels.iter().copied(), self.brightness);
        for (out, color) in self.scaled.iter_mut().zip(scaled) {
            *out = color;
        }
        self.output.write(&self.scaled);
    }
}

/// Output driver for any `smart-leds` compatible LED driver
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(error) = self.writer.write(colors.iter().copied()) {
            log::warn!("led write failed: {:?}", error);
        }
    }
}
