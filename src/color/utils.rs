pub use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Blend two RGB colors
///
/// Each channel is interpolated linearly and truncated back to 8 bits.
/// The ratio is clamped first, so `ratio <= 0` (or NaN) returns `a`
/// unchanged and `ratio >= 1` returns `b` unchanged.
///
/// # Arguments
/// * `a` - Start color
/// * `b` - End color
/// * `ratio` - Blend factor (0.0 = all a, 1.0 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, ratio: f32) -> Rgb {
    if ratio.is_nan() || ratio <= 0.0 {
        return a;
    }
    if ratio >= 1.0 {
        return b;
    }

    Rgb {
        r: lerp_channel(a.r, b.r, ratio),
        g: lerp_channel(a.g, b.g, ratio),
        b: lerp_channel(a.b, b.b, ratio),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, ratio: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * ratio) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Fully saturated hue for position `index` of a circle of `count` pixels.
///
/// The hue wheel spans the whole circle exactly once.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_at(index: usize, count: usize) -> Rgb {
    if count == 0 {
        return hsv2rgb(Hsv {
            hue: 0,
            sat: 255,
            val: 255,
        });
    }
    let hue = ((index % count) * 256 / count) as u8;
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}
