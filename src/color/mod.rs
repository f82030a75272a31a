mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{blend_colors, hsv2rgb, hue_at, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
