//! RGB colors and the demo palette

use serde::{Deserialize, Serialize};

/// Packed `0xAARRGGBB` pixel
pub type Argb = u32;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const NAVY_BLUE: Rgb = Rgb::new(0, 0, 128);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const PINK: Rgb = Rgb::new(255, 192, 203);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise `255 - c`
    pub fn complement(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// `(1 - t) * from + t * to`, each channel clamped to 0..=255.
    ///
    /// `t` is not clamped, so a blinking title that overshoots 1.0 by one step
    /// saturates instead of wrapping.
    pub fn blend(from: Rgb, to: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let v = (1.0 - t) * a as f32 + t * b as f32;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
    }

    /// Opaque packed pixel
    #[inline]
    pub fn to_argb(self) -> Argb {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub fn from_argb(pixel: Argb) -> Self {
        let [_, r, g, b] = pixel.to_be_bytes();
        Self::new(r, g, b)
    }
}
