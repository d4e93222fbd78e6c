//! Decoded sprite images

use crate::color::{Argb, Rgb};

/// A small image kept as packed `0xAARRGGBB` pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl Sprite {
    /// Build from tightly packed RGBA8 bytes
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let pixels = rgba
            .chunks_exact(4)
            .map(|p| u32::from_be_bytes([p[3], p[0], p[1], p[2]]))
            .collect();
        Self { width, height, pixels }
    }

    /// A fully opaque single-color sprite
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.to_argb(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Argb {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Argb) {
        self.pixels[(y * self.width + x) as usize] = pixel;
    }

    /// The same image flipped on both axes
    pub fn flipped(&self) -> Self {
        let mut pixels = self.pixels.clone();
        pixels.reverse();
        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}
