//! Owned CPU framebuffer
//!
//! Pixels are packed `0xAARRGGBB`, row-major, top-left origin. Every drawing
//! call clips against the canvas so callers can pass rects that hang off the
//! edges.

use glam::IVec2;

use super::sprite::Sprite;
use crate::color::{Argb, Rgb};
use crate::sim::Rect;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl Canvas {
    /// A canvas cleared to black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::new(0, 0, 0).to_argb(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Argb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_argb());
    }

    /// Fill `rect`, clipped to the canvas
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        let x0 = rect.left.max(0);
        let y0 = rect.top.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let argb = color.to_argb();
        let stride = self.width as usize;
        for y in y0..y1 {
            let row = y as usize * stride;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(argb);
        }
    }

    /// Outline `rect` with a band `thickness` pixels wide, drawn inward.
    ///
    /// A non-zero `radius` rounds the outer corners; the inner edge uses
    /// `radius - thickness` so the band keeps an even width around the curve.
    /// Straight runs are filled directly; only the four `radius`-sized corner
    /// squares are tested pixel by pixel.
    pub fn stroke_rect(&mut self, rect: &Rect, color: Rgb, thickness: i32, radius: i32) {
        if thickness <= 0 {
            return;
        }
        if thickness * 2 >= rect.width.min(rect.height) {
            self.fill_rect(rect, color);
            return;
        }

        let inner = Rect::new(
            rect.left + thickness,
            rect.top + thickness,
            rect.width - thickness * 2,
            rect.height - thickness * 2,
        );
        let r = radius.clamp(0, rect.width.min(rect.height) / 2);
        let inner_radius = (r - thickness).max(0);

        // Straight runs between the corner squares
        let runs = [
            Rect::new(rect.left + r, rect.top, rect.width - 2 * r, thickness),
            Rect::new(rect.left + r, inner.bottom(), rect.width - 2 * r, thickness),
            Rect::new(rect.left, rect.top + r, thickness, rect.height - 2 * r),
            Rect::new(inner.right(), rect.top + r, thickness, rect.height - 2 * r),
        ];
        for run in &runs {
            self.fill_rect(run, color);
        }

        if r == 0 {
            return;
        }
        let argb = color.to_argb();
        let corners = [
            (rect.left, rect.top),
            (rect.right() - r, rect.top),
            (rect.left, rect.bottom() - r),
            (rect.right() - r, rect.bottom() - r),
        ];
        for (cx, cy) in corners {
            for y in cy..cy + r {
                for x in cx..cx + r {
                    if !in_rounded_rect(rect, r, x, y) || in_rounded_rect(&inner, inner_radius, x, y) {
                        continue;
                    }
                    if let Some(i) = self.index(x, y) {
                        self.pixels[i] = argb;
                    }
                }
            }
        }
    }

    /// Copy `sprite` with its top-left at `at`. Fully transparent pixels are skipped.
    pub fn blit(&mut self, sprite: &Sprite, at: IVec2) {
        for sy in 0..sprite.height() as i32 {
            for sx in 0..sprite.width() as i32 {
                let src = sprite.pixel(sx as u32, sy as u32);
                if src >> 24 == 0 {
                    continue;
                }
                if let Some(i) = self.index(at.x + sx, at.y + sy) {
                    self.pixels[i] = src | 0xFF00_0000;
                }
            }
        }
    }

    /// Mix `color` over the pixel at `(x, y)` by `coverage` (0.0..=1.0)
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, coverage: f32) {
        let Some(i) = self.index(x, y) else { return };
        let under = Rgb::from_argb(self.pixels[i]);
        self.pixels[i] = Rgb::blend(under, color, coverage.clamp(0.0, 1.0)).to_argb();
    }
}

/// Whether the center of pixel `(x, y)` lies inside `rect` with corners rounded by `radius`
fn in_rounded_rect(rect: &Rect, radius: i32, x: i32, y: i32) -> bool {
    if x < rect.left || x >= rect.right() || y < rect.top || y >= rect.bottom() {
        return false;
    }
    if radius <= 0 {
        return true;
    }

    let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
    let r = radius as f32;
    let cx = px.clamp(rect.left as f32 + r, rect.right() as f32 - r);
    let cy = py.clamp(rect.top as f32 + r, rect.bottom() as f32 - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, NAVY_BLUE, WHITE, YELLOW};

    #[test]
    fn test_fill() {
        let mut canvas = Canvas::new(4, 3);
        assert_eq!(canvas.pixels().len(), 12);
        canvas.fill(NAVY_BLUE);
        assert!(canvas.pixels().iter().all(|&p| p == NAVY_BLUE.to_argb()));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(&Rect::new(-5, 8, 8, 8), WHITE);

        assert_eq!(canvas.pixel(0, 8), Some(WHITE.to_argb()));
        assert_eq!(canvas.pixel(2, 9), Some(WHITE.to_argb()));
        assert_eq!(canvas.pixel(3, 9), Some(BLACK.to_argb()));
        assert_eq!(canvas.pixel(0, 7), Some(BLACK.to_argb()));
        assert_eq!(canvas.pixel(0, 10), None);

        // Entirely off-canvas is a no-op
        canvas.fill_rect(&Rect::new(20, 20, 5, 5), YELLOW);
        assert!(!canvas.pixels().contains(&YELLOW.to_argb()));
    }

    #[test]
    fn test_stroke_rect_band() {
        let mut canvas = Canvas::new(100, 100);
        canvas.stroke_rect(&Rect::new(0, 0, 100, 100), YELLOW, 2, 0);

        let y = YELLOW.to_argb();
        assert_eq!(canvas.pixel(0, 0), Some(y));
        assert_eq!(canvas.pixel(1, 50), Some(y));
        assert_eq!(canvas.pixel(2, 50), Some(BLACK.to_argb()));
        assert_eq!(canvas.pixel(99, 99), Some(y));
        assert_eq!(canvas.pixel(50, 98), Some(y));
        assert_eq!(canvas.pixel(50, 50), Some(BLACK.to_argb()));
    }

    #[test]
    fn test_stroke_rect_rounds_corners() {
        let mut canvas = Canvas::new(100, 100);
        canvas.stroke_rect(&Rect::new(0, 0, 100, 100), YELLOW, 8, 4);

        // The very corner falls outside the curve
        assert_eq!(canvas.pixel(0, 0), Some(BLACK.to_argb()));
        assert_eq!(canvas.pixel(99, 0), Some(BLACK.to_argb()));
        // Edges away from the corners are solid
        assert_eq!(canvas.pixel(0, 50), Some(YELLOW.to_argb()));
        assert_eq!(canvas.pixel(7, 50), Some(YELLOW.to_argb()));
        assert_eq!(canvas.pixel(8, 50), Some(BLACK.to_argb()));
        assert_eq!(canvas.pixel(4, 4), Some(YELLOW.to_argb()));
    }

    /// Every pixel of `rect` tested against both rounded outlines
    fn stroke_every_pixel(canvas: &mut Canvas, rect: &Rect, color: Rgb, thickness: i32, radius: i32) {
        let inner = Rect::new(
            rect.left + thickness,
            rect.top + thickness,
            rect.width - thickness * 2,
            rect.height - thickness * 2,
        );
        let outer_radius = radius.clamp(0, rect.width.min(rect.height) / 2);
        let inner_radius = (outer_radius - thickness).max(0);
        for y in rect.top..rect.bottom() {
            for x in rect.left..rect.right() {
                if in_rounded_rect(rect, outer_radius, x, y) && !in_rounded_rect(&inner, inner_radius, x, y) {
                    if let Some(i) = canvas.index(x, y) {
                        canvas.pixels[i] = color.to_argb();
                    }
                }
            }
        }
    }

    #[test]
    fn test_stroke_rect_matches_per_pixel_outline() {
        let cases = [
            (Rect::new(0, 0, 800, 800), 8, 4),
            (Rect::new(0, 0, 800, 800), 3, 12),
            (Rect::new(0, 0, 800, 800), 5, 0),
            (Rect::new(-10, 30, 300, 200), 6, 20),
            (Rect::new(100, 100, 41, 60), 2, 40),
        ];
        for (rect, thickness, radius) in cases {
            let mut banded = Canvas::new(800, 800);
            banded.stroke_rect(&rect, YELLOW, thickness, radius);
            let mut reference = Canvas::new(800, 800);
            stroke_every_pixel(&mut reference, &rect, YELLOW, thickness, radius);

            assert!(
                banded.pixels() == reference.pixels(),
                "outline differs for {:?} thickness {} radius {}",
                rect,
                thickness,
                radius
            );
        }
    }

    #[test]
    fn test_blit_skips_transparent() {
        let mut canvas = Canvas::new(8, 8);
        let mut sprite = Sprite::solid(3, 3, WHITE);
        sprite.set_pixel(1, 1, 0x0000_0000);

        canvas.blit(&sprite, IVec2::new(-1, 6));
        assert_eq!(canvas.pixel(0, 6), Some(WHITE.to_argb()));
        assert_eq!(canvas.pixel(1, 6), Some(WHITE.to_argb()));
        // (1, 1) of the sprite lands on (0, 7)
        assert_eq!(canvas.pixel(0, 7), Some(BLACK.to_argb()));
        assert_eq!(canvas.pixel(1, 7), Some(WHITE.to_argb()));
    }

    #[test]
    fn test_blend_pixel() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(0, 0, WHITE, 1.0);
        canvas.blend_pixel(1, 0, WHITE, 0.5);
        canvas.blend_pixel(5, 5, WHITE, 1.0);

        assert_eq!(canvas.pixel(0, 0), Some(WHITE.to_argb()));
        assert_eq!(canvas.pixel(1, 0), Some(Rgb::new(128, 128, 128).to_argb()));
        assert_eq!(canvas.pixel(0, 1), Some(BLACK.to_argb()));
    }
}
