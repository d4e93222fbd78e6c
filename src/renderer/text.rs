//! Text rendering with rusttype

use glam::IVec2;
use rusttype::{Font, Scale, point};

use super::canvas::Canvas;
use crate::color::Rgb;

/// Horizontal advance of `text` at `size` pixels
pub fn text_width(font: &Font<'_>, text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map_or(0.0, |g| g.position().x + g.unpositioned().h_metrics().advance_width)
}

/// Draw one line of `text` whose bounding box is centered on `center`
pub fn draw_text_centered(
    canvas: &mut Canvas,
    font: &Font<'_>,
    text: &str,
    size: f32,
    color: Rgb,
    center: IVec2,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let line_height = v_metrics.ascent - v_metrics.descent;

    let start_x = center.x as f32 - text_width(font, text, size) / 2.0;
    let baseline = center.y as f32 - line_height / 2.0 + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(start_x, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            if coverage > 0.0 {
                canvas.blend_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
            }
        });
    }
}
