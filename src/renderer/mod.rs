//! Software rendering module
//!
//! Everything is drawn into an owned `Canvas`; the platform layer copies the
//! finished frame to the window surface.

pub mod canvas;
pub mod sprite;
pub mod text;

pub use canvas::Canvas;
pub use sprite::Sprite;
pub use text::{draw_text_centered, text_width};

use glam::IVec2;

use crate::sim::Effects;

/// Draw every active explosion, centered on the box it was spawned from
pub fn draw_explosions(canvas: &mut Canvas, effects: &Effects, frames: &[Sprite; 2]) {
    for explosion in effects.iter() {
        let sprite = &frames[explosion.frame()];
        let half = IVec2::new(sprite.width() as i32 / 2, sprite.height() as i32 / 2);
        canvas.blit(sprite, explosion.center() - half);
    }
}
