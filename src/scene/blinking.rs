use super::{SceneBase, SceneEvent, canvas_center, draw_press_any_key};
use crate::assets::Assets;
use crate::color::Rgb;
use crate::renderer::{Canvas, draw_text_centered};

const BLINK_STEP: f32 = 0.01;

/// A message that fades between its color and that color's complement.
///
/// The fade advances once per draw and turns around after overshooting
/// either end, so the color sweeps back and forth.
pub struct BlinkingTitle {
    pub(super) base: SceneBase,
    message: String,
    color: Rgb,
    complement: Rgb,
    size: f32,
    t: f32,
    dt: f32,
}

impl BlinkingTitle {
    pub fn new(message: impl Into<String>, color: Rgb, size: f32, background: Rgb) -> Self {
        Self {
            base: SceneBase::new(background),
            message: message.into(),
            color,
            complement: color.complement(),
            size,
            t: 0.0,
            dt: BLINK_STEP,
        }
    }

    /// Step the fade and return the color for this frame
    fn interpolate(&mut self) -> Rgb {
        self.t += self.dt;
        if self.t > 1.0 || self.t < 0.0 {
            self.dt = -self.dt;
        }
        Rgb::blend(self.complement, self.color, self.t)
    }

    pub(super) fn process_event(&mut self, event: SceneEvent) {
        self.base.process_event(event);
        if let SceneEvent::KeyUp(_) = event {
            self.base.invalidate();
        }
    }

    pub(super) fn draw(&mut self, canvas: &mut Canvas, assets: &Assets) {
        let color = self.interpolate();
        if let Some(font) = &assets.font {
            let center = canvas_center(canvas);
            draw_text_centered(canvas, font, &self.message, self.size, color, center);
        }
        draw_press_any_key(canvas, assets);
    }
}
