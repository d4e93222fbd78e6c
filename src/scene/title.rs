use super::{SceneBase, SceneEvent, canvas_center, draw_press_any_key};
use crate::assets::Assets;
use crate::color::{self, Rgb};
use crate::renderer::{Canvas, draw_text_centered};

/// A title card on pink, dismissed by pressing any key
pub struct TitleScene {
    pub(super) base: SceneBase,
    title: String,
    title_color: Rgb,
    title_size: f32,
}

impl TitleScene {
    pub fn new(title: impl Into<String>, title_color: Rgb, title_size: f32) -> Self {
        Self {
            base: SceneBase::new(color::PINK),
            title: title.into(),
            title_color,
            title_size,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(super) fn process_event(&mut self, event: SceneEvent) {
        self.base.process_event(event);
        if let SceneEvent::KeyDown(_) = event {
            self.base.invalidate();
        }
    }

    pub(super) fn draw(&self, canvas: &mut Canvas, assets: &Assets) {
        if let Some(font) = &assets.font {
            let center = canvas_center(canvas);
            draw_text_centered(canvas, font, &self.title, self.title_size, self.title_color, center);
        }
        draw_press_any_key(canvas, assets);
    }
}
