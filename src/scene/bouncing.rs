use super::{SceneBase, SceneEvent};
use crate::audio::{AudioManager, SoundEffect};
use crate::color::{self, Rgb};
use crate::renderer::Canvas;
use crate::sim::{BouncingBox, Effects, Rect, step};

/// The box simulation inside a yellow frame
pub struct BouncingBoxesScene {
    pub(super) base: SceneBase,
    boxes: Vec<BouncingBox>,
    boundary: Rect,
    sounds: Vec<SoundEffect>,
    frame: u64,
}

impl BouncingBoxesScene {
    pub fn new(boxes: Vec<BouncingBox>, background: Rgb, frame_rate: u32, boundary: Rect) -> Self {
        Self {
            base: SceneBase::new(background).with_frame_rate(frame_rate),
            boxes,
            boundary,
            sounds: Vec::new(),
            frame: 0,
        }
    }

    pub fn boxes(&self) -> &[BouncingBox] {
        &self.boxes
    }

    pub fn boundary(&self) -> &Rect {
        &self.boundary
    }

    pub(super) fn process_event(&mut self, event: SceneEvent) {
        self.base.process_event(event);
    }

    pub(super) fn update(&mut self, effects: &mut Effects, audio: &AudioManager) {
        self.frame += 1;
        let report = step(&mut self.boxes, &self.boundary, effects, &mut self.sounds);
        if report.collisions > 0 || report.explosions > 0 {
            log::trace!(
                "frame {}: {} collisions, {} explosions",
                self.frame,
                report.collisions,
                report.explosions
            );
        }

        for effect in self.sounds.drain(..) {
            audio.play(effect);
        }
    }

    pub(super) fn draw(&self, canvas: &mut Canvas) {
        let width = canvas.width() as i32;
        canvas.stroke_rect(&self.boundary, color::YELLOW, width / 100, width / 200);
        for b in &self.boxes {
            canvas.fill_rect(b.rect(), b.color());
        }
    }
}
