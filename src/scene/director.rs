//! Scene sequencing
//!
//! The director owns the active scene, the scenes queued behind it and the
//! effects registry. It runs one frame at a time without touching a window,
//! so the platform layer only has to pace it and present the canvas.

use std::collections::VecDeque;

use super::{BouncingBoxesScene, Scene, SceneEvent, TitleScene};
use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::color;
use crate::consts::DEFAULT_FRAME_RATE;
use crate::error::DemoError;
use crate::renderer::{Canvas, draw_explosions};
use crate::settings::Settings;
use crate::sim::{BouncingBox, BoxSpawner, Effects, Rect};

const TITLE_SIZE: f32 = 64.0;

pub struct Director {
    current: Option<Scene>,
    queue: VecDeque<Scene>,
    effects: Effects,
}

impl Director {
    /// Queue `scenes` in order. Nothing starts until [`Director::start`].
    pub fn new(scenes: impl IntoIterator<Item = Scene>) -> Self {
        Self {
            current: None,
            queue: scenes.into_iter().collect(),
            effects: Effects::new(),
        }
    }

    /// The demo itself: a title card, then the boxes laid out from `settings.seed`
    pub fn demo(settings: &Settings) -> Result<Self, DemoError> {
        let (width, height) = settings.window_size();
        let (width, height) = (width as i32, height as i32);

        let boxes = BoxSpawner::new(settings.seed).spawn_boxes(
            settings.num_boxes,
            (width, height),
            settings.spawn_offset,
            settings.min_spawn_distance,
        )?;
        log::info!("Placed {} boxes with seed {}", boxes.len(), settings.seed);
        for b in &boxes {
            log::debug!("{}", b);
        }
        match layout_json(&boxes) {
            Ok(json) => log::debug!("Layout: {}", json),
            Err(e) => log::warn!("Could not serialize layout: {}", e),
        }

        let boundary = Rect::new(0, 0, width, height);
        Ok(Self::new([
            Scene::from(TitleScene::new(settings.title.clone(), color::NAVY_BLUE, TITLE_SIZE)),
            Scene::from(BouncingBoxesScene::new(boxes, color::NAVY_BLUE, settings.frame_rate, boundary)),
        ]))
    }

    /// Start the first scene
    pub fn start(&mut self, audio: &mut AudioManager) -> Result<(), DemoError> {
        self.advance(audio)
    }

    pub fn current(&self) -> Option<&Scene> {
        self.current.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Scenes still waiting behind the active one
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Frame rate the next frame should be paced at
    pub fn frame_rate(&self) -> u32 {
        self.current.as_ref().map_or(DEFAULT_FRAME_RATE, Scene::frame_rate)
    }

    /// Run one frame: deliver `events`, then update and draw the active scene
    /// and its effects into `canvas`.
    ///
    /// A scene that became invalid is ended instead, and the next one started.
    /// Returns whether anything is left to run.
    pub fn frame(
        &mut self,
        events: impl IntoIterator<Item = SceneEvent>,
        canvas: &mut Canvas,
        assets: &Assets,
        audio: &mut AudioManager,
    ) -> Result<bool, DemoError> {
        let Some(scene) = self.current.as_mut() else {
            return Ok(false);
        };

        for event in events {
            scene.process_event(event);
        }

        if scene.is_valid() {
            scene.update(&mut self.effects, audio);
            scene.draw(canvas, assets);
            self.effects.update();
            draw_explosions(canvas, &self.effects, &assets.explosion);
        } else {
            self.finish_current(audio);
            self.advance(audio)?;
        }

        Ok(self.is_running())
    }

    /// End the active scene. A quit abandons everything still queued.
    fn finish_current(&mut self, audio: &mut AudioManager) {
        let Some(mut scene) = self.current.take() else {
            return;
        };
        scene.end(audio);
        log::info!("Scene {} ended", scene.name());

        if scene.quit_requested() && !self.queue.is_empty() {
            log::info!("Skipping {} queued scene(s)", self.queue.len());
            self.queue.clear();
        }
    }

    fn advance(&mut self, audio: &mut AudioManager) -> Result<(), DemoError> {
        self.effects.clear();
        let Some(mut next) = self.queue.pop_front() else {
            log::info!("Exiting!");
            return Ok(());
        };
        next.start(audio)?;
        log::info!("Scene {} started at {} fps", next.name(), next.frame_rate());
        self.current = Some(next);
        Ok(())
    }
}

/// The starting boxes as JSON, enough to rebuild the same layout
fn layout_json(boxes: &[BouncingBox]) -> Result<String, serde_json::Error> {
    serde_json::to_string(boxes)
}
