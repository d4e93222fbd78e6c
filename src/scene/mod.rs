//! Scene state machine
//!
//! A scene is one screen of the demo: a title card, a prompt, or the box
//! simulation itself. Every scene shares the behavior in [`SceneBase`] and
//! adds its own on top; [`Scene`] closes the set and dispatches by `match`.
//!
//! Lifecycle, driven by the [`Director`]:
//!
//! ```text
//! start -> (process_event* -> update -> draw)* -> end
//! ```
//!
//! Once a scene reports `!is_valid()` it is never updated or drawn again.

mod blinking;
mod bouncing;
mod director;
mod press_any_key;
mod title;

pub use blinking::BlinkingTitle;
pub use bouncing::BouncingBoxesScene;
pub use director::Director;
pub use press_any_key::EmptyPressAnyKeyScene;
pub use title::TitleScene;

use std::path::PathBuf;

use glam::IVec2;

use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::color::{self, Rgb};
use crate::consts::DEFAULT_FRAME_RATE;
use crate::error::DemoError;
use crate::renderer::{Canvas, draw_text_centered};
use crate::sim::Effects;

/// The prompt shown at the bottom of title screens
pub const PRESS_ANY_KEY: &str = "Press any key.";
const PRESS_ANY_KEY_SIZE: f32 = 18.0;
/// Distance from the bottom edge to the prompt's center
const PRESS_ANY_KEY_MARGIN: i32 = 50;

/// Keys scenes care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Input delivered to the active scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The window was closed
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// State and behavior every scene shares
#[derive(Debug, Clone)]
pub struct SceneBase {
    background: Rgb,
    frame_rate: u32,
    valid: bool,
    quit: bool,
    soundtrack: Option<PathBuf>,
}

impl SceneBase {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            frame_rate: DEFAULT_FRAME_RATE,
            valid: true,
            quit: false,
            soundtrack: None,
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Loop `path` while the scene is active
    pub fn with_soundtrack(mut self, path: impl Into<PathBuf>) -> Self {
        self.soundtrack = Some(path.into());
        self
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Quit and Escape end any scene
    pub fn process_event(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::Quit => {
                log::info!("Good Bye!");
                self.valid = false;
                self.quit = true;
            }
            SceneEvent::KeyDown(Key::Escape) => {
                log::info!("Bye bye!");
                self.valid = false;
            }
            _ => {}
        }
    }

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    fn start(&self, audio: &mut AudioManager) -> Result<(), DemoError> {
        match &self.soundtrack {
            Some(path) => audio.play_music(path),
            None => Ok(()),
        }
    }

    fn end(&self, audio: &mut AudioManager) {
        if self.soundtrack.is_some() {
            audio.stop_music();
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(self.background);
    }
}

/// Every scene the demo can show
pub enum Scene {
    Title(TitleScene),
    Blinking(BlinkingTitle),
    PressAnyKey(EmptyPressAnyKeyScene),
    BouncingBoxes(BouncingBoxesScene),
}

impl Scene {
    fn base(&self) -> &SceneBase {
        match self {
            Scene::Title(s) => &s.base,
            Scene::Blinking(s) => &s.base,
            Scene::PressAnyKey(s) => &s.base,
            Scene::BouncingBoxes(s) => &s.base,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Title(_) => "title",
            Scene::Blinking(_) => "blinking title",
            Scene::PressAnyKey(_) => "press any key",
            Scene::BouncingBoxes(_) => "bouncing boxes",
        }
    }

    /// Begin the soundtrack, if there is one
    pub fn start(&mut self, audio: &mut AudioManager) -> Result<(), DemoError> {
        self.base().start(audio)
    }

    pub fn process_event(&mut self, event: SceneEvent) {
        match self {
            Scene::Title(s) => s.process_event(event),
            Scene::Blinking(s) => s.process_event(event),
            Scene::PressAnyKey(s) => s.process_event(event),
            Scene::BouncingBoxes(s) => s.process_event(event),
        }
    }

    /// Per-frame logic. Only the simulation does anything here.
    pub fn update(&mut self, effects: &mut Effects, audio: &AudioManager) {
        if let Scene::BouncingBoxes(s) = self {
            s.update(effects, audio);
        }
    }

    pub fn draw(&mut self, canvas: &mut Canvas, assets: &Assets) {
        self.base().draw(canvas);
        match self {
            Scene::Title(s) => s.draw(canvas, assets),
            Scene::Blinking(s) => s.draw(canvas, assets),
            Scene::PressAnyKey(_) => {}
            Scene::BouncingBoxes(s) => s.draw(canvas),
        }
    }

    /// Stop the soundtrack
    pub fn end(&mut self, audio: &mut AudioManager) {
        self.base().end(audio);
    }

    pub fn is_valid(&self) -> bool {
        self.base().valid
    }

    /// Whether the scene ended because the window was closed
    pub fn quit_requested(&self) -> bool {
        self.base().quit
    }

    pub fn frame_rate(&self) -> u32 {
        self.base().frame_rate
    }
}

impl From<TitleScene> for Scene {
    fn from(scene: TitleScene) -> Self {
        Scene::Title(scene)
    }
}

impl From<BlinkingTitle> for Scene {
    fn from(scene: BlinkingTitle) -> Self {
        Scene::Blinking(scene)
    }
}

impl From<EmptyPressAnyKeyScene> for Scene {
    fn from(scene: EmptyPressAnyKeyScene) -> Self {
        Scene::PressAnyKey(scene)
    }
}

impl From<BouncingBoxesScene> for Scene {
    fn from(scene: BouncingBoxesScene) -> Self {
        Scene::BouncingBoxes(scene)
    }
}

/// Draw the black prompt centered near the bottom edge
fn draw_press_any_key(canvas: &mut Canvas, assets: &Assets) {
    let Some(font) = &assets.font else { return };
    let center = IVec2::new(
        canvas.width() as i32 / 2,
        canvas.height() as i32 - PRESS_ANY_KEY_MARGIN,
    );
    draw_text_centered(canvas, font, PRESS_ANY_KEY, PRESS_ANY_KEY_SIZE, color::BLACK, center);
}

/// Center of the canvas, where titles go
fn canvas_center(canvas: &Canvas) -> IVec2 {
    IVec2::new(canvas.width() as i32 / 2, canvas.height() as i32 / 2)
}


#[cfg(test)]
mod tests {
    use super::test_support::every_scene;
    use super::*;

    #[test]
    fn test_quit_ends_every_scene() {
        for mut scene in every_scene() {
            assert!(scene.is_valid());
            scene.process_event(SceneEvent::Quit);
            assert!(!scene.is_valid(), "{} ignored quit", scene.name());
            assert!(scene.quit_requested());
        }
    }

    #[test]
    fn test_escape_ends_every_scene_without_quitting() {
        for mut scene in every_scene() {
            scene.process_event(SceneEvent::KeyDown(Key::Escape));
            assert!(!scene.is_valid(), "{} ignored escape", scene.name());
            assert!(!scene.quit_requested());
        }
    }

    #[test]
    fn test_base_ignores_other_keys() {
        let mut base = SceneBase::new(color::PINK);
        base.process_event(SceneEvent::KeyDown(Key::Other));
        base.process_event(SceneEvent::KeyUp(Key::Escape));
        assert!(base.valid);
    }

    #[test]
    fn test_default_frame_rate() {
        let base = SceneBase::new(color::PINK);
        assert_eq!(base.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(base.with_frame_rate(30).frame_rate, 30);
    }

    #[test]
    fn test_draw_fills_background_first() {
        let assets = test_support::assets();
        let mut canvas = Canvas::new(20, 20);
        let mut scene: Scene = EmptyPressAnyKeyScene::new(color::PINK).into();
        scene.draw(&mut canvas, &assets);
        assert!(canvas.pixels().iter().all(|&p| p == color::PINK.to_argb()));
    }

    #[test]
    fn test_soundtrack_is_silent_without_audio() {
        let mut audio = AudioManager::disabled();
        let mut scene: Scene = EmptyPressAnyKeyScene::with_base(
            SceneBase::new(color::BLACK).with_soundtrack("data/missing.ogg"),
        )
        .into();
        assert!(scene.start(&mut audio).is_ok());
        scene.end(&mut audio);
        assert!(!audio.is_music_playing());
    }
}
