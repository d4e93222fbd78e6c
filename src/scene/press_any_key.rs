use super::{SceneBase, SceneEvent};
use crate::color::Rgb;

/// A blank screen that waits for a key release
pub struct EmptyPressAnyKeyScene {
    pub(super) base: SceneBase,
}

impl EmptyPressAnyKeyScene {
    pub fn new(background: Rgb) -> Self {
        Self::with_base(SceneBase::new(background))
    }

    pub fn with_base(base: SceneBase) -> Self {
        Self { base }
    }

    pub(super) fn process_event(&mut self, event: SceneEvent) {
        self.base.process_event(event);
        if let SceneEvent::KeyUp(_) = event {
            self.base.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use crate::scene::{Key, Scene};

    #[test]
    fn test_ends_on_key_up() {
        let mut scene: Scene = EmptyPressAnyKeyScene::new(BLACK).into();
        scene.process_event(SceneEvent::KeyDown(Key::Other));
        assert!(scene.is_valid());
        scene.process_event(SceneEvent::KeyUp(Key::Other));
        assert!(!scene.is_valid());
        assert!(!scene.quit_requested());
    }
}
