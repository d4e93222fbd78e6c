//! Winit event mapping
//!
//! Turns window events into [`SceneEvent`]s. Anything a scene wouldn't react
//! to maps to `None`, including auto-repeated key presses.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

use crate::scene::{Key, SceneEvent};

pub fn map_window_event(event: &WindowEvent) -> Option<SceneEvent> {
    match event {
        WindowEvent::CloseRequested => Some(SceneEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => map_key(&event.logical_key, event.state, event.repeat),
        _ => None,
    }
}

pub fn map_key(key: &WinitKey, state: ElementState, repeat: bool) -> Option<SceneEvent> {
    if repeat {
        return None;
    }

    let key = match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        _ => Key::Other,
    };

    Some(match state {
        ElementState::Pressed => SceneEvent::KeyDown(key),
        ElementState::Released => SceneEvent::KeyUp(key),
    })
}

#[cfg(test)]
mod tests {
    use winit::keyboard::SmolStr;

    use super::*;

    #[test]
    fn test_close_is_quit() {
        assert_eq!(map_window_event(&WindowEvent::CloseRequested), Some(SceneEvent::Quit));
        assert_eq!(map_window_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn test_escape() {
        let esc = WinitKey::Named(NamedKey::Escape);
        assert_eq!(map_key(&esc, ElementState::Pressed, false), Some(SceneEvent::KeyDown(Key::Escape)));
        assert_eq!(map_key(&esc, ElementState::Released, false), Some(SceneEvent::KeyUp(Key::Escape)));
    }

    #[test]
    fn test_other_keys() {
        let a = WinitKey::Character(SmolStr::new("a"));
        assert_eq!(map_key(&a, ElementState::Pressed, false), Some(SceneEvent::KeyDown(Key::Other)));

        let space = WinitKey::Named(NamedKey::Space);
        assert_eq!(map_key(&space, ElementState::Released, false), Some(SceneEvent::KeyUp(Key::Other)));
    }

    #[test]
    fn test_repeat_ignored() {
        let a = WinitKey::Character(SmolStr::new("a"));
        assert_eq!(map_key(&a, ElementState::Pressed, true), None);
    }
}
