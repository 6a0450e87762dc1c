//! Keyboard event decoding
//!
//! Uses `KeyboardEvent.code` values so the layout does not matter.

use crate::sim::{Key, KeyEvent};

/// Map a DOM key code to a game key
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        _ => None,
    }
}

/// Build a key event from a DOM key code and whether it was a keydown
pub fn key_event_from_code(code: &str, pressed: bool) -> Option<KeyEvent> {
    key_from_code(code).map(|key| KeyEvent { key, pressed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(key_from_code("ArrowRight"), Some(Key::Right));
        assert_eq!(key_from_code("ArrowUp"), None);
        assert_eq!(key_from_code("KeyA"), None);
    }

    #[test]
    fn test_key_events() {
        assert_eq!(
            key_event_from_code("ArrowLeft", false),
            Some(KeyEvent::up(Key::Left))
        );
        assert_eq!(
            key_event_from_code("ArrowRight", true),
            Some(KeyEvent::down(Key::Right))
        );
        assert_eq!(key_event_from_code("Space", true), None);
    }
}
