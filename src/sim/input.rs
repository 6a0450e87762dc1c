//! Held-key tracking for paddle control

use serde::{Deserialize, Serialize};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

/// A key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Direction the paddle should move this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Left/right held flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

impl InputState {
    pub fn apply(&mut self, event: KeyEvent) {
        match event.key {
            Key::Left => self.left_held = event.pressed,
            Key::Right => self.right_held = event.pressed,
        }
    }

    /// Left wins when both keys are held
    pub fn direction(&self) -> Option<Direction> {
        if self.left_held {
            Some(Direction::Left)
        } else if self.right_held {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::default();
        assert_eq!(input.direction(), None);

        input.apply(KeyEvent::down(Key::Right));
        assert_eq!(input.direction(), Some(Direction::Right));

        input.apply(KeyEvent::up(Key::Right));
        assert_eq!(input.direction(), None);
    }

    #[test]
    fn test_left_has_priority() {
        let mut input = InputState::default();
        input.apply(KeyEvent::down(Key::Right));
        input.apply(KeyEvent::down(Key::Left));
        assert_eq!(input.direction(), Some(Direction::Left));

        input.apply(KeyEvent::up(Key::Left));
        assert_eq!(input.direction(), Some(Direction::Right));
    }

    #[test]
    fn test_repeated_keydown_is_harmless() {
        let mut input = InputState::default();
        input.apply(KeyEvent::down(Key::Left));
        input.apply(KeyEvent::down(Key::Left));
        input.apply(KeyEvent::up(Key::Left));
        assert!(!input.left_held);
    }
}
