//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one physics step, in a fixed order:
//! key events → paddle → walls/floor → world step → collision responses.

use super::input::KeyEvent;
use super::paddle::move_paddle;
use super::rules::{apply_boundaries, respond_to_collisions};
use super::state::{GameEvent, GameState};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key presses/releases in the order they arrived
    pub key_events: Vec<KeyEvent>,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    for event in &input.key_events {
        state.input.apply(*event);
    }

    state.time_ticks += 1;

    // Before integration
    move_paddle(state);
    let mut events = apply_boundaries(state);

    // Integration and collision detection
    let pairs = state.world_mut().step();

    // After integration
    events.extend(respond_to_collisions(state, &pairs));

    for event in &events {
        log::trace!("tick {}: {:?}", state.time_ticks, event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Key;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_first_tick_moves_ball_and_paddle() {
        let mut state = GameState::new(Tuning::default());
        let input = TickInput {
            key_events: vec![KeyEvent::down(Key::Right)],
        };

        let events = tick(&mut state, &input);
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.paddle().unwrap().pos, Vec2::new(405.0, 550.0));
        assert_eq!(state.ball().unwrap().pos, Vec2::new(402.0, 525.0));

        // Key stays held across ticks without new events
        tick(&mut state, &TickInput::default());
        assert_eq!(state.paddle().unwrap().pos.x, 410.0);
    }

    #[test]
    fn test_press_and_release_in_same_tick() {
        let mut state = GameState::new(Tuning::default());
        let input = TickInput {
            key_events: vec![KeyEvent::down(Key::Left), KeyEvent::up(Key::Left)],
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle().unwrap().pos.x, 400.0);
    }

    #[test]
    fn test_opening_serve_bounces_off_paddle() {
        let mut state = GameState::new(Tuning::default());
        let mut hit = None;
        for _ in 0..10 {
            let events = tick(&mut state, &TickInput::default());
            if let Some(GameEvent::PaddleHit { vel }) = events.first() {
                hit = Some(*vel);
                break;
            }
        }

        let vel = hit.expect("ball should reach the paddle within ten ticks");
        // Hit slightly right of center, so the ball leaves up and to the right
        assert!(vel.x > 0.0);
        assert_eq!(vel.y, -5.0);
        assert!(state.ball().unwrap().vel.y < 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Tuning::default());
        let mut state2 = GameState::new(Tuning::default());

        let inputs = [
            TickInput {
                key_events: vec![KeyEvent::down(Key::Left)],
            },
            TickInput::default(),
            TickInput {
                key_events: vec![KeyEvent::up(Key::Left), KeyEvent::down(Key::Right)],
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                let a = tick(&mut state1, input);
                let b = tick(&mut state2, input);
                assert_eq!(a, b);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.brick_count(), state2.brick_count());
        assert_eq!(state1.ball().unwrap().pos, state2.ball().unwrap().pos);
    }
}
