//! Paddle controller
//!
//! Runs once per tick before the world steps. A move that would push the
//! paddle past a playfield edge is skipped entirely; the paddle never snaps
//! to the wall.

use glam::Vec2;

use super::input::Direction;
use super::state::GameState;
use crate::tuning::PaddleClamp;

/// Horizontal paddle position after one tick of movement
pub fn next_paddle_x(
    x: f32,
    half_width: f32,
    direction: Direction,
    speed: f32,
    playfield_width: f32,
    clamp: PaddleClamp,
) -> f32 {
    match direction {
        Direction::Left => {
            let target = x - speed;
            if target - half_width >= 0.0 { target } else { x }
        }
        Direction::Right => {
            let target = x + speed;
            let allowed = match clamp {
                PaddleClamp::Symmetric => target + half_width <= playfield_width,
                PaddleClamp::Legacy => target < playfield_width - half_width,
            };
            if allowed { target } else { x }
        }
    }
}

/// Move the paddle according to the held keys. Returns true if it moved.
pub fn move_paddle(state: &mut GameState) -> bool {
    let Some(direction) = state.input.direction() else {
        return false;
    };
    let Some(paddle) = state.paddle() else {
        return false;
    };

    let half_width = state.tuning.paddle_half_extents().x;
    let x = paddle.pos.x;
    let new_x = next_paddle_x(
        x,
        half_width,
        direction,
        state.tuning.paddle_speed,
        state.playfield.width,
        state.tuning.paddle_clamp,
    );
    if new_x == x {
        return false;
    }

    let pos = Vec2::new(new_x, paddle.pos.y);
    let id = state.paddle_id();
    state.world_mut().set_position(id, pos);
    log::trace!("Paddle moved {:?} to x={}", direction, new_x);
    true
}
