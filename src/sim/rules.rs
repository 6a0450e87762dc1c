//! Gameplay rules: wall reflection, paddle bounce, brick breaking and reset
//!
//! Walls are not bodies. The playfield edges are plain numeric checks made
//! before the world steps; paddle and brick responses run on the
//! collision-start pairs the world reports after stepping.

use glam::Vec2;

use super::state::{GameEvent, GameState, Wall};
use crate::physics::CollisionPair;

/// Reflect the ball off the side and top edges; relaunch it if it reached the floor
///
/// Reflection is re-applied every tick the ball overlaps an edge, with no
/// positional correction.
pub fn apply_boundaries(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Some(ball) = state.ball() else {
        return events;
    };
    let radius = ball.radius().unwrap_or(0.0);
    let pos = ball.pos;
    let mut vel = ball.vel;
    let playfield = state.playfield;

    if pos.x - radius <= playfield.left() || pos.x + radius >= playfield.right() {
        vel.x = -vel.x;
        let wall = if pos.x - radius <= playfield.left() {
            Wall::Left
        } else {
            Wall::Right
        };
        events.push(GameEvent::WallBounce { wall });
    }
    if pos.y - radius <= playfield.top() {
        vel.y = -vel.y;
        events.push(GameEvent::WallBounce { wall: Wall::Top });
    }

    let ball_id = state.ball_id();
    state.world_mut().set_velocity(ball_id, vel);

    if pos.y + radius >= playfield.bottom() {
        reset_ball(state);
        events.push(GameEvent::BallReset);
    }
    events
}

/// Velocity after the ball strikes the paddle
///
/// The hit offset from the paddle center is divided by `span` and clamped to
/// [-1, 1], then mapped linearly onto `[-max_angle, max_angle]` from vertical.
/// The ball always leaves upward with its vertical speed kept.
pub fn paddle_bounce(
    ball_pos: Vec2,
    ball_vel: Vec2,
    paddle_pos: Vec2,
    span: f32,
    speed: f32,
    max_angle: f32,
) -> Vec2 {
    let offset = ((ball_pos.x - paddle_pos.x) / span).clamp(-1.0, 1.0);
    let angle = offset * max_angle;
    Vec2::new(speed * angle.sin(), -ball_vel.y.abs())
}

/// Apply paddle and brick responses for this tick's collision-start pairs
///
/// Only pairs with the ball count; of those, pairs that touch neither the
/// paddle nor a brick still in play are ignored.
pub fn respond_to_collisions(state: &mut GameState, pairs: &[CollisionPair]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let ball_id = state.ball_id();
    let paddle_id = state.paddle_id();

    for pair in pairs {
        let Some(other) = pair.other(ball_id) else {
            continue;
        };
        if other == paddle_id {
            let (Some(ball), Some(paddle)) = (state.ball(), state.paddle()) else {
                continue;
            };
            let vel = paddle_bounce(
                ball.pos,
                ball.vel,
                paddle.pos,
                state.tuning.bounce_span(),
                state.tuning.bounce_speed,
                state.tuning.max_bounce_angle,
            );
            state.world_mut().set_velocity(ball_id, vel);
            log::debug!("Paddle hit, ball velocity now ({:.2}, {:.2})", vel.x, vel.y);
            events.push(GameEvent::PaddleHit { vel });
        } else if let Some(brick) = state.remove_brick(other) {
            let multiplier = state.tuning.speed_multiplier(brick.row);
            if let Some(vel) = state.ball().map(|b| b.vel) {
                state.world_mut().set_velocity(ball_id, vel * multiplier);
            }
            log::debug!(
                "Brick row {} col {} destroyed (x{}), {} left",
                brick.row,
                brick.col,
                multiplier,
                state.brick_count()
            );
            events.push(GameEvent::BrickDestroyed {
                id: other,
                row: brick.row,
                col: brick.col,
            });
        }
    }
    events
}

/// Put the ball back above the paddle and relaunch it upward
pub fn reset_ball(state: &mut GameState) {
    let Some(paddle_pos) = state.paddle().map(|p| p.pos) else {
        return;
    };
    let pos = paddle_pos - Vec2::new(0.0, state.tuning.reset_offset);
    let vel = state.tuning.reset_velocity;
    let ball_id = state.ball_id();

    let world = state.world_mut();
    world.set_position(ball_id, pos);
    world.set_velocity(ball_id, vel);
    log::info!("Ball lost, relaunching from ({}, {})", pos.x, pos.y);
}
