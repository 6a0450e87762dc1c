//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; rule functions
//! receive it explicitly instead of sharing globals.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{spawn_ball, spawn_bricks, spawn_paddle};
use super::input::InputState;
use crate::physics::{Body, BodyId, World};
use crate::tuning::Tuning;

/// Fixed rectangular bounds, origin at the top-left, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        0.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        0.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height
    }
}

/// Grid position of a brick. `row` is 1-based from the top and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub col: u32,
}

/// Playfield edge the ball reflected off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball deflected by the paddle with the given new velocity
    PaddleHit { vel: Vec2 },
    /// Ball reflected off a playfield edge
    WallBounce { wall: Wall },
    /// A brick was struck and removed
    BrickDestroyed { id: BodyId, row: u32, col: u32 },
    /// Ball fell past the floor and was relaunched above the paddle
    BallReset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub playfield: Playfield,
    /// Held-key flags, read once per tick by the paddle controller
    pub input: InputState,
    /// Simulation tick counter
    pub time_ticks: u64,
    world: World,
    ball: BodyId,
    paddle: BodyId,
    /// Bricks still in play, keyed by their body
    bricks: BTreeMap<BodyId, Brick>,
}

impl GameState {
    /// Build the world and spawn paddle, ball and brick grid
    pub fn new(tuning: Tuning) -> Self {
        let playfield = Playfield::new(tuning.playfield_width, tuning.playfield_height);
        let mut world = World::new(Vec2::ZERO);

        let paddle = spawn_paddle(&mut world, &tuning);
        let ball = spawn_ball(&mut world, &tuning);
        let bricks = spawn_bricks(&mut world, &tuning);

        log::info!(
            "Game state created: {}x{} playfield, {} bricks",
            playfield.width,
            playfield.height,
            bricks.len()
        );

        Self {
            tuning,
            playfield,
            input: InputState::default(),
            time_ticks: 0,
            world,
            ball,
            paddle,
            bricks,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access; bricks must be removed through [`GameState::remove_brick`]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball_id(&self) -> BodyId {
        self.ball
    }

    pub fn paddle_id(&self) -> BodyId {
        self.paddle
    }

    pub fn ball(&self) -> Option<&Body> {
        self.world.get(self.ball)
    }

    pub fn paddle(&self) -> Option<&Body> {
        self.world.get(self.paddle)
    }

    /// Bricks still in play, in body id order
    pub fn bricks(&self) -> &BTreeMap<BodyId, Brick> {
        &self.bricks
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_brick(&self, id: BodyId) -> bool {
        self.bricks.contains_key(&id)
    }

    /// Remove a brick from play for good. Returns `None` if it was already gone.
    pub fn remove_brick(&mut self, id: BodyId) -> Option<Brick> {
        let brick = self.bricks.remove(&id)?;
        self.world.remove(id);
        Some(brick)
    }
}
