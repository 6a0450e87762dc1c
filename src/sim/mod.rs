//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by body ID)
//! - No wgpu or browser APIs; bodies only carry an RGBA fill for the renderer to read

pub mod entities;
pub mod input;
pub mod paddle;
pub mod rules;
pub mod state;
pub mod tick;

pub use input::{Direction, InputState, Key, KeyEvent};
pub use paddle::{move_paddle, next_paddle_x};
pub use rules::{apply_boundaries, paddle_bounce, reset_ball, respond_to_collisions};
pub use state::{Brick, GameEvent, GameState, Playfield, Wall};
pub use tick::{TickInput, tick};
