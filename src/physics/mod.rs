//! Rigid-body physics world
//!
//! A small engine: axis-aligned rectangles and circles, explicit
//! per-tick integration, and collision-start notifications. Velocities are in
//! units per step. Gameplay rules live in `sim` and only talk to the world
//! through its setters and the pairs returned by `World::step`.

pub mod body;
pub mod collision;
pub mod world;

pub use body::{Aabb, Body, BodyDesc, BodyId, BodyKind, Material, Shape};
pub use collision::{CollisionResult, bounce_velocity, circle_rect_collision};
pub use world::{CollisionPair, World};
