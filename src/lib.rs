//! Brickfall - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `physics`: Small rigid-body world (bodies, integration, collision-start events)
//! - `sim`: Gameplay rules layered on the physics world (paddle, walls, bricks, reset)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod physics;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{BounceNormalization, PaddleClamp, Tuning, TuningError};

/// Game configuration constants
///
/// These are the defaults baked into [`Tuning::default`]. Velocities are in
/// playfield units per simulation tick.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one physics tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (also the drawing surface size)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the bottom edge to the paddle center
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
    /// Horizontal distance moved per tick while a key is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance from the bottom edge to the ball spawn point
    pub const BALL_BOTTOM_OFFSET: f32 = 80.0;
    pub const BALL_LAUNCH_VELOCITY: [f32; 2] = [2.0, 5.0];

    /// Speed used for the horizontal component of a paddle bounce
    pub const BOUNCE_SPEED: f32 = 5.0;
    /// Maximum deflection from vertical on a paddle bounce (45°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Reset: ball reappears this far above the paddle center
    pub const RESET_OFFSET: f32 = 30.0;
    pub const RESET_VELOCITY: [f32; 2] = [2.0, -5.0];

    /// Brick grid
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 10.0;
    /// Center of the top-left brick
    pub const BRICK_ORIGIN: [f32; 2] = [75.0, 50.0];

    /// Speed multipliers indexed by `row - 1`; rows past the end keep speed
    pub const ROW_SPEED_MULTIPLIERS: [f32; 3] = [1.0, 1.2, 1.4];
}
