//! Game tuning and balance
//!
//! Every gameplay constant lives here so a page can override them with a JSON
//! document. `Tuning::default()` reproduces the classic layout exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How the paddle controller decides whether a move would leave the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddleClamp {
    /// Both edges inclusive: the paddle may sit flush against either wall
    #[default]
    Symmetric,
    /// Right edge uses the strict `x + speed < width - half_width` check of the
    /// first release; the paddle stops one step short of the right wall
    Legacy,
}

/// What the paddle hit offset is divided by before it becomes a bounce angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BounceNormalization {
    /// Offset over the half width: the paddle edges deflect at the full angle
    #[default]
    HalfWidth,
    /// Offset over the full width, as in the first release: the edges only
    /// reach half the maximum angle
    FullWidth,
}

/// Errors from loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Paddle ===
    pub paddle_size: Vec2,
    /// Distance from the bottom edge to the paddle center
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,
    pub paddle_clamp: PaddleClamp,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_bottom_offset: f32,
    pub launch_velocity: Vec2,
    pub bounce_speed: f32,
    /// Radians
    pub max_bounce_angle: f32,
    pub bounce_normalization: BounceNormalization,
    pub reset_offset: f32,
    pub reset_velocity: Vec2,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_size: Vec2,
    pub brick_gap: f32,
    pub brick_origin: Vec2,
    /// Multiplier applied to the ball velocity when a brick of row `i + 1` breaks.
    /// Rows without an entry leave the speed unchanged.
    pub row_speed_multipliers: Vec<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,
            paddle_clamp: PaddleClamp::default(),

            ball_radius: BALL_RADIUS,
            ball_bottom_offset: BALL_BOTTOM_OFFSET,
            launch_velocity: Vec2::from_array(BALL_LAUNCH_VELOCITY),
            bounce_speed: BOUNCE_SPEED,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            bounce_normalization: BounceNormalization::default(),
            reset_offset: RESET_OFFSET,
            reset_velocity: Vec2::from_array(RESET_VELOCITY),

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_gap: BRICK_GAP,
            brick_origin: Vec2::from_array(BRICK_ORIGIN),
            row_speed_multipliers: ROW_SPEED_MULTIPLIERS.to_vec(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("paddle_size.x", self.paddle_size.x)?;
        positive("paddle_size.y", self.paddle_size.y)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_radius", self.ball_radius)?;
        positive("bounce_speed", self.bounce_speed)?;
        positive("brick_size.x", self.brick_size.x)?;
        positive("brick_size.y", self.brick_size.y)?;

        if self.paddle_size.x > self.playfield_width {
            return Err(TuningError::Invalid {
                field: "paddle_size.x",
                reason: "paddle is wider than the playfield",
            });
        }
        let half_paddle = self.paddle_half_extents().y;
        let paddle_range = half_paddle..=self.playfield_height - half_paddle;
        if !paddle_range.contains(&self.paddle_bottom_offset) {
            return Err(TuningError::Invalid {
                field: "paddle_bottom_offset",
                reason: "paddle must sit inside the playfield",
            });
        }
        // Height above the floor, strictly clear of floor and ceiling
        let inside = |y_from_bottom: f32| {
            y_from_bottom > self.ball_radius
                && y_from_bottom < self.playfield_height - self.ball_radius
        };
        if !inside(self.ball_bottom_offset) {
            return Err(TuningError::Invalid {
                field: "ball_bottom_offset",
                reason: "ball must spawn clear of the top and bottom edges",
            });
        }
        let reset_height = self.paddle_bottom_offset + self.reset_offset;
        if !inside(reset_height) {
            return Err(TuningError::Invalid {
                field: "reset_offset",
                reason: "relaunched ball must be clear of the top and bottom edges",
            });
        }
        if !(0.0..=std::f32::consts::FRAC_PI_2).contains(&self.max_bounce_angle) {
            return Err(TuningError::Invalid {
                field: "max_bounce_angle",
                reason: "must be between 0 and pi/2 radians",
            });
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(TuningError::Invalid {
                field: "brick_rows",
                reason: "brick grid must have at least one row and column",
            });
        }
        if self
            .row_speed_multipliers
            .iter()
            .any(|m| !m.is_finite() || *m < 0.0)
        {
            return Err(TuningError::Invalid {
                field: "row_speed_multipliers",
                reason: "multipliers must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Ball speed multiplier for a destroyed brick in `row` (1-based)
    pub fn speed_multiplier(&self, row: u32) -> f32 {
        row.checked_sub(1)
            .and_then(|i| self.row_speed_multipliers.get(i as usize))
            .copied()
            .unwrap_or(1.0)
    }

    /// Half extents of the paddle
    #[inline]
    pub fn paddle_half_extents(&self) -> Vec2 {
        self.paddle_size / 2.0
    }

    /// Horizontal distance from the paddle center that maps to `max_bounce_angle`
    pub fn bounce_span(&self) -> f32 {
        match self.bounce_normalization {
            BounceNormalization::HalfWidth => self.paddle_half_extents().x,
            BounceNormalization::FullWidth => self.paddle_size.x,
        }
    }

    /// Center of the brick at `row`, `col` (both 0-based)
    pub fn brick_center(&self, row: u32, col: u32) -> Vec2 {
        let step = self.brick_size + Vec2::splat(self.brick_gap);
        self.brick_origin + Vec2::new(col as f32 * step.x, row as f32 * step.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_multipliers() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_multiplier(1), 1.0);
        assert_eq!(tuning.speed_multiplier(2), 1.2);
        assert_eq!(tuning.speed_multiplier(3), 1.4);
        // Rows 4 and 5 have no entry and keep the current speed
        assert_eq!(tuning.speed_multiplier(4), 1.0);
        assert_eq!(tuning.speed_multiplier(5), 1.0);
        assert_eq!(tuning.speed_multiplier(0), 1.0);
    }

    #[test]
    fn test_brick_layout() {
        let tuning = Tuning::default();
        assert_eq!(tuning.brick_center(0, 0), Vec2::new(75.0, 50.0));
        assert_eq!(tuning.brick_center(0, 9), Vec2::new(795.0, 50.0));
        assert_eq!(tuning.brick_center(4, 1), Vec2::new(155.0, 170.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "paddle_speed": 8.0, "paddle_clamp": "legacy" }"#)
            .expect("valid document");
        assert_eq!(tuning.paddle_speed, 8.0);
        assert_eq!(tuning.paddle_clamp, PaddleClamp::Legacy);
        assert_eq!(tuning.brick_rows, BRICK_ROWS);
        assert_eq!(tuning.reset_velocity, Vec2::new(2.0, -5.0));
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "ball_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "ball_radius",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "brick_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));

        let err = Tuning::from_json(r#"{ "row_speed_multipliers": [1.0, -2.0] }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "row_speed_multipliers",
                ..
            }
        ));
    }

    fn invalid_field(json: &str) -> Option<&'static str> {
        match Tuning::from_json(json) {
            Err(TuningError::Invalid { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_rejects_offsets_outside_playfield() {
        assert_eq!(
            invalid_field(r#"{ "paddle_bottom_offset": 700.0 }"#),
            Some("paddle_bottom_offset")
        );
        assert_eq!(
            invalid_field(r#"{ "paddle_bottom_offset": 5.0 }"#),
            Some("paddle_bottom_offset")
        );
        // Paddle flush with the floor is fine
        assert_eq!(
            invalid_field(r#"{ "paddle_bottom_offset": 10.0, "reset_offset": 30.0 }"#),
            None
        );

        assert_eq!(
            invalid_field(r#"{ "ball_bottom_offset": 10.0 }"#),
            Some("ball_bottom_offset")
        );
        assert_eq!(
            invalid_field(r#"{ "ball_bottom_offset": 595.0 }"#),
            Some("ball_bottom_offset")
        );

        // 50 + (-45) leaves the relaunched ball touching the floor
        assert_eq!(
            invalid_field(r#"{ "reset_offset": -45.0 }"#),
            Some("reset_offset")
        );
        assert_eq!(
            invalid_field(r#"{ "reset_offset": 545.0 }"#),
            Some("reset_offset")
        );
    }

    #[test]
    fn test_max_bounce_angle_range() {
        assert_eq!(
            invalid_field(r#"{ "max_bounce_angle": -0.1 }"#),
            Some("max_bounce_angle")
        );
        assert_eq!(
            invalid_field(r#"{ "max_bounce_angle": 2.0 }"#),
            Some("max_bounce_angle")
        );
        assert_eq!(invalid_field(r#"{ "max_bounce_angle": 0.0 }"#), None);
        assert_eq!(invalid_field(r#"{ "max_bounce_angle": 1.5 }"#), None);
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_bounce_span() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bounce_normalization, BounceNormalization::HalfWidth);
        assert_eq!(tuning.bounce_span(), 60.0);

        let tuning = Tuning::from_json(r#"{ "bounce_normalization": "full_width" }"#).unwrap();
        assert_eq!(tuning.bounce_span(), 120.0);
    }
}
