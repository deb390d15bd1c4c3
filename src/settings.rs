//! Game settings and tuning
//!
//! Defaults come from `consts`. Tests and embedders adjust individual fields
//! with struct update syntax and must call `validate` before building a world.

use glam::Vec2;
use thiserror::Error;

use crate::consts::*;

/// Errors raised while validating settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulation and menu tuning
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    /// Per-frame travel while a movement key is held
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Resultant speed after a paddle bounce
    pub ball_speed: f32,
    pub serve_vx: f32,
    pub serve_vy: f32,

    // === Deflection ===
    pub min_hit_offset: f32,
    pub max_hit_offset: f32,

    // === Scoring ===
    pub score_bound: f32,

    // === Menu ===
    /// Show the Options button (its action is an empty hook)
    pub options_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            left_paddle_x: LEFT_PADDLE_X,
            right_paddle_x: RIGHT_PADDLE_X,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            serve_vx: SERVE_VX,
            serve_vy: SERVE_VY,

            min_hit_offset: MIN_HIT_OFFSET,
            max_hit_offset: MAX_HIT_OFFSET,

            score_bound: SCORE_BOUND,

            options_enabled: false,
        }
    }
}

impl Settings {
    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a finite value greater than zero",
                })
            }
        }

        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_step", self.paddle_step)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        positive("serve_vx", self.serve_vx)?;
        positive("serve_vy", self.serve_vy)?;

        if self.paddle_height > FIELD_MAX_Y - FIELD_MIN_Y {
            return Err(SettingsError::Invalid {
                field: "paddle_height",
                reason: "must fit inside the playfield",
            });
        }
        if !(self.min_hit_offset > 0.0 && self.min_hit_offset <= self.max_hit_offset) {
            return Err(SettingsError::Invalid {
                field: "min_hit_offset",
                reason: "must be greater than zero and at most max_hit_offset",
            });
        }
        if self.max_hit_offset >= 1.0 {
            return Err(SettingsError::Invalid {
                field: "max_hit_offset",
                reason: "must be less than one",
            });
        }
        if !(self.score_bound > 1.0 && self.score_bound.is_finite()) {
            return Err(SettingsError::Invalid {
                field: "score_bound",
                reason: "must lie outside the playfield",
            });
        }
        if self.left_paddle_x + self.paddle_width >= self.right_paddle_x {
            return Err(SettingsError::Invalid {
                field: "left_paddle_x",
                reason: "left paddle must sit left of the right paddle",
            });
        }
        Ok(())
    }

    /// Serve velocity magnitudes as a vector
    pub fn serve_velocity(&self) -> Vec2 {
        Vec2::new(self.serve_vx, self.serve_vy)
    }
}
