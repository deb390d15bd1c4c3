//! Paddle Pong - a two-paddle Pong game with a button-driven main menu
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, collisions, scoring)
//! - `platform`: Raw input sampling and edge detection
//! - `ui`: Main menu buttons and click dispatch
//! - `fsm`: Menu/play state machine
//! - `game`: Per-frame loop tying the above together
//! - `renderer`: Presentation boundary and the draw pass
//! - `intro`: Fade-in and loading timelines

pub mod fsm;
pub mod game;
pub mod intro;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{FrameReport, Game, RunSummary, play_intro, run};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window defaults (logical pixels)
    pub const WINDOW_WIDTH: u32 = 500;
    pub const WINDOW_HEIGHT: u32 = 500;
    pub const WINDOW_TITLE: &str = "Engine";

    /// Playfield vertical bounds in NDC
    pub const FIELD_MIN_Y: f32 = -1.0;
    pub const FIELD_MAX_Y: f32 = 1.0;

    /// Paddle defaults - both start vertically centred
    pub const PADDLE_WIDTH: f32 = 0.05;
    pub const PADDLE_HEIGHT: f32 = 0.3;
    pub const LEFT_PADDLE_X: f32 = -0.9;
    pub const RIGHT_PADDLE_X: f32 = 0.85;
    /// Vertical distance a paddle travels per frame while its key is held
    pub const PADDLE_STEP: f32 = 0.02;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.03;
    /// Resultant speed after a paddle bounce (per frame)
    pub const BALL_SPEED: f32 = 0.02;
    /// Serve velocity components; signs are randomised on every reset
    pub const SERVE_VX: f32 = 0.01;
    pub const SERVE_VY: f32 = 0.015;

    /// Bounds on the normalised hit offset along the paddle face
    pub const MIN_HIT_OFFSET: f32 = 0.1;
    pub const MAX_HIT_OFFSET: f32 = 0.9;

    /// Ball centre |x| past which a point is scored
    pub const SCORE_BOUND: f32 = 1.1;

    /// Outline inflation around menu buttons
    pub const BUTTON_BORDER: f32 = 0.01;
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics when `min > max`; `min` wins.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5, 0.0, 0.2), 0.0);
        assert_eq!(clamp(0.1, 0.0, 0.2), 0.1);
        assert_eq!(clamp(0.3, 0.0, 0.2), 0.2);
    }

    #[test]
    fn test_clamp_inverted_bounds_prefers_min() {
        assert_eq!(clamp(5.0, 1.0, 0.0), 1.0);
    }
}
