//! Game world and core simulation types
//!
//! Everything the frame loop mutates during play lives in `GameWorld`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::clamp;
use crate::consts::{FIELD_MAX_Y, FIELD_MIN_Y};
use crate::settings::Settings;

/// Which side of the field a paddle or point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Something that happened during a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball velocity flipped at the top or bottom wall
    WallBounce,
    /// Ball deflected off the given side's paddle
    PaddleHit(Side),
    /// The given side won a point
    Scored(Side),
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Minimum corner
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Paddle {
    /// Paddle at column `x`, vertically centred on the field
    pub fn centered(x: f32, w: f32, h: f32) -> Self {
        debug_assert!(h > 0.0, "paddle height must be positive");
        Self { x, y: -h / 2.0, w, h }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Whether `y` lies within the paddle's vertical span (inclusive)
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.h
    }

    /// Keep the whole paddle inside the vertical field bounds
    pub fn clamp_to_field(&mut self) {
        self.y = clamp(self.y, FIELD_MIN_Y, FIELD_MAX_Y - self.h);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Per-frame velocity
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Recentre and serve diagonally with independently random signs
    pub fn reset(&mut self, serve: Vec2, rng: &mut impl Rng) {
        self.pos = Vec2::ZERO;
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(serve.x.abs() * sx, serve.y.abs() * sy);
    }

    /// Square used to draw the ball
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.pos, self.radius)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    left: u32,
    right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    /// Award one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// All mutable simulation state
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub settings: Settings,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation steps run so far
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameWorld {
    /// Build a world from validated settings with the given RNG seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        debug_assert!(settings.validate().is_ok(), "settings must be validated");

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(settings.ball_radius);
        ball.reset(settings.serve_velocity(), &mut rng);

        Self {
            left: Paddle::centered(
                settings.left_paddle_x,
                settings.paddle_width,
                settings.paddle_height,
            ),
            right: Paddle::centered(
                settings.right_paddle_x,
                settings.paddle_width,
                settings.paddle_height,
            ),
            ball,
            score: Score::new(),
            time_ticks: 0,
            settings,
            rng,
        }
    }

    /// Recentre the ball and serve it in a random diagonal direction
    pub fn reset_ball(&mut self) {
        let serve = self.settings.serve_velocity();
        self.ball.reset(serve, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let world = GameWorld::new(Settings::default(), 7);
        assert_eq!(world.left.rect(), Rect::new(-0.9, -0.15, 0.05, 0.3));
        assert_eq!(world.right.rect(), Rect::new(0.85, -0.15, 0.05, 0.3));
        assert_eq!(world.ball.pos, Vec2::ZERO);
        assert_eq!(world.ball.vel.x.abs(), 0.01);
        assert_eq!(world.ball.vel.y.abs(), 0.015);
        assert_eq!(world.score, Score::new());
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameWorld::new(Settings::default(), 42);
        let b = GameWorld::new(Settings::default(), 42);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_reset_covers_all_diagonals() {
        let mut world = GameWorld::new(Settings::default(), 1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            world.ball.pos = Vec2::new(0.5, 0.5);
            world.reset_ball();
            assert_eq!(world.ball.pos, Vec2::ZERO);
            seen.insert((world.ball.vel.x > 0.0, world.ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4, "every sign combination should appear");
    }

    #[test]
    fn test_paddle_clamp_to_field() {
        let mut paddle = Paddle::centered(-0.9, 0.05, 0.3);
        paddle.y = 0.95;
        paddle.clamp_to_field();
        assert!((paddle.y - 0.7).abs() < 1e-6);

        paddle.y = -1.4;
        paddle.clamp_to_field();
        assert_eq!(paddle.y, -1.0);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::new();
        score.award(Side::Left);
        score.award(Side::Left);
        score.award(Side::Right);
        assert_eq!(score.left(), 2);
        assert_eq!(score.right(), 1);
    }
}
