//! Collision detection and response for walls and paddles
//!
//! Paddle contact is an edge-crossing test on the paddle's inner face plus a
//! check that the ball *centre* lies within the paddle's vertical span. This
//! is not a full circle-rect test.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::{FIELD_MAX_Y, FIELD_MIN_Y};

/// Invert vertical velocity when the ball touches the top or bottom wall
/// while moving into it.
///
/// The position is left alone, so the ball may overlap the wall by up to one
/// frame of travel. A ball already heading out of the wall band keeps its
/// velocity.
pub fn wall_bounce(ball: &mut Ball) -> bool {
    let into_top = ball.pos.y + ball.radius >= FIELD_MAX_Y && ball.vel.y > 0.0;
    let into_bottom = ball.pos.y - ball.radius <= FIELD_MIN_Y && ball.vel.y < 0.0;
    if into_top || into_bottom {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Whether the ball touches the inner face of `side`'s paddle
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let crossed = match side {
        Side::Left => ball.pos.x - ball.radius <= paddle.x + paddle.w,
        Side::Right => ball.pos.x + ball.radius >= paddle.x,
    };
    crossed && paddle.spans(ball.pos.y)
}

/// Normalised hit position along the paddle, magnitude clamped into `[min, max]`.
///
/// A dead-centre hit counts as positive.
pub fn hit_offset(ball_y: f32, paddle: &Paddle, min: f32, max: f32) -> f32 {
    let raw = (ball_y - paddle.center_y()) / (paddle.h / 2.0);
    let sign = if raw < 0.0 { -1.0 } else { 1.0 };
    sign * raw.abs().clamp(min, max)
}

/// Outgoing velocity for a hit at `hit` on `side`'s paddle.
///
/// Horizontal direction points away from the paddle face. The result has
/// magnitude `speed` and `vy / |vx| == hit`.
pub fn deflect(hit: f32, speed: f32, side: Side) -> Vec2 {
    let away = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    let vx = away * (speed * speed / (1.0 + hit * hit)).sqrt();
    Vec2::new(vx, hit * vx.abs())
}

/// Resolve a ball/paddle contact. Returns true if the ball was deflected.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    speed: f32,
    min_hit: f32,
    max_hit: f32,
) -> bool {
    if !paddle_contact(ball, paddle, side) {
        return false;
    }

    let hit = hit_offset(ball.pos.y, paddle, min_hit, max_hit);
    ball.vel = deflect(hit, speed, side);

    // Sit flush against the face so the next frame doesn't re-trigger
    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.w + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn left_paddle() -> Paddle {
        Paddle::centered(-0.9, 0.05, 0.3)
    }

    fn right_paddle() -> Paddle {
        Paddle::centered(0.85, 0.05, 0.3)
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 0.03,
        }
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut ball = ball_at(0.0, 0.98, 0.01, 0.015);
        assert!(wall_bounce(&mut ball));
        assert_eq!(ball.vel.y, -0.015);
        // No positional correction
        assert_eq!(ball.pos.y, 0.98);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let mut ball = ball_at(0.0, -0.975, 0.01, -0.015);
        assert!(wall_bounce(&mut ball));
        assert_eq!(ball.vel.y, 0.015);
    }

    #[test]
    fn test_ball_leaving_wall_band_keeps_velocity() {
        let mut ball = ball_at(0.0, 0.99, 0.01, -0.015);
        assert!(!wall_bounce(&mut ball));
        assert_eq!(ball.vel.y, -0.015);

        let mut ball = ball_at(0.0, -0.99, 0.01, 0.015);
        assert!(!wall_bounce(&mut ball));
        assert_eq!(ball.vel.y, 0.015);
    }

    #[test]
    fn test_no_wall_bounce_midfield() {
        let mut ball = ball_at(0.0, 0.5, 0.01, 0.015);
        assert!(!wall_bounce(&mut ball));
        assert_eq!(ball.vel.y, 0.015);
    }

    #[test]
    fn test_centre_hit_on_left_paddle() {
        // Left paddle face at x = -0.85, centred on y = 0
        let paddle = left_paddle();
        let mut ball = ball_at(-0.83, 0.0, -0.01, 0.015);

        assert!(bounce_off_paddle(&mut ball, &paddle, Side::Left, 0.02, 0.1, 0.9));

        // hit offset clamps up to 0.1
        let expected_vx = (0.0004f32 / 1.01).sqrt();
        assert!((ball.vel.x - expected_vx).abs() < 1e-6);
        assert!((ball.vel.x - 0.0199).abs() < 1e-4);
        assert!((ball.vel.y - 0.1 * expected_vx).abs() < 1e-6);
        assert!((ball.pos.x - (paddle.x + paddle.w + ball.radius)).abs() < 1e-6);
    }

    #[test]
    fn test_right_paddle_sends_ball_left() {
        let paddle = right_paddle();
        let mut ball = ball_at(0.83, 0.1, 0.02, 0.0);

        assert!(bounce_off_paddle(&mut ball, &paddle, Side::Right, 0.02, 0.1, 0.9));
        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y > 0.0, "hit above centre deflects upward");
        assert!((ball.pos.x - (paddle.x - ball.radius)).abs() < 1e-6);
    }

    #[test]
    fn test_miss_outside_vertical_span() {
        let paddle = left_paddle();
        // Ball overlaps the face horizontally but its centre is above the paddle
        let mut ball = ball_at(-0.84, 0.17, -0.01, 0.0);
        let before = ball;
        assert!(!bounce_off_paddle(&mut ball, &paddle, Side::Left, 0.02, 0.1, 0.9));
        assert_eq!(ball, before);
    }

    #[test]
    fn test_span_test_is_inclusive() {
        let paddle = left_paddle();
        let ball = ball_at(-0.84, paddle.y + paddle.h, -0.01, 0.0);
        assert!(paddle_contact(&ball, &paddle, Side::Left));
    }

    #[test]
    fn test_edge_hit_clamps_to_max() {
        let paddle = left_paddle();
        let hit = hit_offset(paddle.y, &paddle, 0.1, 0.9);
        assert!((hit - -0.9).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_deflection_preserves_speed(hit in -0.9f32..=0.9f32) {
            for side in [Side::Left, Side::Right] {
                let vel = deflect(hit, 0.02, side);
                prop_assert!((vel.length_squared() - 0.0004).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_hit_offset_is_bounded(ball_y in -1.5f32..1.5f32, paddle_y in -1.0f32..0.7f32) {
            let mut paddle = left_paddle();
            paddle.y = paddle_y;
            let hit = hit_offset(ball_y, &paddle, 0.1, 0.9);
            prop_assert!(hit.abs() >= 0.1 - 1e-6);
            prop_assert!(hit.abs() <= 0.9 + 1e-6);
        }

        #[test]
        fn prop_deflection_angle_is_capped(ball_y in -0.149f32..0.149f32) {
            let paddle = left_paddle();
            let mut ball = ball_at(-0.84, ball_y, -0.015, 0.01);
            prop_assert!(bounce_off_paddle(&mut ball, &paddle, Side::Left, 0.02, 0.1, 0.9));
            let ratio = (ball.vel.y / ball.vel.x.abs()).abs();
            prop_assert!(ratio <= 0.9 + 1e-5);
            prop_assert!(ratio >= 0.1 - 1e-5);
            prop_assert!(ball.vel.x > 0.0);
        }
    }
}
