//! One simulation step per frame
//!
//! Paddles, then ball integration, wall bounce, paddle bounce (left before
//! right), and scoring. No sub-stepping; velocities are small relative to the
//! frame rate.

use super::collision::{bounce_off_paddle, wall_bounce};
use super::state::{GameEvent, GameWorld, Paddle, Side};

/// Held movement keys for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// W
    pub left_up: bool,
    /// S
    pub left_down: bool,
    /// Up arrow
    pub right_up: bool,
    /// Down arrow
    pub right_down: bool,
}

/// Advance the world by one frame and report what happened, in order
pub fn tick(world: &mut GameWorld, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    let step = world.settings.paddle_step;
    move_paddle(&mut world.left, input.left_up, input.left_down, step);
    move_paddle(&mut world.right, input.right_up, input.right_down, step);

    world.ball.pos += world.ball.vel;

    if wall_bounce(&mut world.ball) {
        events.push(GameEvent::WallBounce);
    }

    let speed = world.settings.ball_speed;
    let (min_hit, max_hit) = (world.settings.min_hit_offset, world.settings.max_hit_offset);
    if bounce_off_paddle(&mut world.ball, &world.left, Side::Left, speed, min_hit, max_hit) {
        log::debug!("Left paddle hit, ball vel now {:?}", world.ball.vel);
        events.push(GameEvent::PaddleHit(Side::Left));
    } else if bounce_off_paddle(&mut world.ball, &world.right, Side::Right, speed, min_hit, max_hit)
    {
        log::debug!("Right paddle hit, ball vel now {:?}", world.ball.vel);
        events.push(GameEvent::PaddleHit(Side::Right));
    }

    if let Some(side) = scoring_side(world.ball.pos.x, world.settings.score_bound) {
        world.score.award(side);
        world.reset_ball();
        log::info!(
            "{:?} scores ({} - {})",
            side,
            world.score.left(),
            world.score.right()
        );
        events.push(GameEvent::Scored(side));
    }

    events
}

/// Apply held keys (up is +y) and keep the paddle on the field
fn move_paddle(paddle: &mut Paddle, up: bool, down: bool, step: f32) {
    if up {
        paddle.y += step;
    }
    if down {
        paddle.y -= step;
    }
    paddle.clamp_to_field();
}

/// Side awarded a point when the ball centre is at `x`, if any
fn scoring_side(x: f32, bound: f32) -> Option<Side> {
    if x < -bound {
        Some(Side::Right)
    } else if x > bound {
        Some(Side::Left)
    } else {
        None
    }
}
