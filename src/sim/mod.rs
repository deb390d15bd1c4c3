//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Left paddle is always resolved before right
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_paddle, deflect, hit_offset, paddle_contact, wall_bounce};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GameWorld, Paddle, Score, Side};
pub use tick::{TickInput, tick};
