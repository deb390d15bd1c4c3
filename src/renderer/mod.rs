//! Presentation boundary
//!
//! The game never talks to a graphics API directly. Each frame it describes
//! what to show through the `Presenter` trait; a window backend implements it.

pub mod draw;
pub mod log_presenter;

pub use draw::{draw_frame, draw_intro_frame};
pub use log_presenter::LogPresenter;

use glam::Vec2;

use crate::sim::Rect;

/// RGBA colour, components in [0, 1]
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.2, 0.2, 0.2, 1.0];
    pub const BUTTON_FILL: Color = [0.5, 0.5, 0.5, 1.0];
    pub const BUTTON_OUTLINE: Color = [0.5, 0.5, 0.5, 1.0];
    pub const BUTTON_OUTLINE_SELECTED: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: Color = [1.0, 0.1, 0.1, 1.0];

    /// Opaque grey of the given level
    pub const fn grey(level: f32) -> Color {
        [level, level, level, 1.0]
    }
}

/// Drawing operations a window backend provides
pub trait Presenter {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);

    fn draw_filled_rect(&mut self, rect: Rect, color: Color);

    fn draw_rect_outline(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its baseline starting at `position` (NDC)
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32);

    /// The red/green/blue loading triangle, faded and scaled by `alpha`
    fn draw_triangle(&mut self, alpha: f32);

    /// Finish the frame (swap buffers)
    fn present(&mut self);
}
