//! Axis-aligned rectangle geometry for buttons, paddles, and the ball's drawn square
//!
//! Rectangles live in normalized device coordinates (y up). `x, y` is the
//! minimum corner; the rectangle spans `[x, x + w] x [y, y + h]`.

use glam::Vec2;

/// An axis-aligned rectangle in NDC
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * half_extent` centred on `center`
    pub fn centered_square(center: Vec2, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive containment test (points on an edge count as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }

    /// Grow the rectangle by `amount` on every side
    pub fn inflate(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.w + amount * 2.0,
            self.h + amount * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior_and_exterior() {
        let rect = Rect::new(-0.5, 0.0, 1.0, 0.3);
        assert!(rect.contains(Vec2::new(0.0, 0.15)));
        assert!(!rect.contains(Vec2::new(0.0, 0.31)));
        assert!(!rect.contains(Vec2::new(-0.6, 0.1)));
    }

    #[test]
    fn test_contains_is_inclusive_on_edges() {
        let rect = Rect::new(-0.5, 0.0, 1.0, 0.3);
        assert!(rect.contains(Vec2::new(-0.5, 0.0)));
        assert!(rect.contains(Vec2::new(0.5, 0.3)));
        assert!(rect.contains(Vec2::new(0.5, 0.0)));
    }

    #[test]
    fn test_inflate() {
        let rect = Rect::new(-0.5, -0.7, 1.0, 0.3).inflate(0.01);
        assert!((rect.x - -0.51).abs() < 1e-6);
        assert!((rect.y - -0.71).abs() < 1e-6);
        assert!((rect.w - 1.02).abs() < 1e-6);
        assert!((rect.h - 0.32).abs() < 1e-6);
    }

    #[test]
    fn test_centered_square() {
        let rect = Rect::centered_square(Vec2::new(0.2, -0.1), 0.03);
        assert!((rect.center() - Vec2::new(0.2, -0.1)).length() < 1e-6);
        assert!((rect.w - 0.06).abs() < 1e-6);
        assert_eq!(rect.w, rect.h);
    }
}
