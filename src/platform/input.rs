//! Input sampling
//!
//! Turns raw window-system state into a per-frame `InputFrame`: cursor in
//! normalized device coordinates, edge-tracked pointer and Escape, and held
//! movement keys.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub w: bool,
    pub s: bool,
    pub up: bool,
    pub down: bool,
    pub escape: bool,
}

/// Raw state handed over by the window system each frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    /// Cursor position in window (logical) pixels, origin top-left
    pub cursor: (f64, f64),
    /// Window logical size
    pub window_size: (u32, u32),
    /// Framebuffer size in physical pixels
    pub framebuffer_size: (u32, u32),
    pub keys: KeyState,
    /// Primary pointer button held
    pub primary_button: bool,
}

/// Two-frame view of a button, for detecting presses and releases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdge {
    pub current: bool,
    pub previous: bool,
}

impl InputEdge {
    /// Record this frame's state
    #[inline]
    pub fn set(&mut self, down: bool) {
        self.current = down;
    }

    /// Down this frame, up last frame
    #[inline]
    pub fn just_pressed(&self) -> bool {
        self.current && !self.previous
    }

    #[inline]
    pub fn just_released(&self) -> bool {
        !self.current && self.previous
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.current
    }

    /// Roll this frame into the previous-frame slot
    #[inline]
    pub fn advance(&mut self) {
        self.previous = self.current;
    }
}

/// Everything the game consumes from input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Cursor in NDC, y up
    pub mouse: Vec2,
    pub primary: InputEdge,
    pub escape: InputEdge,
    pub keys: KeyState,
}

impl InputFrame {
    /// Held movement keys as simulation input
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left_up: self.keys.w,
            left_down: self.keys.s,
            right_up: self.keys.up,
            right_down: self.keys.down,
        }
    }
}

/// Convert a window-pixel cursor position to NDC.
///
/// The cursor is scaled by the framebuffer/window ratio first so high-DPI
/// surfaces map correctly. Degenerate sizes map to the origin.
pub fn cursor_to_ndc(
    cursor: (f64, f64),
    window_size: (u32, u32),
    framebuffer_size: (u32, u32),
) -> Vec2 {
    let (win_w, win_h) = window_size;
    let (fb_w, fb_h) = framebuffer_size;
    if win_w == 0 || win_h == 0 || fb_w == 0 || fb_h == 0 {
        return Vec2::ZERO;
    }

    let scale_x = fb_w as f64 / win_w as f64;
    let scale_y = fb_h as f64 / win_h as f64;
    let fb_x = cursor.0 * scale_x;
    let fb_y = cursor.1 * scale_y;

    Vec2::new(
        (fb_x / fb_w as f64 * 2.0 - 1.0) as f32,
        (1.0 - fb_y / fb_h as f64 * 2.0) as f32,
    )
}

/// Owns the previous-frame state for edge-triggered buttons
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    primary: InputEdge,
    escape: InputEdge,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample this frame's state. Call `advance` once the frame is done.
    pub fn sample(&mut self, raw: &RawInput) -> InputFrame {
        self.primary.set(raw.primary_button);
        self.escape.set(raw.keys.escape);

        InputFrame {
            mouse: cursor_to_ndc(raw.cursor, raw.window_size, raw.framebuffer_size),
            primary: self.primary,
            escape: self.escape,
            keys: raw.keys,
        }
    }

    /// Roll current state into previous; exactly once per frame
    pub fn advance(&mut self) {
        self.primary.advance();
        self.escape.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(cursor: (f64, f64), primary: bool) -> RawInput {
        RawInput {
            cursor,
            window_size: (500, 500),
            framebuffer_size: (500, 500),
            primary_button: primary,
            ..Default::default()
        }
    }

    #[test]
    fn test_ndc_corners_and_centre() {
        let size = (500, 500);
        assert_eq!(cursor_to_ndc((0.0, 0.0), size, size), Vec2::new(-1.0, 1.0));
        assert_eq!(cursor_to_ndc((500.0, 500.0), size, size), Vec2::new(1.0, -1.0));
        assert_eq!(cursor_to_ndc((250.0, 250.0), size, size), Vec2::ZERO);
    }

    #[test]
    fn test_ndc_high_dpi() {
        // Retina: framebuffer is twice the logical size
        let ndc = cursor_to_ndc((125.0, 375.0), (500, 500), (1000, 1000));
        assert!((ndc - Vec2::new(-0.5, -0.5)).length() < 1e-6);
    }

    #[test]
    fn test_ndc_degenerate_window() {
        assert_eq!(cursor_to_ndc((10.0, 10.0), (0, 0), (0, 0)), Vec2::ZERO);
    }

    #[test]
    fn test_edge_fires_once_per_press() {
        let mut sampler = InputSampler::new();
        let mut presses = 0;
        for down in [false, true, true, true, false, true] {
            let frame = sampler.sample(&raw((0.0, 0.0), down));
            if frame.primary.just_pressed() {
                presses += 1;
            }
            sampler.advance();
        }
        assert_eq!(presses, 2);
    }

    #[test]
    fn test_release_edge() {
        let mut sampler = InputSampler::new();
        sampler.sample(&raw((0.0, 0.0), true));
        sampler.advance();
        let frame = sampler.sample(&raw((0.0, 0.0), false));
        assert!(frame.primary.just_released());
        assert!(!frame.primary.is_down());
    }

    #[test]
    fn test_without_advance_edge_persists() {
        let mut sampler = InputSampler::new();
        let first = sampler.sample(&raw((0.0, 0.0), true));
        let second = sampler.sample(&raw((0.0, 0.0), true));
        assert!(first.primary.just_pressed());
        assert!(second.primary.just_pressed());
    }

    #[test]
    fn test_movement_keys_are_held_state() {
        let mut sampler = InputSampler::new();
        let mut input = raw((0.0, 0.0), false);
        input.keys.w = true;
        input.keys.down = true;
        for _ in 0..3 {
            let tick = sampler.sample(&input).tick_input();
            assert!(tick.left_up && tick.right_down);
            assert!(!tick.left_down && !tick.right_up);
            sampler.advance();
        }
    }
}
