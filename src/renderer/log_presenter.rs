//! Headless presenter that reports draw calls through `log`
//!
//! Used by the native binary until a window backend is wired in, and handy
//! for tracing a run.

use glam::Vec2;

use super::{Color, Presenter};
use crate::sim::Rect;

/// Presenter that logs every call at trace level and counts frames
#[derive(Debug, Clone, Default)]
pub struct LogPresenter {
    frames: u64,
    draw_calls: u64,
    last_text: Vec<String>,
    pending_text: Vec<String>,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls issued so far, excluding clears and presents
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Text drawn in the most recently presented frame
    pub fn last_text(&self) -> &[String] {
        &self.last_text
    }
}

impl Presenter for LogPresenter {
    fn clear(&mut self, color: Color) {
        log::trace!("clear {:?}", color);
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.draw_calls += 1;
        log::trace!("fill {:?} {:?}", rect, color);
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.draw_calls += 1;
        log::trace!("outline {:?} {:?}", rect, color);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32) {
        self.draw_calls += 1;
        self.pending_text.push(text.to_string());
        log::trace!("text {:?} at {:?} size {}", text, position, size);
    }

    fn draw_triangle(&mut self, alpha: f32) {
        self.draw_calls += 1;
        log::trace!("triangle alpha {}", alpha);
    }

    fn present(&mut self) {
        self.frames += 1;
        self.last_text = std::mem::take(&mut self.pending_text);
        log::trace!("present frame {}", self.frames);
    }
}
