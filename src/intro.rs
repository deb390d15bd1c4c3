//! Intro sequence shown before the main menu
//!
//! Two timelines: a grey fade-in, then a loading triangle that fades in,
//! holds for a second, and fades out. Each step is an `IntroFrame` the driver
//! draws and then waits out.

use std::time::Duration;

use crate::clamp;

/// Pause between the end of the loading animation and the menu
pub const POST_INTRO_PAUSE: Duration = Duration::from_secs(1);

const FADE_START: f32 = -0.5;
const FADE_END: f32 = 0.3;
const FADE_STEP: f32 = 0.02;
const FADE_MAX_GREY: f32 = 0.2;
const FADE_FRAME: Duration = Duration::from_millis(32);

const LOADING_GREY: f32 = 0.2;
const LOADING_STEP: f32 = 0.1;
const LOADING_FRAME: Duration = Duration::from_millis(25);
const LOADING_PEAK_HOLD: Duration = Duration::from_secs(1);

/// One frame of the intro
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroFrame {
    /// Grey level to clear to
    pub clear: f32,
    /// Loading triangle opacity, if drawn
    pub triangle_alpha: Option<f32>,
    /// How long to wait after presenting
    pub hold: Duration,
}

/// Grey fade-in from black
#[derive(Debug, Clone)]
pub struct FadeIn {
    counter: f32,
}

impl FadeIn {
    pub fn new() -> Self {
        Self {
            counter: FADE_START,
        }
    }
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FadeIn {
    type Item = IntroFrame;

    fn next(&mut self) -> Option<IntroFrame> {
        if self.counter >= FADE_END {
            return None;
        }
        let frame = IntroFrame {
            clear: clamp(self.counter, 0.0, FADE_MAX_GREY),
            triangle_alpha: None,
            hold: FADE_FRAME,
        };
        self.counter += FADE_STEP;
        Some(frame)
    }
}

/// Loading triangle: fade in, hold at the peak, fade out
#[derive(Debug, Clone)]
pub struct Loading {
    alpha: f32,
    fading_in: bool,
    done: bool,
}

impl Loading {
    pub fn new() -> Self {
        Self {
            alpha: 0.0,
            fading_in: true,
            done: false,
        }
    }
}

impl Default for Loading {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Loading {
    type Item = IntroFrame;

    fn next(&mut self) -> Option<IntroFrame> {
        if self.done {
            return None;
        }

        let drawn = self.alpha;
        let mut hold = LOADING_FRAME;

        if self.fading_in {
            self.alpha += LOADING_STEP;
        } else {
            self.alpha -= LOADING_STEP;
        }
        if self.alpha >= 1.0 {
            self.fading_in = false;
            hold += LOADING_PEAK_HOLD;
        }
        if self.alpha <= 0.0 && !self.fading_in {
            self.done = true;
        }

        Some(IntroFrame {
            clear: LOADING_GREY,
            triangle_alpha: Some(drawn),
            hold,
        })
    }
}

/// Fade-in followed by the loading animation
pub fn intro_sequence() -> impl Iterator<Item = IntroFrame> {
    FadeIn::new().chain(Loading::new())
}
