//! Platform abstraction layer
//!
//! The window system is an external collaborator. This module defines what
//! the game needs from it:
//! - Input snapshots (`RawInput`) and their per-frame sampling
//! - A pull-based `InputSource` that also reports window close

pub mod input;

pub use input::{InputEdge, InputFrame, InputSampler, KeyState, RawInput, cursor_to_ndc};

/// Supplies one raw input snapshot per frame
pub trait InputSource {
    /// Poll the window system. `None` means the window was closed.
    fn poll(&mut self) -> Option<RawInput>;
}

/// Plays back a fixed list of snapshots, then reports the window closed
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<RawInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` copies of `frame`
    pub fn hold(&mut self, frame: RawInput, count: usize) -> &mut Self {
        self.frames.extend(std::iter::repeat_n(frame, count));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<RawInput> {
        self.frames.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_drains_then_closes() {
        let mut source = ScriptedInput::default();
        source.hold(RawInput::default(), 2);
        assert_eq!(source.remaining(), 2);
        assert!(source.poll().is_some());
        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
    }
}
