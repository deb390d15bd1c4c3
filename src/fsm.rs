//! Game State Machine
//!
//! Top-level mode: main menu or playing, plus a terminal state once the
//! player quits.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FsmState {
    #[default]
    MainMenu,
    Playing,
    /// Terminal; the frame loop stops
    Terminated,
}

/// Triggers for state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTrigger {
    PlayClicked,
    ExitClicked,
    /// Escape pressed this frame (not held)
    EscapePressed,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub trigger: GameTrigger,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::MainMenu,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, trigger: GameTrigger) -> bool {
        self.next_state(trigger).is_some()
    }

    /// Attempt a transition; invalid triggers leave the state unchanged
    pub fn transition(&mut self, trigger: GameTrigger) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(trigger) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("State {:?} -> {:?} ({:?})", from_state, next_state, trigger);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    trigger,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                trigger,
            },
        }
    }

    fn next_state(&self, trigger: GameTrigger) -> Option<FsmState> {
        match (self.state, trigger) {
            (FsmState::MainMenu, GameTrigger::PlayClicked) => Some(FsmState::Playing),
            (FsmState::MainMenu, GameTrigger::ExitClicked) => Some(FsmState::Terminated),
            (FsmState::MainMenu, GameTrigger::EscapePressed) => Some(FsmState::Terminated),

            (FsmState::Playing, GameTrigger::EscapePressed) => Some(FsmState::MainMenu),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FsmState::Terminated
    }
}
