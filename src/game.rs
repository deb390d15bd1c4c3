//! Frame loop
//!
//! `Game` owns every piece of mutable state. Each frame: sample input, run
//! either the menu or the simulation depending on the state machine, then
//! roll the input snapshot forward exactly once.

use crate::fsm::{FsmState, GameFsm, GameTrigger};
use crate::intro::{POST_INTRO_PAUSE, intro_sequence};
use crate::platform::{InputSampler, InputSource, RawInput};
use crate::renderer::{Presenter, draw_frame, draw_intro_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameWorld, Score, tick};
use crate::ui::{Menu, MenuAction, MenuButton};

/// What happened during one `Game::update`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// State after the frame
    pub state: FsmState,
    /// Hovered menu button (menu frames only)
    pub selected: Option<MenuButton>,
    /// Menu click fired this frame
    pub action: Option<MenuAction>,
    /// Simulation events (play frames only)
    pub events: Vec<GameEvent>,
}

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    fsm: GameFsm,
    sampler: InputSampler,
    menu: Menu,
    world: GameWorld,
    selected: Option<MenuButton>,
    frames: u64,
}

impl Game {
    /// Build a game from validated settings
    pub fn new(settings: Settings, seed: u64) -> Self {
        let menu = Menu::new(settings.options_enabled);
        Self {
            fsm: GameFsm::new(),
            sampler: InputSampler::new(),
            menu,
            world: GameWorld::new(settings, seed),
            selected: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn score(&self) -> Score {
        self.world.score
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raised by Exit or by Escape from the menu
    pub fn should_exit(&self) -> bool {
        self.fsm.is_terminated()
    }

    /// Advance one frame
    pub fn update(&mut self, raw: &RawInput) -> FrameReport {
        let frame = self.sampler.sample(raw);
        let mut report = FrameReport::default();

        match self.fsm.state() {
            FsmState::MainMenu => {
                let outcome = self.menu.update(&frame);
                self.selected = outcome.selected;
                report.selected = outcome.selected;
                report.action = outcome.action;

                match outcome.action {
                    Some(MenuAction::StartGame) => {
                        self.fsm.transition(GameTrigger::PlayClicked);
                    }
                    Some(MenuAction::Quit) => {
                        self.fsm.transition(GameTrigger::ExitClicked);
                    }
                    Some(MenuAction::OpenOptions) => {
                        log::debug!("Options menu not implemented");
                    }
                    None => {
                        if frame.escape.just_pressed() {
                            self.fsm.transition(GameTrigger::EscapePressed);
                        }
                    }
                }
            }
            FsmState::Playing => {
                if frame.escape.just_pressed() {
                    self.fsm.transition(GameTrigger::EscapePressed);
                } else {
                    report.events = tick(&mut self.world, &frame.tick_input());
                }
            }
            FsmState::Terminated => {}
        }

        self.sampler.advance();
        self.frames += 1;
        report.state = self.fsm.state();
        report
    }

    /// Describe the current frame to the presenter
    pub fn draw<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        draw_frame(
            self.fsm.state(),
            &self.world,
            &self.menu,
            self.selected,
            presenter,
        );
    }
}

/// Outcome of a `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: Score,
    /// Player quit (as opposed to window close or frame cap)
    pub terminated: bool,
}

/// Play the intro timeline. Returns false if the window closed during it.
///
/// `wait` is called with each frame's hold time.
pub fn play_intro<S, P>(
    source: &mut S,
    presenter: &mut P,
    mut wait: impl FnMut(std::time::Duration),
) -> bool
where
    S: InputSource + ?Sized,
    P: Presenter + ?Sized,
{
    for frame in intro_sequence() {
        if source.poll().is_none() {
            log::info!("Window closed during intro");
            return false;
        }
        draw_intro_frame(&frame, presenter);
        wait(frame.hold);
    }
    wait(POST_INTRO_PAUSE);
    true
}

/// Drive frames until the window closes, the player quits, or `max_frames` pass
pub fn run<S, P>(
    game: &mut Game,
    source: &mut S,
    presenter: &mut P,
    max_frames: Option<u64>,
) -> RunSummary
where
    S: InputSource + ?Sized,
    P: Presenter + ?Sized,
{
    let start = game.frames();
    while !game.should_exit() {
        if max_frames.is_some_and(|max| game.frames() - start >= max) {
            log::info!("Frame limit reached");
            break;
        }
        let Some(raw) = source.poll() else {
            log::info!("Window closed");
            break;
        };
        game.update(&raw);
        game.draw(presenter);
    }

    RunSummary {
        frames: game.frames() - start,
        score: game.score(),
        terminated: game.should_exit(),
    }
}
