//! Main menu buttons
//!
//! Hover is an inclusive rectangle test against the NDC cursor. A click is
//! the primary button's press edge while hovering. Buttons are checked in
//! display order and the first hit wins.

use crate::platform::InputFrame;
use crate::sim::Rect;

/// The fixed button set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Play,
    Options,
    Exit,
}

impl MenuButton {
    /// Display order, top to bottom
    pub const ALL: [MenuButton; 3] = [MenuButton::Play, MenuButton::Options, MenuButton::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Play => "Play",
            MenuButton::Options => "Options",
            MenuButton::Exit => "Exit",
        }
    }

    /// Button area in NDC
    pub fn rect(&self) -> Rect {
        match self {
            MenuButton::Play => Rect::new(-0.5, 0.0, 1.0, 0.3),
            MenuButton::Options => Rect::new(-0.5, -0.35, 1.0, 0.3),
            MenuButton::Exit => Rect::new(-0.5, -0.7, 1.0, 0.3),
        }
    }

    /// What clicking this button asks for
    pub fn action(&self) -> MenuAction {
        match self {
            MenuButton::Play => MenuAction::StartGame,
            MenuButton::Options => MenuAction::OpenOptions,
            MenuButton::Exit => MenuAction::Quit,
        }
    }
}

/// Request emitted by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    /// Hook for an options screen; nothing handles it yet
    OpenOptions,
    Quit,
}

/// Result of one menu frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuOutcome {
    /// Hovered button, drawn highlighted
    pub selected: Option<MenuButton>,
    /// Fired on the click edge only
    pub action: Option<MenuAction>,
}

/// Main menu state
#[derive(Debug, Clone)]
pub struct Menu {
    options_enabled: bool,
    hovered: Option<MenuButton>,
}

impl Menu {
    pub fn new(options_enabled: bool) -> Self {
        Self {
            options_enabled,
            hovered: None,
        }
    }

    /// Buttons that are shown and clickable
    pub fn visible_buttons(&self) -> impl Iterator<Item = MenuButton> + '_ {
        MenuButton::ALL
            .into_iter()
            .filter(|b| *b != MenuButton::Options || self.options_enabled)
    }

    /// Button under the cursor, if any
    pub fn button_at(&self, point: glam::Vec2) -> Option<MenuButton> {
        self.visible_buttons().find(|b| b.rect().contains(point))
    }

    /// Last hovered button
    pub fn hovered(&self) -> Option<MenuButton> {
        self.hovered
    }

    /// Evaluate hover and click for this frame
    pub fn update(&mut self, frame: &InputFrame) -> MenuOutcome {
        let selected = self.button_at(frame.mouse);
        if selected != self.hovered {
            log::debug!("Menu hover: {:?} -> {:?}", self.hovered, selected);
            self.hovered = selected;
        }

        let action = selected
            .filter(|_| frame.primary.just_pressed())
            .map(|b| b.action());
        if let Some(action) = action {
            log::info!("Menu action: {:?}", action);
        }

        MenuOutcome { selected, action }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(false)
    }
}
