//! Draw pass: turns the current game state into presenter calls
//!
//! Pure with respect to game state; nothing here mutates the world.

use glam::Vec2;

use super::{Presenter, colors};
use crate::consts::BUTTON_BORDER;
use crate::fsm::FsmState;
use crate::intro::IntroFrame;
use crate::sim::GameWorld;
use crate::ui::{Menu, MenuButton};

/// Score text size and placement
const SCORE_TEXT_SIZE: f32 = 0.1;
const SCORE_TEXT_Y: f32 = 0.85;
const LABEL_TEXT_SIZE: f32 = 0.08;

/// Draw one frame for the given state
pub fn draw_frame<P: Presenter + ?Sized>(
    state: FsmState,
    world: &GameWorld,
    menu: &Menu,
    selected: Option<MenuButton>,
    presenter: &mut P,
) {
    presenter.clear(colors::BACKGROUND);

    match state {
        FsmState::MainMenu => draw_menu(menu, selected, presenter),
        FsmState::Playing => draw_play(world, presenter),
        FsmState::Terminated => {}
    }

    presenter.present();
}

fn draw_menu<P: Presenter + ?Sized>(menu: &Menu, selected: Option<MenuButton>, presenter: &mut P) {
    for button in menu.visible_buttons() {
        let rect = button.rect();
        presenter.draw_filled_rect(rect, colors::BUTTON_FILL);

        let outline = if selected == Some(button) {
            colors::BUTTON_OUTLINE_SELECTED
        } else {
            colors::BUTTON_OUTLINE
        };
        presenter.draw_rect_outline(rect.inflate(BUTTON_BORDER), outline);

        let label = button.label();
        let center = rect.center();
        let width = label.len() as f32 * LABEL_TEXT_SIZE * 0.5;
        presenter.draw_text(
            label,
            Vec2::new(center.x - width / 2.0, center.y - LABEL_TEXT_SIZE / 2.0),
            LABEL_TEXT_SIZE,
        );
    }
}

fn draw_play<P: Presenter + ?Sized>(world: &GameWorld, presenter: &mut P) {
    presenter.draw_filled_rect(world.left.rect(), colors::PADDLE);
    presenter.draw_filled_rect(world.right.rect(), colors::PADDLE);

    // Ball is drawn as a square
    presenter.draw_filled_rect(world.ball.bounds(), colors::BALL);

    presenter.draw_text(
        &world.score.left().to_string(),
        Vec2::new(-0.5, SCORE_TEXT_Y),
        SCORE_TEXT_SIZE,
    );
    presenter.draw_text(
        &world.score.right().to_string(),
        Vec2::new(0.5, SCORE_TEXT_Y),
        SCORE_TEXT_SIZE,
    );
}

/// Draw one frame of the intro sequence
pub fn draw_intro_frame<P: Presenter + ?Sized>(frame: &IntroFrame, presenter: &mut P) {
    presenter.clear(colors::grey(frame.clear));
    if let Some(alpha) = frame.triangle_alpha {
        presenter.draw_triangle(alpha);
    }
    presenter.present();
}
