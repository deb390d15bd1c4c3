//! User interface
//!
//! Only the main menu for now; it produces selections and actions and leaves
//! drawing to the renderer.

pub mod menu;

pub use menu::{Menu, MenuAction, MenuButton, MenuOutcome};
