//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};
use simon_core::Move;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Start (or restart) a game.
    Start,
    /// Press one of the two pads.
    Press(Move),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Enter => KeyAction::Start,
            KeyCode::Left => KeyAction::Press(Move::Red),
            KeyCode::Right => KeyAction::Press(Move::Blue),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            's' => KeyAction::Start,
            'r' | '1' => KeyAction::Press(Move::Red),
            'b' | '2' => KeyAction::Press(Move::Blue),
            _ => KeyAction::None,
        }
    }
}
