//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Spin, or stop the current spin.
    Primary,
    SimulateSpins,
    SimulateMath,
    CancelSimulation,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into machine controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::Primary,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            ' ' => KeyAction::Primary,
            's' => KeyAction::SimulateSpins,
            'm' => KeyAction::SimulateMath,
            'x' => KeyAction::CancelSimulation,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
