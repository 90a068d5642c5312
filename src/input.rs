//! Keyboard input mapping.
//!
//! Physical key presses map 1:1 onto the button token space: "." is
//! remapped to the "," separator, Enter confirms, Escape clears and
//! Backspace deletes, mirroring the button grid. Terminal frontends
//! additionally need a quit surface, so "q" and Ctrl+C leave the app.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::calculator::Token;

/// App-level interpretation of a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Feed a token to the calculator.
    Token(Token),
    /// Leave the application.
    Quit,
}

/// Map a key event to an action.
///
/// Release events are dropped; presses and repeats both feed the
/// engine, so a held digit key keeps accumulating.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(InputAction::Token(Token::Equals)),
        KeyCode::Esc => Some(InputAction::Token(Token::Clear)),
        KeyCode::Backspace => Some(InputAction::Token(Token::Backspace)),
        KeyCode::Char('q') => Some(InputAction::Quit),
        KeyCode::Char('.') | KeyCode::Char(',') => Some(InputAction::Token(Token::Separator)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Token(Token::Clear)),
        KeyCode::Char(ch) => Token::classify_char(ch).map(InputAction::Token),
        _ => None,
    }
}
