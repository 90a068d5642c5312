//! Display and button grid rendering, plus mouse hit-testing.
//!
//! The layout is fixed: a two-line display region (muted pending
//! operation above the value) and a 4-column button grid below it, with
//! a double-width equals key on the bottom row.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::calculator::Token;

use super::effects::EffectsState;
use super::theme::theme;

/// Button labels, row-major. The bottom-row equals key occupies two
/// cells and is rendered once, double width.
pub const BUTTONS: [[&str; 4]; 5] = [
    ["C", "⌫", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    ["0", ",", "=", "="],
];

const GRID_X: u16 = 2;
const DISPLAY_Y: u16 = 1;
const GRID_Y: u16 = 4;
const BUTTON_WIDTH: u16 = 5;
const GAP_X: u16 = 1;
const CELL: u16 = BUTTON_WIDTH + GAP_X;
const GRID_WIDTH: u16 = 4 * BUTTON_WIDTH + 3 * GAP_X;
const FOOTER_Y: u16 = GRID_Y + 2 * BUTTONS.len() as u16;

/// What the display region shows.
#[derive(Clone, Debug)]
pub struct DisplayContent<'a> {
    pub text: &'a str,
    pub pending: Option<&'a str>,
    pub is_error: bool,
}

/// A resolved mouse hit on the button grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonHit {
    pub label: &'static str,
    /// Top-center of the cell, where effect glyphs spawn.
    pub anchor: (u16, u16),
}

/// Resolve a terminal coordinate to the button under it.
pub fn button_at(column: u16, row: u16) -> Option<ButtonHit> {
    if column < GRID_X || row < GRID_Y {
        return None;
    }
    let rel_y = row - GRID_Y;
    if rel_y % 2 != 0 {
        return None;
    }
    let r = (rel_y / 2) as usize;
    if r >= BUTTONS.len() {
        return None;
    }

    let rel_x = column - GRID_X;
    let c = (rel_x / CELL) as usize;
    if c >= BUTTONS[r].len() {
        return None;
    }
    // The equals key also covers the gap between its two cells.
    let wide_equals = r == 4 && c == 2;
    if rel_x % CELL >= BUTTON_WIDTH && !wide_equals {
        return None;
    }

    let y = GRID_Y + r as u16 * 2;
    let anchor = if r == 4 && c >= 2 {
        (GRID_X + 2 * CELL + (2 * BUTTON_WIDTH + GAP_X) / 2, y)
    } else {
        (GRID_X + c as u16 * CELL + BUTTON_WIDTH / 2, y)
    };

    Some(ButtonHit {
        label: BUTTONS[r][c],
        anchor,
    })
}

/// Redraw the whole frame.
pub fn render(
    out: &mut impl Write,
    content: &DisplayContent<'_>,
    effects: &EffectsState,
) -> io::Result<()> {
    let t = theme();
    let width = GRID_WIDTH as usize;

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let pending = fit(content.pending.unwrap_or(""), width);
    queue!(
        out,
        MoveTo(GRID_X, DISPLAY_Y),
        SetBackgroundColor(t.display_bg),
        SetForegroundColor(t.pending_fg),
        Print(format!("{pending:>width$}")),
    )?;

    let value_fg = if content.is_error {
        t.error_fg
    } else {
        t.display_fg
    };
    let value = fit(content.text, width);
    queue!(
        out,
        MoveTo(GRID_X, DISPLAY_Y + 1),
        SetForegroundColor(value_fg),
        Print(format!("{value:>width$}")),
        ResetColor,
    )?;

    for (r, row) in BUTTONS.iter().enumerate() {
        for (c, label) in row.iter().enumerate() {
            if r == 4 && c == 3 {
                continue;
            }
            let cell_width = if r == 4 && c == 2 {
                (2 * BUTTON_WIDTH + GAP_X) as usize
            } else {
                BUTTON_WIDTH as usize
            };
            let x = GRID_X + c as u16 * CELL;
            let y = GRID_Y + r as u16 * 2;
            let (fg, bg) = if is_accent(label) {
                (t.accent_fg, t.accent_bg)
            } else {
                (t.button_fg, t.button_bg)
            };
            queue!(
                out,
                MoveTo(x, y),
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(center(label, cell_width)),
                ResetColor,
            )?;
        }
    }

    queue!(
        out,
        MoveTo(GRID_X, FOOTER_Y),
        SetForegroundColor(t.hint_fg),
        Print("q: sair"),
        ResetColor,
    )?;

    // Effects draw last so glyphs float over the rest of the frame.
    for (glyph, (x, y)) in effects.glyphs() {
        queue!(out, MoveTo(x, y), Print(glyph))?;
    }

    out.flush()
}

/// Operator and control keys get the accent colors.
fn is_accent(label: &str) -> bool {
    Token::classify(label)
        .is_some_and(|token| !matches!(token, Token::Digit(_) | Token::Separator))
}

/// Keep the tail of an overlong display value.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        text.to_string()
    } else {
        text.chars().skip(count - width).collect()
    }
}

fn center(label: &str, width: usize) -> String {
    let label_width = label.chars().count();
    let pad = width.saturating_sub(label_width);
    let left = pad / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        label,
        " ".repeat(pad - left)
    )
}
