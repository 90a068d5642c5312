//! Color theme for the terminal frontend.

use crossterm::style::Color;
use lazy_static::lazy_static;

/// Colors used by the renderer.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Main display text.
    pub display_fg: Color,
    /// Display region background.
    pub display_bg: Color,
    /// Muted pending-operation line above the display value.
    pub pending_fg: Color,
    /// Error messages in the display.
    pub error_fg: Color,
    /// Digit and separator buttons.
    pub button_fg: Color,
    pub button_bg: Color,
    /// Operator and control buttons.
    pub accent_fg: Color,
    pub accent_bg: Color,
    /// Footer hint line.
    pub hint_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            display_fg: Color::White,
            display_bg: Color::AnsiValue(235),
            pending_fg: Color::AnsiValue(245),
            error_fg: Color::AnsiValue(209),
            button_fg: Color::White,
            button_bg: Color::AnsiValue(238),
            accent_fg: Color::AnsiValue(153),
            accent_bg: Color::AnsiValue(24),
            hint_fg: Color::AnsiValue(244),
        }
    }
}

lazy_static! {
    static ref THEME: Theme = Theme::default();
}

/// Global theme accessor.
pub fn theme() -> &'static Theme {
    &THEME
}
