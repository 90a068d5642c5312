//! The calculator input state machine.

use tracing::debug;

use super::evaluation::{self, CalcError};
use super::format;
use super::token::{Operator, Token};

/// What the display should show after a processed token.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayUpdate {
    /// Echo of the accumulator while typing, verbatim and unformatted.
    Echo(String),
    /// A resolved calculation, formatted for display.
    Result(String),
    /// A terminal error replacing the display contents.
    Error(CalcError),
}

impl DisplayUpdate {
    /// The text to place in the display sink.
    pub fn text(&self) -> String {
        match self {
            Self::Echo(text) | Self::Result(text) => text.clone(),
            Self::Error(err) => err.to_string(),
        }
    }

    /// Whether this update carries an error message.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Two-operand running computation.
///
/// One token is consumed at a time; `process` returns the display
/// update the token caused, or `None` when the display is unchanged
/// (a rejected second separator, adopting an operator).
///
/// State resets on clear, on any error, and a resolved calculation
/// stores its raw rounded result back as the running operand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Engine {
    current: String,
    previous: String,
    operator: Option<Operator>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input token.
    pub fn process(&mut self, token: Token) -> Option<DisplayUpdate> {
        match token {
            Token::Digit(d) => {
                self.current.push(d);
                Some(DisplayUpdate::Echo(self.current.clone()))
            }
            Token::Separator => {
                // At most one typed separator per operand.
                if self.current.contains(',') {
                    return None;
                }
                self.current.push(',');
                Some(DisplayUpdate::Echo(self.current.clone()))
            }
            Token::Operator(op) => self.select_operator(op),
            Token::Equals => {
                if self.current.is_empty() || self.previous.is_empty() {
                    return Some(self.fail(CalcError::IncompleteOperation));
                }
                Some(self.calculate())
            }
            Token::Clear => {
                self.reset();
                Some(DisplayUpdate::Echo("0".to_string()))
            }
            Token::Backspace => {
                self.current.pop();
                let text = if self.current.is_empty() {
                    "0".to_string()
                } else {
                    self.current.clone()
                };
                Some(DisplayUpdate::Echo(text))
            }
        }
    }

    /// Adopt a new pending operator, resolving any already pending
    /// calculation first (left-to-right chaining, no precedence).
    fn select_operator(&mut self, op: Operator) -> Option<DisplayUpdate> {
        if self.current.is_empty() {
            return Some(self.fail(CalcError::MissingOperand));
        }

        let chained = if self.previous.is_empty() {
            None
        } else {
            let update = self.calculate();
            if update.is_error() {
                // Errors are terminal: the new operator is not adopted.
                return Some(update);
            }
            Some(update)
        };

        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
        chained
    }

    /// Resolve the pending calculation. On success the raw rounded
    /// result becomes the new running operand.
    fn calculate(&mut self) -> DisplayUpdate {
        let Some(op) = self.operator else {
            return self.fail(CalcError::IncompleteOperation);
        };
        let a = match format::parse_operand(&self.previous) {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };
        let b = match format::parse_operand(&self.current) {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        match evaluation::evaluate(a, b, op) {
            Ok(result) => {
                debug!(a, b, op = %op, result, "calculation resolved");
                self.current = format::format_operand(result);
                self.previous.clear();
                self.operator = None;
                DisplayUpdate::Result(format::format_display(result))
            }
            Err(err) => self.fail(err),
        }
    }

    /// Errors are terminal for the in-progress computation.
    fn fail(&mut self, err: CalcError) -> DisplayUpdate {
        self.reset();
        DisplayUpdate::Error(err)
    }

    fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operator = None;
    }

    /// The pending operation line shown above the display, e.g. "9 +"
    /// while the second operand is being typed.
    pub fn pending(&self) -> Option<String> {
        match (self.previous.as_str(), self.operator) {
            ("", _) | (_, None) => None,
            (previous, Some(op)) => Some(format!("{previous} {op}")),
        }
    }
}
