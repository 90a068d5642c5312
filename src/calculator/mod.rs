//! Calculator input state machine.
//!
//! This module provides functionality to:
//! - Classify raw input labels into tokens
//! - Run the two-operand, left-to-right calculation engine
//! - Format operands and results with pt-BR decimal conventions
//!
//! It is frontend-agnostic: no terminal or rendering types appear here.

mod engine;
mod evaluation;
mod format;
mod token;

pub use engine::{DisplayUpdate, Engine};
pub use evaluation::{CalcError, evaluate, round_to_cents};
pub use format::{format_display, format_operand, parse_operand};
pub use token::{Operator, Token};
