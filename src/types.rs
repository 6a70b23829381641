//! Core data types for the calculator.
//!
//! This module defines the fundamental types used by the calculator engine:
//! arithmetic operators, the pending-operation pair, input events, and the
//! error type for the one failure the engine can report.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A binary arithmetic operator supported by the calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (displayed as `−`)
    Subtract,
    /// Multiplication (displayed as `×`)
    Multiply,
    /// Division (displayed as `÷`)
    Divide,
    /// Remainder with truncating semantics — the sign follows the dividend (`%`)
    Modulo,
}

impl Operator {
    /// Returns the display symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{00d7}",
            Operator::Divide => "\u{00f7}",
            Operator::Modulo => "%",
        }
    }

    /// Maps a keyboard character to an operator, if it denotes one.
    ///
    /// `*` and `/` map to multiplication and division; the display symbols
    /// `×` and `÷` are also accepted so on-screen button labels can reuse
    /// this mapping.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Operator::Add),
            '-' | '\u{2212}' => Some(Operator::Subtract),
            '*' | '\u{00d7}' => Some(Operator::Multiply),
            '/' | '\u{00f7}' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            _ => None,
        }
    }

    /// Applies this operator to two parsed operands.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::DivisionByZero`] when dividing by exactly zero.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, ComputeError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(ComputeError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            // f64's `%` is a truncating remainder, matching the required semantics
            Operator::Modulo => Ok(lhs % rhs),
        }
    }
}

/// An operator that has been chosen but not yet applied, together with the
/// operand it will act on.
///
/// Modeling the pair as a single optional struct guarantees an operator can
/// never be pending without its left operand (and vice versa).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingOperation {
    /// The chosen operator
    pub operator: Operator,
    /// The left-hand operand, kept as the literal text the user entered
    pub left_operand: String,
}

/// Errors a computation can report.
///
/// The presentation layer decides how to surface these; the engine itself
/// has no UI side effects.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ComputeError {
    /// The divisor of a division was exactly zero.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// A discrete calculator input event.
///
/// Both the on-screen keypad and the keyboard listener translate their raw
/// events into this enum, so there is a single dispatch path into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorInput {
    /// A digit `0`–`9` or the decimal point `.`
    Digit(char),
    /// One of the five binary operators (the percent button maps to
    /// [`Operator::Modulo`])
    Operator(Operator),
    /// Apply the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
    /// Negate the current entry
    ToggleSign,
    /// Remove the last character of the current entry
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "−");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Modulo.symbol(), "%");
    }

    #[test]
    fn test_operator_from_keyboard_keys() {
        assert_eq!(Operator::from_key('+'), Some(Operator::Add));
        assert_eq!(Operator::from_key('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_key('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('%'), Some(Operator::Modulo));
        assert_eq!(Operator::from_key('x'), None);
        assert_eq!(Operator::from_key('='), None);
    }

    #[test]
    fn test_operator_from_display_symbols() {
        assert_eq!(Operator::from_key('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('−'), Some(Operator::Subtract));
    }

    #[test]
    fn test_operator_apply_basic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), Ok(10.0));
        assert_eq!(Operator::Divide.apply(9.0, 2.0), Ok(4.5));
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        assert_eq!(
            Operator::Divide.apply(10.0, 0.0),
            Err(ComputeError::DivisionByZero)
        );
        // Negative zero compares equal to 0.0 and is caught too
        assert_eq!(
            Operator::Divide.apply(10.0, -0.0),
            Err(ComputeError::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(Operator::Modulo.apply(5.0, 2.0), Ok(1.0));
        assert_eq!(Operator::Modulo.apply(-7.0, 2.0), Ok(-1.0));
        assert_eq!(Operator::Modulo.apply(7.0, -2.0), Ok(1.0));
    }

    #[test]
    fn test_compute_error_message() {
        assert_eq!(
            ComputeError::DivisionByZero.to_string(),
            "cannot divide by zero"
        );
    }
}
