//! The calculator state machine.
//!
//! [`Calculator`] holds the in-progress operand and an optional pending
//! operation, and mutates that state in response to discrete input events.
//! It is a pure core: no display lookups, no dialogs — the UI layer reads
//! [`Calculator::display_lines`] after every transition and decides how to
//! surface a [`ComputeError`].

use crate::types::{CalculatorInput, ComputeError, Operator, PendingOperation};
use serde::{Deserialize, Serialize};

/// The two text lines the display renders after every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLines {
    /// Formatted left operand plus operator symbol while an operation is
    /// pending, empty otherwise
    pub previous: String,
    /// Formatted current entry
    pub current: String,
}

/// The four-function (plus modulo) calculator engine.
///
/// Operands are stored as the literal text the user typed, not as numbers,
/// so exact keystrokes (trailing decimal points, a lone minus sign mid-entry)
/// survive until a computation folds them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Calculator {
    /// The numeral currently being typed
    current_operand: String,
    /// The folded-but-unapplied operation, if any
    pending: Option<PendingOperation>,
    /// When set, the next digit starts a fresh operand instead of extending
    /// the previous result
    should_reset_screen: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            pending: None,
            should_reset_screen: false,
        }
    }
}

impl Calculator {
    /// Creates a calculator in its cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw text of the current entry.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The pending operation, if an operator has been chosen.
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Whether the next digit input will start a fresh operand.
    pub fn should_reset_screen(&self) -> bool {
        self.should_reset_screen
    }

    /// Resets to the initial state. Never fails.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Appends a digit `0`–`9` or a decimal point to the current entry.
    ///
    /// A second decimal point is rejected, and a leading zero is replaced
    /// rather than extended. Any other token is ignored.
    pub fn append_digit(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            return;
        }

        if self.should_reset_screen {
            self.current_operand.clear();
            self.should_reset_screen = false;
        }

        if token == '.' && self.current_operand.contains('.') {
            return;
        }

        if self.current_operand == "0" && token != '.' {
            self.current_operand = token.to_string();
        } else {
            self.current_operand.push(token);
        }
    }

    /// Chooses an operator, folding any already-pending operation first so
    /// chained input evaluates strictly left to right.
    ///
    /// A divide-by-zero raised by the fold is surfaced to the caller, but the
    /// transition still completes: the (unchanged) current entry becomes the
    /// left operand of the newly chosen operator.
    ///
    /// # Errors
    ///
    /// Propagates [`ComputeError::DivisionByZero`] from the fold.
    pub fn choose_operation(&mut self, op: Operator) -> Result<(), ComputeError> {
        if self.current_operand.is_empty() {
            return Ok(());
        }

        let fold = if self.pending.is_some() {
            self.compute()
        } else {
            Ok(())
        };

        self.pending = Some(PendingOperation {
            operator: op,
            left_operand: std::mem::take(&mut self.current_operand),
        });
        self.should_reset_screen = false;

        fold
    }

    /// Applies the pending operation.
    ///
    /// Silently succeeds without changing anything when no operation is
    /// pending or when either operand does not parse as a number. On success
    /// the result replaces the current entry, the pending operation is
    /// consumed, and the next digit input starts a fresh operand.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::DivisionByZero`] when dividing by zero. The
    /// state is left untouched in that case — the operation stays pending, so
    /// pressing equals again reports the same error.
    pub fn compute(&mut self) -> Result<(), ComputeError> {
        let Some(pending) = &self.pending else {
            return Ok(());
        };

        let (Ok(lhs), Ok(rhs)) = (
            pending.left_operand.parse::<f64>(),
            self.current_operand.parse::<f64>(),
        ) else {
            return Ok(());
        };

        let result = pending.operator.apply(lhs, rhs)?;

        self.current_operand = result.to_string();
        self.pending = None;
        self.should_reset_screen = true;
        Ok(())
    }

    /// Removes the last character of the current entry, resetting a
    /// single-character entry back to `"0"`.
    pub fn delete_last_char(&mut self) {
        if self.current_operand.len() == 1 {
            self.current_operand = "0".to_string();
        } else {
            self.current_operand.pop();
        }
    }

    /// Negates the current entry by toggling a leading minus sign.
    /// A bare `"0"` stays unsigned.
    pub fn toggle_sign(&mut self) {
        if self.current_operand == "0" {
            return;
        }

        if let Some(stripped) = self.current_operand.strip_prefix('-') {
            self.current_operand = stripped.to_string();
        } else {
            self.current_operand.insert(0, '-');
        }
    }

    /// Dispatches a single input event to the matching transition.
    ///
    /// This is the one entry point both the keypad and the keyboard adapter
    /// use, so their semantics cannot drift apart.
    ///
    /// # Errors
    ///
    /// Propagates [`ComputeError::DivisionByZero`] from computing inputs.
    pub fn apply_input(&mut self, input: CalculatorInput) -> Result<(), ComputeError> {
        match input {
            CalculatorInput::Digit(token) => self.append_digit(token),
            CalculatorInput::Operator(op) => self.choose_operation(op)?,
            CalculatorInput::Equals => self.compute()?,
            CalculatorInput::Clear => self.clear(),
            CalculatorInput::ToggleSign => self.toggle_sign(),
            CalculatorInput::Delete => self.delete_last_char(),
        }
        Ok(())
    }

    /// Produces the two formatted display lines for the current state.
    pub fn display_lines(&self) -> DisplayLines {
        let previous = match &self.pending {
            Some(pending) => format!(
                "{} {}",
                format_operand(&pending.left_operand),
                pending.operator.symbol()
            ),
            None => String::new(),
        };
        DisplayLines {
            previous,
            current: format_operand(&self.current_operand),
        }
    }
}

/// Formats a raw operand string for display.
///
/// The integer part gets `','` thousands grouping; a fractional part
/// (including the empty one right after a trailing decimal point) is
/// reattached verbatim. An unparsable integer part (empty string, lone minus)
/// formats as the empty string, so mid-entry values like `"."` render as
/// just `"."`.
pub fn format_operand(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (raw, None),
    };

    let grouped = group_thousands(int_part).unwrap_or_default();

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// Regroups the digits of an integer numeral in threes from the right,
/// preserving a leading minus sign. Returns `None` when the input is not a
/// numeral at all.
fn group_thousands(int_part: &str) -> Option<String> {
    // Normalize through f64 so inputs like "007" display as "7", mirroring
    // how the entry rules already suppress leading zeros.
    let value: f64 = int_part.parse().ok()?;
    let normalized = format!("{:.0}", value.trunc());
    let (sign, digits) = match normalized.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", normalized.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    Some(format!("{sign}{grouped}"))
}
