//! Application state management structures.
//!
//! This module contains the main [`CalculatorApp`] struct: the calculator
//! engine, the decorative shape field, and the handful of UI preferences
//! that persist across sessions. The calculator itself is deliberately not
//! persisted — a calculation lives only for the app session.

use super::shapes::ShapeField;
use crate::engine::Calculator;
use crate::types::{CalculatorInput, ComputeError};
use serde::{Deserialize, Serialize};

/// The main application structure containing UI state and the calculator.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering and interaction logic.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorApp {
    /// The calculator engine; session-only, never persisted
    #[serde(skip)]
    pub calculator: Calculator,
    /// Decorative background shapes; regenerated randomly on each startup
    #[serde(skip)]
    pub shapes: ShapeField,
    /// Whether the divide-by-zero alert dialog is currently shown.
    /// While it is open, all calculator input is ignored (the blocking-alert
    /// behavior of the original design).
    #[serde(skip)]
    pub show_divide_by_zero_alert: bool,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Whether the decorative background shapes are drawn
    pub show_shapes: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self {
            calculator: Calculator::new(),
            shapes: ShapeField::generate(&mut rand::thread_rng()),
            show_divide_by_zero_alert: false,
            dark_mode: true,
            show_shapes: true,
        }
    }
}

impl CalculatorApp {
    /// Serializes the persisted application preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restores application preferences from JSON.
    ///
    /// Session-only fields deserialize to their type defaults, so the shape
    /// field is regenerated here for the new session.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut app: Self = serde_json::from_str(json)?;
        app.shapes = ShapeField::generate(&mut rand::thread_rng());
        Ok(app)
    }

    /// Routes one input event into the engine, unless the alert dialog is
    /// open, and raises the alert when the engine reports a division by zero.
    ///
    /// This is the single seam between input surfaces (keypad and keyboard)
    /// and the engine.
    pub fn handle_input(&mut self, input: CalculatorInput) {
        if self.show_divide_by_zero_alert {
            return;
        }
        match self.calculator.apply_input(input) {
            Ok(()) => {}
            Err(ComputeError::DivisionByZero) => {
                log::debug!("division by zero attempted; showing alert");
                self.show_divide_by_zero_alert = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operator;

    #[test]
    fn test_default_app_state() {
        let app = CalculatorApp::default();
        assert_eq!(app.calculator.current_operand(), "0");
        assert!(!app.show_divide_by_zero_alert);
        assert!(app.dark_mode);
        assert!(app.show_shapes);
        assert_eq!(app.shapes.shapes().len(), crate::constants::SHAPE_COUNT);
    }

    #[test]
    fn test_divide_by_zero_raises_alert_flag() {
        let mut app = CalculatorApp::default();
        app.handle_input(CalculatorInput::Digit('9'));
        app.handle_input(CalculatorInput::Operator(Operator::Divide));
        app.handle_input(CalculatorInput::Digit('0'));
        assert!(!app.show_divide_by_zero_alert);
        app.handle_input(CalculatorInput::Equals);
        assert!(app.show_divide_by_zero_alert);

        // The engine state is untouched, mirroring the blocking alert
        let lines = app.calculator.display_lines();
        assert_eq!(lines.previous, "9 ÷");
        assert_eq!(lines.current, "0");
    }

    #[test]
    fn test_input_is_ignored_while_alert_is_open() {
        let mut app = CalculatorApp::default();
        app.handle_input(CalculatorInput::Digit('9'));
        app.handle_input(CalculatorInput::Operator(Operator::Divide));
        app.handle_input(CalculatorInput::Digit('0'));
        app.handle_input(CalculatorInput::Equals);
        assert!(app.show_divide_by_zero_alert);

        app.handle_input(CalculatorInput::Digit('5'));
        app.handle_input(CalculatorInput::Clear);
        let lines = app.calculator.display_lines();
        assert_eq!(lines.previous, "9 ÷");
        assert_eq!(lines.current, "0");

        // Dismissing the alert lets input through again
        app.show_divide_by_zero_alert = false;
        app.handle_input(CalculatorInput::Clear);
        assert_eq!(app.calculator.display_lines().current, "0");
        assert_eq!(app.calculator.display_lines().previous, "");
    }

    #[test]
    fn test_preferences_roundtrip_via_json() {
        let mut app = CalculatorApp::default();
        app.dark_mode = false;
        app.show_shapes = false;
        // Session state should not survive the round trip
        app.handle_input(CalculatorInput::Digit('7'));

        let json = app.to_json().unwrap();
        let restored = CalculatorApp::from_json(&json).unwrap();
        assert!(!restored.dark_mode);
        assert!(!restored.show_shapes);
        assert_eq!(restored.calculator.current_operand(), "0");
        // The shape field is regenerated, not restored empty
        assert_eq!(restored.shapes.shapes().len(), crate::constants::SHAPE_COUNT);
    }
}
