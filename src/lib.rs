//! # Glass Calculator
//!
//! A four-function (plus modulo) calculator with a decorative animated
//! background, built with egui. Two independent components share the window:
//! - **Shape field**: randomized translucent shapes drifting behind the
//!   calculator, generated once at startup
//! - **Calculator engine**: a pure input/state/display state machine driven
//!   by on-screen buttons and keyboard input
//!
//! ## Features
//! - Text-based operand entry preserving exact keystrokes
//! - Left-to-right operator chaining (no precedence)
//! - Thousands-grouped two-line display
//! - Typed divide-by-zero error surfaced as a modal dialog
//! - Persisted UI preferences (theme, background toggle)

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod engine;
mod types;
mod ui;

// Re-export public types and functions
pub use engine::{format_operand, Calculator, DisplayLines};
pub use types::*;
pub use ui::{CalculatorApp, Shape, ShapeField};

/// Runs the calculator application with default settings.
///
/// This function initializes the egui application window, restores any
/// persisted UI preferences, and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use glass_calculator::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Glass Calculator",
        options,
        Box::new(|cc| {
            let app = cc
                .storage
                .and_then(|storage| storage.get_string("app_state"))
                .and_then(|json| match CalculatorApp::from_json(&json) {
                    Ok(app) => Some(app),
                    Err(err) => {
                        log::warn!("Failed to restore app state: {err}");
                        None
                    }
                })
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_default() {
        let calc = Calculator::default();
        assert_eq!(calc.current_operand(), "0");
        assert!(calc.pending().is_none());
    }

    #[test]
    fn test_reexported_formatting() {
        assert_eq!(format_operand("1234.5"), "1,234.5");
    }
}
