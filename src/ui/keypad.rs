//! The on-screen button grid.
//!
//! Buttons are laid out in the classic 4-column arrangement and mapped 1:1
//! onto [`CalculatorInput`] events, so a button press and the equivalent key
//! press go through exactly the same engine path.

use super::state::CalculatorApp;
use crate::constants::{BUTTON_HEIGHT, BUTTON_SPACING, CARD_WIDTH};
use crate::types::{CalculatorInput, Operator};
use eframe::egui;

/// The keypad labels, row by row.
const KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["AC", "\u{00b1}", "%", "\u{00f7}"],
    ["7", "8", "9", "\u{00d7}"],
    ["4", "5", "6", "\u{2212}"],
    ["1", "2", "3", "+"],
    ["0", ".", "\u{232b}", "="],
];

/// Maps a keypad label to the input event it produces.
///
/// Returns `None` only for labels that are not part of the keypad; every
/// entry of [`KEYPAD_ROWS`] maps to an event.
pub fn input_for_label(label: &str) -> Option<CalculatorInput> {
    match label {
        "AC" => Some(CalculatorInput::Clear),
        "\u{00b1}" => Some(CalculatorInput::ToggleSign),
        "\u{232b}" => Some(CalculatorInput::Delete),
        "=" => Some(CalculatorInput::Equals),
        _ => {
            let c = label.chars().next().filter(|_| label.chars().count() == 1)?;
            if c.is_ascii_digit() || c == '.' {
                Some(CalculatorInput::Digit(c))
            } else {
                Operator::from_key(c).map(CalculatorInput::Operator)
            }
        }
    }
}

impl CalculatorApp {
    /// Draws the keypad grid and dispatches any clicked button.
    pub fn draw_keypad(&mut self, ui: &mut egui::Ui) {
        let button_width = (CARD_WIDTH - 3.0 * BUTTON_SPACING) / 4.0;
        let button_size = egui::vec2(button_width, BUTTON_HEIGHT);

        ui.spacing_mut().item_spacing = egui::vec2(BUTTON_SPACING, BUTTON_SPACING);

        for row in KEYPAD_ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    let text = egui::RichText::new(label).size(20.0);
                    if ui.add_sized(button_size, egui::Button::new(text)).clicked() {
                        if let Some(input) = input_for_label(label) {
                            self.handle_input(input);
                        }
                    }
                }
            });
        }
    }
}
