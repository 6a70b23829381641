//! User interface components and rendering logic for the calculator.
//!
//! This module contains all the UI-related code including the main
//! application struct, the keypad, the display, the decorative shape field,
//! and keyboard handling.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main CalculatorApp
//! - `shapes` - Decorative floating-shape background
//! - `keypad` - On-screen button grid

mod keypad;
mod shapes;
mod state;


pub use shapes::{Shape, ShapeField};
pub use state::CalculatorApp;

use crate::constants::{
    BUTTON_HEIGHT, BUTTON_SPACING, CARD_WIDTH, DISPLAY_FONT_SIZE, DISPLAY_HEIGHT,
    DISPLAY_PREVIOUS_FONT_SIZE,
};
use crate::types::{CalculatorInput, Operator};
use eframe::egui;

impl eframe::App for CalculatorApp {
    /// Persist UI preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string("app_state", json);
            }
            Err(err) => {
                log::warn!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Handles the overall layout: the toolbar, the shape-field background,
    /// the calculator card, and the divide-by-zero alert dialog.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_keyboard_input(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_calculator(ui);
        });

        // Divide-by-zero alert dialog; input stays blocked until dismissed
        if self.show_divide_by_zero_alert {
            egui::Window::new("Cannot divide by zero!")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label("Division by zero is undefined. The pending operation was kept.");
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            self.show_divide_by_zero_alert = false;
                        }
                    });
                });
        }

        // Keep repainting while the background animation is visible
        if self.show_shapes {
            ctx.request_repaint();
        }
    }
}

impl CalculatorApp {
    /// Translates raw keyboard events into calculator inputs.
    ///
    /// Digits, `.`, `+`, `-`, `*`, `/`, `%` and `=` arrive as text events;
    /// Enter, Escape and Backspace arrive as key events and map to equals,
    /// clear and delete respectively.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let inputs: Vec<CalculatorInput> = ctx.input(|i| {
            let mut inputs = Vec::new();
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        for c in text.chars() {
                            if c.is_ascii_digit() || c == '.' {
                                inputs.push(CalculatorInput::Digit(c));
                            } else if c == '=' {
                                inputs.push(CalculatorInput::Equals);
                            } else if let Some(op) = Operator::from_key(c) {
                                inputs.push(CalculatorInput::Operator(op));
                            }
                        }
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => inputs.push(CalculatorInput::Equals),
                        egui::Key::Escape => inputs.push(CalculatorInput::Clear),
                        egui::Key::Backspace => inputs.push(CalculatorInput::Delete),
                        _ => {}
                    },
                    _ => {}
                }
            }
            inputs
        });

        for input in inputs {
            self.handle_input(input);
        }
    }

    /// Draws the top toolbar with the theme and background toggles.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.dark_mode, "Dark mode");
            ui.separator();
            ui.checkbox(&mut self.show_shapes, "Background shapes");
        });
    }

    /// Draws the shape-field background and the centered calculator card
    /// (display plus keypad).
    pub fn draw_calculator(&mut self, ui: &mut egui::Ui) {
        let full_rect = ui.max_rect();

        if self.show_shapes {
            let time = ui.input(|i| i.time);
            self.shapes
                .paint(ui.painter(), full_rect, time, self.dark_mode);
        }

        // Vertically center the card in whatever space is available
        let card_height =
            DISPLAY_HEIGHT + 5.0 * (BUTTON_HEIGHT + BUTTON_SPACING) + BUTTON_SPACING;
        let top_padding = ((full_rect.height() - card_height) / 2.0).max(0.0);

        ui.vertical_centered(|ui| {
            ui.add_space(top_padding);
            ui.set_max_width(CARD_WIDTH);
            self.draw_display(ui);
            ui.add_space(BUTTON_SPACING);
            self.draw_keypad(ui);
        });
    }

    /// Draws the two-line, right-aligned display region.
    fn draw_display(&self, ui: &mut egui::Ui) {
        let lines = self.calculator.display_lines();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), DISPLAY_HEIGHT));
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    egui::RichText::new(&lines.previous)
                        .size(DISPLAY_PREVIOUS_FONT_SIZE)
                        .weak(),
                );
                ui.label(
                    egui::RichText::new(&lines.current)
                        .size(DISPLAY_FONT_SIZE)
                        .strong(),
                );
            });
        });
    }
}
