//! Shared application-wide constants.
//! Centralizes tweakable values used across UI rendering and the shape field.

// Shape field
/// Number of decorative background shapes generated at startup.
pub const SHAPE_COUNT: usize = 15;
/// Minimum shape diameter in points.
pub const SHAPE_MIN_SIZE: f32 = 50.0;
/// Maximum shape diameter in points.
pub const SHAPE_MAX_SIZE: f32 = 150.0;
/// Shortest time a shape takes to drift across the window, in seconds.
pub const SHAPE_MIN_DURATION: f32 = 20.0;
/// Longest time a shape takes to drift across the window, in seconds.
pub const SHAPE_MAX_DURATION: f32 = 50.0;
/// Maximum delay before a shape starts drifting, in seconds.
pub const SHAPE_MAX_DELAY: f32 = 5.0;

// Calculator card
/// Width of the calculator card in points.
pub const CARD_WIDTH: f32 = 320.0;
/// Height of a keypad button in points.
pub const BUTTON_HEIGHT: f32 = 52.0;
/// Gap between keypad buttons in points.
pub const BUTTON_SPACING: f32 = 8.0;
/// Font size of the current-entry display line.
pub const DISPLAY_FONT_SIZE: f32 = 36.0;
/// Font size of the previous-expression display line.
pub const DISPLAY_PREVIOUS_FONT_SIZE: f32 = 16.0;
/// Fixed height reserved for the two-line display region.
pub const DISPLAY_HEIGHT: f32 = 84.0;
