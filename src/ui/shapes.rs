//! Decorative floating-shape background.
//!
//! A fixed number of translucent circles is generated once at startup with
//! randomized size, position, and animation timing. They drift slowly upward
//! behind the calculator and wrap around when they leave the top of the
//! window. The field never interacts with anything else.

use crate::constants::{
    SHAPE_COUNT, SHAPE_MAX_DELAY, SHAPE_MAX_DURATION, SHAPE_MAX_SIZE, SHAPE_MIN_DURATION,
    SHAPE_MIN_SIZE,
};
use eframe::egui;
use rand::Rng;

/// A single decorative background shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Diameter in points
    pub size: f32,
    /// Horizontal position as a fraction of the window width
    pub x_frac: f32,
    /// Starting vertical position as a fraction of the window height;
    /// shapes begin in `[1, 2)`, i.e. below the visible area
    pub y_frac: f32,
    /// Seconds the shape takes to drift the full height of the window
    pub drift_duration: f32,
    /// Seconds before the shape starts moving
    pub drift_delay: f32,
}

/// The full set of background shapes for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeField {
    shapes: Vec<Shape>,
}

impl ShapeField {
    /// Generates [`SHAPE_COUNT`] shapes with randomized parameters.
    ///
    /// Taking the rng as a parameter keeps generation deterministic under a
    /// seeded rng in tests.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let shapes = (0..SHAPE_COUNT)
            .map(|_| Shape {
                size: rng.gen_range(SHAPE_MIN_SIZE..SHAPE_MAX_SIZE),
                x_frac: rng.gen_range(0.0..1.0),
                y_frac: rng.gen_range(1.0..2.0),
                drift_duration: rng.gen_range(SHAPE_MIN_DURATION..SHAPE_MAX_DURATION),
                drift_delay: rng.gen_range(0.0..SHAPE_MAX_DELAY),
            })
            .collect();
        Self { shapes }
    }

    /// The generated shapes.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Computes the vertical position (as a window-height fraction) of a
    /// shape at `time_secs` since startup.
    ///
    /// Before its delay elapses the shape sits at its starting position.
    /// Afterwards it drifts upward by one window height per duration and
    /// wraps, so each shape loops forever at its own pace.
    fn y_at(shape: &Shape, time_secs: f64) -> f32 {
        let active = (time_secs as f32 - shape.drift_delay).max(0.0);
        let travelled = active / shape.drift_duration;
        // Keep positions within [-1, 2) so a shape re-enters from below
        // after fully clearing the top of the window.
        let span = 3.0;
        (shape.y_frac - travelled + 1.0).rem_euclid(span) - 1.0
    }

    /// Paints all shapes into `rect` for the given animation time.
    ///
    /// Pure with respect to `self`; animation is a function of `time_secs`
    /// only, so painting twice at the same time yields identical output.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, time_secs: f64, dark_mode: bool) {
        let fill = if dark_mode {
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 10)
        } else {
            egui::Color32::from_rgba_unmultiplied(60, 60, 120, 14)
        };

        for shape in &self.shapes {
            let center = egui::pos2(
                rect.min.x + shape.x_frac * rect.width(),
                rect.min.y + Self::y_at(shape, time_secs) * rect.height(),
            );
            painter.circle_filled(center, shape.size / 2.0, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_produces_expected_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ShapeField::generate(&mut rng);
        assert_eq!(field.shapes().len(), SHAPE_COUNT);
    }

    #[test]
    fn test_generated_shapes_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = ShapeField::generate(&mut rng);
        for shape in field.shapes() {
            assert!(shape.size >= SHAPE_MIN_SIZE && shape.size < SHAPE_MAX_SIZE);
            assert!(shape.x_frac >= 0.0 && shape.x_frac < 1.0);
            assert!(shape.y_frac >= 1.0 && shape.y_frac < 2.0);
            assert!(
                shape.drift_duration >= SHAPE_MIN_DURATION
                    && shape.drift_duration < SHAPE_MAX_DURATION
            );
            assert!(shape.drift_delay >= 0.0 && shape.drift_delay < SHAPE_MAX_DELAY);
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        assert_eq!(ShapeField::generate(&mut a), ShapeField::generate(&mut b));
    }

    #[test]
    fn test_shape_holds_still_until_delay_elapses() {
        let shape = Shape {
            size: 80.0,
            x_frac: 0.5,
            y_frac: 1.2,
            drift_duration: 30.0,
            drift_delay: 5.0,
        };
        let before = ShapeField::y_at(&shape, 0.0);
        let at_delay = ShapeField::y_at(&shape, 5.0);
        assert_eq!(before, at_delay);
    }

    #[test]
    fn test_shape_drifts_upward_and_wraps() {
        let shape = Shape {
            size: 80.0,
            x_frac: 0.5,
            y_frac: 1.5,
            drift_duration: 30.0,
            drift_delay: 0.0,
        };
        let start = ShapeField::y_at(&shape, 0.0);
        let later = ShapeField::y_at(&shape, 10.0);
        assert!(later < start, "shape should drift upward over time");

        // One full loop (3 window heights of travel) returns to the start
        let wrapped = ShapeField::y_at(&shape, 90.0);
        assert!((wrapped - start).abs() < 1e-4);

        // Positions always stay inside the wrap band
        for t in 0..200 {
            let y = ShapeField::y_at(&shape, t as f64);
            assert!((-1.0..2.0).contains(&y));
        }
    }
}
