//! Aspect-ratio drag-line geometry.
//!
//! When a corner handle is grabbed with a locked ratio, its reachable anchor
//! positions collapse to a single line through the opposite, fixed corner.
//! This module builds that line and projects pointer targets onto it.

use kurbo::Point;

/// Distance along x from the ratio anchor to the imaginary reference point
/// used to orient the drag line.
const REFERENCE_OFFSET: f64 = 100.0;

/// Signed direction of an offset; a zero offset counts as positive.
fn direction(delta: f64) -> i32 {
    if delta < 0.0 { -1 } else { 1 }
}

/// A drag line in slope/intercept form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLine {
    pub slope: f64,
    pub y_intercept: f64,
}

impl DragLine {
    /// Build the line of `handle` anchor positions through `anchor` that
    /// keep the marker's width/height equal to `ratio`.
    ///
    /// An imaginary reference point sits [`REFERENCE_OFFSET`] units from the
    /// anchor along the handle's x-direction; of the two y-roots satisfying
    /// the ratio, the one on the handle's side of the anchor is kept. A
    /// vertical line (zero run) yields `None`: ratio locking is unsupported
    /// there and the grab falls back to free dragging.
    pub fn through(anchor: (i32, i32), handle: (i32, i32), ratio: f64) -> Option<Self> {
        let x_direction = direction((handle.0 - anchor.0) as f64);
        let y_direction = direction((handle.1 - anchor.1) as f64);

        let anchor_x = anchor.0 as f64;
        let anchor_y = anchor.1 as f64;

        let line_x = anchor_x + f64::from(x_direction) * REFERENCE_OFFSET;

        // Two candidate y-roots respect the ratio at that x; keep the one
        // whose direction from the anchor matches the handle's.
        let root_up = anchor_y - REFERENCE_OFFSET / ratio;
        let root_down = anchor_y + REFERENCE_OFFSET / ratio;
        let line_y = if y_direction == direction(root_up - anchor_y) {
            root_up.round()
        } else {
            root_down.round()
        };

        let rise = anchor_y - line_y;
        let run = anchor_x - line_x;

        if run.abs() < f64::EPSILON {
            return None;
        }

        let slope = rise / run;
        Some(Self {
            slope,
            y_intercept: line_y - slope * line_x,
        })
    }

    /// y on the line at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.y_intercept
    }

    /// x on the line at `y`.
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.y_intercept) / self.slope
    }

    /// Perpendicular foot of `point` on the line.
    pub fn project(&self, point: Point) -> Point {
        let perpendicular_slope = -1.0 / self.slope;
        let perpendicular_intercept = point.y - perpendicular_slope * point.x;

        let x = (perpendicular_intercept - self.y_intercept) / (self.slope - perpendicular_slope);
        Point::new(x, self.y_at(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_ratio_gives_diagonal_line() {
        // Bottom-right handle below and right of its anchor: slope 1.
        let line = DragLine::through((0, 0), (100, 100), 1.0).unwrap();

        assert!((line.slope - 1.0).abs() < f64::EPSILON);
        assert!(line.y_intercept.abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_right_quadrant_gives_negative_slope() {
        // Handle above and right of the anchor.
        let line = DragLine::through((0, 100), (100, 0), 1.0).unwrap();

        assert!((line.slope + 1.0).abs() < f64::EPSILON);
        assert!((line.y_at(100.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wide_ratio_flattens_the_line() {
        let line = DragLine::through((0, 0), (100, 100), 2.0).unwrap();

        assert!((line.slope - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_y_offset_counts_as_positive() {
        // Handle level with the anchor: the downward root wins.
        let line = DragLine::through((0, 50), (100, 50), 1.0).unwrap();

        assert!(line.slope > 0.0);
        assert!(line.y_at(100.0) > 50.0);
    }

    #[test]
    fn test_line_passes_through_the_anchor() {
        let line = DragLine::through((40, 60), (140, 10), 1.0).unwrap();

        assert!((line.y_at(40.0) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projection_is_perpendicular_foot() {
        let line = DragLine::through((0, 0), (100, 100), 1.0).unwrap();

        let projected = line.project(Point::new(200.0, 50.0));

        assert!((projected.x - 125.0).abs() < f64::EPSILON);
        assert!((projected.y - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projection_of_point_on_the_line_is_identity() {
        let line = DragLine::through((0, 0), (100, 50), 2.0).unwrap();

        let projected = line.project(Point::new(80.0, line.y_at(80.0)));

        assert!((projected.x - 80.0).abs() < 1e-9);
        assert!((projected.y - line.y_at(80.0)).abs() < 1e-9);
    }
}
