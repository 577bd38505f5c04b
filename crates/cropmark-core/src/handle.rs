//! Draggable touch handles over the marker rectangle.

use kurbo::Point;

use crate::bounds::{Bounds, RectBounds};
use crate::coord::{round, CellPoint, Coord, FloatCell, MarkerCells, ViewCells};
use crate::ratio::DragLine;

/// Clamp one axis of a drag target to a bounds range. The lower bound is
/// applied first, so a degenerate range (lower above upper) resolves to its
/// upper edge.
fn clamp_axis(value: i32, lower: i32, upper: i32) -> i32 {
    value.max(lower).min(upper)
}

/// Aspect-ratio drag state for a corner handle. The cached line and range
/// are valid between grab and release only.
#[derive(Debug, Clone)]
struct RatioDrag {
    /// The locked ratio, shared with the marker configuration.
    ratio: FloatCell,
    /// The fixed, diagonally opposite corner.
    ratio_anchor: CellPoint,
    /// Drag line cached by the current grab when ratio locking is active.
    drag_line: Option<DragLine>,
    /// Reachable range along the drag line, computed once per grab.
    ratio_bounds: RectBounds,
}

/// Variant behavior of a handle.
#[derive(Debug, Clone)]
enum Role {
    /// Moves one corner anchor, optionally constrained to a drag line.
    Corner(RatioDrag),
    /// Translates the whole rectangle, preserving its size.
    Area { marker: MarkerCells },
}

/// A draggable handle: an anchor point, a hit-test region, a drag-clamp
/// region, and the transient state of the active grab.
#[derive(Debug, Clone)]
pub struct TouchHandle {
    anchor: CellPoint,
    touch_area: Bounds,
    drag_bounds: Bounds,
    grab_offset: (i32, i32),
    role: Role,
}

impl TouchHandle {
    /// A corner handle anchored on `anchor`, hit within `threshold` of it,
    /// clamped to `drag_bounds`, with `ratio_anchor` as the fixed pivot for
    /// ratio-locked drags.
    pub fn corner(
        anchor: CellPoint,
        threshold: Coord,
        drag_bounds: Bounds,
        ratio: FloatCell,
        ratio_anchor: CellPoint,
    ) -> Self {
        let touch_area = Bounds::Anchor {
            anchor: anchor.clone(),
            threshold,
        };

        Self {
            anchor,
            touch_area,
            drag_bounds,
            grab_offset: (0, 0),
            role: Role::Corner(RatioDrag {
                ratio,
                ratio_anchor,
                drag_line: None,
                ratio_bounds: RectBounds::new(),
            }),
        }
    }

    /// The whole-rectangle handle: hit anywhere inside the marker, dragged
    /// by its top-left corner.
    pub fn area(marker: MarkerCells, view: ViewCells) -> Self {
        let anchor = CellPoint::from_cells(marker.left.clone(), marker.top.clone());
        let touch_area = Bounds::Rect(RectBounds::from_cells(
            marker.left.clone(),
            marker.top.clone(),
            marker.right.clone(),
            marker.bottom.clone(),
        ));
        let drag_bounds = Bounds::Area {
            marker: marker.clone(),
            view,
        };

        Self {
            anchor,
            touch_area,
            drag_bounds,
            grab_offset: (0, 0),
            role: Role::Area { marker },
        }
    }

    /// Current anchor position.
    pub fn anchor(&self) -> (i32, i32) {
        self.anchor.get()
    }

    /// Hit-test for handle selection: `None` outside the touch area,
    /// otherwise the distance from the handle's reference point (the anchor
    /// for corners, the rectangle center for the area handle) to the
    /// pointer.
    pub fn grab_match(&self, x: i32, y: i32) -> Option<f64> {
        if !self.touch_area.contains(x as f64, y as f64) {
            return None;
        }

        let reference = self.reference_point();
        let dx = reference.x - x as f64;
        let dy = reference.y - y as f64;
        Some((dx * dx + dy * dy).sqrt())
    }

    fn reference_point(&self) -> Point {
        match &self.role {
            Role::Corner(_) => {
                let (x, y) = self.anchor.get();
                Point::new(x as f64, y as f64)
            }
            Role::Area { marker } => Point::new(
                (marker.left.get() + marker.right.get()) as f64 * 0.5,
                (marker.top.get() + marker.bottom.get()) as f64 * 0.5,
            ),
        }
    }

    /// Start a drag at (x, y). Records the grab offset and, for a corner
    /// handle with a locked ratio, caches the drag line and its reachable
    /// range for the remainder of the grab. Returns whether the grab landed
    /// inside the touch area.
    pub fn grab(&mut self, x: i32, y: i32) -> bool {
        let grabbed = self.touch_area.contains(x as f64, y as f64);

        if grabbed {
            let (anchor_x, anchor_y) = self.anchor.get();
            self.grab_offset = (x - anchor_x, y - anchor_y);
        }

        if let Role::Corner(drag) = &mut self.role {
            drag.drag_line = None;

            let ratio = drag.ratio.get();
            if grabbed && ratio.is_finite() && ratio > 0.0 {
                let anchor = self.anchor.get();
                if let Some(line) = DragLine::through(drag.ratio_anchor.get(), anchor, ratio) {
                    // The reachable range is the drag line cut down to the
                    // free drag bounds: seed at the current anchor, then
                    // fold in every in-bounds crossing with a bounds edge.
                    let left = self.drag_bounds.left() as f64;
                    let top = self.drag_bounds.top() as f64;
                    let right = self.drag_bounds.right() as f64;
                    let bottom = self.drag_bounds.bottom() as f64;

                    let crossings = [
                        Point::new(left, line.y_at(left)),
                        Point::new(line.x_at(top), top),
                        Point::new(right, line.y_at(right)),
                        Point::new(line.x_at(bottom), bottom),
                    ];

                    drag.ratio_bounds.set(anchor.0, anchor.1, anchor.0, anchor.1);
                    for crossing in crossings {
                        if self.drag_bounds.contains(crossing.x, crossing.y) {
                            drag.ratio_bounds.add(round(crossing.x), round(crossing.y));
                        }
                    }

                    drag.drag_line = Some(line);
                }
            }
        }

        grabbed
    }

    /// Drag toward pointer position (x, y): clamp each axis of the
    /// offset-corrected target to the drag bounds independently, then apply
    /// the variant mutation.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let target_x = clamp_axis(
            x - self.grab_offset.0,
            self.drag_bounds.left(),
            self.drag_bounds.right(),
        );
        let target_y = clamp_axis(
            y - self.grab_offset.1,
            self.drag_bounds.top(),
            self.drag_bounds.bottom(),
        );

        match &self.role {
            Role::Corner(drag) => {
                let (x, y) = match &drag.drag_line {
                    Some(line) => {
                        let projected =
                            line.project(Point::new(target_x as f64, target_y as f64));
                        let x = projected
                            .x
                            .max(drag.ratio_bounds.left() as f64)
                            .min(drag.ratio_bounds.right() as f64);
                        let y = projected
                            .y
                            .max(drag.ratio_bounds.top() as f64)
                            .min(drag.ratio_bounds.bottom() as f64);
                        (round(x), round(y))
                    }
                    None => (target_x, target_y),
                };
                self.anchor.set(x, y);
            }
            Role::Area { marker } => {
                let delta_x = target_x - marker.left.get();
                let delta_y = target_y - marker.top.get();
                marker.left.set(target_x);
                marker.top.set(target_y);
                marker.right.set(marker.right.get() + delta_x);
                marker.bottom.set(marker.bottom.get() + delta_y);
            }
        }
    }

    /// End the drag. Clears the grab offset and any cached ratio geometry so
    /// the next grab recomputes from scratch; safe to call repeatedly.
    pub fn release(&mut self) {
        self.grab_offset = (0, 0);

        if let Role::Corner(drag) = &mut self.role {
            drag.drag_line = None;
            drag.ratio_bounds.set(0, 0, 0, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Corner;

    struct Fixture {
        marker: MarkerCells,
        view: ViewCells,
        min_size: Coord,
        threshold: Coord,
        ratio: FloatCell,
    }

    impl Fixture {
        fn new(edges: (i32, i32, i32, i32), view: (i32, i32), min_size: i32) -> Self {
            Self {
                marker: MarkerCells::new(edges.0, edges.1, edges.2, edges.3),
                view: ViewCells::new(view.0, view.1),
                min_size: Coord::new(min_size),
                threshold: Coord::new(10),
                ratio: FloatCell::new(0.0),
            }
        }

        fn corner_handle(&self, corner: Corner) -> TouchHandle {
            let point = |c: Corner| match c {
                Corner::TopLeft => {
                    CellPoint::from_cells(self.marker.left.clone(), self.marker.top.clone())
                }
                Corner::TopRight => {
                    CellPoint::from_cells(self.marker.right.clone(), self.marker.top.clone())
                }
                Corner::BottomLeft => {
                    CellPoint::from_cells(self.marker.left.clone(), self.marker.bottom.clone())
                }
                Corner::BottomRight => {
                    CellPoint::from_cells(self.marker.right.clone(), self.marker.bottom.clone())
                }
            };

            TouchHandle::corner(
                point(corner),
                self.threshold.clone(),
                Bounds::Corner {
                    corner,
                    marker: self.marker.clone(),
                    min_size: self.min_size.clone(),
                    view: self.view.clone(),
                },
                self.ratio.clone(),
                point(corner.opposite()),
            )
        }

        fn area_handle(&self) -> TouchHandle {
            TouchHandle::area(self.marker.clone(), self.view.clone())
        }
    }

    #[test]
    fn test_grab_match_outside_touch_area() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        let handle = fixture.corner_handle(Corner::BottomRight);

        assert!(handle.grab_match(200, 200).is_none());
    }

    #[test]
    fn test_grab_match_distance_from_anchor() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        let handle = fixture.corner_handle(Corner::BottomRight);

        let distance = handle.grab_match(103, 104).unwrap();

        assert!((distance - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grab_records_offset_and_move_compensates() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        // Grab 5 units off the anchor; the offset keeps the anchor from
        // jumping to the pointer.
        assert!(handle.grab(105, 95));
        handle.move_to(205, 195);

        assert_eq!(handle.anchor(), (200, 200));
    }

    #[test]
    fn test_grab_outside_touch_area_fails() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        assert!(!handle.grab(150, 150));
    }

    #[test]
    fn test_minimum_size_clamp() {
        let fixture = Fixture::new((0, 0, 300, 300), (300, 300), 50);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(300, 300);
        handle.move_to(10, 10);
        handle.release();

        assert_eq!(fixture.marker.edges(), (0, 0, 50, 50));
    }

    #[test]
    fn test_moves_keep_edges_ordered() {
        let fixture = Fixture::new((0, 0, 300, 300), (300, 300), 50);
        let mut handle = fixture.corner_handle(Corner::TopLeft);

        handle.grab(0, 0);
        for target in [(-500, 900), (900, -500), (250, 250), (400, 400)] {
            handle.move_to(target.0, target.1);

            let (left, top, right, bottom) = fixture.marker.edges();
            assert!(left <= right);
            assert!(top <= bottom);
            assert!(right - left >= 50);
            assert!(bottom - top >= 50);
        }
    }

    #[test]
    fn test_area_translation_preserves_size() {
        let fixture = Fixture::new((10, 10, 110, 60), (300, 300), 8);
        let mut handle = fixture.area_handle();

        handle.grab(50, 30);
        handle.move_to(60, 40);
        handle.release();

        assert_eq!(fixture.marker.edges(), (20, 20, 120, 70));
    }

    #[test]
    fn test_area_translation_clamps_to_view() {
        let fixture = Fixture::new((10, 10, 110, 60), (300, 300), 8);
        let mut handle = fixture.area_handle();

        handle.grab(50, 30);
        handle.move_to(5000, 5000);

        // Width 100, height 50: the top-left corner stops at (200, 250).
        assert_eq!(fixture.marker.edges(), (200, 250, 300, 300));
    }

    #[test]
    fn test_area_grab_match_uses_center() {
        let fixture = Fixture::new((10, 10, 110, 60), (300, 300), 8);
        let handle = fixture.area_handle();

        let distance = handle.grab_match(60, 35).unwrap();

        assert!(distance.abs() < f64::EPSILON);
        assert!(handle.grab_match(0, 0).is_none());
    }

    #[test]
    fn test_release_is_idempotent() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(105, 95);
        handle.release();
        let after_first = fixture.marker.edges();
        handle.release();

        assert_eq!(fixture.marker.edges(), after_first);

        // A fresh move after release is uncompensated.
        handle.grab(100, 100);
        handle.move_to(150, 150);
        assert_eq!(handle.anchor(), (150, 150));
    }

    #[test]
    fn test_ratio_locked_drag_follows_the_line() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        fixture.ratio.set(1.0);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(100, 100);
        handle.move_to(200, 50);

        // The perpendicular foot of (200, 50) on the 45-degree line.
        assert_eq!(handle.anchor(), (125, 125));
        assert_eq!(fixture.marker.width(), fixture.marker.height());
    }

    #[test]
    fn test_ratio_locked_drag_clamps_to_ratio_bounds() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        fixture.ratio.set(1.0);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(100, 100);
        handle.move_to(5000, 5000);

        assert_eq!(handle.anchor(), (300, 300));

        handle.move_to(-5000, -5000);
        assert_eq!(handle.anchor(), (50, 50));
    }

    #[test]
    fn test_ratio_cache_cleared_on_release() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        fixture.ratio.set(1.0);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(100, 100);
        handle.release();

        // Ratio unlocked between grabs: the next drag must not reuse the
        // stale line.
        fixture.ratio.set(0.0);
        handle.grab(100, 100);
        handle.move_to(200, 60);

        assert_eq!(handle.anchor(), (200, 60));
    }

    #[test]
    fn test_non_positive_ratio_disables_projection() {
        let fixture = Fixture::new((0, 0, 100, 100), (300, 300), 50);
        fixture.ratio.set(f64::NAN);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(100, 100);
        handle.move_to(200, 60);

        assert_eq!(handle.anchor(), (200, 60));
    }

    #[test]
    fn test_ratio_two_keeps_double_width() {
        let fixture = Fixture::new((0, 0, 200, 100), (400, 400), 50);
        fixture.ratio.set(2.0);
        let mut handle = fixture.corner_handle(Corner::BottomRight);

        handle.grab(200, 100);
        handle.move_to(300, 300);

        let (_, _, right, bottom) = fixture.marker.edges();
        let ratio = f64::from(right) / f64::from(bottom);
        assert!((ratio - 2.0).abs() < 0.05);
    }
}
