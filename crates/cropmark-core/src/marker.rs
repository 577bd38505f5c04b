//! The crop marker façade.

use std::fmt;

use kurbo::Rect;

use crate::bounds::{Bounds, Corner};
use crate::config::MarkerConfig;
use crate::coord::{CellPoint, Coord, FloatCell, MarkerCells, ViewCells};
use crate::handle::TouchHandle;
use crate::pointer::{DragArbiter, PointerId, PointerPhase};
use crate::style::{GridLinesBehavior, MarkerStyle};

/// Identifies one of the five touch handles.
///
/// Declaration order is the hit-test priority: when a pointer-down matches
/// several handles at the same distance, the earliest listed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Area,
}

impl HandleId {
    /// All handles in hit-test priority order.
    pub const PRIORITY: [HandleId; 5] = [
        HandleId::TopLeft,
        HandleId::TopRight,
        HandleId::BottomLeft,
        HandleId::BottomRight,
        HandleId::Area,
    ];

    fn index(self) -> usize {
        match self {
            HandleId::TopLeft => 0,
            HandleId::TopRight => 1,
            HandleId::BottomLeft => 2,
            HandleId::BottomRight => 3,
            HandleId::Area => 4,
        }
    }

    fn from_index(index: usize) -> HandleId {
        HandleId::PRIORITY[index]
    }
}

/// Interactive crop selection marker.
///
/// Owns the marker rectangle, the five touch handles, and the drag arbiter.
/// The host feeds pointer-phase events through [`handle_pointer`] and reads
/// the rectangle, handle anchors, and normalized crop bounds back for
/// drawing. Single-threaded and purely reactive: every call runs to
/// completion, nothing blocks, and coordinate cells are only ever mutated by
/// the one handle the arbiter has bound.
///
/// Programmatic edits go through the same grab/move/release path as
/// interactive drags, so they obey the identical clamping and ratio
/// projection.
///
/// [`handle_pointer`]: CropMarker::handle_pointer
pub struct CropMarker {
    marker: MarkerCells,
    view: ViewCells,
    min_size: Coord,
    touch_threshold: Coord,
    aspect_ratio: FloatCell,
    handles: [TouchHandle; 5],
    arbiter: DragArbiter,
    enabled: bool,
    /// Decoration description for the host renderer.
    pub style: MarkerStyle,
    change_listener: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for CropMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropMarker")
            .field("marker", &self.marker.edges())
            .field("enabled", &self.enabled)
            .field("dragging", &self.arbiter.is_dragging())
            .finish_non_exhaustive()
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() || ratio < 0.0 { 0.0 } else { ratio }
}

fn corner_point(marker: &MarkerCells, corner: Corner) -> CellPoint {
    match corner {
        Corner::TopLeft => CellPoint::from_cells(marker.left.clone(), marker.top.clone()),
        Corner::TopRight => CellPoint::from_cells(marker.right.clone(), marker.top.clone()),
        Corner::BottomLeft => CellPoint::from_cells(marker.left.clone(), marker.bottom.clone()),
        Corner::BottomRight => CellPoint::from_cells(marker.right.clone(), marker.bottom.clone()),
    }
}

impl CropMarker {
    /// Build a marker from `config`, clamping out-of-range values.
    pub fn new(config: MarkerConfig) -> Self {
        let min = config.min_size.max(0);

        let left = config.left.max(0);
        let top = config.top.max(0);
        let right = config.right.max(0).max(left + min);
        let bottom = config.bottom.max(0).max(top + min);

        let marker = MarkerCells::new(left, top, right, bottom);
        let view = ViewCells::new(config.view_width.max(0), config.view_height.max(0));
        let min_size = Coord::new(min);
        let touch_threshold = Coord::new(config.touch_threshold.max(0));
        let aspect_ratio = FloatCell::new(clamp_ratio(config.aspect_ratio));

        let corner = |c: Corner| {
            TouchHandle::corner(
                corner_point(&marker, c),
                touch_threshold.clone(),
                Bounds::Corner {
                    corner: c,
                    marker: marker.clone(),
                    min_size: min_size.clone(),
                    view: view.clone(),
                },
                aspect_ratio.clone(),
                corner_point(&marker, c.opposite()),
            )
        };

        let handles = [
            corner(Corner::TopLeft),
            corner(Corner::TopRight),
            corner(Corner::BottomLeft),
            corner(Corner::BottomRight),
            TouchHandle::area(marker.clone(), view.clone()),
        ];

        Self {
            marker,
            view,
            min_size,
            touch_threshold,
            aspect_ratio,
            handles,
            arbiter: DragArbiter::new(),
            enabled: config.enabled,
            style: config.style,
            change_listener: None,
        }
    }

    /// Route a pointer-phase event in local coordinates. Returns whether the
    /// marker consumed it; a disabled marker consumes nothing.
    pub fn handle_pointer(
        &mut self,
        pointer: PointerId,
        phase: PointerPhase,
        x: f64,
        y: f64,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        if self.arbiter.dispatch(&mut self.handles, pointer, phase, x, y) {
            self.notify_changed();
        }

        true
    }

    pub fn left(&self) -> i32 {
        self.marker.left.get()
    }

    pub fn top(&self) -> i32 {
        self.marker.top.get()
    }

    pub fn right(&self) -> i32 {
        self.marker.right.get()
    }

    pub fn bottom(&self) -> i32 {
        self.marker.bottom.get()
    }

    /// The marker rectangle in device units.
    pub fn rect(&self) -> Rect {
        let (left, top, right, bottom) = self.marker.edges();
        Rect::new(left as f64, top as f64, right as f64, bottom as f64)
    }

    pub fn set_left(&mut self, left: i32) {
        self.set_marker(left, self.top(), self.right(), self.bottom());
    }

    pub fn set_top(&mut self, top: i32) {
        self.set_marker(self.left(), top, self.right(), self.bottom());
    }

    pub fn set_right(&mut self, right: i32) {
        self.set_marker(self.left(), self.top(), right, self.bottom());
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.set_marker(self.left(), self.top(), self.right(), bottom);
    }

    /// Set all four edges through the same grab/move/release path as
    /// interactive dragging: the top-left edit first, then the bottom-right.
    pub fn set_marker(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.reassert(HandleId::TopLeft, left, top);
        self.reassert(HandleId::BottomRight, right, bottom);
        self.notify_changed();
    }

    /// Re-grab a handle at its current anchor, move it to the target, and
    /// release, funneling the edit through the regular clamping path.
    fn reassert(&mut self, id: HandleId, x: i32, y: i32) {
        let handle = &mut self.handles[id.index()];
        let (anchor_x, anchor_y) = handle.anchor();
        handle.grab(anchor_x, anchor_y);
        handle.move_to(x, y);
        handle.release();
    }

    /// Locked width/height ratio; 0 means unconstrained.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio.get()
    }

    /// Lock the aspect ratio (0, NaN, or negative unlocks) and re-assert the
    /// marker over the full view so the constraint applies immediately.
    pub fn set_aspect_ratio(&mut self, ratio: f64) {
        self.aspect_ratio.set(clamp_ratio(ratio));
        self.reset();
    }

    pub fn min_size(&self) -> i32 {
        self.min_size.get()
    }

    /// Set the minimum marker size (negative values clamp to zero) and
    /// re-assert the marker over the full view.
    pub fn set_min_size(&mut self, min_size: i32) {
        self.min_size.set(min_size.max(0));
        self.reset();
    }

    pub fn touch_threshold(&self) -> i32 {
        self.touch_threshold.get()
    }

    /// Set the hit-square half-width; negative values clamp to zero.
    pub fn set_touch_threshold(&mut self, threshold: i32) {
        self.touch_threshold.set(threshold.max(0));
    }

    /// Current container size.
    pub fn view_size(&self) -> (i32, i32) {
        (self.view.width.get(), self.view.height.get())
    }

    /// Update the container size, then re-assert the bottom-right handle at
    /// its current target so a corner stranded outside the resized view is
    /// pulled back in. Other corners are left as they are.
    pub fn set_view_size(&mut self, width: i32, height: i32) {
        let width = width.max(0);
        let height = height.max(0);
        self.view.width.set(width);
        self.view.height.set(height);
        log::trace!("view resized to {}x{}", width, height);

        let right = self.marker.right.get();
        let bottom = self.marker.bottom.get();
        self.reassert(HandleId::BottomRight, right, bottom);
        self.notify_changed();
    }

    /// Re-assert the marker over the full view through the regular edit
    /// path.
    fn reset(&mut self) {
        let (width, height) = self.view_size();
        self.reassert(HandleId::TopLeft, 0, 0);
        self.reassert(HandleId::BottomRight, width, height);
        self.notify_changed();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.arbiter.is_dragging()
    }

    /// Handle bound to the active drag, if any.
    pub fn active_handle(&self) -> Option<HandleId> {
        self.arbiter.active_handle().map(HandleId::from_index)
    }

    /// Current anchor of a handle: the corner position, or the rectangle's
    /// top-left for the area handle.
    pub fn anchor(&self, id: HandleId) -> (i32, i32) {
        self.handles[id.index()].anchor()
    }

    /// The marker as fractions of the view on each axis, or `None` while
    /// the marker is disabled or the view has no area.
    pub fn crop_bounds(&self) -> Option<Rect> {
        if !self.enabled {
            return None;
        }

        let (width, height) = self.view_size();
        if width <= 0 || height <= 0 {
            return None;
        }

        let (width, height) = (f64::from(width), f64::from(height));
        Some(Rect::new(
            f64::from(self.left()) / width,
            f64::from(self.top()) / height,
            f64::from(self.right()) / width,
            f64::from(self.bottom()) / height,
        ))
    }

    /// Whether the host should draw grid lines right now.
    pub fn grid_lines_visible(&self) -> bool {
        self.style.grid_lines > 0
            && match self.style.grid_lines_behavior {
                GridLinesBehavior::None => false,
                GridLinesBehavior::Touch => self.arbiter.is_dragging(),
                GridLinesBehavior::Always => true,
            }
    }

    /// Register the redraw notification. It fires after every routed
    /// pointer move and after every completed programmatic edit; grab and
    /// release alone do not fire it.
    pub fn set_change_listener(&mut self, listener: impl FnMut() + 'static) {
        self.change_listener = Some(Box::new(listener));
    }

    fn notify_changed(&mut self) {
        if let Some(listener) = &mut self.change_listener {
            listener();
        }
    }
}
