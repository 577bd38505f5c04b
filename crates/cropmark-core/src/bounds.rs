//! Boundary regions for hit-testing and drag clamping.
//!
//! Every bounds form is a pure query over the current cell values; nothing
//! is cached, so a bounds always reflects the marker and view as they are at
//! the moment of the call.

use crate::coord::{CellPoint, Coord, MarkerCells, ViewCells};

/// Which marker corner a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Whether this corner sits on the marker's left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Whether this corner sits on the marker's top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// A rectangle over four coordinate slots.
///
/// Constructed either aliasing existing slots (the area handle's touch
/// region is the marker rectangle itself) or owning fresh ones, in which
/// case `set` seeds and `add` folds points into a running min/max rectangle.
#[derive(Debug, Clone, Default)]
pub struct RectBounds {
    left: Coord,
    top: Coord,
    right: Coord,
    bottom: Coord,
}

impl RectBounds {
    /// A rectangle over fresh slots; seed it with `set` before folding.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rectangle aliasing four existing slots.
    pub fn from_cells(left: Coord, top: Coord, right: Coord, bottom: Coord) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Overwrite all four edges.
    pub fn set(&self, left: i32, top: i32, right: i32, bottom: i32) {
        self.left.set(left);
        self.top.set(top);
        self.right.set(right);
        self.bottom.set(bottom);
    }

    /// Grow the rectangle to include (x, y).
    pub fn add(&self, x: i32, y: i32) {
        self.left.set(self.left.get().min(x));
        self.top.set(self.top.get().min(y));
        self.right.set(self.right.get().max(x));
        self.bottom.set(self.bottom.get().max(y));
    }

    pub fn left(&self) -> i32 {
        self.left.get()
    }

    pub fn top(&self) -> i32 {
        self.top.get()
    }

    pub fn right(&self) -> i32 {
        self.right.get()
    }

    pub fn bottom(&self) -> i32 {
        self.bottom.get()
    }
}

/// A boundary strategy: each variant captures the cells and configuration it
/// reads and answers the shared edge/containment contract.
#[derive(Debug, Clone)]
pub enum Bounds {
    /// Legal anchor region for a corner handle: the view rectangle minus the
    /// band closer than the minimum size to the diagonally opposite corner.
    Corner {
        corner: Corner,
        marker: MarkerCells,
        min_size: Coord,
        view: ViewCells,
    },
    /// Square hit region of half-width `threshold` centered on `anchor`.
    Anchor { anchor: CellPoint, threshold: Coord },
    /// A concrete rectangle, aliased or accumulated.
    Rect(RectBounds),
    /// Translation range for the area handle's top-left corner, keeping the
    /// rectangle inside the view at its current size.
    Area { marker: MarkerCells, view: ViewCells },
}

impl Bounds {
    pub fn left(&self) -> i32 {
        match self {
            Bounds::Corner {
                corner,
                marker,
                min_size,
                view,
            } => {
                if corner.is_left() {
                    0
                } else {
                    (marker.left.get() + min_size.get()).min(view.width.get())
                }
            }
            Bounds::Anchor { anchor, threshold } => anchor.x.get() - threshold.get(),
            Bounds::Rect(rect) => rect.left(),
            Bounds::Area { .. } => 0,
        }
    }

    pub fn top(&self) -> i32 {
        match self {
            Bounds::Corner {
                corner,
                marker,
                min_size,
                view,
            } => {
                if corner.is_top() {
                    0
                } else {
                    (marker.top.get() + min_size.get()).min(view.height.get())
                }
            }
            Bounds::Anchor { anchor, threshold } => anchor.y.get() - threshold.get(),
            Bounds::Rect(rect) => rect.top(),
            Bounds::Area { .. } => 0,
        }
    }

    pub fn right(&self) -> i32 {
        match self {
            Bounds::Corner {
                corner,
                marker,
                min_size,
                view,
            } => {
                if corner.is_left() {
                    (marker.right.get() - min_size.get()).max(0)
                } else {
                    view.width.get()
                }
            }
            Bounds::Anchor { anchor, threshold } => anchor.x.get() + threshold.get(),
            Bounds::Rect(rect) => rect.right(),
            Bounds::Area { marker, view } => view.width.get() - marker.width(),
        }
    }

    pub fn bottom(&self) -> i32 {
        match self {
            Bounds::Corner {
                corner,
                marker,
                min_size,
                view,
            } => {
                if corner.is_top() {
                    (marker.bottom.get() - min_size.get()).max(0)
                } else {
                    view.height.get()
                }
            }
            Bounds::Anchor { anchor, threshold } => anchor.y.get() + threshold.get(),
            Bounds::Rect(rect) => rect.bottom(),
            Bounds::Area { marker, view } => view.height.get() - marker.height(),
        }
    }

    /// Inclusive containment on all four edges; integer call sites convert
    /// with `as f64`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.left() as f64 <= x
            && x <= self.right() as f64
            && self.top() as f64 <= y
            && y <= self.bottom() as f64
    }
}
