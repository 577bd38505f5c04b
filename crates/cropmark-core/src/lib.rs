//! CropMark Core Library
//!
//! Interaction and geometry engine for an interactive crop selection
//! marker: pointer-to-handle arbitration, grab/move/release semantics,
//! bounds computation, and aspect-ratio-constrained dragging via
//! line-projection geometry. Rendering, platform layout, and native event
//! translation stay on the host's side of the [`CropMarker`] surface: the
//! host feeds pointer-phase events in and reads the rectangle, handle
//! anchors, and style description back for drawing.

pub mod bounds;
pub mod config;
pub mod coord;
pub mod handle;
pub mod marker;
pub mod pointer;
pub mod ratio;
pub mod style;

pub use bounds::{Bounds, Corner, RectBounds};
pub use config::{MarkerConfig, DEFAULT_MIN_SIZE, DEFAULT_TOUCH_THRESHOLD};
pub use coord::{CellPoint, Coord, FloatCell, MarkerCells, ViewCells};
pub use handle::TouchHandle;
pub use marker::{CropMarker, HandleId};
pub use pointer::{DragArbiter, PointerId, PointerPhase};
pub use ratio::DragLine;
pub use style::{
    GridLinesBehavior, HandleStyle, LineStyle, MarkerStyle, MaskKind, SerializableColor,
};
