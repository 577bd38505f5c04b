//! Declarative decoration model consumed by the host renderer.
//!
//! The core never rasterizes any of this. It stores the description and
//! answers the one styling question that depends on interaction state, grid
//! visibility, through [`CropMarker::grid_lines_visible`](crate::CropMarker::grid_lines_visible).

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 50% black, the default overlay shade.
    pub fn overlay() -> Self {
        Self::new(0, 0, 0, 128)
    }

    /// 50% white, the default stroke color.
    pub fn stroke() -> Self {
        Self::new(255, 255, 255, 127)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Shape of the cut-out mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaskKind {
    #[default]
    Rectangle,
    Oval,
}

/// When grid lines are drawn inside the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridLinesBehavior {
    /// Never.
    None,
    /// Only while a drag is active.
    #[default]
    Touch,
    /// Whenever the marker is drawn.
    Always,
}

/// A stroked line description with an optional dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: SerializableColor,
    pub width: u32,
    pub dash_width: u32,
    pub dash_gap: u32,
}

impl LineStyle {
    /// Dash pattern as (segment, gap), present only when both are positive.
    pub fn dash(&self) -> Option<(u32, u32)> {
        (self.dash_width > 0 && self.dash_gap > 0).then_some((self.dash_width, self.dash_gap))
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::stroke(),
            width: 1,
            dash_width: 0,
            dash_gap: 0,
        }
    }
}

/// Corner decoration strokes drawn at the marker's corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    pub color: SerializableColor,
    pub width: u32,
    pub length: u32,
    /// Inset from the marker edge; negative values push the decoration
    /// outward.
    pub inset: i32,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::stroke(),
            width: 1,
            length: 20,
            inset: 0,
        }
    }
}

/// Complete decoration description for the marker overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Shade drawn over everything outside the mask.
    pub overlay_color: SerializableColor,
    pub mask: MaskKind,
    /// Outline of the marker rectangle.
    pub stroke: LineStyle,
    pub handle_stroke: HandleStyle,
    pub grid_lines_behavior: GridLinesBehavior,
    /// Number of grid lines per axis inside the marker.
    pub grid_lines: u32,
    pub grid_stroke: LineStyle,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            overlay_color: SerializableColor::overlay(),
            mask: MaskKind::default(),
            stroke: LineStyle::default(),
            handle_stroke: HandleStyle::default(),
            grid_lines_behavior: GridLinesBehavior::default(),
            grid_lines: 1,
            grid_stroke: LineStyle::default(),
        }
    }
}
