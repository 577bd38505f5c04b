//! Marker configuration.

use serde::{Deserialize, Serialize};

use crate::style::MarkerStyle;

/// Default minimum marker width and height in device units.
pub const DEFAULT_MIN_SIZE: i32 = 50;

/// Default half-width of a corner handle's hit square.
pub const DEFAULT_TOUCH_THRESHOLD: i32 = 10;

/// Initial configuration for a [`CropMarker`](crate::CropMarker).
///
/// Out-of-range values are clamped at construction, never rejected: edges
/// below zero rise to zero, a NaN or negative aspect ratio unlocks, and
/// negative sizes or thresholds become zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Whether the marker reacts to pointer events and reports crop bounds.
    pub enabled: bool,
    /// Initial left edge in device units.
    pub left: i32,
    /// Initial top edge.
    pub top: i32,
    /// Initial right edge.
    pub right: i32,
    /// Initial bottom edge.
    pub bottom: i32,
    /// Locked width/height ratio; 0 means unconstrained.
    pub aspect_ratio: f64,
    /// Minimum marker width and height.
    pub min_size: i32,
    /// Half-width of the corner handles' hit squares.
    pub touch_threshold: i32,
    /// Container width in device units.
    pub view_width: i32,
    /// Container height in device units.
    pub view_height: i32,
    /// Decoration description consumed by the host renderer.
    pub style: MarkerStyle,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
            aspect_ratio: 0.0,
            min_size: DEFAULT_MIN_SIZE,
            touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            view_width: 0,
            view_height: 0,
            style: MarkerStyle::default(),
        }
    }
}
