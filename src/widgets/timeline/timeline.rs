//! Timeline widget - layout configuration and geometry types.
//!
//! Renderers read `TimelineConfig` to place rows and segment bars; the input
//! surface uses the same numbers (through `timeline_helpers`) to turn raw
//! pointer coordinates into hovered rows and grabbed segments.

use serde::{Deserialize, Serialize};

use crate::core::engine::{RowBounds, TRACK_HEIGHT};
use crate::core::gesture::Edge;
use crate::entities::{SegmentId, TrackId};

/// Layout of the track surface (all values in px)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Lane height; also the height of the same-track dead zone
    pub track_height: f32,
    /// Vertical padding above and below each lane inside its row
    pub row_padding: f32,
    /// Padding above the first row
    pub surface_padding: f32,
    /// Width of the resize handles at each end of a segment
    pub edge_handle_width: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            track_height: TRACK_HEIGHT,
            row_padding: 10.0,
            surface_padding: 10.0,
            edge_handle_width: 4.0,
        }
    }
}

impl TimelineConfig {
    /// Full row height: lane plus padding
    pub fn row_height(&self) -> f32 {
        self.track_height + 2.0 * self.row_padding
    }

    /// Screen bounds of row `index` (the drop target for drag-over)
    pub fn row_bounds(&self, index: usize) -> RowBounds {
        RowBounds {
            y: self.surface_padding + index as f32 * self.row_height(),
            height: self.row_height(),
        }
    }
}

/// Axis-aligned rectangle in surface coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// What a pointer press on a segment grabs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabTool {
    /// Segment body: move gesture
    Move,
    /// Edge handle: resize gesture
    Resize(Edge),
}

/// Result of hit-testing a pointer press
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub track_id: TrackId,
    pub track_index: usize,
    pub segment_id: SegmentId,
    pub tool: GrabTool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows() {
        let cfg = TimelineConfig::default();
        assert_eq!(cfg.row_height(), 70.0);
        assert_eq!(cfg.row_bounds(0), RowBounds { y: 10.0, height: 70.0 });
        assert_eq!(cfg.row_bounds(2).y, 150.0);
        // Dead zone matches lane extent
        assert_eq!(cfg.row_bounds(1).center_y(), 115.0);
    }

    #[test]
    fn test_config_partial_json() {
        let cfg: TimelineConfig = serde_json::from_str(r#"{ "track_height": 40 }"#).unwrap();
        assert_eq!(cfg.track_height, 40.0);
        assert_eq!(cfg.row_padding, 10.0);
        assert_eq!(cfg.row_height(), 60.0);
    }
}
