//! Segment: a positioned, sized interval placed on a track.
//!
//! Coordinates are pixels relative to the track origin. `start` is the left
//! edge, `length` the horizontal extent. Renderers draw a segment at
//! `x = start`, `width = length`.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique segment identifier, stable for the segment's lifetime.
///
/// Unique across the whole timeline, not just within one track: a dragged
/// segment is looked up and removed by id across all tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub Uuid);

impl SegmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single clip on a track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    /// Horizontal offset from the track origin (px)
    pub start: f32,
    /// Horizontal extent (px). Non-negative unless resized with the
    /// unclamped policy.
    pub length: f32,
}

impl Segment {
    pub fn new(start: f32, length: f32) -> Self {
        Self::with_id(SegmentId::new(), start, length)
    }

    pub fn with_id(id: SegmentId, start: f32, length: f32) -> Self {
        Self { id, start, length }
    }

    /// Right edge in track coordinates
    pub fn end(&self) -> f32 {
        self.start + self.length
    }

    /// Copy of this segment shifted horizontally by `dx`
    pub fn shifted(&self, dx: f32) -> Self {
        Self {
            start: self.start + dx,
            ..self.clone()
        }
    }

    /// Check whether a track-relative x coordinate falls inside the segment
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.start && x <= self.end()
    }
}
