//! Track (lane) on the timeline.
//!
//! A track holds segments in insertion order. The order of the list has no
//! effect on rendering since every segment is positioned absolutely by its
//! `start`; a segment re-inserted during a drag is appended to the end.
//!
//! Unlike a DAW lane, segments may overlap: no placement check is performed.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::segment::{Segment, SegmentId};

/// Unique track identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub Uuid);

impl TrackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Track {
    pub fn new() -> Self {
        Self::with_id(TrackId::new())
    }

    pub fn with_id(id: TrackId) -> Self {
        Self {
            id,
            segments: Vec::new(),
        }
    }

    /// Build a track from existing segments (order kept)
    pub fn with_segments(segments: Vec<Segment>) -> Self {
        Self {
            id: TrackId::new(),
            segments,
        }
    }

    /// Append segment to the end of the list
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Copy of this track without the given segment
    pub fn without(&self, id: SegmentId) -> Self {
        Self {
            id: self.id,
            segments: self.segments.iter().filter(|s| s.id != id).cloned().collect(),
        }
    }

    pub fn find_segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn find_segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// Topmost segment under a track-relative x (last in list draws on top)
    pub fn segment_at(&self, x: f32) -> Option<&Segment> {
        self.segments.iter().rev().find(|s| s.contains_x(x))
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.find_segment(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
