//! Timeline: top-level editor state, an ordered list of tracks.
//!
//! Track order is meaningful: it is the vertical stacking order and the
//! reference frame for insertion indices computed during a drag.
//! Timeline is also the unit of serialization: `Timeline::to_json` /
//! `Timeline::from_json`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::segment::{Segment, SegmentId};
use super::track::{Track, TrackId};

/// Timeline load/save errors
#[derive(Debug)]
pub enum TimelineError {
    Io(String),
    Parse(String),
    DuplicateSegment(SegmentId),
    DuplicateTrack(TrackId),
}

impl std::fmt::Display for TimelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineError::Io(e) => write!(f, "Timeline I/O error: {}", e),
            TimelineError::Parse(e) => write!(f, "Timeline parse error: {}", e),
            TimelineError::DuplicateSegment(id) => write!(f, "Segment id {} used more than once", id),
            TimelineError::DuplicateTrack(id) => write!(f, "Track id {} used more than once", id),
        }
    }
}

impl std::error::Error for TimelineError {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub tracks: Vec<Track>,
}

impl Timeline {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Default editor content: one single-segment track above a
    /// three-segment track.
    pub fn demo() -> Self {
        Self::new(vec![
            Track::with_segments(vec![Segment::new(0.0, 100.0)]),
            Track::with_segments(vec![
                Segment::new(6.0, 100.0),
                Segment::new(120.0, 100.0),
                Segment::new(322.0, 100.0),
            ]),
        ])
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    /// Find segment anywhere in the timeline, with the track holding it
    pub fn find_segment(&self, id: SegmentId) -> Option<(TrackId, &Segment)> {
        self.tracks
            .iter()
            .find_map(|t| t.find_segment(id).map(|s| (t.id, s)))
    }

    /// Id of the track currently holding the segment
    pub fn track_of(&self, id: SegmentId) -> Option<TrackId> {
        self.find_segment(id).map(|(track_id, _)| track_id)
    }

    pub fn segment_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Drop every track without segments. Returns number of pruned tracks.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| !t.is_empty());
        before - self.tracks.len()
    }

    /// Check id uniqueness for tracks and for segments across all tracks
    pub fn validate(&self) -> Result<(), TimelineError> {
        let mut track_ids = HashSet::new();
        let mut segment_ids = HashSet::new();
        for track in &self.tracks {
            if !track_ids.insert(track.id) {
                return Err(TimelineError::DuplicateTrack(track.id));
            }
            for seg in &track.segments {
                if !segment_ids.insert(seg.id) {
                    return Err(TimelineError::DuplicateSegment(seg.id));
                }
            }
        }
        Ok(())
    }

    /// Save timeline to JSON file (`.json` extension enforced)
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), TimelineError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::Parse(e.to_string()))?;

        let path = path.as_ref();
        let path = if path.extension().and_then(|s| s.to_str()) != Some("json") {
            path.with_extension("json")
        } else {
            path.to_path_buf()
        };

        fs::write(&path, json).map_err(|e| TimelineError::Io(format!("{}: {}", path.display(), e)))?;
        log::info!("Timeline saved to {}", path.display());
        Ok(())
    }

    /// Load timeline from JSON file, rejecting duplicate ids
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, TimelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| TimelineError::Io(format!("{}: {}", path.display(), e)))?;
        let timeline = Self::from_json_str(&json)?;
        log::info!(
            "Timeline loaded from {}: {} tracks, {} segments",
            path.display(),
            timeline.len(),
            timeline.segment_count()
        );
        Ok(timeline)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TimelineError> {
        let timeline: Timeline =
            serde_json::from_str(json).map_err(|e| TimelineError::Parse(e.to_string()))?;
        timeline.validate()?;
        Ok(timeline)
    }
}
