//! Gesture state: what is currently being dragged.
//!
//! Sessions are plain values. `begin_move` returns a `DragSession` that the
//! caller threads through `update_move` / `end_move`; nothing is kept in
//! ambient state between pointer events. The editor stores the active
//! session in a single `Gesture` union, so a move and a resize can never be
//! active at the same time.

use serde::{Deserialize, Serialize};

use crate::entities::{Segment, SegmentId, TrackId};

/// Which segment border a resize drags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Left edge: shifts origin and changes length
    Start,
    /// Right edge: changes length only
    End,
}

/// Where a moved segment came from.
///
/// Explicit tri-state instead of a nullable track id: a palette drag is
/// `Palette`, never "track id 0".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOrigin {
    Track(TrackId),
    Palette,
}

/// What a move gesture starts from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DragSource {
    /// Existing segment on a track
    Track {
        track_id: TrackId,
        segment_id: SegmentId,
    },
    /// Palette candidate, not yet present in any track
    Palette(Segment),
}

/// Active move gesture
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Snapshot of the moving segment at its latest position
    pub segment: Segment,
    pub origin: DragOrigin,
    /// Pointer x seen by the last transition
    pub last_pointer_x: f32,
    /// Id reserved for the track materialized on cross-track insertion
    pub insertion_track_id: TrackId,
}

impl DragSession {
    pub fn segment_id(&self) -> SegmentId {
        self.segment.id
    }

    pub fn from_palette(&self) -> bool {
        self.origin == DragOrigin::Palette
    }
}

/// Active resize gesture
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    pub track_id: TrackId,
    pub segment_id: SegmentId,
    pub edge: Edge,
    pub last_pointer_x: f32,
}

impl ResizeSession {
    /// Advance to a new pointer x, returning the horizontal delta
    pub fn advance(&mut self, pointer_x: f32) -> f32 {
        let dx = pointer_x - self.last_pointer_x;
        self.last_pointer_x = pointer_x;
        dx
    }
}

/// Gesture kind, for logging and errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Move,
    Resize,
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureKind::Move => write!(f, "move"),
            GestureKind::Resize => write!(f, "resize"),
        }
    }
}

/// Single-pointer gesture state machine
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Moving(DragSession),
    Resizing(ResizeSession),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Gesture::Idle => None,
            Gesture::Moving(_) => Some(GestureKind::Move),
            Gesture::Resizing(_) => Some(GestureKind::Resize),
        }
    }

    /// Fail with `Busy` unless idle
    pub fn ensure_idle(&self) -> Result<(), GestureError> {
        match self.kind() {
            None => Ok(()),
            Some(active) => Err(GestureError::Busy { active }),
        }
    }
}

/// Gesture start errors
#[derive(Debug, Clone, PartialEq)]
pub enum GestureError {
    /// Another gesture is in progress
    Busy { active: GestureKind },
    SegmentNotFound {
        track_id: TrackId,
        segment_id: SegmentId,
    },
    TrackNotFound(TrackId),
}

impl std::fmt::Display for GestureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureError::Busy { active } => write!(f, "Cannot start gesture: {} in progress", active),
            GestureError::SegmentNotFound { track_id, segment_id } => {
                write!(f, "Segment {} not found on track {}", segment_id, track_id)
            }
            GestureError::TrackNotFound(id) => write!(f, "Track {} not found", id),
        }
    }
}

impl std::error::Error for GestureError {}
