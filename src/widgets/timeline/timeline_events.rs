//! Timeline widget events.
//!
//! `InputEvent` is what the input surface feeds into the editor.
//! The remaining types are notifications the editor emits on the event bus.

use crate::core::engine::{Pointer, RowHover};
use crate::core::gesture::{DragSource, Edge, GestureKind};
use crate::entities::{SegmentId, TrackId};

/// Raw input from the rendering layer
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Drag started on a segment body or on the palette item
    DragStart { x: f32, source: DragSource },
    /// Pointer moved over a row while dragging
    DragOver { pointer: Pointer, hover: RowHover },
    /// Drag released over the surface
    Drop,
    /// Pointer pressed on a resize handle
    EdgeDown {
        x: f32,
        track_id: TrackId,
        segment_id: SegmentId,
        edge: Edge,
    },
    /// Document-level pointer move
    PointerMove { x: f32 },
    /// Document-level pointer release
    PointerUp,
}

/// Timeline contents changed
#[derive(Clone, Debug)]
pub struct TimelineChangedEvent {
    pub tracks: usize,
    pub segments: usize,
}

#[derive(Clone, Debug)]
pub struct GestureStartedEvent {
    pub kind: GestureKind,
    pub segment_id: SegmentId,
}

/// Gesture released. `track_id` is where the segment ended up.
#[derive(Clone, Debug)]
pub struct GestureEndedEvent {
    pub kind: GestureKind,
    pub segment_id: SegmentId,
    pub track_id: Option<TrackId>,
}

/// A palette candidate was placed and a new one generated
#[derive(Clone, Debug)]
pub struct PaletteRefilledEvent {
    pub placed: SegmentId,
    pub candidate: SegmentId,
}
