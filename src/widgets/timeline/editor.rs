//! Timeline editor: input surface events -> engine transitions.
//!
//! The editor owns the timeline, the palette and the single active gesture.
//! The input surface calls `handle()` (or the per-event methods) from its
//! pointer callbacks and re-renders when the result says the timeline
//! changed. Everything runs synchronously on the caller's thread.
//!
//! Gesture rules:
//! - one gesture at a time; starting another returns `GestureError::Busy`
//! - update events for a gesture that is not active are ignored
//! - `Drop` / `PointerUp` with nothing active are no-ops, so a repeated
//!   release never changes the timeline

use crate::config::EditorConfig;
use crate::core::engine::{self, LengthPolicy, Pointer, RowHover};
use crate::core::event_bus::EventEmitter;
use crate::core::gesture::{DragSource, Edge, Gesture, GestureError, GestureKind, ResizeSession};
use crate::entities::{Palette, SegmentId, Timeline, TrackId};

use super::timeline_events::{
    GestureEndedEvent, GestureStartedEvent, InputEvent, PaletteRefilledEvent, TimelineChangedEvent,
};
use super::TimelineConfig;

#[derive(Debug)]
pub struct Editor {
    timeline: Timeline,
    palette: Palette,
    gesture: Gesture,
    layout: TimelineConfig,
    length_policy: LengthPolicy,
    events: EventEmitter,
}

impl Editor {
    pub fn new(timeline: Timeline, config: EditorConfig) -> Self {
        log::info!(
            "Editor created: {} tracks, {} segments, resize policy {:?}",
            timeline.len(),
            timeline.segment_count(),
            config.length_policy
        );
        Self {
            timeline,
            palette: Palette::new(config.palette),
            gesture: Gesture::Idle,
            layout: config.timeline,
            length_policy: config.length_policy,
            events: EventEmitter::dummy(),
        }
    }

    /// Attach an event emitter for notifications
    pub fn with_emitter(mut self, events: EventEmitter) -> Self {
        self.events = events;
        self
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn layout(&self) -> &TimelineConfig {
        &self.layout
    }

    /// Dispatch one input event. Returns true if the timeline changed.
    pub fn handle(&mut self, event: InputEvent) -> Result<bool, GestureError> {
        match event {
            InputEvent::DragStart { x, source } => self.drag_start(x, source).map(|_| false),
            InputEvent::DragOver { pointer, hover } => Ok(self.drag_over(pointer, &hover)),
            InputEvent::Drop => Ok(self.drop_segment()),
            InputEvent::EdgeDown {
                x,
                track_id,
                segment_id,
                edge,
            } => self.edge_down(x, track_id, segment_id, edge).map(|_| false),
            InputEvent::PointerMove { x } => Ok(self.pointer_move(x)),
            InputEvent::PointerUp => Ok(self.pointer_up()),
        }
    }

    /// Start dragging a segment body or the palette candidate
    pub fn drag_start(&mut self, x: f32, source: DragSource) -> Result<(), GestureError> {
        if let Err(e) = self.gesture.ensure_idle() {
            log::warn!("Drag start rejected: {}", e);
            return Err(e);
        }

        let session = match source {
            DragSource::Track { track_id, segment_id } => {
                engine::begin_move(&self.timeline, DragSource::Track { track_id, segment_id }, x)
                    .ok_or(GestureError::SegmentNotFound { track_id, segment_id })?
            }
            DragSource::Palette(candidate) => engine::begin_palette_move(candidate, x),
        };

        self.events.emit(GestureStartedEvent {
            kind: GestureKind::Move,
            segment_id: session.segment_id(),
        });
        self.gesture = Gesture::Moving(session);
        Ok(())
    }

    /// Start dragging the current palette candidate
    pub fn palette_drag_start(&mut self, x: f32) -> Result<(), GestureError> {
        let candidate = self.palette.candidate().clone();
        self.drag_start(x, DragSource::Palette(candidate))
    }

    /// Pointer moved over a row during a move gesture
    pub fn drag_over(&mut self, pointer: Pointer, hover: &RowHover) -> bool {
        let Gesture::Moving(session) = &self.gesture else {
            return false;
        };
        let (next, session) =
            engine::update_move(&self.timeline, session, pointer, hover, self.layout.track_height);
        self.gesture = Gesture::Moving(session);
        self.commit(next)
    }

    /// Release a move gesture. Refills the palette if its candidate landed.
    pub fn drop_segment(&mut self) -> bool {
        let session = match std::mem::take(&mut self.gesture) {
            Gesture::Moving(session) => session,
            other => {
                self.gesture = other;
                return false;
            }
        };

        let (next, summary) = engine::end_move(&self.timeline, session);
        let changed = self.commit(next);

        if summary.placed_from_palette() {
            self.palette.regenerate();
            self.events.emit(PaletteRefilledEvent {
                placed: summary.segment_id,
                candidate: self.palette.candidate().id,
            });
        }
        self.events.emit(GestureEndedEvent {
            kind: GestureKind::Move,
            segment_id: summary.segment_id,
            track_id: summary.track_id,
        });
        changed
    }

    /// Pointer pressed on a resize handle
    pub fn edge_down(
        &mut self,
        x: f32,
        track_id: TrackId,
        segment_id: SegmentId,
        edge: Edge,
    ) -> Result<(), GestureError> {
        if let Err(e) = self.gesture.ensure_idle() {
            log::warn!("Resize start rejected: {}", e);
            return Err(e);
        }
        let track = self
            .timeline
            .track(track_id)
            .ok_or(GestureError::TrackNotFound(track_id))?;
        if !track.contains(segment_id) {
            return Err(GestureError::SegmentNotFound { track_id, segment_id });
        }

        log::debug!("Resize {:?} edge of {} at x={}", edge, segment_id, x);
        self.gesture = Gesture::Resizing(ResizeSession {
            track_id,
            segment_id,
            edge,
            last_pointer_x: x,
        });
        self.events.emit(GestureStartedEvent {
            kind: GestureKind::Resize,
            segment_id,
        });
        Ok(())
    }

    /// Document-level pointer move; drives an active resize
    pub fn pointer_move(&mut self, x: f32) -> bool {
        let Gesture::Resizing(session) = &mut self.gesture else {
            return false;
        };
        let dx = session.advance(x);
        let (track_id, segment_id, edge) = (session.track_id, session.segment_id, session.edge);

        let next = engine::resize_with(&self.timeline, track_id, segment_id, edge, dx, self.length_policy);
        self.commit(next)
    }

    /// Document-level pointer release; ends an active resize
    pub fn pointer_up(&mut self) -> bool {
        let session = match std::mem::take(&mut self.gesture) {
            Gesture::Resizing(session) => session,
            other => {
                self.gesture = other;
                return false;
            }
        };
        self.events.emit(GestureEndedEvent {
            kind: GestureKind::Resize,
            segment_id: session.segment_id,
            track_id: self.timeline.track_of(session.segment_id),
        });
        false
    }

    fn commit(&mut self, next: Timeline) -> bool {
        if next == self.timeline {
            return false;
        }
        self.timeline = next;
        self.events.emit(TimelineChangedEvent {
            tracks: self.timeline.len(),
            segments: self.timeline.segment_count(),
        });
        true
    }
}
