//! Core modules - gesture engine and events
//!
//! Everything here is independent of any rendering layer.

pub mod engine;
pub mod event_bus;
pub mod gesture;

// Re-exports for convenience
pub use engine::{DropSummary, HitZone, LengthPolicy, Pointer, RowBounds, RowHover, TRACK_HEIGHT};
pub use event_bus::{EventBus, EventEmitter};
pub use gesture::{DragOrigin, DragSession, DragSource, Edge, Gesture, GestureError, GestureKind, ResizeSession};
