//! Trackline - multi-track segment editor library
//!
//! Re-exports all modules for use by binary targets.

// Core engine (transitions, gestures, events)
pub mod core;

// App modules
pub mod cli;
pub mod config;
pub mod entities;
pub mod replay;
pub mod widgets;

// Re-export commonly used types from core
pub use core::engine::{begin_move, begin_palette_move, end_move, resize, resize_with, update_move, LengthPolicy, Pointer, RowHover};
pub use core::event_bus::{downcast_event, BoxedEvent, EventBus, EventEmitter};
pub use core::gesture::{DragSource, Edge, GestureError};

// Re-export entities
pub use entities::{Palette, Segment, SegmentId, Timeline, Track, TrackId};
pub use widgets::timeline::Editor;
