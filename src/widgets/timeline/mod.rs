//! Timeline widget - stacked tracks with horizontal segment bars
//!
//! Layout and hit-testing for the track surface, plus the `Editor` that turns
//! surface input into engine transitions.

mod editor;
mod timeline;
mod timeline_events;
mod timeline_helpers;

pub use editor::Editor;
pub use timeline::{GrabTool, Hit, Rect, TimelineConfig};
pub use timeline_events::{
    GestureEndedEvent, GestureStartedEvent, InputEvent, PaletteRefilledEvent, TimelineChangedEvent,
};
pub use timeline_helpers::{hit_test, lane_y, render_text, row_at, segment_rect};
