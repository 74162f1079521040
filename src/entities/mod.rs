//! Entities - timeline data model
//!
//! Plain values: segments live in tracks, tracks live in a timeline. The
//! palette hands out new segments to drag onto the timeline.

pub mod palette;
pub mod segment;
pub mod timeline;
pub mod track;

pub use palette::{Palette, PaletteConfig};
pub use segment::{Segment, SegmentId};
pub use timeline::{Timeline, TimelineError};
pub use track::{Track, TrackId};
