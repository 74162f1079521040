//! Widgets - input surfaces over the timeline model
//!
//! Widgets talk to the rest of the app through the EventBus.

pub mod timeline;
