//! Pointer script replay.
//!
//! A script is a JSON list of raw pointer steps in surface coordinates:
//!
//! ```json
//! [
//!   { "op": "press", "x": 99, "y": 40 },
//!   { "op": "move", "x": 119, "y": 40 },
//!   { "op": "release" },
//!   { "op": "palette", "x": 0 },
//!   { "op": "move", "x": 30, "y": 148 },
//!   { "op": "release" }
//! ]
//! ```
//!
//! Presses go through the layout hit-tester: a handle starts a resize, a body
//! starts a move. Moves and releases are routed to whatever gesture is active,
//! the same way a surface would route its pointer callbacks.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::engine::Pointer;
use crate::core::gesture::{DragSource, Gesture, GestureError};
use crate::widgets::timeline::{hit_test, row_at, Editor, GrabTool, InputEvent};

/// One recorded pointer step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    /// Pointer down on the track surface
    Press { x: f32, y: f32 },
    /// Pointer down on the palette item
    Palette { x: f32 },
    /// Pointer moved (surface coordinates)
    Move { x: f32, y: f32 },
    /// Pointer up
    Release,
}

/// Replay outcome counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub steps: usize,
    /// Steps that changed the timeline
    pub changes: usize,
    /// Presses that hit nothing or moves outside any row
    pub missed: usize,
    /// Gesture starts the editor refused
    pub rejected: usize,
}

pub fn parse_script(json: &str) -> Result<Vec<Step>> {
    serde_json::from_str(json).context("Failed to parse pointer script")
}

pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<Step>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let steps = parse_script(&json).with_context(|| format!("In script {}", path.display()))?;
    log::info!("Loaded {} steps from {}", steps.len(), path.display());
    Ok(steps)
}

/// Translate one step into editor input. `None` means the step had no
/// target (press on empty space, move outside any row).
pub fn step_event(editor: &Editor, step: &Step) -> Option<InputEvent> {
    match *step {
        Step::Press { x, y } => {
            let hit = hit_test(editor.timeline(), editor.layout(), x, y)?;
            Some(match hit.tool {
                GrabTool::Move => InputEvent::DragStart {
                    x,
                    source: DragSource::Track {
                        track_id: hit.track_id,
                        segment_id: hit.segment_id,
                    },
                },
                GrabTool::Resize(edge) => InputEvent::EdgeDown {
                    x,
                    track_id: hit.track_id,
                    segment_id: hit.segment_id,
                    edge,
                },
            })
        }
        Step::Palette { x } => Some(InputEvent::DragStart {
            x,
            source: DragSource::Palette(editor.palette().candidate().clone()),
        }),
        Step::Move { x, y } => match editor.gesture() {
            Gesture::Moving(_) => row_at(editor.timeline(), editor.layout(), y).map(|hover| InputEvent::DragOver {
                pointer: Pointer::new(x, y),
                hover,
            }),
            _ => Some(InputEvent::PointerMove { x }),
        },
        Step::Release => Some(match editor.gesture() {
            Gesture::Moving(_) => InputEvent::Drop,
            _ => InputEvent::PointerUp,
        }),
    }
}

/// Apply one step. `Some(changed)` if the step reached the editor.
pub fn apply_step(editor: &mut Editor, step: &Step) -> Result<Option<bool>, GestureError> {
    match step_event(editor, step) {
        Some(event) => editor.handle(event).map(Some),
        None => Ok(None),
    }
}

/// Run a whole script. Misses and refused gestures are logged and skipped.
pub fn replay(editor: &mut Editor, steps: &[Step]) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (idx, step) in steps.iter().enumerate() {
        report.steps += 1;
        match apply_step(editor, step) {
            Ok(Some(true)) => report.changes += 1,
            Ok(Some(false)) => {}
            Ok(None) => {
                log::warn!("Step {}: {:?} has no target, skipped", idx, step);
                report.missed += 1;
            }
            Err(e) => {
                log::warn!("Step {}: {}", idx, e);
                report.rejected += 1;
            }
        }
    }
    log::info!(
        "Replayed {} steps: {} changes, {} missed, {} rejected",
        report.steps,
        report.changes,
        report.missed,
        report.rejected
    );
    report
}
