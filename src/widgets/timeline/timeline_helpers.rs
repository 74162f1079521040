//! Timeline helpers: layout math, hit-testing and text rendering.
use std::fmt::Write as _;

use crate::core::engine::RowHover;
use crate::core::gesture::Edge;
use crate::entities::{Segment, Timeline};

use super::{GrabTool, Hit, Rect, TimelineConfig};

/// Row under a surface y coordinate
pub fn row_at(timeline: &Timeline, config: &TimelineConfig, y: f32) -> Option<RowHover> {
    if y < config.surface_padding {
        return None;
    }
    let index = ((y - config.surface_padding) / config.row_height()).floor() as usize;
    let track = timeline.tracks.get(index)?;
    let bounds = config.row_bounds(index);
    bounds.contains_y(y).then_some(RowHover {
        track_id: track.id,
        index,
        bounds,
    })
}

/// Top of the lane (row minus padding) for row `index`
pub fn lane_y(config: &TimelineConfig, index: usize) -> f32 {
    config.row_bounds(index).y + config.row_padding
}

/// Where a segment bar is drawn: x = start, width = length
pub fn segment_rect(config: &TimelineConfig, index: usize, segment: &Segment) -> Rect {
    Rect {
        x: segment.start,
        y: lane_y(config, index),
        width: segment.length,
        height: config.track_height,
    }
}

/// Pick grab tool for a pointer over a bar: handles win over the body
fn detect_tool(x: f32, bar: &Rect, handle: f32) -> GrabTool {
    if x - bar.x < handle {
        GrabTool::Resize(Edge::Start)
    } else if bar.x + bar.width - x < handle {
        GrabTool::Resize(Edge::End)
    } else {
        GrabTool::Move
    }
}

/// Segment (and tool) under a pointer press.
///
/// Segments later in a track's list are drawn on top and win on overlap.
pub fn hit_test(timeline: &Timeline, config: &TimelineConfig, x: f32, y: f32) -> Option<Hit> {
    let row = row_at(timeline, config, y)?;
    let top = lane_y(config, row.index);
    if y < top || y > top + config.track_height {
        return None;
    }

    let track = &timeline.tracks[row.index];
    let seg = track.segment_at(x)?;
    let bar = segment_rect(config, row.index, seg);
    Some(Hit {
        track_id: track.id,
        track_index: row.index,
        segment_id: seg.id,
        tool: detect_tool(x, &bar, config.edge_handle_width),
    })
}

/// Widest lane `render_text` draws, in characters
pub const MAX_COLUMNS: usize = 200;

/// Render lanes as text, one line per track, `px_per_cell` pixels per
/// character. Each segment gets a letter; later segments overwrite earlier
/// ones where they overlap. A legend with exact geometry follows.
///
/// Lanes are cut at `MAX_COLUMNS`; a lane with segments past the cut ends
/// in `>` instead of `|`.
pub fn render_text(timeline: &Timeline, px_per_cell: f32) -> String {
    let px = px_per_cell.max(1.0);
    let full_width = timeline
        .tracks
        .iter()
        .flat_map(|t| t.segments.iter())
        .map(|s| (s.end() / px).ceil())
        .fold(0.0_f32, f32::max);
    let width = full_width.min(MAX_COLUMNS as f32) as usize;
    let visible_px = width as f32 * px;

    let mut out = String::new();
    let mut legend = Vec::new();
    for (idx, track) in timeline.tracks.iter().enumerate() {
        let mut cells = vec!['.'; width];
        let mut overflow = false;
        for seg in &track.segments {
            let mark = segment_mark(legend.len());
            legend.push((mark, idx, seg));
            overflow |= seg.end() > visible_px;

            // Cells whose center lies in [start, end)
            let first = (seg.start / px - 0.5).ceil().clamp(0.0, width as f32) as usize;
            let last = (seg.end() / px - 0.5).ceil().clamp(0.0, width as f32) as usize;
            for cell in cells.iter_mut().take(last).skip(first) {
                *cell = mark;
            }
        }
        let lane: String = cells.into_iter().collect();
        let close = if overflow { '>' } else { '|' };
        let _ = writeln!(out, "{:>3} |{}{}", idx, lane, close);
    }

    for (mark, idx, seg) in legend {
        let _ = writeln!(
            out,
            "  {} track {} start {} length {} ({})",
            mark, idx, seg.start, seg.length, seg.id
        );
    }
    out
}

fn segment_mark(n: usize) -> char {
    const MARKS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    MARKS[n % MARKS.len()] as char
}
