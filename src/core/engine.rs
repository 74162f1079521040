//! Timeline state engine: pure gesture transitions.
//!
//! Every transition takes the current `Timeline` by reference and returns the
//! next one; the caller owns the value between calls. Nothing here keeps
//! state across pointer events - drag bookkeeping lives in the
//! [`DragSession`] the caller threads through.
//!
//! # Move gesture
//!
//! ```text
//! begin_move -> update_move* -> end_move
//! ```
//!
//! On every pointer move the hovered row is split in three bands around its
//! vertical center. The middle band (the dead zone, `track_height` tall) means
//! "reposition on this track"; the bands above and below mean "insert as a
//! new track here".
//!
//! # Resize gesture
//!
//! `resize` is applied on raw pointer deltas while an edge handle is held.

use serde::{Deserialize, Serialize};

use super::gesture::{DragOrigin, DragSession, DragSource, Edge};
use crate::entities::{Segment, SegmentId, Timeline, Track, TrackId};

/// Row height used for rendering and for the dead zone
pub const TRACK_HEIGHT: f32 = 50.0;

/// Pointer position in surface coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Vertical extent of a row on screen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowBounds {
    pub y: f32,
    pub height: f32,
}

impl RowBounds {
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.y && y < self.y + self.height
    }
}

/// Row currently under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowHover {
    pub track_id: TrackId,
    pub index: usize,
    pub bounds: RowBounds,
}

/// Vertical band of the hovered row the pointer is in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitZone {
    /// Above the dead zone: insert new track before the hovered one
    OverTop,
    /// Same-track reposition
    DeadZone,
    /// Below the dead zone: insert new track after the hovered one
    OverBottom,
}

/// Classify pointer y against a row's dead zone
pub fn classify(pointer_y: f32, bounds: &RowBounds, track_height: f32) -> HitZone {
    let center = bounds.center_y();
    let half = track_height / 2.0;
    if pointer_y <= center - half {
        HitZone::OverTop
    } else if pointer_y >= center + half {
        HitZone::OverBottom
    } else {
        HitZone::DeadZone
    }
}

/// What resize does when a segment would get a negative length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Length floors at zero; dragging the left edge stops at the right edge
    #[default]
    Clamp,
    /// Raw arithmetic, length may go negative
    Unclamped,
}

/// Result of finishing a move gesture
#[derive(Clone, Debug, PartialEq)]
pub struct DropSummary {
    pub segment_id: SegmentId,
    pub origin: DragOrigin,
    /// Track now holding the segment (None if it never landed)
    pub track_id: Option<TrackId>,
}

impl DropSummary {
    /// Palette candidate ended up on a track
    pub fn placed_from_palette(&self) -> bool {
        self.origin == DragOrigin::Palette && self.track_id.is_some()
    }
}

/// Start a move gesture. Returns None if the source segment does not exist.
///
/// The timeline is not modified. A fresh insertion-track id is reserved for
/// the track that appears if the drag crosses a row boundary.
pub fn begin_move(timeline: &Timeline, source: DragSource, pointer_x: f32) -> Option<DragSession> {
    let (segment, origin) = match source {
        DragSource::Track { track_id, segment_id } => {
            let segment = timeline.track(track_id)?.find_segment(segment_id)?.clone();
            (segment, DragOrigin::Track(track_id))
        }
        DragSource::Palette(candidate) => return Some(begin_palette_move(candidate, pointer_x)),
    };
    Some(start_session(segment, origin, pointer_x))
}

/// Start a move gesture for a palette candidate. Cannot fail: the segment is
/// not expected in the timeline yet.
pub fn begin_palette_move(candidate: Segment, pointer_x: f32) -> DragSession {
    start_session(candidate, DragOrigin::Palette, pointer_x)
}

fn start_session(segment: Segment, origin: DragOrigin, pointer_x: f32) -> DragSession {
    log::debug!("[ENGINE] begin_move {} from {:?} at x={}", segment.id, origin, pointer_x);
    DragSession {
        segment,
        origin,
        last_pointer_x: pointer_x,
        insertion_track_id: TrackId::new(),
    }
}

/// Apply one pointer move of an active move gesture.
///
/// Horizontal: the segment shifts by the pointer delta since the last call.
/// Vertical: see [`classify`]. In the insertion case the new track is placed
/// at `hover.index` (over top) or `hover.index + 1` (over bottom), counted in
/// the track order of `timeline` as passed in; an out-of-range slot appends.
/// Tracks left without segments are dropped in both cases.
///
/// A hover over a track that does not exist is a no-op, as is a move of a
/// track-origin segment that is no longer on the timeline.
pub fn update_move(
    timeline: &Timeline,
    session: &DragSession,
    pointer: Pointer,
    hover: &RowHover,
    track_height: f32,
) -> (Timeline, DragSession) {
    if timeline.track(hover.track_id).is_none() {
        log::debug!("[ENGINE] hovered track {} gone, ignoring move", hover.track_id);
        return (timeline.clone(), session.clone());
    }
    // A track-origin segment must still be on the timeline; palette ones are not yet
    if matches!(session.origin, DragOrigin::Track(_)) && timeline.track_of(session.segment.id).is_none() {
        log::debug!("[ENGINE] dragged segment {} gone, ignoring move", session.segment.id);
        return (timeline.clone(), session.clone());
    }

    let dx = pointer.x - session.last_pointer_x;
    let moved = session.segment.shifted(dx);
    let seg_id = moved.id;
    let insertion_id = session.insertion_track_id;

    let tracks: Vec<Track> = match classify(pointer.y, &hover.bounds, track_height) {
        zone @ (HitZone::OverTop | HitZone::OverBottom) => {
            let slot = if zone == HitZone::OverTop {
                hover.index
            } else {
                hover.index + 1
            };
            let insertion = Track {
                id: insertion_id,
                segments: vec![moved.clone()],
            };

            let mut out = Vec::with_capacity(timeline.len() + 1);
            let mut pending = Some(insertion);
            for (idx, track) in timeline.tracks.iter().enumerate() {
                if idx == slot {
                    out.extend(pending.take());
                }
                if track.id == insertion_id {
                    continue;
                }
                let rest = track.without(seg_id);
                if !rest.is_empty() {
                    out.push(rest);
                }
            }
            out.extend(pending);

            log::debug!("[ENGINE] {} -> insertion track {} at slot {}", seg_id, insertion_id, slot);
            out
        }
        HitZone::DeadZone => timeline
            .tracks
            .iter()
            .filter_map(|track| {
                let mut rest = track.without(seg_id);
                if track.id == hover.track_id {
                    rest.push(moved.clone());
                    Some(rest)
                } else if track.id == insertion_id || rest.is_empty() {
                    None
                } else {
                    Some(rest)
                }
            })
            .collect(),
    };

    let next_session = DragSession {
        segment: moved,
        last_pointer_x: pointer.x,
        ..session.clone()
    };
    (Timeline::new(tracks), next_session)
}

/// Finish a move gesture. The last `update_move` result is final; only empty
/// tracks are pruned. The session is consumed.
pub fn end_move(timeline: &Timeline, session: DragSession) -> (Timeline, DropSummary) {
    let mut next = timeline.clone();
    let pruned = next.prune_empty();

    let summary = DropSummary {
        segment_id: session.segment.id,
        origin: session.origin,
        track_id: next.track_of(session.segment.id),
    };
    log::debug!(
        "[ENGINE] end_move {} -> {:?} (pruned {} empty tracks)",
        summary.segment_id,
        summary.track_id,
        pruned
    );
    (next, summary)
}

/// Resize a segment edge by `delta_x`, clamping length at zero.
pub fn resize(timeline: &Timeline, track_id: TrackId, segment_id: SegmentId, edge: Edge, delta_x: f32) -> Timeline {
    resize_with(timeline, track_id, segment_id, edge, delta_x, LengthPolicy::Clamp)
}

/// Resize a segment edge with an explicit length policy.
///
/// - `Edge::Start`: `start += dx`, `length -= dx`
/// - `Edge::End`: `length += dx`
///
/// Only the segment with `segment_id` on track `track_id` changes; unknown ids
/// leave the timeline as is.
pub fn resize_with(
    timeline: &Timeline,
    track_id: TrackId,
    segment_id: SegmentId,
    edge: Edge,
    delta_x: f32,
    policy: LengthPolicy,
) -> Timeline {
    let mut next = timeline.clone();
    let Some(seg) = next
        .track_mut(track_id)
        .and_then(|t| t.find_segment_mut(segment_id))
    else {
        log::debug!("[ENGINE] resize: {} not on track {}, ignoring", segment_id, track_id);
        return next;
    };

    match (edge, policy) {
        (Edge::Start, LengthPolicy::Clamp) => {
            let dx = delta_x.min(seg.length.max(0.0));
            seg.start += dx;
            seg.length -= dx;
        }
        (Edge::Start, LengthPolicy::Unclamped) => {
            seg.start += delta_x;
            seg.length -= delta_x;
        }
        (Edge::End, LengthPolicy::Clamp) => {
            seg.length = (seg.length + delta_x).max(0.0);
        }
        (Edge::End, LengthPolicy::Unclamped) => {
            seg.length += delta_x;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows 70px tall starting at y=10, like the default layout
    fn hover(timeline: &Timeline, index: usize) -> RowHover {
        RowHover {
            track_id: timeline.tracks[index].id,
            index,
            bounds: RowBounds {
                y: 10.0 + index as f32 * 70.0,
                height: 70.0,
            },
        }
    }

    fn center_y(index: usize) -> f32 {
        10.0 + index as f32 * 70.0 + 35.0
    }

    fn two_tracks() -> (Timeline, Segment, Segment) {
        let s1 = Segment::new(0.0, 100.0);
        let s2 = Segment::new(200.0, 100.0);
        let tl = Timeline::new(vec![
            Track::with_segments(vec![s1.clone()]),
            Track::with_segments(vec![s2.clone()]),
        ]);
        (tl, s1, s2)
    }

    fn begin(tl: &Timeline, track: usize, seg: &Segment, x: f32) -> DragSession {
        begin_move(
            tl,
            DragSource::Track {
                track_id: tl.tracks[track].id,
                segment_id: seg.id,
            },
            x,
        )
        .expect("segment exists")
    }

    #[test]
    fn test_classify_bands() {
        let bounds = RowBounds { y: 10.0, height: 70.0 };
        // center 45, dead zone (20, 70)
        assert_eq!(classify(15.0, &bounds, TRACK_HEIGHT), HitZone::OverTop);
        assert_eq!(classify(20.0, &bounds, TRACK_HEIGHT), HitZone::OverTop);
        assert_eq!(classify(21.0, &bounds, TRACK_HEIGHT), HitZone::DeadZone);
        assert_eq!(classify(69.0, &bounds, TRACK_HEIGHT), HitZone::DeadZone);
        assert_eq!(classify(70.0, &bounds, TRACK_HEIGHT), HitZone::OverBottom);
    }

    #[test]
    fn test_begin_move_does_not_touch_timeline() {
        let (tl, s1, _) = two_tracks();
        let session = begin(&tl, 0, &s1, 42.0);
        assert_eq!(session.segment, s1);
        assert_eq!(session.origin, DragOrigin::Track(tl.tracks[0].id));
        assert_eq!(session.last_pointer_x, 42.0);
        assert!(tl.track(session.insertion_track_id).is_none());
    }

    #[test]
    fn test_begin_move_unknown_segment() {
        let (tl, _, _) = two_tracks();
        let src = DragSource::Track {
            track_id: tl.tracks[0].id,
            segment_id: SegmentId::new(),
        };
        assert!(begin_move(&tl, src, 0.0).is_none());
    }

    #[test]
    fn test_each_session_gets_fresh_insertion_id() {
        let (tl, s1, _) = two_tracks();
        let a = begin(&tl, 0, &s1, 0.0);
        let b = begin(&tl, 0, &s1, 0.0);
        assert_ne!(a.insertion_track_id, b.insertion_track_id);
    }

    #[test]
    fn test_dead_zone_move_into_other_track() {
        // A(s1), B(s2): s1 into B's dead zone -> A pruned, B = [s2, s1]
        let (tl, s1, s2) = two_tracks();
        let b_id = tl.tracks[1].id;
        let session = begin(&tl, 0, &s1, 50.0);

        let (next, session) = update_move(&tl, &session, Pointer::new(80.0, center_y(1)), &hover(&tl, 1), TRACK_HEIGHT);

        assert_eq!(next.len(), 1);
        assert_eq!(next.tracks[0].id, b_id);
        let ids: Vec<_> = next.tracks[0].segments.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![s2.id, s1.id]);
        assert_eq!(next.tracks[0].segments[1].start, 30.0);
        assert_eq!(session.segment.start, 30.0);
        assert_eq!(session.last_pointer_x, 80.0);
    }

    #[test]
    fn test_dead_zone_same_track_keeps_track_count() {
        let tl = Timeline::demo();
        let seg = tl.tracks[1].segments[0].clone();
        let mut session = begin(&tl, 1, &seg, 0.0);
        let mut cur = tl.clone();

        for x in [5.0, 12.0, -3.0, 40.0] {
            let h = hover(&cur, 1);
            let (next, s) = update_move(&cur, &session, Pointer::new(x, center_y(1)), &h, TRACK_HEIGHT);
            assert_eq!(next.len(), tl.len());
            cur = next;
            session = s;
        }

        // Appended to the end of its own list
        let track = &cur.tracks[1];
        assert_eq!(track.segments.last().map(|s| s.id), Some(seg.id));
        assert_eq!(track.find_segment(seg.id).map(|s| s.start), Some(6.0 + 40.0));
        assert_eq!(cur.segment_count(), tl.segment_count());
    }

    #[test]
    fn test_over_bottom_inserts_after_hovered() {
        let tl = Timeline::demo();
        let seg = tl.tracks[1].segments[1].clone();
        let session = begin(&tl, 1, &seg, 100.0);
        let y = 10.0 + 70.0 + 65.0; // inside row 1, below dead zone

        let (next, session) = update_move(&tl, &session, Pointer::new(110.0, y), &hover(&tl, 1), TRACK_HEIGHT);

        assert_eq!(next.len(), 3);
        let new_track = &next.tracks[2];
        assert_eq!(new_track.id, session.insertion_track_id);
        assert_eq!(new_track.len(), 1);
        assert_eq!(new_track.segments[0].id, seg.id);
        assert_eq!(new_track.segments[0].start, 130.0);
        // Origin track lost it but keeps the others
        assert_eq!(next.tracks[1].len(), 2);
        assert!(!next.tracks[1].contains(seg.id));
    }

    #[test]
    fn test_over_top_inserts_before_hovered() {
        let tl = Timeline::demo();
        let seg = tl.tracks[1].segments[0].clone();
        let session = begin(&tl, 1, &seg, 0.0);
        let y = 10.0 + 70.0 + 2.0; // top band of row 1

        let (next, session) = update_move(&tl, &session, Pointer::new(0.0, y), &hover(&tl, 1), TRACK_HEIGHT);

        assert_eq!(next.len(), 3);
        assert_eq!(next.tracks[0].id, tl.tracks[0].id);
        assert_eq!(next.tracks[1].id, session.insertion_track_id);
        assert_eq!(next.tracks[2].id, tl.tracks[1].id);
    }

    #[test]
    fn test_insertion_from_single_segment_track_prunes_origin() {
        let (tl, s1, _) = two_tracks();
        let session = begin(&tl, 0, &s1, 0.0);
        let y = 10.0 + 70.0 + 68.0; // bottom band of row 1

        let (next, session) = update_move(&tl, &session, Pointer::new(0.0, y), &hover(&tl, 1), TRACK_HEIGHT);

        // A emptied and pruned, new track after B
        assert_eq!(next.len(), 2);
        assert_eq!(next.tracks[0].id, tl.tracks[1].id);
        assert_eq!(next.tracks[1].id, session.insertion_track_id);
        assert_eq!(next.tracks[1].segments, vec![s1.clone()]);
    }

    #[test]
    fn test_insertion_track_is_reused_not_duplicated() {
        let tl = Timeline::demo();
        let seg = tl.tracks[1].segments[2].clone();
        let session = begin(&tl, 1, &seg, 0.0);

        // Bottom band of row 0: insertion between row 0 and row 1
        let (tl1, session) = update_move(&tl, &session, Pointer::new(1.0, 10.0 + 68.0), &hover(&tl, 0), TRACK_HEIGHT);
        assert_eq!(tl1.len(), 3);
        assert_eq!(tl1.tracks[1].id, session.insertion_track_id);

        // Bottom band of the last row: insertion track moves to the end
        let (tl2, session) = update_move(&tl1, &session, Pointer::new(2.0, 10.0 + 140.0 + 68.0), &hover(&tl1, 2), TRACK_HEIGHT);
        assert_eq!(tl2.len(), 3);
        assert_eq!(tl2.tracks[2].id, session.insertion_track_id);
        let holding: Vec<_> = tl2.tracks.iter().filter(|t| t.contains(seg.id)).collect();
        assert_eq!(holding.len(), 1);
        assert_eq!(tl2.tracks[2].segments[0].start, seg.start + 2.0);
    }

    #[test]
    fn test_dead_zone_leaving_insertion_track_prunes_it() {
        let tl = Timeline::demo();
        let seg = tl.tracks[1].segments[0].clone();
        let session = begin(&tl, 1, &seg, 0.0);

        let (tl1, session) = update_move(&tl, &session, Pointer::new(0.0, 10.0 + 2.0), &hover(&tl, 0), TRACK_HEIGHT);
        assert_eq!(tl1.len(), 3);
        assert_eq!(tl1.tracks[0].id, session.insertion_track_id);

        // Back into row 2's (old track 1) dead zone
        let (tl2, _) = update_move(&tl1, &session, Pointer::new(0.0, center_y(2)), &hover(&tl1, 2), TRACK_HEIGHT);
        assert_eq!(tl2.len(), 2);
        assert!(tl2.track(session.insertion_track_id).is_none());
        assert_eq!(tl2.tracks[1].segments.last().map(|s| s.id), Some(seg.id));
    }

    #[test]
    fn test_dead_zone_on_insertion_track_keeps_it() {
        let (tl, _, s2) = two_tracks();
        let session = begin(&tl, 1, &s2, 0.0);

        let (tl1, session) = update_move(&tl, &session, Pointer::new(0.0, 10.0 + 1.0), &hover(&tl, 0), TRACK_HEIGHT);
        assert_eq!(tl1.tracks[0].id, session.insertion_track_id);

        let (tl2, _) = update_move(&tl1, &session, Pointer::new(5.0, center_y(0)), &hover(&tl1, 0), TRACK_HEIGHT);
        assert_eq!(tl2.tracks[0].id, session.insertion_track_id);
        assert_eq!(tl2.tracks[0].segments[0].start, 205.0);
    }

    #[test]
    fn test_out_of_range_slot_appends() {
        let (tl, s1, _) = two_tracks();
        let session = begin(&tl, 0, &s1, 0.0);
        let mut h = hover(&tl, 1);
        h.index = 9;

        let (next, session) = update_move(&tl, &session, Pointer::new(0.0, 10.0 + 70.0 + 69.0), &h, TRACK_HEIGHT);
        assert_eq!(next.tracks.last().map(|t| t.id), Some(session.insertion_track_id));
    }

    #[test]
    fn test_unknown_hover_track_is_noop() {
        let (tl, s1, _) = two_tracks();
        let session = begin(&tl, 0, &s1, 0.0);
        let mut h = hover(&tl, 1);
        h.track_id = TrackId::new();

        let (next, same) = update_move(&tl, &session, Pointer::new(30.0, center_y(1)), &h, TRACK_HEIGHT);
        assert_eq!(next, tl);
        assert_eq!(same, session);
    }

    #[test]
    fn test_unknown_hover_track_over_top_is_noop() {
        let (tl, s1, _) = two_tracks();
        let session = begin(&tl, 0, &s1, 0.0);
        let mut h = hover(&tl, 1);
        h.track_id = TrackId::new();

        // y=82 is in the band above row 1's dead zone
        let (next, same) = update_move(&tl, &session, Pointer::new(30.0, 82.0), &h, TRACK_HEIGHT);
        assert_eq!(classify(82.0, &h.bounds, TRACK_HEIGHT), HitZone::OverTop);
        assert_eq!(next, tl);
        assert_eq!(same, session);
    }

    #[test]
    fn test_removed_segment_is_not_resurrected() {
        let (tl, s1, s2) = two_tracks();
        let session = begin(&tl, 0, &s1, 0.0);
        // Host dropped track A (and s1) between events
        let only_b = Timeline::new(vec![tl.tracks[1].clone()]);

        let (next, same) = update_move(&only_b, &session, Pointer::new(30.0, center_y(0)), &hover(&only_b, 0), TRACK_HEIGHT);
        assert_eq!(next, only_b);
        assert_eq!(next.segment_count(), 1);
        assert!(next.find_segment(s2.id).is_some());
        assert_eq!(same, session);

        let (next, _) = update_move(&only_b, &session, Pointer::new(30.0, 12.0), &hover(&only_b, 0), TRACK_HEIGHT);
        assert_eq!(next, only_b);
    }

    #[test]
    fn test_palette_drag_places_candidate() {
        let (tl, _, _) = two_tracks();
        let candidate = Segment::new(0.0, 120.0);
        let session = begin_move(&tl, DragSource::Palette(candidate.clone()), 10.0).expect("palette");
        assert!(session.from_palette());

        let (next, session) = update_move(&tl, &session, Pointer::new(60.0, center_y(0)), &hover(&tl, 0), TRACK_HEIGHT);
        assert_eq!(next.len(), 2);
        assert_eq!(next.tracks[0].segments.last().map(|s| (s.id, s.start)), Some((candidate.id, 50.0)));

        let (done, summary) = end_move(&next, session);
        assert_eq!(done, next);
        assert!(summary.placed_from_palette());
        assert_eq!(summary.track_id, Some(tl.tracks[0].id));
    }

    #[test]
    fn test_end_move_without_update() {
        let (tl, _, _) = two_tracks();
        let session = begin_move(&tl, DragSource::Palette(Segment::new(0.0, 80.0)), 0.0).expect("palette");

        let (done, summary) = end_move(&tl, session);
        assert_eq!(done, tl);
        assert!(!summary.placed_from_palette());
        assert_eq!(summary.track_id, None);
    }

    #[test]
    fn test_resize_scenario() {
        let seg = Segment::new(0.0, 100.0);
        let tl = Timeline::new(vec![Track::with_segments(vec![seg.clone()])]);
        let t1 = tl.tracks[0].id;

        let tl = resize(&tl, t1, seg.id, Edge::End, 20.0);
        assert_eq!(tl.tracks[0].segments[0].start, 0.0);
        assert_eq!(tl.tracks[0].segments[0].length, 120.0);

        let tl = resize(&tl, t1, seg.id, Edge::Start, 10.0);
        assert_eq!(tl.tracks[0].segments[0].start, 10.0);
        assert_eq!(tl.tracks[0].segments[0].length, 110.0);
    }

    #[test]
    fn test_resize_sums() {
        let deltas = [12.0, -30.0, 7.0, 4.0, -1.0, 25.0];
        let sum: f32 = deltas.iter().sum();

        for edge in [Edge::Start, Edge::End] {
            let seg = Segment::new(40.0, 200.0);
            let mut tl = Timeline::new(vec![Track::with_segments(vec![seg.clone()])]);
            let tid = tl.tracks[0].id;
            for dx in deltas {
                tl = resize(&tl, tid, seg.id, edge, dx);
            }
            let out = &tl.tracks[0].segments[0];
            match edge {
                Edge::End => {
                    assert_eq!(out.start, 40.0);
                    assert_eq!(out.length, 200.0 + sum);
                }
                Edge::Start => {
                    assert_eq!(out.start, 40.0 + sum);
                    assert_eq!(out.length, 200.0 - sum);
                }
            }
        }
    }

    #[test]
    fn test_resize_clamps_length() {
        let seg = Segment::new(10.0, 30.0);
        let tl = Timeline::new(vec![Track::with_segments(vec![seg.clone()])]);
        let tid = tl.tracks[0].id;

        let end = resize(&tl, tid, seg.id, Edge::End, -50.0);
        assert_eq!(end.tracks[0].segments[0].length, 0.0);
        assert_eq!(end.tracks[0].segments[0].start, 10.0);

        // Left edge stops at the right edge
        let start = resize(&tl, tid, seg.id, Edge::Start, 80.0);
        assert_eq!(start.tracks[0].segments[0].start, 40.0);
        assert_eq!(start.tracks[0].segments[0].length, 0.0);

        let raw = resize_with(&tl, tid, seg.id, Edge::Start, 80.0, LengthPolicy::Unclamped);
        assert_eq!(raw.tracks[0].segments[0].start, 90.0);
        assert_eq!(raw.tracks[0].segments[0].length, -50.0);
    }

    #[test]
    fn test_resize_only_touches_addressed_segment() {
        let tl = Timeline::demo();
        let target = tl.tracks[1].segments[1].clone();
        let next = resize(&tl, tl.tracks[1].id, target.id, Edge::End, 15.0);

        assert_eq!(next.tracks[0], tl.tracks[0]);
        assert_eq!(next.tracks[1].segments[0], tl.tracks[1].segments[0]);
        assert_eq!(next.tracks[1].segments[2], tl.tracks[1].segments[2]);
        assert_eq!(next.tracks[1].segments[1].length, 115.0);
    }

    #[test]
    fn test_resize_wrong_track_is_noop() {
        let tl = Timeline::demo();
        let seg = tl.tracks[1].segments[0].clone();
        // Right segment, wrong track
        assert_eq!(resize(&tl, tl.tracks[0].id, seg.id, Edge::End, 10.0), tl);
        assert_eq!(resize(&tl, TrackId::new(), seg.id, Edge::Start, 10.0), tl);
    }
}
