//! Per-track gap detection.

use tracing::debug;

use crate::models::{ClipGap, ClipInfo};
use crate::ordering::sort_refs_by_time;
use crate::time::subtract_time;

/// Find every empty interval between consecutive clips on the same track.
///
/// Clips are ordered with [`sort_clips_by_time`](crate::ordering::sort_clips_by_time)
/// first. A gap is reported only when two neighbours share a track and the
/// later one starts strictly after the earlier one ends. Touching or
/// overlapping clips, track changes, and the space before the first or after
/// the last clip never produce gaps.
pub fn analyze_clip_gaps(clips: &[ClipInfo]) -> Vec<ClipGap> {
    if clips.len() < 2 {
        return Vec::new();
    }

    let sorted = sort_refs_by_time(clips);
    let mut gaps = Vec::new();

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if current.track_index != next.track_index {
            continue;
        }
        if next.start.ticks() <= current.end.ticks() {
            continue;
        }

        gaps.push(ClipGap {
            start_time: current.end,
            end_time: next.start,
            duration: subtract_time(next.start, current.end),
            before_clip: current.clone(),
            after_clip: next.clone(),
            gap_index: gaps.len(),
        });
    }

    debug!(clips = clips.len(), gaps = gaps.len(), "Analyzed clip gaps");
    gaps
}
