//! Deterministic clip ordering.

use crate::models::ClipInfo;

/// Return the clips ordered by `(track_index, start ticks)`.
///
/// The sort is stable, so clips that tie on both keys keep their input
/// order. The input slice is left untouched.
pub fn sort_clips_by_time(clips: &[ClipInfo]) -> Vec<ClipInfo> {
    sort_refs_by_time(clips).into_iter().cloned().collect()
}

/// Same ordering as [`sort_clips_by_time`] without cloning the clips.
pub(crate) fn sort_refs_by_time(clips: &[ClipInfo]) -> Vec<&ClipInfo> {
    let mut sorted: Vec<&ClipInfo> = clips.iter().collect();
    sorted.sort_by_key(|clip| (clip.track_index, clip.start.ticks()));
    sorted
}
