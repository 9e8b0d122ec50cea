//! Sound-insertion planning.
//!
//! One audio file from the pool is overlaid on every clip. Placement is
//! always an overlay at the clip's own start; nothing is rippled into the
//! space after it.

use std::path::Path;

use tracing::{debug, trace};

use super::random::RandomSource;
use crate::models::{ClipInfo, ClipInsertion, InsertionPlan, InsertionType, TrackType};
use crate::ordering::sort_refs_by_time;

/// Audio track used when the caller does not pick one.
pub const DEFAULT_AUDIO_TRACK: u32 = 1;

/// Track that receives sound for video clips, whatever the caller asked for.
pub const VIDEO_CLIP_AUDIO_TRACK: u32 = 2;

/// Plan one audio overlay per clip.
///
/// Returns an empty plan when either `clips` or `audio_files` is empty.
/// Otherwise clips are sorted by track and start, and each one gets a file
/// drawn uniformly with replacement from `audio_files` via `rng`. Repeats,
/// including back-to-back, are expected.
///
/// Video clips always target [`VIDEO_CLIP_AUDIO_TRACK`]; audio clips use
/// `target_audio_track`.
pub fn create_insertion_plan<P, R>(
    clips: &[ClipInfo],
    audio_files: &[P],
    target_audio_track: u32,
    rng: &mut R,
) -> InsertionPlan
where
    P: AsRef<Path>,
    R: RandomSource + ?Sized,
{
    if clips.is_empty() || audio_files.is_empty() {
        debug!(
            clips = clips.len(),
            audio_files = audio_files.len(),
            "Nothing to insert"
        );
        return InsertionPlan::empty(target_audio_track);
    }

    let insertions: Vec<ClipInsertion> = sort_refs_by_time(clips)
        .into_iter()
        .map(|clip| {
            let pick = rng.next_index(audio_files.len());
            let audio_file = audio_files[pick].as_ref().to_path_buf();
            let target_track = match clip.track_type {
                TrackType::Video => VIDEO_CLIP_AUDIO_TRACK,
                TrackType::Audio => target_audio_track,
            };

            trace!(
                clip = %clip.display_name(),
                file = %audio_file.display(),
                track = target_track,
                at = %clip.start,
                "Planned insertion"
            );

            ClipInsertion {
                clip_id: clip.id.clone(),
                position: clip.start,
                audio_file,
                target_track,
                insertion_type: InsertionType::Overlay,
                clip_duration: clip.duration,
            }
        })
        .collect();

    let plan = InsertionPlan::new(insertions, target_audio_track);
    debug!(
        insertions = plan.total_insertions,
        audio_track = target_audio_track,
        estimate_ms = plan.estimated_duration.as_millis() as u64,
        "Built insertion plan"
    );
    plan
}
