//! Entry points that turn host clip records into ready-to-send commands.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use super::command::{HostAction, HostCommand};
use super::context::EngineContext;
use super::errors::OrchestrationResult;
use crate::models::{validate_clip_records, ClipInfo, ClipRecord, InsertionPlan, MagnetPlan};
use crate::planner::{create_insertion_plan, create_magnet_plan};

/// Why a request produced nothing to execute.
///
/// None of these are errors; the caller decides whether to surface them as
/// a failure or treat them as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No clips left after validation and filtering.
    NoClips,
    /// The audio pool is empty.
    NoAudioFiles,
    /// Too few clips to compact.
    NotEnoughClips { required: usize, found: usize },
    /// Every track is already gap-free.
    AlreadyAligned,
}

impl SkipReason {
    /// Message suitable for showing to the user.
    pub fn message(&self) -> String {
        match self {
            SkipReason::NoClips => "no clips to work with".to_string(),
            SkipReason::NoAudioFiles => "no audio files available".to_string(),
            SkipReason::NotEnoughClips { required, .. } => {
                format!("select at least {} clips", required)
            }
            SkipReason::AlreadyAligned => "clips are already aligned".to_string(),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// A plan together with the command that executes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPlan<P> {
    pub plan: P,
    pub command: HostCommand,
}

/// Result of a prepare call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome<P> {
    Ready(PreparedPlan<P>),
    Nothing(SkipReason),
}

impl<P> PlanOutcome<P> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PlanOutcome::Ready(_))
    }

    /// The prepared plan, if any.
    pub fn ready(self) -> Option<PreparedPlan<P>> {
        match self {
            PlanOutcome::Ready(prepared) => Some(prepared),
            PlanOutcome::Nothing(_) => None,
        }
    }

    /// The skip reason, if nothing was prepared.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            PlanOutcome::Ready(_) => None,
            PlanOutcome::Nothing(reason) => Some(*reason),
        }
    }
}

/// Validate records and keep only selected clips when asked to.
fn collect_clips(records: &[ClipRecord], selected_only: bool) -> OrchestrationResult<Vec<ClipInfo>> {
    let mut clips = validate_clip_records(records).map_err(|err| {
        warn!(index = err.index, error = %err.source, "Rejected clip record");
        err
    })?;

    if selected_only {
        clips.retain(|clip| clip.selected);
    }
    Ok(clips)
}

/// Plan a sound insertion for the given clips and audio pool.
///
/// `target_track` falls back to `settings.insertion.default_audio_track`.
pub fn prepare_sound_insertion<P: AsRef<Path>>(
    ctx: &mut EngineContext,
    records: &[ClipRecord],
    audio_files: &[P],
    target_track: Option<u32>,
) -> OrchestrationResult<PlanOutcome<InsertionPlan>> {
    let settings = ctx.settings().insertion.clone();
    let clips = collect_clips(records, settings.selected_only)?;

    if clips.is_empty() {
        debug!(records = records.len(), "No clips for sound insertion");
        return Ok(PlanOutcome::Nothing(SkipReason::NoClips));
    }
    if audio_files.is_empty() {
        debug!("Audio pool is empty");
        return Ok(PlanOutcome::Nothing(SkipReason::NoAudioFiles));
    }

    let track = target_track.unwrap_or(settings.default_audio_track);
    let plan = create_insertion_plan(&clips, audio_files, track, ctx.rng_mut());
    let command = HostCommand::new(HostAction::InsertSounds, &plan)?;

    info!(
        insertions = plan.total_insertions,
        audio_track = track,
        request_id = %command.request_id,
        "Prepared sound insertion"
    );
    Ok(PlanOutcome::Ready(PreparedPlan { plan, command }))
}

/// Plan gap removal for the given clips.
pub fn prepare_magnet(
    ctx: &EngineContext,
    records: &[ClipRecord],
) -> OrchestrationResult<PlanOutcome<MagnetPlan>> {
    let settings = &ctx.settings().magnet;
    let clips = collect_clips(records, settings.selected_only)?;

    if clips.len() < settings.min_clips {
        debug!(
            found = clips.len(),
            required = settings.min_clips,
            "Not enough clips to compact"
        );
        return Ok(PlanOutcome::Nothing(SkipReason::NotEnoughClips {
            required: settings.min_clips,
            found: clips.len(),
        }));
    }

    let plan = create_magnet_plan(&clips);
    if plan.is_empty() {
        debug!(clips = clips.len(), "Clips already aligned");
        return Ok(PlanOutcome::Nothing(SkipReason::AlreadyAligned));
    }

    let command = HostCommand::new(HostAction::MagnetClips, &plan)?;
    info!(
        moved = plan.total_moved,
        request_id = %command.request_id,
        "Prepared magnet plan"
    );
    Ok(PlanOutcome::Ready(PreparedPlan { plan, command }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::logging::init_test_tracing;
    use crate::models::{ClipValidationError, TimeRecord};
    use crate::orchestrator::OrchestrationError;
    use crate::planner::SequenceSource;

    fn record(id: &str, track: i64, kind: &str, start: f64, end: f64) -> ClipRecord {
        ClipRecord {
            id: Some(id.to_string()),
            name: Some(format!("clip {id}")),
            start: Some(TimeRecord::from_seconds(start)),
            end: Some(TimeRecord::from_seconds(end)),
            duration: None,
            track_index: Some(track),
            track_type: Some(kind.to_string()),
            selected: Some(false),
        }
    }

    fn scripted_context(settings: Settings) -> EngineContext {
        EngineContext::new(settings).with_random_source(SequenceSource::new(vec![0, 1]))
    }

    #[test]
    fn insertion_ready_with_command() {
        init_test_tracing();
        let mut ctx = scripted_context(Settings::default());
        let records = [
            record("a", 1, "audio", 0.0, 2.0),
            record("b", 1, "audio", 3.0, 4.0),
        ];

        let prepared = prepare_sound_insertion(&mut ctx, &records, &["a.wav", "b.wav"], Some(3))
            .unwrap()
            .ready()
            .unwrap();

        assert_eq!(prepared.plan.total_insertions, 2);
        assert!(prepared.plan.insertions.iter().all(|i| i.target_track == 3));
        assert_eq!(prepared.command.action, HostAction::InsertSounds);
        assert_eq!(prepared.command.data["totalInsertions"], 2);
        assert_eq!(prepared.command.data["insertions"][1]["audioFile"], "b.wav");
        assert_eq!(prepared.command.data["estimatedDurationMs"], 4000);
    }

    #[test]
    fn insertion_uses_configured_default_track() {
        let mut settings = Settings::default();
        settings.insertion.default_audio_track = 5;
        let mut ctx = scripted_context(settings);
        let records = [record("a", 1, "audio", 0.0, 2.0), record("v", 0, "video", 0.0, 2.0)];

        let plan = prepare_sound_insertion(&mut ctx, &records, &["a.wav"], None)
            .unwrap()
            .ready()
            .unwrap()
            .plan;
        assert_eq!(plan.audio_track, 5);
        // sorted: v (track 0) first, then a (track 1)
        assert_eq!(plan.insertions[0].target_track, 2);
        assert_eq!(plan.insertions[1].target_track, 5);
    }

    #[test]
    fn insertion_skips_without_input() {
        let mut ctx = scripted_context(Settings::default());
        let records = [record("a", 1, "audio", 0.0, 2.0)];

        let no_clips = prepare_sound_insertion(&mut ctx, &[], &["a.wav"], None).unwrap();
        assert_eq!(no_clips.skip_reason(), Some(SkipReason::NoClips));

        let empty: [&str; 0] = [];
        let no_files = prepare_sound_insertion(&mut ctx, &records, &empty, None).unwrap();
        assert_eq!(no_files.skip_reason(), Some(SkipReason::NoAudioFiles));
    }

    #[test]
    fn selected_only_filters_clips() {
        let mut settings = Settings::default();
        settings.insertion.selected_only = true;
        let mut ctx = scripted_context(settings);

        let mut chosen = record("chosen", 1, "audio", 0.0, 1.0);
        chosen.selected = Some(true);
        let records = [chosen, record("other", 1, "audio", 2.0, 3.0)];

        let plan = prepare_sound_insertion(&mut ctx, &records, &["a.wav"], None)
            .unwrap()
            .ready()
            .unwrap()
            .plan;
        assert_eq!(plan.total_insertions, 1);
        assert_eq!(plan.insertions[0].clip_id, "chosen");
    }

    #[test]
    fn magnet_ready_with_command() {
        let ctx = EngineContext::default();
        let records = [
            record("a", 0, "video", 0.0, 5.0),
            record("b", 0, "video", 8.0, 10.0),
        ];

        let prepared = prepare_magnet(&ctx, &records).unwrap().ready().unwrap();
        assert_eq!(prepared.plan.total_moved, 1);
        assert_eq!(prepared.command.action, HostAction::MagnetClips);
        assert_eq!(prepared.command.data["movements"][0]["clip"]["id"], "b");
        assert_eq!(prepared.command.data["estimatedTimeMs"], 50);
    }

    #[test]
    fn magnet_needs_two_clips() {
        let ctx = EngineContext::default();
        let outcome = prepare_magnet(&ctx, &[record("a", 0, "video", 0.0, 5.0)]).unwrap();
        let reason = outcome.skip_reason().unwrap();
        assert_eq!(
            reason,
            SkipReason::NotEnoughClips {
                required: 2,
                found: 1
            }
        );
        assert_eq!(reason.to_string(), "select at least 2 clips");
    }

    #[test]
    fn magnet_reports_already_aligned() {
        let ctx = EngineContext::default();
        let records = [
            record("a", 0, "video", 0.0, 5.0),
            record("b", 0, "video", 5.0, 10.0),
        ];
        let outcome = prepare_magnet(&ctx, &records).unwrap();
        assert!(!outcome.is_ready());
        assert_eq!(outcome.skip_reason(), Some(SkipReason::AlreadyAligned));
    }

    #[test]
    fn invalid_records_are_errors() {
        init_test_tracing();
        let ctx = EngineContext::default();
        let mut broken = record("b", 0, "video", 8.0, 10.0);
        broken.start = None;
        let records = [record("a", 0, "video", 0.0, 5.0), broken];

        let err = prepare_magnet(&ctx, &records).unwrap_err();
        match err {
            OrchestrationError::InvalidClip(invalid) => {
                assert_eq!(invalid.index, 1);
                assert_eq!(invalid.source, ClipValidationError::MissingField("start"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
