//! Planner outputs: gaps, insertion plans and magnet plans.
//!
//! Everything here is derived on each call and never persisted by the
//! engine. Plans serialize in camelCase for the host command payload.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::clip::ClipInfo;
use super::enums::InsertionType;
use crate::time::TimeCode;

/// Rough per-insertion cost shown to the user before running a plan.
const ESTIMATE_PER_INSERTION: Duration = Duration::from_secs(2);

/// Rough per-movement cost shown to the user before running a plan.
const ESTIMATE_PER_MOVEMENT: Duration = Duration::from_millis(50);

/// `per * count`, saturating instead of truncating `count`.
fn estimate(per: Duration, count: usize) -> Duration {
    per.saturating_mul(u32::try_from(count).unwrap_or(u32::MAX))
}

/// Empty interval strictly between two consecutive clips on one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipGap {
    pub start_time: TimeCode,
    pub end_time: TimeCode,
    pub duration: TimeCode,
    pub before_clip: ClipInfo,
    pub after_clip: ClipInfo,
    pub gap_index: usize,
}

/// One audio file to overlay on a reference clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipInsertion {
    /// Id of the clip this insertion was planned against.
    pub clip_id: String,
    /// Always the reference clip's start.
    pub position: TimeCode,
    pub audio_file: PathBuf,
    pub target_track: u32,
    pub insertion_type: InsertionType,
    /// Reference clip length, used by the host to trim the inserted audio.
    pub clip_duration: TimeCode,
}

/// Complete sound-insertion plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertionPlan {
    pub insertions: Vec<ClipInsertion>,
    pub total_insertions: usize,
    /// Track requested by the caller. Individual insertions may differ.
    pub audio_track: u32,
    /// UI estimate, not measured time.
    #[serde(rename = "estimatedDurationMs", with = "duration_ms")]
    pub estimated_duration: Duration,
}

impl InsertionPlan {
    /// Build a plan, deriving the totals.
    pub fn new(insertions: Vec<ClipInsertion>, audio_track: u32) -> Self {
        let total_insertions = insertions.len();
        Self {
            insertions,
            total_insertions,
            audio_track,
            estimated_duration: estimate(ESTIMATE_PER_INSERTION, total_insertions),
        }
    }

    /// Plan with nothing to insert.
    pub fn empty(audio_track: u32) -> Self {
        Self::new(Vec::new(), audio_track)
    }

    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }
}

/// A single clip slide that closes a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipMovement {
    pub clip: ClipInfo,
    pub from_position: TimeCode,
    pub to_position: TimeCode,
    /// How far the clip slides towards the timeline start.
    pub delta_time: TimeCode,
}

/// Complete gap-removal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagnetPlan {
    pub movements: Vec<ClipMovement>,
    pub total_moved: usize,
    pub gaps_removed: usize,
    /// UI estimate, not measured time.
    #[serde(rename = "estimatedTimeMs", with = "duration_ms")]
    pub estimated_time: Duration,
}

impl MagnetPlan {
    /// Build a plan, deriving the totals. Every movement closes one gap.
    pub fn new(movements: Vec<ClipMovement>) -> Self {
        let count = movements.len();
        Self {
            movements,
            total_moved: count,
            gaps_removed: count,
            estimated_time: estimate(ESTIMATE_PER_MOVEMENT, count),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

/// Durations travel as whole milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
