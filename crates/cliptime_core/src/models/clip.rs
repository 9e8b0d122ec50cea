//! Clip records as supplied by the host, and the validated `ClipInfo`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enums::TrackType;
use crate::time::{create_time_code, subtract_time, ticks_to_time_code, TickValue, TimeCode};

/// Errors raised when a host clip record cannot become a `ClipInfo`.
///
/// These indicate an integration bug on the host side, not a runtime
/// condition to recover from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has an unparsable tick count: {value:?}")]
    InvalidTicks { field: &'static str, value: String },

    #[error("track index {0} is not a valid non-negative track number")]
    InvalidTrackIndex(i64),

    #[error("unknown track type {0:?} (expected \"video\" or \"audio\")")]
    UnknownTrackType(String),

    #[error("clip '{id}' ends before it starts")]
    EndBeforeStart { id: String },

    #[error("clip '{id}' has a negative duration")]
    NegativeDuration { id: String },
}

/// A clip record that failed validation, with its position in the batch.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("clip record {index}: {source}")]
pub struct InvalidRecord {
    pub index: usize,
    #[source]
    pub source: ClipValidationError,
}

/// A time value as the host sends it. Ticks win over seconds when both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
}

impl TimeRecord {
    /// Record carrying a tick count.
    pub fn from_ticks(ticks: i64) -> Self {
        Self {
            ticks: Some(TickValue::Int(ticks)),
            seconds: None,
        }
    }

    /// Record carrying seconds only.
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            ticks: None,
            seconds: Some(seconds),
        }
    }

    fn resolve(&self, field: &'static str) -> Result<TimeCode, ClipValidationError> {
        if let Some(ticks) = &self.ticks {
            return ticks
                .parse()
                .map(ticks_to_time_code)
                .map_err(|value| ClipValidationError::InvalidTicks { field, value });
        }
        match self.seconds {
            Some(seconds) if seconds.is_finite() => Ok(create_time_code(seconds)),
            _ => Err(ClipValidationError::MissingField(field)),
        }
    }
}

/// Loosely-typed clip record straight from host timeline state.
///
/// Every field is optional here; `ClipInfo::try_from` decides what is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start: Option<TimeRecord>,
    #[serde(default)]
    pub end: Option<TimeRecord>,
    #[serde(default)]
    pub duration: Option<TimeRecord>,
    #[serde(default)]
    pub track_index: Option<i64>,
    #[serde(default)]
    pub track_type: Option<String>,
    #[serde(default)]
    pub selected: Option<bool>,
}

/// A clip placed on a timeline track. Read-only input to every planner.
///
/// Deserializes through `ClipRecord`, so the same checks as `try_from` apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ClipRecord")]
pub struct ClipInfo {
    pub id: String,
    pub name: String,
    pub start: TimeCode,
    pub end: TimeCode,
    pub duration: TimeCode,
    pub track_index: u32,
    pub track_type: TrackType,
    pub selected: bool,
}

impl ClipInfo {
    /// Create a clip spanning `start..end`. Duration is derived.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: TimeCode,
        end: TimeCode,
        track_index: u32,
        track_type: TrackType,
    ) -> Result<Self, ClipValidationError> {
        let id = id.into();
        if end < start {
            return Err(ClipValidationError::EndBeforeStart { id });
        }
        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
            duration: subtract_time(end, start),
            track_index,
            track_type,
            selected: false,
        })
    }

    /// Set the selection flag.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Display string for log lines.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("{} [{} {}]", self.id, self.track_type, self.track_index)
        } else {
            format!(
                "{} ({}) [{} {}]",
                self.name, self.id, self.track_type, self.track_index
            )
        }
    }
}

impl TryFrom<ClipRecord> for ClipInfo {
    type Error = ClipValidationError;

    fn try_from(record: ClipRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or(ClipValidationError::MissingField("id"))?;
        let start = record
            .start
            .ok_or(ClipValidationError::MissingField("start"))?
            .resolve("start")?;
        let end = record
            .end
            .ok_or(ClipValidationError::MissingField("end"))?
            .resolve("end")?;

        let raw_index = record
            .track_index
            .ok_or(ClipValidationError::MissingField("trackIndex"))?;
        let track_index =
            u32::try_from(raw_index).map_err(|_| ClipValidationError::InvalidTrackIndex(raw_index))?;

        let track_type = record
            .track_type
            .ok_or(ClipValidationError::MissingField("trackType"))?
            .parse::<TrackType>()
            .map_err(ClipValidationError::UnknownTrackType)?;

        let mut clip = ClipInfo::new(
            id,
            record.name.unwrap_or_default(),
            start,
            end,
            track_index,
            track_type,
        )?;

        // Host-reported duration is kept when present; it can differ from
        // end - start for speed-changed clips.
        if let Some(duration) = record.duration {
            let duration = duration.resolve("duration")?;
            if duration.ticks() < 0 {
                return Err(ClipValidationError::NegativeDuration { id: clip.id });
            }
            clip.duration = duration;
        }
        clip.selected = record.selected.unwrap_or(false);

        Ok(clip)
    }
}

/// Validate a batch of host records, failing on the first bad one.
pub fn validate_clip_records(records: &[ClipRecord]) -> Result<Vec<ClipInfo>, InvalidRecord> {
    records
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, record)| {
            ClipInfo::try_from(record).map_err(|source| InvalidRecord { index, source })
        })
        .collect()
}
