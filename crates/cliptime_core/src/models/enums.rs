//! Core enums used throughout the engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of timeline track a clip lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackType::Video => write!(f, "video"),
            TrackType::Audio => write!(f, "audio"),
        }
    }
}

impl FromStr for TrackType {
    type Err = String;

    /// Case-insensitive; returns the input back on failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(TrackType::Video),
            "audio" => Ok(TrackType::Audio),
            _ => Err(s.to_string()),
        }
    }
}

/// How an inserted item relates to the clip it was planned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionType {
    /// Starts at the clip's own start and plays concurrently with it.
    /// Nothing on the timeline is rippled.
    #[default]
    Overlay,
}

impl std::fmt::Display for InsertionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertionType::Overlay => write!(f, "overlay"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_type_serializes_lowercase() {
        let json = serde_json::to_string(&TrackType::Audio).unwrap();
        assert_eq!(json, "\"audio\"");
    }

    #[test]
    fn track_type_parses_case_insensitive() {
        assert_eq!("Video".parse::<TrackType>(), Ok(TrackType::Video));
        assert_eq!(" AUDIO ".parse::<TrackType>(), Ok(TrackType::Audio));
        assert_eq!("caption".parse::<TrackType>(), Err("caption".to_string()));
    }

    #[test]
    fn insertion_type_is_overlay() {
        assert_eq!(InsertionType::default(), InsertionType::Overlay);
        let json = serde_json::to_string(&InsertionType::Overlay).unwrap();
        assert_eq!(json, "\"overlay\"");
    }
}
