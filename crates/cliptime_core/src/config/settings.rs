//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::planner::DEFAULT_AUDIO_TRACK;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Sound insertion settings.
    #[serde(default)]
    pub insertion: InsertionSettings,

    /// Magnet (gap removal) settings.
    #[serde(default)]
    pub magnet: MagnetSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Sound insertion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionSettings {
    /// Audio track used when the caller does not choose one.
    #[serde(default = "default_audio_track")]
    pub default_audio_track: u32,

    /// Only plan against clips the user has selected.
    #[serde(default)]
    pub selected_only: bool,

    /// Fixed seed for audio selection. Unset means a fresh seed per context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_audio_track() -> u32 {
    DEFAULT_AUDIO_TRACK
}

impl Default for InsertionSettings {
    fn default() -> Self {
        Self {
            default_audio_track: default_audio_track(),
            selected_only: false,
            seed: None,
        }
    }
}

/// Magnet (gap removal) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetSettings {
    /// Fewest clips worth compacting.
    #[serde(default = "default_min_clips")]
    pub min_clips: usize,

    /// Only compact clips the user has selected.
    #[serde(default)]
    pub selected_only: bool,
}

fn default_min_clips() -> usize {
    2
}

impl Default for MagnetSettings {
    fn default() -> Self {
        Self {
            min_clips: default_min_clips(),
            selected_only: false,
        }
    }
}

/// Config sections for atomic updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Logging,
    Insertion,
    Magnet,
}

impl ConfigSection {
    /// Every section, in file order.
    pub fn all() -> &'static [ConfigSection] {
        &[Self::Logging, Self::Insertion, Self::Magnet]
    }

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "logging",
            ConfigSection::Insertion => "insertion",
            ConfigSection::Magnet => "magnet",
        }
    }

    /// Comment written above the section in generated files.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Logging => "Logging configuration",
            ConfigSection::Insertion => "Sound insertion planning",
            ConfigSection::Magnet => "Gap removal (magnet) planning",
        }
    }
}
