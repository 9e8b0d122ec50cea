//! Configuration management for the clip time engine.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use cliptime_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/cliptime.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Default audio track: {}", config.settings().insertion.default_audio_track);
//!
//! // Modify a setting and save just that section atomically
//! config.settings_mut().magnet.selected_only = true;
//! config.update_section(ConfigSection::Magnet).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, InsertionSettings, LoggingSettings, MagnetSettings, Settings};
