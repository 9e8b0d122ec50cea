//! Config manager for loading, saving, and atomic updates.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Section-level updates (only modified section is changed)
//! - Validation on load (unknown sections trigger a rewrite)
//! - Preserves comments in untouched sections with toml_edit

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::{DocumentMut, Item};
use tracing::{debug, info};

use super::settings::{ConfigSection, Settings};

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages engine configuration on disk.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Changes stay in memory until `save()` or `update_section()` is called.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        debug!(path = %self.config_path.display(), "Loaded config");
        Ok(())
    }

    /// Load config from file, creating with defaults if it doesn't exist.
    ///
    /// Rewrites the file when it had unknown sections or missing defaults.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            let (settings, was_modified) = self.parse_validate_and_clean(&content)?;
            self.settings = settings;

            if was_modified {
                info!(path = %self.config_path.display(), "Normalizing config file");
                self.save()?;
            }
        } else {
            info!(path = %self.config_path.display(), "Creating default config");
            self.settings = Settings::default();
            self.save()?;
        }
        Ok(())
    }

    /// Parse, validate, and clean up config content.
    ///
    /// Returns the settings and whether the file needs rewriting.
    fn parse_validate_and_clean(&self, content: &str) -> ConfigResult<(Settings, bool)> {
        let doc: DocumentMut = content.parse()?;

        // Parse into settings (this applies defaults for missing fields)
        let settings: Settings = toml::from_str(content)?;

        let has_unknown = doc.iter().any(|(key, _)| {
            !ConfigSection::all()
                .iter()
                .any(|section| section.table_name() == key)
        });

        let has_missing = ConfigSection::all().iter().any(|section| {
            let expected = match self.section_table(&settings, *section) {
                Ok(table) => table,
                Err(_) => return true,
            };
            match doc.get(section.table_name()).and_then(Item::as_table) {
                Some(table) => expected.iter().any(|(key, _)| !table.contains_key(key)),
                None => true,
            }
        });

        Ok((settings, has_unknown || has_missing))
    }

    /// Save the entire config atomically.
    pub fn save(&self) -> ConfigResult<()> {
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Update a specific section atomically.
    ///
    /// Re-reads the file from disk, replaces only the given section, and
    /// writes back atomically. Other sections keep their on-disk content.
    pub fn update_section(&mut self, section: ConfigSection) -> ConfigResult<()> {
        let current_content = if self.config_path.exists() {
            fs::read_to_string(&self.config_path)?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = if current_content.is_empty() {
            DocumentMut::new()
        } else {
            current_content.parse()?
        };

        let table = self.section_table(&self.settings, section)?;
        doc[section.table_name()] = Item::Table(table);

        self.atomic_write(&doc.to_string())?;
        debug!(section = section.table_name(), "Updated config section");
        Ok(())
    }

    /// Serialize one section of `settings` as an editable table.
    fn section_table(
        &self,
        settings: &Settings,
        section: ConfigSection,
    ) -> ConfigResult<toml_edit::Table> {
        let section_toml = match section {
            ConfigSection::Logging => toml::to_string_pretty(&settings.logging)?,
            ConfigSection::Insertion => toml::to_string_pretty(&settings.insertion)?,
            ConfigSection::Magnet => toml::to_string_pretty(&settings.magnet)?,
        };
        let section_doc: DocumentMut = section_toml.parse()?;
        Ok(section_doc.as_table().clone())
    }

    /// Generate config content with helpful comments.
    fn generate_config_with_comments(&self) -> ConfigResult<String> {
        let mut output = String::new();

        output.push_str("# Clip Time Engine Configuration\n");
        output.push_str(
            "# This file is auto-generated. Comments may be preserved on section updates.\n",
        );

        for section in ConfigSection::all() {
            output.push('\n');
            output.push_str(&format!("# {}\n", section.description()));
            output.push_str(&format!("[{}]\n", section.table_name()));
            let content = match section {
                ConfigSection::Logging => toml::to_string_pretty(&self.settings.logging)?,
                ConfigSection::Insertion => toml::to_string_pretty(&self.settings.insertion)?,
                ConfigSection::Magnet => toml::to_string_pretty(&self.settings.magnet)?,
            };
            for line in content.lines() {
                output.push_str(line);
                output.push('\n');
            }
        }

        Ok(output)
    }

    /// Write content to config file atomically.
    ///
    /// Writes to a temp file first, then renames.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory so the rename stays on one filesystem
        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}
