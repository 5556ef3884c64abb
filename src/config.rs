//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::{CONTROLLERS_DIR, ROBOTS_DIR};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Data directory holding `Robots/` and `Controllers/` configurations
    pub data_dir: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Robot selected when the editor was last closed
    #[serde(default)]
    pub last_robot: Option<String>,
    /// Controller selected when the editor was last closed
    #[serde(default)]
    pub last_controller: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            last_robot: None,
            last_controller: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Marionette/config.toml`
/// - macOS: `~/Library/Application Support/Marionette/config.toml`
/// - Windows: `%APPDATA%\Marionette\config.toml`
///
/// # Validation
///
/// - `data_dir` must exist and contain `Robots/` and `Controllers/`
///   directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// UI preferences
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Checks if the configuration has been properly set up.
    ///
    /// A config is considered "configured" once the data directory is set.
    /// This is used to detect first-run scenarios.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.paths.data_dir.is_some()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Marionette");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that the data directory (if set) exists and contains the
    /// `Robots/` and `Controllers/` subdirectories.
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.paths.data_dir {
            Self::validate_data_dir(data_dir)?;
        }

        Ok(())
    }

    /// Validates a candidate data directory.
    pub fn validate_data_dir(data_dir: &Path) -> Result<()> {
        if !data_dir.exists() {
            anyhow::bail!("Data directory does not exist: {}", data_dir.display());
        }

        let robots_dir = data_dir.join(ROBOTS_DIR);
        if !robots_dir.is_dir() {
            anyhow::bail!(
                "Data directory is invalid: {}/ not found at {}",
                ROBOTS_DIR,
                robots_dir.display()
            );
        }

        let controllers_dir = data_dir.join(CONTROLLERS_DIR);
        if !controllers_dir.is_dir() {
            anyhow::bail!(
                "Data directory is invalid: {}/ not found at {}",
                CONTROLLERS_DIR,
                controllers_dir.display()
            );
        }

        Ok(())
    }

    /// Sets the data directory with validation.
    pub fn set_data_dir(&mut self, path: PathBuf) -> Result<()> {
        self.paths.data_dir = Some(path);
        self.validate()?;
        Ok(())
    }
}
