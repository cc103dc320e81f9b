//! Core `Config` struct, persistence, and validation.
//!
//! Covers:
//! - `load` / `load_from` / `save_to` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)
//! - `validate` for range checks that serde cannot express

use crate::defaults;
use crate::error::ConfigError;
use crate::types::LogLevel;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime configuration for the layout engine and its drag/drop front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Layout geometry
    // ========================================================================
    /// Width of the divider between two split children, in pixels
    #[serde(default = "defaults::divider_width")]
    pub divider_width: f32,

    /// Width of the divider hit area used when starting a resize drag
    #[serde(default = "defaults::divider_hit_width")]
    pub divider_hit_width: f32,

    // ========================================================================
    // Drop zones
    // ========================================================================
    /// Fraction of a pane's trailing edges that triggers a split on drop (0.0, 0.5]
    #[serde(default = "defaults::drop_split_threshold")]
    pub drop_split_threshold: f32,

    /// Height of the tab strip at the top of every pane, in pixels
    #[serde(default = "defaults::tab_strip_height")]
    pub tab_strip_height: f32,

    /// Also classify the left and top edges as split zones
    #[serde(default = "defaults::drop_leading_edges")]
    pub drop_leading_edges: bool,

    // ========================================================================
    // Drag gesture
    // ========================================================================
    /// How long a drag must hover over a collapsed region before it expands
    #[serde(default = "defaults::hover_expand_delay_ms")]
    pub hover_expand_delay_ms: u64,

    // ========================================================================
    // Debug logging
    // ========================================================================
    /// Verbosity of the debug log file
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            divider_width: defaults::divider_width(),
            divider_hit_width: defaults::divider_hit_width(),
            drop_split_threshold: defaults::drop_split_threshold(),
            tab_strip_height: defaults::tab_strip_height(),
            drop_leading_edges: defaults::drop_leading_edges(),
            hover_expand_delay_ms: defaults::hover_expand_delay_ms(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists yet. Unlike `load_from`, a missing file is not an
    /// error and nothing is written to disk.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("par-workbench")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/par-workbench on every Unix, including macOS
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("par-workbench")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Check value ranges that the YAML schema cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.drop_split_threshold > 0.0 && self.drop_split_threshold <= 0.5) {
            return Err(ConfigError::Validation(format!(
                "drop_split_threshold must be in (0.0, 0.5], got {}",
                self.drop_split_threshold
            )));
        }
        if !(self.tab_strip_height.is_finite() && self.tab_strip_height >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "tab_strip_height must be a non-negative number, got {}",
                self.tab_strip_height
            )));
        }
        if !(self.divider_width.is_finite() && self.divider_width >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "divider_width must be a non-negative number, got {}",
                self.divider_width
            )));
        }
        if !(self.divider_hit_width.is_finite() && self.divider_hit_width >= self.divider_width) {
            return Err(ConfigError::Validation(format!(
                "divider_hit_width must be at least divider_width ({}), got {}",
                self.divider_width, self.divider_hit_width
            )));
        }
        Ok(())
    }

    /// Hover-to-expand delay as a `Duration`
    pub fn hover_expand_delay(&self) -> Duration {
        Duration::from_millis(self.hover_expand_delay_ms)
    }

    /// Extra padding on each side of a divider for hit-testing
    pub fn divider_hit_padding(&self) -> f32 {
        (self.divider_hit_width - self.divider_width).max(0.0) / 2.0
    }
}
