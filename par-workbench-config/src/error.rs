//! Typed error variants for the par-workbench-config crate.
//!
//! `Config::load_from` and `Config::save_to` return `anyhow::Result` so the
//! binary can attach context; callers that need to branch on the failure
//! mode can `downcast_ref::<ConfigError>()`.

use thiserror::Error;

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and the accepted range.
    #[error("Config validation error: {0}")]
    Validation(String),
}
