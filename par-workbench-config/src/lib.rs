//! Configuration system for par-workbench.
//!
//! This crate provides configuration loading, saving, and default values
//! for the split-pane layout engine. It includes:
//!
//! - Divider geometry used for layout hit-testing
//! - Drop-zone classification tuning (split threshold, tab strip height)
//! - Drag gesture timing (hover-to-expand delay)
//! - Debug log level

pub mod config;
pub mod defaults;
mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
