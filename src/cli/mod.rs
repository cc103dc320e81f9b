//! Command-line interface for par-workbench.
//!
//! This module handles CLI argument parsing and the `replay` and `classify`
//! subcommands. Script replay lives in the [`replay`] submodule.

pub mod replay;

use crate::content::CatalogRegistry;
use crate::drop_zone::DropZoneClassifier;
use crate::layout::PaneBounds;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use par_workbench_config::{Config, LogLevel};
use std::path::{Path, PathBuf};

/// par-workbench - a recursive split-pane layout engine
#[derive(Parser)]
#[command(name = "par-workbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a YAML script of layout events and print the resulting tree
    Replay {
        /// Script file with `catalog` and `events` sections
        script: PathBuf,

        /// Extra content catalog (YAML list of entries)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Viewport width used for pointer events
        #[arg(long, default_value_t = 1280.0)]
        width: f32,

        /// Viewport height used for pointer events
        #[arg(long, default_value_t = 800.0)]
        height: f32,
    },

    /// Print the drop zone for a pointer position inside a pane
    Classify {
        /// Pointer x, relative to the pane's left edge
        #[arg(long, allow_negative_numbers = true)]
        x: f32,

        /// Pointer y, relative to the pane's top edge
        #[arg(long, allow_negative_numbers = true)]
        y: f32,

        #[arg(long)]
        width: f32,

        #[arg(long)]
        height: f32,

        /// Tab strip height (defaults to the configured value)
        #[arg(long, value_name = "PIXELS")]
        tab_strip: Option<f32>,

        /// Also classify left and top split zones
        #[arg(long)]
        leading_edges: bool,
    },
}

/// Load the config from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load(),
    }
}

/// Apply the config's log level unless the CLI flag or RUST_LOG already chose one
pub fn apply_config_log_level(config: &Config, cli_level: Option<log::LevelFilter>) {
    if cli_level.is_some()
        || std::env::var_os("RUST_LOG").is_some()
        || config.log_level == LogLevel::Off
    {
        return;
    }
    let filter = config.log_level.to_level_filter();
    crate::debug::set_level(filter.into());
    log::set_max_level(filter);
}

/// Run the parsed command
pub fn run(cli: Cli) -> Result<()> {
    let cli_level = cli.log_level.map(LogLevelArg::to_level_filter);
    let config = load_config(cli.config.as_deref())?;
    apply_config_log_level(&config, cli_level);

    match cli.command {
        Commands::Replay {
            script,
            catalog,
            width,
            height,
        } => {
            let script_file = replay::ReplayScript::load_from(&script)?;
            let registry = match catalog {
                Some(catalog_path) => CatalogRegistry::load_from(&catalog_path)?,
                None => CatalogRegistry::new(),
            };
            let viewport = PaneBounds::new(0.0, 0.0, width, height);
            let outcome = replay::replay(script_file, registry, config, viewport);

            print!("{}", outcome.workbench.engine().root());
            println!(
                "active pane: {}",
                outcome.workbench.engine().active_pane_id()
            );
            println!(
                "{} event(s) applied, {} rejected",
                outcome.applied,
                outcome.rejected.len()
            );
            for rejection in &outcome.rejected {
                println!("  #{} {}: {}", rejection.index, rejection.event, rejection.error);
            }
            Ok(())
        }
        Commands::Classify {
            x,
            y,
            width,
            height,
            tab_strip,
            leading_edges,
        } => {
            let mut classifier = DropZoneClassifier::from_config(&config);
            classifier.leading_edges |= leading_edges;
            let tab_strip = tab_strip.unwrap_or(config.tab_strip_height);
            let zone = classifier.classify(x, y, width, height, tab_strip);
            match zone.split_params() {
                Some((orientation, position)) => {
                    println!("{} (split {} {:?})", zone, orientation, position)
                }
                None => println!("{}", zone),
            }
            Ok(())
        }
    }
}
