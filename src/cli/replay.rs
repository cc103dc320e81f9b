//! Scripted sessions: apply a list of workbench events in order.
//!
//! Rejected events are recorded and skipped; they never abort the replay.

use crate::content::{CatalogEntry, CatalogRegistry};
use crate::layout::PaneBounds;
use crate::workbench::{Workbench, WorkbenchError, WorkbenchEvent};
use anyhow::{Context, Result};
use par_workbench_config::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Script file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Content the script refers to, added to the registry before replay
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
    pub events: Vec<WorkbenchEvent>,
}

impl ReplayScript {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).context("Failed to parse replay script")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {:?}", path))?;
        Self::from_yaml_str(&contents)
    }
}

/// An event that the workbench refused
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Position of the event in the script
    pub index: usize,
    /// Event name, for reporting
    pub event: &'static str,
    pub error: WorkbenchError,
}

pub struct ReplayOutcome {
    pub workbench: Workbench<CatalogRegistry>,
    pub applied: usize,
    pub rejected: Vec<Rejection>,
}

/// Run every event of `script` against a fresh workbench
pub fn replay(
    script: ReplayScript,
    mut registry: CatalogRegistry,
    config: Config,
    viewport: PaneBounds,
) -> ReplayOutcome {
    registry.extend(script.catalog);
    let mut workbench = Workbench::new(registry, config, viewport);
    let mut applied = 0;
    let mut rejected = Vec::new();

    for (index, event) in script.events.into_iter().enumerate() {
        let name = event.name();
        match workbench.handle(event) {
            Ok(()) => applied += 1,
            Err(error) => {
                log::warn!("Event #{} ({}) rejected: {}", index, name, error);
                rejected.push(Rejection {
                    index,
                    event: name,
                    error,
                });
            }
        }
    }

    log::info!(
        "Replay finished: {} applied, {} rejected",
        applied,
        rejected.len()
    );
    ReplayOutcome {
        workbench,
        applied,
        rejected,
    }
}
