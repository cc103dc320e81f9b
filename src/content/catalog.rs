//! `CatalogRegistry`: in-memory [`ContentRegistry`] backed by a map.
//!
//! Used by the command-line driver and tests. A catalog file is a YAML list:
//!
//! ```yaml
//! - id: fileA
//!   title: main.rs
//!   kind: code
//! - id: standup
//!   title: Daily standup
//!   kind: chat
//! ```

use super::{ContentId, ContentKind, ContentMeta, ContentRegistry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One catalog row as it appears in YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ContentId,
    pub title: String,
    pub kind: ContentKind,
}

/// Map-backed content registry
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    entries: HashMap<ContentId, ContentMeta>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from catalog rows. Later rows win on duplicate ids.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut registry = Self::new();
        registry.extend(entries);
        registry
    }

    /// Parse a YAML catalog
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_yaml_ng::from_str(yaml).context("Failed to parse content catalog")?;
        Ok(Self::from_entries(entries))
    }

    /// Load a YAML catalog file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content catalog {:?}", path))?;
        let registry = Self::from_yaml_str(&contents)?;
        log::info!(
            "Loaded {} catalog entries from {:?}",
            registry.len(),
            path
        );
        Ok(registry)
    }

    pub fn insert(&mut self, id: impl Into<ContentId>, meta: ContentMeta) {
        self.entries.insert(id.into(), meta);
    }

    /// Remove an entry. References already open in panes keep their snapshot.
    pub fn remove(&mut self, id: &str) -> Option<ContentMeta> {
        self.entries.remove(id)
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        for entry in entries {
            self.entries.insert(
                entry.id,
                ContentMeta {
                    title: entry.title,
                    kind: entry.kind,
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentRegistry for CatalogRegistry {
    fn resolve(&self, content_id: &str) -> Option<ContentMeta> {
        self.entries.get(content_id).cloned()
    }
}
