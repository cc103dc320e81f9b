//! Rejection results for layout operations.
//!
//! Every operation on `LayoutEngine` validates before it writes, so an
//! `Err` always means the tree and the active pane are exactly as they were.

use super::types::{PaneId, SplitterId};
use crate::content::ContentId;
use std::fmt;
use thiserror::Error;

/// The node, tab, or index an operation referred to but could not find
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Pane(PaneId),
    Splitter(SplitterId),
    Content {
        pane_id: PaneId,
        content_id: ContentId,
    },
    TabIndex {
        pane_id: PaneId,
        index: usize,
    },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Pane(id) => write!(f, "pane {}", id),
            Target::Splitter(id) => write!(f, "splitter {}", id),
            Target::Content {
                pane_id,
                content_id,
            } => write!(f, "content '{}' in pane {}", content_id, pane_id),
            Target::TabIndex { pane_id, index } => {
                write!(f, "tab index {} in pane {}", index, pane_id)
            }
        }
    }
}

/// Why a layout operation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A referenced pane, splitter, (pane, content) pair, or tab index does not exist
    #[error("invalid target: {0} does not exist")]
    InvalidTarget(Target),

    /// The content registry could not resolve a newly introduced content id
    #[error("content '{0}' could not be resolved")]
    UnresolvableContent(ContentId),
}

impl LayoutError {
    pub(crate) fn pane(id: PaneId) -> Self {
        LayoutError::InvalidTarget(Target::Pane(id))
    }

    pub(crate) fn splitter(id: SplitterId) -> Self {
        LayoutError::InvalidTarget(Target::Splitter(id))
    }

    pub(crate) fn content(pane_id: PaneId, content_id: &str) -> Self {
        LayoutError::InvalidTarget(Target::Content {
            pane_id,
            content_id: content_id.to_string(),
        })
    }

    pub(crate) fn tab_index(pane_id: PaneId, index: usize) -> Self {
        LayoutError::InvalidTarget(Target::TabIndex { pane_id, index })
    }

    /// True for `InvalidTarget`
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, LayoutError::InvalidTarget(_))
    }
}
