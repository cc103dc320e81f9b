//! Structural invariant checks for a layout tree.
//!
//! The engine keeps these true by construction; the checker exists for
//! debug assertions and tests.

use super::common::{PaneId, RATIO_MAX, RATIO_MIN, SplitterId};
use super::layout_node::LayoutNode;
use crate::content::ContentId;
use std::collections::HashSet;
use thiserror::Error;

/// A broken tree invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("node id {0} appears more than once")]
    DuplicateId(u64),

    #[error("splitter {id} has ratio {ratio} outside [5, 95]")]
    RatioOutOfRange { id: SplitterId, ratio: f32 },

    #[error("pane {pane_id} has content '{content_id}' open twice")]
    DuplicateTab {
        pane_id: PaneId,
        content_id: ContentId,
    },

    #[error("pane {pane_id} has active content '{content_id}' that is not one of its tabs")]
    ActiveNotInTabs {
        pane_id: PaneId,
        content_id: ContentId,
    },

    #[error("pane {0} has tabs but no active content")]
    MissingActive(PaneId),

    #[error("active pane {0} is not in the tree")]
    DanglingActivePane(PaneId),
}

impl LayoutNode {
    /// Verify every structural invariant of the subtree.
    ///
    /// Binary arity and the non-absent root are guaranteed by the type itself.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        self.check_recursive(&mut seen)
    }

    fn check_recursive(&self, seen: &mut HashSet<u64>) -> Result<(), InvariantViolation> {
        if !seen.insert(self.id()) {
            return Err(InvariantViolation::DuplicateId(self.id()));
        }

        match self {
            LayoutNode::Leaf(pane) => {
                let mut tab_ids = HashSet::new();
                for tab in &pane.tabs {
                    if !tab_ids.insert(tab.id.as_str()) {
                        return Err(InvariantViolation::DuplicateTab {
                            pane_id: pane.id,
                            content_id: tab.id.clone(),
                        });
                    }
                }
                match &pane.active_content_id {
                    Some(active) if !tab_ids.contains(active.as_str()) => {
                        Err(InvariantViolation::ActiveNotInTabs {
                            pane_id: pane.id,
                            content_id: active.clone(),
                        })
                    }
                    None if !pane.tabs.is_empty() => {
                        Err(InvariantViolation::MissingActive(pane.id))
                    }
                    _ => Ok(()),
                }
            }
            LayoutNode::Split {
                id,
                ratio,
                first,
                second,
                ..
            } => {
                if !(RATIO_MIN..=RATIO_MAX).contains(ratio) {
                    return Err(InvariantViolation::RatioOutOfRange {
                        id: *id,
                        ratio: *ratio,
                    });
                }
                first.check_recursive(seen)?;
                second.check_recursive(seen)
            }
        }
    }
}
