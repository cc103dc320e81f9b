//! Focus tracking and pane removal for LayoutEngine
//!
//! Handles the active pane, explicit focus changes, and closing panes with
//! automatic focus transfer.

use super::LayoutEngine;
use super::tree_ops::{self, RemoveResult};
use crate::layout::error::LayoutError;
use crate::layout::types::{LayoutNode, Pane, PaneId};

impl LayoutEngine {
    /// ID of the active pane
    pub fn active_pane_id(&self) -> PaneId {
        self.active_pane_id
    }

    /// The active pane
    pub fn active_pane(&self) -> &Pane {
        // The active id always names a pane in the tree; fall back to the
        // first pane rather than panicking if that is ever violated.
        self.root
            .find_pane(self.active_pane_id)
            .unwrap_or_else(|| self.root.first_pane())
    }

    /// Make `pane_id` the active pane
    pub fn focus_pane(&mut self, pane_id: PaneId) -> Result<(), LayoutError> {
        if self.root.find_pane(pane_id).is_none() {
            return Err(LayoutError::pane(pane_id));
        }
        if self.active_pane_id != pane_id {
            log::debug!("Focus moved from pane {} to pane {}", self.active_pane_id, pane_id);
            self.active_pane_id = pane_id;
        }
        Ok(())
    }

    /// Close a pane and all of its tabs
    ///
    /// The parent splitter is replaced by the sibling subtree. Closing the
    /// only pane leaves a fresh empty pane behind.
    pub fn close_pane(&mut self, pane_id: PaneId) -> Result<(), LayoutError> {
        crate::debug_info!("LAYOUT", "close_pane called for pane {}", pane_id);
        if self.root.find_pane(pane_id).is_none() {
            return Err(LayoutError::pane(pane_id));
        }
        self.remove_pane_node(pane_id);
        self.debug_check("close_pane");
        Ok(())
    }

    /// Remove a pane from the tree and contract its parent splitter
    ///
    /// Returns false if the pane was not in the tree.
    pub(super) fn remove_pane_node(&mut self, pane_id: PaneId) -> bool {
        let root = self.take_root();
        match tree_ops::remove_pane(root, pane_id) {
            RemoveResult::Removed(Some(new_root)) => {
                self.root = new_root;
            }
            RemoveResult::Removed(None) => {
                // The tree is never empty: the last pane is replaced by a fresh one
                let fresh_id = self.allocate_id();
                crate::debug_info!(
                    "LAYOUT",
                    "Removed last pane {}, created empty pane {}",
                    pane_id,
                    fresh_id
                );
                self.root = LayoutNode::leaf(Pane::new(fresh_id));
            }
            RemoveResult::NotFound(root) => {
                crate::debug_info!("LAYOUT", "Pane {} not found in tree", pane_id);
                self.root = root;
                return false;
            }
        }

        // If we removed the active pane, focus the first pane in pre-order
        if self.active_pane_id == pane_id {
            let new_focus = self.root.first_pane().id();
            crate::debug_info!(
                "LAYOUT",
                "Removed active pane {}, new focus: {}",
                pane_id,
                new_focus
            );
            self.active_pane_id = new_focus;
        }

        crate::debug_info!(
            "LAYOUT",
            "Removed pane {}, {} pane(s) remain",
            pane_id,
            self.root.pane_count()
        );
        true
    }
}
