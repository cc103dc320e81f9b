//! Layout engine: owns the layout tree and the active pane.
//!
//! The engine provides operations for:
//! - Opening, activating, closing, moving, and reordering tabs
//! - Splitting panes and contracting the tree when panes empty out
//! - Resizing splitters
//! - Tracking the active (focused) pane
//!
//! Every operation validates its targets before writing anything, so a
//! rejected call leaves the tree and active pane untouched.
//!
//! Sub-modules:
//! - [`tree_ops`]: consuming tree rewrites (split a leaf, remove a leaf).
//! - [`content_ops`]: tab operations (open, activate, close, move, reorder).
//! - [`creation`]: pane splitting.
//! - [`focus`]: active pane tracking and pane removal with focus transfer.
//! - [`layout`]: splitter resizing and geometry.

mod content_ops;
mod creation;
mod focus;
mod layout;
mod tree_ops;


use crate::layout::types::{InvariantViolation, LayoutNode, Pane, PaneId};

/// Never handed out by `allocate_id`; only occupies the root slot while the
/// tree is being rebuilt by value.
const DETACHED_PANE_ID: PaneId = 0;

/// Owns the layout tree of one workspace
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    /// Root of the layout tree; always present
    root: LayoutNode,
    /// ID of the currently focused pane; always names a pane in `root`
    active_pane_id: PaneId,
    /// Counter for generating unique node IDs (panes and splitters share it)
    next_node_id: u64,
}

impl LayoutEngine {
    /// Create an engine with a single empty bootstrap pane, which is active
    pub fn new() -> Self {
        let bootstrap_id = 1;
        log::debug!("Layout engine created with bootstrap pane {}", bootstrap_id);
        Self {
            root: LayoutNode::leaf(Pane::new(bootstrap_id)),
            active_pane_id: bootstrap_id,
            next_node_id: bootstrap_id + 1,
        }
    }

    /// Get access to the root node (for rendering)
    pub fn root(&self) -> &LayoutNode {
        &self.root
    }

    /// Owned copy of the current tree
    pub fn snapshot(&self) -> LayoutNode {
        self.root.clone()
    }

    /// Get a pane by ID
    pub fn get_pane(&self, id: PaneId) -> Option<&Pane> {
        self.root.find_pane(id)
    }

    /// Get all panes in pre-order
    pub fn all_panes(&self) -> Vec<&Pane> {
        self.root.all_panes()
    }

    /// Get the number of panes
    pub fn pane_count(&self) -> usize {
        self.root.pane_count()
    }

    /// Check if there are multiple panes
    pub fn has_multiple_panes(&self) -> bool {
        self.pane_count() > 1
    }

    /// Get the next node ID that will be assigned
    pub fn next_node_id(&self) -> u64 {
        self.next_node_id
    }

    /// Verify the tree invariants and that the active pane exists
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.root.check_invariants()?;
        if self.root.find_pane(self.active_pane_id).is_none() {
            return Err(InvariantViolation::DanglingActivePane(self.active_pane_id));
        }
        Ok(())
    }

    pub(super) fn allocate_id(&mut self) -> u64 {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    /// Move the tree out of `self.root` so it can be rebuilt by value.
    /// The caller must store a real tree back before returning.
    pub(super) fn take_root(&mut self) -> LayoutNode {
        std::mem::replace(
            &mut self.root,
            LayoutNode::leaf(Pane::new(DETACHED_PANE_ID)),
        )
    }

    pub(super) fn debug_check(&self, operation: &str) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "{} left the layout invalid: {:?}\n{}",
            operation,
            self.check_invariants(),
            self.root
        );
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
