//! Pane splitting for LayoutEngine

use super::LayoutEngine;
use super::tree_ops::{self, SplitRequest};
use crate::content::{ContentReference, ContentRegistry};
use crate::layout::error::LayoutError;
use crate::layout::types::{Orientation, Pane, PaneId, SplitPosition};

impl LayoutEngine {
    /// Split `pane_id` and place `content_id` in the new sibling pane
    ///
    /// The target pane is replaced by a splitter at the default ratio holding
    /// the target and the new pane, ordered by `position`. The new pane
    /// becomes active and its id is returned.
    ///
    /// Content already open in the target is moved out of it, and the target
    /// is kept even if it ends up empty. When `source_pane_id` names another
    /// pane, that pane must hold the content; it gives up the tab and is
    /// removed once empty.
    pub fn split_pane<R>(
        &mut self,
        registry: &R,
        pane_id: PaneId,
        content_id: &str,
        orientation: Orientation,
        position: SplitPosition,
        source_pane_id: Option<PaneId>,
    ) -> Result<PaneId, LayoutError>
    where
        R: ContentRegistry + ?Sized,
    {
        crate::debug_info!(
            "LAYOUT",
            "split_pane: pane={} content='{}' orientation={} position={:?} source={:?}",
            pane_id,
            content_id,
            orientation,
            position,
            source_pane_id
        );

        let meta = registry
            .resolve(content_id)
            .ok_or_else(|| LayoutError::UnresolvableContent(content_id.to_string()))?;
        let target_holds_content = self
            .root
            .find_pane(pane_id)
            .ok_or_else(|| LayoutError::pane(pane_id))?
            .contains(content_id);
        if let Some(source) = source_pane_id
            && !self
                .root
                .find_pane(source)
                .ok_or_else(|| LayoutError::pane(source))?
                .contains(content_id)
        {
            return Err(LayoutError::content(source, content_id));
        }

        // The target gives up its own copy and stays in the tree even if emptied
        if target_holds_content && let Some(pane) = self.root.find_pane_mut(pane_id) {
            pane.remove_tab(content_id);
        }

        let new_pane_id = self.allocate_id();
        let request = SplitRequest {
            target_id: pane_id,
            splitter_id: self.allocate_id(),
            orientation,
            position,
        };
        let new_pane = Pane::with_content(new_pane_id, ContentReference::new(content_id, meta));

        let root = self.take_root();
        let (new_root, leftover) = tree_ops::split_node(root, &request, Some(new_pane));
        self.root = new_root;
        if leftover.is_some() {
            // Existence was checked above, so the split cannot miss
            crate::debug_error!("LAYOUT", "split target pane {} vanished", pane_id);
            return Err(LayoutError::pane(pane_id));
        }
        self.active_pane_id = new_pane_id;

        if let Some(source) = source_pane_id
            && source != pane_id
        {
            self.detach_content(source, content_id);
        }

        crate::debug_info!(
            "LAYOUT",
            "Split pane {} with splitter {}, new pane {}",
            pane_id,
            request.splitter_id,
            new_pane_id
        );
        self.debug_check("split_pane");
        Ok(new_pane_id)
    }
}
