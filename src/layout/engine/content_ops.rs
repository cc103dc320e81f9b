//! Tab operations for LayoutEngine
//!
//! Opening, activating, closing, moving, and reordering content tabs. A pane
//! that loses its last tab through `close_content` or `move_content` is
//! removed and its parent splitter contracted.

use super::LayoutEngine;
use crate::content::{ContentReference, ContentRegistry};
use crate::layout::error::LayoutError;
use crate::layout::types::PaneId;

impl LayoutEngine {
    /// Open content as a tab in `pane_id` (or re-activate it if already open)
    /// and make that pane active
    pub fn open_content<R>(
        &mut self,
        registry: &R,
        pane_id: PaneId,
        content_id: &str,
    ) -> Result<(), LayoutError>
    where
        R: ContentRegistry + ?Sized,
    {
        let meta = registry
            .resolve(content_id)
            .ok_or_else(|| LayoutError::UnresolvableContent(content_id.to_string()))?;
        let pane = self
            .root
            .find_pane_mut(pane_id)
            .ok_or_else(|| LayoutError::pane(pane_id))?;

        pane.open(ContentReference::new(content_id, meta));
        self.active_pane_id = pane_id;
        log::debug!("Opened content '{}' in pane {}", content_id, pane_id);
        self.debug_check("open_content");
        Ok(())
    }

    /// Open content in whichever pane is currently active
    pub fn open_in_active<R>(&mut self, registry: &R, content_id: &str) -> Result<PaneId, LayoutError>
    where
        R: ContentRegistry + ?Sized,
    {
        let pane_id = self.active_pane_id;
        self.open_content(registry, pane_id, content_id)?;
        Ok(pane_id)
    }

    /// Select an already-open tab and make its pane active
    pub fn activate_content(&mut self, pane_id: PaneId, content_id: &str) -> Result<(), LayoutError> {
        let pane = self
            .root
            .find_pane_mut(pane_id)
            .ok_or_else(|| LayoutError::pane(pane_id))?;
        if !pane.activate(content_id) {
            return Err(LayoutError::content(pane_id, content_id));
        }
        self.active_pane_id = pane_id;
        Ok(())
    }

    /// Close one tab. If the pane becomes empty it is removed from the tree.
    pub fn close_content(&mut self, pane_id: PaneId, content_id: &str) -> Result<(), LayoutError> {
        let pane = self
            .root
            .find_pane(pane_id)
            .ok_or_else(|| LayoutError::pane(pane_id))?;
        if !pane.contains(content_id) {
            return Err(LayoutError::content(pane_id, content_id));
        }

        let contracted = self.detach_content(pane_id, content_id);
        crate::debug_info!(
            "LAYOUT",
            "Closed content '{}' in pane {}{}",
            content_id,
            pane_id,
            if contracted { " (pane removed)" } else { "" }
        );
        self.debug_check("close_content");
        Ok(())
    }

    /// Move content into `to_pane_id` as a tab
    ///
    /// With a source pane the tab's reference is carried over and the source
    /// loses the tab (and is removed if that empties it). Without one the
    /// content is resolved through the registry as a fresh insertion.
    /// Moving within the same pane does nothing.
    pub fn move_content<R>(
        &mut self,
        registry: &R,
        content_id: &str,
        from_pane_id: Option<PaneId>,
        to_pane_id: PaneId,
    ) -> Result<(), LayoutError>
    where
        R: ContentRegistry + ?Sized,
    {
        if self.root.find_pane(to_pane_id).is_none() {
            return Err(LayoutError::pane(to_pane_id));
        }
        if from_pane_id == Some(to_pane_id) {
            log::debug!(
                "Ignoring move of '{}' onto its own pane {}",
                content_id,
                to_pane_id
            );
            return Ok(());
        }

        let reference = match from_pane_id {
            Some(from_id) => self
                .root
                .find_pane(from_id)
                .ok_or_else(|| LayoutError::pane(from_id))?
                .get_tab(content_id)
                .cloned()
                .ok_or_else(|| LayoutError::content(from_id, content_id))?,
            None => {
                let meta = registry
                    .resolve(content_id)
                    .ok_or_else(|| LayoutError::UnresolvableContent(content_id.to_string()))?;
                ContentReference::new(content_id, meta)
            }
        };

        if let Some(destination) = self.root.find_pane_mut(to_pane_id) {
            destination.open(reference);
        }
        self.active_pane_id = to_pane_id;

        if let Some(from_id) = from_pane_id {
            self.detach_content(from_id, content_id);
        }

        crate::debug_info!(
            "LAYOUT",
            "Moved content '{}' from {:?} to pane {}",
            content_id,
            from_pane_id,
            to_pane_id
        );
        self.debug_check("move_content");
        Ok(())
    }

    /// Move the tab at `from_index` to `to_index` within one pane
    ///
    /// `to_index` is clamped to the last position; the active tab is unchanged.
    pub fn reorder_tabs(
        &mut self,
        pane_id: PaneId,
        from_index: usize,
        to_index: usize,
    ) -> Result<(), LayoutError> {
        let pane = self
            .root
            .find_pane_mut(pane_id)
            .ok_or_else(|| LayoutError::pane(pane_id))?;
        if !pane.move_tab(from_index, to_index) {
            return Err(LayoutError::tab_index(pane_id, from_index));
        }
        log::debug!(
            "Reordered tab {} -> {} in pane {}",
            from_index,
            to_index,
            pane_id
        );
        Ok(())
    }

    /// Remove a tab from a pane, removing the pane if that emptied it.
    ///
    /// A pane that was already empty is left alone. Returns true if the pane
    /// was removed.
    pub(super) fn detach_content(&mut self, pane_id: PaneId, content_id: &str) -> bool {
        let emptied = match self.root.find_pane_mut(pane_id) {
            Some(pane) => pane.remove_tab(content_id).is_some() && pane.is_empty(),
            None => false,
        };
        emptied && self.remove_pane_node(pane_id)
    }
}
