//! `Pane`: leaf node holding an ordered tab list and one active selection.

use super::common::PaneId;
use crate::content::{ContentId, ContentReference};

/// A leaf of the layout tree.
///
/// Invariants maintained by every method:
/// - no content id appears twice in `tabs`
/// - `active_content_id` names an element of `tabs`, or is `None` iff `tabs` is empty
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub(crate) id: PaneId,
    pub(crate) tabs: Vec<ContentReference>,
    pub(crate) active_content_id: Option<ContentId>,
}

impl Pane {
    /// Create an empty pane
    pub fn new(id: PaneId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            active_content_id: None,
        }
    }

    /// Create a pane holding a single active tab
    pub fn with_content(id: PaneId, reference: ContentReference) -> Self {
        let active = Some(reference.id.clone());
        Self {
            id,
            tabs: vec![reference],
            active_content_id: active,
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    /// Open tabs in display order
    pub fn tabs(&self) -> &[ContentReference] {
        &self.tabs
    }

    pub fn active_content_id(&self) -> Option<&str> {
        self.active_content_id.as_deref()
    }

    /// The active tab, if any
    pub fn active_content(&self) -> Option<&ContentReference> {
        let active = self.active_content_id.as_deref()?;
        self.tabs.iter().find(|t| t.id == active)
    }

    /// Index of the active tab in `tabs`
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active_content_id.as_deref()?;
        self.tab_index(active)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, content_id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == content_id)
    }

    pub fn tab_index(&self, content_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == content_id)
    }

    pub fn get_tab(&self, content_id: &str) -> Option<&ContentReference> {
        self.tabs.iter().find(|t| t.id == content_id)
    }

    /// Append the reference if it is not open yet and make it active.
    ///
    /// An already-open tab keeps its position and cached metadata.
    pub(crate) fn open(&mut self, reference: ContentReference) {
        let id = reference.id.clone();
        if !self.contains(&id) {
            self.tabs.push(reference);
        }
        self.active_content_id = Some(id);
    }

    /// Make an open tab active. Returns false if the tab is not open.
    pub(crate) fn activate(&mut self, content_id: &str) -> bool {
        if self.contains(content_id) {
            self.active_content_id = Some(content_id.to_string());
            true
        } else {
            false
        }
    }

    /// Remove a tab, reassigning the active tab if it was the one removed.
    ///
    /// The new active tab is the one now at the removed index minus one, else
    /// the new last tab, else none.
    pub(crate) fn remove_tab(&mut self, content_id: &str) -> Option<ContentReference> {
        let idx = self.tab_index(content_id)?;
        let removed = self.tabs.remove(idx);

        if self.active_content_id.as_deref() == Some(content_id) {
            let next = if idx > 0 {
                self.tabs.get(idx - 1)
            } else {
                self.tabs.last()
            };
            self.active_content_id = next.map(|t| t.id.clone());
        }

        Some(removed)
    }

    /// Move the tab at `from` to `to` (clamped to the last index).
    ///
    /// Returns false if `from` is out of range. The active tab keeps its identity.
    pub(crate) fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() {
            return false;
        }
        let target = to.min(self.tabs.len() - 1);
        if target != from {
            let tab = self.tabs.remove(from);
            self.tabs.insert(target, tab);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentMeta;

    fn reference(id: &str) -> ContentReference {
        ContentReference::new(id, ContentMeta::new(id, "code"))
    }

    fn pane_with(ids: &[&str], active: &str) -> Pane {
        let mut pane = Pane::new(1);
        for id in ids {
            pane.open(reference(id));
        }
        assert!(pane.activate(active));
        pane
    }

    fn ids(pane: &Pane) -> Vec<&str> {
        pane.tabs().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn open_appends_once_and_activates() {
        let mut pane = pane_with(&["a", "b"], "a");
        pane.open(reference("a"));
        assert_eq!(ids(&pane), vec!["a", "b"]);
        assert_eq!(pane.active_content_id(), Some("a"));

        pane.open(reference("c"));
        assert_eq!(ids(&pane), vec!["a", "b", "c"]);
        assert_eq!(pane.active_content_id(), Some("c"));
    }

    #[test]
    fn remove_active_middle_tab_selects_previous() {
        let mut pane = pane_with(&["a", "b", "c"], "b");
        assert!(pane.remove_tab("b").is_some());
        assert_eq!(pane.active_content_id(), Some("a"));
    }

    #[test]
    fn remove_active_first_tab_selects_last() {
        let mut pane = pane_with(&["a", "b", "c"], "a");
        pane.remove_tab("a");
        assert_eq!(pane.active_content_id(), Some("c"));
    }

    #[test]
    fn remove_inactive_tab_keeps_active() {
        let mut pane = pane_with(&["a", "b", "c"], "c");
        pane.remove_tab("a");
        assert_eq!(pane.active_content_id(), Some("c"));
        assert_eq!(pane.active_index(), Some(1));
    }

    #[test]
    fn remove_last_tab_clears_active() {
        let mut pane = pane_with(&["a"], "a");
        pane.remove_tab("a");
        assert!(pane.is_empty());
        assert_eq!(pane.active_content_id(), None);
        assert!(pane.remove_tab("a").is_none());
    }

    #[test]
    fn move_tab_permutes_and_clamps() {
        let mut pane = pane_with(&["a", "b", "c", "d"], "b");
        assert!(pane.move_tab(0, 2));
        assert_eq!(ids(&pane), vec!["b", "c", "a", "d"]);
        assert_eq!(pane.active_content_id(), Some("b"));
        assert_eq!(pane.active_index(), Some(0));

        assert!(pane.move_tab(0, 100));
        assert_eq!(ids(&pane), vec!["c", "a", "d", "b"]);

        assert!(!pane.move_tab(4, 0));
        assert_eq!(ids(&pane), vec!["c", "a", "d", "b"]);
    }
}
