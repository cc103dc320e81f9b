//! `LayoutNode`: binary tree structure for arbitrary pane nesting.

use super::common::{Orientation, PaneId, SplitterId, clamp_ratio};
use super::pane::Pane;
use std::fmt;

/// Tree node for pane layout
///
/// The layout tree is a binary tree where:
/// - Leaf nodes contain panes
/// - Split nodes contain exactly two children with an orientation and ratio
///
/// Children are owned by their parent; there are no back references. Ids are
/// only used to address nodes from outside the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// A leaf node containing a pane
    Leaf(Box<Pane>),
    /// A splitter containing two child nodes
    Split {
        /// Unique splitter id
        id: SplitterId,
        /// Orientation of the split
        orientation: Orientation,
        /// Share of the first child in percent, within [5, 95].
        /// Relative to this splitter's own area, not the whole workspace.
        ratio: f32,
        /// First child (top for horizontal, left for vertical)
        first: Box<LayoutNode>,
        /// Second child (bottom for horizontal, right for vertical)
        second: Box<LayoutNode>,
    },
}

impl LayoutNode {
    /// Create a new leaf node with a pane
    pub fn leaf(pane: Pane) -> Self {
        LayoutNode::Leaf(Box::new(pane))
    }

    /// Create a new split node, clamping the ratio into range
    pub fn split(
        id: SplitterId,
        orientation: Orientation,
        ratio: f32,
        first: LayoutNode,
        second: LayoutNode,
    ) -> Self {
        LayoutNode::Split {
            id,
            orientation,
            ratio: clamp_ratio(ratio),
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Id of this node (pane id for leaves, splitter id for splits)
    pub fn id(&self) -> u64 {
        match self {
            LayoutNode::Leaf(pane) => pane.id,
            LayoutNode::Split { id, .. } => *id,
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutNode::Leaf(_))
    }

    /// Get the pane if this is a leaf node
    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            LayoutNode::Leaf(pane) => Some(pane),
            LayoutNode::Split { .. } => None,
        }
    }

    /// Find a pane by ID (recursive)
    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        match self {
            LayoutNode::Leaf(pane) => {
                if pane.id == id {
                    Some(pane)
                } else {
                    None
                }
            }
            LayoutNode::Split { first, second, .. } => {
                first.find_pane(id).or_else(|| second.find_pane(id))
            }
        }
    }

    /// Find a mutable pane by ID (recursive)
    pub(crate) fn find_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        match self {
            LayoutNode::Leaf(pane) => {
                if pane.id == id {
                    Some(pane)
                } else {
                    None
                }
            }
            LayoutNode::Split { first, second, .. } => first
                .find_pane_mut(id)
                .or_else(move || second.find_pane_mut(id)),
        }
    }

    /// Ratio of the splitter with the given id
    pub fn split_ratio(&self, id: SplitterId) -> Option<f32> {
        match self {
            LayoutNode::Leaf(_) => None,
            LayoutNode::Split {
                id: split_id,
                ratio,
                first,
                second,
                ..
            } => {
                if *split_id == id {
                    Some(*ratio)
                } else {
                    first.split_ratio(id).or_else(|| second.split_ratio(id))
                }
            }
        }
    }

    /// Mutable access to the ratio of the splitter with the given id
    pub(crate) fn find_split_ratio_mut(&mut self, id: SplitterId) -> Option<&mut f32> {
        match self {
            LayoutNode::Leaf(_) => None,
            LayoutNode::Split {
                id: split_id,
                ratio,
                first,
                second,
                ..
            } => {
                if *split_id == id {
                    Some(ratio)
                } else {
                    first
                        .find_split_ratio_mut(id)
                        .or_else(move || second.find_split_ratio_mut(id))
                }
            }
        }
    }

    /// Get all pane IDs in this subtree, in pre-order
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        self.all_panes().iter().map(|p| p.id).collect()
    }

    /// Get all panes in this subtree, in pre-order
    pub fn all_panes(&self) -> Vec<&Pane> {
        match self {
            LayoutNode::Leaf(pane) => vec![pane],
            LayoutNode::Split { first, second, .. } => {
                let mut panes = first.all_panes();
                panes.extend(second.all_panes());
                panes
            }
        }
    }

    /// First pane in a pre-order traversal
    pub fn first_pane(&self) -> &Pane {
        match self {
            LayoutNode::Leaf(pane) => pane,
            LayoutNode::Split { first, .. } => first.first_pane(),
        }
    }

    /// Count total number of panes
    pub fn pane_count(&self) -> usize {
        match self {
            LayoutNode::Leaf(_) => 1,
            LayoutNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    /// Count total number of splitters
    pub fn split_count(&self) -> usize {
        match self {
            LayoutNode::Leaf(_) => 0,
            LayoutNode::Split { first, second, .. } => {
                1 + first.split_count() + second.split_count()
            }
        }
    }

    /// Ids of every pane that has the content open, in pre-order
    pub fn panes_containing(&self, content_id: &str) -> Vec<PaneId> {
        self.all_panes()
            .into_iter()
            .filter(|p| p.contains(content_id))
            .map(|p| p.id)
            .collect()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        match self {
            LayoutNode::Leaf(pane) => {
                write!(f, "pane #{} [", pane.id)?;
                for (i, tab) in pane.tabs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&tab.id)?;
                    if pane.active_content_id.as_deref() == Some(tab.id.as_str()) {
                        f.write_str("*")?;
                    }
                }
                writeln!(f, "]")
            }
            LayoutNode::Split {
                id,
                orientation,
                ratio,
                first,
                second,
            } => {
                writeln!(f, "split #{} {} {:.0}%", id, orientation, ratio)?;
                write!(f, "{}├── ", prefix)?;
                first.write_tree(f, &format!("{}│   ", prefix))?;
                write!(f, "{}└── ", prefix)?;
                second.write_tree(f, &format!("{}    ", prefix))
            }
        }
    }
}

/// Indented tree dump; the active tab of each pane is marked with `*`.
impl fmt::Display for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, "")
    }
}
