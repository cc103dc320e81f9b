//! Consuming tree rewrites used by the engine.
//!
//! Both helpers take the tree by value and hand back either the rebuilt tree
//! or the untouched original, so ownership of every node stays exclusive.

use crate::layout::types::{
    DEFAULT_SPLIT_RATIO, LayoutNode, Orientation, Pane, PaneId, SplitPosition, SplitterId,
};

/// Result of attempting to remove a pane from the tree
pub(super) enum RemoveResult {
    /// Pane was removed, returning the new subtree (or None if empty)
    Removed(Option<LayoutNode>),
    /// Pane was not found, returning the original tree
    NotFound(LayoutNode),
}

/// Parameters for replacing a leaf with a new splitter.
/// Groups the immutable values passed through recursive calls in `split_node`.
#[derive(Clone, Copy)]
pub(super) struct SplitRequest {
    pub(super) target_id: PaneId,
    pub(super) splitter_id: SplitterId,
    pub(super) orientation: Orientation,
    pub(super) position: SplitPosition,
}

/// Split a node, finding the target pane and replacing it with a splitter
///
/// Returns (new_node, remaining_pane) where remaining_pane is Some if
/// the target was not found in this subtree.
pub(super) fn split_node(
    node: LayoutNode,
    request: &SplitRequest,
    new_pane: Option<Pane>,
) -> (LayoutNode, Option<Pane>) {
    match node {
        LayoutNode::Leaf(pane) => {
            if pane.id != request.target_id {
                return (LayoutNode::Leaf(pane), new_pane);
            }
            let Some(new) = new_pane else {
                return (LayoutNode::Leaf(pane), None);
            };
            let (first, second) = match request.position {
                SplitPosition::Before => (LayoutNode::leaf(new), LayoutNode::Leaf(pane)),
                SplitPosition::After => (LayoutNode::Leaf(pane), LayoutNode::leaf(new)),
            };
            (
                LayoutNode::split(
                    request.splitter_id,
                    request.orientation,
                    DEFAULT_SPLIT_RATIO,
                    first,
                    second,
                ),
                None,
            )
        }
        LayoutNode::Split {
            id,
            orientation,
            ratio,
            first,
            second,
        } => {
            // Try to insert in first child
            let (new_first, remaining) = split_node(*first, request, new_pane);

            if remaining.is_none() {
                // Target was found in first child
                (
                    LayoutNode::Split {
                        id,
                        orientation,
                        ratio,
                        first: Box::new(new_first),
                        second,
                    },
                    None,
                )
            } else {
                // Target not in first, try second
                let (new_second, remaining) = split_node(*second, request, remaining);
                (
                    LayoutNode::Split {
                        id,
                        orientation,
                        ratio,
                        first: Box::new(new_first),
                        second: Box::new(new_second),
                    },
                    remaining,
                )
            }
        }
    }
}

/// Remove a pane from the tree, returning the new tree structure.
///
/// The splitter that parented the removed pane is replaced by its other
/// child, so at most one splitter disappears per call.
pub(super) fn remove_pane(node: LayoutNode, target_id: PaneId) -> RemoveResult {
    match node {
        LayoutNode::Leaf(pane) => {
            if pane.id == target_id {
                RemoveResult::Removed(None)
            } else {
                RemoveResult::NotFound(LayoutNode::Leaf(pane))
            }
        }
        LayoutNode::Split {
            id,
            orientation,
            ratio,
            first,
            second,
        } => match remove_pane(*first, target_id) {
            // First child was the target: the sibling takes this splitter's place
            RemoveResult::Removed(None) => RemoveResult::Removed(Some(*second)),
            RemoveResult::Removed(Some(new_first)) => RemoveResult::Removed(Some(LayoutNode::Split {
                id,
                orientation,
                ratio,
                first: Box::new(new_first),
                second,
            })),
            RemoveResult::NotFound(first_node) => match remove_pane(*second, target_id) {
                RemoveResult::Removed(None) => RemoveResult::Removed(Some(first_node)),
                RemoveResult::Removed(Some(new_second)) => {
                    RemoveResult::Removed(Some(LayoutNode::Split {
                        id,
                        orientation,
                        ratio,
                        first: Box::new(first_node),
                        second: Box::new(new_second),
                    }))
                }
                RemoveResult::NotFound(second_node) => RemoveResult::NotFound(LayoutNode::Split {
                    id,
                    orientation,
                    ratio,
                    first: Box::new(first_node),
                    second: Box::new(second_node),
                }),
            },
        },
    }
}
