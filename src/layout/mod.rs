//! Recursive split-pane layout.
//!
//! The layout of a workspace is a binary tree: leaves are panes holding an
//! ordered list of content tabs, interior nodes are splitters dividing their
//! area between two children. [`LayoutEngine`] owns the tree and the active
//! pane and is the only way to change either.

mod engine;
mod error;
pub mod types;

pub use engine::LayoutEngine;
pub use error::{LayoutError, Target};
pub use types::{
    DEFAULT_SPLIT_RATIO, DividerRect, InvariantViolation, LayoutGeometry, LayoutNode, Orientation,
    Pane, PaneBounds, PaneId, RATIO_MAX, RATIO_MIN, SplitPosition, SplitterId, clamp_ratio,
};
