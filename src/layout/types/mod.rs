//! Core types for the layout tree.
//!
//! Sub-modules:
//! - [`bounds`]: `PaneBounds` and `DividerRect` pixel-space rectangles
//! - [`common`]: ids, `Orientation`, `SplitPosition`, ratio bounds
//! - [`geometry`]: `LayoutGeometry` and pointer hit-testing
//! - [`invariants`]: `InvariantViolation` and the tree checker
//! - [`layout_node`]: `LayoutNode` binary tree
//! - [`pane`]: `Pane` leaf with its tab list

mod bounds;
mod common;
mod geometry;
mod invariants;
mod layout_node;
mod pane;


pub use bounds::{DividerRect, PaneBounds};
pub use common::{
    DEFAULT_SPLIT_RATIO, Orientation, PaneId, RATIO_MAX, RATIO_MIN, SplitPosition, SplitterId,
    clamp_ratio,
};
pub use geometry::LayoutGeometry;
pub use invariants::InvariantViolation;
pub use layout_node::LayoutNode;
pub use pane::Pane;
