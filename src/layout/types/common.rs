//! Shared ids, enums, and ratio bounds for the layout tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a pane (leaf node)
pub type PaneId = u64;

/// Unique identifier of a splitter (internal node)
///
/// Panes and splitters draw from the same id sequence, so an id never names
/// two nodes at once.
pub type SplitterId = u64;

/// Smallest share (in percent) the first child of a splitter may take
pub const RATIO_MIN: f32 = 5.0;
/// Largest share (in percent) the first child of a splitter may take
pub const RATIO_MAX: f32 = 95.0;
/// Ratio assigned to every freshly created splitter
pub const DEFAULT_SPLIT_RATIO: f32 = 50.0;

/// Clamp a raw ratio into `[RATIO_MIN, RATIO_MAX]`
pub fn clamp_ratio(raw: f32) -> f32 {
    raw.clamp(RATIO_MIN, RATIO_MAX)
}

/// Orientation of a splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children are stacked (first on top, second below)
    Horizontal,
    /// Children are side by side (first on the left, second on the right)
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Where a split places the new pane relative to the pane being split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPosition {
    /// New pane becomes the first child
    Before,
    /// New pane becomes the second child
    After,
}
