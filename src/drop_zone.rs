//! Drop-zone classification for drag-and-drop onto a pane.
//!
//! A pointer over a pane is mapped to the region it lies in: the trailing
//! edges split the pane, the body below the tab strip moves content into
//! it as a tab, and the tab strip itself is not a drop target.

use crate::layout::{Orientation, SplitPosition};
use par_workbench_config::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the width (or height) that forms a split edge
pub const DEFAULT_SPLIT_THRESHOLD: f32 = 0.25;

/// Where a dragged item would land relative to a target pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropZone {
    /// Split the pane, new pane on the left
    Left,
    /// Split the pane, new pane on the right
    Right,
    /// Split the pane, new pane above
    Top,
    /// Split the pane, new pane below
    Bottom,
    /// Open as a tab in the pane
    Center,
    /// Not a drop target (over the tab strip)
    None,
}

impl DropZone {
    /// Split orientation and position for an edge zone, `None` otherwise
    pub fn split_params(self) -> Option<(Orientation, SplitPosition)> {
        match self {
            DropZone::Right => Some((Orientation::Vertical, SplitPosition::After)),
            DropZone::Bottom => Some((Orientation::Horizontal, SplitPosition::After)),
            DropZone::Left => Some((Orientation::Vertical, SplitPosition::Before)),
            DropZone::Top => Some((Orientation::Horizontal, SplitPosition::Before)),
            DropZone::Center | DropZone::None => None,
        }
    }

    pub fn is_split(self) -> bool {
        self.split_params().is_some()
    }
}

impl fmt::Display for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DropZone::Left => "left",
            DropZone::Right => "right",
            DropZone::Top => "top",
            DropZone::Bottom => "bottom",
            DropZone::Center => "center",
            DropZone::None => "none",
        };
        f.write_str(name)
    }
}

/// Classify with the default three-zone convention (right, bottom, center)
///
/// `x`/`y` are relative to the target's top-left corner.
pub fn classify_drop(x: f32, y: f32, width: f32, height: f32, tab_strip_height: f32) -> DropZone {
    DropZoneClassifier::default().classify(x, y, width, height, tab_strip_height)
}

/// Configurable drop-zone classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZoneClassifier {
    /// Edge thickness as a fraction of the target's size
    pub split_threshold: f32,
    /// Also offer left/top split zones
    pub leading_edges: bool,
}

impl Default for DropZoneClassifier {
    fn default() -> Self {
        Self {
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            leading_edges: false,
        }
    }
}

impl DropZoneClassifier {
    pub fn new(split_threshold: f32, leading_edges: bool) -> Self {
        Self {
            split_threshold,
            leading_edges,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.drop_split_threshold, config.drop_leading_edges)
    }

    /// Classify a pointer position relative to the target's top-left corner
    ///
    /// Pointers outside the target and degenerate targets give `None`.
    /// Zones are checked right, bottom, then (if enabled) left and top,
    /// then center.
    pub fn classify(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        tab_strip_height: f32,
    ) -> DropZone {
        let finite = [x, y, width, height, tab_strip_height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return DropZone::None;
        }
        if x < 0.0 || y < 0.0 || x > width || y > height {
            return DropZone::None;
        }

        let t = self.split_threshold;
        if x >= width * (1.0 - t) {
            return DropZone::Right;
        }
        if y >= height * (1.0 - t) {
            return DropZone::Bottom;
        }
        if self.leading_edges {
            if x <= width * t {
                return DropZone::Left;
            }
            if y >= tab_strip_height && y < height * t {
                return DropZone::Top;
            }
        }
        if y > tab_strip_height {
            return DropZone::Center;
        }
        DropZone::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_params() {
        assert_eq!(
            DropZone::Right.split_params(),
            Some((Orientation::Vertical, SplitPosition::After))
        );
        assert_eq!(
            DropZone::Top.split_params(),
            Some((Orientation::Horizontal, SplitPosition::Before))
        );
        assert!(!DropZone::Center.is_split());
        assert!(!DropZone::None.is_split());
    }

    #[test]
    fn test_classifier_from_config() {
        let config = Config {
            drop_leading_edges: true,
            drop_split_threshold: 0.2,
            ..Config::default()
        };
        let classifier = DropZoneClassifier::from_config(&config);
        assert!(classifier.leading_edges);
        assert_eq!(classifier.split_threshold, 0.2);
    }

    #[test]
    fn test_serde_names() {
        let zone: DropZone = serde_yaml_ng::from_str("bottom").unwrap();
        assert_eq!(zone, DropZone::Bottom);
        assert_eq!(DropZone::Center.to_string(), "center");
    }
}
