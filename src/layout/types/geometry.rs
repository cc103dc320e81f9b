//! Layout geometry: pane rectangles, divider rectangles, and hit tests.

use super::bounds::{DividerRect, PaneBounds};
use super::common::{Orientation, PaneId, SplitterId};
use super::layout_node::LayoutNode;

/// Rectangles for every pane and divider of a tree laid out in a given area
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutGeometry {
    /// Pane rectangles in pre-order
    pub panes: Vec<(PaneId, PaneBounds)>,
    /// Divider rectangles in pre-order of their splitters
    pub dividers: Vec<DividerRect>,
}

impl LayoutGeometry {
    /// Rectangle of a pane
    pub fn pane_bounds(&self, id: PaneId) -> Option<PaneBounds> {
        self.panes
            .iter()
            .find(|(pane_id, _)| *pane_id == id)
            .map(|(_, bounds)| *bounds)
    }

    /// Find the pane at a given pixel position
    pub fn pane_at(&self, x: f32, y: f32) -> Option<(PaneId, PaneBounds)> {
        self.panes
            .iter()
            .find(|(_, bounds)| bounds.contains(x, y))
            .copied()
    }

    /// Find the divider at a given pixel position, with padding for easier grabbing
    pub fn divider_at(&self, x: f32, y: f32, padding: f32) -> Option<&DividerRect> {
        self.dividers.iter().find(|d| d.contains(x, y, padding))
    }
}

impl LayoutNode {
    /// Calculate rectangles for all panes and dividers given the total available area
    ///
    /// This recursively distributes space according to split ratios.
    pub fn compute_layout(&self, bounds: PaneBounds, divider_width: f32) -> LayoutGeometry {
        let mut geometry = LayoutGeometry::default();
        self.compute_layout_recursive(bounds, divider_width, &mut geometry);
        geometry
    }

    fn compute_layout_recursive(
        &self,
        bounds: PaneBounds,
        divider_width: f32,
        geometry: &mut LayoutGeometry,
    ) {
        match self {
            LayoutNode::Leaf(pane) => geometry.panes.push((pane.id, bounds)),
            LayoutNode::Split {
                id,
                orientation,
                ratio,
                first,
                second,
            } => {
                let (first_bounds, second_bounds) = bounds.split(*orientation, *ratio, divider_width);
                let divider = match orientation {
                    // Stacked children: the divider is a horizontal line
                    Orientation::Horizontal => DividerRect {
                        splitter_id: *id,
                        orientation: *orientation,
                        x: bounds.x,
                        y: first_bounds.y + first_bounds.height,
                        width: bounds.width,
                        height: divider_width,
                    },
                    Orientation::Vertical => DividerRect {
                        splitter_id: *id,
                        orientation: *orientation,
                        x: first_bounds.x + first_bounds.width,
                        y: bounds.y,
                        width: divider_width,
                        height: bounds.height,
                    },
                };
                geometry.dividers.push(divider);

                first.compute_layout_recursive(first_bounds, divider_width, geometry);
                second.compute_layout_recursive(second_bounds, divider_width, geometry);
            }
        }
    }

    /// Area occupied by a splitter (both children plus the divider)
    pub fn split_bounds(
        &self,
        target: SplitterId,
        bounds: PaneBounds,
        divider_width: f32,
    ) -> Option<(Orientation, PaneBounds)> {
        match self {
            LayoutNode::Leaf(_) => None,
            LayoutNode::Split {
                id,
                orientation,
                ratio,
                first,
                second,
            } => {
                if *id == target {
                    return Some((*orientation, bounds));
                }
                let (first_bounds, second_bounds) = bounds.split(*orientation, *ratio, divider_width);
                first
                    .split_bounds(target, first_bounds, divider_width)
                    .or_else(|| second.split_bounds(target, second_bounds, divider_width))
            }
        }
    }

    /// Convert a pointer position into a raw ratio for a splitter.
    ///
    /// The result is not clamped; `LayoutEngine::resize_splitter` clamps it.
    pub fn ratio_from_pointer(
        &self,
        target: SplitterId,
        bounds: PaneBounds,
        divider_width: f32,
        x: f32,
        y: f32,
    ) -> Option<f32> {
        let (orientation, area) = self.split_bounds(target, bounds, divider_width)?;
        // Ratios apply to the extent left after the divider
        let raw = match orientation {
            // Horizontal split: pointer Y position determines ratio
            Orientation::Horizontal if area.height - divider_width > 0.0 => {
                (y - area.y) / (area.height - divider_width)
            }
            // Vertical split: pointer X position determines ratio
            Orientation::Vertical if area.width - divider_width > 0.0 => {
                (x - area.x) / (area.width - divider_width)
            }
            _ => return None,
        };
        Some(raw * 100.0)
    }
}
