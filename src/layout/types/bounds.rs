//! `PaneBounds` and `DividerRect`: pixel-space rectangles for layout output.

use super::common::{Orientation, SplitterId};

/// Bounds of a pane in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneBounds {
    /// X position in pixels from the left edge of the workspace area
    pub x: f32,
    /// Y position in pixels from the top of the workspace area
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl PaneBounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside these bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Get the center point of the bounds
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Translate an absolute point into coordinates relative to the top-left corner
    pub fn to_local(&self, px: f32, py: f32) -> (f32, f32) {
        (px - self.x, py - self.y)
    }

    /// Split these bounds between two children.
    ///
    /// `ratio` is the first child's share in percent; the divider takes
    /// `divider_width` pixels out of the split axis before the ratio applies.
    pub fn split(
        &self,
        orientation: Orientation,
        ratio: f32,
        divider_width: f32,
    ) -> (PaneBounds, PaneBounds) {
        let share = ratio / 100.0;
        match orientation {
            Orientation::Horizontal => {
                // Stacked top/bottom
                let first_height = (self.height - divider_width) * share;
                let second_height = self.height - first_height - divider_width;
                (
                    PaneBounds::new(self.x, self.y, self.width, first_height),
                    PaneBounds::new(
                        self.x,
                        self.y + first_height + divider_width,
                        self.width,
                        second_height,
                    ),
                )
            }
            Orientation::Vertical => {
                // Side by side
                let first_width = (self.width - divider_width) * share;
                let second_width = self.width - first_width - divider_width;
                (
                    PaneBounds::new(self.x, self.y, first_width, self.height),
                    PaneBounds::new(
                        self.x + first_width + divider_width,
                        self.y,
                        second_width,
                        self.height,
                    ),
                )
            }
        }
    }
}

/// Divider between the two children of a splitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerRect {
    /// Splitter that owns this divider
    pub splitter_id: SplitterId,
    /// Orientation of the owning splitter
    pub orientation: Orientation,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DividerRect {
    /// Check if a point hits the divider, widened by `padding` on each side
    pub fn contains(&self, px: f32, py: f32, padding: f32) -> bool {
        px >= self.x - padding
            && px < self.x + self.width + padding
            && py >= self.y - padding
            && py < self.y + self.height + padding
    }
}
