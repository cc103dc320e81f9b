//! Splitter resizing and geometry for LayoutEngine

use super::LayoutEngine;
use crate::layout::error::LayoutError;
use crate::layout::types::{LayoutGeometry, PaneBounds, SplitterId, clamp_ratio};

impl LayoutEngine {
    /// Current ratio of a splitter, as a percentage for the first child
    pub fn split_ratio(&self, splitter_id: SplitterId) -> Option<f32> {
        self.root.split_ratio(splitter_id)
    }

    /// Set a splitter's ratio, clamped to [5, 95]
    ///
    /// Returns the ratio that was stored. A NaN ratio leaves the splitter
    /// unchanged.
    pub fn resize_splitter(
        &mut self,
        splitter_id: SplitterId,
        ratio: f32,
    ) -> Result<f32, LayoutError> {
        let current = self
            .root
            .find_split_ratio_mut(splitter_id)
            .ok_or_else(|| LayoutError::splitter(splitter_id))?;

        if ratio.is_nan() {
            log::warn!("Ignoring NaN ratio for splitter {}", splitter_id);
            return Ok(*current);
        }

        *current = clamp_ratio(ratio);
        log::trace!(
            "Splitter {} resized to {:.1}% (requested {:.1}%)",
            splitter_id,
            *current,
            ratio
        );
        Ok(*current)
    }

    /// Resize a splitter so its divider follows the pointer at (x, y)
    ///
    /// `bounds` is the area of the whole tree.
    pub fn resize_splitter_to_pointer(
        &mut self,
        splitter_id: SplitterId,
        bounds: PaneBounds,
        divider_width: f32,
        x: f32,
        y: f32,
    ) -> Result<f32, LayoutError> {
        let ratio = self
            .root
            .ratio_from_pointer(splitter_id, bounds, divider_width, x, y)
            .ok_or_else(|| LayoutError::splitter(splitter_id))?;
        self.resize_splitter(splitter_id, ratio)
    }

    /// Pixel rectangles for every pane and divider
    pub fn compute_layout(&self, bounds: PaneBounds, divider_width: f32) -> LayoutGeometry {
        self.root.compute_layout(bounds, divider_width)
    }
}
