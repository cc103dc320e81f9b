//! Default values for configuration fields.
//!
//! Each function is referenced from a `#[serde(default = "...")]` attribute
//! on [`crate::Config`], so a config file only needs to list the settings it
//! overrides.

// Layout geometry
pub fn divider_width() -> f32 {
    1.0 // 1 pixel divider line
}

pub fn divider_hit_width() -> f32 {
    8.0 // Grab area around a divider
}

// Drop-zone classification
pub fn drop_split_threshold() -> f32 {
    0.25 // Trailing 25% of the target splits instead of moving
}

pub fn tab_strip_height() -> f32 {
    32.0
}

pub fn drop_leading_edges() -> bool {
    false // Only right/bottom/center zones by default
}

// Drag gesture timing
pub fn hover_expand_delay_ms() -> u64 {
    600
}
