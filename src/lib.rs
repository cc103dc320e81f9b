// Library exports for the layout engine, drag-and-drop glue, and CLI driver

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod cli;
pub mod content;
pub mod drag;
pub mod drop_zone;
pub mod layout;
pub mod workbench;

pub use content::{ContentKind, ContentMeta, ContentReference, ContentRegistry};
pub use drop_zone::{DropZone, DropZoneClassifier, classify_drop};
pub use layout::{LayoutEngine, LayoutError, LayoutNode, Orientation, Pane, SplitPosition};
pub use workbench::{Workbench, WorkbenchEvent};
