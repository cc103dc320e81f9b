//! Discrete input events a workbench reacts to.
//!
//! Events are plain data so a session can be scripted in YAML:
//!
//! ```yaml
//! - event: open
//!   content: notes.md
//! - event: split
//!   pane: 1
//!   content: chat
//!   orientation: vertical
//!   position: after
//! ```

use crate::content::ContentId;
use crate::drop_zone::DropZone;
use crate::layout::{Orientation, PaneId, SplitPosition, SplitterId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkbenchEvent {
    /// Click inside a pane
    Focus { pane: PaneId },
    /// Open content in `pane`, or in the active pane when omitted
    Open {
        #[serde(default)]
        pane: Option<PaneId>,
        content: ContentId,
    },
    /// Click on a tab
    Activate { pane: PaneId, content: ContentId },
    /// Close button on a tab
    CloseTab { pane: PaneId, content: ContentId },
    ClosePane { pane: PaneId },
    /// Tab dragged within its own tab strip
    Reorder { pane: PaneId, from: usize, to: usize },
    /// Set a splitter ratio directly
    Resize { splitter: SplitterId, ratio: f32 },
    /// Divider dragged to an absolute pointer position
    ResizeDrag { splitter: SplitterId, x: f32, y: f32 },
    Split {
        pane: PaneId,
        content: ContentId,
        orientation: Orientation,
        position: SplitPosition,
        #[serde(default)]
        source: Option<PaneId>,
    },
    Move {
        content: ContentId,
        #[serde(default)]
        from: Option<PaneId>,
        to: PaneId,
    },
    DragBegin {
        content: ContentId,
        #[serde(default)]
        source: Option<PaneId>,
    },
    /// Drag pointer moved to an absolute position
    DragHover { x: f32, y: f32 },
    /// Drag pointer is over a collapsible region
    DragHoverRegion { region: String },
    DragLeave,
    /// Drag released at an absolute position
    DragDrop { x: f32, y: f32 },
    /// Drag released on a pane with an already-classified zone
    DragDropOn { pane: PaneId, zone: DropZone },
    DragCancel,
}

impl WorkbenchEvent {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            WorkbenchEvent::Focus { .. } => "focus",
            WorkbenchEvent::Open { .. } => "open",
            WorkbenchEvent::Activate { .. } => "activate",
            WorkbenchEvent::CloseTab { .. } => "close_tab",
            WorkbenchEvent::ClosePane { .. } => "close_pane",
            WorkbenchEvent::Reorder { .. } => "reorder",
            WorkbenchEvent::Resize { .. } => "resize",
            WorkbenchEvent::ResizeDrag { .. } => "resize_drag",
            WorkbenchEvent::Split { .. } => "split",
            WorkbenchEvent::Move { .. } => "move",
            WorkbenchEvent::DragBegin { .. } => "drag_begin",
            WorkbenchEvent::DragHover { .. } => "drag_hover",
            WorkbenchEvent::DragHoverRegion { .. } => "drag_hover_region",
            WorkbenchEvent::DragLeave => "drag_leave",
            WorkbenchEvent::DragDrop { .. } => "drag_drop",
            WorkbenchEvent::DragDropOn { .. } => "drag_drop_on",
            WorkbenchEvent::DragCancel => "drag_cancel",
        }
    }
}
