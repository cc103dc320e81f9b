//! Drag gesture state for moving content between panes.
//!
//! A gesture is `Idle -> Dragging -> Idle`. Hover updates are ephemeral UI
//! feedback; the layout tree is only touched when the [`DropIntent`]
//! returned by [`DragPhase::drop`] is applied.
//!
//! Time is passed in explicitly so that hover-to-expand can be tested
//! without sleeping.

use crate::content::ContentId;
use crate::drop_zone::DropZone;
use crate::layout::PaneId;
use std::time::{Duration, Instant};
use thiserror::Error;

/// What the pointer is over during a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// A pane, and the zone of it the pointer is in
    Pane { pane_id: PaneId, zone: DropZone },
    /// A collapsible UI region (sidebar section, folder) that may auto-expand
    Region(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverState {
    pub target: HoverTarget,
    /// When the pointer started hovering over `target`
    pub since: Instant,
}

/// An in-progress drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    pub content_id: ContentId,
    /// Pane the content is dragged out of; `None` for a fresh insertion
    pub source_pane_id: Option<PaneId>,
    pub hover: Option<HoverState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragGesture),
}

/// The layout change a completed drag asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIntent {
    pub content_id: ContentId,
    pub source_pane_id: Option<PaneId>,
    pub target_pane_id: PaneId,
    pub zone: DropZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("a drag of '{0}' is already in progress")]
    AlreadyDragging(ContentId),

    #[error("no drag is in progress")]
    NotDragging,
}

impl DragPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        match self {
            DragPhase::Dragging(gesture) => Some(gesture),
            DragPhase::Idle => None,
        }
    }

    /// Start dragging `content_id`
    pub fn begin(
        &mut self,
        content_id: impl Into<ContentId>,
        source_pane_id: Option<PaneId>,
    ) -> Result<(), DragError> {
        if let DragPhase::Dragging(gesture) = self {
            return Err(DragError::AlreadyDragging(gesture.content_id.clone()));
        }
        let content_id = content_id.into();
        crate::debug_log!(
            "DRAG",
            "Drag started: content='{}' source={:?}",
            content_id,
            source_pane_id
        );
        *self = DragPhase::Dragging(DragGesture {
            content_id,
            source_pane_id,
            hover: None,
        });
        Ok(())
    }

    /// Record what the pointer is over
    ///
    /// The hover start time is kept while the target stays the same, so a
    /// pointer resting on a region accumulates hover time.
    pub fn hover(&mut self, target: HoverTarget, now: Instant) -> Result<(), DragError> {
        let DragPhase::Dragging(gesture) = self else {
            return Err(DragError::NotDragging);
        };
        let unchanged = gesture
            .hover
            .as_ref()
            .is_some_and(|hover| hover.target == target);
        if !unchanged {
            crate::debug_trace!("DRAG", "Hover target now {:?}", target);
            gesture.hover = Some(HoverState { target, since: now });
        }
        Ok(())
    }

    /// The pointer left every drop target
    pub fn leave(&mut self) -> Result<(), DragError> {
        match self {
            DragPhase::Dragging(gesture) => {
                gesture.hover = None;
                Ok(())
            }
            DragPhase::Idle => Err(DragError::NotDragging),
        }
    }

    /// Release over `target_pane_id` in `zone`, ending the gesture
    ///
    /// Returns `None` when the zone is not a drop target.
    pub fn drop(
        &mut self,
        target_pane_id: PaneId,
        zone: DropZone,
    ) -> Result<Option<DropIntent>, DragError> {
        let DragPhase::Dragging(gesture) = std::mem::take(self) else {
            return Err(DragError::NotDragging);
        };
        crate::debug_log!(
            "DRAG",
            "Dropped '{}' on pane {} zone {}",
            gesture.content_id,
            target_pane_id,
            zone
        );
        if zone == DropZone::None {
            return Ok(None);
        }
        Ok(Some(DropIntent {
            content_id: gesture.content_id,
            source_pane_id: gesture.source_pane_id,
            target_pane_id,
            zone,
        }))
    }

    /// Abandon the gesture without touching the layout
    pub fn cancel(&mut self) -> Result<(), DragError> {
        match std::mem::take(self) {
            DragPhase::Dragging(gesture) => {
                crate::debug_log!("DRAG", "Drag of '{}' cancelled", gesture.content_id);
                Ok(())
            }
            DragPhase::Idle => Err(DragError::NotDragging),
        }
    }

    /// Region to auto-expand, once the pointer has rested on it for `delay`
    pub fn auto_expand_due(&self, now: Instant, delay: Duration) -> Option<&str> {
        let hover = self.gesture()?.hover.as_ref()?;
        match &hover.target {
            HoverTarget::Region(region) if now.saturating_duration_since(hover.since) >= delay => {
                Some(region)
            }
            _ => None,
        }
    }
}
