//! Glue between input events, the drag gesture, and the layout engine.
//!
//! A [`Workbench`] owns one layout engine together with the content registry
//! that resolves ids, the drag state, and the pixel viewport the tree is laid
//! out in. Pointer-based events are hit-tested against the current geometry
//! before they reach the engine.

mod events;

pub use events::WorkbenchEvent;

use crate::content::ContentRegistry;
use crate::drag::{DragError, DragPhase, DropIntent, HoverTarget};
use crate::drop_zone::{DropZone, DropZoneClassifier};
use crate::layout::{DividerRect, LayoutEngine, LayoutError, LayoutGeometry, PaneBounds, PaneId};
use par_workbench_config::Config;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkbenchError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Drag(#[from] DragError),
}

pub struct Workbench<R: ContentRegistry> {
    engine: LayoutEngine,
    registry: R,
    drag: DragPhase,
    classifier: DropZoneClassifier,
    config: Config,
    /// Area the whole tree is laid out in
    viewport: PaneBounds,
}

impl<R: ContentRegistry> Workbench<R> {
    pub fn new(registry: R, config: Config, viewport: PaneBounds) -> Self {
        Self {
            engine: LayoutEngine::new(),
            registry,
            drag: DragPhase::Idle,
            classifier: DropZoneClassifier::from_config(&config),
            config,
            viewport,
        }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn drag(&self) -> &DragPhase {
        &self.drag
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn viewport(&self) -> PaneBounds {
        self.viewport
    }

    /// Called when the host window is resized
    pub fn set_viewport(&mut self, viewport: PaneBounds) {
        self.viewport = viewport;
    }

    /// Pane and divider rectangles for the current tree
    pub fn geometry(&self) -> LayoutGeometry {
        self.engine
            .compute_layout(self.viewport, self.config.divider_width)
    }

    /// Divider under the pointer, using the configured hit width
    pub fn divider_at(&self, x: f32, y: f32) -> Option<DividerRect> {
        self.geometry()
            .divider_at(x, y, self.config.divider_hit_padding())
            .copied()
    }

    /// Pane under the pointer and the drop zone the pointer is in
    pub fn drop_target_at(&self, x: f32, y: f32) -> Option<(PaneId, DropZone)> {
        let (pane_id, bounds) = self.geometry().pane_at(x, y)?;
        let (local_x, local_y) = bounds.to_local(x, y);
        let zone = self.classifier.classify(
            local_x,
            local_y,
            bounds.width,
            bounds.height,
            self.config.tab_strip_height,
        );
        Some((pane_id, zone))
    }

    /// Region the drag has hovered over long enough to auto-expand
    pub fn auto_expand_due(&self, now: Instant) -> Option<&str> {
        self.drag
            .auto_expand_due(now, self.config.hover_expand_delay())
    }

    /// Apply one event using the current time
    pub fn handle(&mut self, event: WorkbenchEvent) -> Result<(), WorkbenchError> {
        self.handle_at(event, Instant::now())
    }

    /// Apply one event
    ///
    /// A rejected event leaves the layout unchanged.
    pub fn handle_at(&mut self, event: WorkbenchEvent, now: Instant) -> Result<(), WorkbenchError> {
        crate::debug_log!("WORKBENCH", "Handling {:?}", event);
        match event {
            WorkbenchEvent::Focus { pane } => self.engine.focus_pane(pane)?,
            WorkbenchEvent::Open {
                pane: Some(pane),
                content,
            } => self.engine.open_content(&self.registry, pane, &content)?,
            WorkbenchEvent::Open {
                pane: None,
                content,
            } => {
                self.engine.open_in_active(&self.registry, &content)?;
            }
            WorkbenchEvent::Activate { pane, content } => {
                self.engine.activate_content(pane, &content)?
            }
            WorkbenchEvent::CloseTab { pane, content } => {
                self.engine.close_content(pane, &content)?
            }
            WorkbenchEvent::ClosePane { pane } => self.engine.close_pane(pane)?,
            WorkbenchEvent::Reorder { pane, from, to } => {
                self.engine.reorder_tabs(pane, from, to)?
            }
            WorkbenchEvent::Resize { splitter, ratio } => {
                self.engine.resize_splitter(splitter, ratio)?;
            }
            WorkbenchEvent::ResizeDrag { splitter, x, y } => {
                self.engine.resize_splitter_to_pointer(
                    splitter,
                    self.viewport,
                    self.config.divider_width,
                    x,
                    y,
                )?;
            }
            WorkbenchEvent::Split {
                pane,
                content,
                orientation,
                position,
                source,
            } => {
                self.engine.split_pane(
                    &self.registry,
                    pane,
                    &content,
                    orientation,
                    position,
                    source,
                )?;
            }
            WorkbenchEvent::Move { content, from, to } => {
                self.engine
                    .move_content(&self.registry, &content, from, to)?
            }
            WorkbenchEvent::DragBegin { content, source } => self.drag.begin(content, source)?,
            WorkbenchEvent::DragHover { x, y } => match self.drop_target_at(x, y) {
                Some((pane_id, zone)) => self
                    .drag
                    .hover(HoverTarget::Pane { pane_id, zone }, now)?,
                None => self.drag.leave()?,
            },
            WorkbenchEvent::DragHoverRegion { region } => {
                self.drag.hover(HoverTarget::Region(region), now)?
            }
            WorkbenchEvent::DragLeave => self.drag.leave()?,
            WorkbenchEvent::DragDrop { x, y } => match self.drop_target_at(x, y) {
                Some((pane_id, zone)) => {
                    let intent = self.drag.drop(pane_id, zone)?;
                    self.apply_drop(intent)?;
                }
                None => {
                    // Released outside every pane
                    self.drag.cancel()?;
                }
            },
            WorkbenchEvent::DragDropOn { pane, zone } => {
                let intent = self.drag.drop(pane, zone)?;
                self.apply_drop(intent)?;
            }
            WorkbenchEvent::DragCancel => self.drag.cancel()?,
        }
        Ok(())
    }

    /// Perform the layout change a drop asks for
    ///
    /// Edge zones split the target pane; the center zone moves the content
    /// into it as a tab.
    pub fn apply_drop(&mut self, intent: Option<DropIntent>) -> Result<(), LayoutError> {
        let Some(intent) = intent else {
            return Ok(());
        };
        crate::debug_info!(
            "WORKBENCH",
            "Applying drop of '{}' on pane {} ({})",
            intent.content_id,
            intent.target_pane_id,
            intent.zone
        );
        match intent.zone.split_params() {
            Some((orientation, position)) => {
                self.engine.split_pane(
                    &self.registry,
                    intent.target_pane_id,
                    &intent.content_id,
                    orientation,
                    position,
                    intent.source_pane_id,
                )?;
            }
            None if intent.zone == DropZone::Center => {
                self.engine.move_content(
                    &self.registry,
                    &intent.content_id,
                    intent.source_pane_id,
                    intent.target_pane_id,
                )?;
            }
            None => {}
        }
        Ok(())
    }
}
