//! Interaction controller: turns canvas drops and clicks into store operations.
//!
//! The controller owns the [`SceneStore`] for one editing session together
//! with the current canvas size. Every handler returns the [`Action`]s the
//! host should react to (re-render, highlight, persist). Events that arrive
//! before the canvas has a measurable size are discarded, so the coordinate
//! transform is never run against a zero-area canvas.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::EditorConfig;
use crate::input::{DropEvent, DropIntent};
use crate::scene::{ObjectId, ObjectKind, Position, SceneObject};
use crate::sizing::SizingPolicy;
use crate::store::{ObjectUpdate, SceneStore};
use crate::transform::{CanvasSize, Point};

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectCreated(SceneObject),
    ObjectUpdated { id: ObjectId, fields: ObjectUpdate },
    ObjectDeleted { id: ObjectId },
    SelectionChanged(Option<ObjectId>),
    RenderNeeded,
}

/// Where and how to draw one object on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectView {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// Object center in canvas pixels.
    pub canvas: Point,
    pub rotation: f64,
    pub scale: f64,
    pub layer: i64,
    /// Whether this object is the current selection.
    pub selected: bool,
}

/// Editing-session controller wrapping the scene store.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    pub store: SceneStore,
    pub config: EditorConfig,
    canvas: Option<CanvasSize>,
}

impl InteractionController {
    /// A controller around a fresh empty scene. No canvas size yet.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_store(SceneStore::new(), config)
    }

    /// A controller around an existing store. No canvas size yet.
    #[must_use]
    pub fn with_store(store: SceneStore, config: EditorConfig) -> Self {
        Self { store, config, canvas: None }
    }

    // --- Canvas ---

    /// Re-size the canvas for a container measuring `width` × `height` pixels.
    ///
    /// Padding from the config is removed first, then the sizing policy fits
    /// the render aspect ratio inside the remainder. Returns the new size, or
    /// `None` (and forgets any previous size) when nothing fits.
    pub fn set_container(&mut self, width: f64, height: f64) -> Option<CanvasSize> {
        let policy = SizingPolicy::for_settings(&self.store.scene().settings, &self.config);
        let padding = self.config.container_padding;
        self.canvas = policy.canvas_size(width - padding, height - padding);
        match self.canvas {
            Some(size) => tracing::debug!(width = size.width(), height = size.height(), "canvas resized"),
            None => tracing::debug!(width, height, "container too small for canvas"),
        }
        self.canvas
    }

    /// Set the canvas size directly, bypassing the sizing policy.
    pub fn set_canvas_size(&mut self, size: Option<CanvasSize>) {
        self.canvas = size;
    }

    /// The current canvas size, if the container has been measured.
    #[must_use]
    pub fn canvas_size(&self) -> Option<CanvasSize> {
        self.canvas
    }

    // --- Events ---

    /// Handle a drop of a library token or an existing object.
    pub fn on_drop(&mut self, event: &DropEvent) -> Vec<Action> {
        let Some(canvas) = self.canvas else {
            tracing::warn!(?event, "drop discarded: canvas has no size");
            return Vec::new();
        };
        let intent = match event.intent() {
            Ok(intent) => intent,
            Err(e) => {
                tracing::warn!(error = %e, "drop discarded");
                return Vec::new();
            }
        };

        let position = Position::from(canvas.canvas_to_logical(event.canvas_pixel_position));
        match intent {
            DropIntent::Create(kind) => {
                let id = self.store.add_object(kind, position, None);
                self.store.select(Some(id));
                let mut actions = Vec::with_capacity(3);
                if let Some(obj) = self.store.get_object(&id) {
                    actions.push(Action::ObjectCreated(obj.clone()));
                }
                actions.push(Action::SelectionChanged(Some(id)));
                actions.push(Action::RenderNeeded);
                actions
            }
            DropIntent::Move(id) => {
                if !self.store.move_object(&id, position) {
                    return Vec::new();
                }
                vec![Action::ObjectUpdated { id, fields: ObjectUpdate::position(position) }, Action::RenderNeeded]
            }
        }
    }

    /// Handle a click on empty canvas: clear the selection.
    pub fn on_canvas_click(&mut self) -> Vec<Action> {
        if self.store.selection().is_none() {
            return Vec::new();
        }
        self.store.select(None);
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// Handle a click on an object: select it.
    pub fn on_object_click(&mut self, id: ObjectId) -> Vec<Action> {
        if self.store.selection() == Some(id) {
            return Vec::new();
        }
        self.store.select(Some(id));
        vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// Delete the selected object, if there is a live one.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.store.selected_object().map(|o| o.id) else {
            return Vec::new();
        };
        if !self.store.delete_object(&id) {
            return Vec::new();
        }
        vec![Action::ObjectDeleted { id }, Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected object id, if it still exists.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.store.selected_object().map(|o| o.id)
    }

    /// Canvas placement of every object in draw order. Empty until the
    /// canvas has a size.
    #[must_use]
    pub fn object_views(&self) -> Vec<ObjectView> {
        let Some(canvas) = self.canvas else {
            return Vec::new();
        };
        let selected = self.selection();
        self.store
            .draw_order()
            .into_iter()
            .map(|obj| ObjectView {
                id: obj.id,
                kind: obj.kind,
                canvas: canvas.logical_to_canvas(obj.position.into()),
                rotation: obj.rotation,
                scale: obj.scale,
                layer: obj.layer,
                selected: selected == Some(obj.id),
            })
            .collect()
    }
}
