//! Input model: drop events delivered by the presentation layer.
//!
//! The drag-and-drop layer resolves the pointer to a canvas pixel position
//! and tags the dragged item before handing it over. A [`DropEvent`] is that
//! hand-off in its wire shape; [`DropEvent::intent`] checks that the fields
//! needed for its `eventKind` are present.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::scene::{ObjectId, ObjectKind};
use crate::transform::Point;

/// What kind of item was dropped on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropKind {
    /// A new-object token dragged in from the object library.
    Add,
    /// An object already on the canvas.
    Move,
}

/// A drop on the canvas, as delivered by the drag layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub event_kind: DropKind,
    /// Kind to create. Required for [`DropKind::Add`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_kind: Option<ObjectKind>,
    /// Object being moved. Required for [`DropKind::Move`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<ObjectId>,
    /// Drop point in canvas pixels, relative to the canvas top-left corner.
    pub canvas_pixel_position: Point,
}

/// A validated drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIntent {
    /// Create a new object of this kind.
    Create(ObjectKind),
    /// Move this existing object.
    Move(ObjectId),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventError {
    /// An `add` drop arrived without an `objectKind`.
    #[error("add event is missing objectKind")]
    MissingObjectKind,
    /// A `move` drop arrived without a `targetId`.
    #[error("move event is missing targetId")]
    MissingTargetId,
}

impl DropEvent {
    /// A library token of `kind` dropped at `at`.
    #[must_use]
    pub fn add(kind: ObjectKind, at: Point) -> Self {
        Self { event_kind: DropKind::Add, object_kind: Some(kind), target_id: None, canvas_pixel_position: at }
    }

    /// Existing object `id` dropped at `at`.
    #[must_use]
    pub fn moved(id: ObjectId, at: Point) -> Self {
        Self { event_kind: DropKind::Move, object_kind: None, target_id: Some(id), canvas_pixel_position: at }
    }

    /// Resolve the event into what it asks for.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] when the field required by `event_kind` is absent.
    pub fn intent(&self) -> Result<DropIntent, EventError> {
        match self.event_kind {
            DropKind::Add => self.object_kind.map(DropIntent::Create).ok_or(EventError::MissingObjectKind),
            DropKind::Move => self.target_id.map(DropIntent::Move).ok_or(EventError::MissingTargetId),
        }
    }
}
