//! Scene store: the single owner of the active scene and the session selection.
//!
//! DESIGN
//! ======
//! Every edit goes through [`SceneStore`]. Each successful object mutation
//! stamps `metadata.modified`; operations that target an id not in the scene
//! are absorbed as no-ops, return `false`, and leave the scene (including its
//! timestamps) untouched. Stale references from the UI, such as a double
//! delete, therefore cannot corrupt the scene.
//!
//! The selection is session state. It is stored next to the scene but never
//! inside it, so it never reaches the serialized document.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use crate::factory;
use crate::scene::{ObjectId, ObjectKind, ObjectState, Position, Properties, Scene, SceneObject};

/// Sparse update for a scene object. Only present fields are applied, and each
/// replaces the current value wholesale.
///
/// `properties` replaces the entire property map. To change a single property
/// either send the full map with that key changed, or use
/// [`SceneStore::patch_properties`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectUpdate {
    /// New logical position, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// New rotation in degrees, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New scale factor, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Replacement property map, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    /// Replacement keyframe list, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<ObjectState>>,
    /// New layer, if being updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<i64>,
}

impl ObjectUpdate {
    /// An update that only moves the object.
    #[must_use]
    pub fn position(position: Position) -> Self {
        Self { position: Some(position), ..Default::default() }
    }

    fn apply(&self, obj: &mut SceneObject) {
        if let Some(position) = self.position {
            obj.position = position;
        }
        if let Some(rotation) = self.rotation {
            obj.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            obj.scale = scale;
        }
        if let Some(ref properties) = self.properties {
            obj.properties = properties.clone();
        }
        if let Some(ref states) = self.states {
            obj.states = states.clone();
        }
        if let Some(layer) = self.layer {
            obj.layer = layer;
        }
    }
}

/// The active scene plus the session-local selection.
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    scene: Scene,
    selected_id: Option<ObjectId>,
}

impl SceneStore {
    /// Create a store holding a fresh empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store around an existing scene, with nothing selected.
    #[must_use]
    pub fn with_scene(scene: Scene) -> Self {
        Self { scene, selected_id: None }
    }

    // --- Queries ---

    /// The active scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.scene.objects
    }

    /// Look up an object by id.
    #[must_use]
    pub fn get_object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.scene.object(id)
    }

    /// Number of objects in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scene.objects.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scene.objects.is_empty()
    }

    /// The raw selection pointer. May name an object that no longer exists.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.selected_id
    }

    /// The selected object, or `None` when nothing (or nothing live) is selected.
    #[must_use]
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected_id.and_then(|id| self.scene.object(&id))
    }

    /// Objects sorted by `layer` for drawing; ties keep insertion order.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&SceneObject> {
        let mut objs: Vec<&SceneObject> = self.scene.objects.iter().collect();
        objs.sort_by_key(|o| o.layer);
        objs
    }

    // --- Mutations ---

    /// Create an object of `kind` at a logical position and append it.
    pub fn add_object(&mut self, kind: ObjectKind, position: Position, overrides: Option<Properties>) -> ObjectId {
        let object = factory::create_object(kind, position, overrides);
        let id = object.id;
        self.scene.objects.push(object);
        self.scene.metadata.touch();
        tracing::debug!(%id, kind = kind.as_str(), count = self.scene.objects.len(), "object added");
        id
    }

    /// Apply a sparse update. Returns false if the object doesn't exist.
    pub fn update_object(&mut self, id: &ObjectId, update: &ObjectUpdate) -> bool {
        let Some(obj) = self.scene.object_mut(id) else {
            tracing::debug!(%id, "update ignored: object not found");
            return false;
        };
        update.apply(obj);
        self.scene.metadata.touch();
        tracing::debug!(%id, ?update, "object updated");
        true
    }

    /// Move an object to a new logical position. Returns false if the object doesn't exist.
    pub fn move_object(&mut self, id: &ObjectId, position: Position) -> bool {
        self.update_object(id, &ObjectUpdate::position(position))
    }

    /// Merge `patch` into an object's properties one level deep. Null values
    /// delete keys. Returns false if the object doesn't exist.
    pub fn patch_properties(&mut self, id: &ObjectId, patch: &Properties) -> bool {
        let Some(obj) = self.scene.object_mut(id) else {
            tracing::debug!(%id, "property patch ignored: object not found");
            return false;
        };
        for (k, v) in patch {
            if v.is_null() {
                obj.properties.remove(k);
            } else {
                obj.properties.insert(k.clone(), v.clone());
            }
        }
        self.scene.metadata.touch();
        tracing::debug!(%id, keys = patch.len(), "object properties patched");
        true
    }

    /// Remove an object, clearing the selection if it pointed at it.
    ///
    /// Removing an absent id is a no-op that returns false.
    pub fn delete_object(&mut self, id: &ObjectId) -> bool {
        let before = self.scene.objects.len();
        self.scene.objects.retain(|o| o.id != *id);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        if self.scene.objects.len() == before {
            tracing::debug!(%id, "delete ignored: object not found");
            return false;
        }
        self.scene.metadata.touch();
        tracing::debug!(%id, count = self.scene.objects.len(), "object deleted");
        true
    }

    /// Set or clear the selection. The id is not checked against the scene.
    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selected_id = id;
    }

    /// Replace the scene with a fresh empty one and clear the selection.
    pub fn clear(&mut self) {
        self.scene = Scene::new();
        self.selected_id = None;
        tracing::debug!(scene = %self.scene.id, "scene cleared");
    }

    /// Replace the scene with a loaded one and clear the selection.
    pub fn load_scene(&mut self, scene: Scene) {
        tracing::debug!(scene = %scene.id, count = scene.objects.len(), "scene loaded");
        self.scene = scene;
        self.selected_id = None;
    }
}
