//! Scene document codec.
//!
//! Encodes a [`Scene`] as pretty-printed JSON and decodes it back. Timestamps
//! travel as RFC 3339 strings and come back as [`time::OffsetDateTime`]
//! values. Decoding is strict: malformed JSON, a missing required field, an
//! unknown object `type`, or a repeated object id is an error rather than a
//! silently defaulted scene.

#[cfg(test)]
#[path = "serializer_test.rs"]
mod serializer_test;

use std::collections::HashSet;

use crate::scene::{ObjectId, Scene};

/// Error returned by [`serialize`] and [`deserialize`].
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The text is not a well-formed scene document.
    #[error("failed to decode scene: {0}")]
    Decode(#[source] serde_json::Error),
    /// Two objects in the document share an id.
    #[error("duplicate object id in scene: {0}")]
    DuplicateObjectId(ObjectId),
    /// The scene could not be encoded (for example, a timestamp outside the RFC 3339 range).
    #[error("failed to encode scene: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Encode a scene as a JSON document.
///
/// # Errors
///
/// Returns [`SceneError::Encode`] if a field has no JSON representation.
pub fn serialize(scene: &Scene) -> Result<String, SceneError> {
    let text = serde_json::to_string_pretty(scene).map_err(SceneError::Encode)?;
    tracing::debug!(scene = %scene.id, objects = scene.objects.len(), bytes = text.len(), "scene serialized");
    Ok(text)
}

/// Decode a scene from a JSON document.
///
/// # Errors
///
/// Returns [`SceneError::Decode`] for malformed or incomplete documents and
/// [`SceneError::DuplicateObjectId`] when object ids repeat.
pub fn deserialize(text: &str) -> Result<Scene, SceneError> {
    let scene: Scene = serde_json::from_str(text).map_err(SceneError::Decode)?;

    let mut seen = HashSet::with_capacity(scene.objects.len());
    for obj in &scene.objects {
        if !seen.insert(obj.id) {
            return Err(SceneError::DuplicateObjectId(obj.id));
        }
    }

    tracing::debug!(scene = %scene.id, objects = scene.objects.len(), "scene deserialized");
    Ok(scene)
}
