//! Scene object construction.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use uuid::Uuid;

use crate::props::KindProperties;
use crate::scene::{ObjectKind, Position, Properties, SceneObject};

/// Default property map for `kind`. Empty for kinds without a schema.
#[must_use]
pub fn default_properties(kind: ObjectKind) -> Properties {
    KindProperties::defaults(kind).to_map()
}

/// Build a new object of `kind` at a logical `position`.
///
/// The object gets a fresh id, no rotation, unit scale, layer 0, and no
/// states. Each key in `overrides` replaces the default of the same name;
/// keys the kind does not define are added as-is.
#[must_use]
pub fn create_object(kind: ObjectKind, position: Position, overrides: Option<Properties>) -> SceneObject {
    let mut properties = default_properties(kind);
    if let Some(overrides) = overrides {
        properties.extend(overrides);
    }

    let object = SceneObject {
        id: Uuid::new_v4(),
        kind,
        position,
        rotation: 0.0,
        scale: 1.0,
        properties,
        states: Vec::new(),
        layer: 0,
    };
    tracing::debug!(id = %object.id, kind = kind.as_str(), x = position.x, y = position.y, "object created");
    object
}
