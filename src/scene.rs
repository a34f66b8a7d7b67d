//! Scene document model: the scene, its render settings and metadata, and the
//! objects placed in it.
//!
//! These types are the persisted half of the editor state. They serialize to
//! the JSON scene document consumed by the rendering backend (camelCase keys,
//! `type` tag for the object kind, `[x, y]` positions, RFC 3339 timestamps).
//! Session-only state such as the selection lives in [`crate::store`] and is
//! never part of a `Scene`.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::consts::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_FRAME_RATE, DEFAULT_RENDER_HEIGHT, DEFAULT_RENDER_WIDTH, SCENE_FORMAT_VERSION,
};
use crate::transform::Point;

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// Open-ended per-kind property map (`sideLength`, `color`, `text`, ...).
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// The kind of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Filled square sized by `sideLength`.
    Square,
    /// Filled circle sized by `radius`.
    Circle,
    /// Plain text label.
    Text,
    /// Typeset formula from a TeX source string.
    #[serde(rename = "LaTeX")]
    Latex,
    /// Straight line. No default properties are defined.
    Line,
    /// Directed arrow. No default properties are defined.
    Arrow,
}

impl ObjectKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [Self::Square, Self::Circle, Self::Text, Self::Latex, Self::Line, Self::Arrow];

    /// Kinds offered in the object library for drag-to-create.
    pub const LIBRARY: [Self; 4] = [Self::Square, Self::Circle, Self::Text, Self::Latex];

    /// The tag used for this kind in the scene document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Text => "Text",
            Self::Latex => "LaTeX",
            Self::Line => "Line",
            Self::Arrow => "Arrow",
        }
    }
}

/// A position in logical units, encoded as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Point { x: p.x, y: p.y }
    }
}

/// Easing curve tag for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// How an object animates into a keyframe state. Schema only; nothing
/// interprets it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Duration in seconds; non-negative.
    pub duration: f64,
    pub easing: Easing,
    /// Delay in seconds before the transition starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

/// A keyframe recorded on an object for future animation authoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectState {
    pub id: String,
    pub timestamp: f64,
    /// Partial object attributes that apply at this keyframe.
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionConfig>,
}

/// A scene object as stored in the scene and in the scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique identifier within the scene.
    pub id: ObjectId,
    /// Shape, text, or formula kind.
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Center position in logical units.
    pub position: Position,
    /// Rotation in degrees; 0 is upright.
    pub rotation: f64,
    /// Uniform scale factor; 1 is natural size.
    pub scale: f64,
    /// Per-kind properties (colors, sizes, text, ...).
    pub properties: Properties,
    /// Keyframe states, oldest first.
    #[serde(default)]
    pub states: Vec<ObjectState>,
    /// Stacking order; higher values draw above lower ones.
    pub layer: i64,
}

/// Output quality tier for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

/// Render settings for the output video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Background color as a CSS hex string.
    pub background_color: String,
    /// Frames per second.
    pub frame_rate: u32,
    pub quality: Quality,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_RENDER_WIDTH,
            height: DEFAULT_RENDER_HEIGHT,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            frame_rate: DEFAULT_FRAME_RATE,
            quality: Quality::default(),
        }
    }
}

impl SceneSettings {
    /// Output width divided by output height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Creation and modification times plus the document format version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified: OffsetDateTime,
    pub version: String,
}

impl SceneMetadata {
    /// Metadata for a scene created now.
    #[must_use]
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        Self { created: now, modified: now, version: SCENE_FORMAT_VERSION.to_string() }
    }

    /// Mark the scene as modified now. `created` is left untouched.
    pub fn touch(&mut self) {
        self.modified = OffsetDateTime::now_utc();
    }
}

/// The full editable document: objects, render settings, and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: Uuid,
    /// Objects in insertion order. Draw order comes from `layer`.
    pub objects: Vec<SceneObject>,
    pub settings: SceneSettings,
    pub metadata: SceneMetadata,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with default settings and a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            objects: Vec::new(),
            settings: SceneSettings::default(),
            metadata: SceneMetadata::now(),
        }
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == *id)
    }

    /// Return a mutable reference to an object by id.
    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == *id)
    }

    /// Whether an object with `id` is in the scene.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.object(id).is_some()
    }
}
