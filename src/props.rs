//! Typed per-kind property records over the open `properties` map.
//!
//! The scene document stores properties as a free-form JSON map so that
//! callers can carry extra keys. These records give typed access to the keys
//! each kind is known to use, and supply the defaults the factory writes into
//! new objects. Keys missing from a map read back as the kind's default.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scene::{ObjectKind, Properties, SceneObject};

/// Font weight for text objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SquareProperties {
    pub side_length: f64,
    pub color: String,
    pub fill_opacity: f64,
    pub stroke_width: f64,
    pub stroke_color: String,
}

impl Default for SquareProperties {
    fn default() -> Self {
        Self {
            side_length: 2.0,
            color: "#3B82F6".into(),
            fill_opacity: 0.3,
            stroke_width: 2.0,
            stroke_color: "#1E40AF".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CircleProperties {
    pub radius: f64,
    pub color: String,
    pub fill_opacity: f64,
    pub stroke_width: f64,
    pub stroke_color: String,
}

impl Default for CircleProperties {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: "#EF4444".into(),
            fill_opacity: 0.3,
            stroke_width: 2.0,
            stroke_color: "#DC2626".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProperties {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub weight: FontWeight,
}

impl Default for TextProperties {
    fn default() -> Self {
        Self {
            text: "Text".into(),
            font_size: 24.0,
            font_family: "Arial".into(),
            color: "#FFFFFF".into(),
            weight: FontWeight::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatexProperties {
    pub tex: String,
    pub font_size: f64,
    pub color: String,
}

impl Default for LatexProperties {
    fn default() -> Self {
        Self { tex: "x^2".into(), font_size: 24.0, color: "#FFFFFF".into() }
    }
}

/// Typed properties for one object, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum KindProperties {
    Square(SquareProperties),
    Circle(CircleProperties),
    Text(TextProperties),
    Latex(LatexProperties),
    /// No property schema is defined for lines.
    Line,
    /// No property schema is defined for arrows.
    Arrow,
}

impl KindProperties {
    /// The default properties for `kind`.
    #[must_use]
    pub fn defaults(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Square => Self::Square(SquareProperties::default()),
            ObjectKind::Circle => Self::Circle(CircleProperties::default()),
            ObjectKind::Text => Self::Text(TextProperties::default()),
            ObjectKind::Latex => Self::Latex(LatexProperties::default()),
            ObjectKind::Line => Self::Line,
            ObjectKind::Arrow => Self::Arrow,
        }
    }

    /// Read the typed properties of `kind` out of an open property map.
    ///
    /// Unknown keys are ignored and missing keys take the kind's default.
    ///
    /// # Errors
    ///
    /// Returns the decode error when a known key holds a value of the wrong type.
    pub fn from_map(kind: ObjectKind, props: &Properties) -> Result<Self, serde_json::Error> {
        let value = Value::Object(props.clone());
        Ok(match kind {
            ObjectKind::Square => Self::Square(serde_json::from_value(value)?),
            ObjectKind::Circle => Self::Circle(serde_json::from_value(value)?),
            ObjectKind::Text => Self::Text(serde_json::from_value(value)?),
            ObjectKind::Latex => Self::Latex(serde_json::from_value(value)?),
            ObjectKind::Line => Self::Line,
            ObjectKind::Arrow => Self::Arrow,
        })
    }

    /// Typed view of an object's properties.
    ///
    /// # Errors
    ///
    /// See [`from_map`](Self::from_map).
    pub fn from_object(object: &SceneObject) -> Result<Self, serde_json::Error> {
        Self::from_map(object.kind, &object.properties)
    }

    /// The kind these properties belong to.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Square(_) => ObjectKind::Square,
            Self::Circle(_) => ObjectKind::Circle,
            Self::Text(_) => ObjectKind::Text,
            Self::Latex(_) => ObjectKind::Latex,
            Self::Line => ObjectKind::Line,
            Self::Arrow => ObjectKind::Arrow,
        }
    }

    /// Flatten into the open property map stored on an object.
    #[must_use]
    pub fn to_map(&self) -> Properties {
        let mut map = Properties::new();
        match self {
            Self::Square(p) => {
                map.insert("sideLength".into(), Value::from(p.side_length));
                map.insert("color".into(), Value::from(p.color.as_str()));
                map.insert("fillOpacity".into(), Value::from(p.fill_opacity));
                map.insert("strokeWidth".into(), Value::from(p.stroke_width));
                map.insert("strokeColor".into(), Value::from(p.stroke_color.as_str()));
            }
            Self::Circle(p) => {
                map.insert("radius".into(), Value::from(p.radius));
                map.insert("color".into(), Value::from(p.color.as_str()));
                map.insert("fillOpacity".into(), Value::from(p.fill_opacity));
                map.insert("strokeWidth".into(), Value::from(p.stroke_width));
                map.insert("strokeColor".into(), Value::from(p.stroke_color.as_str()));
            }
            Self::Text(p) => {
                map.insert("text".into(), Value::from(p.text.as_str()));
                map.insert("fontSize".into(), Value::from(p.font_size));
                map.insert("fontFamily".into(), Value::from(p.font_family.as_str()));
                map.insert("color".into(), Value::from(p.color.as_str()));
                map.insert("weight".into(), Value::from(p.weight.as_str()));
            }
            Self::Latex(p) => {
                map.insert("tex".into(), Value::from(p.tex.as_str()));
                map.insert("fontSize".into(), Value::from(p.font_size));
                map.insert("color".into(), Value::from(p.color.as_str()));
            }
            Self::Line | Self::Arrow => {}
        }
        map
    }
}
