#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_object(kind: ObjectKind, layer: i64) -> SceneObject {
    SceneObject {
        id: Uuid::new_v4(),
        kind,
        position: Position::new(0.0, 0.0),
        rotation: 0.0,
        scale: 1.0,
        properties: Properties::new(),
        states: Vec::new(),
        layer,
    }
}

// =============================================================
// ObjectKind serde
// =============================================================

#[test]
fn kind_serde_all_variants() {
    let cases = [
        (ObjectKind::Square, "\"Square\""),
        (ObjectKind::Circle, "\"Circle\""),
        (ObjectKind::Text, "\"Text\""),
        (ObjectKind::Latex, "\"LaTeX\""),
        (ObjectKind::Line, "\"Line\""),
        (ObjectKind::Arrow, "\"Arrow\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        let back: ObjectKind = serde_json::from_str(expected).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn kind_as_str_matches_serde_tag() {
    for kind in ObjectKind::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
    }
}

#[test]
fn kind_deserialize_unknown_rejects() {
    assert!(serde_json::from_str::<ObjectKind>("\"Hexagon\"").is_err());
    assert!(serde_json::from_str::<ObjectKind>("\"square\"").is_err());
}

#[test]
fn library_excludes_line_and_arrow() {
    assert!(!ObjectKind::LIBRARY.contains(&ObjectKind::Line));
    assert!(!ObjectKind::LIBRARY.contains(&ObjectKind::Arrow));
    assert_eq!(ObjectKind::LIBRARY.len(), 4);
}

// =============================================================
// Position
// =============================================================

#[test]
fn position_serializes_as_pair() {
    assert_eq!(serde_json::to_value(Position::new(2.0, -1.0)).unwrap(), json!([2.0, -1.0]));
}

#[test]
fn position_deserializes_from_pair() {
    let p: Position = serde_json::from_value(json!([0.5, 3])).unwrap();
    assert_eq!(p, Position::new(0.5, 3.0));
}

#[test]
fn position_rejects_wrong_arity() {
    assert!(serde_json::from_value::<Position>(json!([1.0])).is_err());
    assert!(serde_json::from_value::<Position>(json!([1.0, 2.0, 3.0])).is_err());
}

#[test]
fn position_point_conversions() {
    let p: Position = Point::new(1.0, 2.0).into();
    assert_eq!(p, Position::new(1.0, 2.0));
    let back: Point = p.into();
    assert_eq!(back, Point::new(1.0, 2.0));
}

// =============================================================
// SceneObject serde
// =============================================================

#[test]
fn object_uses_type_tag_and_document_keys() {
    let obj = make_object(ObjectKind::Latex, 3);
    let value = serde_json::to_value(&obj).unwrap();
    assert_eq!(value["type"], json!("LaTeX"));
    assert_eq!(value["position"], json!([0.0, 0.0]));
    assert_eq!(value["layer"], json!(3));
    assert_eq!(value["states"], json!([]));
    assert!(value.get("kind").is_none());
}

#[test]
fn object_missing_states_defaults_to_empty() {
    let value = json!({
        "id": Uuid::new_v4(),
        "type": "Circle",
        "position": [1.0, 1.0],
        "rotation": 0.0,
        "scale": 1.0,
        "properties": {},
        "layer": 0,
    });
    let obj: SceneObject = serde_json::from_value(value).unwrap();
    assert!(obj.states.is_empty());
}

#[test]
fn object_missing_position_rejects() {
    let value = json!({
        "id": Uuid::new_v4(),
        "type": "Circle",
        "rotation": 0.0,
        "scale": 1.0,
        "properties": {},
        "layer": 0,
    });
    assert!(serde_json::from_value::<SceneObject>(value).is_err());
}

#[test]
fn state_with_transition_serde() {
    let state = ObjectState {
        id: "kf-1".into(),
        timestamp: 1_700_000_000_000.0,
        properties: serde_json::from_value(json!({ "rotation": 90 })).unwrap(),
        transition: Some(TransitionConfig { duration: 1.5, easing: Easing::EaseInOut, delay: None }),
    };
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["transition"], json!({ "duration": 1.5, "easing": "ease-in-out" }));
    let back: ObjectState = serde_json::from_value(value).unwrap();
    assert_eq!(back, state);
}

#[test]
fn state_without_transition_omits_key() {
    let state = ObjectState { id: "kf-2".into(), timestamp: 0.0, properties: Properties::new(), transition: None };
    let value = serde_json::to_value(&state).unwrap();
    assert!(value.get("transition").is_none());
}

#[test]
fn easing_tags() {
    let cases = [
        (Easing::Linear, "linear"),
        (Easing::EaseIn, "ease-in"),
        (Easing::EaseOut, "ease-out"),
        (Easing::EaseInOut, "ease-in-out"),
    ];
    for (easing, tag) in cases {
        assert_eq!(serde_json::to_value(easing).unwrap(), json!(tag));
    }
}

// =============================================================
// Settings and metadata
// =============================================================

#[test]
fn settings_defaults() {
    let s = SceneSettings::default();
    assert_eq!(s.width, 1920);
    assert_eq!(s.height, 1080);
    assert_eq!(s.background_color, "#000000");
    assert_eq!(s.frame_rate, 60);
    assert_eq!(s.quality, Quality::Medium);
}

#[test]
fn settings_use_camel_case_keys() {
    let value = serde_json::to_value(SceneSettings::default()).unwrap();
    assert_eq!(
        value,
        json!({
            "width": 1920,
            "height": 1080,
            "backgroundColor": "#000000",
            "frameRate": 60,
            "quality": "medium",
        })
    );
}

#[test]
fn settings_aspect_ratio() {
    let s = SceneSettings::default();
    assert!((s.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
}

#[test]
fn metadata_touch_keeps_created() {
    let mut meta = SceneMetadata::now();
    meta.modified = OffsetDateTime::UNIX_EPOCH;
    let created = meta.created;
    meta.touch();
    assert_eq!(meta.created, created);
    assert!(meta.modified > OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn metadata_timestamps_are_rfc3339_strings() {
    let meta = SceneMetadata {
        created: OffsetDateTime::UNIX_EPOCH,
        modified: OffsetDateTime::UNIX_EPOCH,
        version: "1.0.0".into(),
    };
    let value = serde_json::to_value(&meta).unwrap();
    assert_eq!(value["created"], json!("1970-01-01T00:00:00Z"));
    assert_eq!(value["version"], json!("1.0.0"));
}

// =============================================================
// Scene
// =============================================================

#[test]
fn new_scene_is_empty_with_defaults() {
    let scene = Scene::new();
    assert!(scene.objects.is_empty());
    assert_eq!(scene.settings, SceneSettings::default());
    assert_eq!(scene.metadata.version, "1.0.0");
    assert_eq!(scene.metadata.created, scene.metadata.modified);
}

#[test]
fn new_scenes_have_distinct_ids() {
    assert_ne!(Scene::new().id, Scene::new().id);
}

#[test]
fn object_lookup_by_id() {
    let mut scene = Scene::new();
    let a = make_object(ObjectKind::Square, 0);
    let a_id = a.id;
    scene.objects.push(a);
    scene.objects.push(make_object(ObjectKind::Text, 1));

    assert!(scene.contains(&a_id));
    assert_eq!(scene.object(&a_id).unwrap().kind, ObjectKind::Square);
    scene.object_mut(&a_id).unwrap().layer = 9;
    assert_eq!(scene.object(&a_id).unwrap().layer, 9);
    assert!(!scene.contains(&Uuid::new_v4()));
}
