#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn room(name: &str) -> Room {
    Room {
        name: name.to_owned(),
        width: 5.0,
        depth: 4.0,
        height: 3.0,
        position: [-2.0, 1.5, -5.0],
        color: "#f5e6d3".to_owned(),
    }
}

// =============================================================
// RoomKind::infer
// =============================================================

#[test]
fn infer_known_names() {
    let cases = [
        ("Living Room", RoomKind::Living),
        ("Master Bedroom", RoomKind::MasterBedroom),
        ("Bedroom 2", RoomKind::Bedroom),
        ("Kitchen", RoomKind::Kitchen),
        ("Bathroom", RoomKind::Bathroom),
        ("Entrance Hall", RoomKind::Entrance),
        ("Dining Room", RoomKind::Dining),
        ("Home Office", RoomKind::Office),
        ("Study", RoomKind::Office),
    ];
    for (name, expected) in cases {
        assert_eq!(RoomKind::infer(name), Some(expected), "{name}");
    }
}

#[test]
fn infer_is_case_insensitive() {
    assert_eq!(RoomKind::infer("KITCHEN"), Some(RoomKind::Kitchen));
    assert_eq!(RoomKind::infer("master suite"), Some(RoomKind::MasterBedroom));
}

#[test]
fn infer_unknown_is_none() {
    assert_eq!(RoomKind::infer("Garage"), None);
    assert_eq!(RoomKind::infer(""), None);
    assert_eq!(RoomKind::infer("Bath"), None);
}

#[test]
fn infer_master_wins_over_bedroom() {
    assert_eq!(RoomKind::infer("Master Bedroom"), Some(RoomKind::MasterBedroom));
}

#[test]
fn infer_bedroom_wins_over_office() {
    assert_eq!(RoomKind::infer("Bedroom Office"), Some(RoomKind::Bedroom));
}

#[test]
fn infer_living_wins_over_dining() {
    assert_eq!(RoomKind::infer("Living/Dining"), Some(RoomKind::Living));
}

#[test]
fn tiled_kinds() {
    assert!(RoomKind::Kitchen.is_tiled());
    assert!(RoomKind::Bathroom.is_tiled());
    assert!(RoomKind::Entrance.is_tiled());
    assert!(!RoomKind::Living.is_tiled());
    assert!(!RoomKind::Bedroom.is_tiled());
}

// =============================================================
// Room
// =============================================================

#[test]
fn plan_center_uses_x_and_z() {
    assert_eq!(room("Kitchen").plan_center(), (-2.0, -5.0));
}

#[test]
fn kind_delegates_to_infer() {
    assert_eq!(room("Kitchen").kind(), Some(RoomKind::Kitchen));
    assert_eq!(room("Garage").kind(), None);
}

#[test]
fn validate_accepts_positive_extents() {
    assert!(room("Kitchen").validate().is_ok());
}

#[test]
fn validate_rejects_zero_width() {
    let mut r = room("Kitchen");
    r.width = 0.0;
    let err = r.validate().unwrap_err();
    assert_eq!(err, RoomError::NonPositive { room: "Kitchen".into(), field: "width", value: 0.0 });
}

#[test]
fn validate_rejects_negative_height() {
    let mut r = room("Hall");
    r.height = -1.0;
    assert!(matches!(r.validate(), Err(RoomError::NonPositive { field: "height", .. })));
}

#[test]
fn validate_rejects_nan_depth() {
    let mut r = room("Hall");
    r.depth = f64::NAN;
    assert!(matches!(r.validate(), Err(RoomError::NonPositive { field: "depth", .. })));
}

#[test]
fn validate_error_message_names_room_and_field() {
    let mut r = room("Hall");
    r.width = -2.0;
    let msg = r.validate().unwrap_err().to_string();
    assert_eq!(msg, "room `Hall`: width must be positive, got -2");
}

#[test]
fn validate_rejects_infinite_width() {
    let mut r = room("Hall");
    r.width = f64::INFINITY;
    assert!(matches!(r.validate(), Err(RoomError::NotFinite { field: "width", .. })));
}

#[test]
fn validate_rejects_non_finite_position() {
    let mut r = room("Hall");
    r.position[2] = f64::NEG_INFINITY;
    let err = r.validate().unwrap_err();
    assert_eq!(err.to_string(), "room `Hall`: position.z must be finite, got -inf");

    r.position = [f64::NAN, 1.5, 0.0];
    assert!(matches!(r.validate(), Err(RoomError::NotFinite { field: "position.x", .. })));
}

#[test]
fn validate_accepts_far_but_finite_position() {
    let mut r = room("Bedroom");
    r.position = [0.0, 1.5, 5.0e15];
    assert!(r.validate().is_ok());
}

#[test]
fn room_deserializes_from_json() {
    let r: Room = serde_json::from_value(json!({
        "name": "Master Bedroom",
        "width": 5,
        "depth": 4,
        "height": 3,
        "position": [-2, 1.5, -5],
        "color": "#f5e6d3",
    }))
    .unwrap();
    assert_eq!(r, room("Master Bedroom"));
}
