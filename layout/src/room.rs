//! Room model and room-type inference.
//!
//! A [`Room`] is passive data produced upstream (an AI service or the
//! fallback [`crate::grid`]). The engine never mutates rooms; a new room list
//! replaces the old one wholesale.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};

/// A rectangular room in the shared world frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name; also drives [`RoomKind::infer`].
    pub name: String,
    /// Extent along the world X axis, in meters.
    pub width: f64,
    /// Extent along the world Z axis, in meters.
    pub depth: f64,
    /// Ceiling height, in meters.
    pub height: f64,
    /// Center `[x, y, z]`; `y` is usually `height / 2`.
    pub position: [f64; 3],
    /// Display color.
    pub color: String,
}

/// A room field that violates the positive-extent invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoomError {
    #[error("room `{room}`: {field} must be positive, got {value}")]
    NonPositive { room: String, field: &'static str, value: f64 },
    #[error("room `{room}`: {field} must be finite, got {value}")]
    NotFinite { room: String, field: &'static str, value: f64 },
}

impl Room {
    /// Center of the room on the floor plan. Plan `y` is world `z`.
    #[must_use]
    pub fn plan_center(&self) -> (f64, f64) {
        (self.position[0], self.position[2])
    }

    /// Check width, depth and height are positive and every number is finite.
    ///
    /// Placement never calls this; hosts loading untrusted room lists do.
    ///
    /// # Errors
    ///
    /// Returns the first non-positive (or NaN) extent, then the first
    /// infinite extent or non-finite position component.
    pub fn validate(&self) -> Result<(), RoomError> {
        let extents = [("width", self.width), ("depth", self.depth), ("height", self.height)];
        for (field, value) in extents {
            if value.is_nan() || value <= 0.0 {
                return Err(RoomError::NonPositive { room: self.name.clone(), field, value });
            }
        }
        let [x, y, z] = self.position;
        for (field, value) in extents.into_iter().chain([("position.x", x), ("position.y", y), ("position.z", z)]) {
            if !value.is_finite() {
                return Err(RoomError::NotFinite { room: self.name.clone(), field, value });
            }
        }
        Ok(())
    }

    /// The room's inferred kind, if its name matches a known pattern.
    #[must_use]
    pub fn kind(&self) -> Option<RoomKind> {
        RoomKind::infer(&self.name)
    }
}

/// Room types that have a furniture template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Living,
    MasterBedroom,
    Bedroom,
    Kitchen,
    Bathroom,
    Entrance,
    Dining,
    Office,
}

/// Substring patterns checked in order against the lowercased room name.
/// The first match wins, so order decides ambiguous names such as
/// "Master Bedroom" (master) or "Bedroom Office" (bedroom).
const PATTERNS: &[(&str, RoomKind)] = &[
    ("living", RoomKind::Living),
    ("master", RoomKind::MasterBedroom),
    ("bedroom", RoomKind::Bedroom),
    ("kitchen", RoomKind::Kitchen),
    ("bathroom", RoomKind::Bathroom),
    ("entrance", RoomKind::Entrance),
    ("dining", RoomKind::Dining),
    ("office", RoomKind::Office),
    ("study", RoomKind::Office),
];

impl RoomKind {
    /// Infer a room kind from a free-text name.
    #[must_use]
    pub fn infer(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        PATTERNS
            .iter()
            .find(|(pattern, _)| lower.contains(pattern))
            .map(|&(_, kind)| kind)
    }

    /// Whether floors of this kind are tiled rather than planked.
    #[must_use]
    pub fn is_tiled(self) -> bool {
        matches!(self, Self::Kitchen | Self::Bathroom | Self::Entrance)
    }
}
