//! Placement rules: derive a room's initial furniture from its type and size.
//!
//! Each [`RoomKind`] has a hand-authored template. A template entry places
//! one item at a fraction of the room's width/depth from the room center,
//! with a footprint that is either fixed or proportional to the room.
//! Negative depth fractions point toward the back wall.
//!
//! Placement is pure and deterministic: the same room, index and
//! configuration always yield the same list. There is no collision
//! detection and no clamping to the room bounds.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use tracing::debug;

use crate::furniture::{FurnitureItem, FurnitureKind, FurnitureKind as K};
use crate::room::{Room, RoomKind};
use crate::style::DesignConfig;
use Span::{Depth, Fixed, Width};

// Palette slots, see `style::PRESETS`.
const UPHOLSTERY: usize = 0;
const WOOD: usize = 1;
const ACCENT: usize = 2;
const LINEN: usize = 3;
const FIXTURE: usize = 4;
const GREENERY: usize = 5;

/// One footprint extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span {
    /// Fixed size in meters.
    Fixed(f64),
    /// Fraction of the room width.
    Width(f64),
    /// Fraction of the room depth.
    Depth(f64),
}

impl Span {
    fn resolve(self, room: &Room) -> f64 {
        match self {
            Self::Fixed(m) => m,
            Self::Width(f) => room.width * f,
            Self::Depth(f) => room.depth * f,
        }
    }
}

/// A single template entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: FurnitureKind,
    /// Appended to the room index to form the item id; unique per template.
    pub suffix: &'static str,
    /// Center offset as a fraction of room width.
    pub dx: f64,
    /// Center offset as a fraction of room depth.
    pub dy: f64,
    pub width: Span,
    pub height: Span,
    pub rotation: f64,
    /// Palette slot passed to [`DesignConfig::tint`].
    pub slot: usize,
}

const fn at(
    kind: FurnitureKind,
    suffix: &'static str,
    (dx, dy): (f64, f64),
    (width, height): (Span, Span),
    rotation: f64,
    slot: usize,
) -> Placement {
    Placement { kind, suffix, dx, dy, width, height, rotation, slot }
}

const LIVING: &[Placement] = &[
    at(K::Rug, "rug", (0.0, 0.05), (Width(0.6), Depth(0.45)), 0.0, ACCENT),
    at(K::Sofa, "sofa", (0.0, 0.25), (Width(0.5), Fixed(0.9)), 0.0, UPHOLSTERY),
    at(K::CoffeeTable, "coffee-table", (0.0, 0.0), (Fixed(1.1), Fixed(0.6)), 0.0, WOOD),
    at(K::TvUnit, "tv-unit", (0.0, -0.4), (Width(0.4), Fixed(0.45)), 0.0, WOOD),
    at(K::Armchair, "armchair", (-0.35, 0.0), (Fixed(0.8), Fixed(0.8)), 90.0, UPHOLSTERY),
    at(K::Plant, "plant", (0.4, -0.4), (Fixed(0.5), Fixed(0.5)), 0.0, GREENERY),
];

const MASTER_BEDROOM: &[Placement] = &[
    at(K::Rug, "rug", (0.0, -0.05), (Width(0.55), Depth(0.5)), 0.0, ACCENT),
    at(K::Bed, "bed", (0.0, -0.2), (Fixed(1.8), Fixed(2.0)), 0.0, LINEN),
    at(K::Nightstand, "nightstand-left", (-0.25, -0.35), (Fixed(0.5), Fixed(0.45)), 0.0, WOOD),
    at(K::Nightstand, "nightstand-right", (0.25, -0.35), (Fixed(0.5), Fixed(0.45)), 0.0, WOOD),
    at(K::Wardrobe, "wardrobe", (0.3, 0.38), (Fixed(1.5), Fixed(0.6)), 180.0, WOOD),
    at(K::Dresser, "dresser", (-0.3, 0.4), (Fixed(1.0), Fixed(0.5)), 180.0, WOOD),
    at(K::Plant, "plant", (-0.42, -0.42), (Fixed(0.4), Fixed(0.4)), 0.0, GREENERY),
];

const BEDROOM: &[Placement] = &[
    at(K::Bed, "bed", (0.0, -0.2), (Fixed(1.4), Fixed(2.0)), 0.0, LINEN),
    at(K::Nightstand, "nightstand", (-0.3, -0.35), (Fixed(0.45), Fixed(0.4)), 0.0, WOOD),
    at(K::Wardrobe, "wardrobe", (0.35, 0.38), (Fixed(1.2), Fixed(0.6)), 180.0, WOOD),
    at(K::Desk, "desk", (-0.3, 0.38), (Fixed(1.0), Fixed(0.5)), 180.0, WOOD),
    at(K::Chair, "chair", (-0.3, 0.25), (Fixed(0.45), Fixed(0.45)), 0.0, UPHOLSTERY),
];

const KITCHEN: &[Placement] = &[
    at(K::KitchenCounter, "counter", (0.0, -0.4), (Width(0.8), Fixed(0.6)), 0.0, FIXTURE),
    at(K::Refrigerator, "refrigerator", (-0.4, -0.4), (Fixed(0.7), Fixed(0.7)), 0.0, FIXTURE),
    at(K::Sink, "sink", (-0.1, -0.4), (Fixed(0.6), Fixed(0.5)), 0.0, FIXTURE),
    at(K::Stove, "stove", (0.2, -0.4), (Fixed(0.6), Fixed(0.6)), 0.0, FIXTURE),
    at(K::DiningTable, "table", (0.0, 0.2), (Fixed(1.2), Fixed(0.8)), 0.0, WOOD),
    at(K::Chair, "chair-left", (-0.25, 0.2), (Fixed(0.45), Fixed(0.45)), 90.0, UPHOLSTERY),
    at(K::Chair, "chair-right", (0.25, 0.2), (Fixed(0.45), Fixed(0.45)), 270.0, UPHOLSTERY),
];

const BATHROOM: &[Placement] = &[
    at(K::Rug, "mat", (0.0, 0.05), (Fixed(0.8), Fixed(0.5)), 0.0, ACCENT),
    at(K::Bathtub, "bathtub", (0.0, -0.35), (Fixed(1.7), Fixed(0.75)), 0.0, FIXTURE),
    at(K::Toilet, "toilet", (0.3, 0.25), (Fixed(0.4), Fixed(0.6)), 180.0, FIXTURE),
    at(K::Sink, "sink", (-0.3, 0.3), (Fixed(0.6), Fixed(0.45)), 180.0, FIXTURE),
];

const ENTRANCE: &[Placement] = &[
    at(K::Rug, "rug", (0.0, 0.0), (Width(0.5), Depth(0.5)), 0.0, ACCENT),
    at(K::CoatRack, "coat-rack", (-0.3, -0.3), (Fixed(0.5), Fixed(0.5)), 0.0, WOOD),
    at(K::ShoeRack, "shoe-rack", (0.3, -0.35), (Fixed(0.8), Fixed(0.35)), 0.0, WOOD),
    at(K::Bench, "bench", (0.3, 0.2), (Fixed(1.0), Fixed(0.4)), 0.0, UPHOLSTERY),
    at(K::Plant, "plant", (-0.35, 0.35), (Fixed(0.4), Fixed(0.4)), 0.0, GREENERY),
];

const DINING: &[Placement] = &[
    at(K::Rug, "rug", (0.0, 0.0), (Width(0.65), Depth(0.6)), 0.0, ACCENT),
    at(K::DiningTable, "table", (0.0, 0.0), (Width(0.45), Depth(0.35)), 0.0, WOOD),
    at(K::Chair, "chair-north", (0.0, -0.28), (Fixed(0.45), Fixed(0.45)), 0.0, UPHOLSTERY),
    at(K::Chair, "chair-south", (0.0, 0.28), (Fixed(0.45), Fixed(0.45)), 180.0, UPHOLSTERY),
    at(K::Chair, "chair-west", (-0.3, 0.0), (Fixed(0.45), Fixed(0.45)), 270.0, UPHOLSTERY),
    at(K::Chair, "chair-east", (0.3, 0.0), (Fixed(0.45), Fixed(0.45)), 90.0, UPHOLSTERY),
    at(K::Plant, "plant", (0.42, -0.42), (Fixed(0.45), Fixed(0.45)), 0.0, GREENERY),
];

const OFFICE: &[Placement] = &[
    at(K::Desk, "desk", (0.0, -0.35), (Fixed(1.4), Fixed(0.7)), 0.0, WOOD),
    at(K::Chair, "chair", (0.0, -0.15), (Fixed(0.55), Fixed(0.55)), 180.0, UPHOLSTERY),
    at(K::Bookshelf, "bookshelf", (-0.42, 0.0), (Fixed(1.2), Fixed(0.4)), 90.0, WOOD),
    at(K::Armchair, "armchair", (0.3, 0.3), (Fixed(0.8), Fixed(0.8)), 225.0, UPHOLSTERY),
    at(K::Plant, "plant", (0.4, -0.4), (Fixed(0.45), Fixed(0.45)), 0.0, GREENERY),
];

/// The template for a room kind.
#[must_use]
pub fn template_for(kind: RoomKind) -> &'static [Placement] {
    match kind {
        RoomKind::Living => LIVING,
        RoomKind::MasterBedroom => MASTER_BEDROOM,
        RoomKind::Bedroom => BEDROOM,
        RoomKind::Kitchen => KITCHEN,
        RoomKind::Bathroom => BATHROOM,
        RoomKind::Entrance => ENTRANCE,
        RoomKind::Dining => DINING,
        RoomKind::Office => OFFICE,
    }
}

/// Place furniture for one room.
///
/// `index` is the room's position in its list and prefixes every item id,
/// so ids stay unique across rooms without a global counter. A room whose
/// name matches no known type gets no furniture.
#[must_use]
pub fn place_room(room: &Room, index: usize, config: &DesignConfig) -> Vec<FurnitureItem> {
    let Some(kind) = room.kind() else {
        return Vec::new();
    };

    let (cx, cy) = room.plan_center();
    let items: Vec<FurnitureItem> = template_for(kind)
        .iter()
        .map(|p| FurnitureItem {
            id: format!("{index}-{}", p.suffix),
            kind: p.kind,
            x: cx + room.width * p.dx,
            y: cy + room.depth * p.dy,
            width: p.width.resolve(room),
            height: p.height.resolve(room),
            rotation: p.rotation,
            color: config.tint(p.slot),
            room: room.name.clone(),
        })
        .collect();

    debug!(room = %room.name, ?kind, count = items.len(), "placed furniture");
    items
}

/// Place furniture for every room, in room order.
#[must_use]
pub fn place_all(rooms: &[Room], config: &DesignConfig) -> Vec<FurnitureItem> {
    rooms
        .iter()
        .enumerate()
        .flat_map(|(index, room)| place_room(room, index, config))
        .collect()
}
