//! Furniture model: placed items, their type vocabulary, and the live store.
//!
//! Items are created in bulk by [`crate::placement`] and then mutated in
//! place by the editor (drag and rotate). The store keeps placement order,
//! which is also draw order and the order handed back to the host when a
//! drag completes.

#[cfg(test)]
#[path = "furniture_test.rs"]
mod furniture_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN_DEG, ROTATION_STEP_DEG};

/// Furniture type tag. Serialized in camelCase (`"kitchenCounter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FurnitureKind {
    Sofa,
    Armchair,
    CoffeeTable,
    TvUnit,
    Bed,
    Nightstand,
    Wardrobe,
    Dresser,
    KitchenCounter,
    Refrigerator,
    Stove,
    DiningTable,
    Chair,
    Toilet,
    Bathtub,
    Shower,
    Sink,
    Plant,
    Rug,
    CoatRack,
    ShoeRack,
    Bench,
    Desk,
    Bookshelf,
    /// Any tag outside the vocabulary. Kept so foreign lists still load;
    /// the renderer draws nothing for it.
    #[serde(other)]
    Unknown,
}

impl FurnitureKind {
    /// The serialized tag, e.g. `"kitchenCounter"`. `Unknown` has no wire
    /// name of its own and reports `"unknown"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sofa => "sofa",
            Self::Armchair => "armchair",
            Self::CoffeeTable => "coffeeTable",
            Self::TvUnit => "tvUnit",
            Self::Bed => "bed",
            Self::Nightstand => "nightstand",
            Self::Wardrobe => "wardrobe",
            Self::Dresser => "dresser",
            Self::KitchenCounter => "kitchenCounter",
            Self::Refrigerator => "refrigerator",
            Self::Stove => "stove",
            Self::DiningTable => "diningTable",
            Self::Chair => "chair",
            Self::Toilet => "toilet",
            Self::Bathtub => "bathtub",
            Self::Shower => "shower",
            Self::Sink => "sink",
            Self::Plant => "plant",
            Self::Rug => "rug",
            Self::CoatRack => "coatRack",
            Self::ShoeRack => "shoeRack",
            Self::Bench => "bench",
            Self::Desk => "desk",
            Self::Bookshelf => "bookshelf",
            Self::Unknown => "unknown",
        }
    }
}

/// One placed piece of furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    /// Unique within a session: `"{room index}-{suffix}"`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    /// Plan center x.
    pub x: f64,
    /// Plan center y (the world depth axis, not height).
    pub y: f64,
    /// Footprint extent along x.
    pub width: f64,
    /// Footprint extent along y.
    pub height: f64,
    /// Clockwise rotation in degrees about the center.
    pub rotation: f64,
    pub color: String,
    /// Name of the owning room.
    pub room: String,
}

/// Advance a rotation by one step, wrapping into `[0, 360)`.
#[must_use]
pub fn next_rotation(rotation: f64) -> f64 {
    (rotation + ROTATION_STEP_DEG).rem_euclid(FULL_TURN_DEG)
}

/// Ordered, in-memory list of live furniture items.
#[derive(Debug, Clone, Default)]
pub struct FurnitureStore {
    items: Vec<FurnitureItem>,
}

impl FurnitureStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store holding `items` in the given order.
    #[must_use]
    pub fn from_items(items: Vec<FurnitureItem>) -> Self {
        Self { items }
    }

    /// Discard every item and take `items` instead.
    pub fn replace_all(&mut self, items: Vec<FurnitureItem>) {
        self.items = items;
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Return a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut FurnitureItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Move an item's center. Returns false if the item doesn't exist.
    pub fn move_to(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.x = x;
        item.y = y;
        true
    }

    /// Rotate an item by one step. Returns the new rotation, or `None` if
    /// the item doesn't exist.
    pub fn rotate_step(&mut self, id: &str) -> Option<f64> {
        let item = self.get_mut(id)?;
        item.rotation = next_rotation(item.rotation);
        Some(item.rotation)
    }

    /// All items in draw order.
    #[must_use]
    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    /// Owned snapshot of every item, for handing to the host.
    #[must_use]
    pub fn to_vec(&self) -> Vec<FurnitureItem> {
        self.items.clone()
    }

    /// Items belonging to the named room.
    pub fn for_room<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a FurnitureItem> + 'a {
        self.items.iter().filter(move |item| item.room == room)
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
