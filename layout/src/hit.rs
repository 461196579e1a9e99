//! Hit-testing: which furniture item lies under a plan-space point.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::furniture::FurnitureItem;
use crate::surface::Point;

/// Whether `pt` falls inside the item's rotated footprint (edges inclusive).
#[must_use]
pub fn contains(item: &FurnitureItem, pt: Point) -> bool {
    // Undo the item's clockwise rotation so the footprint is axis-aligned.
    let (sin, cos) = (-item.rotation.to_radians()).sin_cos();
    let dx = pt.x - item.x;
    let dy = pt.y - item.y;
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    local_x.abs() <= item.width / 2.0 && local_y.abs() <= item.height / 2.0
}

/// The topmost item under `pt`. Later items are drawn above earlier ones,
/// so the search runs back to front.
#[must_use]
pub fn item_at(pt: Point, items: &[FurnitureItem]) -> Option<&FurnitureItem> {
    items.iter().rev().find(|item| contains(item, pt))
}
