#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn room(name: &str, width: f64, depth: f64, x: f64, z: f64) -> Room {
    Room {
        name: name.into(),
        width,
        depth,
        height: 3.0,
        position: [x, 1.5, z],
        color: "#f5f5f4".into(),
    }
}

fn item(id: &str, kind: FurnitureKind, x: f64, y: f64) -> FurnitureItem {
    FurnitureItem {
        id: id.into(),
        kind,
        x,
        y,
        width: 1.0,
        height: 0.5,
        rotation: 0.0,
        color: "#8b7355".into(),
        room: "Bedroom".into(),
    }
}

fn render(rooms: &[Room], items: &[FurnitureItem], design: &DesignConfig, ui: &UiState) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    render_svg(rooms, items, design, ui, &RenderOptions::default(), &mut rng).unwrap()
}

fn no_materials() -> DesignConfig {
    DesignConfig { materials_enabled: false, ..DesignConfig::default() }
}

// =============================================================
// plan_bounds / item_transform
// =============================================================

#[test]
fn plan_bounds_empty_is_zero() {
    assert_eq!(plan_bounds(&[], &[]), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn plan_bounds_covers_rooms() {
    let rooms = [room("Kitchen", 4.0, 3.0, 0.0, 0.0), room("Bathroom", 2.0, 2.0, 4.0, 2.0)];
    assert_eq!(plan_bounds(&rooms, &[]), (-2.0, -1.5, 5.0, 3.0));
}

#[test]
fn plan_bounds_ignores_items_when_rooms_exist() {
    let rooms = [room("Kitchen", 4.0, 2.0, 0.0, 0.0)];
    let items = [item("0-far", FurnitureKind::Chair, 50.0, 50.0)];
    assert_eq!(plan_bounds(&rooms, &items), (-2.0, -1.0, 2.0, 1.0));
}

#[test]
fn plan_bounds_falls_back_to_items() {
    let mut it = item("0-desk", FurnitureKind::Desk, 1.0, 2.0);
    it.width = 2.0;
    it.height = 1.0;
    assert_eq!(plan_bounds(&[], &[it]), (0.0, 1.5, 2.0, 2.5));
}

#[test]
fn item_transform_translates_then_rotates() {
    let mut it = item("0-bed", FurnitureKind::Bed, 2.0, -1.0);
    it.rotation = 45.0;
    assert_eq!(item_transform(&it, 50.0), "translate(100.00 -50.00) rotate(45.00)");
}

// =============================================================
// Document frame
// =============================================================

#[test]
fn svg_root_and_view_box() {
    let svg = render(&[room("Bedroom", 4.0, 3.0, 0.0, 0.0)], &[], &no_materials(), &UiState::default());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r#"viewBox="-150.00 -125.00 300.00 250.00" width="300" height="250""#));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn empty_plan_still_renders() {
    let svg = render(&[], &[], &DesignConfig::default(), &UiState::default());
    assert!(svg.contains(r#"viewBox="-50.00 -50.00 100.00 100.00""#));
    assert!(!svg.contains("class=\"room\""));
}

#[test]
fn room_names_are_escaped() {
    let svg = render(&[room("R&D <lab>", 2.0, 2.0, 0.0, 0.0)], &[], &no_materials(), &UiState::default());
    assert!(svg.contains(r#"data-room="R&amp;D &lt;lab&gt;""#));
    assert!(svg.contains(">R&amp;D &lt;lab&gt;</text>"));
    assert!(!svg.contains("R&D"));
}

// =============================================================
// Floors
// =============================================================

#[test]
fn bedroom_gets_planks() {
    let svg = render(&[room("Bedroom", 4.0, 3.0, 0.0, 0.0)], &[], &DesignConfig::default(), &UiState::default());
    assert_eq!(svg.matches("class=\"plank\"").count(), 15);
    assert!(!svg.contains("class=\"tile\""));
}

#[test]
fn kitchen_gets_tiles() {
    let svg = render(&[room("Kitchen", 2.0, 1.0, 0.0, 0.0)], &[], &DesignConfig::default(), &UiState::default());
    assert_eq!(svg.matches("class=\"tile\"").count(), 8);
    assert!(!svg.contains("class=\"plank\""));
}

#[test]
fn unknown_room_gets_plain_floor() {
    let svg = render(&[room("Garage", 4.0, 3.0, 0.0, 0.0)], &[], &DesignConfig::default(), &UiState::default());
    assert!(svg.contains("data-room=\"Garage\""));
    assert!(!svg.contains("class=\"plank\""));
    assert!(!svg.contains("class=\"tile\""));
}

#[test]
fn materials_disabled_skips_floor_texture() {
    let rooms = [room("Bedroom", 4.0, 3.0, 0.0, 0.0), room("Kitchen", 2.0, 2.0, 3.0, 0.0)];
    let svg = render(&rooms, &[], &no_materials(), &UiState::default());
    assert!(!svg.contains("class=\"plank\""));
    assert!(!svg.contains("class=\"tile\""));
}

#[test]
fn partial_last_plank() {
    let svg = render(&[room("Bedroom", 4.0, 3.1, 0.0, 0.0)], &[], &DesignConfig::default(), &UiState::default());
    assert_eq!(svg.matches("class=\"plank\"").count(), 16);
}

#[test]
fn far_from_origin_floor_terminates() {
    // At this magnitude adding a plank width to the cursor is a no-op.
    let rooms = [room("Bedroom", 4.0, 4.0, 0.0, 5.0e15), room("Kitchen", 2.0, 1.0, 5.0e15, 0.0)];
    let svg = render(&rooms, &[], &DesignConfig::default(), &UiState::default());
    assert_eq!(svg.matches("class=\"plank\"").count(), 20);
    assert_eq!(svg.matches("class=\"tile\"").count(), 8);
}

#[test]
fn huge_floor_is_drawn_plain() {
    let rooms = [room("Bedroom", 3000.0, 3000.0, 0.0, 0.0), room("Kitchen", 100.0, 100.0, 0.0, 0.0)];
    let svg = render(&rooms, &[], &DesignConfig::default(), &UiState::default());
    assert_eq!(svg.matches("class=\"room\"").count(), 2);
    assert!(!svg.contains("class=\"plank\""));
    assert!(!svg.contains("class=\"tile\""));
}

#[test]
fn strip_count_covers_extent() {
    assert_eq!(strip_count(3.0, PLANK_WIDTH), Some(15));
    assert_eq!(strip_count(3.1, PLANK_WIDTH), Some(16));
    assert_eq!(strip_count(1.0, TILE_SIZE), Some(2));
    assert_eq!(strip_count(0.0, TILE_SIZE), Some(0));
    assert_eq!(strip_count(f64::INFINITY, TILE_SIZE), None);
    assert_eq!(strip_count(1.0e12, TILE_SIZE), None);
}

#[test]
fn same_seed_same_output() {
    let rooms = [room("Bedroom", 4.0, 3.0, 0.0, 0.0), room("Bathroom", 2.0, 2.0, 3.0, 0.0)];
    let design = DesignConfig::default();
    let ui = UiState::default();
    let opts = RenderOptions::default();
    let a = render_svg(&rooms, &[], &design, &ui, &opts, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = render_svg(&rooms, &[], &design, &ui, &opts, &mut StdRng::seed_from_u64(42)).unwrap();
    let c = render_svg(&rooms, &[], &design, &ui, &opts, &mut StdRng::seed_from_u64(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shading_never_touches_items() {
    let rooms = [room("Bedroom", 4.0, 3.0, 0.0, 0.0)];
    let items = vec![item("0-bed", FurnitureKind::Bed, 0.0, 0.0)];
    let before = items.clone();
    let mut rng = StdRng::seed_from_u64(1);
    render_svg(&rooms, &items, &DesignConfig::default(), &UiState::default(), &RenderOptions::default(), &mut rng)
        .unwrap();
    assert_eq!(items, before);
}

// =============================================================
// Furniture
// =============================================================

#[test]
fn furniture_groups_in_list_order() {
    let items = [
        item("0-rug", FurnitureKind::Rug, 0.0, 0.0),
        item("0-bed", FurnitureKind::Bed, 2.0, -1.0),
    ];
    let svg = render(&[room("Bedroom", 6.0, 4.0, 0.0, 0.0)], &items, &no_materials(), &UiState::default());
    assert_eq!(svg.matches("class=\"furniture\"").count(), 2);
    let rug = svg.find(r#"data-id="0-rug""#).unwrap();
    let bed = svg.find(r#"data-id="0-bed""#).unwrap();
    assert!(rug < bed);
    assert!(svg.contains(r#"data-type="bed" transform="translate(100.00 -50.00) rotate(0.00)""#));
}

#[test]
fn furniture_drawn_after_rooms() {
    let items = [item("0-bed", FurnitureKind::Bed, 0.0, 0.0)];
    let svg = render(&[room("Bedroom", 4.0, 3.0, 0.0, 0.0)], &items, &no_materials(), &UiState::default());
    let room_at = svg.find("class=\"room\"").unwrap();
    let item_at = svg.find("class=\"furniture\"").unwrap();
    assert!(room_at < item_at);
}

#[test]
fn furniture_disabled_hides_items() {
    let items = [item("0-bed", FurnitureKind::Bed, 0.0, 0.0)];
    let design = DesignConfig { furniture_enabled: false, ..no_materials() };
    let svg = render(&[room("Bedroom", 4.0, 3.0, 0.0, 0.0)], &items, &design, &UiState::default());
    assert!(!svg.contains("class=\"furniture\""));
    assert!(svg.contains("class=\"room\""));
}

#[test]
fn unknown_kind_draws_nothing() {
    let foreign: FurnitureItem = serde_json::from_str(
        r##"{"id":"0-lamp","type":"floorLamp","x":0,"y":0,"width":0.3,"height":0.3,"rotation":0,"color":"#fff","room":"Office"}"##,
    )
    .unwrap();
    assert_eq!(foreign.kind, FurnitureKind::Unknown);
    let items = [foreign, item("0-desk", FurnitureKind::Desk, 0.0, 0.0)];
    let svg = render(&[], &items, &no_materials(), &UiState::default());
    assert!(!svg.contains("0-lamp"));
    assert!(svg.contains(r#"data-id="0-desk" data-type="desk""#));
}

#[test]
fn every_known_kind_draws_something() {
    let kinds = [
        FurnitureKind::Sofa,
        FurnitureKind::Armchair,
        FurnitureKind::CoffeeTable,
        FurnitureKind::TvUnit,
        FurnitureKind::Bed,
        FurnitureKind::Nightstand,
        FurnitureKind::Wardrobe,
        FurnitureKind::Dresser,
        FurnitureKind::KitchenCounter,
        FurnitureKind::Refrigerator,
        FurnitureKind::Stove,
        FurnitureKind::DiningTable,
        FurnitureKind::Chair,
        FurnitureKind::Toilet,
        FurnitureKind::Bathtub,
        FurnitureKind::Shower,
        FurnitureKind::Sink,
        FurnitureKind::Plant,
        FurnitureKind::Rug,
        FurnitureKind::CoatRack,
        FurnitureKind::ShoeRack,
        FurnitureKind::Bench,
        FurnitureKind::Desk,
        FurnitureKind::Bookshelf,
    ];
    for kind in kinds {
        let svg = render(&[], &[item("0-x", kind, 0.0, 0.0)], &no_materials(), &UiState::default());
        let start = svg.find("class=\"furniture\"").unwrap();
        let group = &svg[start..];
        let body = &group[..group.find("</g>").unwrap()];
        assert!(body.contains("<rect") || body.contains("<ellipse"), "{kind:?} drew nothing");
    }
}

#[test]
fn selection_outline_only_on_selected_item() {
    let items = [
        item("0-rug", FurnitureKind::Rug, 0.0, 0.0),
        item("0-bed", FurnitureKind::Bed, 1.0, 0.0),
    ];
    let ui = UiState { selected_id: Some("0-bed".into()), drag_hint_shown: false };
    let svg = render(&[], &items, &no_materials(), &ui);
    assert_eq!(svg.matches("class=\"selection\"").count(), 1);
    let bed = svg.find(r#"data-id="0-bed""#).unwrap();
    let outline = svg.find("class=\"selection\"").unwrap();
    assert!(outline > bed);
}

#[test]
fn no_selection_no_outline() {
    let items = [item("0-bed", FurnitureKind::Bed, 0.0, 0.0)];
    let svg = render(&[], &items, &no_materials(), &UiState::default());
    assert!(!svg.contains("class=\"selection\""));
}

// =============================================================
// Lighting
// =============================================================

#[test]
fn warm_lighting_adds_wash() {
    let design = DesignConfig { lighting_style: "warm".into(), ..no_materials() };
    let svg = render(&[room("Bedroom", 2.0, 2.0, 0.0, 0.0)], &[], &design, &UiState::default());
    assert!(svg.contains(r##"fill="#ffb347" opacity="0.06""##));
}

#[test]
fn natural_lighting_has_no_wash() {
    let svg = render(&[room("Bedroom", 2.0, 2.0, 0.0, 0.0)], &[], &no_materials(), &UiState::default());
    assert!(!svg.contains("opacity=\"0.06\""));
}
