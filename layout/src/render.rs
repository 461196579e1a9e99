//! Rendering: draws rooms and furniture as a standalone SVG floor plan.
//!
//! This module only reads state. It receives the room list, the furniture
//! list and the UI state and produces markup; nothing here feeds back into
//! placement or editing.
//!
//! Floor materials get per-plank/per-tile shading from a caller-supplied
//! random source. That randomness is cosmetic: it never touches item data.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::borrow::Cow;
use std::fmt::{self, Write};

use rand::Rng;
use tracing::debug;

use crate::consts::{DEFAULT_MARGIN, DEFAULT_PX_PER_METER, PLANK_WIDTH, SELECTION_DASH, TILE_SIZE};
use crate::furniture::{FurnitureItem, FurnitureKind};
use crate::input::UiState;
use crate::room::Room;
use crate::style::DesignConfig;

const BACKGROUND: &str = "#fafafa";
const WALL: &str = "#2d3748";
const OUTLINE: &str = "#4a5568";
const SELECTION: &str = "#3182ce";
const PLANK: &str = "#c49a6c";
const TILE: &str = "#e2e8f0";

/// A trailing strip thinner than this is float noise and is not drawn.
const SLIVER: f64 = 1e-6;

/// Past this many planks or tiles a floor is drawn plain.
const MAX_FLOOR_PIECES: u32 = 10_000;

/// Output scale and framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// SVG user units per plan meter.
    pub px_per_meter: f64,
    /// Blank border around the rooms, in meters.
    pub margin: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { px_per_meter: DEFAULT_PX_PER_METER, margin: DEFAULT_MARGIN }
    }
}

/// Plan-space bounding box `(min_x, min_y, max_x, max_y)` of every room, or
/// of the furniture when there are no rooms.
#[must_use]
pub fn plan_bounds(rooms: &[Room], items: &[FurnitureItem]) -> (f64, f64, f64, f64) {
    let boxes: Vec<(f64, f64, f64, f64)> = if rooms.is_empty() {
        items
            .iter()
            .map(|i| (i.x - i.width / 2.0, i.y - i.height / 2.0, i.x + i.width / 2.0, i.y + i.height / 2.0))
            .collect()
    } else {
        rooms
            .iter()
            .map(|r| {
                let (cx, cy) = r.plan_center();
                (cx - r.width / 2.0, cy - r.depth / 2.0, cx + r.width / 2.0, cy + r.depth / 2.0)
            })
            .collect()
    };

    boxes
        .into_iter()
        .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
        .unwrap_or((0.0, 0.0, 0.0, 0.0))
}

/// SVG `transform` placing an item: translate to its center, then rotate.
#[must_use]
pub fn item_transform(item: &FurnitureItem, scale: f64) -> String {
    format!("translate({:.2} {:.2}) rotate({:.2})", item.x * scale, item.y * scale, item.rotation)
}

/// Draw the full plan.
///
/// # Errors
///
/// Only if writing to the output buffer fails, which a `String` never does.
pub fn render_svg<R: Rng>(
    rooms: &[Room],
    items: &[FurnitureItem],
    design: &DesignConfig,
    ui: &UiState,
    opts: &RenderOptions,
    rng: &mut R,
) -> Result<String, fmt::Error> {
    let s = opts.px_per_meter;
    let (min_x, min_y, max_x, max_y) = plan_bounds(rooms, items);
    let vx = (min_x - opts.margin) * s;
    let vy = (min_y - opts.margin) * s;
    let vw = (max_x - min_x + 2.0 * opts.margin) * s;
    let vh = (max_y - min_y + 2.0 * opts.margin) * s;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{vx:.2} {vy:.2} {vw:.2} {vh:.2}" width="{vw:.0}" height="{vh:.0}">"#
    )?;
    writeln!(out, r#"<rect x="{vx:.2}" y="{vy:.2}" width="{vw:.2}" height="{vh:.2}" fill="{BACKGROUND}"/>"#)?;

    // Layer 1: rooms and floors.
    for room in rooms {
        draw_room(&mut out, room, design.materials_enabled, s, rng)?;
    }

    // Layer 2: furniture in list order.
    if design.furniture_enabled {
        for item in items {
            let selected = ui.selected_id.as_deref() == Some(item.id.as_str());
            draw_item(&mut out, item, selected, s)?;
        }
    }

    // Layer 3: lighting wash.
    if let Some(tint) = lighting_tint(&design.lighting_style) {
        writeln!(
            out,
            r#"<rect x="{vx:.2}" y="{vy:.2}" width="{vw:.2}" height="{vh:.2}" fill="{tint}" opacity="0.06" pointer-events="none"/>"#
        )?;
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn lighting_tint(style: &str) -> Option<&'static str> {
    match style {
        "warm" => Some("#ffb347"),
        "cool" => Some("#63b3ed"),
        "dramatic" => Some("#1a202c"),
        _ => None,
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

// =============================================================
// Rooms and floors
// =============================================================

fn draw_room<R: Rng>(out: &mut String, room: &Room, materials: bool, s: f64, rng: &mut R) -> fmt::Result {
    let (cx, cy) = room.plan_center();
    let left = cx - room.width / 2.0;
    let top = cy - room.depth / 2.0;

    writeln!(out, r#"<g class="room" data-room="{}">"#, escape(&room.name))?;
    writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
        left * s,
        top * s,
        room.width * s,
        room.depth * s,
        escape(&room.color)
    )?;

    if materials {
        match room.kind() {
            Some(kind) if kind.is_tiled() => draw_tiles(out, room, left, top, s, rng)?,
            Some(_) => draw_planks(out, room, left, top, s, rng)?,
            None => {}
        }
    }

    writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{WALL}" stroke-width="3"/>"#,
        left * s,
        top * s,
        room.width * s,
        room.depth * s
    )?;
    writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="12" fill="{WALL}">{}</text>"#,
        cx * s,
        (top + 0.35) * s,
        escape(&room.name)
    )?;
    out.push_str("</g>\n");
    Ok(())
}

fn draw_planks<R: Rng>(out: &mut String, room: &Room, left: f64, top: f64, s: f64, rng: &mut R) -> fmt::Result {
    let Some(rows) = strip_count(room.depth, PLANK_WIDTH).filter(|&n| n <= MAX_FLOOR_PIECES) else {
        debug!(room = %room.name, "floor too large for planks; drawing plain");
        return Ok(());
    };
    for i in 0..rows {
        let offset = f64::from(i) * PLANK_WIDTH;
        let h = (room.depth - offset).min(PLANK_WIDTH);
        let shade: f64 = rng.random_range(0.25..0.45);
        writeln!(
            out,
            r#"<rect class="plank" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{PLANK}" fill-opacity="{shade:.3}"/>"#,
            left * s,
            (top + offset) * s,
            room.width * s,
            h * s
        )?;
    }
    Ok(())
}

fn draw_tiles<R: Rng>(out: &mut String, room: &Room, left: f64, top: f64, s: f64, rng: &mut R) -> fmt::Result {
    let counts = strip_count(room.depth, TILE_SIZE).zip(strip_count(room.width, TILE_SIZE));
    let Some((rows, cols)) = counts.filter(|&(r, c)| r.saturating_mul(c) <= MAX_FLOOR_PIECES) else {
        debug!(room = %room.name, "floor too large for tiles; drawing plain");
        return Ok(());
    };
    for row in 0..rows {
        let dy = f64::from(row) * TILE_SIZE;
        let h = (room.depth - dy).min(TILE_SIZE);
        for col in 0..cols {
            let dx = f64::from(col) * TILE_SIZE;
            let w = (room.width - dx).min(TILE_SIZE);
            let shade: f64 = rng.random_range(0.5..0.8);
            writeln!(
                out,
                r#"<rect class="tile" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{TILE}" fill-opacity="{shade:.3}" stroke="{OUTLINE}" stroke-opacity="0.2"/>"#,
                (left + dx) * s,
                (top + dy) * s,
                w * s,
                h * s
            )?;
        }
    }
    Ok(())
}

/// Number of `step`-wide strips covering `extent`. `None` when the count
/// doesn't fit a `u32`.
fn strip_count(extent: f64, step: f64) -> Option<u32> {
    let n = ((extent - SLIVER) / step).ceil().max(0.0);
    if !n.is_finite() || n > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n as u32;
    Some(n)
}

// =============================================================
// Furniture dispatch
// =============================================================

fn draw_item(out: &mut String, item: &FurnitureItem, selected: bool, s: f64) -> fmt::Result {
    if item.kind == FurnitureKind::Unknown {
        return Ok(());
    }

    writeln!(
        out,
        r#"<g class="furniture" data-id="{}" data-type="{}" transform="{}">"#,
        escape(&item.id),
        item.kind.tag(),
        item_transform(item, s)
    )?;

    let shape = Shape { w: item.width * s, h: item.height * s, fill: escape(&item.color) };
    match item.kind {
        FurnitureKind::Bed => draw_bed(out, &shape)?,
        FurnitureKind::Sofa | FurnitureKind::Armchair => draw_seat(out, &shape)?,
        FurnitureKind::Chair => draw_chair(out, &shape)?,
        FurnitureKind::Wardrobe => draw_wardrobe(out, &shape)?,
        FurnitureKind::Bookshelf | FurnitureKind::ShoeRack => draw_shelves(out, &shape)?,
        FurnitureKind::TvUnit => draw_tv_unit(out, &shape)?,
        FurnitureKind::Stove => draw_stove(out, &shape)?,
        FurnitureKind::Refrigerator => draw_refrigerator(out, &shape)?,
        FurnitureKind::Sink => draw_sink(out, &shape)?,
        FurnitureKind::Toilet => draw_toilet(out, &shape)?,
        FurnitureKind::Bathtub => draw_bathtub(out, &shape)?,
        FurnitureKind::Shower => draw_shower(out, &shape)?,
        FurnitureKind::Plant => draw_plant(out, &shape)?,
        FurnitureKind::Rug => draw_rug(out, &shape)?,
        FurnitureKind::CoatRack => draw_coat_rack(out, &shape)?,
        FurnitureKind::CoffeeTable
        | FurnitureKind::DiningTable
        | FurnitureKind::Desk
        | FurnitureKind::Nightstand
        | FurnitureKind::Dresser
        | FurnitureKind::Bench
        | FurnitureKind::KitchenCounter => shape.body(out, 2.0)?,
        FurnitureKind::Unknown => {}
    }

    if selected {
        let pad = 3.0;
        writeln!(
            out,
            r#"<rect class="selection" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{SELECTION}" stroke-width="2" stroke-dasharray="{SELECTION_DASH} {SELECTION_DASH}"/>"#,
            -shape.w / 2.0 - pad,
            -shape.h / 2.0 - pad,
            shape.w + 2.0 * pad,
            shape.h + 2.0 * pad
        )?;
    }
    out.push_str("</g>\n");
    Ok(())
}

/// Footprint in SVG units, centered on the local origin.
struct Shape<'a> {
    w: f64,
    h: f64,
    fill: Cow<'a, str>,
}

impl Shape<'_> {
    fn left(&self) -> f64 {
        -self.w / 2.0
    }

    fn top(&self) -> f64 {
        -self.h / 2.0
    }

    /// The filled, outlined footprint.
    fn body(&self, out: &mut String, radius: f64) -> fmt::Result {
        writeln!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{radius:.2}" fill="{}" stroke="{OUTLINE}" stroke-width="1"/>"#,
            self.left(),
            self.top(),
            self.w,
            self.h,
            self.fill
        )
    }
}

fn rect(out: &mut String, x: f64, y: f64, w: f64, h: f64, fill: &str) -> fmt::Result {
    writeln!(
        out,
        r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}" stroke="{OUTLINE}" stroke-width="1"/>"#
    )
}

fn line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) -> fmt::Result {
    writeln!(
        out,
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{OUTLINE}" stroke-width="1"/>"#
    )
}

fn ellipse(out: &mut String, cx: f64, cy: f64, rx: f64, ry: f64, fill: &str) -> fmt::Result {
    writeln!(
        out,
        r#"<ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{rx:.2}" ry="{ry:.2}" fill="{fill}" stroke="{OUTLINE}" stroke-width="1"/>"#
    )
}

// =============================================================
// Per-type renderers. Local frame: origin at the item center,
// negative y toward the item's back.
// =============================================================

fn draw_bed(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 4.0)?;
    let pillow_h = sh.h * 0.15;
    let pillow_w = sh.w * 0.4;
    let pillow_y = sh.top() + sh.h * 0.05;
    rect(out, -sh.w * 0.45, pillow_y, pillow_w, pillow_h, "#ffffff")?;
    rect(out, sh.w * 0.05, pillow_y, pillow_w, pillow_h, "#ffffff")?;
    line(out, sh.left(), sh.top() + sh.h * 0.3, -sh.left(), sh.top() + sh.h * 0.3)
}

fn draw_seat(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 6.0)?;
    let back = sh.h * 0.25;
    let arm = (sh.w * 0.12).min(sh.h * 0.3);
    rect(out, sh.left(), sh.top(), sh.w, back, &sh.fill)?;
    rect(out, sh.left(), sh.top() + back, arm, sh.h - back, &sh.fill)?;
    rect(out, -sh.left() - arm, sh.top() + back, arm, sh.h - back, &sh.fill)
}

fn draw_chair(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 3.0)?;
    rect(out, sh.left(), sh.top(), sh.w, sh.h * 0.2, &sh.fill)
}

fn draw_wardrobe(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 1.0)?;
    line(out, 0.0, sh.top(), 0.0, -sh.top())
}

fn draw_shelves(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 1.0)?;
    for frac in [0.25, 0.5, 0.75] {
        let x = sh.left() + sh.w * frac;
        line(out, x, sh.top(), x, -sh.top())?;
    }
    Ok(())
}

fn draw_tv_unit(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 1.0)?;
    rect(out, -sh.w * 0.35, sh.top(), sh.w * 0.7, sh.h * 0.15, "#1a202c")
}

fn draw_stove(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 1.0)?;
    let r = sh.w.min(sh.h) * 0.15;
    for (fx, fy) in [(-0.25, -0.25), (0.25, -0.25), (-0.25, 0.25), (0.25, 0.25)] {
        ellipse(out, sh.w * fx, sh.h * fy, r, r, "none")?;
    }
    Ok(())
}

fn draw_refrigerator(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 2.0)?;
    line(out, sh.left(), sh.top() + sh.h * 0.35, -sh.left(), sh.top() + sh.h * 0.35)
}

fn draw_sink(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 2.0)?;
    ellipse(out, 0.0, sh.h * 0.05, sh.w * 0.35, sh.h * 0.3, "#ffffff")
}

fn draw_toilet(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    rect(out, sh.left(), sh.top(), sh.w, sh.h * 0.3, &sh.fill)?;
    ellipse(out, 0.0, sh.h * 0.15, sh.w * 0.45, sh.h * 0.35, &sh.fill)
}

fn draw_bathtub(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 6.0)?;
    let inset = sh.w.min(sh.h) * 0.12;
    writeln!(
        out,
        r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="#ffffff" stroke="{OUTLINE}" stroke-width="1"/>"##,
        sh.left() + inset,
        sh.top() + inset,
        sh.w - 2.0 * inset,
        sh.h - 2.0 * inset,
        inset
    )
}

fn draw_shower(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    sh.body(out, 1.0)?;
    line(out, sh.left(), sh.top(), -sh.left(), -sh.top())?;
    line(out, -sh.left(), sh.top(), sh.left(), -sh.top())
}

fn draw_plant(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    ellipse(out, 0.0, 0.0, sh.w / 2.0, sh.h / 2.0, "#c05621")?;
    ellipse(out, 0.0, 0.0, sh.w * 0.4, sh.h * 0.4, &sh.fill)
}

fn draw_rug(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="4" fill="{}" fill-opacity="0.45"/>"#,
        sh.left(),
        sh.top(),
        sh.w,
        sh.h,
        sh.fill
    )
}

fn draw_coat_rack(out: &mut String, sh: &Shape<'_>) -> fmt::Result {
    ellipse(out, 0.0, 0.0, sh.w * 0.15, sh.h * 0.15, &sh.fill)?;
    line(out, sh.left(), 0.0, -sh.left(), 0.0)?;
    line(out, 0.0, sh.top(), 0.0, -sh.top())
}
