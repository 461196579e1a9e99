//! Shared numeric constants for the layout crate.

// ── Rotation ────────────────────────────────────────────────────

/// Degrees added to an item's rotation on each double-click.
pub const ROTATION_STEP_DEG: f64 = 45.0;

/// One full turn in degrees; rotations are kept in `[0, FULL_TURN_DEG)`.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Rooms ───────────────────────────────────────────────────────

/// Ceiling height, in meters, for rooms produced by the fallback grid.
pub const DEFAULT_ROOM_HEIGHT: f64 = 3.0;

/// Gap left between neighbouring grid cells for walls, in meters.
pub const WALL_GAP: f64 = 0.2;

// ── Rendering ───────────────────────────────────────────────────

/// SVG user units per meter of plan.
pub const DEFAULT_PX_PER_METER: f64 = 50.0;

/// Blank border around the plan, in meters.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// Wood plank width across the room, in meters.
pub const PLANK_WIDTH: f64 = 0.2;

/// Floor tile edge length, in meters.
pub const TILE_SIZE: f64 = 0.5;

/// Selection outline dash segment length in SVG units.
pub const SELECTION_DASH: f64 = 4.0;
