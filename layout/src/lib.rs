//! Furniture layout engine for the floor-plan editor.
//!
//! Given a list of rooms and a design configuration, this crate places a
//! template set of furniture in every recognised room, then lets the user
//! drag and rotate pieces. All state lives in the [`editor::Editor`]; each
//! input handler returns [`editor::Action`]s for the host to act on (redraw,
//! persist the furniture list, show a hint). Rendering is a pure function of
//! that state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Editor state and pointer handlers, emitting [`editor::Action`]s |
//! | [`placement`] | Per-room furniture templates and [`placement::place_all`] |
//! | [`furniture`] | Furniture items, type vocabulary, and the live store |
//! | [`room`] | Room model and room-kind inference |
//! | [`style`] | Design configuration and style palettes |
//! | [`surface`] | Drawing surface and screen-to-plan conversion |
//! | [`input`] | UI state, drag gesture state, transform fallback policy |
//! | [`hit`] | Hit-testing rotated furniture footprints |
//! | [`grid`] | Fallback grid layout for a plot |
//! | [`render`] | SVG rendering of rooms and furniture |
//! | [`consts`] | Shared constants (rotation step, gaps, render defaults) |

pub mod consts;
pub mod editor;
pub mod furniture;
pub mod grid;
pub mod hit;
pub mod input;
pub mod placement;
pub mod render;
pub mod room;
pub mod style;
pub mod surface;
