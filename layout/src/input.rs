//! Input model: the drag state machine and the UI state it drives.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Only one drag exists at a time; the single-pointer event model
//! always resolves a drag with pointer-up (or pointer-leave) before another
//! can start.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::surface::Point;

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// The id of the highlighted item, if any.
    pub selected_id: Option<String>,
    /// Whether the one-time drag hint has already been shown this session.
    pub drag_hint_shown: bool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an item across the plan.
    Dragging {
        /// Id of the item being dragged.
        id: String,
        /// Pointer minus item center at drag start, in plan units. Kept for
        /// the whole drag so the item doesn't jump to the pointer.
        offset: Point,
    },
}

impl InputState {
    /// Id of the item being dragged, if any.
    #[must_use]
    pub fn dragging_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } => Some(id),
        }
    }
}

/// What to do when a pointer position can't be mapped into plan space
/// because the surface isn't mounted or sized yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformFallback {
    /// Treat the pointer as the plan origin `(0, 0)` and carry on.
    ///
    /// Inherited quirk of the browser editor this engine replaces: it reads
    /// a missing screen matrix as the origin instead of failing. Kept as the
    /// default so drags behave the same.
    #[default]
    FailOpenToOrigin,
    /// Leave state untouched and report the error to the caller.
    Reject,
}
