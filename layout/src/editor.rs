//! Interaction controller for the 2D plan editor.
//!
//! The [`Editor`] owns the live furniture list for one editing session and
//! turns pointer events into item mutations. It never touches a display:
//! every handler returns [`Action`]s for the host to act on (re-render, show
//! a hint, persist the list after a drop).
//!
//! All handlers are synchronous and run to completion inside the host's
//! event callback, so there is no interleaving to guard against.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use tracing::{debug, info, trace};

use crate::furniture::{FurnitureItem, FurnitureStore};
use crate::hit;
use crate::input::{InputState, TransformFallback, UiState};
use crate::placement;
use crate::room::Room;
use crate::style::DesignConfig;
use crate::surface::{Point, Surface, SurfaceError};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Something visible changed.
    RenderNeeded,
    /// The highlighted item changed; `None` means nothing is selected.
    SelectionChanged(Option<String>),
    /// A drag finished. Carries every item, not just the moved one.
    FurnitureChanged(Vec<FurnitureItem>),
    /// First drag of the session; the host may show a usage hint.
    ShowDragHint,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("pointer transform failed: {0}")]
    Surface(#[from] SurfaceError),
}

/// Editing session state: rooms, their furniture, and the gesture in progress.
#[derive(Debug, Default)]
pub struct Editor {
    rooms: Vec<Room>,
    design: DesignConfig,
    pub furniture: FurnitureStore,
    pub surface: Surface,
    pub ui: UiState,
    pub input: InputState,
    pub fallback: TransformFallback,
}

impl Editor {
    /// Start a session and place furniture for `rooms`.
    #[must_use]
    pub fn new(rooms: Vec<Room>, design: DesignConfig) -> Self {
        let furniture = FurnitureStore::from_items(placement::place_all(&rooms, &design));
        Self { rooms, design, furniture, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the room list. Furniture is regenerated from scratch and any
    /// drag or selection is dropped.
    pub fn load_rooms(&mut self, rooms: Vec<Room>) -> Vec<Action> {
        self.rooms = rooms;
        self.regenerate()
    }

    /// Replace the design configuration and regenerate furniture.
    pub fn set_design(&mut self, design: DesignConfig) -> Vec<Action> {
        self.design = design;
        self.regenerate()
    }

    /// Update where the plan sits on screen.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Choose how pointer events behave while the surface is not ready.
    pub fn set_transform_fallback(&mut self, fallback: TransformFallback) {
        self.fallback = fallback;
    }

    fn regenerate(&mut self) -> Vec<Action> {
        self.furniture.replace_all(placement::place_all(&self.rooms, &self.design));
        self.input = InputState::Idle;
        let had_selection = self.ui.selected_id.take().is_some();
        info!(rooms = self.rooms.len(), items = self.furniture.len(), "furniture regenerated");

        let mut actions = Vec::new();
        if had_selection {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    /// Pointer pressed on the item `id`. Selects it and starts a drag.
    ///
    /// A second press without an intervening release simply replaces the
    /// current drag.
    ///
    /// # Errors
    ///
    /// Only under [`TransformFallback::Reject`], when the surface can't map
    /// the pointer; state is left untouched.
    pub fn on_pointer_down(&mut self, screen: Point, id: &str) -> Result<Vec<Action>, EditorError> {
        let Some(item) = self.furniture.get(id) else {
            return Ok(Vec::new());
        };
        let (item_x, item_y) = (item.x, item.y);
        let local = self.pointer_local(screen)?;

        let mut actions = Vec::new();
        if self.ui.selected_id.as_deref() != Some(id) {
            self.ui.selected_id = Some(id.to_owned());
            actions.push(Action::SelectionChanged(Some(id.to_owned())));
        }

        self.input = InputState::Dragging {
            id: id.to_owned(),
            offset: Point::new(local.x - item_x, local.y - item_y),
        };
        debug!(item = %id, "drag started");

        if !self.ui.drag_hint_shown {
            self.ui.drag_hint_shown = true;
            actions.push(Action::ShowDragHint);
        }
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    /// Pointer moved. While dragging, the item follows the pointer keeping
    /// the offset recorded at pointer-down.
    ///
    /// # Errors
    ///
    /// Only under [`TransformFallback::Reject`], when the surface can't map
    /// the pointer; the item stays where it was.
    pub fn on_pointer_move(&mut self, screen: Point) -> Result<Vec<Action>, EditorError> {
        let InputState::Dragging { id, offset } = &self.input else {
            return Ok(Vec::new());
        };
        let local = self.pointer_local(screen)?;
        let (x, y) = (local.x - offset.x, local.y - offset.y);
        if !self.furniture.move_to(id, x, y) {
            return Ok(Vec::new());
        }
        trace!(item = %id, x, y, "drag moved");
        Ok(vec![Action::RenderNeeded])
    }

    /// Pointer released. Finishes any drag and hands the full list to the host.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let InputState::Dragging { id, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        if let Some(item) = self.furniture.get(&id) {
            info!(item = %id, x = item.x, y = item.y, "drag finished");
        }
        vec![Action::FurnitureChanged(self.furniture.to_vec()), Action::RenderNeeded]
    }

    /// Pointer left the surface. Same as a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    /// Double-click on the item `id`: rotate it one step. Selection is not
    /// required and the drag state is not touched.
    pub fn on_double_click(&mut self, id: &str) -> Vec<Action> {
        match self.furniture.rotate_step(id) {
            Some(rotation) => {
                debug!(item = %id, rotation, "item rotated");
                vec![Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// Click on empty plan: clear the selection. A drag in progress carries on.
    pub fn on_background_click(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    fn pointer_local(&self, screen: Point) -> Result<Point, EditorError> {
        match self.surface.screen_to_local(screen) {
            Ok(local) => Ok(local),
            Err(err) => match self.fallback {
                TransformFallback::FailOpenToOrigin => {
                    debug!(error = %err, "pointer transform unavailable; using plan origin");
                    Ok(Point::ORIGIN)
                }
                TransformFallback::Reject => Err(err.into()),
            },
        }
    }

    // --- Queries ---

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.ui.selected_id.as_deref()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.input, InputState::Dragging { .. })
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&FurnitureItem> {
        self.furniture.get(id)
    }

    /// All items in draw order.
    #[must_use]
    pub fn items(&self) -> &[FurnitureItem] {
        self.furniture.items()
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn design(&self) -> &DesignConfig {
        &self.design
    }

    /// Topmost item under a screen point, for hosts that need to resolve
    /// pointer targets themselves.
    ///
    /// # Errors
    ///
    /// Only under [`TransformFallback::Reject`], when the surface can't map
    /// the pointer.
    pub fn item_at(&self, screen: Point) -> Result<Option<&FurnitureItem>, EditorError> {
        let local = self.pointer_local(screen)?;
        Ok(hit::item_at(local, self.furniture.items()))
    }
}
