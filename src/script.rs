//! Pointer scripts: JSON-lines event recordings replayed against an editor.
//!
//! One event per line, tagged by `event`:
//!
//! ```text
//! {"event":"surface","left":400,"top":300,"scale":50,"width":800,"height":600}
//! {"event":"down","x":420,"y":310,"target":"0-sofa"}
//! {"event":"move","x":470,"y":335}
//! {"event":"up"}
//! ```
//!
//! A `down` or `doubleClick` without a `target` is resolved by hit-testing
//! the pointer position. A `down` that hits nothing counts as a click on
//! empty plan. Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use layout::editor::{Action, Editor, EditorError};
use layout::furniture::FurnitureItem;
use layout::surface::{Point, Surface};
use serde::Deserialize;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ScriptEvent {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<String>,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Leave,
    DoubleClick {
        #[serde(default)]
        target: Option<String>,
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    BackgroundClick,
    Surface {
        left: f64,
        top: f64,
        scale: f64,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("reading script failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("script line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
}

/// Parse a whole JSON-lines script.
///
/// # Errors
///
/// Fails on the first unreadable or malformed line.
pub fn parse_script(reader: impl BufRead) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse { line: index + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Feed `events` to `editor` in order and collect every furniture list the
/// editor hands back when a drag completes.
///
/// # Errors
///
/// Propagates editor errors, which only occur under a rejecting transform
/// fallback.
pub fn replay(editor: &mut Editor, events: &[ScriptEvent]) -> Result<Vec<Vec<FurnitureItem>>, EditorError> {
    let mut changes = Vec::new();
    for event in events {
        trace!(?event, "replaying");
        let actions = apply(editor, event)?;
        changes.extend(actions.into_iter().filter_map(|action| match action {
            Action::FurnitureChanged(items) => Some(items),
            _ => None,
        }));
    }
    debug!(events = events.len(), changes = changes.len(), "replay finished");
    Ok(changes)
}

fn apply(editor: &mut Editor, event: &ScriptEvent) -> Result<Vec<Action>, EditorError> {
    match event {
        ScriptEvent::Down { x, y, target } => {
            let screen = Point::new(*x, *y);
            match resolve(editor, screen, target.as_deref())? {
                Some(id) => editor.on_pointer_down(screen, &id),
                None => Ok(editor.on_background_click()),
            }
        }
        ScriptEvent::Move { x, y } => editor.on_pointer_move(Point::new(*x, *y)),
        ScriptEvent::Up => Ok(editor.on_pointer_up()),
        ScriptEvent::Leave => Ok(editor.on_pointer_leave()),
        ScriptEvent::DoubleClick { target, x, y } => {
            let id = match (target, x, y) {
                (Some(id), _, _) => Some(id.clone()),
                (None, Some(x), Some(y)) => resolve(editor, Point::new(*x, *y), None)?,
                _ => None,
            };
            Ok(id.map(|id| editor.on_double_click(&id)).unwrap_or_default())
        }
        ScriptEvent::BackgroundClick => Ok(editor.on_background_click()),
        ScriptEvent::Surface { left, top, scale, width, height } => {
            editor.set_surface(Surface::new(*left, *top, *scale, *width, *height));
            Ok(Vec::new())
        }
    }
}

/// The explicit target, or whatever item lies under `screen`.
fn resolve(editor: &Editor, screen: Point, target: Option<&str>) -> Result<Option<String>, EditorError> {
    if let Some(id) = target {
        return Ok(Some(id.to_owned()));
    }
    Ok(editor.item_at(screen)?.map(|item| item.id.clone()))
}
