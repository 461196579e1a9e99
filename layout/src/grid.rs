//! Fallback room layout: a plain grid used when no generated layout exists.
//!
//! Rooms are laid out row-major in `ceil(sqrt(n))` columns, each taking one
//! cell of the plot minus a wall gap. The plot is centered on the origin.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_ROOM_HEIGHT, WALL_GAP};
use crate::room::Room;
use crate::style::DesignConfig;

/// Overall plot extent in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSize {
    pub width: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlotSizeError {
    #[error("plot size must look like `12x10`, got `{0}`")]
    Format(String),
    #[error("plot {axis} must be a positive number, got `{raw}`")]
    Dimension { axis: &'static str, raw: String },
}

impl FromStr for PlotSize {
    type Err = PlotSizeError;

    /// Parse `"<width>x<depth>"`. `X` and `×` are accepted as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(['x', 'X', '×']);
        let (Some(w), Some(d), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PlotSizeError::Format(s.to_owned()));
        };
        Ok(Self { width: parse_dimension("width", w)?, depth: parse_dimension("depth", d)? })
    }
}

fn parse_dimension(axis: &'static str, raw: &str) -> Result<f64, PlotSizeError> {
    let invalid = || PlotSizeError::Dimension { axis, raw: raw.trim().to_owned() };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Lay out one room per name on a grid covering `plot`.
#[must_use]
pub fn grid_layout(plot: PlotSize, names: &[String], config: &DesignConfig) -> Vec<Room> {
    if names.is_empty() {
        return Vec::new();
    }

    let (cols, rows) = grid_shape(names.len());
    let cell_w = plot.width / f64::from(cols);
    let cell_d = plot.depth / f64::from(rows);

    let rooms: Vec<Room> = names
        .iter()
        .zip(0u32..)
        .map(|(name, i)| {
            let (col, row) = (i % cols, i / cols);
            let x = -plot.width / 2.0 + cell_w * (f64::from(col) + 0.5);
            let z = -plot.depth / 2.0 + cell_d * (f64::from(row) + 0.5);
            Room {
                name: name.clone(),
                width: (cell_w - WALL_GAP).max(WALL_GAP),
                depth: (cell_d - WALL_GAP).max(WALL_GAP),
                height: DEFAULT_ROOM_HEIGHT,
                position: [x, DEFAULT_ROOM_HEIGHT / 2.0, z],
                color: config.tint(i as usize),
            }
        })
        .collect();

    debug!(cols, rows, rooms = rooms.len(), "fallback grid layout");
    rooms
}

/// Columns and rows for `n` cells: as square as possible, filled row-major.
#[must_use]
pub fn grid_shape(n: usize) -> (u32, u32) {
    let n = u32::try_from(n).unwrap_or(u32::MAX);
    if n == 0 {
        return (0, 0);
    }
    let mut cols = n.isqrt();
    if cols * cols < n {
        cols += 1;
    }
    (cols, n.div_ceil(cols))
}
