//! Screen-to-plan coordinate conversion for an interaction surface.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A point in either screen or plan space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The plan origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Why a screen point could not be mapped into plan space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The surface has no size yet (not mounted, or laid out at zero size).
    #[error("surface is not mounted or has no size")]
    NotReady,
}

/// Placement of the plan on screen.
///
/// `left` / `top` are the screen position (CSS pixels) of the plan origin.
/// `scale` is screen pixels per plan unit. `width` / `height` are the size of
/// the surface element in screen pixels; zero means it is not laid out yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// A sized surface with its plan origin at `(left, top)`.
    #[must_use]
    pub fn new(left: f64, top: f64, scale: f64, width: f64, height: f64) -> Self {
        Self { left, top, scale, width, height }
    }

    /// Whether the surface can convert coordinates.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.scale.is_finite() && self.scale > 0.0
    }

    /// Convert a screen-space point to plan coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NotReady`] if the surface has no size or a
    /// degenerate scale.
    pub fn screen_to_local(&self, screen: Point) -> Result<Point, SurfaceError> {
        if !self.is_ready() {
            return Err(SurfaceError::NotReady);
        }
        Ok(Point {
            x: (screen.x - self.left) / self.scale,
            y: (screen.y - self.top) / self.scale,
        })
    }

    /// Convert a plan point to screen coordinates.
    #[must_use]
    pub fn local_to_screen(&self, local: Point) -> Point {
        Point {
            x: local.x * self.scale + self.left,
            y: local.y * self.scale + self.top,
        }
    }
}
