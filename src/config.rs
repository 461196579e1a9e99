//! Render settings parsed from environment variables.
//!
//! - `FLOORPLAN_PX_PER_METER` (default: `50`)
//! - `FLOORPLAN_MARGIN` (meters, default: `1.0`)
//!
//! Malformed values fall back to the default. `FLOORPLAN_SEED` is read by
//! the `render` command line itself.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use layout::consts::{DEFAULT_MARGIN, DEFAULT_PX_PER_METER};
use layout::render::RenderOptions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub px_per_meter: f64,
    pub margin: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { px_per_meter: DEFAULT_PX_PER_METER, margin: DEFAULT_MARGIN }
    }
}

impl RenderConfig {
    /// Build config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            px_per_meter: parse_f64(lookup("FLOORPLAN_PX_PER_METER"), DEFAULT_PX_PER_METER, |v| v > 0.0),
            margin: parse_f64(lookup("FLOORPLAN_MARGIN"), DEFAULT_MARGIN, |v| v >= 0.0),
        }
    }

    #[must_use]
    pub fn options(&self) -> RenderOptions {
        RenderOptions { px_per_meter: self.px_per_meter, margin: self.margin }
    }
}

fn parse_f64(raw: Option<String>, default: f64, accept: impl Fn(f64) -> bool) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && accept(*v))
        .unwrap_or(default)
}
