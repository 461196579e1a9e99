//! Design configuration and the style preset tables it falls back to.
//!
//! The configuration is set by the surrounding UI and only ever read here.
//! It picks colors; it never changes where furniture goes.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};

/// Style used when a configuration names one that has no preset.
pub const DEFAULT_STYLE: &str = "modern";

/// Neutral gray used if no palette is available at all.
pub const FALLBACK_COLOR: &str = "#999999";

/// Named style presets and their ordered palettes.
///
/// Slot meaning, by index: 0 upholstery, 1 wood, 2 accent, 3 linen,
/// 4 fixtures, 5 greenery.
const PRESETS: &[(&str, &[&str])] = &[
    ("modern", &["#4a5568", "#a0785a", "#e07a5f", "#f7fafc", "#e2e8f0", "#48bb78"]),
    ("scandinavian", &["#d9d4cc", "#c8a97e", "#7d9cb8", "#ffffff", "#f1efe9", "#6b8f71"]),
    ("industrial", &["#5c5c5c", "#6b4f3a", "#b5651d", "#d8d8d8", "#9aa0a6", "#556b2f"]),
    ("traditional", &["#7b2d26", "#5d3a1a", "#c9a227", "#f5f0e1", "#e8e2d0", "#2e5e3e"]),
    ("minimalist", &["#e5e5e5", "#bfa58a", "#222222", "#fafafa", "#f0f0f0", "#8fa88f"]),
    ("bohemian", &["#c0583a", "#8b5a2b", "#e9b949", "#f4e1c1", "#e6d5b8", "#4f7942"]),
];

/// Ambient style/material/lighting selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignConfig {
    pub style: String,
    /// Explicit palette; overrides the style preset when non-empty.
    pub color_palette: Vec<String>,
    pub furniture_enabled: bool,
    pub materials_enabled: bool,
    pub lighting_style: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_owned(),
            color_palette: Vec::new(),
            furniture_enabled: true,
            materials_enabled: true,
            lighting_style: "natural".to_owned(),
        }
    }
}

impl DesignConfig {
    /// The palette in effect: the explicit one, else the style preset.
    #[must_use]
    pub fn palette(&self) -> Vec<&str> {
        if self.color_palette.is_empty() {
            preset_palette(&self.style).to_vec()
        } else {
            self.color_palette.iter().map(String::as_str).collect()
        }
    }

    /// Color hint for a template slot. Slots wrap around short palettes.
    #[must_use]
    pub fn tint(&self, slot: usize) -> String {
        let palette = self.palette();
        if palette.is_empty() {
            return FALLBACK_COLOR.to_owned();
        }
        palette[slot % palette.len()].to_owned()
    }
}

/// Palette for a style name, falling back to [`DEFAULT_STYLE`].
#[must_use]
pub fn preset_palette(style: &str) -> &'static [&'static str] {
    let lookup = |name: &str| PRESETS.iter().find(|(key, _)| *key == name).map(|&(_, palette)| palette);
    lookup(&style.to_lowercase())
        .or_else(|| lookup(DEFAULT_STYLE))
        .unwrap_or(&[])
}

/// Names of every style preset, in table order.
#[must_use]
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|&(name, _)| name).collect()
}
