//! Categorical palette and color resolution for chart datasets

use serde::{Deserialize, Serialize};

// ============================================================================
// DRAW MODES
// ============================================================================

/// Light/dark draw mode selecting which palette table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaletteMode {
    #[default]
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl PaletteMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Palette table for this mode
    pub fn table(&self) -> &'static [&'static str] {
        match self {
            Self::Light => &PALETTE_LIGHT,
            Self::Dark => &PALETTE_DARK,
        }
    }
}

impl std::fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// PALETTE TABLES
// ============================================================================

/// Default series colors on light surfaces (Tailwind 500 series)
pub const PALETTE_LIGHT: [&str; 10] = [
    "#3b82f6", // blue
    "#10b981", // emerald
    "#f59e0b", // amber
    "#ef4444", // red
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#f97316", // orange
    "#14b8a6", // teal
];

/// Brighter counterparts for dark surfaces (Tailwind 400 series)
pub const PALETTE_DARK: [&str; 10] = [
    "#60a5fa", "#34d399", "#fbbf24", "#f87171", "#a78bfa",
    "#f472b6", "#22d3ee", "#a3e635", "#fb923c", "#2dd4bf",
];

// ============================================================================
// COLOR RESOLUTION
// ============================================================================

/// Palette entry for a dataset index, wrapping past the table end
pub fn palette_color(index: usize, mode: PaletteMode) -> &'static str {
    let table = mode.table();
    table[index % table.len()]
}

/// Resolve the drawing color for the dataset at `index`: an explicit
/// override for the active mode wins, otherwise the palette cycles.
pub fn resolve_color(
    index: usize,
    light: Option<&str>,
    dark: Option<&str>,
    mode: PaletteMode,
) -> String {
    let explicit = match mode {
        PaletteMode::Light => light,
        PaletteMode::Dark => dark,
    };

    match explicit {
        Some(color) => color.to_string(),
        None => palette_color(index, mode).to_string(),
    }
}

/// Translucent `rgba(...)` form of a hex color, for area fills.
/// Non-hex input is returned unchanged.
pub fn alpha_color(color: &str, alpha: f64) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {:.2})", r, g, b, alpha),
        None => color.to_string(),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
