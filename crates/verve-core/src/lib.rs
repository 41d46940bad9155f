//! # verve-core
//!
//! Chart data model for the Verve component library.
//! Implements Strategy pattern for value formatting.

pub mod palette;
pub mod segment;
pub mod series;

pub use palette::*;
pub use segment::*;
pub use series::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for axis and label value formatting
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Fixed-precision formatter with configurable decimals.
/// Whole numbers drop the fractional part entirely.
#[derive(Debug, Clone)]
pub struct FixedFormatter {
    pub decimals: usize,
}

impl Default for FixedFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl ValueFormatter for FixedFormatter {
    fn format(&self, value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.prec$}", value, prec = self.decimals)
        }
    }
}

/// Compact formatter for large axis values (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactFormatter;

impl ValueFormatter for CompactFormatter {
    fn format(&self, value: f64) -> String {
        let abs = value.abs();
        let sign = if value < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.1}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.1}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.1}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.0}", sign, abs)
        }
    }
}

/// Percent callout for sector labels ("41.7%")
pub fn percent_label(percent: f64) -> String {
    format!("{:.1}%", percent)
}

// ============================================================================
// CHART KIND
// ============================================================================

/// Chart family tag, carried by chart specs and the scenes built from them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "area")]
    Area,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "pie")]
    Pie,
    #[serde(rename = "doughnut")]
    Doughnut,
}

impl ChartKind {
    /// Pie and doughnut charts share the radial layout path
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }

    pub fn is_cartesian(&self) -> bool {
        !self.is_radial()
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Area => "Area",
            Self::Bar => "Bar",
            Self::Pie => "Pie",
            Self::Doughnut => "Doughnut",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_formatter() {
        let formatter = FixedFormatter::default();
        assert_eq!(formatter.format(100.0), "100");
        assert_eq!(formatter.format(12.5), "12.5");
        assert_eq!(formatter.format(-3.25), "-3.2");
    }

    #[test]
    fn test_fixed_formatter_decimals() {
        let formatter = FixedFormatter { decimals: 3 };
        assert_eq!(formatter.format(0.12345), "0.123");
    }

    #[test]
    fn test_compact_formatter() {
        let formatter = CompactFormatter;
        assert_eq!(formatter.format(1_500_000.0), "1.5M");
        assert_eq!(formatter.format(2_500.0), "2.5K");
        assert_eq!(formatter.format(500.0), "500");
        assert_eq!(formatter.format(-3_000_000_000.0), "-3.0B");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(41.666), "41.7%");
        assert_eq!(percent_label(100.0), "100.0%");
    }

    #[test]
    fn test_chart_kind_families() {
        assert!(ChartKind::Pie.is_radial());
        assert!(ChartKind::Doughnut.is_radial());
        assert!(ChartKind::Line.is_cartesian());
        assert!(ChartKind::Bar.is_cartesian());
    }

    #[test]
    fn test_chart_kind_serde() {
        let json = serde_json::to_string(&ChartKind::Doughnut).unwrap();
        assert_eq!(json, "\"doughnut\"");
        let kind: ChartKind = serde_json::from_str("\"pie\"").unwrap();
        assert_eq!(kind, ChartKind::Pie);
    }
}
