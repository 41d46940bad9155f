//! Dataset series for Cartesian charts

use crate::palette::{PaletteMode, resolve_color};
use serde::{Deserialize, Serialize};

/// Named, ordered run of numeric values.
/// Values pair positionally with the chart's category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    /// Explicit color on light surfaces, overriding the palette
    pub color: Option<String>,
    /// Explicit color on dark surfaces
    pub dark_color: Option<String>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
            dark_color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_dark_color(mut self, color: impl Into<String>) -> Self {
        self.dark_color = Some(color.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Finite values only; NaN and infinities are treated as absent points
    pub fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| v.is_finite())
    }

    /// (min, max) across finite values
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for v in self.finite_values() {
            range = Some(match range {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// Drawing color for this series at dataset position `index`
    pub fn resolve_color(&self, index: usize, mode: PaletteMode) -> String {
        resolve_color(index, self.color.as_deref(), self.dark_color.as_deref(), mode)
    }
}
