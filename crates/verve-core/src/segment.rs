//! Labeled value segments for radial (pie/doughnut) charts

use crate::palette::{PaletteMode, resolve_color};
use serde::{Deserialize, Serialize};

/// One labeled slice value of a radial chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    /// Explicit color on light surfaces, overriding the palette
    pub color: Option<String>,
    /// Explicit color on dark surfaces
    pub dark_color: Option<String>,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
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

    /// Contribution to the radial total; negative and non-finite
    /// values count as zero
    pub fn weight(&self) -> f64 {
        if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            0.0
        }
    }

    /// Drawing color for this segment at slice position `index`
    pub fn resolve_color(&self, index: usize, mode: PaletteMode) -> String {
        resolve_color(index, self.color.as_deref(), self.dark_color.as_deref(), mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE_DARK;

    #[test]
    fn test_segment_builder() {
        let segment = Segment::new("Chrome", 64.0).with_dark_color("#60a5fa");
        assert_eq!(segment.label, "Chrome");
        assert_eq!(segment.value, 64.0);
        assert_eq!(segment.resolve_color(0, PaletteMode::Dark), "#60a5fa");
    }

    #[test]
    fn test_weight_clamps_negatives() {
        assert_eq!(Segment::new("a", -5.0).weight(), 0.0);
        assert_eq!(Segment::new("b", 5.0).weight(), 5.0);
        assert_eq!(Segment::new("c", f64::NAN).weight(), 0.0);
    }

    #[test]
    fn test_palette_fallback() {
        let segment = Segment::new("Other", 1.0);
        assert_eq!(segment.resolve_color(4, PaletteMode::Dark), PALETTE_DARK[4]);
    }

    #[test]
    fn test_segment_serde_roundtrip() {
        let segment = Segment::new("Firefox", 12.5).with_color("#ff7139");
        let json = serde_json::to_string(&segment).unwrap();
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, segment);
    }
}
