//! # verve-charts
//!
//! SVG chart geometry engine for the Verve component library.
//! Turns typed datasets into drawable scene geometry; nothing in this
//! crate touches a DOM, a canvas, or any other drawing surface.
//!
//! ## Pipeline
//!
//! - `scale` - value-to-pixel scaling
//! - `path` - line/smooth path strings and area closure
//! - `bars` - grouped bar rectangles
//! - `sectors` - pie/doughnut sector geometry
//! - `scene` - drawable scene output types
//! - `render` - chart dispatcher assembling scenes from specs

pub mod bars;
pub mod path;
pub mod render;
pub mod scale;
pub mod scene;
pub mod sectors;

pub use bars::*;
pub use path::*;
pub use render::*;
pub use scale::*;
pub use scene::*;
pub use sectors::*;

// Re-export the data model for convenience
pub use verve_core::{ChartKind, PaletteMode, Segment, Series};

/// Chart margin configuration
#[derive(Debug, Clone, Copy)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Cartesian layout: room for value labels left, category labels below
    pub const fn standard() -> Self {
        Self::new(20.0, 20.0, 40.0, 50.0)
    }

    /// Radial layout: sectors are centered, labels stay inside the plot
    pub const fn radial() -> Self {
        Self::uniform(10.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Inner area in absolute viewBox coordinates
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margin.left,
            top: self.margin.top,
            width: self.inner_width(),
            height: self.inner_height(),
        }
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(600.0, 300.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_extents_clamp() {
        let dims = ChartDimensions::new(40.0, 30.0).with_margin(ChartMargin::uniform(50.0));
        assert_eq!(dims.inner_width(), 0.0);
        assert_eq!(dims.inner_height(), 0.0);
    }

    #[test]
    fn test_plot_area() {
        let dims = ChartDimensions::new(600.0, 300.0).with_margin(ChartMargin::standard());
        let plot = dims.plot_area();
        assert_eq!(plot.left, 50.0);
        assert_eq!(plot.top, 20.0);
        assert_eq!(plot.width, 530.0);
        assert_eq!(plot.height, 240.0);
    }
}
