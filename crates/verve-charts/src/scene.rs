//! Drawable scene types handed to the drawing surface

use crate::bars::BarRect;
use crate::sectors::Sector;
use serde::{Deserialize, Serialize};
use verve_core::ChartKind;

/// Inner drawing region in absolute viewBox coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Horizontal gridline across the plot at a value-tick level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
}

/// Value-axis tick with its formatted label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    pub y: f64,
}

/// Category-axis label at its slot center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTick {
    pub label: String,
    pub x: f64,
}

/// Free-floating value callout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Legend entry pairing a dataset label with its resolved color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Drawable geometry, discriminated for the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Shape {
    #[serde(rename = "line")]
    Line {
        series: String,
        path: String,
        color: String,
    },
    /// Filled region under a series plus its stroked top line
    #[serde(rename = "area")]
    Area {
        series: String,
        path: String,
        line: String,
        color: String,
        fill: String,
    },
    #[serde(rename = "bar")]
    Bar {
        series: String,
        rect: BarRect,
        color: String,
    },
    #[serde(rename = "sector")]
    Sector { sector: Sector, path: String },
}

/// Complete drawable scene for one chart.
///
/// Everything a drawing surface needs: plot frame, gridlines, axis
/// ticks, the shapes themselves, optional value labels and legend.
/// `title` and `animate` are passed through untouched for the surface
/// to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub title: Option<String>,
    pub animate: bool,
    pub plot: PlotArea,
    pub gridlines: Vec<GridLine>,
    pub ticks: Vec<AxisTick>,
    pub categories: Vec<CategoryTick>,
    pub shapes: Vec<Shape>,
    pub labels: Vec<ValueLabel>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    /// Scene skeleton with dimensions set and no geometry yet
    pub fn new(kind: ChartKind, width: f64, height: f64) -> Self {
        Self {
            kind,
            width,
            height,
            title: None,
            animate: false,
            plot: PlotArea::default(),
            gridlines: Vec::new(),
            ticks: Vec::new(),
            categories: Vec::new(),
            shapes: Vec::new(),
            labels: Vec::new(),
            legend: Vec::new(),
        }
    }

    /// A scene with nothing to draw
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_edges() {
        let plot = PlotArea {
            left: 50.0,
            top: 20.0,
            width: 530.0,
            height: 240.0,
        };
        assert_eq!(plot.right(), 580.0);
        assert_eq!(plot.bottom(), 260.0);
        assert_eq!(plot.center_x(), 315.0);
        assert_eq!(plot.center_y(), 140.0);
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new(ChartKind::Line, 600.0, 300.0);
        assert!(scene.is_empty());
        assert_eq!(scene.width, 600.0);
        assert!(scene.title.is_none());
    }

    #[test]
    fn test_shape_serde_tagging() {
        let shape = Shape::Line {
            series: "s".into(),
            path: "M0.00,0.00".into(),
            color: "#3b82f6".into(),
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains("\"type\":\"line\""));
        assert!(json.contains("\"data\""));

        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_scene_serde_roundtrip() {
        let mut scene = Scene::new(ChartKind::Bar, 600.0, 300.0);
        scene.title = Some("Quarterly".into());
        scene.shapes.push(Shape::Bar {
            series: "s".into(),
            rect: crate::bars::BarRect {
                category_index: 0,
                dataset_index: 0,
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            },
            color: "#ef4444".into(),
        });

        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }
}
