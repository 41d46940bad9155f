//! Chart dispatcher: a chart spec plus options in, a drawable scene out

use crate::bars::build_bars;
use crate::path::{Point, close_area, line_path, smooth_path};
use crate::scale::ValueScale;
use crate::scene::{AxisTick, CategoryTick, GridLine, LegendEntry, Scene, Shape, ValueLabel};
use crate::sectors::{
    DOUGHNUT_INNER_RATIO, LABEL_PERCENT_THRESHOLD, RadialGeometry, build_sectors,
};
use crate::{ChartDimensions, ChartMargin};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use verve_core::{
    ChartKind, FixedFormatter, PaletteMode, Segment, Series, ValueFormatter, alpha_color,
    percent_label,
};

/// Value-axis levels per Cartesian chart
pub const TICK_LEVELS: usize = 5;

/// Outer sector radius as a fraction of the plot's half-extent
pub const RADIAL_RADIUS_RATIO: f64 = 0.8;

/// Opacity of area fills derived from the series color
pub const AREA_FILL_ALPHA: f64 = 0.25;

// ============================================================================
// CHART SPEC
// ============================================================================

/// Closed union of everything the engine can draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChartSpec {
    #[serde(rename = "line")]
    Line {
        categories: Vec<String>,
        series: Vec<Series>,
    },
    #[serde(rename = "area")]
    Area {
        categories: Vec<String>,
        series: Vec<Series>,
    },
    #[serde(rename = "bar")]
    Bar {
        categories: Vec<String>,
        series: Vec<Series>,
    },
    #[serde(rename = "pie")]
    Pie { segments: Vec<Segment> },
    #[serde(rename = "doughnut")]
    Doughnut { segments: Vec<Segment> },
}

impl ChartSpec {
    pub fn line(
        categories: impl IntoIterator<Item = impl Into<String>>,
        series: Vec<Series>,
    ) -> Self {
        Self::Line {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
        }
    }

    pub fn area(
        categories: impl IntoIterator<Item = impl Into<String>>,
        series: Vec<Series>,
    ) -> Self {
        Self::Area {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
        }
    }

    pub fn bar(
        categories: impl IntoIterator<Item = impl Into<String>>,
        series: Vec<Series>,
    ) -> Self {
        Self::Bar {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
        }
    }

    pub fn pie(segments: Vec<Segment>) -> Self {
        Self::Pie { segments }
    }

    pub fn doughnut(segments: Vec<Segment>) -> Self {
        Self::Doughnut { segments }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line { .. } => ChartKind::Line,
            Self::Area { .. } => ChartKind::Area,
            Self::Bar { .. } => ChartKind::Bar,
            Self::Pie { .. } => ChartKind::Pie,
            Self::Doughnut { .. } => ChartKind::Doughnut,
        }
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Rendering options shared by every chart kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub width: f64,
    pub height: f64,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_values: bool,
    /// Smoothed interpolation for line and area charts
    pub smooth: bool,
    /// Passed through to the scene, no geometric effect
    pub animate: bool,
    pub mode: PaletteMode,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            width: 600.0,
            height: 300.0,
            show_legend: true,
            show_grid: true,
            show_values: false,
            smooth: false,
            animate: false,
            mode: PaletteMode::Light,
        }
    }
}

impl ChartOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mode(mut self, mode: PaletteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn smoothed(mut self) -> Self {
        self.smooth = true;
        self
    }

    pub fn with_values(mut self) -> Self {
        self.show_values = true;
        self
    }
}

// ============================================================================
// DISPATCHER
// ============================================================================

/// Build the drawable scene for a chart spec.
///
/// Never fails: empty or degenerate input degrades to an empty or
/// partial scene with dimensions and pass-through options still set.
pub fn render(spec: &ChartSpec, options: &ChartOptions) -> Scene {
    let scene = match spec {
        ChartSpec::Line { categories, series } => {
            render_cartesian(ChartKind::Line, categories, series, options)
        }
        ChartSpec::Area { categories, series } => {
            render_cartesian(ChartKind::Area, categories, series, options)
        }
        ChartSpec::Bar { categories, series } => {
            render_cartesian(ChartKind::Bar, categories, series, options)
        }
        ChartSpec::Pie { segments } => render_radial(ChartKind::Pie, segments, options),
        ChartSpec::Doughnut { segments } => render_radial(ChartKind::Doughnut, segments, options),
    };

    trace!(
        "rendered {} chart: {} shapes, {} labels, {} legend entries",
        scene.kind,
        scene.shapes.len(),
        scene.labels.len(),
        scene.legend.len()
    );
    scene
}

fn render_cartesian(
    kind: ChartKind,
    categories: &[String],
    series: &[Series],
    options: &ChartOptions,
) -> Scene {
    let dims = ChartDimensions::new(options.width, options.height)
        .with_margin(ChartMargin::standard());
    let plot = dims.plot_area();

    let mut scene = Scene::new(kind, options.width, options.height);
    scene.title = options.title.clone();
    scene.animate = options.animate;
    scene.plot = plot;

    if series.is_empty() {
        return scene;
    }
    if categories.is_empty() {
        warn!("no categories supplied for {} series; nothing to draw", series.len());
        return scene;
    }
    for s in series {
        if s.len() != categories.len() {
            warn!(
                "series '{}' has {} values for {} categories; pairing is positional",
                s.label,
                s.len(),
                categories.len()
            );
        }
    }

    let scale = ValueScale::compute(
        series.iter().flat_map(|s| s.finite_values()),
        plot.height,
        plot.top,
    );

    let formatter = FixedFormatter::default();
    for (value, y) in scale.ticks(TICK_LEVELS) {
        if options.show_grid {
            scene.gridlines.push(GridLine {
                y,
                x1: plot.left,
                x2: plot.right(),
            });
        }
        scene.ticks.push(AxisTick {
            value,
            label: formatter.format(value),
            y,
        });
    }

    let slot = plot.width / categories.len() as f64;
    for (i, label) in categories.iter().enumerate() {
        scene.categories.push(CategoryTick {
            label: label.clone(),
            x: plot.left + (i as f64 + 0.5) * slot,
        });
    }

    let colors: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(i, s)| s.resolve_color(i, options.mode))
        .collect();

    if kind == ChartKind::Bar {
        for bar in build_bars(series, &scale, categories.len(), plot.width, plot.left) {
            if options.show_values {
                let value = series
                    .get(bar.dataset_index)
                    .and_then(|s| s.values.get(bar.category_index));
                if let Some(&value) = value {
                    let y = if value >= 0.0 {
                        bar.y - 6.0
                    } else {
                        bar.bottom() + 14.0
                    };
                    scene.labels.push(ValueLabel {
                        text: formatter.format(value),
                        x: bar.x + bar.width / 2.0,
                        y,
                    });
                }
            }
            scene.shapes.push(Shape::Bar {
                series: series[bar.dataset_index].label.clone(),
                color: colors[bar.dataset_index].clone(),
                rect: bar,
            });
        }
    } else {
        for (index, s) in series.iter().enumerate() {
            let points = series_points(s, categories.len(), &scale, slot, plot.left);
            if points.is_empty() {
                continue;
            }

            let stroke = if options.smooth {
                smooth_path(&points)
            } else {
                line_path(&points)
            };
            let color = colors[index].clone();

            if kind == ChartKind::Area {
                let first = points[0];
                let last = points[points.len() - 1];
                let region = close_area(&stroke, first, last, scale.origin_px);
                scene.shapes.push(Shape::Area {
                    series: s.label.clone(),
                    path: region,
                    line: stroke,
                    fill: alpha_color(&color, AREA_FILL_ALPHA),
                    color,
                });
            } else {
                scene.shapes.push(Shape::Line {
                    series: s.label.clone(),
                    path: stroke,
                    color,
                });
            }

            if options.show_values {
                for (i, &value) in s.values.iter().take(categories.len()).enumerate() {
                    if !value.is_finite() {
                        continue;
                    }
                    scene.labels.push(ValueLabel {
                        text: formatter.format(value),
                        x: plot.left + (i as f64 + 0.5) * slot,
                        y: scale.y(value) - 6.0,
                    });
                }
            }
        }
    }

    if options.show_legend {
        for (i, s) in series.iter().enumerate() {
            scene.legend.push(LegendEntry {
                label: s.label.clone(),
                color: colors[i].clone(),
            });
        }
    }

    scene
}

/// Points at category slot centers; values past the category axis are
/// dropped and non-finite values leave gaps.
fn series_points(
    series: &Series,
    category_count: usize,
    scale: &ValueScale,
    slot: f64,
    plot_left: f64,
) -> Vec<Point> {
    series
        .values
        .iter()
        .take(category_count)
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| Point::new(plot_left + (i as f64 + 0.5) * slot, scale.y(v)))
        .collect()
}

fn render_radial(kind: ChartKind, segments: &[Segment], options: &ChartOptions) -> Scene {
    let dims =
        ChartDimensions::new(options.width, options.height).with_margin(ChartMargin::radial());
    let plot = dims.plot_area();

    let mut scene = Scene::new(kind, options.width, options.height);
    scene.title = options.title.clone();
    scene.animate = options.animate;
    scene.plot = plot;

    if segments.is_empty() {
        return scene;
    }

    let outer = (plot.width.min(plot.height) / 2.0) * RADIAL_RADIUS_RATIO;
    let geom = if kind == ChartKind::Doughnut {
        RadialGeometry::doughnut(plot.center_x(), plot.center_y(), outer, DOUGHNUT_INNER_RATIO)
    } else {
        RadialGeometry::pie(plot.center_x(), plot.center_y(), outer)
    };

    for sector in build_sectors(segments, options.mode) {
        if options.show_values && sector.percent >= LABEL_PERCENT_THRESHOLD {
            let anchor = sector.label_anchor(&geom);
            scene.labels.push(ValueLabel {
                text: percent_label(sector.percent),
                x: anchor.x,
                y: anchor.y,
            });
        }
        if options.show_legend {
            scene.legend.push(LegendEntry {
                label: sector.label.clone(),
                color: sector.color.clone(),
            });
        }
        let path = sector.path(&geom);
        scene.shapes.push(Shape::Sector { sector, path });
    }

    scene
}
