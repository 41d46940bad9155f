//! Pie and doughnut sector geometry

use crate::path::{PathBuilder, Point};
use serde::{Deserialize, Serialize};
use verve_core::{PaletteMode, Segment};

/// Inner-to-outer radius ratio of the doughnut ring
pub const DOUGHNUT_INNER_RATIO: f64 = 0.6;

/// Sectors thinner than this percentage get no value label
pub const LABEL_PERCENT_THRESHOLD: f64 = 5.0;

/// Angle of 12 o'clock in screen coordinates, where the first sector starts
pub const START_ANGLE: f64 = -90.0;

// SVG arcs with coincident endpoints collapse to nothing, so a full
// turn is drawn fractionally short of 360 degrees.
const MAX_DRAWN_SWEEP: f64 = 359.99;

/// Center and radii a sector family is drawn against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl RadialGeometry {
    /// Solid disc, sectors reach the center
    pub fn pie(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            cx,
            cy,
            outer_radius: radius,
            inner_radius: 0.0,
        }
    }

    /// Ring with a hollow center
    pub fn doughnut(cx: f64, cy: f64, radius: f64, inner_ratio: f64) -> Self {
        Self {
            cx,
            cy,
            outer_radius: radius,
            inner_radius: radius * inner_ratio.clamp(0.0, 1.0),
        }
    }

    pub fn is_annular(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// Radius where value labels sit: the rim for pies, mid-ring for
    /// doughnuts
    pub fn label_radius(&self) -> f64 {
        if self.is_annular() {
            (self.inner_radius + self.outer_radius) / 2.0
        } else {
            self.outer_radius
        }
    }

    /// Point at `angle_deg` on a circle of `radius` around the center.
    /// Screen y grows downward, so increasing angles run clockwise.
    pub fn point_at(&self, radius: f64, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(self.cx + radius * rad.cos(), self.cy + radius * rad.sin())
    }
}

/// One angular slice of a radial chart.
///
/// Angles are degrees in screen coordinates: -90 is 12 o'clock and
/// sectors accumulate clockwise. Cartesian geometry is derived on
/// demand against a `RadialGeometry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub label: String,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub color: String,
}

impl Sector {
    /// Angular width in degrees
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// SVG path for this sector: a wedge to the center for pies, an
    /// annular band for doughnuts
    pub fn path(&self, geom: &RadialGeometry) -> String {
        let sweep = self.span().min(MAX_DRAWN_SWEEP);
        let end_angle = self.start_angle + sweep;

        let outer_start = geom.point_at(geom.outer_radius, self.start_angle);
        let outer_end = geom.point_at(geom.outer_radius, end_angle);

        if geom.is_annular() {
            let inner_end = geom.point_at(geom.inner_radius, end_angle);
            let inner_start = geom.point_at(geom.inner_radius, self.start_angle);
            PathBuilder::new()
                .move_to(outer_start)
                .arc_to(geom.outer_radius, self.large_arc, true, outer_end)
                .line_to(inner_end)
                .arc_to(geom.inner_radius, self.large_arc, false, inner_start)
                .close()
                .build()
        } else {
            PathBuilder::new()
                .move_to(Point::new(geom.cx, geom.cy))
                .line_to(outer_start)
                .arc_to(geom.outer_radius, self.large_arc, true, outer_end)
                .close()
                .build()
        }
    }

    /// Anchor point for this sector's value label
    pub fn label_anchor(&self, geom: &RadialGeometry) -> Point {
        geom.point_at(geom.label_radius(), self.mid_angle())
    }
}

/// Build sectors from segments, clockwise from 12 o'clock in input
/// order. Negative and non-finite segment values count as zero weight;
/// a zero total yields zero-span sectors for every segment.
pub fn build_sectors(segments: &[Segment], mode: PaletteMode) -> Vec<Sector> {
    let total: f64 = segments.iter().map(|s| s.weight()).sum();

    let mut sectors = Vec::with_capacity(segments.len());
    let mut cursor = START_ANGLE;

    for (index, segment) in segments.iter().enumerate() {
        let fraction = if total > 0.0 {
            segment.weight() / total
        } else {
            0.0
        };
        let span = fraction * 360.0;
        let start_angle = cursor;
        let end_angle = cursor + span;
        cursor = end_angle;

        sectors.push(Sector {
            label: segment.label.clone(),
            percent: fraction * 100.0,
            start_angle,
            end_angle,
            large_arc: span > 180.0,
            color: segment.resolve_color(index, mode),
        });
    }

    sectors
}
