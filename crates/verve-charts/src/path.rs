//! SVG path assembly: straight and smoothed polylines, area closure

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Pixel-space point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, p: Point) -> Self {
        write!(self.commands, "M{:.2},{:.2}", p.x, p.y).unwrap();
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        write!(self.commands, "L{:.2},{:.2}", p.x, p.y).unwrap();
        self
    }

    pub fn quadratic_to(mut self, ctrl: Point, end: Point) -> Self {
        write!(
            self.commands,
            "Q{:.2},{:.2},{:.2},{:.2}",
            ctrl.x, ctrl.y, end.x, end.y
        )
        .unwrap();
        self
    }

    /// Circular arc of the given radius to `end`
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, end: Point) -> Self {
        write!(
            self.commands,
            "A{:.2},{:.2},0,{},{},{:.2},{:.2}",
            radius, radius, large_arc as u8, sweep as u8, end.x, end.y
        )
        .unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// POLYLINE GENERATORS
// ============================================================================

/// Straight polyline through every point: `M` then one `L` per point
pub fn line_path(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20);
    write!(path, "M{:.2},{:.2}", points[0].x, points[0].y).unwrap();

    for p in &points[1..] {
        write!(path, "L{:.2},{:.2}", p.x, p.y).unwrap();
    }

    path
}

/// Smoothed polyline that still passes through every input point.
///
/// Each consecutive pair is joined by two quadratic segments meeting at
/// the pair's midpoint, with both control points at the midpoint x. The
/// curve's y never leaves the pair's own vertical range, so smoothing
/// cannot overshoot the data.
pub fn smooth_path(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 48);
    write!(path, "M{:.2},{:.2}", points[0].x, points[0].y).unwrap();

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let xm = (p0.x + p1.x) / 2.0;
        let ym = (p0.y + p1.y) / 2.0;
        write!(path, "Q{:.2},{:.2},{:.2},{:.2}", xm, p0.y, xm, ym).unwrap();
        write!(path, "Q{:.2},{:.2},{:.2},{:.2}", xm, p1.y, p1.x, p1.y).unwrap();
    }

    path
}

/// Close a polyline into a filled region against a horizontal baseline.
/// The input path is kept verbatim as the region's top boundary.
pub fn close_area(line_path: &str, first: Point, last: Point, baseline_y: f64) -> String {
    if line_path.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(line_path.len() + 48);
    path.push_str(line_path);
    write!(path, "L{:.2},{:.2}", last.x, baseline_y).unwrap();
    write!(path, "L{:.2},{:.2}", first.x, baseline_y).unwrap();
    path.push('Z');
    path
}
