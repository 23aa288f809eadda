// File: crates/chart-engine/src/geometry.rs
// Summary: Terminal pixel-space geometry descriptors handed to the renderer.

use serde::Serialize;

/// Axis-aligned rectangle (bar geometry).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Series index within the schema; addresses element-level hover.
    pub series: usize,
    /// Category index within the band domain.
    pub category: usize,
}

/// Circle marker (scatter points, line markers).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
    pub series: usize,
}

/// One axis tick: pixel position along the axis plus its label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub px: f64,
    pub label: String,
}

/// Stroke path for one line series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPath {
    pub name: String,
    pub stroke: String,
    pub path: String,
}

/// Stroke + fill geometry for one area series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaShape {
    pub name: String,
    pub stroke: String,
    pub fill: String,
    pub gradient: bool,
    pub stroke_path: String,
    pub fill_path: String,
}
