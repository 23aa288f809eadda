// File: crates/chart-engine/src/schema.rs
// Summary: Declarative chart schema (serde model) and chart kind parsing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::extent::try_timestamp;

/// An x value as it appears on the wire: numeric (plain number or epoch
/// millis) or text (date string or category name). Which interpretation
/// applies is fixed per chart, never per point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Text(String),
}

impl XValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            XValue::Number(n) => Some(*n),
            XValue::Text(_) => None,
        }
    }

    /// Category key for band scales: numbers are stringified, text verbatim.
    pub fn category(&self) -> String {
        match self {
            XValue::Number(n) => format!("{n}"),
            XValue::Text(s) => s.clone(),
        }
    }
}

/// One data point. `y: None` marks a gap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: XValue,
    /// Missing or null on the wire both mean a gap.
    #[serde(default)]
    pub y: Option<f64>,
}

impl Point {
    pub fn new(x: impl Into<XValue>, y: Option<f64>) -> Self {
        Self { x: x.into(), y }
    }

    /// A gap is a missing or non-finite y.
    pub fn is_gap(&self) -> bool {
        match self.y {
            Some(y) => !y.is_finite(),
            None => true,
        }
    }
}

impl From<f64> for XValue {
    fn from(n: f64) -> Self { XValue::Number(n) }
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self { XValue::Text(s.to_string()) }
}

impl From<String> for XValue {
    fn from(s: String) -> Self { XValue::Text(s) }
}

/// A named series. Point order defines path direction; the engine does not
/// sort, so non-monotonic input draws self-intersecting paths as given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_gradient_fill: Option<bool>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), points, ..Default::default() }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Axis configuration. All fields optional; the dispatcher supplies defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_format: Option<String>,
}

/// The full declarative chart request handed in by the surrounding app.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSchema {
    pub chart_type: String,
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisSpec>,
    /// Bar charts only; ignored elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    /// Line charts only; ignored elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_markers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<f64>,
}

impl ChartSchema {
    pub fn new(chart_type: impl Into<String>, series: Vec<Series>) -> Self {
        Self { chart_type: chart_type.into(), series, ..Default::default() }
    }
}

/// The supported chart archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    Scatter,
}

impl FromStr for ChartKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ChartKind::Line),
            "area" => Ok(ChartKind::Area),
            "bar" => Ok(ChartKind::Bar),
            "scatter" => Ok(ChartKind::Scatter),
            _ => Err(()),
        }
    }
}

/// How x values are interpreted for one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxisKind {
    Numeric,
    Temporal,
    Categorical,
}

/// Infer the x-axis typing from the data: all-numeric x is a numeric axis;
/// otherwise, if every text x parses as a date the axis is temporal; any
/// remaining text makes the axis categorical.
pub fn infer_x_axis(series: &[Series]) -> XAxisKind {
    let mut saw_text = false;
    let mut text_all_temporal = true;
    for s in series {
        for p in &s.points {
            if let XValue::Text(_) = p.x {
                saw_text = true;
                if try_timestamp(&p.x).is_none() {
                    text_all_temporal = false;
                }
            }
        }
    }
    if !saw_text {
        XAxisKind::Numeric
    } else if text_all_temporal {
        XAxisKind::Temporal
    } else {
        XAxisKind::Categorical
    }
}
