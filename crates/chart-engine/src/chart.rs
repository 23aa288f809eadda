// File: crates/chart-engine/src/chart.rs
// Summary: Schema-to-geometry dispatcher: frames, scales, ticks, archetype routing.

use std::str::FromStr;

use thiserror::Error;

use crate::extent::{numeric_extent, temporal_extent, Domain};
use crate::format::{format_number, format_time};
use crate::geometry::{AreaShape, Dot, Rect, SeriesPath, Tick};
use crate::hover::{self, HoverTarget, TooltipRow};
use crate::path::{area_path, line_path, marker_points, segment};
use crate::scale::{BandScale, LinearScale, TimeScale, XScale};
use crate::schema::{infer_x_axis, AxisSpec, ChartKind, ChartSchema, XAxisKind};
use crate::stack;
use crate::theme;
use crate::ticks::ticks;
use crate::types::{Frame, Insets, HEIGHT, WIDTH};

/// Default tick counts when the axis spec is silent.
pub const DEFAULT_X_TICKS: usize = 5;
pub const DEFAULT_Y_TICKS: usize = 4;

/// Marker radius for line markers and scatter dots.
pub const MARKER_RADIUS: f64 = 3.0;

/// Outer padding between category bands of a bar chart.
pub const BAR_OUTER_PADDING: f64 = 0.2;

/// Decimal places on numeric axis labels.
const AXIS_PRECISION: usize = 2;

/// Time pattern for x-axis tick labels when the spec names none.
const DEFAULT_TIME_PATTERN: &str = "HH:MM";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unsupported chart type: {0:?}")]
    UnsupportedType(String),
}

/// A render either yields a scene or the empty state. The empty state is a
/// valid outcome (no series, all-gap data), distinct from a chart error.
#[derive(Clone, Debug, PartialEq)]
pub enum Render {
    Empty,
    Scene(ChartScene),
}

impl Render {
    pub fn scene(&self) -> Option<&ChartScene> {
        match self {
            Render::Scene(s) => Some(s),
            Render::Empty => None,
        }
    }
}

/// Archetype-specific geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartBody {
    Line { paths: Vec<SeriesPath>, markers: Vec<Dot> },
    Area { shapes: Vec<AreaShape> },
    Bar { rects: Vec<Rect>, categories: Vec<String> },
    Scatter { dots: Vec<Dot> },
}

/// The complete geometry description for one render: coordinate frame, axis
/// ticks, and the archetype body. Pixel-space only; the scene keeps the x
/// scale and axis typing so pointer hit-tests can reuse them, but holds no
/// reference back to the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub kind: ChartKind,
    pub frame: Frame,
    pub x_scale: XScale,
    pub x_kind: XAxisKind,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub body: ChartBody,
}

impl ChartScene {
    /// Nearest-point hit-test for line/area charts; pointer coordinates are
    /// plot-local. Bar and scatter hover is element-level, driven by the
    /// renderer's own pointer-over events, so those kinds return `None`.
    pub fn hit_test(&self, schema: &ChartSchema, pointer_x: f64) -> Option<HoverTarget> {
        match self.kind {
            ChartKind::Line | ChartKind::Area => hover::nearest_point(
                &schema.series,
                &self.x_scale,
                pointer_x,
                self.frame.inner_width(),
            ),
            ChartKind::Bar | ChartKind::Scatter => None,
        }
    }

    /// Display rows for a hover target: x row first, then the series row.
    pub fn tooltip(&self, schema: &ChartSchema, target: HoverTarget) -> Vec<TooltipRow> {
        match target {
            HoverTarget::Point { series, point } => match schema.series.get(series) {
                Some(s) => hover::point_tooltip_rows(
                    s,
                    point,
                    schema.x_axis.as_ref(),
                    self.x_kind,
                ),
                None => Vec::new(),
            },
            HoverTarget::Bar { series, category } => {
                let categories = match &self.body {
                    ChartBody::Bar { categories, .. } => categories.clone(),
                    _ => stack::category_domain(&schema.series),
                };
                hover::bar_tooltip_rows(
                    &schema.series,
                    &categories,
                    series,
                    category,
                    schema.x_axis.as_ref(),
                )
            }
        }
    }
}

/// Turn a declarative schema into pixel-space geometry. Pure and idempotent:
/// every call recomputes from scratch and identical inputs give identical
/// scenes.
pub fn render(schema: &ChartSchema) -> Result<Render, ChartError> {
    let kind = ChartKind::from_str(&schema.chart_type)
        .map_err(|_| ChartError::UnsupportedType(schema.chart_type.clone()))?;
    if schema.series.is_empty() {
        return Ok(Render::Empty);
    }
    let frame = Frame::new(
        schema.canvas_width.unwrap_or(WIDTH),
        schema.canvas_height.unwrap_or(HEIGHT),
        Insets::default(),
    );
    match kind {
        ChartKind::Bar => Ok(render_bar(schema, frame)),
        ChartKind::Line | ChartKind::Area | ChartKind::Scatter => {
            Ok(render_xy(schema, frame, kind))
        }
    }
}

fn render_xy(schema: &ChartSchema, frame: Frame, kind: ChartKind) -> Render {
    let x_kind = resolve_x_kind(schema);

    let y_domain = match numeric_extent(
        schema
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.y),
    ) {
        Some(d) => d,
        None => return Render::Empty,
    };
    let y_scale = LinearScale::new(y_domain, frame.y_range());

    let all_x = || schema.series.iter().flat_map(|s| s.points.iter()).map(|p| &p.x);
    let x_scale = match x_kind {
        XAxisKind::Numeric => {
            match numeric_extent(all_x().map(|x| x.as_number())) {
                Some(d) => XScale::Linear(LinearScale::new(d, frame.x_range())),
                None => return Render::Empty,
            }
        }
        XAxisKind::Temporal => match temporal_extent(all_x()) {
            Some(d) => XScale::Time(TimeScale::new(d, frame.x_range())),
            None => return Render::Empty,
        },
        XAxisKind::Categorical => {
            let categories = stack::category_domain(&schema.series);
            if categories.is_empty() {
                return Render::Empty;
            }
            XScale::Band(BandScale::new(categories, frame.x_range(), 0.0))
        }
    };

    let x_ticks = build_x_ticks(&x_scale, schema.x_axis.as_ref());
    let y_ticks = build_y_ticks(&y_scale, schema.y_axis.as_ref());

    let body = match kind {
        ChartKind::Line => line_body(schema, &x_scale, &y_scale),
        ChartKind::Area => area_body(schema, &x_scale, &y_scale, frame.y_range().0),
        ChartKind::Scatter => scatter_body(schema, &x_scale, &y_scale),
        ChartKind::Bar => unreachable!("bar charts take the band layout path"),
    };

    Render::Scene(ChartScene { kind, frame, x_scale, x_kind, x_ticks, y_ticks, body })
}

fn render_bar(schema: &ChartSchema, frame: Frame) -> Render {
    let categories = stack::category_domain(&schema.series);
    if categories.is_empty() {
        return Render::Empty;
    }
    let stacked = schema.stacked.unwrap_or(false);
    let y_domain = stack::bar_y_domain(&schema.series, &categories, stacked);
    let y_scale = LinearScale::new(y_domain, frame.y_range());
    let band = BandScale::new(categories.clone(), frame.x_range(), BAR_OUTER_PADDING);

    let rects = stack::bar_rects(&schema.series, &categories, &band, &y_scale, stacked);
    let x_ticks = categories
        .iter()
        .map(|c| Tick { px: band.center(c), label: c.clone() })
        .collect();
    let y_ticks = build_y_ticks(&y_scale, schema.y_axis.as_ref());

    Render::Scene(ChartScene {
        kind: ChartKind::Bar,
        frame,
        x_scale: XScale::Band(band),
        x_kind: XAxisKind::Categorical,
        x_ticks,
        y_ticks,
        body: ChartBody::Bar { rects, categories },
    })
}

fn line_body(schema: &ChartSchema, x_scale: &XScale, y_scale: &LinearScale) -> ChartBody {
    let mut paths = Vec::with_capacity(schema.series.len());
    let mut markers = Vec::new();
    let show_markers = schema.show_markers.unwrap_or(false);
    for (si, s) in schema.series.iter().enumerate() {
        let segments = segment(&s.points);
        let stroke = theme::series_color(s.color.as_deref().or(s.stroke_color.as_deref()), si);
        paths.push(SeriesPath {
            name: s.name.clone(),
            stroke: stroke.clone(),
            path: line_path(&segments, x_scale, y_scale),
        });
        if show_markers {
            markers.extend(marker_points(&s.points, x_scale, y_scale).into_iter().map(
                |(cx, cy)| Dot { cx, cy, r: MARKER_RADIUS, fill: stroke.clone(), series: si },
            ));
        }
    }
    ChartBody::Line { paths, markers }
}

fn area_body(
    schema: &ChartSchema,
    x_scale: &XScale,
    y_scale: &LinearScale,
    baseline_px: f64,
) -> ChartBody {
    let shapes = schema
        .series
        .iter()
        .enumerate()
        .map(|(si, s)| {
            let segments = segment(&s.points);
            AreaShape {
                name: s.name.clone(),
                stroke: theme::series_color(
                    s.stroke_color.as_deref().or(s.color.as_deref()),
                    si,
                ),
                fill: theme::fill_color(s.fill_color.as_deref(), si),
                gradient: s.use_gradient_fill.unwrap_or(false),
                stroke_path: line_path(&segments, x_scale, y_scale),
                fill_path: area_path(&segments, x_scale, y_scale, baseline_px),
            }
        })
        .collect();
    ChartBody::Area { shapes }
}

fn scatter_body(schema: &ChartSchema, x_scale: &XScale, y_scale: &LinearScale) -> ChartBody {
    let mut dots = Vec::new();
    for (si, s) in schema.series.iter().enumerate() {
        let fill = theme::series_color(s.color.as_deref(), si);
        dots.extend(marker_points(&s.points, x_scale, y_scale).into_iter().map(
            |(cx, cy)| Dot { cx, cy, r: MARKER_RADIUS, fill: fill.clone(), series: si },
        ));
    }
    ChartBody::Scatter { dots }
}

/// Numeric x axes flip to temporal when the axis spec carries a time
/// pattern; epoch-millis data arrives as plain numbers, so the pattern is
/// the only signal that it means time.
fn resolve_x_kind(schema: &ChartSchema) -> XAxisKind {
    let inferred = infer_x_axis(&schema.series);
    if inferred == XAxisKind::Numeric {
        if let Some(fmt) = schema.x_axis.as_ref().and_then(|a| a.display_format.as_deref()) {
            if fmt == "HH:MM" || fmt == "MM/DD HH:MM" {
                return XAxisKind::Temporal;
            }
        }
    }
    inferred
}

fn build_x_ticks(x_scale: &XScale, axis: Option<&AxisSpec>) -> Vec<Tick> {
    let count = tick_count(axis, DEFAULT_X_TICKS);
    match x_scale {
        XScale::Linear(s) => numeric_ticks(s.domain, count, |v| s.to_px(v)),
        XScale::Time(s) => {
            let pattern = axis
                .and_then(|a| a.display_format.as_deref())
                .unwrap_or(DEFAULT_TIME_PATTERN);
            ticks(s.domain(), count)
                .into_iter()
                .map(|v| Tick { px: s.millis_to_px(v), label: format_time(v, pattern) })
                .collect()
        }
        XScale::Band(s) => s
            .domain()
            .iter()
            .map(|c| Tick { px: s.center(c), label: c.clone() })
            .collect(),
    }
}

fn build_y_ticks(y_scale: &LinearScale, axis: Option<&AxisSpec>) -> Vec<Tick> {
    let count = tick_count(axis, DEFAULT_Y_TICKS);
    numeric_ticks(y_scale.domain, count, |v| y_scale.to_px(v))
}

fn numeric_ticks(domain: Domain, count: usize, to_px: impl Fn(f64) -> f64) -> Vec<Tick> {
    ticks(domain, count)
        .into_iter()
        .map(|v| Tick { px: to_px(v), label: format_number(v, AXIS_PRECISION) })
        .collect()
}

fn tick_count(axis: Option<&AxisSpec>, default: usize) -> usize {
    axis.and_then(|a| a.tick_count).unwrap_or(default).max(1)
}
