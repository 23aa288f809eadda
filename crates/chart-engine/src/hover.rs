// File: crates/chart-engine/src/hover.rs
// Summary: Tooltip hit-testing and label/value row construction.

use crate::format::{format_number, format_time, TOOLTIP_PRECISION};
use crate::extent::to_timestamp;
use crate::scale::XScale;
use crate::schema::{AxisSpec, Series, XAxisKind};

/// One display-ready tooltip line.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

/// What the pointer currently rests on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    /// Nearest-point hit for line/area, or a scatter dot hovered directly.
    Point { series: usize, point: usize },
    /// A bar hovered directly (element-level event from the renderer).
    Bar { series: usize, category: usize },
}

/// The hovered item for one render session. Fully replaced on every pointer
/// move, never merged; the only mutable state the engine owns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<HoverTarget>,
}

impl HoverState {
    pub fn set(&mut self, target: HoverTarget) {
        self.current = Some(target);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<HoverTarget> {
        self.current
    }
}

/// Nearest valid point to the pointer by scaled x distance, for line/area
/// charts. The pointer x is clamped to `[0, inner_width]` first. Ties go to
/// the first point encountered in series/point order. `None` means no valid
/// point exists and the tooltip is not visible.
pub fn nearest_point(
    series: &[Series],
    x_scale: &XScale,
    pointer_x: f64,
    inner_width: f64,
) -> Option<HoverTarget> {
    let px = pointer_x.clamp(0.0, inner_width);
    let mut best: Option<(f64, HoverTarget)> = None;
    for (si, s) in series.iter().enumerate() {
        for (pi, p) in s.points.iter().enumerate() {
            if p.is_gap() {
                continue;
            }
            let x = match x_scale.position(&p.x) {
                Some(x) => x,
                None => continue,
            };
            let dist = (x - px).abs();
            let closer = match best {
                Some((d, _)) => dist < d,
                None => true,
            };
            if closer {
                best = Some((dist, HoverTarget::Point { series: si, point: pi }));
            }
        }
    }
    best.map(|(_, t)| t)
}

/// Rows for a hovered point: the x-axis row first, then the series row.
pub fn point_tooltip_rows(
    series: &Series,
    point_index: usize,
    x_axis: Option<&AxisSpec>,
    x_kind: XAxisKind,
) -> Vec<TooltipRow> {
    let p = match series.points.get(point_index) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let x_label = axis_label(x_axis, "x");
    let x_value = match x_kind {
        XAxisKind::Numeric => match p.x.as_number() {
            Some(n) => format_number(n, TOOLTIP_PRECISION),
            None => p.x.category(),
        },
        XAxisKind::Temporal => {
            let pattern = x_axis
                .and_then(|a| a.display_format.as_deref())
                .unwrap_or("MM/DD HH:MM");
            format_time(to_timestamp(&p.x), pattern)
        }
        XAxisKind::Categorical => p.x.category(),
    };
    let y_value = format_number(p.y.unwrap_or(f64::NAN), TOOLTIP_PRECISION);
    vec![
        TooltipRow { label: x_label, value: x_value },
        TooltipRow { label: series.name.clone(), value: y_value },
    ]
}

/// Rows for a hovered bar: category row first, then the series row.
pub fn bar_tooltip_rows(
    series: &[Series],
    categories: &[String],
    series_index: usize,
    category_index: usize,
    x_axis: Option<&AxisSpec>,
) -> Vec<TooltipRow> {
    let (s, category) = match (series.get(series_index), categories.get(category_index)) {
        (Some(s), Some(c)) => (s, c),
        _ => return Vec::new(),
    };
    let value = crate::stack::series_value(s, category);
    vec![
        TooltipRow {
            label: axis_label(x_axis, "x"),
            value: category.clone(),
        },
        TooltipRow {
            label: s.name.clone(),
            value: format_number(value, TOOLTIP_PRECISION),
        },
    ]
}

fn axis_label(axis: Option<&AxisSpec>, fallback: &str) -> String {
    axis.and_then(|a| a.label.clone())
        .unwrap_or_else(|| fallback.to_string())
}
