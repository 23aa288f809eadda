// File: crates/chart-engine/src/stack.rs
// Summary: Bar chart layout: category domain, stack accumulation, rect emission.

use crate::extent::Domain;
use crate::geometry::Rect;
use crate::scale::{BandScale, LinearScale};
use crate::schema::Series;
use crate::theme;

/// Inner padding between sub-bands of a grouped bar chart.
pub const GROUP_INNER_PADDING: f64 = 0.1;

/// The category domain: first-seen-order, de-duplicated union of every
/// series' x values. First occurrence fixes the position; no sorting.
pub fn category_domain(series: &[Series]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for s in series {
        for p in &s.points {
            let c = p.x.category();
            if !categories.contains(&c) {
                categories.push(c);
            }
        }
    }
    categories
}

/// A series' value for one category. Missing points and gaps read as `0.0`;
/// bars cannot have gaps.
pub fn series_value(series: &Series, category: &str) -> f64 {
    series
        .points
        .iter()
        .find(|p| p.x.category() == category)
        .and_then(|p| p.y)
        .filter(|y| y.is_finite())
        .unwrap_or(0.0)
}

/// Upper bound of the bar y domain. Stacked: the largest per-category sum
/// across series. Grouped: the largest individual value. Never below zero,
/// so an all-zero chart still has a drawable domain edge.
pub fn bar_y_max(series: &[Series], categories: &[String], stacked: bool) -> f64 {
    let mut max = 0.0f64;
    for c in categories {
        if stacked {
            let sum: f64 = series.iter().map(|s| series_value(s, c)).sum();
            max = max.max(sum);
        } else {
            for s in series {
                max = max.max(series_value(s, c));
            }
        }
    }
    max
}

/// The bar y domain always grows from the zero baseline.
pub fn bar_y_domain(series: &[Series], categories: &[String], stacked: bool) -> Domain {
    Domain::new(0.0, bar_y_max(series, categories, stacked))
}

/// Emit one rect per (category, series) pair. Stacked bars accumulate a
/// running offset per category in series declaration order; grouped bars
/// subdivide each outer band with an inner band scale. A value of exactly
/// zero produces a zero-height rect, never a missing one.
pub fn bar_rects(
    series: &[Series],
    categories: &[String],
    band: &BandScale,
    y_scale: &LinearScale,
    stacked: bool,
) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(categories.len() * series.len());
    let inner = BandScale::new(
        series.iter().map(|s| s.name.clone()).collect(),
        (0.0, band.bandwidth()),
        GROUP_INNER_PADDING,
    );
    for (ci, category) in categories.iter().enumerate() {
        let mut offset = 0.0f64;
        for (si, s) in series.iter().enumerate() {
            let value = series_value(s, category);
            let (y0, y1, x, width) = if stacked {
                let span = (offset, offset + value);
                offset += value;
                (span.0, span.1, band.offset(category), band.bandwidth())
            } else {
                let x = band.offset(category) + inner.offset(&s.name);
                (0.0, value, x, inner.bandwidth())
            };
            let p0 = y_scale.to_px(y0);
            let p1 = y_scale.to_px(y1);
            rects.push(Rect {
                x,
                y: p0.min(p1),
                width,
                height: (p0 - p1).abs(),
                fill: theme::series_color(
                    s.color.as_deref().or(s.fill_color.as_deref()),
                    si,
                ),
                series: si,
                category: ci,
            });
        }
    }
    rects
}
