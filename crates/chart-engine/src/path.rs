// File: crates/chart-engine/src/path.rs
// Summary: Gap-aware segmentation and line/area path construction.

use std::fmt::Write as _;

use crate::scale::{LinearScale, XScale};
use crate::schema::Point;

/// Split an ordered point list into maximal gap-free runs. A gap (missing or
/// non-finite y) closes the current run; the next valid point opens a new
/// one. All-gap or empty input yields zero segments, which callers render as
/// the empty state.
pub fn segment(points: &[Point]) -> Vec<Vec<&Point>> {
    let mut segments: Vec<Vec<&Point>> = Vec::new();
    let mut current: Vec<&Point> = Vec::new();
    for p in points {
        if p.is_gap() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(p);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Stroke path data for a segmented series: one `M` per segment followed by
/// `L` per subsequent point, all in pixel space. Segments are independent
/// subpaths, so a gap shows as a break and is never interpolated across.
/// Points that cannot be positioned on the x axis are dropped. Coordinates
/// are emitted at fixed precision so identical inputs give identical bytes.
pub fn line_path(segments: &[Vec<&Point>], x_scale: &XScale, y_scale: &LinearScale) -> String {
    let mut d = String::new();
    for seg in segments {
        let mut started = false;
        for p in seg {
            let (x, y) = match project(p, x_scale, y_scale) {
                Some(xy) => xy,
                None => continue,
            };
            let cmd = if started { 'L' } else { 'M' };
            let _ = write!(d, "{cmd}{x:.2} {y:.2}");
            started = true;
        }
    }
    d
}

/// Fill path data for a segmented series: per segment, the stroke path plus
/// two closing edges down to `baseline_px` at the segment's last and first
/// x positions, then `Z`. Each segment closes into its own polygon; joining
/// across a gap would fill a region the data never covered.
pub fn area_path(
    segments: &[Vec<&Point>],
    x_scale: &XScale,
    y_scale: &LinearScale,
    baseline_px: f64,
) -> String {
    let mut d = String::new();
    for seg in segments {
        let mut first_x: Option<f64> = None;
        let mut last_x = 0.0;
        for p in seg {
            let (x, y) = match project(p, x_scale, y_scale) {
                Some(xy) => xy,
                None => continue,
            };
            let cmd = if first_x.is_some() { 'L' } else { 'M' };
            let _ = write!(d, "{cmd}{x:.2} {y:.2}");
            first_x.get_or_insert(x);
            last_x = x;
        }
        if let Some(fx) = first_x {
            let _ = write!(d, "L{last_x:.2} {baseline_px:.2}L{fx:.2} {baseline_px:.2}Z");
        }
    }
    d
}

/// Pixel positions for point-like marks (line markers, scatter dots).
/// Gaps and unpositionable x values are silently skipped.
pub fn marker_points(points: &[Point], x_scale: &XScale, y_scale: &LinearScale) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|p| !p.is_gap())
        .filter_map(|p| project(p, x_scale, y_scale))
        .collect()
}

fn project(p: &Point, x_scale: &XScale, y_scale: &LinearScale) -> Option<(f64, f64)> {
    let x = x_scale.position(&p.x)?;
    let y = y_scale.to_px(p.y?);
    Some((x, y))
}
