// File: crates/chart-engine/src/ticks.rs
// Summary: Evenly spaced tick value generation over a domain.

use crate::extent::Domain;

/// `count` evenly spaced values from `domain.min` to `domain.max` inclusive.
/// `count <= 1` yields just the domain start. Ticks subdivide the exact
/// domain; there is no round-number snapping.
pub fn ticks(domain: Domain, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![domain.min];
    }
    let step = domain.span() / (count - 1) as f64;
    (0..count).map(|i| domain.min + step * i as f64).collect()
}
