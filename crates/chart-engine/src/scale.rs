// File: crates/chart-engine/src/scale.rs
// Summary: Linear, time, and band scale value types mapping domain to pixels.

use crate::extent::{to_timestamp, Domain};
use crate::schema::XValue;

/// Linear mapping from a continuous domain onto a pixel range.
/// A zero-span domain maps every value to the range midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Domain,
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return (self.range.0 + self.range.1) * 0.5;
        }
        self.range.0 + (v - self.domain.min) / span * (self.range.1 - self.range.0)
    }
}

/// Time scale: timestamp coercion composed with a linear scale over epoch
/// milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { inner: LinearScale::new(domain, range) }
    }

    pub fn domain(&self) -> Domain {
        self.inner.domain
    }

    #[inline]
    pub fn to_px(&self, v: &XValue) -> f64 {
        self.inner.to_px(to_timestamp(v))
    }

    #[inline]
    pub fn millis_to_px(&self, millis: f64) -> f64 {
        self.inner.to_px(millis)
    }
}

/// Discrete band scale: the pixel range divided into one equal step per
/// category, each holding a centered band of `step * (1 - padding)`.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    /// `padding` must lie in `[0, 1)`; it is clamped to that interval.
    pub fn new(categories: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let padding = padding.clamp(0.0, 0.999);
        Self { categories, range, padding }
    }

    /// Category order, as supplied.
    pub fn domain(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Width of one category slot.
    pub fn step(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.categories.len() as f64
    }

    /// Width of the band inside each slot.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of a category's band. Unknown categories map to the start
    /// of the range; that is a defined fallback, not an error.
    pub fn offset(&self, category: &str) -> f64 {
        match self.categories.iter().position(|c| c == category) {
            Some(i) => {
                let step = self.step();
                self.range.0 + step * i as f64 + (step - self.bandwidth()) * 0.5
            }
            None => self.range.0,
        }
    }

    /// Center of a category's band; where point-like marks sit.
    pub fn center(&self, category: &str) -> f64 {
        self.offset(category) + self.bandwidth() * 0.5
    }
}

/// The x-axis scale for one chart, tagged by how x values are interpreted.
#[derive(Clone, Debug, PartialEq)]
pub enum XScale {
    Linear(LinearScale),
    Time(TimeScale),
    Band(BandScale),
}

impl XScale {
    /// Pixel position for a point-like mark at this x value, or `None` when
    /// the value cannot be positioned on this axis (e.g. text on a numeric
    /// axis).
    pub fn position(&self, x: &XValue) -> Option<f64> {
        match self {
            XScale::Linear(s) => x.as_number().filter(|n| n.is_finite()).map(|n| s.to_px(n)),
            XScale::Time(s) => Some(s.to_px(x)),
            XScale::Band(s) => Some(s.center(&x.category())),
        }
    }
}
