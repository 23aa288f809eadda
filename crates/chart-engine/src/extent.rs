// File: crates/chart-engine/src/extent.rs
// Summary: Domain computation over raw values and timestamp coercion.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::schema::XValue;

/// A closed `[min, max]` data interval along one axis. Degenerate domains
/// (min == max) are legal; scales map them to a fixed midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}

/// `[min, max]` over the finite values, skipping gaps. Zero is a value.
/// Returns `None` when nothing finite remains.
pub fn numeric_extent<I>(values: I) -> Option<Domain>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if let Some(v) = v {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
                any = true;
            }
        }
    }
    if any { Some(Domain::new(min, max)) } else { None }
}

/// `[min, max]` over the values that coerce to timestamps; unparseable
/// entries are dropped. Returns `None` when nothing parses.
pub fn temporal_extent<'a, I>(values: I) -> Option<Domain>
where
    I: IntoIterator<Item = &'a XValue>,
{
    numeric_extent(values.into_iter().map(try_timestamp))
}

/// Coerce an x value to epoch milliseconds, or `None` if it cannot be read
/// as a time. Numbers pass through untouched (the caller decides whether
/// they mean epoch millis). Strings are parsed locale-independently.
pub fn try_timestamp(value: &XValue) -> Option<f64> {
    match value {
        XValue::Number(n) if n.is_finite() => Some(*n),
        XValue::Number(_) => None,
        XValue::Text(s) => parse_date_millis(s),
    }
}

/// Infallible coercion used by the time scale. Unparseable input maps to
/// `0.0` rather than erroring; this mirrors the platform's lenient fallback
/// and is relied on as documented behavior.
pub fn to_timestamp(value: &XValue) -> f64 {
    try_timestamp(value).unwrap_or(0.0)
}

fn parse_date_millis(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(dt.and_utc().timestamp_millis() as f64);
    }
    // Bare numeric strings ("1700000000000") count as epoch millis.
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
