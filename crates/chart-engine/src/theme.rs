// File: crates/chart-engine/src/theme.rs
// Summary: Default series colors used when the schema supplies none.

/// Default stroke/marker palette, cycled by series index.
pub const SERIES_PALETTE: [&str; 6] = [
    "#4aa3ff", "#2ac878", "#e6a23c", "#dc5050", "#9b7ddb", "#3fbfbf",
];

/// Default area fill palette (translucent partners of the strokes).
pub const FILL_PALETTE: [&str; 6] = [
    "#4aa3ff33", "#2ac87833", "#e6a23c33", "#dc505033", "#9b7ddb33", "#3fbfbf33",
];

/// Stroke color for series `index`, honoring explicit overrides first.
pub fn series_color(explicit: Option<&str>, index: usize) -> String {
    match explicit {
        Some(c) => c.to_string(),
        None => SERIES_PALETTE[index % SERIES_PALETTE.len()].to_string(),
    }
}

/// Fill color for series `index`, honoring explicit overrides first.
pub fn fill_color(explicit: Option<&str>, index: usize) -> String {
    match explicit {
        Some(c) => c.to_string(),
        None => FILL_PALETTE[index % FILL_PALETTE.len()].to_string(),
    }
}
