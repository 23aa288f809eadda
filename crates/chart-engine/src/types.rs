// File: crates/chart-engine/src/types.rs
// Summary: Shared types and constants (canvas size, margins, coordinate frame).

/// Default canvas width in pixels when the schema omits one.
pub const WIDTH: f64 = 640.0;
/// Default canvas height in pixels when the schema omits one.
pub const HEIGHT: f64 = 320.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(12.0, 16.0, 36.0, 48.0)
    }
}

/// The coordinate frame shared by every chart archetype: outer canvas size
/// plus margins, with the plot area expressed in margin-adjusted local
/// coordinates where (0, 0) is the top-left corner of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl Frame {
    pub fn new(width: f64, height: f64, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Plot width after margins; never below 1 px so scales keep a real range.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.insets.hsum()).max(1.0)
    }

    /// Plot height after margins; never below 1 px.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.insets.vsum()).max(1.0)
    }

    /// Pixel range for x scales: left edge to right edge of the plot.
    pub fn x_range(&self) -> (f64, f64) {
        (0.0, self.inner_width())
    }

    /// Pixel range for y scales: bottom edge to top edge (pixel y grows down,
    /// so larger data values land at smaller pixel y).
    pub fn y_range(&self) -> (f64, f64) {
        (self.inner_height(), 0.0)
    }

    /// Map container coordinates to plot-local coordinates.
    pub fn to_local(&self, px: f64, py: f64) -> (f64, f64) {
        (px - self.insets.left, py - self.insets.top)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
