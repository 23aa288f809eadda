// File: crates/chart-engine/src/lib.rs
// Summary: Library entry point; exports the schema-to-geometry chart API.

pub mod chart;
pub mod extent;
pub mod format;
pub mod geometry;
pub mod hover;
pub mod path;
pub mod scale;
pub mod schema;
pub mod stack;
pub mod theme;
pub mod ticks;
pub mod types;

pub use chart::{render, ChartBody, ChartError, ChartScene, Render};
pub use extent::{numeric_extent, temporal_extent, to_timestamp, try_timestamp, Domain};
pub use format::{format_number, format_time};
pub use hover::{HoverState, HoverTarget, TooltipRow};
pub use scale::{BandScale, LinearScale, TimeScale, XScale};
pub use schema::{AxisSpec, ChartKind, ChartSchema, Point, Series, XAxisKind, XValue};
pub use ticks::ticks;
pub use types::{Frame, Insets};
