// File: crates/chart-engine/tests/hover.rs
// Purpose: Validate tooltip hit-testing and label/value row output.

use chart_engine::hover::{bar_tooltip_rows, nearest_point, point_tooltip_rows};
use chart_engine::{
    AxisSpec, Domain, HoverState, HoverTarget, LinearScale, Point, Series, XAxisKind, XScale,
};

fn one_series() -> Vec<Series> {
    vec![Series::new(
        "latency",
        vec![Point::new(1.0, Some(5.0)), Point::new(2.0, Some(7.0))],
    )]
}

fn x_scale() -> XScale {
    XScale::Linear(LinearScale::new(Domain::new(1.0, 2.0), (0.0, 100.0)))
}

#[test]
fn nearest_point_picks_the_closer_scaled_x() {
    let series = one_series();
    let xs = x_scale();
    // x=1 scales to px 0, x=2 to px 100. Pointer at 30 is nearer the first.
    let hit = nearest_point(&series, &xs, 30.0, 100.0);
    assert_eq!(hit, Some(HoverTarget::Point { series: 0, point: 0 }));
    let hit = nearest_point(&series, &xs, 80.0, 100.0);
    assert_eq!(hit, Some(HoverTarget::Point { series: 0, point: 1 }));
}

#[test]
fn pointer_is_clamped_to_the_plot() {
    let series = one_series();
    let xs = x_scale();
    assert_eq!(
        nearest_point(&series, &xs, -500.0, 100.0),
        Some(HoverTarget::Point { series: 0, point: 0 })
    );
    assert_eq!(
        nearest_point(&series, &xs, 9999.0, 100.0),
        Some(HoverTarget::Point { series: 0, point: 1 })
    );
}

#[test]
fn ties_go_to_the_first_encountered_point() {
    let series = vec![
        Series::new("a", vec![Point::new(1.0, Some(1.0))]),
        Series::new("b", vec![Point::new(1.0, Some(2.0))]),
    ];
    let xs = x_scale();
    assert_eq!(
        nearest_point(&series, &xs, 0.0, 100.0),
        Some(HoverTarget::Point { series: 0, point: 0 })
    );
}

#[test]
fn no_valid_points_means_not_visible() {
    let series = vec![Series::new("a", vec![Point::new(1.0, None)])];
    assert_eq!(nearest_point(&series, &x_scale(), 50.0, 100.0), None);
    assert_eq!(nearest_point(&[], &x_scale(), 50.0, 100.0), None);
}

#[test]
fn point_rows_put_the_x_entry_first() {
    let series = one_series();
    let axis = AxisSpec { label: Some("time".to_string()), ..Default::default() };
    let rows = point_tooltip_rows(&series[0], 0, Some(&axis), XAxisKind::Numeric);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "time");
    assert_eq!(rows[0].value, "1.00");
    assert_eq!(rows[1].label, "latency");
    assert_eq!(rows[1].value, "5.00");
}

#[test]
fn bar_rows_use_the_category_and_series_value() {
    let series = vec![Series::new(
        "errors",
        vec![Point::new("A", Some(2.0)), Point::new("B", Some(3.0))],
    )];
    let categories = vec!["A".to_string(), "B".to_string()];
    let rows = bar_tooltip_rows(&series, &categories, 0, 1, None);
    assert_eq!(rows[0].value, "B");
    assert_eq!(rows[1].label, "errors");
    assert_eq!(rows[1].value, "3.00");
    // Out-of-range targets produce nothing rather than panicking.
    assert!(bar_tooltip_rows(&series, &categories, 5, 0, None).is_empty());
}

#[test]
fn hover_state_is_replaced_wholesale() {
    let mut state = HoverState::default();
    assert_eq!(state.current(), None);
    state.set(HoverTarget::Point { series: 0, point: 3 });
    state.set(HoverTarget::Bar { series: 1, category: 2 });
    assert_eq!(state.current(), Some(HoverTarget::Bar { series: 1, category: 2 }));
    state.clear();
    assert_eq!(state.current(), None);
}
