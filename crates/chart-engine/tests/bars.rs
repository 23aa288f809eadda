// File: crates/chart-engine/tests/bars.rs
// Purpose: Validate bar category domains, stacking, and rect layout.

use chart_engine::chart::{render, ChartBody, Render};
use chart_engine::stack::{bar_y_max, category_domain, series_value};
use chart_engine::{ChartSchema, Point, Series};

fn two_series() -> Vec<Series> {
    vec![
        Series::new(
            "S1",
            vec![Point::new("A", Some(2.0)), Point::new("B", Some(3.0))],
        ),
        Series::new(
            "S2",
            vec![Point::new("A", Some(4.0)), Point::new("B", Some(0.0))],
        ),
    ]
}

#[test]
fn category_domain_is_first_seen_order_union() {
    let series = vec![
        Series::new("S1", vec![Point::new("B", Some(1.0)), Point::new("A", Some(2.0))]),
        Series::new("S2", vec![Point::new("C", Some(3.0)), Point::new("A", Some(4.0))]),
    ];
    assert_eq!(category_domain(&series), vec!["B", "A", "C"]);
}

#[test]
fn missing_category_reads_as_zero() {
    let s = Series::new("S1", vec![Point::new("A", Some(2.0))]);
    assert_eq!(series_value(&s, "B"), 0.0);
    // A gap is also zero; bars cannot have gaps.
    let g = Series::new("S2", vec![Point::new("A", None)]);
    assert_eq!(series_value(&g, "A"), 0.0);
}

#[test]
fn stacked_y_max_is_largest_category_sum() {
    let series = two_series();
    let categories = category_domain(&series);
    // A: 2 + 4 = 6; B: 3 + 0 = 3. Never 7.
    assert_eq!(bar_y_max(&series, &categories, true), 6.0);
    // Grouped uses the largest individual value.
    assert_eq!(bar_y_max(&series, &categories, false), 4.0);
}

#[test]
fn stacked_bars_accumulate_offsets_in_declaration_order() {
    let mut schema = ChartSchema::new("bar", two_series());
    schema.stacked = Some(true);
    let render = render(&schema).expect("bar renders");
    let scene = render.scene().expect("scene, not empty");
    let rects = match &scene.body {
        ChartBody::Bar { rects, .. } => rects,
        other => panic!("expected bar body, got {other:?}"),
    };
    assert_eq!(rects.len(), 4);

    // Category A: S1 spans [0,2], S2 spans [2,6]. S2's rect sits on top of
    // S1's (smaller pixel y) and they share an x and width.
    let a_s1 = rects.iter().find(|r| r.series == 0 && r.category == 0).unwrap();
    let a_s2 = rects.iter().find(|r| r.series == 1 && r.category == 0).unwrap();
    assert_eq!(a_s1.x, a_s2.x);
    assert_eq!(a_s1.width, a_s2.width);
    assert!(a_s2.y < a_s1.y);
    assert!((a_s2.y + a_s2.height - a_s1.y).abs() < 1e-9, "stack is contiguous");

    // Category B: S2's value is exactly zero; the rect exists at zero height.
    let b_s2 = rects.iter().find(|r| r.series == 1 && r.category == 1).unwrap();
    assert_eq!(b_s2.height, 0.0);
}

#[test]
fn grouped_bars_subdivide_each_band() {
    let schema = ChartSchema::new("bar", two_series());
    let render = render(&schema).expect("bar renders");
    let scene = render.scene().expect("scene, not empty");
    let rects = match &scene.body {
        ChartBody::Bar { rects, .. } => rects,
        other => panic!("expected bar body, got {other:?}"),
    };
    assert_eq!(rects.len(), 4);

    // Equal sub-band widths, strictly increasing x within one category.
    let a_s1 = rects.iter().find(|r| r.series == 0 && r.category == 0).unwrap();
    let a_s2 = rects.iter().find(|r| r.series == 1 && r.category == 0).unwrap();
    assert!((a_s1.width - a_s2.width).abs() < 1e-9);
    assert!(a_s1.x < a_s2.x);
    // Both sub-bands stay inside category A's slot (first of two equal
    // steps across the plot width).
    let step = scene.frame.inner_width() / 2.0;
    assert!(a_s1.x >= 0.0);
    assert!(a_s2.x + a_s2.width <= step + 1e-9);
}

#[test]
fn all_zero_bars_still_render_a_scene() {
    let series = vec![Series::new("S1", vec![Point::new("A", Some(0.0))])];
    let render = render(&ChartSchema::new("bar", series)).expect("renders");
    match render {
        Render::Scene(scene) => match scene.body {
            ChartBody::Bar { ref rects, .. } => {
                assert_eq!(rects.len(), 1);
                assert_eq!(rects[0].height, 0.0);
            }
            other => panic!("expected bar body, got {other:?}"),
        },
        Render::Empty => panic!("zero-valued bars are data, not emptiness"),
    }
}
