// File: crates/chart-engine/tests/formatting.rs
// Purpose: Validate numeric and temporal display formatting fallbacks.

use chart_engine::{format_number, format_time};

#[test]
fn fixed_point_rendering() {
    assert_eq!(format_number(3.14159, 2), "3.14");
    assert_eq!(format_number(0.0, 2), "0.00");
    assert_eq!(format_number(-7.5, 0), "-8");
    assert_eq!(format_number(1.0, 4), "1.0000");
}

#[test]
fn non_finite_numbers_render_the_placeholder() {
    assert_eq!(format_number(f64::NAN, 2), "\u{2014}");
    assert_eq!(format_number(f64::INFINITY, 2), "\u{2014}");
}

#[test]
fn clock_patterns_are_zero_padded() {
    // Fixed instant; exact digits depend on the local offset, shape does not.
    let hm = format_time(1_700_000_000_000.0, "HH:MM");
    assert_eq!(hm.len(), 5);
    assert_eq!(hm.as_bytes()[2], b':');

    let md = format_time(1_700_000_000_000.0, "MM/DD HH:MM");
    assert_eq!(md.len(), 11);
    assert_eq!(md.as_bytes()[2], b'/');
    assert_eq!(md.as_bytes()[5], b' ');
}

#[test]
fn unknown_pattern_falls_back_to_long_form() {
    let long = format_time(1_700_000_000_000.0, "whatever");
    assert!(long.len() > 11, "long-form rendering: {long:?}");
    assert!(long.contains("2023"), "includes the year: {long:?}");
}

#[test]
fn unrepresentable_millis_render_the_placeholder() {
    assert_eq!(format_time(f64::NAN, "HH:MM"), "\u{2014}");
}
