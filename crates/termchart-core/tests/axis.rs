// File: crates/termchart-core/tests/axis.rs
// Purpose: Validate axis construction, label layout, and value-to-row mapping.

use termchart_core::axis::finite_min_max;
use termchart_core::{Axis, AxisScale, Error};

#[test]
fn rejects_inverted_range() {
    let err = Axis::new(5.0, 1.0, 4, AxisScale::Linear).unwrap_err();
    assert_eq!(err, Error::InvalidRange { min: 5.0, max: 1.0 });
}

#[test]
fn rejects_single_row() {
    let err = Axis::new(0.0, 1.0, 1, AxisScale::Linear).unwrap_err();
    assert_eq!(err, Error::InvalidSize { min: 2, got: 1 });
}

#[test]
fn labels_are_ascending_for_every_scale() {
    for scale in [AxisScale::Linear, AxisScale::Log, AxisScale::LogInverted] {
        let axis = Axis::new(0.0, 50.0, 8, scale).unwrap();
        assert_eq!(axis.labels().len(), 8);
        for pair in axis.labels().windows(2) {
            assert!(pair[1] > pair[0], "{scale:?} labels must ascend");
        }
    }
}

#[test]
fn position_is_bottom_origin() {
    let axis = Axis::new(0.0, 10.0, 4, AxisScale::Linear).unwrap();
    // Smallest label maps to the bottom-most row, largest to row 0.
    assert_eq!(axis.position(0.0), 3);
    assert_eq!(axis.position(10.0), 0);
}

#[test]
fn position_is_monotonic() {
    let axis = Axis::new(0.0, 10.0, 6, AxisScale::Linear).unwrap();
    let mut last = axis.position(0.0);
    for i in 1..=100 {
        let value = i as f64 * 0.1;
        let row = axis.position(value);
        assert!(row <= last, "higher values may not map to lower rows");
        last = row;
    }
}

#[test]
fn position_clamps_out_of_range_values() {
    let axis = Axis::new(0.0, 10.0, 4, AxisScale::Linear).unwrap();
    assert_eq!(axis.position(-100.0), 3);
    assert_eq!(axis.position(100.0), 0);
}

#[test]
fn degenerate_range_is_accepted() {
    let axis = Axis::new(0.0, 0.0, 4, AxisScale::Linear).unwrap();
    assert_eq!(axis.labels(), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn default_aggregation_follows_scale() {
    use termchart_core::Aggregation;
    assert_eq!(AxisScale::Linear.default_aggregation(), Aggregation::Mean);
    assert_eq!(AxisScale::Log.default_aggregation(), Aggregation::Max);
    assert_eq!(AxisScale::LogInverted.default_aggregation(), Aggregation::Min);
}

#[test]
fn finite_min_max_ignores_non_finite() {
    let values = [f64::NAN, 3.0, f64::INFINITY, -2.0, f64::NEG_INFINITY];
    assert_eq!(finite_min_max(&values), Some((-2.0, 3.0)));
    assert_eq!(finite_min_max(&[f64::NAN]), None);
    assert_eq!(finite_min_max(&[]), None);
}

#[test]
fn scale_names_parse() {
    assert_eq!(AxisScale::from_name("log").unwrap(), AxisScale::Log);
    let err = AxisScale::from_name("sqrt").unwrap_err();
    assert!(matches!(err, Error::UnsupportedConfig { .. }));
}
