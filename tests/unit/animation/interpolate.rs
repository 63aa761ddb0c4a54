use super::*;

#[test]
fn clamps_outside_the_breakpoints() {
    assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 1.0]), 0.0);
    assert_eq!(interpolate(0.0, [0.0, 10.0], [0.0, 1.0]), 0.0);
    assert_eq!(interpolate(10.0, [0.0, 10.0], [0.0, 1.0]), 1.0);
    assert_eq!(interpolate(50.0, [0.0, 10.0], [0.0, 1.0]), 1.0);
    assert!((interpolate(5.0, [0.0, 10.0], [0.0, 1.0]) - 0.5).abs() < 1e-12);
}

#[test]
fn exact_breakpoints_return_their_outputs() {
    let input = [0.0, 30.0, 60.0];
    let output = [0.0, 220.0, 0.0];
    assert_eq!(interpolate(30.0, input, output), 220.0);
    assert_eq!(interpolate(60.0, input, output), 0.0);
    assert!((interpolate(45.0, input, output) - 110.0).abs() < 1e-9);
}

#[test]
fn multi_segment_fade_in_hold_fade_out() {
    let input = [50.0, 70.0, 100.0, 120.0];
    let output = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(interpolate(40.0, input, output), 0.0);
    assert!((interpolate(60.0, input, output) - 0.5).abs() < 1e-12);
    assert_eq!(interpolate(85.0, input, output), 1.0);
    assert!((interpolate(110.0, input, output) - 0.5).abs() < 1e-12);
    assert_eq!(interpolate(200.0, input, output), 0.0);
}

#[test]
fn decreasing_outputs_are_supported() {
    assert!((interpolate(75.0, [0.0, 150.0], [1.0, 0.0]) - 0.5).abs() < 1e-12);
}

#[test]
fn zero_width_segment_jumps_to_later_value() {
    let input = [0.0, 5.0, 5.0, 10.0];
    let output = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(interpolate(5.0, input, output), 2.0);
    assert!(interpolate(4.999, input, output) < 1.0);
}

#[test]
fn extend_continues_edge_slopes() {
    let opts = InterpolateOpts::EXTEND;
    assert!((interpolate_with(2.0, [0.0, 1.0], [0.0, -800.0], opts) + 1600.0).abs() < 1e-9);
    assert!((interpolate_with(-1.0, [0.0, 1.0], [0.0, -800.0], opts) - 800.0).abs() < 1e-9);
    assert!((interpolate_with(1.2, [0.0, 1.0], [800.0, 0.0], opts) + 160.0).abs() < 1e-9);
}

#[test]
fn identity_returns_input_outside_range() {
    let opts = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
    };
    assert_eq!(interpolate_with(-3.0, [0.0, 10.0], [100.0, 200.0], opts), -3.0);
    assert_eq!(interpolate_with(42.0, [0.0, 10.0], [100.0, 200.0], opts), 42.0);
    assert_eq!(interpolate_with(5.0, [0.0, 10.0], [100.0, 200.0], opts), 150.0);
}

#[test]
fn non_finite_input_is_total() {
    assert_eq!(interpolate(f64::NAN, [0.0, 10.0], [3.0, 7.0]), 3.0);
    assert_eq!(interpolate(f64::NEG_INFINITY, [0.0, 10.0], [3.0, 7.0]), 3.0);
    assert_eq!(interpolate(f64::INFINITY, [0.0, 10.0], [3.0, 7.0]), 7.0);
}

#[test]
fn interpolation_table_validates_its_breakpoints() {
    let ok = Interpolation::new(vec![0.0, 10.0], vec![0.0, 1.0], InterpolateOpts::CLAMP).unwrap();
    assert!((ok.sample(2.5) - 0.25).abs() < 1e-12);
    assert_eq!(ok.input(), &[0.0, 10.0]);
    assert_eq!(ok.output(), &[0.0, 1.0]);

    let cases = [
        (vec![0.0], vec![0.0]),
        (vec![0.0, 10.0], vec![0.0]),
        (vec![10.0, 0.0], vec![0.0, 1.0]),
        (vec![0.0, 0.0], vec![0.0, 1.0]),
        (vec![0.0, f64::NAN], vec![0.0, 1.0]),
        (vec![0.0, 1.0], vec![0.0, f64::INFINITY]),
    ];
    for (input, output) in cases {
        let err = Interpolation::new(input.clone(), output, InterpolateOpts::CLAMP).unwrap_err();
        assert!(matches!(err, LaunchError::Animation(_)), "{input:?}");
    }
}

#[test]
fn interpolation_deserializes_with_default_opts() {
    let table: Interpolation =
        serde_json::from_str(r#"{"input":[0,20],"output":[0,1]}"#).unwrap();
    table.validate().unwrap();
    assert_eq!(table.sample(40.0), 1.0);
}
