#![cfg(feature = "serde")]

use bezier_interpolation::prelude::*;
use nalgebra::Point2;

#[test]
fn test_serialization() {
    let points = vec![
        Point2::new(1., -1.),
        Point2::new(2., -5.),
        Point2::new(3., 3.),
    ];
    let spline = CubicInterpolator::default().try_spline(&points).unwrap();
    let json = serde_json::to_string_pretty(&spline).unwrap();
    println!("{}", json);

    // thirds do not have a short decimal form, so this relies on exact float round trips
    let deserialized: BezierSpline2D<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, spline);
    assert_eq!(deserialized.control_polygon(), spline.control_polygon());
}

#[test]
fn test_curve_deserialization_validates_control_points() {
    let curve: BezierCurve2D<f64> =
        serde_json::from_str(r#"{"control_points":[[0.0,0.0],[1.0,2.0],[2.0,0.0]]}"#).unwrap();
    assert_eq!(curve.degree(), 2);

    for json in [
        r#"{"control_points":[]}"#,
        r#"{"control_points":[[1.0,1.0]]}"#,
    ] {
        let result = serde_json::from_str::<BezierCurve2D<f64>>(json);
        assert!(result.is_err(), "{} should be rejected", json);
    }
}

#[test]
fn test_spline_deserialization_validates_segments() {
    let empty = serde_json::from_str::<BezierSpline2D<f64>>(r#"{"segments":[]}"#);
    assert!(empty.is_err());

    let disconnected = r#"{"segments":[
        {"control_points":[[0.0,0.0],[1.0,0.0]]},
        {"control_points":[[2.0,0.0],[3.0,0.0]]}
    ]}"#;
    let error = serde_json::from_str::<BezierSpline2D<f64>>(disconnected).unwrap_err();
    assert!(error.to_string().contains("does not start at the end"));

    let degenerate_segment = r#"{"segments":[{"control_points":[[0.0,0.0]]}]}"#;
    assert!(serde_json::from_str::<BezierSpline2D<f64>>(degenerate_segment).is_err());
}

#[test]
fn test_options_serialization() {
    let options = SamplingOptions::<f64>::quadratic();
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"resolution":0.5}"#);

    let style: CubicControlStyle = serde_json::from_str(r#""CatmullRom""#).unwrap();
    assert_eq!(style, CubicControlStyle::CatmullRom);
}
