use approx::assert_relative_eq;
use bezier_interpolation::{
    cubic_interpolation, cubic_interpolation_with, prelude::*, quadratic_interpolation,
    quadratic_interpolation_with, InterpolationError,
};

#[test]
fn cubic_interpolation_of_zipped_pairs() {
    let xs = vec![1., 2., 3.];
    let ys = vec![-1., -5., 3.];
    let data = xs.into_iter().zip(ys).collect::<Vec<(f64, f64)>>();

    let interpolated: Vec<[f64; 2]> = cubic_interpolation(data.clone()).unwrap();
    assert_eq!(interpolated.len(), 7);
    assert_eq!(interpolated.first(), Some(&[1., -1.]));
    assert_eq!(interpolated.last(), Some(&[3., 3.]));
    assert_eq!(
        interpolated.iter().filter(|p| **p == [2., -5.]).count(),
        1
    );

    // x grows by a third of the unit spacing between samples
    interpolated
        .windows(2)
        .for_each(|w| assert_relative_eq!(w[1][0] - w[0][0], 1. / 3., epsilon = 1e-12));

    assert_eq!(cubic_interpolation(data).unwrap(), interpolated);
}

#[test]
fn quadratic_interpolation_of_tuples() {
    let interpolated: Vec<[f64; 2]> =
        quadratic_interpolation(vec![(1., 1.), (2., 4.), (3., 9.)]).unwrap();
    assert_eq!(
        interpolated,
        vec![[1., 1.], [1.5, 2.5], [2., 4.], [2.5, 6.], [3., 9.]]
    );
}

#[test]
fn interpolation_with_options() {
    let data = [[0., 0.], [1., 1.], [2., 0.], [3., 1.]];
    let options = SamplingOptions::<f64>::new(0.1);

    let quadratic = quadratic_interpolation_with(data, &options).unwrap();
    assert_eq!(quadratic.len(), 31);

    let natural = cubic_interpolation_with(data, CubicControlStyle::Natural, &options).unwrap();
    let catmull_rom =
        cubic_interpolation_with(data, CubicControlStyle::CatmullRom, &options).unwrap();
    assert_eq!(natural.len(), catmull_rom.len());
    assert_ne!(natural, catmull_rom);
    for (i, pair) in data.iter().enumerate() {
        assert_eq!(&natural[i * 10], pair);
        assert_eq!(&catmull_rom[i * 10], pair);
    }
}

#[test]
fn single_precision() {
    let interpolated: Vec<[f32; 2]> =
        cubic_interpolation([(1f32, -1f32), (2., -5.), (3., 3.)]).unwrap();
    assert_eq!(interpolated.len(), 7);
    assert_eq!(interpolated[3], [2., -5.]);
}

#[test]
fn errors_at_the_boundary() {
    assert_eq!(
        cubic_interpolation::<f64, _, _>([(1., 1.), (2., 2.)]),
        Err(InterpolationError::InsufficientData {
            required: 3,
            actual: 2
        })
    );

    assert!(matches!(
        quadratic_interpolation::<f64, _, _>([(1., 1.), (2., f64::NAN), (3., 3.)]),
        Err(InterpolationError::InvalidArgument(_))
    ));

    let rows = vec![vec![1., 1.], vec![2.], vec![3., 3.]];
    assert!(matches!(
        try_points_from_rows::<f64, _>(&rows),
        Err(InterpolationError::InvalidArgument(_))
    ));

    let options = SamplingOptions::<f64>::new(-0.5);
    assert!(matches!(
        quadratic_interpolation_with([(1., 1.), (2., 2.), (3., 3.)], &options),
        Err(InterpolationError::InvalidArgument(_))
    ));
}

#[test]
fn rows_round_trip_through_points() {
    let rows = vec![vec![1., -1.], vec![2., -5.], vec![3., 3.]];
    let points = try_points_from_rows::<f64, _>(&rows).unwrap();
    let spline = CubicInterpolator::default().try_spline(&points).unwrap();
    let pairs = points_to_pairs(&spline.knots());
    assert_eq!(pairs, vec![[1., -1.], [2., -5.], [3., 3.]]);
}
