use bezier_interpolation::{cubic_interpolation, prelude::*, quadratic_interpolation};

fn main() -> anyhow::Result<()> {
    let xs = vec![1., 2., 3.];
    let ys = vec![-1., -5., 3.];
    let c_data = xs.into_iter().zip(ys).collect::<Vec<(f64, f64)>>();
    let c_interpolated: Vec<[f64; 2]> = cubic_interpolation(c_data.clone())?;
    println!("{:?}", c_interpolated);

    // control points of the natural cubic spline through the same data
    let points = try_points_from_pairs::<f64, _, _>(c_data)?;
    let spline = CubicInterpolator::default().try_spline(&points)?;
    println!("{:?}", points_to_pairs(&spline.control_polygon()));

    let q_data = vec![(1., 1.), (2., 4.), (3., 9.)];
    let q_interpolated: Vec<[f64; 2]> = quadratic_interpolation(q_data.clone())?;
    println!("{:?}", q_interpolated);

    let points = try_points_from_pairs::<f64, _, _>(q_data)?;
    let spline = QuadraticInterpolator.try_spline(&points)?;
    println!("{:?}", points_to_pairs(&spline.control_polygon()));

    Ok(())
}
