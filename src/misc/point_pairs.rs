use nalgebra::Point2;

use crate::error::{InterpolationError, InterpolationResult};

use super::FloatingPoint;

/// Convert coordinate pairs into 2D points
/// Accepts anything convertible into `[T; 2]`, such as tuples `(x, y)` or arrays `[x, y]`.
/// # Failures
/// - if a coordinate is NaN or infinite
///
/// # Example
/// ```
/// use bezier_interpolation::prelude::*;
///
/// let xs = [1., 2., 3.];
/// let ys = [-1., -5., 3.];
/// let points = try_points_from_pairs::<f64, _, _>(xs.into_iter().zip(ys)).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].y, -5.);
///
/// assert!(try_points_from_pairs::<f64, _, _>([(0., f64::NAN)]).is_err());
/// ```
pub fn try_points_from_pairs<T, I, P>(pairs: I) -> InterpolationResult<Vec<Point2<T>>>
where
    T: FloatingPoint,
    I: IntoIterator<Item = P>,
    P: Into<[T; 2]>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(index, pair)| {
            let [x, y] = pair.into();
            try_point(index, x, y)
        })
        .collect()
}

/// Convert dynamically shaped rows such as `Vec<Vec<T>>` into 2D points
/// # Failures
/// - if a row does not hold exactly two coordinates
/// - if a coordinate is NaN or infinite
pub fn try_points_from_rows<T, R>(rows: &[R]) -> InterpolationResult<Vec<Point2<T>>>
where
    T: FloatingPoint,
    R: AsRef<[T]>,
{
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row.as_ref() {
            [x, y] => try_point(index, *x, *y),
            other => Err(InterpolationError::invalid(format!(
                "point {} has {} coordinates, expected 2",
                index,
                other.len()
            ))),
        })
        .collect()
}

/// Flatten 2D points back into `[x, y]` pairs
pub fn points_to_pairs<T: FloatingPoint>(points: &[Point2<T>]) -> Vec<[T; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn try_point<T: FloatingPoint>(index: usize, x: T, y: T) -> InterpolationResult<Point2<T>> {
    if x.is_finite() && y.is_finite() {
        Ok(Point2::new(x, y))
    } else {
        Err(InterpolationError::invalid(format!(
            "point {} has a non-finite coordinate: ({:?}, {:?})",
            index, x, y
        )))
    }
}
