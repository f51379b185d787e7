use itertools::Itertools;
use nalgebra::{allocator::Allocator, convert, DefaultAllocator, DimName, OPoint};

use crate::{
    bezier::{BezierCurve, BezierSpline},
    error::InterpolationResult,
    misc::FloatingPoint,
};

use super::{ensure_interpolation_points, Interpolation};

/// Interpolates points with quadratic Bezier segments joined with a continuous tangent
///
/// The control point of the first segment is the midpoint of its end points.
/// Each following control point mirrors the previous one through the shared point.
///
/// # Example
/// ```
/// use bezier_interpolation::prelude::*;
/// use nalgebra::Point2;
///
/// let points = vec![Point2::new(1., 1.), Point2::new(2., 4.), Point2::new(3., 9.)];
/// let spline = QuadraticInterpolator.try_spline(&points).unwrap();
/// assert_eq!(
///     spline.control_polygon(),
///     vec![
///         Point2::new(1., 1.),
///         Point2::new(1.5, 2.5),
///         Point2::new(2., 4.),
///         Point2::new(2.5, 5.5),
///         Point2::new(3., 9.),
///     ]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadraticInterpolator;

impl<T: FloatingPoint, D: DimName> Interpolation<T, D> for QuadraticInterpolator
where
    DefaultAllocator: Allocator<D>,
{
    fn try_spline(&self, points: &[OPoint<T, D>]) -> InterpolationResult<BezierSpline<T, D>> {
        ensure_interpolation_points(points)?;

        let two = convert::<f64, T>(2.);
        let mut control = points[0].lerp(&points[1], convert::<f64, T>(0.5));
        let mut segments = Vec::with_capacity(points.len() - 1);
        for (i, (start, end)) in points.iter().tuple_windows().enumerate() {
            if i > 0 {
                control = OPoint::from(&start.coords * two - &control.coords);
            }
            segments.push(BezierCurve::new_unchecked(vec![
                start.clone(),
                control.clone(),
                end.clone(),
            ]));
        }

        #[cfg(feature = "log")]
        log::debug!(
            "quadratic interpolation through {} points",
            points.len()
        );

        Ok(BezierSpline::new_unchecked(segments))
    }
}
