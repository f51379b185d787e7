use itertools::Itertools;
use nalgebra::{allocator::Allocator, convert, DMatrix, DVector, DefaultAllocator, DimName, OPoint};

use crate::{
    bezier::{BezierCurve, BezierSpline},
    error::{InterpolationError, InterpolationResult},
    misc::FloatingPoint,
};

use super::{ensure_interpolation_points, Interpolation};

/// Strategy to estimate the two inner control points of each cubic segment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubicControlStyle {
    /// Natural cubic spline: segments join with continuous first and second derivatives
    /// and the second derivative vanishes at both ends
    #[default]
    Natural,
    /// Catmull-Rom tangents: the tangent at a point is half the vector between its neighbours,
    /// and the chord to the only neighbour at both ends
    /// https://en.wikipedia.org/wiki/Cubic_Hermite_spline#Catmull%E2%80%93Rom_spline
    CatmullRom,
}

/// Interpolates points with cubic Bezier segments
///
/// # Example
/// ```
/// use bezier_interpolation::prelude::*;
/// use nalgebra::Point2;
/// use approx::assert_relative_eq;
///
/// let points = vec![Point2::new(1., -1.), Point2::new(2., -5.), Point2::new(3., 3.)];
/// let spline = CubicInterpolator::default().try_spline(&points).unwrap();
/// let polygon = spline.control_polygon();
/// assert_eq!(polygon.len(), 7);
/// assert_relative_eq!(polygon[1], Point2::new(4. / 3., -10. / 3.), epsilon = 1e-12);
/// assert_eq!(polygon[3], Point2::new(2., -5.));
///
/// let interpolated = CubicInterpolator::default().interpolate(&points, 0.1).unwrap();
/// assert_eq!(interpolated.first(), Some(&points[0]));
/// assert_eq!(interpolated.last(), Some(&points[2]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CubicInterpolator {
    style: CubicControlStyle,
}

impl CubicInterpolator {
    pub fn new(style: CubicControlStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> CubicControlStyle {
        self.style
    }
}

impl<T: FloatingPoint, D: DimName> Interpolation<T, D> for CubicInterpolator
where
    DefaultAllocator: Allocator<D>,
{
    fn try_spline(&self, points: &[OPoint<T, D>]) -> InterpolationResult<BezierSpline<T, D>> {
        ensure_interpolation_points(points)?;

        let (first, second) = match self.style {
            CubicControlStyle::Natural => try_natural_control_points(points)?,
            CubicControlStyle::CatmullRom => catmull_rom_control_points(points),
        };

        let segments = points
            .iter()
            .tuple_windows()
            .zip(first.into_iter().zip(second))
            .map(|((start, end), (a, b))| {
                BezierCurve::new_unchecked(vec![start.clone(), a, b, end.clone()])
            })
            .collect_vec();

        #[cfg(feature = "log")]
        log::debug!(
            "cubic interpolation ({:?}) through {} points",
            self.style,
            points.len()
        );

        Ok(BezierSpline::new_unchecked(segments))
    }
}

/// Control points of every segment, first ones and second ones
type ControlPoints<T, D> = (Vec<OPoint<T, D>>, Vec<OPoint<T, D>>);

/// Solve the control points of a natural cubic spline through `knots`
/// The first control points `a` satisfy, per coordinate,
/// `2a[0] + a[1] = k[0] + 2k[1]`,
/// `a[i - 1] + 4a[i] + a[i + 1] = 4k[i] + 2k[i + 1]`,
/// `2a[n - 2] + 7a[n - 1] = 8k[n - 1] + k[n]`,
/// then the second ones follow from the continuity of the derivatives.
fn try_natural_control_points<T: FloatingPoint, D: DimName>(
    knots: &[OPoint<T, D>],
) -> InterpolationResult<ControlPoints<T, D>>
where
    DefaultAllocator: Allocator<D>,
{
    let n = knots.len() - 1;
    let two = convert::<f64, T>(2.);
    let four = convert::<f64, T>(4.);
    let seven = convert::<f64, T>(7.);
    let eight = convert::<f64, T>(8.);

    // build the tridiagonal coefficients matrix
    let mut m_a = DMatrix::<T>::zeros(n, n);
    m_a[(0, 0)] = two;
    m_a[(0, 1)] = T::one();
    for i in 1..(n - 1) {
        m_a[(i, i - 1)] = T::one();
        m_a[(i, i)] = four;
        m_a[(i, i + 1)] = T::one();
    }
    m_a[(n - 1, n - 2)] = two;
    m_a[(n - 1, n - 1)] = seven;

    let rhs = (0..D::dim())
        .map(|d| {
            DVector::from_fn(n, |i, _| {
                if i == 0 {
                    knots[0][d] + two * knots[1][d]
                } else if i == n - 1 {
                    eight * knots[n - 1][d] + knots[n][d]
                } else {
                    four * knots[i][d] + two * knots[i + 1][d]
                }
            })
        })
        .collect_vec();
    let solved = try_solve_tridiagonal(m_a, &rhs)?;

    let mut first = vec![OPoint::<T, D>::origin(); n];
    for (d, xs) in solved.iter().enumerate() {
        for i in 0..n {
            first[i][d] = xs[i];
        }
    }

    let mut second = (0..(n - 1))
        .map(|i| OPoint::from(&knots[i + 1].coords * two - &first[i + 1].coords))
        .collect_vec();
    second.push(knots[n].lerp(&first[n - 1], convert::<f64, T>(0.5)));

    Ok((first, second))
}

/// Solve `m_a * x = b` for every right-hand side `b`, sharing one LU decomposition
pub(super) fn try_solve_tridiagonal<T: FloatingPoint>(
    m_a: DMatrix<T>,
    rhs: &[DVector<T>],
) -> InterpolationResult<Vec<DVector<T>>> {
    let lu = m_a.lu();
    rhs.iter()
        .map(|b| lu.solve(b).ok_or(InterpolationError::SolveFailed))
        .collect()
}

/// Control points from Catmull-Rom tangents, placed a third of the tangent away from each knot
fn catmull_rom_control_points<T: FloatingPoint, D: DimName>(
    knots: &[OPoint<T, D>],
) -> ControlPoints<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    let n = knots.len() - 1;
    let half = convert::<f64, T>(0.5);
    let third = convert::<f64, T>(1. / 3.);

    let tangents = (0..=n)
        .map(|i| {
            if i == 0 {
                &knots[1] - &knots[0]
            } else if i == n {
                &knots[n] - &knots[n - 1]
            } else {
                (&knots[i + 1] - &knots[i - 1]) * half
            }
        })
        .collect_vec();

    let first = (0..n)
        .map(|i| &knots[i] + &tangents[i] * third)
        .collect_vec();
    let second = (0..n)
        .map(|i| &knots[i + 1] - &tangents[i + 1] * third)
        .collect_vec();

    (first, second)
}
