use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use crate::{
    bezier::{validate_resolution, BezierSpline, SamplingOptions},
    error::{InterpolationError, InterpolationResult},
    misc::{is_finite_point, points_to_pairs, try_points_from_pairs, FloatingPoint},
};

pub mod cubic;
pub mod quadratic;
pub use cubic::*;
pub use quadratic::*;

/// Least number of points an interpolator accepts
pub const MIN_INTERPOLATION_POINTS: usize = 3;

/// Interpolation trait
/// Builds a piecewise Bezier path passing through every given point, in the given order.
pub trait Interpolation<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// Try to create the piecewise Bezier path through the points
    fn try_spline(&self, points: &[OPoint<T, D>]) -> InterpolationResult<BezierSpline<T, D>>;

    /// Try to sample the interpolated path with a parameter step of `resolution`
    /// The input points appear in the output at their exact coordinates.
    fn interpolate(
        &self,
        points: &[OPoint<T, D>],
        resolution: T,
    ) -> InterpolationResult<Vec<OPoint<T, D>>> {
        let resolution = validate_resolution(resolution)?;
        self.try_spline(points)?.try_sample(resolution)
    }
}

/// Sample the quadratic interpolation of `(x, y)` pairs at the default quadratic resolution
///
/// # Example
/// ```
/// use bezier_interpolation::quadratic_interpolation;
///
/// let interpolated: Vec<[f64; 2]> =
///     quadratic_interpolation([(1., 1.), (2., 4.), (3., 9.)]).unwrap();
/// assert_eq!(interpolated.first(), Some(&[1., 1.]));
/// assert_eq!(interpolated[2], [2., 4.]);
/// assert_eq!(interpolated.last(), Some(&[3., 9.]));
/// ```
pub fn quadratic_interpolation<T, I, P>(pairs: I) -> InterpolationResult<Vec<[T; 2]>>
where
    T: FloatingPoint,
    I: IntoIterator<Item = P>,
    P: Into<[T; 2]>,
{
    quadratic_interpolation_with(pairs, &SamplingOptions::quadratic())
}

/// Sample the quadratic interpolation of `(x, y)` pairs with the given options
pub fn quadratic_interpolation_with<T, I, P>(
    pairs: I,
    options: &SamplingOptions<T>,
) -> InterpolationResult<Vec<[T; 2]>>
where
    T: FloatingPoint,
    I: IntoIterator<Item = P>,
    P: Into<[T; 2]>,
{
    let points = try_points_from_pairs(pairs)?;
    let interpolated = QuadraticInterpolator.interpolate(&points, options.resolution)?;
    Ok(points_to_pairs(&interpolated))
}

/// Sample the natural cubic interpolation of `(x, y)` pairs at the default cubic resolution
///
/// # Example
/// ```
/// use bezier_interpolation::cubic_interpolation;
///
/// let xs = [1., 2., 3.];
/// let ys = [-1., -5., 3.];
/// let interpolated: Vec<[f64; 2]> = cubic_interpolation(xs.into_iter().zip(ys)).unwrap();
/// assert_eq!(interpolated.len(), 7);
/// assert_eq!(interpolated[0], [1., -1.]);
/// assert_eq!(interpolated[3], [2., -5.]);
/// assert_eq!(interpolated[6], [3., 3.]);
/// ```
pub fn cubic_interpolation<T, I, P>(pairs: I) -> InterpolationResult<Vec<[T; 2]>>
where
    T: FloatingPoint,
    I: IntoIterator<Item = P>,
    P: Into<[T; 2]>,
{
    cubic_interpolation_with(pairs, CubicControlStyle::default(), &SamplingOptions::cubic())
}

/// Sample the cubic interpolation of `(x, y)` pairs with the given control point style and options
pub fn cubic_interpolation_with<T, I, P>(
    pairs: I,
    style: CubicControlStyle,
    options: &SamplingOptions<T>,
) -> InterpolationResult<Vec<[T; 2]>>
where
    T: FloatingPoint,
    I: IntoIterator<Item = P>,
    P: Into<[T; 2]>,
{
    let points = try_points_from_pairs(pairs)?;
    let interpolated = CubicInterpolator::new(style).interpolate(&points, options.resolution)?;
    Ok(points_to_pairs(&interpolated))
}

/// Check that there are enough points to interpolate and that they are all finite
fn ensure_interpolation_points<T: FloatingPoint, D: DimName>(
    points: &[OPoint<T, D>],
) -> InterpolationResult<()>
where
    DefaultAllocator: Allocator<D>,
{
    if points.len() < MIN_INTERPOLATION_POINTS {
        return Err(InterpolationError::InsufficientData {
            required: MIN_INTERPOLATION_POINTS,
            actual: points.len(),
        });
    }
    match points.iter().position(|p| !is_finite_point(p)) {
        Some(index) => Err(InterpolationError::invalid(format!(
            "point {} has a non-finite coordinate",
            index
        ))),
        None => Ok(()),
    }
}
