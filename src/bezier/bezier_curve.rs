use itertools::Itertools;
use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint};
use simba::scalar::SupersetOf;

use crate::{
    error::{InterpolationError, InterpolationResult},
    misc::{is_finite_point, EndPoints, FloatingPoint, Reversible},
};

use super::{sample_parameters, validate_parameter};

/// Bezier curve representation
/// By generics, it can be used for 2D or 3D curves with f32 or f64 scalar types
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "OPoint<T, D>: serde::Serialize"))
)]
pub struct BezierCurve<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// the curve passes through the first and the last control points
    /// and is pulled toward the ones in between
    control_points: Vec<OPoint<T, D>>,
}

/// 2D Bezier curve alias
pub type BezierCurve2D<T> = BezierCurve<T, Const<2>>;

/// 3D Bezier curve alias
pub type BezierCurve3D<T> = BezierCurve<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new Bezier curve
    /// # Failures
    /// - if the number of control points is less than 2
    /// - if a control point has a non-finite coordinate
    ///
    /// # Example
    /// ```
    /// use bezier_interpolation::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let curve = BezierCurve2D::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 2.),
    ///     Point2::new(2., 0.),
    /// ])
    /// .unwrap();
    /// assert_eq!(curve.degree(), 2);
    /// assert_eq!(curve.try_point_at(0.5).unwrap(), Point2::new(1., 1.));
    ///
    /// assert!(BezierCurve2D::try_new(vec![Point2::new(0., 0.)]).is_err());
    /// ```
    pub fn try_new(control_points: Vec<OPoint<T, D>>) -> InterpolationResult<Self> {
        ensure_control_points(&control_points)?;
        if let Some(index) = control_points.iter().position(|p| !is_finite_point(p)) {
            return Err(InterpolationError::invalid(format!(
                "control point {} has a non-finite coordinate",
                index
            )));
        }
        Ok(Self { control_points })
    }

    /// Create a curve from control points already known to be valid
    pub(crate) fn new_unchecked(control_points: Vec<OPoint<T, D>>) -> Self {
        Self { control_points }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[OPoint<T, D>] {
        &self.control_points
    }

    /// Evaluate the curve at a parameter in [0, 1]
    pub fn try_point_at(&self, t: T) -> InterpolationResult<OPoint<T, D>> {
        let t = validate_parameter(t)?;
        Ok(self.point_at_unchecked(t))
    }

    /// Sample the curve at `0, step, 2 * step, ..., 1`
    /// The first and the last samples are the end control points themselves.
    pub fn try_sample_regular_step(
        &self,
        resolution: T,
    ) -> InterpolationResult<Vec<OPoint<T, D>>> {
        let parameters = sample_parameters(resolution)?;
        Ok(self.sample_at(&parameters))
    }

    /// Sample the curve at sorted parameters validated by the caller
    pub(crate) fn sample_at(&self, parameters: &[T]) -> Vec<OPoint<T, D>> {
        parameters
            .iter()
            .map(|t| self.point_at_unchecked(*t))
            .collect_vec()
    }

    /// Split the curve at a parameter into two curves of the same degree
    /// # Example
    /// ```
    /// use bezier_interpolation::prelude::*;
    /// use nalgebra::Point2;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = BezierCurve2D::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 3.),
    ///     Point2::new(3., 3.),
    ///     Point2::new(4., 0.),
    /// ])
    /// .unwrap();
    /// let (head, tail) = curve.try_split(0.25).unwrap();
    /// assert_relative_eq!(head.end_point(), curve.try_point_at(0.25).unwrap());
    /// assert_relative_eq!(tail.first_point(), head.end_point());
    /// assert_eq!(tail.end_point(), Point2::new(4., 0.));
    /// ```
    pub fn try_split(&self, t: T) -> InterpolationResult<(Self, Self)> {
        let t = validate_parameter(t)?;
        let n = self.control_points.len();

        let mut points = self.control_points.clone();
        let mut head = Vec::with_capacity(n);
        let mut tail = Vec::with_capacity(n);
        head.push(points[0].clone());
        tail.push(points[n - 1].clone());
        for k in 1..n {
            for i in 0..(n - k) {
                points[i] = points[i].lerp(&points[i + 1], t);
            }
            head.push(points[0].clone());
            tail.push(points[n - k - 1].clone());
        }
        tail.reverse();

        Ok((Self::new_unchecked(head), Self::new_unchecked(tail)))
    }

    /// Cast the curve to a curve with another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BezierCurve<F, D> {
        BezierCurve {
            control_points: self
                .control_points
                .iter()
                .map(|p| p.clone().cast())
                .collect(),
        }
    }

    fn point_at_unchecked(&self, t: T) -> OPoint<T, D> {
        if t <= T::zero() {
            self.first_point()
        } else if t >= T::one() {
            self.end_point()
        } else {
            de_casteljau(&self.control_points, t)
        }
    }
}

impl<T: FloatingPoint, D: DimName> Reversible for BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Reverse the direction of the curve
    fn reverse(&mut self) {
        self.control_points.reverse();
    }
}

#[cfg(feature = "serde")]
impl<'de, T: FloatingPoint, D: DimName> serde::Deserialize<'de> for BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
    OPoint<T, D>: serde::Deserialize<'de>,
{
    /// Deserialize the control points and validate them as `try_new` does
    fn deserialize<S>(deserializer: S) -> Result<Self, S::Error>
    where
        S: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(
            rename = "BezierCurve",
            bound(deserialize = "OPoint<T, D>: serde::Deserialize<'de>")
        )]
        struct Fields<T: FloatingPoint, D: DimName>
        where
            DefaultAllocator: Allocator<D>,
        {
            control_points: Vec<OPoint<T, D>>,
        }

        let fields = <Fields<T, D> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(fields.control_points).map_err(serde::de::Error::custom)
    }
}

/// Evaluate the Bezier curve defined by `control_points` at a parameter in [0, 1]
/// by De Casteljau's algorithm
/// # Failures
/// - if less than 2 control points are given
/// - if the parameter is not finite or lies outside [0, 1]
///
/// # Example
/// ```
/// use bezier_interpolation::prelude::*;
/// use nalgebra::Point2;
///
/// let control_points = [Point2::new(0., 0.), Point2::new(2., 4.)];
/// assert_eq!(evaluate(&control_points, 0.25).unwrap(), Point2::new(0.5, 1.));
/// assert!(evaluate(&control_points, 1.5).is_err());
/// ```
pub fn evaluate<T: FloatingPoint, D: DimName>(
    control_points: &[OPoint<T, D>],
    t: T,
) -> InterpolationResult<OPoint<T, D>>
where
    DefaultAllocator: Allocator<D>,
{
    ensure_control_points(control_points)?;
    let t = validate_parameter(t)?;
    Ok(de_casteljau(control_points, t))
}

/// Repeatedly replace the control points with interpolations of neighbours
/// until a single point remains
fn de_casteljau<T: FloatingPoint, D: DimName>(
    control_points: &[OPoint<T, D>],
    t: T,
) -> OPoint<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    let mut points = control_points.to_vec();
    let n = points.len();
    for k in 1..n {
        for i in 0..(n - k) {
            points[i] = points[i].lerp(&points[i + 1], t);
        }
    }
    points.swap_remove(0)
}

fn ensure_control_points<T: FloatingPoint, D: DimName>(
    control_points: &[OPoint<T, D>],
) -> InterpolationResult<()>
where
    DefaultAllocator: Allocator<D>,
{
    if control_points.len() < 2 {
        Err(InterpolationError::invalid(format!(
            "a Bezier curve needs at least 2 control points, got {}",
            control_points.len()
        )))
    } else {
        Ok(())
    }
}
