use itertools::Itertools;
use nalgebra::{allocator::Allocator, convert, Const, DefaultAllocator, DimName, OPoint};
use simba::scalar::SupersetOf;

use crate::{
    error::{InterpolationError, InterpolationResult},
    misc::{EndPoints, FloatingPoint, Reversible},
};

use super::{sample_parameters, BezierCurve};

/// Piecewise Bezier path
/// Consecutive segments share a boundary point: the end of a segment is the start of the next one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "BezierCurve<T, D>: serde::Serialize"))
)]
pub struct BezierSpline<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    segments: Vec<BezierCurve<T, D>>,
}

/// 2D Bezier spline alias
pub type BezierSpline2D<T> = BezierSpline<T, Const<2>>;

/// 3D Bezier spline alias
pub type BezierSpline3D<T> = BezierSpline<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> BezierSpline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new spline from connected segments
    /// # Failures
    /// - if no segment is given
    /// - if a segment does not start where the previous one ends
    pub fn try_new(segments: Vec<BezierCurve<T, D>>) -> InterpolationResult<Self> {
        if segments.is_empty() {
            return Err(InterpolationError::invalid(
                "a Bezier spline needs at least 1 segment",
            ));
        }

        let gap = segments
            .iter()
            .tuple_windows()
            .position(|(a, b)| (b.first_point() - a.end_point()).norm() > T::sampling_epsilon());
        if let Some(index) = gap {
            return Err(InterpolationError::invalid(format!(
                "segment {} does not start at the end of segment {}",
                index + 1,
                index
            )));
        }

        Ok(Self { segments })
    }

    /// Create a spline from segments already known to be connected
    pub(crate) fn new_unchecked(segments: Vec<BezierCurve<T, D>>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[BezierCurve<T, D>] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Return the points the spline passes through: every segment boundary
    pub fn knots(&self) -> Vec<OPoint<T, D>> {
        let mut knots = self.segments.iter().map(|s| s.first_point()).collect_vec();
        knots.push(self.end_point());
        knots
    }

    /// Return the control points of all segments,
    /// listing a boundary shared by two segments once
    pub fn control_polygon(&self) -> Vec<OPoint<T, D>> {
        let mut polygon = vec![self.first_point()];
        self.segments.iter().for_each(|s| {
            polygon.extend(s.control_points().iter().skip(1).cloned());
        });
        polygon
    }

    /// Evaluate the spline at a parameter in [0, # of segments]
    /// The integer part selects the segment and the fractional part is the parameter inside it.
    pub fn try_point_at(&self, u: T) -> InterpolationResult<OPoint<T, D>> {
        let n = self.segments.len();
        let upper = convert::<f64, T>(n as f64);
        if !(u.is_finite() && u >= T::zero() && u <= upper) {
            return Err(InterpolationError::invalid(format!(
                "parameter must lie in [0, {}], got {:?}",
                n, u
            )));
        }

        let index = u.floor().to_usize().map_or(0, |i| i.min(n - 1));
        let local = u - convert::<f64, T>(index as f64);
        self.segments[index].try_point_at(local.min(T::one()))
    }

    /// Sample every segment at `0, step, 2 * step, ..., 1`
    /// and concatenate the samples, emitting a boundary shared by two segments once.
    pub fn try_sample(&self, resolution: T) -> InterpolationResult<Vec<OPoint<T, D>>> {
        let parameters = sample_parameters(resolution)?;
        let mut points = Vec::with_capacity(self.segments.len() * (parameters.len() - 1) + 1);
        for (i, segment) in self.segments.iter().enumerate() {
            let samples = segment.sample_at(&parameters);
            let skip = if i == 0 { 0 } else { 1 };
            points.extend(samples.into_iter().skip(skip));
        }

        #[cfg(feature = "log")]
        log::trace!(
            "sampled {} segments into {} points",
            self.segments.len(),
            points.len()
        );

        Ok(points)
    }

    /// Cast the spline to a spline with another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BezierSpline<F, D> {
        BezierSpline {
            segments: self.segments.iter().map(|s| s.cast()).collect(),
        }
    }
}

impl<T: FloatingPoint, D: DimName> Reversible for BezierSpline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Reverse the direction of the spline
    fn reverse(&mut self) {
        self.segments.reverse();
        self.segments.iter_mut().for_each(|s| s.reverse());
    }
}

#[cfg(feature = "serde")]
impl<'de, T: FloatingPoint, D: DimName> serde::Deserialize<'de> for BezierSpline<T, D>
where
    DefaultAllocator: Allocator<D>,
    BezierCurve<T, D>: serde::Deserialize<'de>,
{
    /// Deserialize the segments and check that they are connected as `try_new` does
    fn deserialize<S>(deserializer: S) -> Result<Self, S::Error>
    where
        S: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(
            rename = "BezierSpline",
            bound(deserialize = "BezierCurve<T, D>: serde::Deserialize<'de>")
        )]
        struct Fields<T: FloatingPoint, D: DimName>
        where
            DefaultAllocator: Allocator<D>,
        {
            segments: Vec<BezierCurve<T, D>>,
        }

        let fields = <Fields<T, D> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(fields.segments).map_err(serde::de::Error::custom)
    }
}
