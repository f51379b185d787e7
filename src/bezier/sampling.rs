use nalgebra::convert;

use crate::{
    error::{InterpolationError, InterpolationResult},
    misc::FloatingPoint,
};

/// Parameter step that samples each quadratic segment at its middle
pub const DEFAULT_QUADRATIC_RESOLUTION: f64 = 0.5;

/// Parameter step that samples each cubic segment at its thirds
pub const DEFAULT_CUBIC_RESOLUTION: f64 = 1. / 3.;

/// Upper limit on the number of steps a single segment is divided into
/// A resolution finer than `1 / MAX_STEPS_PER_SEGMENT` is rejected,
/// as each segment would allocate more than a million samples.
pub const MAX_STEPS_PER_SEGMENT: usize = 1 << 20;

/// Options for sampling a piecewise Bezier path
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingOptions<T> {
    /// Step in parameter space between two consecutive samples of a segment
    /// smaller steps yield more samples, up to `MAX_STEPS_PER_SEGMENT + 1` per segment
    pub resolution: T,
}

impl<T: FloatingPoint> SamplingOptions<T> {
    pub fn new(resolution: T) -> Self {
        Self { resolution }
    }

    pub fn quadratic() -> Self {
        Self::new(convert(DEFAULT_QUADRATIC_RESOLUTION))
    }

    pub fn cubic() -> Self {
        Self::new(convert(DEFAULT_CUBIC_RESOLUTION))
    }
}

impl<T: FloatingPoint> Default for SamplingOptions<T> {
    fn default() -> Self {
        Self::cubic()
    }
}

/// Validate a sampling resolution
/// # Failures
/// - if the resolution is not finite or not greater than the sampling epsilon
/// - if the resolution divides a segment into more than `MAX_STEPS_PER_SEGMENT` steps
pub fn validate_resolution<T: FloatingPoint>(resolution: T) -> InterpolationResult<T> {
    if !(resolution.is_finite() && resolution > T::sampling_epsilon()) {
        return Err(InterpolationError::invalid(format!(
            "resolution must be a finite positive step, got {:?}",
            resolution
        )));
    }

    let max_steps = convert::<f64, T>(MAX_STEPS_PER_SEGMENT as f64);
    if T::one() / resolution > max_steps {
        return Err(InterpolationError::invalid(format!(
            "resolution {:?} exceeds {} steps per segment",
            resolution, MAX_STEPS_PER_SEGMENT
        )));
    }

    Ok(resolution)
}

/// Validate a curve parameter lying in [0, 1]
pub fn validate_parameter<T: FloatingPoint>(t: T) -> InterpolationResult<T> {
    if t.is_finite() && t >= T::zero() && t <= T::one() {
        Ok(t)
    } else {
        Err(InterpolationError::invalid(format!(
            "parameter must lie in [0, 1], got {:?}",
            t
        )))
    }
}

/// Compute the parameters `0, step, 2 * step, ..., 1` used to sample one segment
/// Multiples of the step falling within the sampling epsilon of 1 are dropped,
/// so the end parameter appears exactly once.
///
/// # Example
/// ```
/// use bezier_interpolation::prelude::*;
///
/// let parameters = sample_parameters(0.25).unwrap();
/// assert_eq!(parameters, vec![0., 0.25, 0.5, 0.75, 1.]);
///
/// let parameters = sample_parameters(1. / 3.).unwrap();
/// assert_eq!(parameters.len(), 4);
/// ```
pub fn sample_parameters<T: FloatingPoint>(resolution: T) -> InterpolationResult<Vec<T>> {
    let step = validate_resolution(resolution)?;
    let end = T::one() - T::sampling_epsilon();

    let mut parameters = vec![T::zero()];
    let mut i = 1_usize;
    loop {
        // multiply instead of accumulating to keep the rounding error bounded
        let t = convert::<f64, T>(i as f64) * step;
        if t >= end {
            break;
        }
        parameters.push(t);
        i += 1;
    }
    parameters.push(T::one());

    Ok(parameters)
}
