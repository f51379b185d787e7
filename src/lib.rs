//! Quadratic and cubic Bezier interpolation through ordered points.
//!
//! Points are joined by a piecewise Bezier path ([`prelude::BezierSpline`]) whose segments
//! are evaluated with De Casteljau's algorithm and sampled with a fixed parameter step.
//!
//! ```
//! use bezier_interpolation::{cubic_interpolation, quadratic_interpolation};
//!
//! let cubic: Vec<[f64; 2]> = cubic_interpolation([(1., -1.), (2., -5.), (3., 3.)]).unwrap();
//! assert_eq!(cubic[3], [2., -5.]);
//!
//! let quadratic: Vec<[f64; 2]> = quadratic_interpolation([(1., 1.), (2., 4.), (3., 9.)]).unwrap();
//! assert_eq!(quadratic.len(), 5);
//! ```
#![allow(clippy::needless_range_loop)]

mod bezier;
mod error;
mod interpolation;
mod misc;

pub use error::{InterpolationError, InterpolationResult};
pub use interpolation::{
    cubic_interpolation, cubic_interpolation_with, quadratic_interpolation,
    quadratic_interpolation_with,
};

pub mod prelude {
    pub use crate::bezier::*;
    pub use crate::error::*;
    pub use crate::interpolation::*;
    pub use crate::misc::*;
}
