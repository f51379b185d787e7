pub mod bezier_curve;
pub mod bezier_spline;
pub mod sampling;
pub use bezier_curve::*;
pub use bezier_spline::*;
pub use sampling::*;
