use nalgebra::{allocator::Allocator, convert, DefaultAllocator, DimName, OPoint, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Tolerance used when a sampling parameter or a shared segment boundary is compared
    fn sampling_epsilon() -> Self {
        Self::default_epsilon() * convert::<f64, Self>(1e3)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

/// Check that every coordinate of the point is finite
pub fn is_finite_point<T: FloatingPoint, D: DimName>(point: &OPoint<T, D>) -> bool
where
    DefaultAllocator: Allocator<D>,
{
    point.iter().all(|c| c.is_finite())
}
