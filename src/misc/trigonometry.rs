use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use super::FloatingPoint;

/// Check whether all points lie on one line within `tolerance`.
/// The line is spanned by the first point and the point farthest from it,
/// so clustered or duplicated points do not break the test.
pub fn points_are_collinear<T: FloatingPoint, D: DimName>(
    points: &[OPoint<T, D>],
    tolerance: T,
) -> bool
where
    DefaultAllocator: Allocator<D>,
{
    let Some(origin) = points.first() else {
        return true;
    };

    let farthest = points
        .iter()
        .map(|p| p - origin)
        .max_by(|a, b| {
            a.norm_squared()
                .partial_cmp(&b.norm_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    let direction = match farthest {
        Some(d) if d.norm() > tolerance => d.normalize(),
        _ => return true,
    };

    points.iter().all(|p| {
        let v = p - origin;
        let rejection = &v - &direction * v.dot(&direction);
        rejection.norm() <= tolerance
    })
}
