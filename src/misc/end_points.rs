use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use crate::bezier::{BezierCurve, BezierSpline};

use super::FloatingPoint;

pub trait EndPoints<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    fn first_point(&self) -> OPoint<T, D>;
    fn end_point(&self) -> OPoint<T, D>;
    fn end_points(&self) -> (OPoint<T, D>, OPoint<T, D>) {
        (self.first_point(), self.end_point())
    }
}

impl<T: FloatingPoint, D: DimName> EndPoints<T, D> for BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// A Bezier curve starts exactly at its first control point
    fn first_point(&self) -> OPoint<T, D> {
        self.control_points()[0].clone()
    }

    /// A Bezier curve ends exactly at its last control point
    fn end_point(&self) -> OPoint<T, D> {
        self.control_points()[self.degree()].clone()
    }
}

impl<T: FloatingPoint, D: DimName> EndPoints<T, D> for BezierSpline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn first_point(&self) -> OPoint<T, D> {
        self.segments()[0].first_point()
    }

    fn end_point(&self) -> OPoint<T, D> {
        self.segments()[self.segment_count() - 1].end_point()
    }
}
