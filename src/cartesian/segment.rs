use num_traits::Float;

use crate::{
    Distance, IsClose, Tolerance,
    cartesian::{Point, Window},
};

/// The straight line between two endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Segment<T = f64> {
    /// The first point in the segment.
    pub from: Point<T>,
    /// The last point in the segment.
    pub to: Point<T>,
}

impl<T> From<[T; 4]> for Segment<T> {
    fn from([x1, y1, x2, y2]: [T; 4]) -> Self {
        Self {
            from: Point { x: x1, y: y1 },
            to: Point { x: x2, y: y2 },
        }
    }
}

impl<T> From<Segment<T>> for [T; 4] {
    fn from(segment: Segment<T>) -> Self {
        [segment.from.x, segment.from.y, segment.to.x, segment.to.y]
    }
}

impl<T> Segment<T> {
    /// Returns the segment between the given endpoints.
    pub fn new(from: Point<T>, to: Point<T>) -> Self {
        Self { from, to }
    }

    /// Returns the same segment with its endpoints swapped.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl<T> Segment<T>
where
    T: Float,
{
    /// Returns the portion of self inside the given window, if any.
    pub fn clip(self, window: &Window<T>) -> Option<Self> {
        crate::clip(self, window)
    }

    /// Returns the distance between the two endpoints of the segment.
    pub fn length(&self) -> T {
        self.from.distance(&self.to)
    }

    /// Returns true if, and only if, the given point exists in this segment.
    pub fn contains(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> bool {
        (self.from.distance(point) + self.to.distance(point)).is_close(&self.length(), tolerance)
    }

    /// Returns true if, and only if, self and rhs span the same points regardless of their
    /// orientation.
    pub fn coincides(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.is_close(rhs, tolerance) || self.is_close(&rhs.reversed(), tolerance)
    }
}

impl<T> IsClose for Segment<T>
where
    T: IsClose<Tolerance = Tolerance<T>> + Copy,
{
    type Tolerance = Tolerance<T>;

    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool {
        self.from.is_close(&rhs.from, tolerance) && self.to.is_close(&rhs.to, tolerance)
    }
}
