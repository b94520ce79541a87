use crate::{Outcode, cartesian::Point};

/// The axis-aligned rectangle segments are clipped against.
///
/// The bounds are not required to be ordered: a window whose minimum exceeds its maximum on
/// some axis is accepted as is, and classifies points accordingly. See [`Window::is_valid`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Window<T = f64> {
    pub xmin: T,
    pub ymin: T,
    pub xmax: T,
    pub ymax: T,
}

impl<T> From<[T; 4]> for Window<T> {
    fn from([xmin, ymin, xmax, ymax]: [T; 4]) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }
}

impl<T> From<Window<T>> for [T; 4] {
    fn from(window: Window<T>) -> Self {
        [window.xmin, window.ymin, window.xmax, window.ymax]
    }
}

impl<T> Window<T>
where
    T: Copy,
{
    /// Returns the corner with the minimum coordinates.
    pub fn min(&self) -> Point<T> {
        Point {
            x: self.xmin,
            y: self.ymin,
        }
    }

    /// Returns the corner with the maximum coordinates.
    pub fn max(&self) -> Point<T> {
        Point {
            x: self.xmax,
            y: self.ymax,
        }
    }
}

impl<T> Window<T>
where
    T: PartialOrd,
{
    /// Returns the region code of the given point relative to self.
    pub fn outcode(&self, point: &Point<T>) -> Outcode {
        let mut outcode = Outcode::INSIDE;

        if point.x < self.xmin {
            outcode |= Outcode::LEFT;
        }
        if point.x > self.xmax {
            outcode |= Outcode::RIGHT;
        }
        if point.y < self.ymin {
            outcode |= Outcode::BOTTOM;
        }
        if point.y > self.ymax {
            outcode |= Outcode::TOP;
        }

        outcode
    }

    /// Returns true if, and only if, the given point is inside self or on its boundary.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.outcode(point).is_inside()
    }

    /// Returns true if, and only if, the minimum bounds do not exceed the maximum ones.
    pub fn is_valid(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }
}
