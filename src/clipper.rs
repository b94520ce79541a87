use log::trace;
use num_traits::Float;

use crate::{
    Boundary,
    cartesian::{Point, Segment, Window},
};

/// Maximum amount of endpoint replacements performed on a single segment before giving up.
///
/// A segment crosses at most four boundaries, so well-formed input never gets close to it. It
/// only bounds the loop where the geometric argument does not hold, such as inverted windows.
const MAX_ITERATIONS: usize = 16;

/// Returns the portion of the given segment inside the window, or [`None`] if the segment lies
/// entirely outside of it.
pub fn clip<T>(segment: Segment<T>, window: &Window<T>) -> Option<Segment<T>>
where
    T: Float,
{
    Clipper::new(*window).clip(segment)
}

/// Implements the Cohen-Sutherland line clipping algorithm against a fixed [`Window`].
#[derive(Debug, Clone, Copy)]
pub struct Clipper<T> {
    window: Window<T>,
}

impl<T> Clipper<T> {
    /// Returns a clipper for the given window.
    pub fn new(window: Window<T>) -> Self {
        Self { window }
    }
}

impl<T> Clipper<T>
where
    T: Float,
{
    /// Returns the portion of the given segment inside the window, if any.
    ///
    /// The segment is returned untouched when both endpoints are inside the window. Otherwise,
    /// one outside endpoint at a time (the first one having priority) is moved onto the
    /// boundary it violates, checking [`Boundary::PRIORITY`] in order, until the segment can
    /// be trivially accepted or rejected.
    ///
    /// Intersections evaluating to non-finite coordinates, which only happen on degenerate
    /// input, reject the segment.
    pub fn clip(&self, segment: Segment<T>) -> Option<Segment<T>> {
        let Segment { mut from, mut to } = segment;
        let mut from_code = self.window.outcode(&from);
        let mut to_code = self.window.outcode(&to);

        for iteration in 0..MAX_ITERATIONS {
            if (from_code | to_code).is_inside() {
                return Some(Segment { from, to });
            }

            if from_code.intersects(to_code) {
                return None;
            }

            let (outside, replace_from) = if !from_code.is_inside() {
                (from_code, true)
            } else {
                (to_code, false)
            };

            let boundary = outside.boundary()?;
            let point = self.intersection(&from, &to, boundary);
            trace!("iteration {iteration}: moved endpoint onto the {boundary:?} boundary");

            if !point.is_finite() {
                return None;
            }

            if replace_from {
                from = point;
                from_code = self.window.outcode(&from);
            } else {
                to = point;
                to_code = self.window.outcode(&to);
            }
        }

        trace!("segment rejected after {MAX_ITERATIONS} iterations");
        None
    }

    /// Maps the given segments to their clipped counterparts, in order.
    pub fn clip_all<I>(&self, segments: I) -> impl Iterator<Item = (Segment<T>, Option<Segment<T>>)>
    where
        I: IntoIterator<Item = Segment<T>>,
    {
        segments
            .into_iter()
            .map(move |segment| (segment, self.clip(segment)))
    }

    /// Returns the visible portion of every given segment that is not rejected.
    pub fn visible<I>(&self, segments: I) -> impl Iterator<Item = Segment<T>>
    where
        I: IntoIterator<Item = Segment<T>>,
    {
        segments
            .into_iter()
            .filter_map(move |segment| self.clip(segment))
    }

    /// Returns the point where the line through from and to crosses the given boundary.
    fn intersection(&self, from: &Point<T>, to: &Point<T>, boundary: Boundary) -> Point<T> {
        let Window {
            xmin,
            ymin,
            xmax,
            ymax,
        } = self.window;

        match boundary {
            Boundary::Top => Point {
                x: from.x + (to.x - from.x) * (ymax - from.y) / (to.y - from.y),
                y: ymax,
            },
            Boundary::Bottom => Point {
                x: from.x + (to.x - from.x) * (ymin - from.y) / (to.y - from.y),
                y: ymin,
            },
            Boundary::Right => Point {
                x: xmax,
                y: from.y + (to.y - from.y) * (xmax - from.x) / (to.x - from.x),
            },
            Boundary::Left => Point {
                x: xmin,
                y: from.y + (to.y - from.y) * (xmin - from.x) / (to.x - from.x),
            },
        }
    }
}
