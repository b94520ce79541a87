use std::{fmt::Debug, str::FromStr};

use log::{debug, warn};
use num_traits::Float;

use crate::{
    Clipper,
    cartesian::{Segment, Window},
    input::{Input, ParseError},
};

/// A set of segments clipped against a window, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<T = f64> {
    segments: Vec<Segment<T>>,
    window: Window<T>,
    results: Vec<Option<Segment<T>>>,
}

impl<T> Scene<T>
where
    T: Float + Debug,
{
    /// Clips every given segment against the window.
    pub fn new(segments: Vec<Segment<T>>, window: Window<T>) -> Self {
        if !window.is_valid() {
            warn!("clip window {window:?} has its minimum bounds above the maximum ones");
        }

        let results: Vec<_> = Clipper::new(window)
            .clip_all(segments.iter().copied())
            .map(|(_, clipped)| clipped)
            .collect();

        debug!(
            "{} out of {} segments are visible",
            results.iter().flatten().count(),
            segments.len()
        );

        Self {
            segments,
            window,
            results,
        }
    }
}

impl<T> Scene<T> {
    /// Returns the original segments, in input order.
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Returns the window every segment was clipped against.
    pub fn window(&self) -> &Window<T> {
        &self.window
    }

    /// Returns every original segment next to its visible portion, if any.
    pub fn results(&self) -> impl Iterator<Item = (&Segment<T>, Option<&Segment<T>>)> {
        self.segments
            .iter()
            .zip(self.results.iter().map(Option::as_ref))
    }

    /// Returns the visible portion of every segment that is not fully outside the window.
    pub fn clipped(&self) -> impl Iterator<Item = &Segment<T>> {
        self.results.iter().flatten()
    }
}

impl<T> From<Input<T>> for Scene<T>
where
    T: Float + Debug,
{
    fn from(input: Input<T>) -> Self {
        Self::new(input.segments, input.window)
    }
}

impl<T> FromStr for Scene<T>
where
    T: Float + FromStr + Debug,
{
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input.parse::<Input<T>>().map(Self::from)
    }
}
