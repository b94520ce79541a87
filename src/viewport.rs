use std::iter;

use num_traits::Float;

use crate::{Error, Result, cartesian::Point};

/// Distance between two consecutive grid lines at scale 1.
pub const GRID_SPACING: f64 = 100.;

/// The pan and zoom transformation from world coordinates to canvas pixels.
///
/// World coordinates grow upwards while canvas coordinates grow downwards; the world origin is
/// drawn at the centre of the canvas, moved by the pan offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    scale: f64,
    offset: Point<f64>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.,
            height: 600.,
            scale: 1.,
            offset: Point::default(),
        }
    }
}

impl Viewport {
    /// Returns a viewport for a canvas of the given size, with no zoom nor pan.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0. && height > 0.) {
            return Err(Error::InvalidCanvas { width, height });
        }

        Ok(Self {
            width,
            height,
            ..Default::default()
        })
    }

    /// Returns the same viewport with the given zoom factor.
    ///
    /// The scale must keep grid lines at least one pixel apart.
    pub fn zoomed(self, scale: f64) -> Result<Self> {
        if !(scale.is_finite() && GRID_SPACING * scale >= 1.) {
            return Err(Error::InvalidScale(scale));
        }

        Ok(Self { scale, ..self })
    }

    /// Returns the same viewport with its pan offset moved by the given amount of pixels.
    pub fn panned(self, dx: f64, dy: f64) -> Self {
        Self {
            offset: Point {
                x: self.offset.x + dx,
                y: self.offset.y + dy,
            },
            ..self
        }
    }

    /// Returns the same viewport with the given pan offset.
    pub fn with_offset(self, offset: Point<f64>) -> Self {
        Self { offset, ..self }
    }

    /// Returns the canvas width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the canvas height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the zoom factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the pan offset in pixels.
    pub fn offset(&self) -> Point<f64> {
        self.offset
    }

    /// Returns the centre of the canvas.
    pub fn center(&self) -> Point<f64> {
        Point {
            x: self.width / 2.,
            y: self.height / 2.,
        }
    }

    /// Returns the canvas position of the given world point.
    pub fn to_screen<T>(&self, point: &Point<T>) -> Point<f64>
    where
        T: Float,
    {
        let center = self.center();
        let x = point.x.to_f64().unwrap_or(f64::NAN);
        let y = point.y.to_f64().unwrap_or(f64::NAN);

        Point {
            x: center.x + x * self.scale + self.offset.x,
            y: center.y - y * self.scale + self.offset.y,
        }
    }

    /// Returns the canvas position of the world axes: the abscissa of the vertical one and the
    /// ordinate of the horizontal one.
    pub fn axes(&self) -> Point<f64> {
        let center = self.center();
        Point {
            x: center.x + self.offset.x,
            y: center.y + self.offset.y,
        }
    }

    /// Returns the abscissa of every vertical grid line in the canvas.
    pub fn vertical_grid(&self) -> impl Iterator<Item = f64> {
        grid_lines(self.offset.x, self.grid_spacing(), self.width)
    }

    /// Returns the ordinate of every horizontal grid line in the canvas.
    pub fn horizontal_grid(&self) -> impl Iterator<Item = f64> {
        grid_lines(self.offset.y, self.grid_spacing(), self.height)
    }

    fn grid_spacing(&self) -> f64 {
        GRID_SPACING * self.scale
    }
}

fn grid_lines(offset: f64, spacing: f64, limit: f64) -> impl Iterator<Item = f64> {
    iter::successors(Some(offset % spacing), move |position| Some(position + spacing))
        .take_while(move |&position| position < limit)
}
