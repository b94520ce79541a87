//! Cohen-Sutherland line clipping.
//!
//! Segments are clipped against an axis-aligned [`Window`](cartesian::Window) by classifying
//! their endpoints with an [`Outcode`] and moving the outside ones onto the window boundaries
//! until the segment is either fully inside or provably outside.
//!
//! ```
//! use lineclip::{cartesian::{Segment, Window}, clip};
//!
//! let window = Window::from([0., 0., 10., 10.]);
//!
//! assert_eq!(
//!     clip(Segment::from([-5., 5., 15., 5.]), &window),
//!     Some(Segment::from([0., 5., 10., 5.]))
//! );
//! assert_eq!(clip(Segment::from([20., 20., 30., 30.]), &window), None);
//! ```

mod clipper;
mod error;
mod outcode;
mod tolerance;
mod viewport;

pub mod cartesian;
pub mod input;
#[cfg(feature = "render")]
pub mod render;
pub mod scene;

pub use self::clipper::{Clipper, clip};
pub use self::error::{Error, Result};
pub use self::outcode::{Boundary, Outcode};
pub use self::tolerance::{IsClose, Positive, Tolerance};
pub use self::viewport::{GRID_SPACING, Viewport};

/// A type whose distance to other instances of itself is defined.
pub trait Distance {
    /// The distance type.
    type Distance;

    /// Returns the distance between self and rhs.
    fn distance(&self, rhs: &Self) -> Self::Distance;
}
