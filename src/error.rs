use thiserror::Error;

use crate::input::ParseError;

/// Sum error type for the operations surrounding the clipper.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("zoom scale must be finite and keep grid lines at least one pixel apart, got {0}")]
    InvalidScale(f64),
    #[error("canvas size must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("cannot write the rendered scene: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;
