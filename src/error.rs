//! Error types for grid construction and access

use thiserror::Error;

use crate::point::Point;

/// Configuration errors raised by the grid and the path finder.
///
/// A search that finds no path is not an error; it yields `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid grid dimensions {width}x{height}: both must be odd and at least 3")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;
