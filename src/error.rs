use std::fmt;

use crate::maze::cell::CellId;

/// Errors raised by maze construction and traversal.
///
/// Every variant is a caller contract violation. Nothing here is transient, so
/// nothing is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero.
    InvalidDimension { width: u16, height: u16 },
    /// The cell does not belong to the grid it was used with.
    UnknownCell(CellId),
    /// The two cells of an edge are not right/bottom neighbours.
    NotAdjacent { from: CellId, to: CellId },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}: both must be at least 1")
            }
            Self::UnknownCell(cell) => write!(f, "cell {cell} is not part of the grid"),
            Self::NotAdjacent { from, to } => {
                write!(f, "cells {from} and {to} are not adjacent")
            }
        }
    }
}

impl std::error::Error for MazeError {}

pub type Result<T> = std::result::Result<T, MazeError>;
