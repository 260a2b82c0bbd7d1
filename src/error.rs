use thiserror::Error;

use crate::position::Position;

/// Convenient result alias for grid construction and search.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when building a grid or searching it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A grid needs at least one cell.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A position lies outside `[0, width) x [0, height)`.
    #[error("position {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// A search endpoint coincides with an obstacle.
    #[error("position {position} is blocked by an obstacle")]
    Blocked { position: Position },

    /// The frontier was exhausted without reaching the goal.
    #[error("no path found from {start} to {goal}")]
    NoPathFound { start: Position, goal: Position },
}

impl Error {
    /// True for outcomes caused by malformed input rather than by the grid layout.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::NoPathFound { .. })
    }
}
