use super::coord::Coordinate;
use thiserror::Error;

// Error type for path generation and geometric checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when every start position was tried without finding a path.
    #[error("Failed to generate a valid path after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// Error when a path has no cells at all.
    #[error("Path is empty")]
    Empty,

    /// Error when a path length breaks the 34..=100, 3n + 1 rule.
    #[error("Path length {0} is not a valid puzzle length")]
    InvalidLength(usize),

    /// Error when the final cell is not a board corner.
    #[error("Path ends at {0}, which is not a corner")]
    NotEndingAtCorner(Coordinate),

    /// Error when two consecutive cells are not orthogonal neighbours.
    #[error("Path cell {index} is not adjacent to the cell after it")]
    NotAdjacent { index: usize },

    /// Error when a cell appears twice.
    #[error("Path visits {0} more than once")]
    RevisitedCell(Coordinate),
}
