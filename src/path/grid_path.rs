use super::coord::{Coordinate, CELL_COUNT};
use super::error::PathError;

/// Shortest path a puzzle may use.
pub const MIN_PATH_LENGTH: usize = 34;

/// Longest path a puzzle may use, one visit per cell.
pub const MAX_PATH_LENGTH: usize = CELL_COUNT;

/// True for lengths in `MIN_PATH_LENGTH..=MAX_PATH_LENGTH` of the form `3n + 1`.
///
/// The first cell seeds the chain and every later group of three cells holds
/// one `operator, operand, result` step.
pub fn is_valid_length(length: usize) -> bool {
    (MIN_PATH_LENGTH..=MAX_PATH_LENGTH).contains(&length) && (length - 1) % 3 == 0
}

/// An ordered walk over board cells produced by the path generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    cells: Vec<Coordinate>,
}

impl GridPath {
    /// Wraps a coordinate list without checking it. See [`GridPath::check`].
    pub fn new(cells: Vec<Coordinate>) -> Self {
        Self { cells }
    }

    /// Wraps a coordinate list after running [`GridPath::check`] on it.
    pub fn checked(cells: Vec<Coordinate>) -> Result<Self, PathError> {
        let path = Self::new(cells);
        path.check()?;
        Ok(path)
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Coordinate> {
        self.cells.last().copied()
    }

    /// Row-major indices of the cells, in walk order.
    pub fn cell_indices(&self) -> Vec<usize> {
        self.cells.iter().map(Coordinate::index).collect()
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.cells.contains(coord)
    }

    /// Verifies the geometric puzzle rules: valid length, a corner at the end,
    /// orthogonal steps only and no cell visited twice.
    pub fn check(&self) -> Result<(), PathError> {
        let end = self.end().ok_or(PathError::Empty)?;
        if !is_valid_length(self.cells.len()) {
            return Err(PathError::InvalidLength(self.cells.len()));
        }
        if !end.is_corner() {
            return Err(PathError::NotEndingAtCorner(end));
        }
        if let Some(index) = self
            .cells
            .windows(2)
            .position(|pair| !pair[0].is_adjacent(&pair[1]))
        {
            return Err(PathError::NotAdjacent { index });
        }
        let mut seen = [false; CELL_COUNT];
        for cell in &self.cells {
            let slot = &mut seen[cell.index()];
            if *slot {
                return Err(PathError::RevisitedCell(*cell));
            }
            *slot = true;
        }
        Ok(())
    }
}
