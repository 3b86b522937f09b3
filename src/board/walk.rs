use crate::path::{Coordinate, GridPath};
use crate::validate::ValidationResult;

/// The cells a player has selected so far, in order, from a fixed start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    start: Option<usize>,
    cells: Vec<usize>,
}

impl Walk {
    /// An empty walk that must begin on cell `start`.
    pub fn new(start: usize) -> Self {
        Self {
            start: Some(start),
            cells: Vec::new(),
        }
    }

    /// An empty walk that must begin on the start of `path`.
    pub fn for_path(path: &GridPath) -> Self {
        Self {
            start: path.start().map(|c| c.index()),
            cells: Vec::new(),
        }
    }

    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Handles a click on `cell`.
    ///
    /// An empty walk only takes its start cell. After that a click must be
    /// orthogonally adjacent to the last cell: a cell already in the walk
    /// cuts the walk back to end on it, any other cell is appended.
    /// Returns whether the walk changed.
    pub fn toggle(&mut self, cell: usize) -> bool {
        let Some(coord) = Coordinate::from_index(cell) else {
            return false;
        };
        if !self.accepts(&coord) {
            return false;
        }
        match self.cells.iter().position(|&c| c == cell) {
            Some(position) => self.cells.truncate(position + 1),
            None => self.cells.push(cell),
        }
        true
    }

    /// True when a click on `coord` would be taken.
    pub fn accepts(&self, coord: &Coordinate) -> bool {
        match self.cells.last() {
            None => self.start == Some(coord.index()),
            Some(&last) => Coordinate::from_index(last)
                .map(|last| last.is_adjacent(coord))
                .unwrap_or(false),
        }
    }

    /// Cuts the walk at the failing group reported by the validator.
    /// A valid result leaves the walk untouched.
    pub fn truncate_at_error(&mut self, result: &ValidationResult) {
        if let Some(offset) = result.error_offset() {
            self.cells.truncate(offset);
        }
    }
}
