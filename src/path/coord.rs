use rand::Rng;
use std::fmt;

/// Width and height of the square board.
pub const GRID_SIZE: usize = 10;

/// Number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A board cell, `x` is the column and `y` the row.
///
/// Only constructed through checked constructors, so `index()` is always
/// below `CELL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    /// Returns `None` when the pair lies outside the board.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        (x < GRID_SIZE && y < GRID_SIZE).then_some(Self { x, y })
    }

    /// Draws a cell off the border, both axes in `1..GRID_SIZE - 1`.
    pub fn random_interior<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(1..GRID_SIZE - 1),
            y: rng.gen_range(1..GRID_SIZE - 1),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Row-major cell index, `y * GRID_SIZE + x`.
    pub fn index(&self) -> usize {
        self.y * GRID_SIZE + self.x
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self {
            x: index % GRID_SIZE,
            y: index / GRID_SIZE,
        })
    }

    pub fn is_corner(&self) -> bool {
        let edge = GRID_SIZE - 1;
        (self.x == 0 || self.x == edge) && (self.y == 0 || self.y == edge)
    }

    /// True when `other` is one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Orthogonal neighbours inside the board, in right/left/down/up order.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let candidates = [
            (self.x.checked_add(1), Some(self.y)),
            (self.x.checked_sub(1), Some(self.y)),
            (Some(self.x), self.y.checked_add(1)),
            (Some(self.x), self.y.checked_sub(1)),
        ];
        candidates.into_iter().filter_map(|(x, y)| Coordinate::new(x?, y?))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
