use rand::seq::SliceRandom;
use rand::Rng;

use super::coord::{Coordinate, CELL_COUNT};
use super::error::PathError;
use super::grid_path::{is_valid_length, GridPath, MAX_PATH_LENGTH};

/// Bounds on the randomized path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Fresh start positions tried before giving up.
    pub max_attempts: usize,
    /// Cells pushed onto the walk during a single attempt before it is
    /// abandoned and a new start is drawn.
    pub max_expansions: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            max_expansions: 200_000,
        }
    }
}

/// One level of the depth-first search: a cell and its shuffled
/// unvisited neighbours, consumed front to back.
struct Frame {
    moves: Vec<Coordinate>,
    next: usize,
}

impl Frame {
    fn next_move(&mut self) -> Option<Coordinate> {
        let candidate = self.moves.get(self.next).copied();
        self.next += 1;
        candidate
    }
}

/// Outcome of a single search from one start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Found(GridPath),
    /// Every branch was explored without success.
    Exhausted,
    /// The expansion budget ran out first.
    Abandoned,
}

/// `PathExplorer` finds puzzle paths by randomized backtracking.
///
/// The walk starts on an interior cell and ends on the first corner reached
/// with a valid length. Corners reached with any other length reject the
/// branch, as does a walk that already covers `MAX_PATH_LENGTH` cells.
#[derive(Debug, Clone, Default)]
pub struct PathExplorer {
    limits: PathLimits,
}

impl PathExplorer {
    pub fn new(limits: PathLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &PathLimits {
        &self.limits
    }

    /// Picks a start with both coordinates in `1..GRID_SIZE - 1`.
    pub fn random_start<R: Rng>(rng: &mut R) -> Coordinate {
        Coordinate::random_interior(rng)
    }

    /// Synchronous variant of [`generate_path`].
    pub fn find_path<R: Rng>(&self, rng: &mut R) -> Result<GridPath, PathError> {
        for _ in 0..self.limits.max_attempts {
            if let Some(path) = self.attempt(rng) {
                return Ok(path);
            }
        }
        Err(self.exhausted())
    }

    /// One search from a freshly drawn start.
    fn attempt<R: Rng>(&self, rng: &mut R) -> Option<GridPath> {
        match self.search_from(Self::random_start(rng), rng) {
            Attempt::Found(path) => Some(path),
            Attempt::Exhausted | Attempt::Abandoned => None,
        }
    }

    fn exhausted(&self) -> PathError {
        PathError::GenerationExhausted {
            attempts: self.limits.max_attempts,
        }
    }

    /// Runs one depth-first search from `start`.
    ///
    /// The search keeps an explicit frame stack and a visited array indexed
    /// by cell, so its depth never touches the call stack.
    pub fn search_from<R: Rng>(&self, start: Coordinate, rng: &mut R) -> Attempt {
        let mut visited = [false; CELL_COUNT];
        let mut walk: Vec<Coordinate> = Vec::with_capacity(MAX_PATH_LENGTH);
        let mut stack: Vec<Frame> = Vec::with_capacity(MAX_PATH_LENGTH);

        // A one-cell walk is never a valid length.
        if start.is_corner() {
            return Attempt::Exhausted;
        }
        visited[start.index()] = true;
        walk.push(start);
        stack.push(Self::frame_for(start, &visited, rng));

        let mut expansions = 0usize;
        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next_move() else {
                // Backtrack: this cell has no branch left.
                stack.pop();
                if let Some(cell) = walk.pop() {
                    visited[cell.index()] = false;
                }
                continue;
            };
            expansions += 1;
            if expansions > self.limits.max_expansions {
                return Attempt::Abandoned;
            }

            walk.push(next);
            if next.is_corner() {
                if is_valid_length(walk.len()) {
                    return Attempt::Found(GridPath::new(walk));
                }
                walk.pop();
                continue;
            }
            if walk.len() >= MAX_PATH_LENGTH {
                walk.pop();
                continue;
            }
            visited[next.index()] = true;
            stack.push(Self::frame_for(next, &visited, rng));
        }
        Attempt::Exhausted
    }

    fn frame_for<R: Rng>(
        cell: Coordinate,
        visited: &[bool; CELL_COUNT],
        rng: &mut R,
    ) -> Frame {
        let mut moves: Vec<Coordinate> = cell
            .neighbors()
            .filter(|n| !visited[n.index()])
            .collect();
        moves.shuffle(rng);
        Frame { moves, next: 0 }
    }
}

/// Generates a puzzle path with the default [`PathLimits`].
///
/// Control returns to the executor between start attempts. Fails with
/// [`PathError::GenerationExhausted`] when no attempt succeeds.
pub async fn generate_path<R: Rng>(rng: &mut R) -> Result<GridPath, PathError> {
    generate_path_with(&PathExplorer::default(), rng).await
}

/// Generates a puzzle path using the given explorer's limits.
pub async fn generate_path_with<R: Rng>(
    explorer: &PathExplorer,
    rng: &mut R,
) -> Result<GridPath, PathError> {
    for _ in 0..explorer.limits().max_attempts {
        if let Some(path) = explorer.attempt(rng) {
            return Ok(path);
        }
        tokio::task::yield_now().await;
    }
    Err(explorer.exhausted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::path::GRID_SIZE;

    #[test]
    fn finds_valid_paths_for_many_seeds() {
        let explorer = PathExplorer::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let path = explorer.find_path(&mut rng).unwrap();
            path.check().unwrap();
            let start = path.start().unwrap();
            assert!((1..GRID_SIZE - 1).contains(&start.x()));
            assert!((1..GRID_SIZE - 1).contains(&start.y()));
        }
    }

    #[test]
    fn same_seed_same_path() {
        let explorer = PathExplorer::default();
        let a = explorer.find_path(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = explorer.find_path(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_budget_is_exhausted() {
        let explorer = PathExplorer::new(PathLimits {
            max_attempts: 3,
            max_expansions: 0,
        });
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            explorer.find_path(&mut rng),
            Err(PathError::GenerationExhausted { attempts: 3 })
        );
    }

    #[tokio::test]
    async fn async_and_sync_search_agree_on_a_seed() {
        let explorer = PathExplorer::default();
        let sync_path = explorer.find_path(&mut StdRng::seed_from_u64(42)).unwrap();
        let async_path = generate_path_with(&explorer, &mut StdRng::seed_from_u64(42))
            .await
            .unwrap();
        assert_eq!(sync_path, async_path);
    }

    #[tokio::test]
    async fn async_search_reports_the_attempt_budget() {
        let explorer = PathExplorer::new(PathLimits {
            max_attempts: 2,
            max_expansions: 0,
        });
        let err = generate_path_with(&explorer, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap_err();
        assert_eq!(err, PathError::GenerationExhausted { attempts: 2 });
    }

    #[test]
    fn corner_start_cannot_succeed() {
        let explorer = PathExplorer::default();
        let mut rng = StdRng::seed_from_u64(3);
        let corner = Coordinate::new(0, 0).unwrap();
        assert_eq!(explorer.search_from(corner, &mut rng), Attempt::Exhausted);
    }
}
