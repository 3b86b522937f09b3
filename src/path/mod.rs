// coord module
mod coord;
// error module
mod error;
// explorer module
mod explorer;
// grid_path module
mod grid_path;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports for board geometry and path generation.
//─────────────────────────────────────────────────────────────────────────────
pub use coord::{Coordinate, CELL_COUNT, GRID_SIZE};
pub use error::PathError;
pub use explorer::{generate_path, generate_path_with, Attempt, PathExplorer, PathLimits};
pub use grid_path::{is_valid_length, GridPath, MAX_PATH_LENGTH, MIN_PATH_LENGTH};
