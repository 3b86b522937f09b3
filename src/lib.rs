//! Puzzle engine for Math Path, a grid game where the player traces a chain
//! of arithmetic `a op b = c` through a 10×10 board.
//!
//! Generation runs in three stages: a random walk to a corner
//! ([`path::generate_path`]), a chain of calculations bounded by the level
//! ([`sequence::generate_sequence`]), and the chain flattened onto the walk
//! ([`board::generate_round`]). [`validate::validate_path`] re-derives the
//! arithmetic of a player's walk and reports the first broken group.

pub mod app;
pub mod board;
pub mod numeric;
pub mod path;
pub mod sequence;
pub mod validate;

pub use board::{generate_round, Board, Round, RoundError};
pub use numeric::{Fraction, NumericValue, Operator};
pub use path::{generate_path, Coordinate, GridPath, PathError};
pub use sequence::{
    generate_sequence, get_level_config, sequence_to_entries, Entry, LevelPolicy, SequenceError,
    SequenceStep,
};
pub use validate::{validate_path, ValidationRequest, ValidationResult};
