// entries module
mod entries;
// error module
mod error;
// generator module
mod generator;
// level module
mod level;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports for chain generation and flattening.
//─────────────────────────────────────────────────────────────────────────────
pub use entries::{sequence_to_entries, Entry, EntryKind};
pub use error::SequenceError;
pub use generator::{
    generate_sequence, generate_sequence_with, SequenceGenerator, SequenceLimits, SequenceStep,
};
pub use level::{get_level_config, LevelPolicy, LEVELS};
