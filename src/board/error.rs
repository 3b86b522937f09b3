use crate::path::PathError;
use crate::sequence::SequenceError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for assembling a playable round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Error when the path generator gives up.
    #[error("Path generation failed: {0}")]
    Path(#[from] PathError),

    /// Error when the level is not one of the presets.
    #[error("Sequence generation failed: {0}")]
    Sequence(#[from] SequenceError),

    /// Error when no generated chain was long enough to cover the path.
    #[error("No sequence covered the {needed}-cell path after {attempts} attempts (longest had {longest} entries)")]
    SequenceTooShort {
        needed: usize,
        longest: usize,
        attempts: usize,
    },
}
