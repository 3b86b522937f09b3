use thiserror::Error;

// Error type for sequence generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Error when a level outside the preset table is requested.
    #[error("Invalid level: {0} (expected 1 to 5)")]
    InvalidLevel(u8),
}
