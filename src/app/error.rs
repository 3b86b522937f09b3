use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path generation error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Sequence generation error: {0}")]
    Sequence(#[from] crate::sequence::SequenceError),
    #[error("Round assembly error: {0}")]
    Round(#[from] crate::board::RoundError),
    #[error("General error: {0}")]
    General(String),
}
