use rand::Rng;

use crate::path::{generate_path_with, GridPath, PathExplorer, PathLimits};
use crate::sequence::{
    generate_sequence_with, sequence_to_entries, Entry, LevelPolicy, SequenceGenerator,
    SequenceStep,
};
use crate::validate::{validate_path, ValidationRequest, ValidationResult};

use super::board::Board;
use super::error::RoundError;

/// Bounds on assembling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLimits {
    pub path: PathLimits,
    /// Chains generated before giving up on covering the path.
    pub sequence_attempts: usize,
}

impl Default for RoundLimits {
    fn default() -> Self {
        Self {
            path: PathLimits::default(),
            sequence_attempts: 20,
        }
    }
}

/// Everything generated for one game round.
#[derive(Debug, Clone)]
pub struct Round {
    pub level: u8,
    pub policy: LevelPolicy,
    pub path: GridPath,
    pub sequence: Vec<SequenceStep>,
    pub entries: Vec<Entry>,
    pub board: Board,
}

impl Round {
    /// Cell indices of the generated path, the intended solution.
    pub fn solution(&self) -> Vec<usize> {
        self.path.cell_indices()
    }

    /// Validates a walk against this round's board and path.
    pub fn validate(&self, user_path: &[usize]) -> ValidationResult {
        let grid_entries = self.board.grid_entries();
        validate_path(ValidationRequest {
            user_path,
            grid_entries: &grid_entries,
            original_path: &self.path,
        })
    }
}

/// Generates a round for `level` with the default limits.
pub async fn generate_round<R: Rng>(level: u8, rng: &mut R) -> Result<Round, RoundError> {
    generate_round_with(level, RoundLimits::default(), rng).await
}

/// Generates a path, then chains until one is long enough to cover every
/// path cell, then lays the tokens out on a board.
pub async fn generate_round_with<R: Rng>(
    level: u8,
    limits: RoundLimits,
    rng: &mut R,
) -> Result<Round, RoundError> {
    let generator = SequenceGenerator::for_level(level)?;
    let path = generate_path_with(&PathExplorer::new(limits.path), rng).await?;

    let mut longest = 0;
    for _ in 0..limits.sequence_attempts {
        let sequence = generate_sequence_with(&generator, rng).await;
        let entries = sequence_to_entries(&sequence);
        if entries.len() < path.len() {
            longest = longest.max(entries.len());
            continue;
        }
        let board = Board::populate(&path, &entries, rng);
        return Ok(Round {
            level,
            policy: *generator.policy(),
            path,
            sequence,
            entries,
            board,
        });
    }
    Err(RoundError::SequenceTooShort {
        needed: path.len(),
        longest,
        attempts: limits.sequence_attempts,
    })
}
