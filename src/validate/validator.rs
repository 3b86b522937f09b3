//! Re-derives the arithmetic chain along a walked path.
//!
//! A walk is read in groups of three cells after the first: operator,
//! operand, result. The first group takes its left operand from cell 0, every
//! later group from the result computed by the group before it. A group fails
//! when a cell is empty or holds the wrong kind of token, when it divides by
//! zero, or when the result cell on the board disagrees with the computed
//! value. The first failing group ends the walk.
//!
//! A failing group is gameplay feedback, not an error: it is reported inside
//! [`ValidationResult`] so the caller can truncate the walk at
//! [`ValidationResult::error_offset`].

use thiserror::Error;

use crate::numeric::{NumericValue, Operator};
use crate::path::{Coordinate, GridPath, MIN_PATH_LENGTH};
use crate::sequence::Entry;

/// Inputs for [`validate_path`].
#[derive(Debug, Clone, Copy)]
pub struct ValidationRequest<'a> {
    /// Cell indices in the order the player walked them.
    pub user_path: &'a [usize],
    /// Board tokens by cell index, `None` for an empty cell.
    pub grid_entries: &'a [Option<Entry>],
    /// The generated path, used for its first and last cells.
    pub original_path: &'a GridPath,
}

/// One re-derived calculation, in decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationStep {
    pub num1: f64,
    pub operator: Operator,
    pub num2: f64,
    pub result: f64,
}

/// Why a group of the walk does not compute.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepFault {
    #[error("Invalid calculation: no value at walk position {position}")]
    MissingEntry { position: usize },

    #[error("Invalid calculation: expected a number at walk position {position}, found '{found}'")]
    ExpectedNumber { position: usize, found: Entry },

    #[error("Invalid calculation: expected an operator at walk position {position}, found '{found}'")]
    ExpectedOperator { position: usize, found: Entry },

    #[error("Invalid calculation: {num1} / {num2} divides by zero")]
    DivisionByZero { num1: f64, num2: f64 },

    #[error("Invalid calculation: {num1} {operator} {num2} = {placed}, but the result is {computed}")]
    ResultMismatch {
        num1: f64,
        operator: Operator,
        num2: f64,
        placed: NumericValue,
        computed: f64,
    },
}

/// Verdict on a walked path.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Every group computed and matched its placed result.
    pub is_valid: bool,
    /// Index of the first failing group.
    pub error_step: Option<usize>,
    /// Readable description of the failing calculation.
    pub error_details: Option<String>,
    pub fault: Option<StepFault>,
    /// Calculations that succeeded, in walk order.
    pub steps: Vec<CalculationStep>,
    /// Number of cells walked.
    pub walked_length: usize,
    pub is_valid_length: bool,
    pub starts_at_start_square: bool,
    pub ends_at_end_square: bool,
}

impl ValidationResult {
    /// Cell offset at which to cut the displayed walk, three cells per group.
    pub fn error_offset(&self) -> Option<usize> {
        self.error_step.map(|step| step * 3)
    }

    /// True when the walk is a finished solution: consistent arithmetic,
    /// long enough, every group closed by its result, and the right ends.
    pub fn is_solved(&self) -> bool {
        self.is_valid
            && self.is_valid_length
            && self.starts_at_start_square
            && self.ends_at_end_square
            && self.walked_length % 3 == 1
    }
}

/// Validates a walked path against the board.
pub fn validate_path(request: ValidationRequest<'_>) -> ValidationResult {
    let ValidationRequest {
        user_path,
        grid_entries,
        original_path,
    } = request;

    let walked: Vec<Option<Entry>> = user_path
        .iter()
        .map(|&cell| grid_entries.get(cell).copied().flatten())
        .collect();

    let first = user_path.first().and_then(|&cell| Coordinate::from_index(cell));
    let last = user_path.last().and_then(|&cell| Coordinate::from_index(cell));
    let starts_at_start_square = first.is_some() && first == original_path.start();
    let ends_at_end_square = last.is_some() && last == original_path.end();

    let (steps, failure) = rederive_chain(&walked);
    let (error_step, fault) = match failure {
        Some((group, fault)) => (Some(group), Some(fault)),
        None => (None, None),
    };

    ValidationResult {
        is_valid: fault.is_none(),
        error_step,
        error_details: fault.as_ref().map(ToString::to_string),
        fault,
        steps,
        walked_length: user_path.len(),
        is_valid_length: user_path.len() >= MIN_PATH_LENGTH,
        starts_at_start_square,
        ends_at_end_square,
    }
}

/// Runs the chain over walked tokens. Returns the successful calculations
/// and, if any, the first failing group with its fault.
fn rederive_chain(
    walked: &[Option<Entry>],
) -> (Vec<CalculationStep>, Option<(usize, StepFault)>) {
    let mut steps = Vec::with_capacity(walked.len() / 3);
    let mut running: Option<f64> = None;
    let mut group = 0;

    // A group needs its operator and operand; its result cell may still be
    // missing at the tip of an unfinished walk.
    while 3 * group + 2 < walked.len() {
        match compute_group(walked, 3 * group, running) {
            Ok(step) => {
                running = Some(step.result);
                steps.push(step);
            }
            Err(fault) => return (steps, Some((group, fault))),
        }
        group += 1;
    }
    (steps, None)
}

/// Computes the group starting at walk position `base`.
fn compute_group(
    walked: &[Option<Entry>],
    base: usize,
    running: Option<f64>,
) -> Result<CalculationStep, StepFault> {
    let num1 = match running {
        Some(value) => value,
        None => number_at(walked, base)?.to_decimal(),
    };
    let operator = operator_at(walked, base + 1)?;
    let num2 = number_at(walked, base + 2)?.to_decimal();
    let result = operator
        .apply(num1, num2)
        .ok_or(StepFault::DivisionByZero { num1, num2 })?;
    if base + 3 < walked.len() {
        let placed = number_at(walked, base + 3)?;
        if !placed.approx_eq(result) {
            return Err(StepFault::ResultMismatch {
                num1,
                operator,
                num2,
                placed,
                computed: result,
            });
        }
    }
    Ok(CalculationStep {
        num1,
        operator,
        num2,
        result,
    })
}

fn entry_at(walked: &[Option<Entry>], position: usize) -> Result<Entry, StepFault> {
    walked
        .get(position)
        .copied()
        .flatten()
        .ok_or(StepFault::MissingEntry { position })
}

fn number_at(walked: &[Option<Entry>], position: usize) -> Result<NumericValue, StepFault> {
    let entry = entry_at(walked, position)?;
    entry.as_number().ok_or(StepFault::ExpectedNumber {
        position,
        found: entry,
    })
}

fn operator_at(walked: &[Option<Entry>], position: usize) -> Result<Operator, StepFault> {
    let entry = entry_at(walked, position)?;
    entry.as_operator().ok_or(StepFault::ExpectedOperator {
        position,
        found: entry,
    })
}
