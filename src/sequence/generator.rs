use std::fmt;

use rand::Rng;

use crate::numeric::{Fraction, NumericValue, Operator, MAX_NUMERATOR, MIN_DENOMINATOR};

use super::error::SequenceError;
use super::level::{get_level_config, LevelPolicy};

/// Running values above this are steered back down.
const CORRECTION_THRESHOLD: f64 = 16.0;

/// Largest divisor tried by a range-correcting division.
const MAX_CORRECTING_DIVISOR: i64 = 10;

/// Bounds on sequence generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLimits {
    /// Steps appended at most.
    pub max_steps: usize,
    /// Operator and operand draws per step before the chain stops.
    pub max_attempts_per_step: usize,
    /// The chain starts from an integer in `1..=max_seed`.
    pub max_seed: i64,
}

impl Default for SequenceLimits {
    fn default() -> Self {
        Self {
            max_steps: 100,
            max_attempts_per_step: 100,
            max_seed: 16,
        }
    }
}

/// One link of the chain: `num1 operator num2 = result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStep {
    pub num1: NumericValue,
    pub operator: Operator,
    pub num2: NumericValue,
    pub result: NumericValue,
}

impl fmt::Display for SequenceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.num1, self.operator, self.num2, self.result
        )
    }
}

/// Builds arithmetic chains that stay inside a [`LevelPolicy`].
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    policy: LevelPolicy,
    limits: SequenceLimits,
}

impl SequenceGenerator {
    pub fn new(policy: LevelPolicy) -> Self {
        Self::with_limits(policy, SequenceLimits::default())
    }

    pub fn with_limits(policy: LevelPolicy, limits: SequenceLimits) -> Self {
        Self { policy, limits }
    }

    /// Generator for one of the preset levels.
    pub fn for_level(level: u8) -> Result<Self, SequenceError> {
        get_level_config(level).map(Self::new)
    }

    pub fn policy(&self) -> &LevelPolicy {
        &self.policy
    }

    pub fn limits(&self) -> &SequenceLimits {
        &self.limits
    }

    /// Draws the integer the chain starts from.
    pub fn seed<R: Rng>(&self, rng: &mut R) -> NumericValue {
        NumericValue::Integer(rng.gen_range(1..=self.limits.max_seed))
    }

    /// Synchronous variant of [`generate_sequence`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<SequenceStep> {
        let seed = self.seed(rng);
        let mut steps = Vec::with_capacity(self.limits.max_steps);
        while self.extend(&mut steps, seed, rng) {}
        steps
    }

    /// Appends one step continuing from the last result, or from `seed` on
    /// an empty chain. Returns false once the chain is full or stuck.
    fn extend<R: Rng>(
        &self,
        steps: &mut Vec<SequenceStep>,
        seed: NumericValue,
        rng: &mut R,
    ) -> bool {
        if steps.len() >= self.limits.max_steps {
            return false;
        }
        let num1 = steps.last().map_or(seed, |step| step.result);
        match self.next_step(num1, rng) {
            Some(step) => {
                steps.push(step);
                true
            }
            None => false,
        }
    }

    /// Tries up to `max_attempts_per_step` draws to extend the chain from
    /// `num1`. `None` ends the chain early.
    pub fn next_step<R: Rng>(&self, num1: NumericValue, rng: &mut R) -> Option<SequenceStep> {
        (0..self.limits.max_attempts_per_step).find_map(|_| {
            let (operator, num2) = self.select_operator_and_operand(num1, rng);
            if num1.is_fraction() && num2.is_fraction() {
                return None;
            }
            let result = self.calculate_result(num1, operator, num2)?;
            Some(SequenceStep {
                num1,
                operator,
                num2,
                result,
            })
        })
    }

    /// Applies `operator` in decimal arithmetic and maps the outcome back to
    /// a board number this level admits.
    pub fn calculate_result(
        &self,
        num1: NumericValue,
        operator: Operator,
        num2: NumericValue,
    ) -> Option<NumericValue> {
        let value = operator.apply(num1.to_decimal(), num2.to_decimal())?;
        self.policy
            .value_from_decimal(value)
            .filter(|result| self.policy.admits(result))
    }

    /// Picks the next operator and second operand.
    ///
    /// Values above 16 usually get a subtraction or exact division that brings
    /// them back into `1..=16`. Otherwise the operator is weighted towards
    /// multiplication and division, and the operand is an integer from
    /// `2..=max_num` or, for integer values on fraction levels, sometimes a
    /// proper fraction.
    pub fn select_operator_and_operand<R: Rng>(
        &self,
        num1: NumericValue,
        rng: &mut R,
    ) -> (Operator, NumericValue) {
        let value = num1.to_decimal();
        if value > CORRECTION_THRESHOLD && rng.gen_bool(0.8) {
            if let Some(correction) = self.range_correction(num1, rng) {
                return correction;
            }
        }

        let bias: f64 = rng.gen();
        let operator = if bias < 0.35 {
            Operator::Multiply
        } else if bias < 0.6 {
            Operator::Divide
        } else if bias < 0.8 {
            Operator::Add
        } else {
            Operator::Subtract
        };

        let use_fraction = !num1.is_fraction() && self.policy.allow_fractions && !rng.gen_bool(0.7);
        let num2 = if use_fraction {
            NumericValue::Fraction(self.random_fraction(rng))
        } else {
            NumericValue::Integer(rng.gen_range(2..=self.policy.max_num))
        };
        (operator, num2)
    }

    fn range_correction<R: Rng>(
        &self,
        num1: NumericValue,
        rng: &mut R,
    ) -> Option<(Operator, NumericValue)> {
        let value = num1.to_decimal();
        if rng.gen_bool(0.4) {
            let target = rng.gen_range(1..=16_i64) as f64;
            // value > 16 and is at most max_num, so the cast stays in range.
            let num2 = (value - target).floor() as i64;
            return (num2 > 1 && num2 <= self.policy.max_num)
                .then_some((Operator::Subtract, NumericValue::Integer(num2)));
        }
        let n = num1.as_integer()?;
        (2..=MAX_CORRECTING_DIVISOR.min(self.policy.max_num))
            .find(|divisor| n % divisor == 0 && (n / divisor) as f64 <= CORRECTION_THRESHOLD)
            .map(|divisor| (Operator::Divide, NumericValue::Integer(divisor)))
    }

    /// Draws a reduced proper fraction with numerator at most 11 and
    /// denominator in `2..=max_denominator`.
    pub fn random_fraction<R: Rng>(&self, rng: &mut R) -> Fraction {
        let max_denominator = self.policy.max_denominator.max(MIN_DENOMINATOR);
        loop {
            let denominator = rng.gen_range(MIN_DENOMINATOR..=max_denominator);
            let numerator = rng.gen_range(1..=MAX_NUMERATOR);
            if numerator >= denominator {
                continue;
            }
            if let Ok(fraction) = Fraction::new(numerator, denominator) {
                if fraction.is_reduced() {
                    return fraction;
                }
            }
        }
    }
}

/// Generates a chain for `level` (1 to 5) with the default limits.
///
/// Control returns to the executor after each appended step. The chain may
/// be shorter than `max_steps` when no extension fits the level. Fails only
/// for an unknown level.
pub async fn generate_sequence<R: Rng>(
    level: u8,
    rng: &mut R,
) -> Result<Vec<SequenceStep>, SequenceError> {
    let generator = SequenceGenerator::for_level(level)?;
    Ok(generate_sequence_with(&generator, rng).await)
}

/// Async chain generation with an explicit generator.
pub async fn generate_sequence_with<R: Rng>(
    generator: &SequenceGenerator,
    rng: &mut R,
) -> Vec<SequenceStep> {
    let seed = generator.seed(rng);
    let mut steps = Vec::with_capacity(generator.limits().max_steps);
    while generator.extend(&mut steps, seed, rng) {
        tokio::task::yield_now().await;
    }
    steps
}
