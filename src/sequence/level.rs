use crate::numeric::{
    integer_from_decimal, Fraction, NumericValue, MAX_NUMERATOR, MIN_DENOMINATOR,
};

use super::error::SequenceError;

/// Numeric bounds for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPolicy {
    pub max_num: i64,
    pub allow_fractions: bool,
    pub max_denominator: u32,
}

/// Preset policies for levels 1 to 5, easiest first.
pub const LEVELS: [LevelPolicy; 5] = [
    LevelPolicy {
        max_num: 30,
        allow_fractions: false,
        max_denominator: 12,
    },
    LevelPolicy {
        max_num: 99,
        allow_fractions: false,
        max_denominator: 12,
    },
    LevelPolicy {
        max_num: 30,
        allow_fractions: true,
        max_denominator: 5,
    },
    LevelPolicy {
        max_num: 30,
        allow_fractions: true,
        max_denominator: 12,
    },
    LevelPolicy {
        max_num: 99,
        allow_fractions: true,
        max_denominator: 12,
    },
];

/// Looks up the preset for `level` (1-based).
pub fn get_level_config(level: u8) -> Result<LevelPolicy, SequenceError> {
    usize::from(level)
        .checked_sub(1)
        .and_then(|index| LEVELS.get(index))
        .copied()
        .ok_or(SequenceError::InvalidLevel(level))
}

impl LevelPolicy {
    /// True when `value` may appear as an operand or result at this level.
    pub fn admits(&self, value: &NumericValue) -> bool {
        match value {
            NumericValue::Integer(n) => *n > 0 && *n <= self.max_num,
            NumericValue::Fraction(f) => {
                self.allow_fractions
                    && f.numerator() <= MAX_NUMERATOR
                    && f.denominator() >= MIN_DENOMINATOR
                    && f.denominator() <= self.max_denominator
                    && f.is_reduced()
            }
        }
    }

    /// Turns a decimal result into a board number, or `None` when it is
    /// non-positive, above `max_num`, not finite, or a non-integer this level
    /// cannot write as a fraction.
    pub fn value_from_decimal(&self, value: f64) -> Option<NumericValue> {
        if !value.is_finite() || value <= 0.0 || value > self.max_num as f64 {
            return None;
        }
        if let Some(n) = integer_from_decimal(value) {
            return Some(NumericValue::Integer(n)).filter(|v| self.admits(v));
        }
        if !self.allow_fractions {
            return None;
        }
        Fraction::from_decimal(value, self.max_denominator).map(NumericValue::Fraction)
    }
}
