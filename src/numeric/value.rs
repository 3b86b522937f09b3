use std::fmt;
use std::str::FromStr;

use super::error::NumericError;
use super::fraction::{Fraction, FRACTION_TOLERANCE};

/// Decimal results this close to a whole number are read as integers.
const INTEGER_EPSILON: f64 = 1e-9;

/// A board number: a whole number or a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericValue {
    Integer(i64),
    Fraction(Fraction),
}

impl NumericValue {
    pub fn to_decimal(&self) -> f64 {
        match self {
            // Board integers are tiny, the conversion is exact.
            NumericValue::Integer(n) => *n as f64,
            NumericValue::Fraction(f) => f.to_decimal(),
        }
    }

    pub fn is_fraction(&self) -> bool {
        matches!(self, NumericValue::Fraction(_))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NumericValue::Integer(n) => Some(*n),
            NumericValue::Fraction(_) => None,
        }
    }

    /// Compares against a decimal within the fraction tolerance.
    pub fn approx_eq(&self, decimal: f64) -> bool {
        (self.to_decimal() - decimal).abs() < FRACTION_TOLERANCE
    }
}

/// Returns the whole number `value` stands for, if any.
pub fn integer_from_decimal(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    // Callers bound results by the level maximum before converting.
    ((value - rounded).abs() < INTEGER_EPSILON).then_some(rounded as i64)
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<Fraction> for NumericValue {
    fn from(value: Fraction) -> Self {
        NumericValue::Fraction(value)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(n) => write!(f, "{}", n),
            NumericValue::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}

impl FromStr for NumericValue {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.contains('/') {
            return trimmed.parse::<Fraction>().map(NumericValue::Fraction);
        }
        trimmed
            .parse::<i64>()
            .map(NumericValue::Integer)
            .map_err(|_| NumericError::InvalidNumber(s.to_string()))
    }
}
