use std::fmt;
use std::str::FromStr;

use super::error::NumericError;

/// Largest numerator a board fraction may carry.
pub const MAX_NUMERATOR: u32 = 11;

/// Smallest denominator a board fraction may carry.
pub const MIN_DENOMINATOR: u32 = 2;

/// Tolerance used when recovering a fraction from a decimal result.
pub const FRACTION_TOLERANCE: f64 = 1e-4;

/// An immutable `numerator/denominator` pair.
///
/// Equality is structural. Every fraction produced by the generators is in
/// lowest terms, so structural equality is value equality for board tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// Creates a fraction, rejecting zero numerators and denominators.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, NumericError> {
        if denominator == 0 {
            return Err(NumericError::ZeroDenominator);
        }
        if numerator == 0 {
            return Err(NumericError::ZeroNumerator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn to_decimal(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// True when numerator and denominator share no factor above one.
    pub fn is_reduced(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }

    /// True for fractions strictly between zero and one.
    pub fn is_proper(&self) -> bool {
        self.numerator < self.denominator
    }

    /// Recovers a proper fraction from a decimal value.
    ///
    /// Denominators are tried in ascending order from 2 to `max_denominator`,
    /// so when several candidates fall within [`FRACTION_TOLERANCE`] the one
    /// with the smallest denominator wins. The numerator must stay in
    /// `1..=MAX_NUMERATOR` and below the denominator.
    pub fn from_decimal(value: f64, max_denominator: u32) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        (MIN_DENOMINATOR..=max_denominator).find_map(|denominator| {
            let numerator = (value * f64::from(denominator)).round();
            if numerator < 1.0 || numerator > f64::from(MAX_NUMERATOR) {
                return None;
            }
            // Bounded by MAX_NUMERATOR above, so the cast is lossless.
            let numerator = numerator as u32;
            if numerator >= denominator {
                return None;
            }
            let candidate = Self {
                numerator,
                denominator,
            };
            ((candidate.to_decimal() - value).abs() < FRACTION_TOLERANCE).then_some(candidate)
        })
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumericError::InvalidNumber(s.to_string());
        let (numerator, denominator) = s.trim().split_once('/').ok_or_else(invalid)?;
        let numerator = numerator.trim().parse::<u32>().map_err(|_| invalid())?;
        let denominator = denominator.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(numerator, denominator)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_parts() {
        assert_eq!(Fraction::new(1, 0), Err(NumericError::ZeroDenominator));
        assert_eq!(Fraction::new(0, 3), Err(NumericError::ZeroNumerator));
    }

    #[test]
    fn reduced_and_proper() {
        let half = Fraction::new(1, 2).unwrap();
        let two_quarters = Fraction::new(2, 4).unwrap();
        assert!(half.is_reduced());
        assert!(!two_quarters.is_reduced());
        assert!(half.is_proper());
        assert!(!Fraction::new(5, 3).unwrap().is_proper());
    }

    #[test]
    fn from_decimal_prefers_smallest_denominator() {
        // 0.5 is also 2/4, 3/6, ... within tolerance; 1/2 must win.
        assert_eq!(Fraction::from_decimal(0.5, 12), Fraction::new(1, 2).ok());
        assert_eq!(Fraction::from_decimal(2.0 / 3.0, 12), Fraction::new(2, 3).ok());
    }

    #[test]
    fn from_decimal_respects_bounds() {
        // 1/7 needs denominator 7.
        assert_eq!(Fraction::from_decimal(1.0 / 7.0, 5), None);
        assert_eq!(Fraction::from_decimal(1.0 / 7.0, 7), Fraction::new(1, 7).ok());
        // 11/12 is the largest allowed numerator.
        assert_eq!(Fraction::from_decimal(11.0 / 12.0, 12), Fraction::new(11, 12).ok());
        // Improper values are never reconstructed.
        assert_eq!(Fraction::from_decimal(3.5, 12), None);
        assert_eq!(Fraction::from_decimal(-0.5, 12), None);
        assert_eq!(Fraction::from_decimal(f64::NAN, 12), None);
    }

    #[test]
    fn parses_and_formats() {
        let f: Fraction = " 3 / 4 ".parse().unwrap();
        assert_eq!(f, Fraction::new(3, 4).unwrap());
        assert_eq!(f.to_string(), "3/4");
        assert!("3".parse::<Fraction>().is_err());
        assert!("a/4".parse::<Fraction>().is_err());
        assert_eq!("3/0".parse::<Fraction>(), Err(NumericError::ZeroDenominator));
    }
}
