use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for building or parsing numeric tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// A fraction was given a zero denominator.
    #[error("Fraction denominator must not be zero")]
    ZeroDenominator,

    /// A fraction was given a zero numerator.
    #[error("Fraction numerator must be positive")]
    ZeroNumerator,

    /// The text could not be read as an integer or a `numerator/denominator` pair.
    #[error("Cannot parse '{0}' as a number or fraction")]
    InvalidNumber(String),

    /// The text is not one of the supported operator symbols.
    #[error("Unknown operator symbol '{0}'")]
    UnknownOperator(String),
}
