// error module
mod error;
// fraction module
mod fraction;
// operator module
mod operator;
// value module
mod value;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports for board numbers and operators.
//─────────────────────────────────────────────────────────────────────────────
pub use error::NumericError;
pub use fraction::{Fraction, FRACTION_TOLERANCE, MAX_NUMERATOR, MIN_DENOMINATOR};
pub use operator::Operator;
pub use value::{integer_from_decimal, NumericValue};
