// validator module
mod validator;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the validator module.
//─────────────────────────────────────────────────────────────────────────────
pub use validator::{
    validate_path, CalculationStep, StepFault, ValidationRequest, ValidationResult,
};
