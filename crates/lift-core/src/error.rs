//! Input validation error shared by the planning crates.
//!
//! Validation failures abort the current phase only.  The caller is expected
//! to re-prompt for the offending value and carry on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("building must have at least 2 floors, got {0}")]
    TooFewFloors(u32),

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must be a positive finite number, got {value}")]
    NotPositiveNumber { field: &'static str, value: f64 },

    #[error("peak demand needs {required} elevators, more than a fleet can hold")]
    FleetTooLarge { required: f64 },

    #[error("{what} length {got} does not match elevator count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

/// Shorthand result type for validated inputs.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reject zero for an integer input.
pub fn positive_int(field: &'static str, value: u32) -> ValidationResult<u32> {
    if value == 0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

/// Reject zero, negative, NaN and infinite values for a real-valued input.
pub fn positive_number(field: &'static str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositiveNumber { field, value });
    }
    Ok(value)
}
