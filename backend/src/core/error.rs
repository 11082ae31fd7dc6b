//! Error taxonomy for the computational core
//!
//! Every operation in this crate is a pure function of its inputs, so the
//! only way one can fail is by being handed an out-of-domain number. There
//! are no transient failures and therefore no retries; callers either supply
//! valid input or get an immediate error. No default is ever substituted for
//! a rejected value.

use thiserror::Error;

/// Errors returned by the estimator, classifiers and geometry helpers
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    /// A numeric input was negative, non-finite, NaN or otherwise outside
    /// the domain of the operation.
    #[error("Invalid input for '{field}': {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        tracing::warn!(field, value, reason, "rejected input");
        CoreError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// Name of the offending input
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::InvalidInput { field, .. } => field,
        }
    }
}

/// Require `value` to be finite and `>= 0`.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(CoreError::invalid(field, value, "must be non-negative"));
    }
    Ok(value)
}

/// Require `value` to be finite and `> 0`.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(CoreError::invalid(field, value, "must be positive"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
        assert_eq!(require_non_negative("x", 3.5), Ok(3.5));
        assert!(require_non_negative("x", -0.01).is_err());
        assert!(require_non_negative("x", f64::NAN).is_err());
        assert!(require_non_negative("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("x", 40.0), Ok(40.0));
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -5.0).is_err());
        assert!(require_positive("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = require_positive("avg_speed_kmph", 0.0).unwrap_err();
        assert_eq!(err.field(), "avg_speed_kmph");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'avg_speed_kmph': 0 (must be positive)"
        );
    }
}
