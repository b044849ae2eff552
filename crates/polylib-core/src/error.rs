//! Error types for the PolyLib library.
//!
//! A single error enum covers every failure the complex and polynomial
//! layers can report. Numerical non-convergence is not an error:
//! the root finder returns its best effort instead of failing.

use thiserror::Error;

/// A specialized Result type for PolyLib operations.
pub type PolyResult<T> = Result<T, PolyError>;

/// Errors that can occur during complex and polynomial operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolyError {
    /// The requested capability exists in the API surface but is not implemented.
    #[error("Not supported: {feature}")]
    NotSupported {
        /// The unsupported capability.
        feature: String,
    },

    /// Division by an exact zero divisor.
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// The operation that attempted the division.
        context: String,
    },

    /// Invalid argument passed to an operation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the invalid argument.
        reason: String,
    },
}

impl PolyError {
    /// Creates a not supported error.
    #[must_use]
    pub fn not_supported(feature: impl Into<String>) -> Self {
        Self::NotSupported {
            feature: feature.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a division by zero error.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolyError::division_by_zero("complex division");
        assert_eq!(err.to_string(), "Division by zero in complex division");

        let err = PolyError::invalid_argument("dimension must be at least 1");
        assert!(err.to_string().contains("dimension"));

        let err = PolyError::not_supported("string parsing");
        assert!(err.to_string().starts_with("Not supported"));
    }

    #[test]
    fn test_is_division_by_zero() {
        assert!(PolyError::division_by_zero("x").is_division_by_zero());
        assert!(!PolyError::invalid_argument("x").is_division_by_zero());
    }
}
