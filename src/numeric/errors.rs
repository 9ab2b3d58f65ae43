// ============================================================================
// Numeric Errors
// Error types for decimal construction and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining decimal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not a decimal literal
    Parse { input: String },
    /// Attempted division by zero
    DivisionByZero,
    /// NaN or infinite float where a finite value is required
    NonFinite,
    /// Square root of a negative value
    NegativeRoot,
    /// Value does not fit the requested target type
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Parse { input } => {
                write!(f, "invalid input: {:?} is not a decimal number", input)
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NonFinite => {
                write!(f, "non-finite float: NaN and infinity have no decimal value")
            },
            NumericError::NegativeRoot => write!(f, "square root of a negative value"),
            NumericError::OutOfRange => write!(f, "value out of range for the target type"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::Parse {
                input: "abc".to_string()
            }
            .to_string(),
            "invalid input: \"abc\" is not a decimal number"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::NonFinite, NumericError::NonFinite);
        assert_ne!(NumericError::NonFinite, NumericError::NegativeRoot);
    }
}
