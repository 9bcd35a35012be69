// ============================================================================
// Numeric Errors
// Error types for decimal arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the largest representable decimal
    Overflow,
    /// Result below the smallest representable decimal
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Rounding to the configured precision was not possible
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// The process-wide precision was already installed
    AlreadyConfigured,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value could not be rounded to the configured precision"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::AlreadyConfigured => {
                write!(f, "decimal precision has already been configured")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
