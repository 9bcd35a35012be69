// ============================================================================
// Calculation Errors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors returned by input validation and the ROI engine.
///
/// Degenerate but valid inputs (zero savings, zero net cost) are never
/// errors; they produce sentinel values in the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// An input field is outside its documented domain
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// The engine configuration is inconsistent
    InvalidConfig(String),
    /// Decimal arithmetic failed (overflow, precision)
    Numeric(NumericError),
    /// Results could not be serialized for transport
    Serialization(String),
}

impl CalculationError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CalculationError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::InvalidInput { field, reason } => {
                write!(f, "invalid input `{}`: {}", field, reason)
            },
            CalculationError::InvalidConfig(reason) => {
                write!(f, "invalid engine configuration: {}", reason)
            },
            CalculationError::Numeric(err) => write!(f, "numeric error: {}", err),
            CalculationError::Serialization(reason) => {
                write!(f, "serialization failed: {}", reason)
            },
        }
    }
}

impl std::error::Error for CalculationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculationError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CalculationError {
    fn from(err: NumericError) -> Self {
        CalculationError::Numeric(err)
    }
}

/// Result type alias for engine operations
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Reject values below zero.
pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: crate::numeric::Amount,
) -> CalculationResult<()> {
    if value.is_negative() {
        return Err(CalculationError::invalid_input(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Reject values that are zero or below.
pub(crate) fn ensure_positive(
    field: &'static str,
    value: crate::numeric::Amount,
) -> CalculationResult<()> {
    if !value.is_positive() {
        return Err(CalculationError::invalid_input(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Reject values outside `[0, upper]`.
pub(crate) fn ensure_within(
    field: &'static str,
    value: crate::numeric::Amount,
    upper: crate::numeric::Amount,
) -> CalculationResult<()> {
    if value.is_negative() || value > upper {
        return Err(CalculationError::invalid_input(
            field,
            format!("must be between 0 and {}, got {}", upper, value),
        ));
    }
    Ok(())
}
