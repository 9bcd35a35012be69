// ============================================================================
// Decimal Precision
// Process-wide rounding configuration, installed once at startup
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::RoundingStrategy;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of significant digits `rust_decimal` can carry.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 28;

static PRECISION: OnceLock<PrecisionConfig> = OnceLock::new();

/// Rounding rule applied after every arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// 0.5 rounds away from zero (commercial rounding)
    #[default]
    HalfUp,
    /// 0.5 rounds to the nearest even digit (banker's rounding)
    HalfEven,
    /// Truncate toward zero
    Down,
}

impl RoundingMode {
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Down => RoundingStrategy::ToZero,
        }
    }
}

/// Number of significant digits kept and how the rest is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionConfig {
    pub significant_digits: u32,
    pub rounding: RoundingMode,
}

impl PrecisionConfig {
    pub const fn new(significant_digits: u32, rounding: RoundingMode) -> Self {
        Self {
            significant_digits,
            rounding,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.significant_digits == 0 || self.significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self::new(20, RoundingMode::HalfUp)
    }
}

/// Install the process-wide precision.
///
/// Must happen before the first calculation that should observe it; the
/// setting cannot be changed afterwards.
///
/// # Errors
/// - `InvalidInput` if the digit count is outside `1..=28`
/// - `AlreadyConfigured` on every call after the first successful one
pub fn configure_precision(config: PrecisionConfig) -> NumericResult<()> {
    config.validate()?;
    PRECISION
        .set(config)
        .map_err(|_| NumericError::AlreadyConfigured)
}

/// The active precision, or the default when none was installed.
#[inline]
pub fn precision() -> PrecisionConfig {
    PRECISION.get().copied().unwrap_or_default()
}
