// ============================================================================
// Grid Tariff
// Monthly effect (power) tariff and the hours it treats as "day"
// ============================================================================

use super::errors::{ensure_non_negative, CalculationError, CalculationResult};
use crate::numeric::Currency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid operator's effect tariff.
///
/// Rates are per kW of monthly peak. The day window is `[day_start_hour,
/// day_end_hour)`; a start after the end wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TariffInfo {
    pub day_rate_per_kw: Currency,
    pub night_rate_per_kw: Currency,
    pub day_start_hour: u8,
    pub day_end_hour: u8,
}

impl TariffInfo {
    pub fn new(
        day_rate_per_kw: Currency,
        night_rate_per_kw: Currency,
        day_start_hour: u8,
        day_end_hour: u8,
    ) -> Self {
        Self {
            day_rate_per_kw,
            night_rate_per_kw,
            day_start_hour,
            day_end_hour,
        }
    }

    /// Builder method: Set the day window
    pub fn with_day_window(mut self, start_hour: u8, end_hour: u8) -> Self {
        self.day_start_hour = start_hour;
        self.day_end_hour = end_hour;
        self
    }

    /// Whether `hour` (0-23) falls in the day window.
    pub fn is_day_hour(&self, hour: u8) -> bool {
        if self.day_start_hour <= self.day_end_hour {
            hour >= self.day_start_hour && hour < self.day_end_hour
        } else {
            hour >= self.day_start_hour || hour < self.day_end_hour
        }
    }

    /// Number of hours per day counted as "day".
    pub fn day_hours(&self) -> u8 {
        (0..24).filter(|hour| self.is_day_hour(*hour)).count() as u8
    }

    /// Validate the tariff
    pub fn validate(&self) -> CalculationResult<()> {
        ensure_non_negative("tariff.day_rate_per_kw", self.day_rate_per_kw)?;
        ensure_non_negative("tariff.night_rate_per_kw", self.night_rate_per_kw)?;

        if self.day_start_hour > 23 {
            return Err(CalculationError::invalid_input(
                "tariff.day_start_hour",
                format!("must be 0-23, got {}", self.day_start_hour),
            ));
        }
        if self.day_end_hour > 24 {
            return Err(CalculationError::invalid_input(
                "tariff.day_end_hour",
                format!("must be 0-24, got {}", self.day_end_hour),
            ));
        }

        Ok(())
    }
}

impl Default for TariffInfo {
    /// No effect tariff, day window 06-22.
    fn default() -> Self {
        Self::new(Currency::ZERO, Currency::ZERO, 6, 22)
    }
}
