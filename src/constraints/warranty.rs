// ============================================================================
// Warranty Pace Check
// Advisory only: never changes the financial outcome
// ============================================================================

use crate::formulas::DAYS_PER_YEAR;
use crate::numeric::{Amount, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the cycling rate exhausts the guaranteed cycles early.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WarrantyCheck {
    pub cycles_per_day: Amount,
    pub warranty_years: Amount,
    pub guaranteed_cycles: Amount,
    /// `guaranteed cycles / (cycles per day × 365)`; None when the battery
    /// does not cycle
    pub years_at_current_cycles: Option<Amount>,
    pub exceeds_warranty_pace: bool,
    pub message: Option<String>,
}

/// Compare cycle life at the planned cycling rate with the warranty years.
pub fn check_warranty_pace(
    cycles_per_day: Amount,
    warranty_years: Amount,
    guaranteed_cycles: Amount,
) -> NumericResult<WarrantyCheck> {
    let cycles_per_year = cycles_per_day.checked_mul(DAYS_PER_YEAR)?;
    let years_at_current_cycles = if cycles_per_year.is_positive() {
        Some(guaranteed_cycles.checked_div(cycles_per_year)?)
    } else {
        None
    };

    let exceeds_warranty_pace = years_at_current_cycles.is_some_and(|years| years < warranty_years);

    let message = match years_at_current_cycles {
        Some(years) if exceeds_warranty_pace => Some(format!(
            "At {} cycles per day the {} guaranteed cycles last {} years, less than the {}-year warranty",
            cycles_per_day,
            guaranteed_cycles,
            years.round_dp(1),
            warranty_years
        )),
        _ => None,
    };

    Ok(WarrantyCheck {
        cycles_per_day,
        warranty_years,
        guaranteed_cycles,
        years_at_current_cycles,
        exceeds_warranty_pace,
        message,
    })
}
