// ============================================================================
// Return Formulas
// Payback period and ROI
// ============================================================================

use crate::numeric::{Amount, Currency, NumericResult};

/// Payback reported when savings never cover the cost.
pub const PAYBACK_NEVER: Amount = Amount::from_raw_parts(999, 0);

/// Years until savings cover the net cost: `net cost ÷ annual savings`.
///
/// Zero (or negative) annual savings return [`PAYBACK_NEVER`] instead of
/// dividing by zero.
pub fn payback_period(net_cost: Currency, annual_savings: Currency) -> NumericResult<Amount> {
    payback_period_with_sentinel(net_cost, annual_savings, PAYBACK_NEVER)
}

/// [`payback_period`] with a caller-chosen sentinel.
pub fn payback_period_with_sentinel(
    net_cost: Currency,
    annual_savings: Currency,
    sentinel: Amount,
) -> NumericResult<Amount> {
    if !annual_savings.is_positive() {
        return Ok(sentinel);
    }
    net_cost.checked_div(annual_savings)
}

/// Return on investment over `years`, in percent.
///
/// `((annual savings × years) − net cost) / net cost × 100`; zero net cost
/// returns 0%.
pub fn roi_percent(net_cost: Currency, annual_savings: Currency, years: u32) -> NumericResult<Amount> {
    if net_cost.is_zero() {
        return Ok(Amount::ZERO);
    }
    annual_savings
        .checked_mul(Amount::from(years))?
        .checked_sub(net_cost)?
        .checked_div(net_cost)?
        .checked_mul(Amount::ONE_HUNDRED)
}
