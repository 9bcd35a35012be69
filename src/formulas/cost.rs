// ============================================================================
// Cost Formulas
// ============================================================================

use crate::numeric::{Amount, Currency, NumericResult};

/// `(price + installation) × (1 + VAT)`
pub fn total_cost_inc_vat(
    price_ex_vat: Currency,
    installation_cost: Currency,
    vat_rate: Amount,
) -> NumericResult<Currency> {
    price_ex_vat
        .checked_add(installation_cost)?
        .checked_mul(Amount::ONE.checked_add(vat_rate)?)
}

/// `total × (1 − subsidy rate)`
pub fn cost_after_subsidy(total_inc_vat: Currency, subsidy_rate: Amount) -> NumericResult<Currency> {
    total_inc_vat.checked_mul(Amount::ONE.checked_sub(subsidy_rate)?)
}

/// Installer margin: `sale price − battery cost − fixed cut`. May be negative.
pub fn margin(
    sale_price_ex_vat: Currency,
    cost_price: Currency,
    installer_cut: Currency,
) -> NumericResult<Currency> {
    sale_price_ex_vat
        .checked_sub(cost_price)?
        .checked_sub(installer_cut)
}
