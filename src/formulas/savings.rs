// ============================================================================
// Savings Formulas
// Spot-price arbitrage, effect tariff and grid services
// ============================================================================

use crate::numeric::{Amount, Currency, Kw, Kwh, NumericResult, Ore};

/// öre per krona.
pub const ORE_PER_CURRENCY: Amount = Amount::from_raw_parts(100, 0);

/// Effect tariffs are billed monthly.
pub const MONTHS_PER_YEAR: Amount = Amount::from_raw_parts(12, 0);

/// Yearly savings from charging at night and discharging during the day.
///
/// `spread × efficiency × cycles × capacity × days / 100`, the division
/// converting öre to kronor.
///
/// # Example
/// ```
/// use battery_roi::formulas::spot_price_savings;
/// use battery_roi::numeric::Amount;
///
/// let savings = spot_price_savings(
///     Amount::from_integer(15),
///     "1.5".parse().unwrap(),
///     "0.8".parse().unwrap(),
///     Amount::from_integer(100),
///     Amount::from_integer(365),
/// )
/// .unwrap();
/// assert_eq!(savings, Amount::from_integer(6570));
/// ```
pub fn spot_price_savings(
    capacity_kwh: Kwh,
    cycles_per_day: Amount,
    round_trip_efficiency: Amount,
    spread_ore: Ore,
    days_per_year: Amount,
) -> NumericResult<Currency> {
    spread_ore
        .checked_mul(round_trip_efficiency)?
        .checked_mul(cycles_per_day)?
        .checked_mul(capacity_kwh)?
        .checked_mul(days_per_year)?
        .checked_div(ORE_PER_CURRENCY)
}

/// Yearly effect-tariff savings: `shaved kW × day rate × 12`.
///
/// Takes the kW the battery can actually deliver, not the requested target.
pub fn effect_tariff_savings(actual_shaved_kw: Kw, day_rate_per_kw: Currency) -> NumericResult<Currency> {
    actual_shaved_kw
        .checked_mul(day_rate_per_kw)?
        .checked_mul(MONTHS_PER_YEAR)
}

/// Flat grid-services income: `max discharge kW × rate per kW per year`.
pub fn flat_grid_services_income(
    max_discharge_kw: Kw,
    rate_per_kw_year: Currency,
) -> NumericResult<Currency> {
    max_discharge_kw.checked_mul(rate_per_kw_year)
}

/// Sum of the three savings streams.
pub fn total_annual_savings(
    spot_price_savings: Currency,
    effect_tariff_savings: Currency,
    grid_services_income: Currency,
) -> NumericResult<Currency> {
    spot_price_savings
        .checked_add(effect_tariff_savings)?
        .checked_add(grid_services_income)
}
