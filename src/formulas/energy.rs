// ============================================================================
// Energy Formulas
// ============================================================================

use crate::numeric::{Amount, Kwh, NumericResult, Percent};

/// Days per year used by the annual formulas.
pub const DAYS_PER_YEAR: Amount = Amount::from_raw_parts(365, 0);

/// Usable energy delivered per cycle.
///
/// `capacity × (chargeEff/100) × (dischargeEff/100) × (avgDischarge/100)`
pub fn effective_capacity_per_cycle(
    capacity_kwh: Kwh,
    charge_efficiency_pct: Percent,
    discharge_efficiency_pct: Percent,
    avg_discharge_pct: Percent,
) -> NumericResult<Kwh> {
    capacity_kwh
        .checked_mul(charge_efficiency_pct.percent_to_ratio()?)?
        .checked_mul(discharge_efficiency_pct.percent_to_ratio()?)?
        .checked_mul(avg_discharge_pct.percent_to_ratio()?)
}

/// Energy moved through the battery in a year.
///
/// `effective capacity × cycles per day × days per year`
pub fn annual_energy_throughput(
    effective_capacity_kwh: Kwh,
    cycles_per_day: Amount,
    days_per_year: Amount,
) -> NumericResult<Kwh> {
    effective_capacity_kwh
        .checked_mul(cycles_per_day)?
        .checked_mul(days_per_year)
}

/// Round-trip efficiency as a fraction: `(charge/100) × (discharge/100)`.
pub fn round_trip_efficiency(
    charge_efficiency_pct: Percent,
    discharge_efficiency_pct: Percent,
) -> NumericResult<Amount> {
    charge_efficiency_pct
        .percent_to_ratio()?
        .checked_mul(discharge_efficiency_pct.percent_to_ratio()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_effective_capacity_example() {
        // 15 × 0.95 × 0.97 × 0.85
        let effective =
            effective_capacity_per_cycle(amount("15"), amount("95"), amount("97"), amount("85"))
                .unwrap();
        assert_eq!(effective, amount("11.749125"));
        assert_eq!(effective.round_dp(2), amount("11.75"));
    }

    #[test]
    fn test_effective_capacity_full_efficiency_is_capacity() {
        let hundred = Amount::ONE_HUNDRED;
        let effective =
            effective_capacity_per_cycle(amount("10"), hundred, hundred, hundred).unwrap();
        assert_eq!(effective, amount("10"));
    }

    #[test]
    fn test_annual_energy_throughput() {
        let annual =
            annual_energy_throughput(amount("11.749125"), amount("1.5"), DAYS_PER_YEAR).unwrap();
        assert_eq!(annual, amount("6432.6459375"));

        let idle = annual_energy_throughput(amount("11.749125"), Amount::ZERO, DAYS_PER_YEAR)
            .unwrap();
        assert_eq!(idle, Amount::ZERO);
    }

    #[test]
    fn test_round_trip_efficiency() {
        assert_eq!(
            round_trip_efficiency(amount("95"), amount("97")).unwrap(),
            amount("0.9215")
        );
    }
}
