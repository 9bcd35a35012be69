// ============================================================================
// Flat Grid-Services Schedule
// Same income every year: max discharge kW × rate
// ============================================================================

use crate::domain::GridServicesProjection;
use crate::formulas::flat_grid_services_income;
use crate::interfaces::RevenueSchedule;
use crate::numeric::{Amount, Currency, Kw, NumericResult};

/// Flat grid-services income, used for batteries outside the campaign
///
/// # Example
/// ```text
/// 5 kW × 500 kr/kW/yr = 2500 kr every year
/// 10 years: total 25000, average 2500
/// ```
pub struct FlatRateSchedule {
    /// Income per kW of discharge power per year
    pub rate_per_kw_year: Currency,
}

impl FlatRateSchedule {
    pub fn new(rate_per_kw_year: Currency) -> Self {
        Self { rate_per_kw_year }
    }
}

impl RevenueSchedule for FlatRateSchedule {
    fn project(&self, max_discharge_kw: Kw, projection_years: u32) -> NumericResult<GridServicesProjection> {
        let annual = flat_grid_services_income(max_discharge_kw, self.rate_per_kw_year)?;
        let total = annual.checked_mul(Amount::from(projection_years))?;

        Ok(GridServicesProjection {
            year_one_annual: annual,
            total,
            annual_average: annual,
            projection_years,
            campaign: None,
        })
    }

    fn name(&self) -> &str {
        "Flat-Rate"
    }
}
