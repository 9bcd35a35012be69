// ============================================================================
// Zone Campaign Schedule
// Guaranteed monthly income per zone, then a per-kW rate
// ============================================================================

use crate::domain::{CampaignBreakdown, GridServicesProjection, PriceZone};
use crate::formulas::MONTHS_PER_YEAR;
use crate::interfaces::RevenueSchedule;
use crate::numeric::{Amount, Currency, Kw, NumericResult};

/// Grid-services income for batteries in a guaranteed-income campaign
///
/// The campaign pays a fixed monthly amount per zone for its duration.
/// Remaining years of the projection earn the post-campaign rate per kW of
/// discharge power.
///
/// # Example
/// ```text
/// SE4: 1370 kr/month, 36 months, 5 kW, 500 kr/kW/yr after, 10 years
///   years 1-3:  1370 × 12       = 16440 kr/yr
///   guaranteed: 1370 × 36       = 49320 kr
///   years 4-10: 5 × 500 × 7     = 17500 kr
///   total:                        66820 kr, average 6682 kr/yr
/// ```
pub struct ZoneCampaignSchedule {
    pub zone: PriceZone,
    /// Guaranteed income per month
    pub monthly_rate: Currency,
    /// Campaign length
    pub campaign_months: u32,
    /// Income per kW of discharge power per year after the campaign
    pub post_campaign_rate_per_kw_year: Currency,
}

impl ZoneCampaignSchedule {
    pub fn new(
        zone: PriceZone,
        monthly_rate: Currency,
        campaign_months: u32,
        post_campaign_rate_per_kw_year: Currency,
    ) -> Self {
        Self {
            zone,
            monthly_rate,
            campaign_months,
            post_campaign_rate_per_kw_year,
        }
    }

    /// Guaranteed income for one campaign year.
    pub fn guaranteed_annual(&self) -> NumericResult<Currency> {
        self.monthly_rate.checked_mul(MONTHS_PER_YEAR)
    }
}

impl RevenueSchedule for ZoneCampaignSchedule {
    fn project(&self, max_discharge_kw: Kw, projection_years: u32) -> NumericResult<GridServicesProjection> {
        let horizon_months = projection_years.saturating_mul(12);
        let post_campaign_months = horizon_months.saturating_sub(self.campaign_months);

        let guaranteed_annual = self.guaranteed_annual()?;
        let guaranteed_total = self.monthly_rate.checked_mul(Amount::from(self.campaign_months))?;

        let post_campaign_years = Amount::from(post_campaign_months).checked_div(MONTHS_PER_YEAR)?;
        let post_campaign_annual = max_discharge_kw.checked_mul(self.post_campaign_rate_per_kw_year)?;
        let post_campaign_total = post_campaign_annual.checked_mul(post_campaign_years)?;

        let total = guaranteed_total.checked_add(post_campaign_total)?;
        let annual_average = total.checked_div(Amount::from(projection_years))?;

        Ok(GridServicesProjection {
            year_one_annual: guaranteed_annual,
            total,
            annual_average,
            projection_years,
            campaign: Some(CampaignBreakdown {
                zone: self.zone,
                monthly_rate: self.monthly_rate,
                guaranteed_annual,
                guaranteed_months: self.campaign_months,
                guaranteed_total,
                post_campaign_rate_per_kw_year: self.post_campaign_rate_per_kw_year,
                post_campaign_annual,
                post_campaign_years,
                post_campaign_total,
            }),
        })
    }

    fn name(&self) -> &str {
        "Zone-Campaign"
    }
}
