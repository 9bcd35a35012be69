// ============================================================================
// Calculation Results
// Full-precision results and the native-number view used for transport
// ============================================================================

use super::price::PriceZone;
use crate::constraints::{PeakShavingOutcome, WarrantyCheck};
use crate::numeric::{Amount, Currency, Kw, Kwh, NumericResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Grid Services
// ============================================================================

/// Guaranteed-income campaign figures for an eligible battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CampaignBreakdown {
    pub zone: PriceZone,
    pub monthly_rate: Currency,
    /// Monthly rate × 12, paid in years 1-3
    pub guaranteed_annual: Currency,
    /// Campaign length; paid in full even past a shorter horizon
    pub guaranteed_months: u32,
    pub guaranteed_total: Currency,
    pub post_campaign_rate_per_kw_year: Currency,
    pub post_campaign_annual: Currency,
    pub post_campaign_years: Amount,
    pub post_campaign_total: Currency,
}

/// Grid-services income over the projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridServicesProjection {
    /// What the customer receives in year one
    pub year_one_annual: Currency,
    pub total: Currency,
    pub annual_average: Currency,
    pub projection_years: u32,
    /// Present only when the campaign schedule applied
    pub campaign: Option<CampaignBreakdown>,
}

// ============================================================================
// Advisories
// ============================================================================

/// Informational findings that do not change the financial outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Advisory {
    /// The battery cannot discharge fast enough for the promised peak shaving
    PeakShavingConstrained {
        target_kw: Kw,
        actual_kw: Kw,
        message: String,
    },
    /// At this cycling rate the guaranteed cycles run out before the warranty years
    WarrantyPaceExceeded {
        years_at_current_cycles: Amount,
        warranty_years: Amount,
        message: String,
    },
    /// Annual savings are zero; payback is reported as the sentinel
    NeverPaysBack { message: String },
}

impl Advisory {
    pub fn message(&self) -> &str {
        match self {
            Advisory::PeakShavingConstrained { message, .. }
            | Advisory::WarrantyPaceExceeded { message, .. }
            | Advisory::NeverPaysBack { message } => message,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Complete results in full decimal precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationResultsDecimal {
    pub effective_capacity_kwh: Kwh,
    pub annual_energy_kwh: Kwh,
    pub spot_price_savings: Currency,
    pub effect_tariff_savings: Currency,
    /// Year-one grid-services income
    pub grid_services_income: Currency,
    pub total_annual_savings: Currency,
    pub total_inc_vat: Currency,
    pub cost_after_subsidy: Currency,
    pub margin: Option<Currency>,
    pub payback_years: Amount,
    pub roi_10_years: Amount,
    pub roi_15_years: Amount,
    pub projection_years: u32,
    pub annual_consumption_kwh: Option<Kwh>,
    pub peak_shaving: Option<PeakShavingOutcome>,
    pub grid_services: GridServicesProjection,
    pub warranty: Option<WarrantyCheck>,
    pub advisories: SmallVec<[Advisory; 2]>,
}

/// Results as native numbers, for JSON and display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationResults {
    pub effective_capacity_kwh: f64,
    pub annual_energy_kwh: f64,
    pub spot_price_savings: f64,
    pub effect_tariff_savings: f64,
    pub grid_services_income: f64,
    pub total_annual_savings: f64,
    pub total_inc_vat: f64,
    pub cost_after_subsidy: f64,
    pub margin: Option<f64>,
    pub payback_years: f64,
    pub roi_10_years: f64,
    pub roi_15_years: f64,
    pub projection_years: u32,
    pub annual_consumption_kwh: Option<f64>,
    pub target_peak_shaving_kw: Option<f64>,
    pub actual_peak_shaving_kw: Option<f64>,
    pub new_peak_kw: Option<f64>,
    pub peak_shaving_constrained: Option<bool>,
    pub guaranteed_grid_services_annual: Option<f64>,
    pub guaranteed_grid_services_total: Option<f64>,
    pub post_campaign_grid_services_total: Option<f64>,
    pub total_grid_services_income: f64,
    pub average_grid_services_income: f64,
    pub exceeds_warranty_pace: Option<bool>,
    pub messages: Vec<String>,
}

fn optional(value: Option<Amount>) -> NumericResult<Option<f64>> {
    value.map(Amount::to_f64).transpose()
}

impl CalculationResultsDecimal {
    /// Convert to native numbers. The only place floats appear.
    pub fn to_native(&self) -> NumericResult<CalculationResults> {
        let campaign = self.grid_services.campaign;

        Ok(CalculationResults {
            effective_capacity_kwh: self.effective_capacity_kwh.to_f64()?,
            annual_energy_kwh: self.annual_energy_kwh.to_f64()?,
            spot_price_savings: self.spot_price_savings.to_f64()?,
            effect_tariff_savings: self.effect_tariff_savings.to_f64()?,
            grid_services_income: self.grid_services_income.to_f64()?,
            total_annual_savings: self.total_annual_savings.to_f64()?,
            total_inc_vat: self.total_inc_vat.to_f64()?,
            cost_after_subsidy: self.cost_after_subsidy.to_f64()?,
            margin: optional(self.margin)?,
            payback_years: self.payback_years.to_f64()?,
            roi_10_years: self.roi_10_years.to_f64()?,
            roi_15_years: self.roi_15_years.to_f64()?,
            projection_years: self.projection_years,
            annual_consumption_kwh: optional(self.annual_consumption_kwh)?,
            target_peak_shaving_kw: optional(self.peak_shaving.as_ref().map(|p| p.target_kw))?,
            actual_peak_shaving_kw: optional(self.peak_shaving.as_ref().map(|p| p.actual_kw))?,
            new_peak_kw: optional(self.peak_shaving.as_ref().map(|p| p.new_peak_kw))?,
            peak_shaving_constrained: self.peak_shaving.as_ref().map(|p| p.is_constrained),
            guaranteed_grid_services_annual: optional(campaign.map(|c| c.guaranteed_annual))?,
            guaranteed_grid_services_total: optional(campaign.map(|c| c.guaranteed_total))?,
            post_campaign_grid_services_total: optional(
                campaign.map(|c| c.post_campaign_total),
            )?,
            total_grid_services_income: self.grid_services.total.to_f64()?,
            average_grid_services_income: self.grid_services.annual_average.to_f64()?,
            exceeds_warranty_pace: self.warranty.as_ref().map(|w| w.exceeds_warranty_pace),
            messages: self
                .advisories
                .iter()
                .map(|advisory| advisory.message().to_string())
                .collect(),
        })
    }
}

/// Output of one engine invocation: both views of the same numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoiOutcome {
    pub results: CalculationResults,
    pub decimals: CalculationResultsDecimal,
}

impl RoiOutcome {
    pub fn from_decimals(decimals: CalculationResultsDecimal) -> NumericResult<Self> {
        Ok(Self {
            results: decimals.to_native()?,
            decimals,
        })
    }

    /// Serialize the snapshot stored alongside a calculation.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> super::CalculationResult<String> {
        serde_json::to_string(self)
            .map_err(|err| super::CalculationError::Serialization(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    fn decimals() -> CalculationResultsDecimal {
        CalculationResultsDecimal {
            effective_capacity_kwh: amount("11.749125"),
            annual_energy_kwh: amount("6432.645937500"),
            spot_price_savings: amount("6570"),
            effect_tariff_savings: amount("3600"),
            grid_services_income: amount("2500"),
            total_annual_savings: amount("12670"),
            total_inc_vat: amount("150000"),
            cost_after_subsidy: amount("75000"),
            margin: None,
            payback_years: amount("5.9194948697711128650"),
            roi_10_years: amount("68.933333333333333333"),
            roi_15_years: amount("153.4"),
            projection_years: 10,
            annual_consumption_kwh: None,
            peak_shaving: None,
            grid_services: GridServicesProjection {
                year_one_annual: amount("2500"),
                total: amount("25000"),
                annual_average: amount("2500"),
                projection_years: 10,
                campaign: None,
            },
            warranty: None,
            advisories: SmallVec::new(),
        }
    }

    #[test]
    fn test_to_native() {
        let native = decimals().to_native().unwrap();
        assert_eq!(native.spot_price_savings, 6570.0);
        assert_eq!(native.cost_after_subsidy, 75000.0);
        assert!((native.payback_years - 5.919_494_869_771_113).abs() < 1e-9);
        assert_eq!(native.margin, None);
        assert_eq!(native.actual_peak_shaving_kw, None);
        assert_eq!(native.guaranteed_grid_services_annual, None);
        assert_eq!(native.total_grid_services_income, 25000.0);
        assert!(native.messages.is_empty());
    }

    #[test]
    fn test_advisory_messages_flattened() {
        let mut decimals = decimals();
        decimals.advisories.push(Advisory::NeverPaysBack {
            message: "never pays back".to_string(),
        });

        let outcome = RoiOutcome::from_decimals(decimals).unwrap();
        assert_eq!(outcome.results.messages, vec!["never pays back".to_string()]);
        assert_eq!(outcome.decimals.advisories.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_snapshot_restores_decimals() {
        let mut decimals = decimals();
        decimals.margin = Some(amount("45000"));
        decimals.advisories.push(Advisory::NeverPaysBack {
            message: "never pays back".to_string(),
        });
        let outcome = RoiOutcome::from_decimals(decimals.clone()).unwrap();

        let json = outcome.to_json().unwrap();
        let restored: RoiOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.decimals, decimals);
        assert_eq!(restored.results.messages, outcome.results.messages);
    }
}
