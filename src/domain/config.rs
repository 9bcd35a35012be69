// ============================================================================
// Engine Configuration
// Assumptions and reference tables used by the ROI pipeline
// ============================================================================

use super::consumption::DaysPerMonth;
use super::errors::{CalculationError, CalculationResult};
use super::zone_rates::ZoneRateTable;
use crate::numeric::{Amount, Currency, Ore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Spot Price Assumptions
// ============================================================================

/// Where the day/night price spread for arbitrage savings comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpreadSource {
    /// A flat assumed spread in öre/kWh
    /// - Transparent to the customer: one number explains the savings
    Fixed(Ore),

    /// Day price minus night price from the calculation inputs, floored at zero
    Observed,
}

/// Round-trip efficiency used for arbitrage savings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EfficiencySource {
    /// A flat assumed efficiency as a fraction (0-1)
    Fixed(Amount),

    /// Charge efficiency × discharge efficiency of the battery
    Battery,
}

// ============================================================================
// Campaign Configuration
// ============================================================================

/// Guaranteed grid-services income campaign
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CampaignConfig {
    /// Length of the guaranteed period
    pub campaign_months: u32,

    /// Guaranteed monthly income per zone
    pub zone_rates: ZoneRateTable,

    /// Optional: income per kW of discharge power per year after the campaign
    /// None means the calculation input's grid-services rate is used
    pub post_campaign_rate_per_kw_year: Option<Currency>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            campaign_months: 36,
            zone_rates: ZoneRateTable::default(),
            post_campaign_rate_per_kw_year: None,
        }
    }
}

// ============================================================================
// Complete Engine Configuration
// ============================================================================

/// Comprehensive configuration for the ROI engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Days per year used for annual energy and arbitrage savings
    pub days_per_year: Amount,

    /// Price spread for arbitrage savings
    pub spot_spread: SpreadSource,

    /// Round-trip efficiency for arbitrage savings
    pub round_trip_efficiency: EfficiencySource,

    /// Days-per-month convention for consumption profiles
    pub consumption_days: DaysPerMonth,

    /// Projection horizon when the inputs do not set one
    pub default_projection_years: u32,

    /// Payback reported when the installation never pays back
    pub payback_sentinel: Amount,

    /// Reject invalid inputs before calculating
    pub validate_inputs: bool,

    /// Guaranteed-income campaign settings
    pub campaign: CampaignConfig,
}

impl EngineConfig {
    /// Create a configuration with the sales defaults
    pub fn new() -> Self {
        Self {
            days_per_year: Amount::from_integer(365),
            spot_spread: SpreadSource::Fixed(Amount::from_integer(100)),
            round_trip_efficiency: EfficiencySource::Fixed(Amount::from_raw_parts(8, 1)),
            consumption_days: DaysPerMonth::Average,
            default_projection_years: 10,
            payback_sentinel: Amount::from_integer(999),
            validate_inputs: true,
            campaign: CampaignConfig::default(),
        }
    }

    /// Builder method: Set the spread source
    pub fn with_spot_spread(mut self, spread: SpreadSource) -> Self {
        self.spot_spread = spread;
        self
    }

    /// Builder method: Set the efficiency source
    pub fn with_round_trip_efficiency(mut self, efficiency: EfficiencySource) -> Self {
        self.round_trip_efficiency = efficiency;
        self
    }

    /// Builder method: Set days per year
    pub fn with_days_per_year(mut self, days: Amount) -> Self {
        self.days_per_year = days;
        self
    }

    /// Builder method: Set the consumption days-per-month convention
    pub fn with_consumption_days(mut self, days: DaysPerMonth) -> Self {
        self.consumption_days = days;
        self
    }

    /// Builder method: Set the default projection horizon
    pub fn with_default_projection_years(mut self, years: u32) -> Self {
        self.default_projection_years = years;
        self
    }

    /// Builder method: Set the never-pays-back sentinel
    pub fn with_payback_sentinel(mut self, sentinel: Amount) -> Self {
        self.payback_sentinel = sentinel;
        self
    }

    /// Builder method: Enable or disable input validation
    pub fn with_input_validation(mut self, enabled: bool) -> Self {
        self.validate_inputs = enabled;
        self
    }

    /// Builder method: Replace the campaign settings
    pub fn with_campaign(mut self, campaign: CampaignConfig) -> Self {
        self.campaign = campaign;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalculationResult<()> {
        if !self.days_per_year.is_positive() {
            return Err(CalculationError::InvalidConfig(
                "Days per year must be positive".to_string(),
            ));
        }

        if let SpreadSource::Fixed(spread) = self.spot_spread {
            if spread.is_negative() {
                return Err(CalculationError::InvalidConfig(
                    "Fixed spread cannot be negative".to_string(),
                ));
            }
        }

        if let EfficiencySource::Fixed(efficiency) = self.round_trip_efficiency {
            if efficiency.is_negative() || efficiency > Amount::ONE {
                return Err(CalculationError::InvalidConfig(
                    "Fixed round-trip efficiency must be between 0 and 1".to_string(),
                ));
            }
        }

        if self.default_projection_years == 0 {
            return Err(CalculationError::InvalidConfig(
                "Default projection years must be at least 1".to_string(),
            ));
        }

        if !self.payback_sentinel.is_positive() {
            return Err(CalculationError::InvalidConfig(
                "Payback sentinel must be positive".to_string(),
            ));
        }

        if let Some(rate) = self.campaign.post_campaign_rate_per_kw_year {
            if rate.is_negative() {
                return Err(CalculationError::InvalidConfig(
                    "Post-campaign rate cannot be negative".to_string(),
                ));
            }
        }

        if self.campaign.zone_rates.iter().any(|(_, rate)| rate.is_negative()) {
            return Err(CalculationError::InvalidConfig(
                "Zone rates cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Sales-facing configuration
    /// - Flat 100 öre spread, 80% round-trip efficiency
    /// - Easy for a customer to follow by hand
    pub fn sales_transparent() -> Self {
        Self::new()
    }

    /// Market-data configuration
    /// - Spread from the quarter's day/night prices
    /// - Efficiency from the battery's catalog data
    pub fn observed_market() -> Self {
        Self::new()
            .with_spot_spread(SpreadSource::Observed)
            .with_round_trip_efficiency(EfficiencySource::Battery)
    }
}
