// ============================================================================
// ROI Engine Factory
// Creates engines and revenue schedules from configuration
// ============================================================================

use crate::domain::{
    CalculationInputs, CalculationResult, CampaignConfig, DaysPerMonth, EfficiencySource,
    EngineConfig, SpreadSource, ZoneRateTable,
};
use crate::engine::{FlatRateSchedule, RoiEngine, ZoneCampaignSchedule};
use crate::interfaces::{EventHandler, RevenueSchedule};
use crate::numeric::{Amount, Currency, Ore};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an ROI engine from configuration
///
/// # Arguments
/// * `config` - Engine configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Example
/// ```
/// use battery_roi::prelude::*;
/// use battery_roi::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = EngineConfig::observed_market();
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.config().spot_spread, SpreadSource::Observed);
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CalculationResult<RoiEngine> {
    RoiEngine::new(config, event_handler)
}

/// Selects the grid-services schedule for one calculation
///
/// The campaign applies when the battery is eligible and its zone has a
/// campaign rate; everything else earns the flat rate. The post-campaign rate
/// is the configured override or the inputs' flat rate.
pub fn create_revenue_schedule(
    inputs: &CalculationInputs,
    campaign: &CampaignConfig,
) -> Box<dyn RevenueSchedule> {
    let flat_rate = inputs.grid_services_rate_per_kw_year;

    if !inputs.zone_campaign_eligible {
        return Box::new(FlatRateSchedule::new(flat_rate));
    }

    let campaign_rate = inputs
        .price_zone
        .and_then(|zone| campaign.zone_rates.monthly_rate(zone).map(|rate| (zone, rate)));

    match campaign_rate {
        Some((zone, monthly_rate)) => Box::new(ZoneCampaignSchedule::new(
            zone,
            monthly_rate,
            campaign.campaign_months,
            campaign.post_campaign_rate_per_kw_year.unwrap_or(flat_rate),
        )),
        None => {
            tracing::debug!(
                zone = ?inputs.price_zone,
                "Campaign-eligible battery outside campaign zones, using flat rate"
            );
            Box::new(FlatRateSchedule::new(flat_rate))
        },
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating ROI engines with fluent API
///
/// # Example
/// ```
/// use battery_roi::prelude::*;
/// use battery_roi::engine::factory::RoiEngineBuilder;
/// use std::sync::Arc;
///
/// let engine = RoiEngineBuilder::new()
///     .fixed_spread(Amount::from_integer(120))
///     .battery_efficiency()
///     .with_projection_years(15)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(engine.config().default_projection_years, 15);
/// ```
pub struct RoiEngineBuilder {
    config: EngineConfig,
}

impl RoiEngineBuilder {
    /// Create a new builder with the sales defaults
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
        }
    }

    // ========================================================================
    // Arbitrage Assumptions
    // ========================================================================

    /// Use a flat spread in öre/kWh
    pub fn fixed_spread(mut self, spread_ore: Ore) -> Self {
        self.config.spot_spread = SpreadSource::Fixed(spread_ore);
        self
    }

    /// Use day price minus night price from the inputs
    pub fn observed_spread(mut self) -> Self {
        self.config.spot_spread = SpreadSource::Observed;
        self
    }

    /// Use a flat round-trip efficiency (fraction)
    pub fn fixed_efficiency(mut self, efficiency: Amount) -> Self {
        self.config.round_trip_efficiency = EfficiencySource::Fixed(efficiency);
        self
    }

    /// Use the battery's charge × discharge efficiency
    pub fn battery_efficiency(mut self) -> Self {
        self.config.round_trip_efficiency = EfficiencySource::Battery;
        self
    }

    // ========================================================================
    // Campaign Configuration
    // ========================================================================

    /// Set the campaign length
    pub fn with_campaign_months(mut self, months: u32) -> Self {
        self.config.campaign.campaign_months = months;
        self
    }

    /// Replace the zone rate table
    pub fn with_zone_rates(mut self, zone_rates: ZoneRateTable) -> Self {
        self.config.campaign.zone_rates = zone_rates;
        self
    }

    /// Override the post-campaign rate
    pub fn with_post_campaign_rate(mut self, rate_per_kw_year: Currency) -> Self {
        self.config.campaign.post_campaign_rate_per_kw_year = Some(rate_per_kw_year);
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set days per year
    pub fn with_days_per_year(mut self, days: Amount) -> Self {
        self.config.days_per_year = days;
        self
    }

    /// Set the consumption days-per-month convention
    pub fn with_consumption_days(mut self, days: DaysPerMonth) -> Self {
        self.config.consumption_days = days;
        self
    }

    /// Set the default projection horizon
    pub fn with_projection_years(mut self, years: u32) -> Self {
        self.config.default_projection_years = years;
        self
    }

    /// Set the never-pays-back sentinel
    pub fn with_payback_sentinel(mut self, sentinel: Amount) -> Self {
        self.config.payback_sentinel = sentinel;
        self
    }

    /// Skip input validation
    pub fn without_input_validation(mut self) -> Self {
        self.config.validate_inputs = false;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the sales-facing configuration
    pub fn sales_transparent() -> Self {
        Self {
            config: EngineConfig::sales_transparent(),
        }
    }

    /// Apply the market-data configuration
    pub fn observed_market() -> Self {
        Self {
            config: EngineConfig::observed_market(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the ROI engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> CalculationResult<RoiEngine> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for RoiEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
