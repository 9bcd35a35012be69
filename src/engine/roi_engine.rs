// ============================================================================
// ROI Engine
// Runs the calculation pipeline over one set of inputs
// ============================================================================

use crate::constraints::{check_warranty_pace, constrain_peak_shaving, PeakShavingOutcome, WarrantyCheck};
use crate::domain::{
    Advisory, BatterySpec, CalculationInputs, CalculationResult, CalculationResultsDecimal,
    EfficiencySource, EngineConfig, RoiOutcome, SpreadSource,
};
use crate::engine::factory::create_revenue_schedule;
use crate::formulas;
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler, Stage};
use crate::numeric::{Amount, Currency, Kw, NumericResult, Ore};
use smallvec::SmallVec;
use std::sync::Arc;

/// Stateless ROI engine
///
/// Holds only configuration and an event handler, so one engine can serve
/// concurrent calculations from several threads.
pub struct RoiEngine {
    /// Assumptions and reference tables
    config: EngineConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl RoiEngine {
    /// Create a new ROI engine
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(
        config: EngineConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> CalculationResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            event_handler,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline and return both views of the results
    pub fn calculate(&self, inputs: &CalculationInputs) -> CalculationResult<RoiOutcome> {
        let decimals = self.calculate_decimal(inputs)?;
        Ok(RoiOutcome::from_decimals(decimals)?)
    }

    /// Run the full pipeline in decimal precision
    ///
    /// Stage order matters: peak shaving is clamped before the effect tariff
    /// uses it, and the revenue schedule is chosen before the annual total.
    pub fn calculate_decimal(
        &self,
        inputs: &CalculationInputs,
    ) -> CalculationResult<CalculationResultsDecimal> {
        if self.config.validate_inputs {
            inputs.validate()?;
        }

        let projection_years = inputs
            .projection_years
            .unwrap_or(self.config.default_projection_years);
        let battery = &inputs.battery;

        let mut events = Vec::new();
        events.push(CalculationEvent::CalculationStarted { projection_years });

        // Stage 1: energy
        let effective_capacity_kwh = formulas::effective_capacity_per_cycle(
            battery.capacity_kwh,
            battery.charge_efficiency_pct,
            battery.discharge_efficiency_pct,
            inputs.avg_discharge_percent,
        )?;
        stage(&mut events, Stage::EffectiveCapacity, effective_capacity_kwh);

        let annual_energy_kwh = formulas::annual_energy_throughput(
            effective_capacity_kwh,
            inputs.cycles_per_day,
            self.config.days_per_year,
        )?;
        stage(&mut events, Stage::AnnualEnergy, annual_energy_kwh);

        // Stage 2: arbitrage
        let spot_price_savings = formulas::spot_price_savings(
            battery.capacity_kwh,
            inputs.cycles_per_day,
            self.efficiency(battery)?,
            self.spread(inputs)?,
            self.config.days_per_year,
        )?;
        stage(&mut events, Stage::SpotPriceSavings, spot_price_savings);

        // Stage 3: peak shaving, then the effect tariff on the clamped kW
        let peak_shaving = self.peak_shaving(inputs)?;
        let effect_tariff_savings = match &peak_shaving {
            Some(outcome) => {
                stage(&mut events, Stage::PeakShaving, outcome.actual_kw);
                if outcome.is_constrained {
                    events.push(CalculationEvent::PeakShavingConstrained {
                        target_kw: outcome.target_kw,
                        actual_kw: outcome.actual_kw,
                    });
                }
                formulas::effect_tariff_savings(outcome.actual_kw, inputs.tariff.day_rate_per_kw)?
            },
            None => Currency::ZERO,
        };
        stage(&mut events, Stage::EffectTariffSavings, effect_tariff_savings);

        // Stage 4: grid services
        let schedule = create_revenue_schedule(inputs, &self.config.campaign);
        events.push(CalculationEvent::ScheduleSelected {
            schedule: schedule.name().to_string(),
        });
        let grid_services = schedule.project(battery.max_discharge_kw, projection_years)?;
        let grid_services_income = grid_services.year_one_annual;
        stage(&mut events, Stage::GridServices, grid_services_income);

        // Stage 5: total
        let total_annual_savings = formulas::total_annual_savings(
            spot_price_savings,
            effect_tariff_savings,
            grid_services_income,
        )?;
        stage(&mut events, Stage::TotalAnnualSavings, total_annual_savings);

        // Stage 6: cost
        let total_inc_vat = formulas::total_cost_inc_vat(
            inputs.total_price_ex_vat,
            inputs.installation_cost,
            inputs.vat_rate,
        )?;
        stage(&mut events, Stage::TotalCostIncVat, total_inc_vat);

        let cost_after_subsidy = formulas::cost_after_subsidy(total_inc_vat, inputs.subsidy_rate)?;
        stage(&mut events, Stage::CostAfterSubsidy, cost_after_subsidy);

        // Stage 7: margin
        let margin = inputs
            .margin
            .map(|m| {
                formulas::margin(inputs.total_price_ex_vat, m.cost_price(battery), m.installer_cut)
            })
            .transpose()?;
        if let Some(margin) = margin {
            stage(&mut events, Stage::Margin, margin);
        }

        // Stage 8: returns
        let payback_years = formulas::payback_period_with_sentinel(
            cost_after_subsidy,
            total_annual_savings,
            self.config.payback_sentinel,
        )?;
        stage(&mut events, Stage::Payback, payback_years);

        let roi_10_years = formulas::roi_percent(cost_after_subsidy, total_annual_savings, 10)?;
        let roi_15_years = formulas::roi_percent(cost_after_subsidy, total_annual_savings, 15)?;
        stage(&mut events, Stage::Roi, roi_10_years);

        // Advisories
        let warranty = self.warranty(inputs)?;
        let annual_consumption_kwh = inputs
            .consumption_profile
            .as_ref()
            .map(|profile| profile.annual_energy(self.config.consumption_days))
            .transpose()?;

        let mut advisories: SmallVec<[Advisory; 2]> = SmallVec::new();

        if let Some(PeakShavingOutcome {
            target_kw,
            actual_kw,
            message: Some(message),
            ..
        }) = &peak_shaving
        {
            advisories.push(Advisory::PeakShavingConstrained {
                target_kw: *target_kw,
                actual_kw: *actual_kw,
                message: message.clone(),
            });
        }

        if let Some(WarrantyCheck {
            warranty_years,
            years_at_current_cycles: Some(years),
            message: Some(message),
            ..
        }) = &warranty
        {
            events.push(CalculationEvent::WarrantyPaceExceeded {
                years_at_current_cycles: *years,
                warranty_years: *warranty_years,
            });
            advisories.push(Advisory::WarrantyPaceExceeded {
                years_at_current_cycles: *years,
                warranty_years: *warranty_years,
                message: message.clone(),
            });
        }

        if !total_annual_savings.is_positive() {
            events.push(CalculationEvent::NeverPaysBack);
            advisories.push(Advisory::NeverPaysBack {
                message: format!(
                    "Annual savings of {} kr never cover the cost; payback reported as {} years",
                    total_annual_savings, self.config.payback_sentinel
                ),
            });
        }

        tracing::debug!(
            %total_annual_savings,
            %payback_years,
            advisories = advisories.len(),
            "ROI calculation completed"
        );
        events.push(CalculationEvent::CalculationCompleted {
            total_annual_savings,
            payback_years,
        });
        self.event_handler.on_events(events);

        Ok(CalculationResultsDecimal {
            effective_capacity_kwh,
            annual_energy_kwh,
            spot_price_savings,
            effect_tariff_savings,
            grid_services_income,
            total_annual_savings,
            total_inc_vat,
            cost_after_subsidy,
            margin,
            payback_years,
            roi_10_years,
            roi_15_years,
            projection_years,
            annual_consumption_kwh,
            peak_shaving,
            grid_services,
            warranty,
            advisories,
        })
    }

    // ========================================================================
    // Assumptions
    // ========================================================================

    fn spread(&self, inputs: &CalculationInputs) -> NumericResult<Ore> {
        match self.config.spot_spread {
            SpreadSource::Fixed(spread) => Ok(spread),
            SpreadSource::Observed => Ok(inputs
                .day_price_ore
                .checked_sub(inputs.night_price_ore)?
                .max(Ore::ZERO)),
        }
    }

    fn efficiency(&self, battery: &BatterySpec) -> NumericResult<Amount> {
        match self.config.round_trip_efficiency {
            EfficiencySource::Fixed(efficiency) => Ok(efficiency),
            EfficiencySource::Battery => battery.round_trip_efficiency(),
        }
    }

    /// Peak shaving runs only when requested and a current peak is known,
    /// either measured or taken from the consumption profile.
    fn peak_shaving(&self, inputs: &CalculationInputs) -> NumericResult<Option<PeakShavingOutcome>> {
        let Some(request) = inputs.peak_shaving else {
            return Ok(None);
        };

        let current_peak_kw: Option<Kw> = request.current_peak_kw.or_else(|| {
            inputs
                .consumption_profile
                .as_ref()
                .map(|profile| profile.peak_kw())
        });

        match current_peak_kw {
            Some(current) => constrain_peak_shaving(
                current,
                request.target_percent,
                inputs.battery.max_discharge_kw,
            )
            .map(Some),
            None => {
                tracing::debug!("Peak shaving requested without a known peak, skipping");
                Ok(None)
            },
        }
    }

    fn warranty(&self, inputs: &CalculationInputs) -> NumericResult<Option<WarrantyCheck>> {
        inputs
            .battery
            .warranty
            .map(|terms| {
                check_warranty_pace(inputs.cycles_per_day, terms.years, terms.guaranteed_cycles)
            })
            .transpose()
    }
}

impl Default for RoiEngine {
    /// Sales defaults, which always validate.
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }
}

fn stage(events: &mut Vec<CalculationEvent>, stage: Stage, value: Amount) {
    tracing::trace!(?stage, %value, "stage completed");
    events.push(CalculationEvent::StageCompleted { stage, value });
}

/// Run one calculation with the default configuration
///
/// # Example
/// ```
/// use battery_roi::prelude::*;
///
/// let battery = BatterySpec::new(
///     Amount::from_integer(15),
///     Amount::from_integer(95),
///     Amount::from_integer(97),
///     Amount::from_integer(5),
///     Amount::from_integer(5),
///     Amount::from_integer(40_000),
/// );
/// let inputs = CalculationInputs::new(battery, "1.5".parse().unwrap(), Amount::from_integer(85));
///
/// let outcome = calculate_roi(&inputs).unwrap();
/// assert_eq!(outcome.decimals.spot_price_savings, Amount::from_integer(6570));
/// ```
pub fn calculate_roi(inputs: &CalculationInputs) -> CalculationResult<RoiOutcome> {
    RoiEngine::default().calculate(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CalculationError, CampaignConfig, ConsumptionProfile, PriceZone, TariffInfo,
        WarrantyTerms,
    };
    use std::sync::Mutex;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<CalculationEvent>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: CalculationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn battery() -> BatterySpec {
        BatterySpec::new(
            amount("15"),
            amount("95"),
            amount("97"),
            amount("5"),
            amount("5"),
            amount("40000"),
        )
    }

    fn inputs() -> CalculationInputs {
        CalculationInputs::new(battery(), amount("1.5"), amount("85"))
            .with_tariff(TariffInfo::new(amount("60"), amount("0"), 6, 22))
            .with_grid_services_rate(amount("500"))
            .with_pricing(amount("100000"), amount("20000"))
            .with_subsidy_rate(amount("0.5"))
            .with_peak_shaving(amount("10"), amount("80"))
    }

    #[test]
    fn test_flat_rate_pipeline() {
        let engine = RoiEngine::default();
        let result = engine.calculate_decimal(&inputs()).unwrap();

        assert_eq!(result.effective_capacity_kwh, amount("11.749125"));
        assert_eq!(result.annual_energy_kwh, amount("6432.6459375"));
        assert_eq!(result.spot_price_savings, amount("6570"));
        assert_eq!(result.effect_tariff_savings, amount("3600"));
        assert_eq!(result.grid_services_income, amount("2500"));
        assert_eq!(result.total_annual_savings, amount("12670"));
        assert_eq!(result.total_inc_vat, amount("150000"));
        assert_eq!(result.cost_after_subsidy, amount("75000"));
        assert_eq!(result.projection_years, 10);
        assert!(result.grid_services.campaign.is_none());
        assert_eq!(result.advisories.len(), 1);
    }

    #[test]
    fn test_campaign_pipeline() {
        let engine = RoiEngine::default();
        let inputs = inputs().with_zone_campaign(PriceZone::Se4, true);
        let result = engine.calculate_decimal(&inputs).unwrap();

        assert_eq!(result.grid_services_income, amount("16440"));
        assert_eq!(result.total_annual_savings, amount("26610"));
        assert_eq!(result.grid_services.total, amount("66820"));
        assert_eq!(result.roi_10_years, amount("254.8"));
        assert_eq!(result.roi_15_years, amount("432.2"));
    }

    #[test]
    fn test_peak_shaving_constrained() {
        let result = RoiEngine::default().calculate_decimal(&inputs()).unwrap();
        let peak = result.peak_shaving.unwrap();

        assert_eq!(peak.target_kw, amount("8"));
        assert_eq!(peak.actual_kw, amount("5"));
        assert!(peak.is_constrained);
        assert!(matches!(
            result.advisories[0],
            Advisory::PeakShavingConstrained { .. }
        ));
    }

    #[test]
    fn test_peak_from_consumption_profile() {
        let profile = ConsumptionProfile::flat(amount("2")).unwrap();
        let mut inputs = inputs().with_consumption_profile(profile);
        inputs.peak_shaving = None;
        let inputs = inputs.with_peak_shaving_target(amount("50"));

        let result = RoiEngine::default().calculate_decimal(&inputs).unwrap();
        let peak = result.peak_shaving.unwrap();
        assert_eq!(peak.current_peak_kw, amount("2"));
        assert_eq!(peak.actual_kw, amount("1"));
        assert_eq!(result.effect_tariff_savings, amount("720"));
        // 48 kWh × 30.44 × 12
        assert_eq!(result.annual_consumption_kwh, Some(amount("17533.44")));
    }

    #[test]
    fn test_peak_target_without_known_peak_is_skipped() {
        let mut inputs = inputs();
        inputs.peak_shaving = None;
        let inputs = inputs.with_peak_shaving_target(amount("50"));

        let result = RoiEngine::default().calculate_decimal(&inputs).unwrap();
        assert!(result.peak_shaving.is_none());
        assert!(result.effect_tariff_savings.is_zero());
    }

    #[test]
    fn test_margin_only_when_requested() {
        let engine = RoiEngine::default();
        assert!(engine.calculate_decimal(&inputs()).unwrap().margin.is_none());

        // Battery cost price 40000
        let inputs = inputs().with_installer_cut(amount("15000"));
        assert_eq!(
            engine.calculate_decimal(&inputs).unwrap().margin,
            Some(amount("45000"))
        );

        let inputs = inputs.with_margin(amount("50000"), amount("15000"));
        assert_eq!(
            engine.calculate_decimal(&inputs).unwrap().margin,
            Some(amount("35000"))
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig::new().with_default_projection_years(0);
        assert!(matches!(
            RoiEngine::new(config, Arc::new(NoOpEventHandler)),
            Err(CalculationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_campaign_guaranteed_past_short_horizon() {
        let inputs = inputs()
            .with_zone_campaign(PriceZone::Se4, true)
            .with_projection_years(2);

        let result = RoiEngine::default().calculate_decimal(&inputs).unwrap();
        let campaign = result.grid_services.campaign.unwrap();
        assert_eq!(result.grid_services_income, amount("16440"));
        assert_eq!(campaign.guaranteed_total, amount("49320"));
        assert!(campaign.post_campaign_total.is_zero());
        assert_eq!(result.grid_services.total, amount("49320"));
        assert_eq!(result.grid_services.annual_average, amount("24660"));
    }

    #[test]
    fn test_never_pays_back() {
        let engine = RoiEngine::new(
            EngineConfig::new().with_spot_spread(SpreadSource::Fixed(Amount::ZERO)),
            Arc::new(NoOpEventHandler),
        )
        .unwrap();
        let mut inputs = CalculationInputs::new(battery(), amount("0"), amount("85"))
            .with_pricing(amount("100000"), amount("0"));
        inputs.grid_services_rate_per_kw_year = Amount::ZERO;

        let result = engine.calculate_decimal(&inputs).unwrap();
        assert_eq!(result.payback_years, amount("999"));
        assert!(result
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::NeverPaysBack { .. })));
    }

    #[test]
    fn test_warranty_advisory() {
        let mut inputs = inputs();
        inputs.battery = battery().with_warranty(WarrantyTerms::new(amount("10"), amount("4000")));

        let result = RoiEngine::default().calculate_decimal(&inputs).unwrap();
        let warranty = result.warranty.unwrap();
        assert!(warranty.exceeds_warranty_pace);
        assert!(result
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::WarrantyPaceExceeded { .. })));
    }

    #[test]
    fn test_observed_market_config() {
        let engine =
            RoiEngine::new(EngineConfig::observed_market(), Arc::new(NoOpEventHandler)).unwrap();
        let inputs = inputs().with_prices(amount("90"), amount("40"));
        let result = engine.calculate_decimal(&inputs).unwrap();

        // 50 × 0.9215 × 1.5 × 15 × 365 / 100
        assert_eq!(result.spot_price_savings, amount("3783.909375"));

        let inverted = inputs.with_prices(amount("30"), amount("40"));
        let result = engine.calculate_decimal(&inverted).unwrap();
        assert!(result.spot_price_savings.is_zero());
    }

    #[test]
    fn test_validation_rejects_before_calculating() {
        let handler = Arc::new(RecordingHandler::default());
        let engine = RoiEngine::new(EngineConfig::default(), handler.clone()).unwrap();
        let inputs = inputs().with_subsidy_rate(amount("1.5"));

        assert!(matches!(
            engine.calculate(&inputs),
            Err(CalculationError::InvalidInput { .. })
        ));
        assert!(handler.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_events_in_stage_order() {
        let handler = Arc::new(RecordingHandler::default());
        let engine = RoiEngine::new(EngineConfig::default(), handler.clone()).unwrap();
        engine.calculate(&inputs()).unwrap();

        let events = handler.events.lock().unwrap();
        assert!(matches!(
            events.first(),
            Some(CalculationEvent::CalculationStarted { projection_years: 10 })
        ));
        assert!(matches!(
            events.last(),
            Some(CalculationEvent::CalculationCompleted { .. })
        ));

        let stages: Vec<Stage> = events
            .iter()
            .filter_map(|event| match event {
                CalculationEvent::StageCompleted { stage, .. } => Some(*stage),
                _ => None,
            })
            .collect();
        let peak = stages.iter().position(|s| *s == Stage::PeakShaving).unwrap();
        let effect = stages
            .iter()
            .position(|s| *s == Stage::EffectTariffSavings)
            .unwrap();
        assert!(peak < effect);
        assert_eq!(stages.last(), Some(&Stage::Roi));
    }

    #[test]
    fn test_post_campaign_override() {
        let mut config = EngineConfig::default();
        config.campaign = CampaignConfig {
            post_campaign_rate_per_kw_year: Some(amount("1000")),
            ..CampaignConfig::default()
        };
        let engine = RoiEngine::new(config, Arc::new(NoOpEventHandler)).unwrap();
        let inputs = inputs().with_zone_campaign(PriceZone::Se4, true);

        let result = engine.calculate_decimal(&inputs).unwrap();
        // 49320 + 5 × 1000 × 7
        assert_eq!(result.grid_services.total, amount("84320"));
    }
}
