// ============================================================================
// Calculation Inputs
// Everything one ROI calculation needs, assembled by the caller
// ============================================================================

use super::battery::BatterySpec;
use super::consumption::ConsumptionProfile;
use super::errors::{ensure_non_negative, ensure_within, CalculationError, CalculationResult};
use super::price::{PriceQuarterInfo, PriceZone};
use super::tariff::TariffInfo;
use crate::numeric::{Amount, Currency, Kw, Ore, Percent};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs for the optional installer margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarginInputs {
    /// Organization's fixed cut per installation
    pub installer_cut: Currency,
    /// Replaces the battery's cost price when set
    pub cost_price_override: Option<Currency>,
}

impl MarginInputs {
    /// Cost price used for the margin
    pub fn cost_price(&self, battery: &BatterySpec) -> Currency {
        self.cost_price_override.unwrap_or(battery.cost_price)
    }
}

/// Inputs for peak shaving against the effect tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeakShavingInputs {
    /// Desired reduction of the monthly peak, in percent
    pub target_percent: Percent,
    /// Optional: measured peak; None falls back to the consumption profile
    pub current_peak_kw: Option<Kw>,
}

/// Aggregated inputs for one ROI calculation.
///
/// Optional parts are modelled as `Option` because zero is a valid value for
/// most of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationInputs {
    pub battery: BatterySpec,

    /// Full charge/discharge cycles per day
    pub cycles_per_day: Amount,

    /// Average depth of discharge per cycle, in percent
    pub avg_discharge_percent: Percent,

    /// Average day spot price
    pub day_price_ore: Ore,

    /// Average night spot price
    pub night_price_ore: Ore,

    pub tariff: TariffInfo,

    /// Flat grid-services income per kW of discharge power per year
    pub grid_services_rate_per_kw_year: Currency,

    /// Sale price excluding VAT
    pub total_price_ex_vat: Currency,

    /// Installation cost excluding VAT
    pub installation_cost: Currency,

    /// VAT as a fraction, e.g. 0.25
    pub vat_rate: Amount,

    /// Subsidy as a fraction of the VAT-inclusive cost (0-1)
    pub subsidy_rate: Amount,

    /// Optional: margin calculation inputs
    pub margin: Option<MarginInputs>,

    /// Optional: peak shaving inputs
    pub peak_shaving: Option<PeakShavingInputs>,

    /// Optional: price zone of the installation
    pub price_zone: Option<PriceZone>,

    /// Whether the battery model qualifies for the guaranteed-income campaign
    pub zone_campaign_eligible: bool,

    /// Optional: projection horizon; None uses the engine default (10)
    pub projection_years: Option<u32>,

    /// Optional: typical-day consumption per month
    pub consumption_profile: Option<ConsumptionProfile>,
}

impl CalculationInputs {
    /// Create inputs with required parameters
    ///
    /// Prices, tariff and costs start at zero, VAT at 25%.
    pub fn new(battery: BatterySpec, cycles_per_day: Amount, avg_discharge_percent: Percent) -> Self {
        Self {
            battery,
            cycles_per_day,
            avg_discharge_percent,
            day_price_ore: Ore::ZERO,
            night_price_ore: Ore::ZERO,
            tariff: TariffInfo::default(),
            grid_services_rate_per_kw_year: Currency::ZERO,
            total_price_ex_vat: Currency::ZERO,
            installation_cost: Currency::ZERO,
            vat_rate: Amount::from_raw_parts(25, 2),
            subsidy_rate: Amount::ZERO,
            margin: None,
            peak_shaving: None,
            price_zone: None,
            zone_campaign_eligible: false,
            projection_years: None,
            consumption_profile: None,
        }
    }

    /// Builder method: Set day and night spot prices
    pub fn with_prices(mut self, day_price_ore: Ore, night_price_ore: Ore) -> Self {
        self.day_price_ore = day_price_ore;
        self.night_price_ore = night_price_ore;
        self
    }

    /// Builder method: Copy day and night prices from quarterly reference data
    pub fn with_quarter_prices(mut self, info: &PriceQuarterInfo) -> Self {
        self.day_price_ore = info.avg_day_price_ore;
        self.night_price_ore = info.avg_night_price_ore;
        self.price_zone = Some(info.zone);
        self
    }

    /// Builder method: Set the grid tariff
    pub fn with_tariff(mut self, tariff: TariffInfo) -> Self {
        self.tariff = tariff;
        self
    }

    /// Builder method: Set the flat grid-services rate
    pub fn with_grid_services_rate(mut self, rate_per_kw_year: Currency) -> Self {
        self.grid_services_rate_per_kw_year = rate_per_kw_year;
        self
    }

    /// Builder method: Set sale price and installation cost (both ex VAT)
    pub fn with_pricing(mut self, total_price_ex_vat: Currency, installation_cost: Currency) -> Self {
        self.total_price_ex_vat = total_price_ex_vat;
        self.installation_cost = installation_cost;
        self
    }

    /// Builder method: Set VAT rate
    pub fn with_vat_rate(mut self, vat_rate: Amount) -> Self {
        self.vat_rate = vat_rate;
        self
    }

    /// Builder method: Set subsidy rate
    pub fn with_subsidy_rate(mut self, subsidy_rate: Amount) -> Self {
        self.subsidy_rate = subsidy_rate;
        self
    }

    /// Builder method: Enable the margin calculation against the battery's cost price
    pub fn with_installer_cut(mut self, installer_cut: Currency) -> Self {
        self.margin = Some(MarginInputs {
            installer_cut,
            cost_price_override: None,
        });
        self
    }

    /// Builder method: Enable the margin calculation with an explicit cost price
    pub fn with_margin(mut self, cost_price: Currency, installer_cut: Currency) -> Self {
        self.margin = Some(MarginInputs {
            installer_cut,
            cost_price_override: Some(cost_price),
        });
        self
    }

    /// Builder method: Enable peak shaving with a measured peak
    pub fn with_peak_shaving(mut self, current_peak_kw: Kw, target_percent: Percent) -> Self {
        self.peak_shaving = Some(PeakShavingInputs {
            target_percent,
            current_peak_kw: Some(current_peak_kw),
        });
        self
    }

    /// Builder method: Enable peak shaving with the peak taken from the
    /// consumption profile
    pub fn with_peak_shaving_target(mut self, target_percent: Percent) -> Self {
        self.peak_shaving = Some(PeakShavingInputs {
            target_percent,
            current_peak_kw: None,
        });
        self
    }

    /// Builder method: Set price zone and campaign eligibility
    pub fn with_zone_campaign(mut self, zone: PriceZone, eligible: bool) -> Self {
        self.price_zone = Some(zone);
        self.zone_campaign_eligible = eligible;
        self
    }

    /// Builder method: Set projection horizon
    pub fn with_projection_years(mut self, years: u32) -> Self {
        self.projection_years = Some(years);
        self
    }

    /// Builder method: Attach a consumption profile
    pub fn with_consumption_profile(mut self, profile: ConsumptionProfile) -> Self {
        self.consumption_profile = Some(profile);
        self
    }

    /// Validate the inputs
    ///
    /// Form validation normally rejects these before they get here.
    pub fn validate(&self) -> CalculationResult<()> {
        self.battery.validate()?;
        self.tariff.validate()?;

        ensure_non_negative("cycles_per_day", self.cycles_per_day)?;
        ensure_within(
            "avg_discharge_percent",
            self.avg_discharge_percent,
            Amount::ONE_HUNDRED,
        )?;
        ensure_non_negative("day_price_ore", self.day_price_ore)?;
        ensure_non_negative("night_price_ore", self.night_price_ore)?;
        ensure_non_negative(
            "grid_services_rate_per_kw_year",
            self.grid_services_rate_per_kw_year,
        )?;
        ensure_non_negative("total_price_ex_vat", self.total_price_ex_vat)?;
        ensure_non_negative("installation_cost", self.installation_cost)?;
        ensure_non_negative("vat_rate", self.vat_rate)?;
        ensure_within("subsidy_rate", self.subsidy_rate, Amount::ONE)?;

        if let Some(margin) = self.margin {
            ensure_non_negative("margin.installer_cut", margin.installer_cut)?;
            if let Some(cost_price) = margin.cost_price_override {
                ensure_non_negative("margin.cost_price_override", cost_price)?;
            }
        }

        if let Some(peak) = self.peak_shaving {
            ensure_within(
                "peak_shaving.target_percent",
                peak.target_percent,
                Amount::ONE_HUNDRED,
            )?;
            if let Some(current) = peak.current_peak_kw {
                ensure_non_negative("peak_shaving.current_peak_kw", current)?;
            }
        }

        if self.projection_years == Some(0) {
            return Err(CalculationError::invalid_input(
                "projection_years",
                "must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quarter;

    fn battery() -> BatterySpec {
        BatterySpec::new(
            Amount::from_integer(15),
            Amount::from_integer(95),
            Amount::from_integer(97),
            Amount::from_integer(5),
            Amount::from_integer(5),
            Amount::from_integer(40_000),
        )
    }

    fn inputs() -> CalculationInputs {
        CalculationInputs::new(battery(), "1.5".parse().unwrap(), Amount::from_integer(85))
    }

    #[test]
    fn test_defaults() {
        let inputs = inputs();
        assert_eq!(inputs.vat_rate, "0.25".parse().unwrap());
        assert!(inputs.margin.is_none());
        assert!(inputs.peak_shaving.is_none());
        assert!(!inputs.zone_campaign_eligible);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let inputs = inputs()
            .with_pricing(Amount::from_integer(100_000), Amount::from_integer(20_000))
            .with_installer_cut(Amount::from_integer(15_000))
            .with_peak_shaving(Amount::from_integer(10), Amount::from_integer(80))
            .with_zone_campaign(PriceZone::Se4, true)
            .with_projection_years(15);

        assert_eq!(inputs.installation_cost, Amount::from_integer(20_000));
        assert_eq!(
            inputs.margin.map(|m| m.installer_cut),
            Some(Amount::from_integer(15_000))
        );
        assert_eq!(
            inputs.margin.map(|m| m.cost_price(&inputs.battery)),
            Some(inputs.battery.cost_price)
        );
        assert_eq!(
            inputs.peak_shaving.and_then(|p| p.current_peak_kw),
            Some(Amount::from_integer(10))
        );
        assert_eq!(inputs.price_zone, Some(PriceZone::Se4));
        assert_eq!(inputs.projection_years, Some(15));
    }

    #[test]
    fn test_with_quarter_prices() {
        let info = PriceQuarterInfo::new(
            PriceZone::Se3,
            2024,
            Quarter::Q3,
            Amount::from_integer(95),
            Amount::from_integer(40),
        );
        let inputs = inputs().with_quarter_prices(&info);
        assert_eq!(inputs.day_price_ore, Amount::from_integer(95));
        assert_eq!(inputs.night_price_ore, Amount::from_integer(40));
        assert_eq!(inputs.price_zone, Some(PriceZone::Se3));
    }

    #[test]
    fn test_validation() {
        let bad_subsidy = inputs().with_subsidy_rate(Amount::from_integer(2));
        assert!(matches!(
            bad_subsidy.validate(),
            Err(CalculationError::InvalidInput {
                field: "subsidy_rate",
                ..
            })
        ));

        let bad_target = inputs().with_peak_shaving_target(Amount::from_integer(120));
        assert!(bad_target.validate().is_err());

        let zero_years = inputs().with_projection_years(0);
        assert!(zero_years.validate().is_err());

        let negative_price = inputs().with_prices(Amount::from_integer(-1), Amount::ZERO);
        assert!(negative_price.validate().is_err());
    }
}
