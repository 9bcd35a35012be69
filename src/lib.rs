// ============================================================================
// Battery ROI Library
// Decimal-precision return-on-investment engine for home batteries
// ============================================================================

//! # Battery ROI
//!
//! Computes the financial return of a home battery installation from its
//! technical specification, electricity prices, the grid tariff, grid-services
//! income and purchase costs.
//!
//! ## Features
//!
//! - **Decimal arithmetic** rounded to 20 significant digits, half-up
//! - **Independent formulas** that can be used on their own
//! - **Pluggable grid-services schedules** (flat rate, zone campaign)
//! - **Physical constraints** on peak shaving and warranty pace
//! - **Event observation** for audit trails and logging
//!
//! ## Example
//!
//! ```rust
//! use battery_roi::prelude::*;
//! use std::sync::Arc;
//!
//! let battery = BatterySpec::new(
//!     Amount::from_integer(15),     // kWh
//!     Amount::from_integer(95),     // charge efficiency %
//!     Amount::from_integer(97),     // discharge efficiency %
//!     Amount::from_integer(5),      // max discharge kW
//!     Amount::from_integer(5),      // max charge kW
//!     Amount::from_integer(40_000), // cost price
//! );
//!
//! let inputs = CalculationInputs::new(battery, "1.5".parse().unwrap(), Amount::from_integer(85))
//!     .with_tariff(TariffInfo::new(Amount::from_integer(60), Amount::ZERO, 6, 22))
//!     .with_peak_shaving(Amount::from_integer(10), Amount::from_integer(80))
//!     .with_zone_campaign(PriceZone::Se4, true)
//!     .with_grid_services_rate(Amount::from_integer(500))
//!     .with_pricing(Amount::from_integer(100_000), Amount::from_integer(20_000))
//!     .with_subsidy_rate("0.5".parse().unwrap());
//!
//! let engine = RoiEngine::new(EngineConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
//! let outcome = engine.calculate(&inputs).unwrap();
//!
//! assert_eq!(outcome.decimals.total_annual_savings, Amount::from_integer(26_610));
//! assert_eq!(outcome.decimals.roi_10_years, "254.8".parse().unwrap());
//! println!("Payback: {:.1} years", outcome.results.payback_years);
//! ```

pub mod constraints;
pub mod domain;
pub mod engine;
pub mod formulas;
pub mod interfaces;
pub mod numeric;

#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::constraints::{PeakShavingOutcome, WarrantyCheck};
    pub use crate::domain::{
        Advisory, BatterySpec, CalculationError, CalculationInputs, CalculationResult,
        CalculationResults, CalculationResultsDecimal, CampaignConfig, ConsumptionProfile,
        DaysPerMonth, EfficiencySource, EngineConfig, GridServicesProjection, PriceQuarterInfo,
        PriceZone, Quarter, RoiOutcome, SpreadSource, TariffInfo, WarrantyTerms, ZoneRateTable,
    };
    pub use crate::engine::{
        calculate_roi, create_from_config, FlatRateSchedule, RoiEngine, RoiEngineBuilder,
        ZoneCampaignSchedule,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RevenueSchedule,
        Stage,
    };
    pub use crate::numeric::{Amount, Currency, Kw, Kwh, NumericError, Ore, Percent};
}
