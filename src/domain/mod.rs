// ============================================================================
// Domain Models Module
// Inputs, reference data, configuration and results of the ROI engine
// ============================================================================

pub mod battery;
pub mod config;
pub mod consumption;
pub mod errors;
pub mod inputs;
pub mod price;
pub mod results;
pub mod tariff;
pub mod zone_rates;

pub use battery::{BatterySpec, WarrantyTerms};
pub use config::{CampaignConfig, EfficiencySource, EngineConfig, SpreadSource};
pub use consumption::{ConsumptionProfile, DaysPerMonth};
pub use errors::{CalculationError, CalculationResult};
pub use inputs::{CalculationInputs, MarginInputs, PeakShavingInputs};
pub use price::{PriceQuarterInfo, PriceZone, Quarter};
pub use results::{
    Advisory, CalculationResults, CalculationResultsDecimal, CampaignBreakdown,
    GridServicesProjection, RoiOutcome,
};
pub use tariff::TariffInfo;
pub use zone_rates::ZoneRateTable;
