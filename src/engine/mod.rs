// ============================================================================
// Engine Module
// Contains the ROI pipeline and the grid-services schedules
// ============================================================================

mod flat_rate;
mod roi_engine;
mod zone_campaign;

pub mod factory;

pub use factory::{create_from_config, create_revenue_schedule, RoiEngineBuilder};
pub use flat_rate::FlatRateSchedule;
pub use roi_engine::{calculate_roi, RoiEngine};
pub use zone_campaign::ZoneCampaignSchedule;
