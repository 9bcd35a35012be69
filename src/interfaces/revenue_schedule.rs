// ============================================================================
// Revenue Schedule Interface
// Defines the contract for grid-services income over the projection horizon
// ============================================================================

use crate::domain::GridServicesProjection;
use crate::numeric::{Kw, NumericResult};

/// Strategy pattern interface for grid-services income
/// Implementations: FlatRateSchedule, ZoneCampaignSchedule
pub trait RevenueSchedule: Send + Sync {
    /// Project grid-services income for a battery over `projection_years`
    ///
    /// # Arguments
    /// * `max_discharge_kw` - The battery's discharge power
    /// * `projection_years` - Horizon, at least 1
    ///
    /// # Returns
    /// Year-one income, total and yearly average over the horizon
    fn project(&self, max_discharge_kw: Kw, projection_years: u32) -> NumericResult<GridServicesProjection>;

    /// Get the schedule name for logging
    fn name(&self) -> &str;
}
