// ============================================================================
// Formula Library
// Independent financial and physical formulas, all pure functions
// ============================================================================
//
// Every formula takes and returns `Amount` and fails only on arithmetic
// overflow. Degenerate but valid inputs (zero savings, zero cost) return
// documented sentinel values instead of errors.

mod cost;
mod energy;
mod returns;
mod savings;

pub use cost::{cost_after_subsidy, margin, total_cost_inc_vat};
pub use energy::{
    annual_energy_throughput, effective_capacity_per_cycle, round_trip_efficiency, DAYS_PER_YEAR,
};
pub use returns::{payback_period, payback_period_with_sentinel, roi_percent, PAYBACK_NEVER};
pub use savings::{
    effect_tariff_savings, flat_grid_services_income, spot_price_savings, total_annual_savings,
    MONTHS_PER_YEAR, ORE_PER_CURRENCY,
};
