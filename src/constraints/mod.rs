// ============================================================================
// Constraints Module
// Physical and warranty limits applied around the formulas
// ============================================================================

mod peak_shaving;
mod warranty;

pub use peak_shaving::{constrain_peak_shaving, PeakShavingOutcome};
pub use warranty::{check_warranty_pace, WarrantyCheck};
