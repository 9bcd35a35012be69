// ============================================================================
// Peak Shaving Constraint
// Clamp the promised peak reduction to what the battery can discharge
// ============================================================================

use crate::numeric::{Kw, NumericResult, Percent};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Peak reduction the battery can actually deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeakShavingOutcome {
    pub current_peak_kw: Kw,
    pub target_percent: Percent,
    /// `current peak × target% / 100`
    pub target_kw: Kw,
    /// `min(target kW, max discharge kW)`
    pub actual_kw: Kw,
    /// `current peak − actual kW`
    pub new_peak_kw: Kw,
    /// The discharge limit cut the target
    pub is_constrained: bool,
    /// Explanation shown to the customer when constrained
    pub message: Option<String>,
}

/// Clamp a peak-shaving target to the battery's discharge power.
///
/// Must run before effect-tariff savings, which consume `actual_kw`.
///
/// ```text
/// current 10 kW, target 80%, battery 5 kW
///   target_kw   = 8
///   actual_kw   = 5   (constrained)
///   new_peak_kw = 5
/// ```
pub fn constrain_peak_shaving(
    current_peak_kw: Kw,
    target_percent: Percent,
    max_discharge_kw: Kw,
) -> NumericResult<PeakShavingOutcome> {
    let target_kw = current_peak_kw.checked_mul(target_percent.percent_to_ratio()?)?;
    let actual_kw = target_kw.min(max_discharge_kw);
    let new_peak_kw = current_peak_kw.checked_sub(actual_kw)?;
    let is_constrained = actual_kw < target_kw;

    let message = is_constrained.then(|| {
        format!(
            "Battery max discharge of {} kW limits peak shaving to {} kW instead of the targeted {} kW",
            max_discharge_kw, actual_kw, target_kw
        )
    });

    Ok(PeakShavingOutcome {
        current_peak_kw,
        target_percent,
        target_kw,
        actual_kw,
        new_peak_kw,
        is_constrained,
        message,
    })
}
