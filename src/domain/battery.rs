// ============================================================================
// Battery Domain Model
// ============================================================================

use super::errors::{ensure_non_negative, ensure_positive, ensure_within, CalculationResult};
use crate::numeric::{Amount, Currency, Kw, Kwh, NumericResult, Percent};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Manufacturer warranty: whichever of years or cycles runs out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WarrantyTerms {
    pub years: Amount,
    pub guaranteed_cycles: Amount,
}

impl WarrantyTerms {
    pub fn new(years: Amount, guaranteed_cycles: Amount) -> Self {
        Self {
            years,
            guaranteed_cycles,
        }
    }
}

/// Catalog data for one battery model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatterySpec {
    /// Nominal capacity
    pub capacity_kwh: Kwh,

    /// Charging efficiency in percent (0-100)
    pub charge_efficiency_pct: Percent,

    /// Discharging efficiency in percent (0-100)
    pub discharge_efficiency_pct: Percent,

    /// Maximum continuous discharge power
    pub max_discharge_kw: Kw,

    /// Maximum continuous charge power
    pub max_charge_kw: Kw,

    /// Purchase price for the installer
    pub cost_price: Currency,

    /// Optional: warranty terms, used for the cycling advisory
    pub warranty: Option<WarrantyTerms>,
}

impl BatterySpec {
    pub fn new(
        capacity_kwh: Kwh,
        charge_efficiency_pct: Percent,
        discharge_efficiency_pct: Percent,
        max_discharge_kw: Kw,
        max_charge_kw: Kw,
        cost_price: Currency,
    ) -> Self {
        Self {
            capacity_kwh,
            charge_efficiency_pct,
            discharge_efficiency_pct,
            max_discharge_kw,
            max_charge_kw,
            cost_price,
            warranty: None,
        }
    }

    /// Builder method: Attach warranty terms
    pub fn with_warranty(mut self, warranty: WarrantyTerms) -> Self {
        self.warranty = Some(warranty);
        self
    }

    /// Round-trip efficiency as a fraction (charge × discharge).
    pub fn round_trip_efficiency(&self) -> NumericResult<Amount> {
        crate::formulas::round_trip_efficiency(
            self.charge_efficiency_pct,
            self.discharge_efficiency_pct,
        )
    }

    /// Validate the catalog entry
    pub fn validate(&self) -> CalculationResult<()> {
        ensure_positive("battery.capacity_kwh", self.capacity_kwh)?;
        ensure_within(
            "battery.charge_efficiency_pct",
            self.charge_efficiency_pct,
            Amount::ONE_HUNDRED,
        )?;
        ensure_within(
            "battery.discharge_efficiency_pct",
            self.discharge_efficiency_pct,
            Amount::ONE_HUNDRED,
        )?;
        ensure_positive("battery.max_discharge_kw", self.max_discharge_kw)?;
        ensure_positive("battery.max_charge_kw", self.max_charge_kw)?;
        ensure_non_negative("battery.cost_price", self.cost_price)?;

        if let Some(warranty) = self.warranty {
            ensure_non_negative("battery.warranty.years", warranty.years)?;
            ensure_non_negative(
                "battery.warranty.guaranteed_cycles",
                warranty.guaranteed_cycles,
            )?;
        }

        Ok(())
    }
}
