// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculation progress
// ============================================================================

use crate::numeric::Amount;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    EffectiveCapacity,
    AnnualEnergy,
    SpotPriceSavings,
    PeakShaving,
    EffectTariffSavings,
    GridServices,
    TotalAnnualSavings,
    TotalCostIncVat,
    CostAfterSubsidy,
    Margin,
    Payback,
    Roi,
}

/// Events emitted by the ROI engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Inputs accepted, pipeline starting
    CalculationStarted { projection_years: u32 },

    /// A stage produced its value
    StageCompleted { stage: Stage, value: Amount },

    /// Grid-services income taken from the named schedule
    ScheduleSelected { schedule: String },

    /// Peak shaving clamped to the battery's discharge limit
    PeakShavingConstrained { target_kw: Amount, actual_kw: Amount },

    /// Cycling rate uses up the guaranteed cycles before the warranty ends
    WarrantyPaceExceeded {
        years_at_current_cycles: Amount,
        warranty_years: Amount,
    },

    /// Zero annual savings, payback reported as the sentinel
    NeverPaysBack,

    /// All stages finished
    CalculationCompleted {
        total_annual_savings: Amount,
        payback_years: Amount,
    },
}

/// Event handler trait for observing ROI calculations
/// Implementations can handle logging, metrics, audit trails, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::PeakShavingConstrained { .. }
            | CalculationEvent::WarrantyPaceExceeded { .. }
            | CalculationEvent::NeverPaysBack => {
                tracing::info!("ROI engine advisory: {:?}", event);
            },
            _ => tracing::debug!("ROI engine event: {:?}", event),
        }
    }
}
