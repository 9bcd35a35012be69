// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod revenue_schedule;

pub use event_handler::{
    CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Stage,
};
pub use revenue_schedule::RevenueSchedule;
