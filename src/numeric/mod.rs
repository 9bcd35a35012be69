// ============================================================================
// Numeric Module
// Decimal arithmetic for energy and currency calculations
// ============================================================================
//
// This module provides:
// - Amount: rust_decimal-backed value rounded to a fixed significant-digit count
// - PrecisionConfig: process-wide digit count and rounding mode, set once
// - NumericError: Error types for arithmetic operations
// - Kwh/Kw/Currency/Ore/Percent type aliases for common use cases
//
// Design principles:
// - No floating-point operations before the serialization boundary
// - All arithmetic returns Result (no panics)
// - Half-up rounding to 20 significant digits unless configured otherwise

mod amount;
mod errors;
mod precision;

pub use amount::{Amount, Currency, Kw, Kwh, Ore, Percent};
pub use errors::{NumericError, NumericResult};
pub use precision::{
    configure_precision, precision, PrecisionConfig, RoundingMode, MAX_SIGNIFICANT_DIGITS,
};
