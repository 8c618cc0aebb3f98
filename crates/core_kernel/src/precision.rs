//! Decimal precision helpers
//!
//! Grades and weights arrive as `f64`, but invariants such as "weights sum to
//! 100 within 0.01" must not depend on binary floating point artifacts
//! (`60.0 + 40.01` is not `100.01` in `f64`). These helpers lift values into
//! `rust_decimal` using their shortest round-trip representation, so the
//! decimal matches the literal the caller wrote.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::CoreError;

/// Converts a finite `f64` into its shortest exact decimal representation
///
/// # Errors
///
/// Returns `CoreError::Precision` if the value is not finite or does not fit
/// in a `Decimal` (magnitude above ~7.9e28).
pub fn to_decimal(field: &str, value: f64) -> Result<Decimal, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::precision(field, "value is not finite"));
    }

    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .ok_or_else(|| {
            CoreError::precision(field, format!("{} cannot be represented as a decimal", value))
        })
}

/// Rounds to `dp` decimal places, ties away from zero
///
/// This is the rounding taught in school: 15.125 becomes 15.13 and
/// -15.125 becomes -15.13.
pub fn round_half_away_from_zero(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if `actual` deviates from `expected` by at most `tolerance`
///
/// The bound is inclusive.
pub fn within_tolerance(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
    (actual - expected).abs() <= tolerance
}
