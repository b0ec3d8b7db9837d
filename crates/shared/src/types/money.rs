//! Rounding rules for currency and ratio outputs.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All arithmetic runs on `rust_decimal::Decimal` at full precision; these
//! helpers quantize a finished value exactly once, at the output boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places carried by every currency output.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Decimal places carried by every ratio output.
pub const RATIO_DECIMAL_PLACES: u32 = 4;

/// Rounds a currency amount to cents, half-up (midpoint away from zero).
///
/// The result always carries exactly two decimal places so it serializes as
/// e.g. `"7000.00"`, and never as negative zero.
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    quantize(value, CURRENCY_DECIMAL_PLACES)
}

/// Rounds a dimensionless ratio to four decimal places, half-up.
#[must_use]
pub fn round_ratio(value: Decimal) -> Decimal {
    quantize(value, RATIO_DECIMAL_PLACES)
}

fn quantize(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}
