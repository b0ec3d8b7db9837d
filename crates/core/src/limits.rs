//! Upper bounds of the accepted input domain.
//!
//! Every value that reaches an engine is at most these magnitudes, so the
//! engines' `Decimal` arithmetic stays far below its 28-digit ceiling:
//! the largest labor term is `MAX_STYLISTS * MAX_HOURS_PER_DAY *
//! MAX_MONEY_AMOUNT * MAX_OPERATING_DAYS`, about `7.4e14`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest accepted monetary amount: prices, wages, sales, fixed-cost lines,
/// category budgets, and cost item amounts.
pub const MAX_MONEY_AMOUNT: Decimal = dec!(1000000000);

/// Largest accepted shop-wide haircut count per day.
pub const MAX_HAIRCUTS_PER_DAY: u32 = 10_000;

/// Largest accepted number of operating days in a month.
pub const MAX_OPERATING_DAYS: u32 = 31;

/// Largest accepted stylist headcount.
pub const MAX_STYLISTS: u32 = 1_000;

/// Largest accepted paid hours per stylist per day.
pub const MAX_HOURS_PER_DAY: Decimal = dec!(24);
