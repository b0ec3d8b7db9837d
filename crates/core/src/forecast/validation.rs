//! Domain checks for raw forecast inputs.
//!
//! The engine trusts its inputs; request handlers run these checks first.

use rust_decimal::Decimal;

use super::error::ForecastError;
use super::types::OperationalInputs;
use crate::limits::{
    MAX_HAIRCUTS_PER_DAY, MAX_HOURS_PER_DAY, MAX_MONEY_AMOUNT, MAX_OPERATING_DAYS, MAX_STYLISTS,
};

/// Validates operational inputs before they reach the engine.
///
/// # Errors
///
/// Returns the first violation found: no stylists, a negative amount, a
/// value above its [`crate::limits`] bound, or a rate outside `[0, 1]`.
pub fn validate_inputs(inputs: &OperationalInputs) -> Result<(), ForecastError> {
    if inputs.num_stylists == 0 {
        return Err(ForecastError::NoStylists);
    }

    let counts = [
        ("haircuts_per_day", inputs.haircuts_per_day, MAX_HAIRCUTS_PER_DAY),
        ("operating_days_per_month", inputs.operating_days_per_month, MAX_OPERATING_DAYS),
        ("num_stylists", inputs.num_stylists, MAX_STYLISTS),
    ];
    for (field, value, max) in counts {
        if value > max {
            return Err(ForecastError::AboveMaximum {
                field,
                value: Decimal::from(value),
                max: Decimal::from(max),
            });
        }
    }

    let amounts = [
        ("price_per_cut", inputs.price_per_cut, MAX_MONEY_AMOUNT),
        ("stylist_hours_per_day", inputs.stylist_hours_per_day, MAX_HOURS_PER_DAY),
        ("stylist_hourly_rate", inputs.stylist_hourly_rate, MAX_MONEY_AMOUNT),
        ("retail_sales", inputs.retail_sales, MAX_MONEY_AMOUNT),
        ("party_sales", inputs.party_sales, MAX_MONEY_AMOUNT),
    ];
    for (field, value, max) in amounts {
        if value < Decimal::ZERO {
            return Err(ForecastError::NegativeAmount { field, value });
        }
        if value > max {
            return Err(ForecastError::AboveMaximum { field, value, max });
        }
    }

    let rates = [
        ("stylist_payroll_tax_pct", inputs.stylist_payroll_tax_pct),
        ("retail_cogs_pct", inputs.retail_cogs_pct),
        ("party_cogs_pct", inputs.party_cogs_pct),
        ("royalties_pct", inputs.royalties_pct),
        ("cc_fees_pct", inputs.cc_fees_pct),
        ("ad_fund_pct", inputs.ad_fund_pct),
    ];
    for (field, value) in rates {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ForecastError::RateOutOfRange { field, value });
        }
    }

    Ok(())
}
