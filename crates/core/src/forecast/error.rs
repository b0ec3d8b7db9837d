//! Forecast input validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::fixed_costs::FixedCostLine;

/// Errors raised when raw forecast inputs fall outside their domain.
///
/// The engine itself never returns these; the request boundary checks inputs
/// with [`super::validation`] before calling it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// The shop must employ at least one stylist.
    #[error("Number of stylists must be at least 1")]
    NoStylists,

    /// A monetary amount or quantity is negative.
    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount {
        /// Input field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// A quantity or amount exceeds the accepted domain.
    #[error("{field} cannot exceed {max} (got {value})")]
    AboveMaximum {
        /// Input field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
        /// Largest accepted value.
        max: Decimal,
    },

    /// A rate fraction lies outside `[0, 1]`.
    #[error("{field} must be between 0 and 1 (got {value})")]
    RateOutOfRange {
        /// Input field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// A fixed-cost line exceeds the accepted domain.
    #[error("Fixed cost {line} cannot exceed {max} (got {value})")]
    FixedCostAboveMaximum {
        /// Offending line item.
        line: FixedCostLine,
        /// Rejected value.
        value: Decimal,
        /// Largest accepted value.
        max: Decimal,
    },

    /// A fixed-cost line is negative.
    #[error("Fixed cost {line} cannot be negative (got {value})")]
    NegativeFixedCost {
        /// Offending line item.
        line: FixedCostLine,
        /// Rejected value.
        value: Decimal,
    },
}

impl From<ForecastError> for salonops_shared::AppError {
    fn from(err: ForecastError) -> Self {
        Self::Validation(err.to_string())
    }
}
