//! Project cost error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a category or cost item violates its domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// Category name is blank.
    #[error("Category name cannot be empty")]
    EmptyName,

    /// Cost item description is blank.
    #[error("Cost item description cannot be empty")]
    EmptyDescription,

    /// Amount cannot be negative.
    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// Amount exceeds the accepted domain.
    #[error("{field} cannot exceed {max} (got {value})")]
    AboveMaximum {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
        /// Largest accepted value.
        max: Decimal,
    },

    /// Status tag is not one of planned, committed, paid.
    #[error("Unknown cost status: {0}")]
    UnknownStatus(String),
}

impl From<ProjectError> for salonops_shared::AppError {
    fn from(err: ProjectError) -> Self {
        Self::Validation(err.to_string())
    }
}
