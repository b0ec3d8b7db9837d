//! Repository error type shared by every repository.

use sea_orm::DbErr;

use salonops_shared::AppError;
use salonops_shared::types::{CategoryId, CostItemId};

/// Error types for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Cost item not found.
    #[error("Cost item not found: {0}")]
    CostItemNotFound(CostItemId),

    /// A stored column could not be decoded.
    #[error("Invalid stored value in {column}: {value}")]
    InvalidStoredValue {
        /// Column name.
        column: &'static str,
        /// Raw stored text.
        value: String,
    },

    /// A fixed cost line has no column in the `fixed_costs` table.
    #[error("No column for fixed cost line {0}")]
    UnmappedColumn(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::CategoryNotFound(_) | RepositoryError::CostItemNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            RepositoryError::InvalidStoredValue { .. } | RepositoryError::UnmappedColumn(_) => {
                Self::Internal(err.to_string())
            }
            RepositoryError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Decodes a money column.
pub(crate) fn parse_decimal(
    column: &'static str,
    raw: &str,
) -> Result<rust_decimal::Decimal, RepositoryError> {
    raw.parse()
        .map_err(|_| RepositoryError::InvalidStoredValue {
            column,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = RepositoryError::CategoryNotFound(CategoryId::new()).into();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_corrupt_value_maps_to_500() {
        let err = parse_decimal("amount", "twelve").unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidStoredValue { column: "amount", .. }));
        assert_eq!(AppError::from(err).status_code(), 500);
    }

    #[test]
    fn test_parse_keeps_scale() {
        assert_eq!(parse_decimal("rent", "7000.00").unwrap().to_string(), "7000.00");
    }
}
