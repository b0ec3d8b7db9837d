//! Fixed costs repository for the singleton monthly overhead configuration.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Utc;
use sea_orm::sea_query::ValueType;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set,
};

use super::error::{RepositoryError, parse_decimal};
use crate::entities::fixed_costs::{self, SINGLETON_ID};
use salonops_core::{FixedCostLine, FixedCostsConfiguration};

/// Repository for the single fixed costs configuration.
#[derive(Debug, Clone)]
pub struct FixedCostsRepository {
    db: DatabaseConnection,
}

impl FixedCostsRepository {
    /// Creates a new fixed costs repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored configuration, if one was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored amount is corrupt.
    pub async fn get(&self) -> Result<Option<FixedCostsConfiguration>, RepositoryError> {
        fixed_costs::Entity::find_by_id(SINGLETON_ID)
            .one(&self.db)
            .await?
            .map(|m| to_domain(&m))
            .transpose()
    }

    /// Gets the stored configuration, or the all-zero default.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored amount is corrupt.
    pub async fn get_or_default(&self) -> Result<FixedCostsConfiguration, RepositoryError> {
        Ok(self.get().await?.unwrap_or_default())
    }

    /// Replaces the stored configuration, creating the row on first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails or a line has no
    /// matching column.
    pub async fn save(
        &self,
        config: &FixedCostsConfiguration,
    ) -> Result<FixedCostsConfiguration, RepositoryError> {
        let exists = fixed_costs::Entity::find_by_id(SINGLETON_ID)
            .one(&self.db)
            .await?
            .is_some();

        let active = to_active_model(config)?;
        let saved = if exists {
            active.update(&self.db).await?
        } else {
            active.insert(&self.db).await?
        };

        tracing::debug!(
            total = %config.total_monthly_fixed_costs(),
            "Saved fixed costs configuration"
        );

        to_domain(&saved)
    }
}

/// Column holding `line`; column names match [`FixedCostLine::as_str`].
fn line_column(line: FixedCostLine) -> Result<fixed_costs::Column, RepositoryError> {
    fixed_costs::Column::from_str(line.as_str())
        .map_err(|_| RepositoryError::UnmappedColumn(line.as_str()))
}

fn to_active_model(
    config: &FixedCostsConfiguration,
) -> Result<fixed_costs::ActiveModel, RepositoryError> {
    let mut active = fixed_costs::ActiveModel::new();
    active.id = Set(SINGLETON_ID);
    active.updated_at = Set(Utc::now());

    for (line, amount) in config.lines() {
        active.set(line_column(line)?, amount.to_string().into());
    }
    Ok(active)
}

fn to_domain(m: &fixed_costs::Model) -> Result<FixedCostsConfiguration, RepositoryError> {
    let mut amounts = BTreeMap::new();

    for &line in FixedCostLine::ALL {
        let value = m.get(line_column(line)?);
        let raw = <String as ValueType>::try_from(value.clone()).map_err(|_| {
            RepositoryError::InvalidStoredValue {
                column: line.as_str(),
                value: format!("{value:?}"),
            }
        })?;
        amounts.insert(line, parse_decimal(line.as_str(), &raw)?);
    }

    Ok(FixedCostsConfiguration::default().with_overrides(&amounts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_has_a_column() {
        for &line in FixedCostLine::ALL {
            assert!(line_column(line).is_ok(), "no column for {line}");
        }
    }

    #[test]
    fn test_active_model_sets_every_line() {
        let amounts = FixedCostLine::ALL
            .iter()
            .zip(1..)
            .map(|(line, n)| (*line, rust_decimal::Decimal::from(n)))
            .collect();
        let config = FixedCostsConfiguration::default().with_overrides(&amounts);

        let active = to_active_model(&config).unwrap();

        for (line, amount) in config.lines() {
            let value = active.get(line_column(line).unwrap()).into_value().unwrap();
            assert_eq!(<String as ValueType>::try_from(value).unwrap(), amount.to_string());
        }
    }
}
