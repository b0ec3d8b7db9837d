//! Cost item repository for project spend records.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use super::category::CategoryRepository;
use super::error::{RepositoryError, parse_decimal};
use crate::entities::cost_items;
use salonops_core::project::{CostItem, CostItemUpdate, CostStatus, NewCostItem};
use salonops_shared::types::{CategoryId, CostItemId};

/// Filter options for listing cost items.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostItemFilter {
    /// Filter by owning category.
    pub category_id: Option<CategoryId>,
    /// Filter by payment status.
    pub status: Option<CostStatus>,
}

/// Cost item repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CostItemRepository {
    db: DatabaseConnection,
}

impl CostItemRepository {
    /// Creates a new cost item repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists cost items in insertion order, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value is corrupt.
    pub async fn list(&self, filter: CostItemFilter) -> Result<Vec<CostItem>, RepositoryError> {
        let mut query = cost_items::Entity::find();

        if let Some(category_id) = filter.category_id {
            query = query.filter(cost_items::Column::CategoryId.eq(category_id.into_inner()));
        }
        if let Some(status) = filter.status {
            query = query.filter(cost_items::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(cost_items::Column::CreatedAt)
            .order_by_asc(cost_items::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Finds a cost item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value is corrupt.
    pub async fn find_by_id(&self, id: CostItemId) -> Result<Option<CostItem>, RepositoryError> {
        cost_items::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Creates a cost item under an existing category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if the category does not exist, or a
    /// database error if the insert fails.
    pub async fn create(&self, input: NewCostItem) -> Result<CostItem, RepositoryError> {
        self.ensure_category(input.category_id).await?;

        let item = input.into_item(CostItemId::new());
        let now = Utc::now();

        let model = cost_items::ActiveModel {
            id: Set(item.id.into_inner()),
            category_id: Set(item.category_id.into_inner()),
            description: Set(item.description),
            vendor: Set(item.vendor),
            amount: Set(item.amount.to_string()),
            status: Set(item.status.as_str().to_string()),
            date: Set(item.date),
            notes: Set(item.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        to_domain(model)
    }

    /// Applies a partial update to a cost item.
    ///
    /// # Errors
    ///
    /// Returns `CostItemNotFound` if the item does not exist,
    /// `CategoryNotFound` if it is moved to a missing category, or a database
    /// error if the update fails.
    pub async fn update(
        &self,
        id: CostItemId,
        update: CostItemUpdate,
    ) -> Result<CostItem, RepositoryError> {
        let existing = cost_items::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::CostItemNotFound(id))?;

        if let Some(category_id) = update.category_id {
            self.ensure_category(category_id).await?;
        }

        let merged = update.apply_to(&to_domain(existing.clone())?);

        let mut active = existing.into_active_model();
        active.category_id = Set(merged.category_id.into_inner());
        active.description = Set(merged.description);
        active.vendor = Set(merged.vendor);
        active.amount = Set(merged.amount.to_string());
        active.status = Set(merged.status.as_str().to_string());
        active.date = Set(merged.date);
        active.notes = Set(merged.notes);
        active.updated_at = Set(Utc::now());

        to_domain(active.update(&self.db).await?)
    }

    /// Deletes a cost item.
    ///
    /// # Errors
    ///
    /// Returns `CostItemNotFound` if the item does not exist, or a database
    /// error if the delete fails.
    pub async fn delete(&self, id: CostItemId) -> Result<(), RepositoryError> {
        let result = cost_items::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::CostItemNotFound(id));
        }
        Ok(())
    }

    async fn ensure_category(&self, id: CategoryId) -> Result<(), RepositoryError> {
        if CategoryRepository::new(self.db.clone()).exists(id).await? {
            Ok(())
        } else {
            Err(RepositoryError::CategoryNotFound(id))
        }
    }
}

fn to_domain(m: cost_items::Model) -> Result<CostItem, RepositoryError> {
    let status = m
        .status
        .parse::<CostStatus>()
        .map_err(|_| RepositoryError::InvalidStoredValue {
            column: "status",
            value: m.status.clone(),
        })?;

    Ok(CostItem {
        id: CostItemId::from_uuid(m.id),
        category_id: CategoryId::from_uuid(m.category_id),
        amount: parse_decimal("amount", &m.amount)?,
        description: m.description,
        vendor: m.vendor,
        status,
        date: m.date,
        notes: m.notes,
    })
}
