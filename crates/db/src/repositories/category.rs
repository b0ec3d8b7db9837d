//! Category repository for project cost categories.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use super::error::{RepositoryError, parse_decimal};
use crate::entities::cost_categories;
use salonops_core::project::{CategoryUpdate, CostCategory, NewCostCategory};
use salonops_shared::types::CategoryId;

/// Category repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every category by `sort_order`, then insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored amount is corrupt.
    pub async fn list(&self) -> Result<Vec<CostCategory>, RepositoryError> {
        cost_categories::Entity::find()
            .order_by_asc(cost_categories::Column::SortOrder)
            .order_by_asc(cost_categories::Column::CreatedAt)
            .order_by_asc(cost_categories::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Finds a category by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored amount is corrupt.
    pub async fn find_by_id(&self, id: CategoryId) -> Result<Option<CostCategory>, RepositoryError> {
        cost_categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Returns whether a category exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn exists(&self, id: CategoryId) -> Result<bool, RepositoryError> {
        Ok(cost_categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .is_some())
    }

    /// Creates a category.
    ///
    /// Domain validation is the caller's job; see [`NewCostCategory::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, input: NewCostCategory) -> Result<CostCategory, RepositoryError> {
        let category = input.into_category(CategoryId::new());
        let now = Utc::now();

        let model = cost_categories::ActiveModel {
            id: Set(category.id.into_inner()),
            name: Set(category.name.clone()),
            projected_total: Set(category.projected_total.to_string()),
            sort_order: Set(category.sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        to_domain(model)
    }

    /// Applies a partial update to a category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if the category does not exist, or a
    /// database error if the update fails.
    pub async fn update(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CostCategory, RepositoryError> {
        let existing = cost_categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::CategoryNotFound(id))?;

        let merged = update.apply_to(&to_domain(existing.clone())?);

        let mut active = existing.into_active_model();
        active.name = Set(merged.name);
        active.projected_total = Set(merged.projected_total.to_string());
        active.sort_order = Set(merged.sort_order);
        active.updated_at = Set(Utc::now());

        to_domain(active.update(&self.db).await?)
    }

    /// Deletes a category. Its cost items are left in place.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if the category does not exist, or a
    /// database error if the delete fails.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = cost_categories::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::CategoryNotFound(id));
        }
        Ok(())
    }
}

fn to_domain(m: cost_categories::Model) -> Result<CostCategory, RepositoryError> {
    Ok(CostCategory {
        id: CategoryId::from_uuid(m.id),
        projected_total: parse_decimal("projected_total", &m.projected_total)?,
        name: m.name,
        sort_order: m.sort_order,
    })
}
