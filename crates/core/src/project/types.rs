//! Project cost data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ProjectError;
use crate::limits::MAX_MONEY_AMOUNT;
use salonops_shared::types::{CategoryId, CostItemId};

/// Payment status of a cost item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostStatus {
    /// Budgeted but not yet ordered.
    #[default]
    Planned,
    /// Ordered or contracted, not yet paid.
    Committed,
    /// Paid.
    Paid,
}

impl CostStatus {
    /// Wire and column representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Committed => "committed",
            Self::Paid => "paid",
        }
    }
}

impl std::fmt::Display for CostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CostStatus {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(Self::Planned),
            "committed" => Ok(Self::Committed),
            "paid" => Ok(Self::Paid),
            _ => Err(ProjectError::UnknownStatus(s.to_string())),
        }
    }
}

/// A budget category for the build-out project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCategory {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Budgeted total for the category.
    pub projected_total: Decimal,
    /// Presentation order, ascending.
    pub sort_order: i32,
}

/// An actual expense recorded against a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Cost item ID.
    pub id: CostItemId,
    /// Owning category.
    pub category_id: CategoryId,
    /// What was bought.
    pub description: String,
    /// Who it was bought from.
    pub vendor: Option<String>,
    /// Amount spent or committed.
    pub amount: Decimal,
    /// Payment status.
    pub status: CostStatus,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCostCategory {
    /// Display name.
    pub name: String,
    /// Budgeted total.
    #[serde(default)]
    pub projected_total: Decimal,
    /// Presentation order.
    #[serde(default)]
    pub sort_order: i32,
}

/// Input for creating a cost item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCostItem {
    /// Owning category.
    pub category_id: CategoryId,
    /// What was bought.
    pub description: String,
    /// Who it was bought from.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Amount.
    pub amount: Decimal,
    /// Payment status, `planned` when omitted.
    #[serde(default)]
    pub status: CostStatus,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Explicit partial update for a category; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryUpdate {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New budgeted total.
    #[serde(default)]
    pub projected_total: Option<Decimal>,
    /// New presentation order.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Explicit partial update for a cost item.
///
/// `None` leaves a field untouched. For nullable fields `Some(None)` (a JSON
/// `null`) clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CostItemUpdate {
    /// Move the item to another category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New vendor.
    #[serde(default, deserialize_with = "double_option")]
    pub vendor: Option<Option<String>>,
    /// New amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// New status.
    #[serde(default)]
    pub status: Option<CostStatus>,
    /// New date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// New notes.
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Distinguishes an explicit `null` from an absent field.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CostCategory {
    /// Checks the category's own fields.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or a projected total outside
    /// `[0, MAX_MONEY_AMOUNT]`.
    pub fn validate(&self) -> Result<(), ProjectError> {
        validate_category_fields(&self.name, self.projected_total)
    }
}

impl NewCostCategory {
    /// Checks the input before it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or a projected total outside
    /// `[0, MAX_MONEY_AMOUNT]`.
    pub fn validate(&self) -> Result<(), ProjectError> {
        validate_category_fields(&self.name, self.projected_total)
    }

    /// Builds the stored record under `id`.
    #[must_use]
    pub fn into_category(self, id: CategoryId) -> CostCategory {
        CostCategory {
            id,
            name: self.name.trim().to_string(),
            projected_total: self.projected_total,
            sort_order: self.sort_order,
        }
    }
}

impl CategoryUpdate {
    /// Merges the update over `prior`, returning the new record.
    #[must_use]
    pub fn apply_to(&self, prior: &CostCategory) -> CostCategory {
        CostCategory {
            id: prior.id,
            name: self
                .name
                .as_ref()
                .map_or_else(|| prior.name.clone(), |name| name.trim().to_string()),
            projected_total: self.projected_total.unwrap_or(prior.projected_total),
            sort_order: self.sort_order.unwrap_or(prior.sort_order),
        }
    }

    /// Whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.projected_total.is_none() && self.sort_order.is_none()
    }
}

impl CostItem {
    /// Checks the item's own fields.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank description or an amount outside
    /// `[0, MAX_MONEY_AMOUNT]`.
    pub fn validate(&self) -> Result<(), ProjectError> {
        validate_item_fields(&self.description, self.amount)
    }
}

impl NewCostItem {
    /// Checks the input before it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank description or an amount outside
    /// `[0, MAX_MONEY_AMOUNT]`.
    pub fn validate(&self) -> Result<(), ProjectError> {
        validate_item_fields(&self.description, self.amount)
    }

    /// Builds the stored record under `id`.
    #[must_use]
    pub fn into_item(self, id: CostItemId) -> CostItem {
        CostItem {
            id,
            category_id: self.category_id,
            description: self.description.trim().to_string(),
            vendor: self.vendor,
            amount: self.amount,
            status: self.status,
            date: self.date,
            notes: self.notes,
        }
    }
}

impl CostItemUpdate {
    /// Merges the update over `prior`, returning the new record.
    #[must_use]
    pub fn apply_to(&self, prior: &CostItem) -> CostItem {
        CostItem {
            id: prior.id,
            category_id: self.category_id.unwrap_or(prior.category_id),
            description: self
                .description
                .as_ref()
                .map_or_else(|| prior.description.clone(), |d| d.trim().to_string()),
            vendor: self.vendor.clone().unwrap_or_else(|| prior.vendor.clone()),
            amount: self.amount.unwrap_or(prior.amount),
            status: self.status.unwrap_or(prior.status),
            date: self.date.unwrap_or(prior.date),
            notes: self.notes.clone().unwrap_or_else(|| prior.notes.clone()),
        }
    }
}

fn validate_category_fields(name: &str, projected_total: Decimal) -> Result<(), ProjectError> {
    if name.trim().is_empty() {
        return Err(ProjectError::EmptyName);
    }
    check_amount("projected_total", projected_total)
}

fn validate_item_fields(description: &str, amount: Decimal) -> Result<(), ProjectError> {
    if description.trim().is_empty() {
        return Err(ProjectError::EmptyDescription);
    }
    check_amount("amount", amount)
}

fn check_amount(field: &'static str, value: Decimal) -> Result<(), ProjectError> {
    if value < Decimal::ZERO {
        return Err(ProjectError::NegativeAmount { field, value });
    }
    if value > MAX_MONEY_AMOUNT {
        return Err(ProjectError::AboveMaximum {
            field,
            value,
            max: MAX_MONEY_AMOUNT,
        });
    }
    Ok(())
}

/// Budget versus actual for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCategorySummary {
    /// The category.
    pub category: CostCategory,
    /// Sum of the category's item amounts.
    pub actual_total: Decimal,
    /// Projected minus actual; negative on overspend.
    pub variance: Decimal,
    /// Variance over projected total, zero when nothing was budgeted.
    #[serde(with = "rust_decimal::serde::float")]
    pub variance_pct: Decimal,
}

/// Budget versus actual for the whole project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCostsSummary {
    /// Sum of every category's projected total.
    pub total_projected: Decimal,
    /// Sum of every category's actual total.
    pub total_actual: Decimal,
    /// Projected minus actual.
    pub remaining_budget: Decimal,
    /// Projected minus actual; always equal to `remaining_budget`.
    pub variance: Decimal,
    /// Per-category rows in presentation order.
    pub categories: Vec<CostCategorySummary>,
}
