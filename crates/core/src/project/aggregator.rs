//! Budget versus actual roll-up across categories.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::types::{CostCategory, CostCategorySummary, CostItem, ProjectCostsSummary};
use salonops_shared::types::{CategoryId, round_currency, round_ratio};

/// Aggregates cost items into per-category and project-wide totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectSummaryAggregator;

impl ProjectSummaryAggregator {
    /// Creates a new aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the project summary.
    ///
    /// Categories come out ordered by `sort_order`, ties keeping their input
    /// order. Currency fields are rounded to cents, each from unrounded sums. Items whose category is not in `categories` are ignored; see
    /// [`orphaned_items`].
    #[must_use]
    pub fn summarize(&self, categories: &[CostCategory], items: &[CostItem]) -> ProjectCostsSummary {
        let mut actuals: HashMap<CategoryId, Decimal> = HashMap::with_capacity(categories.len());
        for item in items {
            *actuals.entry(item.category_id).or_default() += item.amount;
        }

        let mut ordered: Vec<&CostCategory> = categories.iter().collect();
        ordered.sort_by_key(|category| category.sort_order);

        let mut total_projected = Decimal::ZERO;
        let mut total_actual = Decimal::ZERO;
        let rows: Vec<CostCategorySummary> = ordered
            .into_iter()
            .map(|category| {
                let actual_total = actuals.get(&category.id).copied().unwrap_or_default();
                total_projected += category.projected_total;
                total_actual += actual_total;
                Self::category_row(category, actual_total)
            })
            .collect();

        let remaining_budget = round_currency(total_projected - total_actual);

        ProjectCostsSummary {
            total_projected: round_currency(total_projected),
            total_actual: round_currency(total_actual),
            remaining_budget,
            variance: remaining_budget,
            categories: rows,
        }
    }

    fn category_row(category: &CostCategory, actual_total: Decimal) -> CostCategorySummary {
        let variance = category.projected_total - actual_total;

        // Nothing budgeted: report zero instead of dividing by zero.
        let variance_pct = if category.projected_total.is_zero() {
            Decimal::ZERO
        } else {
            round_ratio(variance / category.projected_total)
        };

        CostCategorySummary {
            category: category.clone(),
            actual_total: round_currency(actual_total),
            variance: round_currency(variance),
            variance_pct,
        }
    }
}

/// Builds the project summary with the default aggregator.
#[must_use]
pub fn summarize(categories: &[CostCategory], items: &[CostItem]) -> ProjectCostsSummary {
    ProjectSummaryAggregator::new().summarize(categories, items)
}

/// Items referencing a category that is not in `categories`.
#[must_use]
pub fn orphaned_items<'a>(categories: &[CostCategory], items: &'a [CostItem]) -> Vec<&'a CostItem> {
    let known: HashSet<CategoryId> = categories.iter().map(|category| category.id).collect();
    items
        .iter()
        .filter(|item| !known.contains(&item.category_id))
        .collect()
}
