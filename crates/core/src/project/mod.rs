//! Build-out budget tracking: categories, spend items, and variance roll-up.

pub mod aggregator;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{ProjectSummaryAggregator, orphaned_items, summarize};
pub use error::ProjectError;
pub use types::{
    CategoryUpdate, CostCategory, CostCategorySummary, CostItem, CostItemUpdate, CostStatus,
    NewCostCategory, NewCostItem, ProjectCostsSummary,
};
