//! `SeaORM` entity definitions.

pub mod cost_categories;
pub mod cost_items;
pub mod fixed_costs;
