//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! They take and return `salonops-core` domain types.

pub mod category;
pub mod cost_item;
pub mod error;
pub mod fixed_costs;

pub use category::CategoryRepository;
pub use cost_item::{CostItemFilter, CostItemRepository};
pub use error::RepositoryError;
pub use fixed_costs::FixedCostsRepository;
