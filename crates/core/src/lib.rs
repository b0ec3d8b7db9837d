//! Core business logic for SalonOps.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function here is synchronous, side-effect free, and holds no state
//! between calls, so it can be invoked concurrently without coordination.
//!
//! # Modules
//!
//! - `forecast` - Monthly profit-and-loss projection from operational assumptions
//! - `fixed_costs` - Monthly fixed-cost configuration and explicit overrides
//! - `project` - Build-out budget versus actual spend aggregation
//! - `limits` - Upper bounds of the accepted input domain

pub mod fixed_costs;
pub mod forecast;
pub mod limits;
pub mod project;

pub use fixed_costs::{FixedCostLine, FixedCostsConfiguration};
pub use forecast::{FinancialSnapshot, ForecastEngine, OperationalInputs, RiskFlags, forecast};
pub use project::{ProjectCostsSummary, ProjectSummaryAggregator, summarize};
