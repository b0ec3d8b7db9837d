//! Monthly profit-and-loss forecasting.

pub mod engine;
pub mod error;
pub mod thresholds;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use engine::{ForecastEngine, forecast};
pub use error::ForecastError;
pub use thresholds::{LABOR_PCT_RISK_THRESHOLD, NET_MARGIN_RISK_THRESHOLD, RiskThresholds};
pub use types::{
    CostOfSales, FinancialSnapshot, OperationalInputs, RatioMetrics, RevenueBreakdown, RiskFlags,
    VariableExpenses,
};
pub use validation::validate_inputs;
