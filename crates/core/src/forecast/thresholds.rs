//! Risk thresholds applied to a projection's ratios.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::RiskFlags;

/// Labor cost share of total revenue above which `labor_too_high` is raised.
///
/// Salons with stylist labor over 45% of sales rarely cover their fixed costs.
pub const LABOR_PCT_RISK_THRESHOLD: Decimal = dec!(0.45);

/// Net profit margin below which `margin_too_low` is raised.
pub const NET_MARGIN_RISK_THRESHOLD: Decimal = dec!(0.10);

/// Policy thresholds used to derive [`RiskFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Strict upper bound on labor share of revenue.
    pub max_labor_pct: Decimal,
    /// Strict lower bound on net margin.
    pub min_net_margin: Decimal,
}

impl RiskThresholds {
    /// The built-in policy.
    pub const DEFAULT: Self = Self {
        max_labor_pct: LABOR_PCT_RISK_THRESHOLD,
        min_net_margin: NET_MARGIN_RISK_THRESHOLD,
    };

    /// Replaces the thresholds that are `Some`, keeping the rest.
    #[must_use]
    pub fn with_overrides(self, max_labor_pct: Option<Decimal>, min_net_margin: Option<Decimal>) -> Self {
        Self {
            max_labor_pct: max_labor_pct.unwrap_or(self.max_labor_pct),
            min_net_margin: min_net_margin.unwrap_or(self.min_net_margin),
        }
    }

    /// Evaluates the flags for a projection.
    #[must_use]
    pub fn evaluate(&self, net_profit: Decimal, labor_pct: Decimal, net_margin: Decimal) -> RiskFlags {
        RiskFlags {
            negative_cash_flow: net_profit < Decimal::ZERO,
            labor_too_high: labor_pct > self.max_labor_pct,
            margin_too_low: net_margin < self.min_net_margin,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
