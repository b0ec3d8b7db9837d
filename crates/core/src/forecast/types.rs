//! Forecast data types.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::fixed_costs::FixedCostsConfiguration;

/// Operational assumptions for one forecast.
///
/// Rates are fractions (`0.10` for 10%). Fields missing from a request fall
/// back to [`OperationalInputs::REFERENCE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalInputs {
    /// Haircuts performed per operating day, shop-wide.
    pub haircuts_per_day: u32,
    /// Price charged per haircut.
    pub price_per_cut: Decimal,
    /// Paid hours per stylist per operating day.
    pub stylist_hours_per_day: Decimal,
    /// Hourly wage per stylist.
    pub stylist_hourly_rate: Decimal,
    /// Operating days per month.
    pub operating_days_per_month: u32,
    /// Number of stylists on payroll.
    pub num_stylists: u32,
    /// Monthly retail product sales.
    pub retail_sales: Decimal,
    /// Monthly birthday-party sales.
    pub party_sales: Decimal,
    /// Payroll tax rate applied to stylist wages.
    pub stylist_payroll_tax_pct: Decimal,
    /// Cost of goods as a fraction of retail sales.
    pub retail_cogs_pct: Decimal,
    /// Cost of goods as a fraction of party sales.
    pub party_cogs_pct: Decimal,
    /// Franchise royalties as a fraction of total revenue.
    pub royalties_pct: Decimal,
    /// Card-processing fees as a fraction of total revenue.
    pub cc_fees_pct: Decimal,
    /// Advertising-fund contribution as a fraction of total revenue.
    pub ad_fund_pct: Decimal,
}

impl OperationalInputs {
    /// Reference franchise scenario; the single source of input defaults.
    pub const REFERENCE: Self = Self {
        haircuts_per_day: 22,
        price_per_cut: dec!(31.00),
        stylist_hours_per_day: dec!(17),
        stylist_hourly_rate: dec!(22.00),
        operating_days_per_month: 30,
        num_stylists: 1,
        retail_sales: dec!(2000.00),
        party_sales: dec!(0.00),
        stylist_payroll_tax_pct: dec!(0.10),
        retail_cogs_pct: dec!(0.50),
        party_cogs_pct: dec!(0.20),
        royalties_pct: dec!(0.05),
        cc_fees_pct: dec!(0.02),
        ad_fund_pct: dec!(0.02),
    };
}

impl Default for OperationalInputs {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Revenue by stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Haircut revenue.
    pub service_revenue: Decimal,
    /// Retail product revenue.
    pub retail_revenue: Decimal,
    /// Party revenue.
    pub party_revenue: Decimal,
    /// Sum of all streams.
    pub total_revenue: Decimal,
}

/// Stylist labor and cost of goods sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostOfSales {
    /// Stylist wages before payroll tax.
    pub stylist_labor_cost: Decimal,
    /// Payroll tax on stylist wages.
    pub labor_tax_cost: Decimal,
    /// Wages plus payroll tax.
    pub total_labor_cost: Decimal,
    /// Cost of retail goods sold.
    pub retail_cogs: Decimal,
    /// Cost of party goods sold.
    pub party_cogs: Decimal,
    /// Total labor plus retail and party COGS.
    pub total_cogs: Decimal,
}

/// Expenses charged as a percentage of total revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableExpenses {
    /// Franchise royalties.
    pub royalties: Decimal,
    /// Card-processing fees.
    pub cc_fees: Decimal,
    /// Advertising-fund contribution.
    pub ad_fund: Decimal,
    /// Sum of the above.
    pub total_variable_expenses: Decimal,
}

/// Ratios over total revenue, four decimal places, zero when revenue is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioMetrics {
    /// Gross profit / total revenue.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_profit_margin: Decimal,
    /// Net profit / total revenue.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_profit_margin: Decimal,
    /// Total labor cost / total revenue.
    #[serde(with = "rust_decimal::serde::float")]
    pub labor_pct_of_sales: Decimal,
}

/// Threshold-based warnings derived from the snapshot itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlags {
    /// Net profit is negative.
    pub negative_cash_flow: bool,
    /// Labor share of revenue exceeds the configured ceiling.
    pub labor_too_high: bool,
    /// Net margin is under the configured floor.
    pub margin_too_low: bool,
}

impl RiskFlags {
    /// Whether any flag is raised.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.negative_cash_flow || self.labor_too_high || self.margin_too_low
    }
}

/// Full monthly profit-and-loss projection.
///
/// Every currency field is rounded to cents on its own; the nested groups
/// serialize flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Revenue by stream.
    #[serde(flatten)]
    pub revenue: RevenueBreakdown,
    /// Labor and COGS.
    #[serde(flatten)]
    pub cost_of_sales: CostOfSales,
    /// Revenue-proportional expenses.
    #[serde(flatten)]
    pub variable_expenses: VariableExpenses,
    /// Sum of the fixed-cost configuration.
    pub total_monthly_fixed_costs: Decimal,
    /// Fixed-cost lines used for this projection.
    pub fixed_costs: FixedCostsConfiguration,
    /// COGS plus variable and fixed expenses.
    pub total_monthly_costs: Decimal,
    /// Total revenue minus total COGS.
    pub gross_profit: Decimal,
    /// Gross profit minus variable and fixed expenses.
    pub net_profit: Decimal,
    /// Margin ratios.
    #[serde(flatten)]
    pub ratios: RatioMetrics,
    /// Risk indicators.
    pub risk_flags: RiskFlags,
}
