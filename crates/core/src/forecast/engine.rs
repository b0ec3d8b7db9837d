//! Forecast engine turning operational assumptions into a P&L snapshot.

use rust_decimal::Decimal;

use super::thresholds::RiskThresholds;
use super::types::{
    CostOfSales, FinancialSnapshot, OperationalInputs, RatioMetrics, RevenueBreakdown,
    VariableExpenses,
};
use crate::fixed_costs::FixedCostsConfiguration;
use salonops_shared::types::{round_currency, round_ratio};

/// Engine for monthly profit-and-loss projections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastEngine {
    thresholds: RiskThresholds,
}

/// Unrounded intermediate values of one projection.
struct Projection {
    service_revenue: Decimal,
    total_revenue: Decimal,
    base_labor: Decimal,
    labor_tax: Decimal,
    total_labor: Decimal,
    retail_cogs: Decimal,
    party_cogs: Decimal,
    total_cogs: Decimal,
    gross_profit: Decimal,
    royalties: Decimal,
    cc_fees: Decimal,
    ad_fund: Decimal,
    total_variable: Decimal,
    total_fixed: Decimal,
    net_profit: Decimal,
}

impl ForecastEngine {
    /// Creates an engine using the built-in risk thresholds.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_thresholds(RiskThresholds::DEFAULT)
    }

    /// Creates an engine with custom risk thresholds.
    #[must_use]
    pub const fn with_thresholds(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Produces the snapshot for one set of inputs and fixed costs.
    ///
    /// Arithmetic runs at full precision; each currency field is rounded to
    /// cents independently at the end and each ratio to four places. Ratios
    /// are zero when total revenue is zero.
    #[must_use]
    pub fn forecast(
        &self,
        inputs: &OperationalInputs,
        fixed_costs: &FixedCostsConfiguration,
    ) -> FinancialSnapshot {
        let p = Self::project(inputs, fixed_costs);

        let (gross_margin, net_margin, labor_pct) = if p.total_revenue > Decimal::ZERO {
            (
                p.gross_profit / p.total_revenue,
                p.net_profit / p.total_revenue,
                p.total_labor / p.total_revenue,
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        };

        let risk_flags = self.thresholds.evaluate(p.net_profit, labor_pct, net_margin);

        FinancialSnapshot {
            revenue: RevenueBreakdown {
                service_revenue: round_currency(p.service_revenue),
                retail_revenue: round_currency(inputs.retail_sales),
                party_revenue: round_currency(inputs.party_sales),
                total_revenue: round_currency(p.total_revenue),
            },
            cost_of_sales: CostOfSales {
                stylist_labor_cost: round_currency(p.base_labor),
                labor_tax_cost: round_currency(p.labor_tax),
                total_labor_cost: round_currency(p.total_labor),
                retail_cogs: round_currency(p.retail_cogs),
                party_cogs: round_currency(p.party_cogs),
                total_cogs: round_currency(p.total_cogs),
            },
            variable_expenses: VariableExpenses {
                royalties: round_currency(p.royalties),
                cc_fees: round_currency(p.cc_fees),
                ad_fund: round_currency(p.ad_fund),
                total_variable_expenses: round_currency(p.total_variable),
            },
            total_monthly_fixed_costs: round_currency(p.total_fixed),
            fixed_costs: fixed_costs.rounded(),
            total_monthly_costs: round_currency(p.total_cogs + p.total_variable + p.total_fixed),
            gross_profit: round_currency(p.gross_profit),
            net_profit: round_currency(p.net_profit),
            ratios: RatioMetrics {
                gross_profit_margin: round_ratio(gross_margin),
                net_profit_margin: round_ratio(net_margin),
                labor_pct_of_sales: round_ratio(labor_pct),
            },
            risk_flags,
        }
    }

    fn project(inputs: &OperationalInputs, fixed_costs: &FixedCostsConfiguration) -> Projection {
        let days = Decimal::from(inputs.operating_days_per_month);

        let service_revenue = Decimal::from(inputs.haircuts_per_day) * inputs.price_per_cut * days;
        let total_revenue = service_revenue + inputs.retail_sales + inputs.party_sales;

        // Hours are per stylist.
        let base_labor = Decimal::from(inputs.num_stylists)
            * inputs.stylist_hours_per_day
            * inputs.stylist_hourly_rate
            * days;
        let labor_tax = base_labor * inputs.stylist_payroll_tax_pct;
        let total_labor = base_labor + labor_tax;

        let retail_cogs = inputs.retail_sales * inputs.retail_cogs_pct;
        let party_cogs = inputs.party_sales * inputs.party_cogs_pct;
        let total_cogs = total_labor + retail_cogs + party_cogs;

        let gross_profit = total_revenue - total_cogs;

        // Charged on total revenue, not gross profit.
        let royalties = total_revenue * inputs.royalties_pct;
        let cc_fees = total_revenue * inputs.cc_fees_pct;
        let ad_fund = total_revenue * inputs.ad_fund_pct;
        let total_variable = royalties + cc_fees + ad_fund;

        let total_fixed = fixed_costs.total_monthly_fixed_costs();
        let net_profit = gross_profit - total_variable - total_fixed;

        Projection {
            service_revenue,
            total_revenue,
            base_labor,
            labor_tax,
            total_labor,
            retail_cogs,
            party_cogs,
            total_cogs,
            gross_profit,
            royalties,
            cc_fees,
            ad_fund,
            total_variable,
            total_fixed,
            net_profit,
        }
    }
}

/// Runs the forecast with the built-in risk thresholds.
#[must_use]
pub fn forecast(inputs: &OperationalInputs, fixed_costs: &FixedCostsConfiguration) -> FinancialSnapshot {
    ForecastEngine::new().forecast(inputs, fixed_costs)
}
