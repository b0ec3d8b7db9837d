//! Golden-value and property-based tests for the forecast engine.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::{ForecastEngine, forecast};
use super::thresholds::RiskThresholds;
use super::types::{OperationalInputs, RiskFlags};
use super::validation::validate_inputs;
use crate::fixed_costs::{FixedCostLine, FixedCostsConfiguration};
use crate::limits::{
    MAX_HAIRCUTS_PER_DAY, MAX_HOURS_PER_DAY, MAX_MONEY_AMOUNT, MAX_OPERATING_DAYS, MAX_STYLISTS,
};

/// Fixed costs from the franchise reference spreadsheet.
fn reference_fixed_costs() -> FixedCostsConfiguration {
    FixedCostsConfiguration {
        rent: dec!(6286.70),
        utilities: dec!(800.00),
        telephone: dec!(250.00),
        maintenance: dec!(300.00),
        advertising: dec!(1200.00),
        insurance: dec!(200.00),
        professional_fees: dec!(300.00),
        receptionist_labor: dec!(1700.00),
        receptionist_payroll_tax: dec!(170.00),
        travel: dec!(50.00),
        meals_entertainment: dec!(100.00),
        training: dec!(50.00),
        taxes_licenses: dec!(150.00),
        debt_service: dec!(2600.00),
        postage: dec!(25.00),
        pos_system: dec!(300.00),
        donations_promotional: dec!(150.00),
        store_supplies: dec!(100.00),
        office_supplies: dec!(100.00),
        ..FixedCostsConfiguration::default()
    }
}

fn idle_shop_inputs() -> OperationalInputs {
    OperationalInputs {
        haircuts_per_day: 0,
        stylist_hours_per_day: dec!(8),
        stylist_hourly_rate: dec!(20.00),
        retail_sales: Decimal::ZERO,
        party_sales: Decimal::ZERO,
        ..OperationalInputs::default()
    }
}

#[test]
fn test_reference_scenario_golden_values() {
    let snapshot = forecast(&OperationalInputs::REFERENCE, &reference_fixed_costs());

    assert_eq!(snapshot.revenue.service_revenue, dec!(20460.00));
    assert_eq!(snapshot.revenue.retail_revenue, dec!(2000.00));
    assert_eq!(snapshot.revenue.total_revenue, dec!(22460.00));

    assert_eq!(snapshot.cost_of_sales.stylist_labor_cost, dec!(11220.00));
    assert_eq!(snapshot.cost_of_sales.labor_tax_cost, dec!(1122.00));
    assert_eq!(snapshot.cost_of_sales.total_labor_cost, dec!(12342.00));
    assert_eq!(snapshot.cost_of_sales.retail_cogs, dec!(1000.00));
    assert_eq!(snapshot.cost_of_sales.total_cogs, dec!(13342.00));
    assert_eq!(snapshot.gross_profit, dec!(9118.00));

    // 22460 * (0.05 + 0.02 + 0.02)
    assert_eq!(snapshot.variable_expenses.royalties, dec!(1123.00));
    assert_eq!(snapshot.variable_expenses.cc_fees, dec!(449.20));
    assert_eq!(snapshot.variable_expenses.ad_fund, dec!(449.20));
    assert_eq!(snapshot.variable_expenses.total_variable_expenses, dec!(2021.40));

    assert_eq!(snapshot.total_monthly_fixed_costs, dec!(14831.70));
    assert_eq!(snapshot.total_monthly_costs, dec!(30195.10));
    assert_eq!(snapshot.net_profit, dec!(-7735.10));

    assert_eq!(snapshot.ratios.gross_profit_margin, dec!(0.4060));
    assert_eq!(snapshot.ratios.net_profit_margin, dec!(-0.3444));
    assert_eq!(snapshot.ratios.labor_pct_of_sales, dec!(0.5495));

    assert_eq!(
        snapshot.risk_flags,
        RiskFlags {
            negative_cash_flow: true,
            labor_too_high: true,
            margin_too_low: true,
        }
    );
}

#[test]
fn test_zero_revenue_golden_values() {
    let fixed = FixedCostsConfiguration {
        rent: dec!(1000.00),
        ..FixedCostsConfiguration::default()
    };
    let snapshot = forecast(&idle_shop_inputs(), &fixed);

    assert_eq!(snapshot.revenue.total_revenue, Decimal::ZERO);
    // 8h * $20 * 30 days = 4800, plus 10% payroll tax
    assert_eq!(snapshot.cost_of_sales.total_labor_cost, dec!(5280.00));
    assert_eq!(snapshot.net_profit, dec!(-6280.00));
    assert_eq!(
        snapshot.net_profit,
        -(snapshot.cost_of_sales.total_labor_cost + snapshot.total_monthly_fixed_costs)
    );

    assert_eq!(snapshot.ratios.gross_profit_margin, Decimal::ZERO);
    assert_eq!(snapshot.ratios.net_profit_margin, Decimal::ZERO);
    assert_eq!(snapshot.ratios.labor_pct_of_sales, Decimal::ZERO);
    assert!(snapshot.risk_flags.negative_cash_flow);
    assert!(!snapshot.risk_flags.labor_too_high);
    assert!(snapshot.risk_flags.margin_too_low);
}

#[rstest]
#[case(1, dec!(11220.00))]
#[case(2, dec!(22440.00))]
#[case(3, dec!(33660.00))]
fn test_labor_scales_with_stylists(#[case] num_stylists: u32, #[case] expected: Decimal) {
    let inputs = OperationalInputs {
        num_stylists,
        ..OperationalInputs::default()
    };
    let snapshot = forecast(&inputs, &FixedCostsConfiguration::default());
    assert_eq!(snapshot.cost_of_sales.stylist_labor_cost, expected);
}

#[test]
fn test_healthy_shop_raises_no_flags() {
    let inputs = OperationalInputs {
        haircuts_per_day: 60,
        stylist_hours_per_day: dec!(8),
        num_stylists: 2,
        ..OperationalInputs::default()
    };
    let snapshot = forecast(&inputs, &reference_fixed_costs());

    // revenue 57800, labor 11616, net margin ~0.385
    assert_eq!(snapshot.revenue.total_revenue, dec!(57800.00));
    assert_eq!(snapshot.cost_of_sales.total_labor_cost, dec!(11616.00));
    assert!(!snapshot.risk_flags.any());
}

#[test]
fn test_custom_thresholds_change_flags_only() {
    let inputs = OperationalInputs {
        haircuts_per_day: 60,
        stylist_hours_per_day: dec!(8),
        num_stylists: 2,
        ..OperationalInputs::default()
    };
    let strict = ForecastEngine::with_thresholds(
        RiskThresholds::DEFAULT.with_overrides(Some(dec!(0.10)), Some(dec!(0.50))),
    );

    let default_snapshot = forecast(&inputs, &reference_fixed_costs());
    let strict_snapshot = strict.forecast(&inputs, &reference_fixed_costs());

    assert!(strict_snapshot.risk_flags.labor_too_high);
    assert!(strict_snapshot.risk_flags.margin_too_low);
    assert_eq!(strict_snapshot.net_profit, default_snapshot.net_profit);
    assert_eq!(strict_snapshot.ratios, default_snapshot.ratios);
}

#[test]
fn test_fractional_cents_round_half_up_per_field() {
    let inputs = OperationalInputs {
        haircuts_per_day: 1,
        price_per_cut: dec!(10.005),
        operating_days_per_month: 1,
        retail_sales: dec!(0.005),
        party_sales: Decimal::ZERO,
        ..OperationalInputs::default()
    };
    let snapshot = forecast(&inputs, &FixedCostsConfiguration::default());

    assert_eq!(snapshot.revenue.service_revenue, dec!(10.01));
    assert_eq!(snapshot.revenue.retail_revenue, dec!(0.01));
    // 10.01 computed from 10.010 unrounded, not 10.01 + 0.01
    assert_eq!(snapshot.revenue.total_revenue, dec!(10.01));
}

#[test]
fn test_serializes_currency_as_text_and_ratios_as_numbers() {
    let snapshot = forecast(&OperationalInputs::REFERENCE, &reference_fixed_costs());
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["total_revenue"], "22460.00");
    assert_eq!(json["net_profit"], "-7735.10");
    assert_eq!(json["party_revenue"], "0.00");
    assert_eq!(json["fixed_costs"]["rent"], "6286.70");
    assert_eq!(json["fixed_costs"]["software"], "0.00");
    assert!(json["net_profit_margin"].is_number());
    assert_eq!(json["net_profit_margin"].to_string(), "-0.3444");
    assert_eq!(json["risk_flags"]["labor_too_high"], true);
}

#[test]
fn test_inputs_default_missing_fields() {
    let inputs: OperationalInputs = serde_json::from_str(
        r#"{"haircuts_per_day": 0, "stylist_hours_per_day": 8, "stylist_hourly_rate": 20,
            "retail_sales": 0, "party_sales": 0}"#,
    )
    .unwrap();

    assert_eq!(inputs.num_stylists, 1);
    assert_eq!(inputs.stylist_payroll_tax_pct, dec!(0.10));
    assert_eq!(inputs.operating_days_per_month, 30);
    assert_eq!(inputs, idle_shop_inputs());
}

#[test]
fn test_domain_ceiling_forecast_stays_exact() {
    let inputs = OperationalInputs {
        haircuts_per_day: MAX_HAIRCUTS_PER_DAY,
        price_per_cut: MAX_MONEY_AMOUNT,
        stylist_hours_per_day: MAX_HOURS_PER_DAY,
        stylist_hourly_rate: MAX_MONEY_AMOUNT,
        operating_days_per_month: MAX_OPERATING_DAYS,
        num_stylists: MAX_STYLISTS,
        retail_sales: MAX_MONEY_AMOUNT,
        party_sales: MAX_MONEY_AMOUNT,
        stylist_payroll_tax_pct: Decimal::ONE,
        retail_cogs_pct: Decimal::ONE,
        party_cogs_pct: Decimal::ONE,
        royalties_pct: Decimal::ONE,
        cc_fees_pct: Decimal::ONE,
        ad_fund_pct: Decimal::ONE,
    };
    let overrides = FixedCostLine::ALL
        .iter()
        .map(|line| (*line, MAX_MONEY_AMOUNT))
        .collect();
    let fixed = FixedCostsConfiguration::default().with_overrides(&overrides);
    assert_eq!(validate_inputs(&inputs), Ok(()));
    assert_eq!(fixed.validate(), Ok(()));

    let s = forecast(&inputs, &fixed);

    assert_eq!(s.revenue.service_revenue, dec!(310000000000000.00));
    assert_eq!(s.cost_of_sales.stylist_labor_cost, dec!(744000000000000.00));
    assert_eq!(s.total_monthly_fixed_costs, dec!(21000000000.00));
    let net = s.gross_profit
        - s.variable_expenses.total_variable_expenses
        - s.total_monthly_fixed_costs;
    assert!((s.net_profit - net).abs() <= dec!(0.03));
    assert!(s.risk_flags.negative_cash_flow);
}

// ============================================================================
// Strategy Generators
// ============================================================================

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..5_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=100).prop_map(|pct| Decimal::new(pct, 2))
}

prop_compose! {
    fn operational_inputs()(
        haircuts_per_day in 0u32..200,
        price_per_cut in money(),
        stylist_hours_per_day in (0i64..240).prop_map(|tenths| Decimal::new(tenths, 1)),
        stylist_hourly_rate in money(),
        operating_days_per_month in 0u32..=31,
        num_stylists in 1u32..20,
        retail_sales in money(),
        party_sales in money(),
        rates in prop::array::uniform6(rate()),
    ) -> OperationalInputs {
        OperationalInputs {
            haircuts_per_day,
            price_per_cut,
            stylist_hours_per_day,
            stylist_hourly_rate,
            operating_days_per_month,
            num_stylists,
            retail_sales,
            party_sales,
            stylist_payroll_tax_pct: rates[0],
            retail_cogs_pct: rates[1],
            party_cogs_pct: rates[2],
            royalties_pct: rates[3],
            cc_fees_pct: rates[4],
            ad_fund_pct: rates[5],
        }
    }
}

prop_compose! {
    fn fixed_costs()(rent in money(), debt_service in money(), other in money()) -> FixedCostsConfiguration {
        FixedCostsConfiguration {
            rent,
            debt_service,
            other,
            ..FixedCostsConfiguration::default()
        }
    }
}

proptest! {
    /// Revenue streams add up to total revenue exactly.
    #[test]
    fn test_revenue_additivity(inputs in operational_inputs(), fixed in fixed_costs()) {
        let s = forecast(&inputs, &fixed);
        prop_assert_eq!(
            s.revenue.total_revenue,
            s.revenue.service_revenue + s.revenue.retail_revenue + s.revenue.party_revenue
        );
    }

    /// Gross and net profit follow the accounting identities within a cent per term.
    #[test]
    fn test_accounting_identity(inputs in operational_inputs(), fixed in fixed_costs()) {
        let s = forecast(&inputs, &fixed);
        let cent = dec!(0.01);

        let gross = s.revenue.total_revenue - s.cost_of_sales.total_cogs;
        prop_assert!((s.gross_profit - gross).abs() <= cent * Decimal::TWO);

        let net = s.gross_profit
            - s.variable_expenses.total_variable_expenses
            - s.total_monthly_fixed_costs;
        prop_assert!((s.net_profit - net).abs() <= cent * Decimal::from(3));

        prop_assert_eq!(s.total_monthly_fixed_costs, fixed.total_monthly_fixed_costs());
    }

    /// Zero revenue leaves labor and fixed costs as the whole loss.
    #[test]
    fn test_zero_revenue_loss(inputs in operational_inputs(), fixed in fixed_costs()) {
        let inputs = OperationalInputs {
            haircuts_per_day: 0,
            retail_sales: Decimal::ZERO,
            party_sales: Decimal::ZERO,
            ..inputs
        };
        let s = forecast(&inputs, &fixed);

        prop_assert_eq!(s.revenue.total_revenue, Decimal::ZERO);
        prop_assert!(
            (s.net_profit + s.cost_of_sales.total_labor_cost + s.total_monthly_fixed_costs).abs()
                <= dec!(0.01)
        );
        prop_assert_eq!(s.ratios.net_profit_margin, Decimal::ZERO);
        prop_assert_eq!(s.ratios.labor_pct_of_sales, Decimal::ZERO);
    }

    /// Identical inputs yield identical snapshots.
    #[test]
    fn test_determinism(inputs in operational_inputs(), fixed in fixed_costs()) {
        let first = forecast(&inputs, &fixed);
        let second = forecast(&inputs.clone(), &fixed.clone());
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    /// Every currency output carries exactly two decimal places.
    #[test]
    fn test_currency_fields_have_two_places(inputs in operational_inputs(), fixed in fixed_costs()) {
        let s = forecast(&inputs, &fixed);
        for value in [
            s.revenue.total_revenue,
            s.cost_of_sales.total_cogs,
            s.variable_expenses.total_variable_expenses,
            s.gross_profit,
            s.net_profit,
            s.total_monthly_costs,
        ] {
            prop_assert_eq!(value.scale(), 2);
        }
        prop_assert!(s.ratios.gross_profit_margin.scale() == 4);
    }
}
