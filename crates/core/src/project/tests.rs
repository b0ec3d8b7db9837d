//! Tests for the project cost roll-up and record merging.

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregator::{orphaned_items, summarize};
use super::error::ProjectError;
use super::types::{
    CategoryUpdate, CostCategory, CostItem, CostItemUpdate, CostStatus, NewCostCategory,
    NewCostItem,
};
use crate::limits::MAX_MONEY_AMOUNT;
use salonops_shared::types::{CategoryId, CostItemId};

fn category(name: &str, projected_total: Decimal, sort_order: i32) -> CostCategory {
    CostCategory {
        id: CategoryId::new(),
        name: name.to_string(),
        projected_total,
        sort_order,
    }
}

fn item(category_id: CategoryId, amount: Decimal) -> CostItem {
    CostItem {
        id: CostItemId::new(),
        category_id,
        description: "Styling chairs".to_string(),
        vendor: Some("Salon Supply Co".to_string()),
        amount,
        status: CostStatus::Paid,
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        notes: None,
    }
}

#[test]
fn test_build_out_example() {
    let construction = category("Construction", dec!(50000), 1);
    let equipment = category("Equipment", dec!(20000), 2);
    let items = vec![
        item(construction.id, dec!(30000)),
        item(construction.id, dec!(25000)),
        item(equipment.id, dec!(12000)),
    ];

    let summary = summarize(&[equipment.clone(), construction.clone()], &items);

    assert_eq!(summary.categories.len(), 2);
    let first = &summary.categories[0];
    assert_eq!(first.category.name, "Construction");
    assert_eq!(first.actual_total, dec!(55000));
    assert_eq!(first.variance, dec!(-5000));
    assert_eq!(first.variance_pct, dec!(-0.1));

    let second = &summary.categories[1];
    assert_eq!(second.category.name, "Equipment");
    assert_eq!(second.actual_total, dec!(12000));
    assert_eq!(second.variance, dec!(8000));
    assert_eq!(second.variance_pct, dec!(0.4));

    assert_eq!(summary.total_projected, dec!(70000));
    assert_eq!(summary.total_actual, dec!(67000));
    assert_eq!(summary.remaining_budget, dec!(3000));
    assert_eq!(summary.variance, dec!(3000));
}

#[test]
fn test_zero_budget_category_reports_zero_pct() {
    let signage = category("Signage", Decimal::ZERO, 1);
    let summary = summarize(&[signage.clone()], &[item(signage.id, dec!(500))]);

    let row = &summary.categories[0];
    assert_eq!(row.actual_total, dec!(500));
    assert_eq!(row.variance, dec!(-500));
    assert_eq!(row.variance_pct, Decimal::ZERO);
}

#[test]
fn test_category_without_items() {
    let permits = category("Permits", dec!(1200), 1);
    let summary = summarize(&[permits], &[]);

    let row = &summary.categories[0];
    assert_eq!(row.actual_total, Decimal::ZERO);
    assert_eq!(row.variance, dec!(1200));
    assert_eq!(row.variance_pct, dec!(1));
}

#[test]
fn test_empty_project() {
    let summary = summarize(&[], &[]);
    assert!(summary.categories.is_empty());
    assert_eq!(summary.total_projected, Decimal::ZERO);
    assert_eq!(summary.total_actual, Decimal::ZERO);
    assert_eq!(summary.remaining_budget, Decimal::ZERO);
}

#[test]
fn test_sort_order_ties_keep_input_order() {
    let a = category("A", dec!(1), 2);
    let b = category("B", dec!(1), 1);
    let c = category("C", dec!(1), 2);
    let d = category("D", dec!(1), 1);

    let summary = summarize(&[a, b, c, d], &[]);
    let names: Vec<&str> = summary
        .categories
        .iter()
        .map(|row| row.category.name.as_str())
        .collect();
    assert_eq!(names, ["B", "D", "A", "C"]);
}

#[test]
fn test_orphaned_items_are_excluded_and_reported() {
    let kept = category("Furniture", dec!(8000), 1);
    let dropped = CategoryId::new();
    let items = vec![item(kept.id, dec!(3000)), item(dropped, dec!(999))];

    let summary = summarize(std::slice::from_ref(&kept), &items);
    assert_eq!(summary.total_actual, dec!(3000));

    let orphans = orphaned_items(&[kept], &items);
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].category_id, dropped);
}

#[test]
fn test_variance_pct_rounds_to_four_places() {
    let decor = category("Decor", dec!(3000), 1);
    let summary = summarize(&[decor.clone()], &[item(decor.id, dec!(1000))]);
    assert_eq!(summary.categories[0].variance_pct.to_string(), "0.6667");
}

#[test]
fn test_currency_fields_round_to_cents() {
    let decor = category("Decor", dec!(100.005), 1);
    let items = vec![item(decor.id, dec!(0.004)), item(decor.id, dec!(0.004))];

    let summary = summarize(&[decor.clone()], &items);

    let row = &summary.categories[0];
    assert_eq!(row.actual_total.to_string(), "0.01");
    assert_eq!(row.variance.to_string(), "100.00");
    assert_eq!(summary.total_projected.to_string(), "100.01");
    assert_eq!(summary.total_actual.to_string(), "0.01");
    assert_eq!(summary.remaining_budget.to_string(), "100.00");
    assert_eq!(summary.variance, summary.remaining_budget);
}

#[test]
fn test_amounts_above_domain_rejected() {
    let category = NewCostCategory {
        name: "Construction".to_string(),
        projected_total: MAX_MONEY_AMOUNT + dec!(0.01),
        sort_order: 0,
    };
    assert!(matches!(
        category.validate(),
        Err(ProjectError::AboveMaximum { field: "projected_total", .. })
    ));

    let at_cap = NewCostCategory {
        projected_total: MAX_MONEY_AMOUNT,
        ..category
    };
    assert_eq!(at_cap.validate(), Ok(()));

    let huge = NewCostItem {
        category_id: CategoryId::new(),
        description: "Shampoo bowls".to_string(),
        vendor: None,
        amount: Decimal::MAX,
        status: CostStatus::Planned,
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        notes: None,
    };
    assert!(matches!(
        huge.validate(),
        Err(ProjectError::AboveMaximum { field: "amount", .. })
    ));
}

#[test]
fn test_summary_at_domain_ceiling() {
    let categories: Vec<CostCategory> = (0..50)
        .map(|i| category(&format!("C{i}"), MAX_MONEY_AMOUNT, i))
        .collect();
    let items: Vec<CostItem> = categories
        .iter()
        .flat_map(|c| (0..20).map(|_| item(c.id, MAX_MONEY_AMOUNT)))
        .collect();

    let summary = summarize(&categories, &items);

    assert_eq!(summary.total_projected, MAX_MONEY_AMOUNT * dec!(50));
    assert_eq!(summary.total_actual, MAX_MONEY_AMOUNT * dec!(1000));
    assert_eq!(summary.categories[0].variance_pct, dec!(-19));
}

#[test]
fn test_summary_serialization() {
    let equipment = category("Equipment", dec!(20000), 2);
    let summary = summarize(&[equipment.clone()], &[item(equipment.id, dec!(12000))]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_projected"], "20000.00");
    assert_eq!(json["remaining_budget"], "8000.00");
    assert_eq!(json["categories"][0]["category"]["name"], "Equipment");
    assert_eq!(json["categories"][0]["variance_pct"], 0.4);
}

#[rstest]
#[case("planned", CostStatus::Planned)]
#[case("Committed", CostStatus::Committed)]
#[case("PAID", CostStatus::Paid)]
fn test_status_parse(#[case] raw: &str, #[case] expected: CostStatus) {
    assert_eq!(raw.parse::<CostStatus>().unwrap(), expected);
}

#[test]
fn test_status_parse_unknown() {
    assert_eq!(
        "refunded".parse::<CostStatus>(),
        Err(ProjectError::UnknownStatus("refunded".to_string()))
    );
}

#[test]
fn test_new_category_validation() {
    let blank = NewCostCategory {
        name: "   ".to_string(),
        projected_total: dec!(10),
        sort_order: 0,
    };
    assert_eq!(blank.validate(), Err(ProjectError::EmptyName));

    let negative = NewCostCategory {
        name: "Plumbing".to_string(),
        projected_total: dec!(-1),
        sort_order: 0,
    };
    assert!(matches!(
        negative.validate(),
        Err(ProjectError::NegativeAmount { field: "projected_total", .. })
    ));
}

#[test]
fn test_new_item_defaults_from_json() {
    let category_id = CategoryId::new();
    let json = serde_json::json!({
        "category_id": category_id,
        "description": "  Shampoo bowls ",
        "amount": "1800.50",
        "date": "2024-02-01"
    });
    let new_item: NewCostItem = serde_json::from_value(json).unwrap();
    assert_eq!(new_item.status, CostStatus::Planned);
    assert!(new_item.vendor.is_none());
    assert!(new_item.validate().is_ok());

    let stored = new_item.into_item(CostItemId::new());
    assert_eq!(stored.description, "Shampoo bowls");
    assert_eq!(stored.amount, dec!(1800.50));
}

#[test]
fn test_category_update_keeps_unset_fields() {
    let prior = category("Construction", dec!(50000), 1);
    let update = CategoryUpdate {
        projected_total: Some(dec!(55000)),
        ..CategoryUpdate::default()
    };

    let merged = update.apply_to(&prior);
    assert_eq!(merged.id, prior.id);
    assert_eq!(merged.name, "Construction");
    assert_eq!(merged.projected_total, dec!(55000));
    assert_eq!(merged.sort_order, 1);
    assert!(CategoryUpdate::default().is_empty());
}

#[test]
fn test_item_update_distinguishes_null_from_absent() {
    let prior = CostItem {
        notes: Some("deposit".to_string()),
        ..item(CategoryId::new(), dec!(100))
    };

    let clear_vendor: CostItemUpdate =
        serde_json::from_value(serde_json::json!({ "vendor": null })).unwrap();
    let merged = clear_vendor.apply_to(&prior);
    assert_eq!(merged.vendor, None);
    assert_eq!(merged.notes, Some("deposit".to_string()));

    let change_status: CostItemUpdate =
        serde_json::from_value(serde_json::json!({ "status": "committed", "amount": "250" }))
            .unwrap();
    let merged = change_status.apply_to(&prior);
    assert_eq!(merged.status, CostStatus::Committed);
    assert_eq!(merged.amount, dec!(250));
    assert_eq!(merged.vendor, prior.vendor);
}

prop_compose! {
    fn arb_amount()(cents in 0i64..10_000_000) -> Decimal {
        Decimal::new(cents, 2)
    }
}

proptest! {
    #[test]
    fn prop_totals_match_category_rows(
        budgets in prop::collection::vec(arb_amount(), 0..8),
        spend in prop::collection::vec((0usize..8, arb_amount()), 0..30),
    ) {
        let categories: Vec<CostCategory> = budgets
            .iter()
            .enumerate()
            .map(|(i, budget)| category(&format!("C{i}"), *budget, i32::try_from(i).unwrap() % 3))
            .collect();
        let items: Vec<CostItem> = spend
            .iter()
            .filter_map(|(idx, amount)| categories.get(*idx).map(|c| item(c.id, *amount)))
            .collect();

        let summary = summarize(&categories, &items);

        let projected: Decimal = summary.categories.iter().map(|r| r.category.projected_total).sum();
        let actual: Decimal = summary.categories.iter().map(|r| r.actual_total).sum();
        let item_total: Decimal = items.iter().map(|i| i.amount).sum();

        prop_assert_eq!(summary.total_projected, projected);
        prop_assert_eq!(summary.total_actual, actual);
        prop_assert_eq!(summary.total_actual, item_total);
        prop_assert_eq!(summary.remaining_budget, summary.variance);
        prop_assert_eq!(summary.remaining_budget, summary.total_projected - summary.total_actual);
        prop_assert!(summary.categories.windows(2).all(|w| w[0].category.sort_order <= w[1].category.sort_order));
    }
}
