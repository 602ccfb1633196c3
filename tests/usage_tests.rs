// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use kuzu::models::{Budget, BudgetKind, Expense};
use kuzu::store::Store;
use kuzu::usage::{recompute_usage, update_budget_usage};

fn expense(category: &str, amount: i64, date: &str) -> Expense {
    Expense {
        id: 1,
        category: category.to_string(),
        amount: Decimal::from(amount),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        notes: String::new(),
    }
}

fn budget(category: &str, amount: i64) -> Budget {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    Budget {
        id: "1700000000000".to_string(),
        name: category.to_string(),
        kind: BudgetKind::Monthly,
        amount: Decimal::from(amount),
        category: category.to_string(),
        used: Decimal::ZERO,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        start_date: start,
        end_date: BudgetKind::Monthly.end_date(start),
    }
}

#[test]
fn used_equals_sum_of_matching_magnitudes() {
    let expenses = vec![
        expense("Food", -20, "2024-01-01"),
        expense("Food", -5, "2024-01-03"),
        expense("Transportation", -12, "2024-01-02"),
    ];
    let mut budgets = vec![budget("Food", 100), budget("Transportation", 50)];
    recompute_usage(&expenses, &mut budgets);
    assert_eq!(budgets[0].used, Decimal::from(25));
    assert_eq!(budgets[1].used, Decimal::from(12));
}

#[test]
fn food_scenario_used_twenty_remaining_eighty() {
    let expenses = vec![expense("Food", -20, "2024-01-01")];
    let mut budgets = vec![budget("Food", 100)];
    recompute_usage(&expenses, &mut budgets);
    assert_eq!(budgets[0].used, Decimal::from(20));
    assert_eq!(budgets[0].amount - budgets[0].used, Decimal::from(80));
}

#[test]
fn category_match_is_case_sensitive() {
    let expenses = vec![expense("food", -20, "2024-01-01")];
    let mut budgets = vec![budget("Food", 100)];
    recompute_usage(&expenses, &mut budgets);
    assert_eq!(budgets[0].used, Decimal::ZERO);
}

#[test]
fn unmatched_budget_resets_to_zero() {
    let expenses = vec![expense("Shopping", -40, "2024-01-01")];
    let mut budgets = vec![budget("Food", 100)];
    budgets[0].used = Decimal::from(99);
    recompute_usage(&expenses, &mut budgets);
    assert_eq!(budgets[0].used, Decimal::ZERO);
}

#[test]
fn empty_budget_store_is_a_noop() {
    let store = Store::open_in_memory().unwrap();
    store
        .save_expenses(&[expense("Food", -20, "2024-01-01")])
        .unwrap();
    update_budget_usage(&store).unwrap();
    // no budget document was created by the updater
    assert!(store.get_raw("userBudgets").unwrap().is_none());
}

#[test]
fn updater_persists_through_the_store() {
    let store = Store::open_in_memory().unwrap();
    store
        .save_expenses(&[
            expense("Food", -20, "2024-01-01"),
            expense("Food", -10, "2024-01-02"),
        ])
        .unwrap();
    store.save_budgets(&[budget("Food", 100)]).unwrap();

    update_budget_usage(&store).unwrap();

    let budgets = store.load_budgets().unwrap();
    assert_eq!(budgets[0].used, Decimal::from(30));
    // only the derived field moved
    assert_eq!(budgets[0].amount, Decimal::from(100));
    assert_eq!(budgets[0].name, "Food");
}
