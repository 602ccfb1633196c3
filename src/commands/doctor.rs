// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::store::Store;
use crate::usage::recompute_usage;
use crate::utils::pretty_table;

/// Integrity pass over the stores. Nothing here mutates; stale budget
/// usage is fixed by the next expense mutation, not by doctor.
pub fn handle(store: &Store) -> Result<()> {
    let mut rows = Vec::new();

    let expenses = store.load_expenses()?;
    let incomes = store.load_incomes()?;
    let budgets = store.load_budgets()?;
    let categories = store.load_categories()?;

    // 1) Budgets whose stored `used` disagrees with a fresh recompute
    let mut fresh = budgets.clone();
    recompute_usage(&expenses, &mut fresh);
    for (stored, recomputed) in budgets.iter().zip(&fresh) {
        if stored.used != recomputed.used {
            rows.push(vec![
                "stale_budget_usage".into(),
                format!(
                    "'{}' stored {} recomputed {}",
                    stored.name, stored.used, recomputed.used
                ),
            ]);
        }
    }

    // 2) Expense categories missing from the category list
    for e in &expenses {
        if !categories.contains(&e.category) {
            rows.push(vec![
                "unknown_expense_category".into(),
                format!("{} ({})", e.category, e.id),
            ]);
        }
    }

    // 3) Sign violations: expenses are stored negative, incomes positive
    for e in &expenses {
        if e.amount > Decimal::ZERO {
            rows.push(vec!["positive_expense_amount".into(), e.id.to_string()]);
        }
    }
    for i in &incomes {
        if i.amount <= Decimal::ZERO {
            rows.push(vec!["non_positive_income_amount".into(), i.id.to_string()]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
