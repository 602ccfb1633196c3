// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Budget usage updater: wholesale recompute of every budget's `used`
//! from the expense store. No incremental bookkeeping; the sums are
//! re-derived from scratch on every run.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{Budget, Expense};
use crate::store::Store;

/// Set each budget's `used` to the sum of absolute amounts of expenses
/// whose category equals the budget's category exactly (case-sensitive,
/// untrimmed). A budget with no matching expense ends at zero, which is
/// indistinguishable from "legitimately unused". No other field changes.
pub fn recompute_usage(expenses: &[Expense], budgets: &mut [Budget]) {
    for budget in budgets.iter_mut() {
        budget.used = expenses
            .iter()
            .filter(|e| e.category == budget.category)
            .map(|e| e.magnitude())
            .sum::<Decimal>();
    }
}

/// Recompute and persist. An empty budget sequence is a pure no-op; a
/// non-empty one is written back unconditionally, changed or not.
pub fn update_budget_usage(store: &Store) -> Result<()> {
    let mut budgets = store.load_budgets()?;
    if budgets.is_empty() {
        return Ok(());
    }
    let expenses = store.load_expenses()?;
    recompute_usage(&expenses, &mut budgets);
    store.save_budgets(&budgets)
}
