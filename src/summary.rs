// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Lifecycle of the `userFinanceData` blob: a derived cache, initialized
//! to zeros and rewritten wholesale from a fresh dashboard snapshot when
//! budgets change. Readers that can recompute from the raw stores should;
//! the achievements engine is the one consumer that trusts it.

use anyhow::Result;

use crate::dashboard;
use crate::models::FinanceSummary;
use crate::store::{Store, keys};

pub fn load_summary(store: &Store) -> Result<FinanceSummary> {
    store.load_doc(keys::FINANCE_DATA)
}

/// Rebuild the blob from the current stores and persist it.
pub fn refresh_summary(store: &Store) -> Result<FinanceSummary> {
    let snap = dashboard::snapshot(store)?;
    let summary = FinanceSummary {
        balance: snap.balance,
        income: snap.total_income,
        expenses: snap.total_expenses,
        transactions: snap.recent,
        budgets: snap.budgets,
        budget_summary: snap.budget_summary,
        balance_history: snap.history,
    };
    store.save_doc(keys::FINANCE_DATA, &summary)?;
    Ok(summary)
}
