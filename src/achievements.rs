// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Achievement recomputation. Three fixed achievements, re-checked on
//! every profile run. Newly satisfied criteria are union-merged into the
//! stored map, so an achievement, once earned, stays earned even if its
//! criterion later regresses.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::Achievements;
use crate::store::{Store, keys};
use crate::summary;

pub const SAVINGS_THRESHOLD: i64 = 1000;
pub const GOAL_TRANSACTIONS: usize = 5;

pub fn title(id: &str) -> &'static str {
    match id {
        "budgetMaster" => "Budget Master",
        "savingsHero" => "Savings Hero",
        "goalSetter" => "Goal Setter",
        _ => "Achievement",
    }
}

pub fn description(id: &str) -> &'static str {
    match id {
        "budgetMaster" => "Created your first budget!",
        "savingsHero" => "Saved over Nu. 1000!",
        "goalSetter" => "Made 5 transactions!",
        _ => "Completed an achievement!",
    }
}

/// Evaluate the criteria against the current stores. Balance comes from
/// the cached finance summary (refreshed on budget mutations); the
/// transaction count comes from the live income and expense stores.
pub fn evaluate(store: &Store) -> Result<Achievements> {
    let budgets = store.load_budgets()?;
    let cached = summary::load_summary(store)?;
    let tx_count = store.load_incomes()?.len() + store.load_expenses()?.len();

    Ok(Achievements {
        budget_master: !budgets.is_empty() || !cached.budgets.is_empty(),
        savings_hero: cached.balance >= Decimal::from(SAVINGS_THRESHOLD),
        goal_setter: tx_count >= GOAL_TRANSACTIONS,
    })
}

/// Recompute, merge into the stored map, persist, and report which ids
/// were newly earned this run.
pub fn recompute(store: &Store) -> Result<(Achievements, Vec<&'static str>)> {
    let previous: Achievements = store.load_doc(keys::ACHIEVEMENTS)?;
    let earned = evaluate(store)?;

    let mut newly = Vec::new();
    if earned.budget_master && !previous.budget_master {
        newly.push("budgetMaster");
    }
    if earned.savings_hero && !previous.savings_hero {
        newly.push("savingsHero");
    }
    if earned.goal_setter && !previous.goal_setter {
        newly.push("goalSetter");
    }

    let mut merged = previous;
    merged.merge(earned);
    store.save_doc(keys::ACHIEVEMENTS, &merged)?;
    Ok((merged, newly))
}
