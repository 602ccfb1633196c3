// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard aggregator. Every figure is re-derived from fresh store
//! reads on each invocation; nothing is cached between calls and nothing
//! here mutates a store. The `userFinanceData` blob is deliberately
//! bypassed for income/expense totals.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BalancePoint, Budget, BudgetSummary, Expense, Income, Transaction};
use crate::store::Store;
use crate::utils::day_label;

pub const RECENT_LIMIT: usize = 10;
pub const HISTORY_LIMIT: usize = 10;
pub const WEEK_DAYS: usize = 7;

/// Income and expense sums per trailing calendar day, oldest first,
/// always exactly [`WEEK_DAYS`] entries.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSeries {
    pub labels: Vec<String>,
    pub income: Vec<Decimal>,
    pub expenses: Vec<Decimal>,
}

/// Everything the dashboard displays, derived in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    #[serde(rename = "totalIncome")]
    pub total_income: Decimal,
    #[serde(rename = "totalExpenses")]
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub recent: Vec<Transaction>,
    #[serde(rename = "budgetSummary")]
    pub budget_summary: BudgetSummary,
    pub budgets: Vec<Budget>,
    pub week: WeekSeries,
    #[serde(rename = "balanceHistory")]
    pub history: Vec<BalancePoint>,
}

pub fn total_income(incomes: &[Income]) -> Decimal {
    incomes.iter().map(|i| i.amount).sum()
}

pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.magnitude()).sum()
}

/// Incomes and expenses unified, newest date first, capped at
/// [`RECENT_LIMIT`]. The sort is stable, so same-day incomes keep their
/// position ahead of same-day expenses.
pub fn recent_transactions(incomes: &[Income], expenses: &[Expense]) -> Vec<Transaction> {
    let mut all = merged(incomes, expenses);
    all.sort_by(|a, b| b.date.cmp(&a.date));
    all.truncate(RECENT_LIMIT);
    all
}

/// Budget totals. Remaining is clamped at zero: an over-budget user sees
/// nothing left, never a negative figure.
pub fn budget_summary(budgets: &[Budget]) -> BudgetSummary {
    let total_budget: Decimal = budgets.iter().map(|b| b.amount).sum();
    let total_used: Decimal = budgets.iter().map(|b| b.used).sum();
    BudgetSummary {
        total_budget,
        total_used,
        total_remaining: (total_budget - total_used).max(Decimal::ZERO),
        budget_count: budgets.len(),
    }
}

/// Per-day sums for the 7 calendar days ending at `today`, inclusive.
/// Only records dated exactly within the window count.
pub fn week_series(incomes: &[Income], expenses: &[Expense], today: NaiveDate) -> WeekSeries {
    let mut labels = Vec::with_capacity(WEEK_DAYS);
    let mut income = Vec::with_capacity(WEEK_DAYS);
    let mut out = Vec::with_capacity(WEEK_DAYS);
    for back in (0..WEEK_DAYS as i64).rev() {
        let day = today - Duration::days(back);
        labels.push(day_label(day));
        income.push(
            incomes
                .iter()
                .filter(|i| i.date == day)
                .map(|i| i.amount)
                .sum(),
        );
        out.push(
            expenses
                .iter()
                .filter(|e| e.date == day)
                .map(|e| e.magnitude())
                .sum(),
        );
    }
    WeekSeries {
        labels,
        income,
        expenses: out,
    }
}

/// Running balance in chronological order, one point per transaction,
/// keeping the last [`HISTORY_LIMIT`] points. With no transactions at all,
/// a single synthetic point carries the current balance dated `today`.
pub fn balance_history(
    incomes: &[Income],
    expenses: &[Expense],
    today: NaiveDate,
) -> Vec<BalancePoint> {
    let mut all = merged(incomes, expenses);
    if all.is_empty() {
        return vec![BalancePoint {
            date: today,
            amount: total_income(incomes) - total_expenses(expenses),
        }];
    }
    all.sort_by(|a, b| a.date.cmp(&b.date));
    let mut running = Decimal::ZERO;
    let mut points: Vec<BalancePoint> = all
        .iter()
        .map(|tx| {
            running += tx.signed();
            BalancePoint {
                date: tx.date,
                amount: running,
            }
        })
        .collect();
    if points.len() > HISTORY_LIMIT {
        points.drain(..points.len() - HISTORY_LIMIT);
    }
    points
}

fn merged(incomes: &[Income], expenses: &[Expense]) -> Vec<Transaction> {
    incomes
        .iter()
        .map(Transaction::from_income)
        .chain(expenses.iter().map(Transaction::from_expense))
        .collect()
}

/// Build a full snapshot from fresh store reads.
pub fn snapshot(store: &Store) -> Result<Snapshot> {
    snapshot_at(store, Local::now().date_naive())
}

pub fn snapshot_at(store: &Store, today: NaiveDate) -> Result<Snapshot> {
    let incomes = store.load_incomes()?;
    let expenses = store.load_expenses()?;
    let budgets = store.load_budgets()?;

    let total_income = total_income(&incomes);
    let total_expenses = total_expenses(&expenses);
    Ok(Snapshot {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        recent: recent_transactions(&incomes, &expenses),
        budget_summary: budget_summary(&budgets),
        week: week_series(&incomes, &expenses, today),
        history: balance_history(&incomes, &expenses, today),
        budgets,
    })
}

/// Percentage of a budget consumed, clamped to 0..=100 for display.
pub fn usage_percent(budget: &Budget) -> Decimal {
    if budget.amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (budget.used / budget.amount * Decimal::from(100))
        .max(Decimal::ZERO)
        .min(Decimal::from(100))
}
