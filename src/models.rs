// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An expense record. Amounts are stored negative by construction; every
/// consumer takes the absolute value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }
}

/// The canonical income record. Amounts are always positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub source: String,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

/// The older income layout: no id, no date, currency carried as a display
/// symbol next to a country name.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyIncome {
    pub source: String,
    pub country: String,
    pub symbol: String,
    pub amount: Decimal,
    #[serde(default)]
    pub notes: String,
}

/// Either income layout, as found in the store. Canonical is tried first;
/// records missing `id`/`date` fall through to the legacy shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IncomeRecord {
    Canonical(Income),
    Legacy(LegacyIncome),
}

impl IncomeRecord {
    /// Normalize to the canonical shape. Legacy records get the supplied id
    /// and date; the display symbol becomes the currency tag.
    pub fn into_canonical(self, id: i64, date: NaiveDate) -> Income {
        match self {
            IncomeRecord::Canonical(i) => i,
            IncomeRecord::Legacy(l) => Income {
                id,
                source: l.source,
                amount: l.amount,
                currency: l.symbol,
                date,
                notes: l.notes,
            },
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, IncomeRecord::Legacy(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    Weekly,
    Monthly,
}

impl BudgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetKind::Weekly => "weekly",
            BudgetKind::Monthly => "monthly",
        }
    }

    /// End of the budget window starting at `start`.
    pub fn end_date(&self, start: NaiveDate) -> NaiveDate {
        match self {
            BudgetKind::Weekly => start + Duration::days(7),
            BudgetKind::Monthly => start + Months::new(1),
        }
    }
}

/// A budget record. `used` is derived by the usage updater, never entered
/// at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BudgetKind,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub used: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

/// The legacy budget layout: just a category and a cap.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyBudget {
    pub category: String,
    pub limit: Decimal,
}

impl LegacyBudget {
    pub fn into_budget(self, id: String, today: NaiveDate) -> Budget {
        Budget {
            id,
            name: self.category.clone(),
            kind: BudgetKind::Monthly,
            amount: self.limit,
            category: self.category,
            used: Decimal::ZERO,
            created_at: format!("{}T00:00:00Z", today),
            start_date: today,
            end_date: BudgetKind::Monthly.end_date(today),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

/// An income or expense flattened into the unified shape the dashboard and
/// exporter consume. `amount` is always the magnitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    pub fn from_income(i: &Income) -> Self {
        Transaction {
            kind: TxKind::Income,
            category: i.source.clone(),
            amount: i.amount,
            date: i.date,
            notes: i.notes.clone(),
        }
    }

    pub fn from_expense(e: &Expense) -> Self {
        Transaction {
            kind: TxKind::Expense,
            category: e.category.clone(),
            amount: e.magnitude(),
            date: e.date,
            notes: e.notes.clone(),
        }
    }

    /// Signed effect on a running balance.
    pub fn signed(&self) -> Decimal {
        match self.kind {
            TxKind::Income => self.amount,
            TxKind::Expense => -self.amount,
        }
    }
}

/// One point of the running-balance series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetSummary {
    #[serde(rename = "totalBudget")]
    pub total_budget: Decimal,
    #[serde(rename = "totalUsed")]
    pub total_used: Decimal,
    #[serde(rename = "totalRemaining")]
    pub total_remaining: Decimal,
    #[serde(rename = "budgetCount")]
    pub budget_count: usize,
}

/// The cached `userFinanceData` blob. Rewritten wholesale whenever budgets
/// change; only the achievements engine trusts its `balance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expenses: Decimal,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(rename = "budgetSummary", default)]
    pub budget_summary: BudgetSummary,
    #[serde(rename = "balanceHistory", default)]
    pub balance_history: Vec<BalancePoint>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Achievements {
    #[serde(rename = "budgetMaster", default)]
    pub budget_master: bool,
    #[serde(rename = "savingsHero", default)]
    pub savings_hero: bool,
    #[serde(rename = "goalSetter", default)]
    pub goal_setter: bool,
}

impl Achievements {
    /// Union-merge: a previously earned achievement is never re-locked.
    pub fn merge(&mut self, earned: Achievements) {
        self.budget_master |= earned.budget_master;
        self.savings_hero |= earned.savings_hero;
        self.goal_setter |= earned.goal_setter;
    }
}
