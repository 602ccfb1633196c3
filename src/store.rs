// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

use crate::models::{Budget, Expense, Income, IncomeRecord, LegacyBudget};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.kuzu", "Kuzu", "kuzu"));

/// Storage keys. Each key holds one JSON-encoded document.
pub mod keys {
    pub const EXPENSES: &str = "expenses";
    pub const INCOMES: &str = "incomes";
    pub const USER_BUDGETS: &str = "userBudgets";
    /// Old budget key, read as a fallback and never written.
    pub const LEGACY_BUDGETS: &str = "budgets";
    pub const CATEGORIES: &str = "categories";
    pub const FINANCE_DATA: &str = "userFinanceData";
    pub const ACHIEVEMENTS: &str = "achievements";
}

pub const DEFAULT_CATEGORIES: [&str; 4] =
    ["Transportation", "Shopping", "Entertainment", "Food/Drinks"];

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("kuzu.sqlite"))
}

/// The document store: a single key -> JSON-text table. Absent or
/// unreadable documents load as the empty collection, so a corrupt entry
/// degrades to "no records" instead of failing the command.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open_or_init() -> Result<Store> {
        let path = store_path()?;
        let conn = Connection::open(&path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    pub fn open_in_memory() -> Result<Store> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM stores WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO stores(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load an ordered sequence. Missing key or malformed JSON yields an
    /// empty sequence.
    pub fn load_seq<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self
            .get_raw(key)?
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    pub fn save_seq<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records)
            .with_context(|| format!("Serialize store '{}'", key))?;
        self.set_raw(key, &json)
    }

    /// Load a single document, defaulting when absent or malformed.
    pub fn load_doc<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        Ok(self
            .get_raw(key)?
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    pub fn save_doc<T: Serialize>(&self, key: &str, doc: &T) -> Result<()> {
        let json =
            serde_json::to_string(doc).with_context(|| format!("Serialize store '{}'", key))?;
        self.set_raw(key, &json)
    }

    pub fn load_expenses(&self) -> Result<Vec<Expense>> {
        self.load_seq(keys::EXPENSES)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        self.save_seq(keys::EXPENSES, expenses)
    }

    /// Load incomes, normalizing any legacy-shape records to the canonical
    /// layout. Normalized records get fresh ids and today's date, and the
    /// migrated sequence is written back immediately so the minted ids are
    /// stable across loads.
    pub fn load_incomes(&self) -> Result<Vec<Income>> {
        let raw: Vec<IncomeRecord> = self.load_seq(keys::INCOMES)?;
        let today = Local::now().date_naive();
        let mut taken: Vec<i64> = raw
            .iter()
            .filter_map(|r| match r {
                IncomeRecord::Canonical(i) => Some(i.id),
                IncomeRecord::Legacy(_) => None,
            })
            .collect();
        let mut migrated = false;
        let mut out = Vec::with_capacity(raw.len());
        for rec in raw {
            let id = if rec.is_legacy() {
                migrated = true;
                let id = fresh_id(&taken);
                taken.push(id);
                id
            } else {
                0 // ignored for canonical records
            };
            out.push(rec.into_canonical(id, today));
        }
        if migrated {
            self.save_incomes(&out)?;
        }
        Ok(out)
    }

    pub fn save_incomes(&self, incomes: &[Income]) -> Result<()> {
        self.save_seq(keys::INCOMES, incomes)
    }

    /// Load budgets from the primary key, falling back to the legacy
    /// `budgets` key (normalized) when the primary is absent.
    pub fn load_budgets(&self) -> Result<Vec<Budget>> {
        if let Some(raw) = self.get_raw(keys::USER_BUDGETS)? {
            return Ok(serde_json::from_str(&raw).unwrap_or_default());
        }
        let legacy: Vec<LegacyBudget> = self.load_seq(keys::LEGACY_BUDGETS)?;
        let today = Local::now().date_naive();
        let base = Utc::now().timestamp_millis();
        Ok(legacy
            .into_iter()
            .enumerate()
            .map(|(i, l)| l.into_budget((base + i as i64).to_string(), today))
            .collect())
    }

    pub fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        self.save_seq(keys::USER_BUDGETS, budgets)
    }

    /// Load the category list, seeded with the defaults when absent.
    pub fn load_categories(&self) -> Result<Vec<String>> {
        match self.get_raw(keys::CATEGORIES)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn save_categories(&self, categories: &[String]) -> Result<()> {
        self.save_seq(keys::CATEGORIES, categories)
    }
}

/// Millisecond-timestamp id, bumped past any collision.
pub fn fresh_id(taken: &[i64]) -> i64 {
    let mut id = Utc::now().timestamp_millis();
    while taken.contains(&id) {
        id += 1;
    }
    id
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS stores(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
