// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::{Datelike, Local};

use crate::models::Expense;
use crate::store::{Store, fresh_id};
use crate::sync::{StoreKey, SyncHub};
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_month, parse_positive_amount, pretty_table,
};

pub fn handle(store: &Store, hub: &SyncHub, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, hub, sub)?,
        Some(("update", sub)) => update(store, hub, sub)?,
        Some(("rm", sub)) => rm(store, hub, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let magnitude = parse_positive_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let notes = sub
        .get_one::<String>("notes")
        .cloned()
        .unwrap_or_default();

    let mut expenses = store.load_expenses()?;
    let taken: Vec<i64> = expenses.iter().map(|e| e.id).collect();
    let expense = Expense {
        id: fresh_id(&taken),
        category,
        amount: -magnitude, // expenses are stored negative
        date,
        notes,
    };
    println!(
        "Recorded {} expense of {} on {} (id: {})",
        expense.category,
        fmt_money(&magnitude),
        expense.date,
        expense.id
    );
    expenses.push(expense);
    store.save_expenses(&expenses)?;
    hub.publish(store, StoreKey::Expenses);
    Ok(())
}

fn update(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = *sub.get_one::<i64>("id").unwrap();
    let mut expenses = store.load_expenses()?;
    let Some(expense) = expenses.iter_mut().find(|e| e.id == id) else {
        bail!("Expense {} not found", id);
    };

    if let Some(cat) = sub.get_one::<String>("category") {
        expense.category = cat.to_string();
    }
    if let Some(amt) = sub.get_one::<String>("amount") {
        expense.amount = -parse_positive_amount(amt)?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        expense.date = parse_date(d)?;
    }
    if let Some(n) = sub.get_one::<String>("notes") {
        expense.notes = n.to_string();
    }
    store.save_expenses(&expenses)?;
    hub.publish(store, StoreKey::Expenses);
    println!("Updated expense {}", id);
    Ok(())
}

fn rm(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = *sub.get_one::<i64>("id").unwrap();
    let mut expenses = store.load_expenses()?;
    let before = expenses.len();
    expenses.retain(|e| e.id != id);
    if expenses.len() == before {
        bail!("Expense {} not found", id);
    }
    store.save_expenses(&expenses)?;
    hub.publish(store, StoreKey::Expenses);
    println!("Removed expense {}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let all = sub.get_flag("all");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => {
            let now = Local::now().date_naive();
            format!("{:04}-{:02}", now.year(), now.month())
        }
    };

    let expenses = store.load_expenses()?;
    let filtered: Vec<&Expense> = expenses
        .iter()
        .filter(|e| all || e.date.format("%Y-%m").to_string() == month)
        .collect();

    if maybe_print_json(json_flag, jsonl_flag, &filtered)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = filtered
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.category.clone(),
                fmt_money(&e.magnitude()),
                e.date.to_string(),
                e.notes.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Category", "Amount", "Date", "Notes"], rows)
    );
    let total = filtered.iter().map(|e| e.magnitude()).sum();
    println!("Transactions: {}  Total: {}", filtered.len(), fmt_money(&total));
    Ok(())
}
