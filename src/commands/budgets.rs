// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::{Local, Utc};
use rust_decimal::Decimal;

use crate::dashboard::usage_percent;
use crate::models::{Budget, BudgetKind};
use crate::store::Store;
use crate::sync::{StoreKey, SyncHub};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_positive_amount, pretty_table};

pub fn handle(store: &Store, hub: &SyncHub, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, hub, sub)?,
        Some(("update", sub)) => update(store, hub, sub)?,
        Some(("rm", sub)) => rm(store, hub, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("report", sub)) => report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_kind(s: &str) -> Result<BudgetKind> {
    match s {
        "weekly" => Ok(BudgetKind::Weekly),
        "monthly" => Ok(BudgetKind::Monthly),
        other => bail!("Invalid budget type '{}' (use weekly|monthly)", other),
    }
}

fn add(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_positive_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();

    let start = Local::now().date_naive();
    let budget = Budget {
        id: Utc::now().timestamp_millis().to_string(),
        name,
        kind,
        amount,
        category,
        used: Decimal::ZERO,
        created_at: Utc::now().to_rfc3339(),
        start_date: start,
        end_date: kind.end_date(start),
    };
    println!(
        "Added {} budget '{}' of {} for {} ({} - {})",
        budget.kind.as_str(),
        budget.name,
        fmt_money(&budget.amount),
        budget.category,
        budget.start_date,
        budget.end_date
    );
    let mut budgets = store.load_budgets()?;
    budgets.push(budget);
    store.save_budgets(&budgets)?;
    hub.publish(store, StoreKey::Budgets);
    Ok(())
}

fn update(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut budgets = store.load_budgets()?;
    let Some(budget) = budgets.iter_mut().find(|b| &b.id == id) else {
        bail!("Budget {} not found", id);
    };

    if let Some(name) = sub.get_one::<String>("name") {
        budget.name = name.to_string();
    }
    if let Some(amt) = sub.get_one::<String>("amount") {
        budget.amount = parse_positive_amount(amt)?;
    }
    if let Some(used) = sub.get_one::<String>("used") {
        budget.used = parse_amount(used)?;
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        budget.category = cat.to_string();
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        budget.kind = parse_kind(kind)?;
        budget.end_date = budget.kind.end_date(budget.start_date);
    }
    if budget.used > budget.amount {
        bail!("Used amount cannot exceed the total budget amount");
    }
    if budget.used < Decimal::ZERO {
        bail!("Used amount cannot be negative");
    }
    store.save_budgets(&budgets)?;
    hub.publish(store, StoreKey::Budgets);
    println!("Updated budget {}", id);
    Ok(())
}

fn rm(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut budgets = store.load_budgets()?;
    let before = budgets.len();
    budgets.retain(|b| &b.id != id);
    if budgets.len() == before {
        bail!("Budget {} not found", id);
    }
    store.save_budgets(&budgets)?;
    hub.publish(store, StoreKey::Budgets);
    println!("Removed budget {}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budgets = store.load_budgets()?;

    if maybe_print_json(json_flag, jsonl_flag, &budgets)? {
        return Ok(());
    }

    for kind in [BudgetKind::Weekly, BudgetKind::Monthly] {
        let rows: Vec<Vec<String>> = budgets
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| {
                vec![
                    b.id.clone(),
                    b.name.clone(),
                    b.category.clone(),
                    fmt_money(&b.amount),
                    fmt_money(&b.used),
                    format!("{} - {}", b.start_date, b.end_date),
                ]
            })
            .collect();
        if rows.is_empty() {
            println!("No {} budgets", kind.as_str());
            continue;
        }
        println!("{} budgets:", kind.as_str());
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Category", "Amount", "Used", "Window"], rows)
        );
    }
    Ok(())
}

fn report(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budgets = store.load_budgets()?;

    let mut data = Vec::new();
    for b in &budgets {
        let residual = b.amount - b.used;
        data.push(vec![
            b.name.clone(),
            b.category.clone(),
            b.kind.as_str().to_string(),
            fmt_money(&b.used),
            fmt_money(&b.amount),
            format!("{:.1}%", usage_percent(b)),
            fmt_money(&residual),
        ]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["Name", "Category", "Type", "Used", "Total", "Used %", "Residual"],
                data,
            )
        );
    }
    Ok(())
}
