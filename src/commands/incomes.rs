// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Local;

use crate::models::Income;
use crate::store::{Store, fresh_id};
use crate::sync::{StoreKey, SyncHub};
use crate::utils::{
    CURRENCY, fmt_money, maybe_print_json, parse_date, parse_positive_amount, pretty_table,
};

pub fn handle(store: &Store, hub: &SyncHub, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, hub, sub)?,
        Some(("rm", sub)) => rm(store, hub, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let source = sub.get_one::<String>("source").unwrap().trim().to_string();
    if source.is_empty() {
        bail!("Income source must not be empty");
    }
    let amount = parse_positive_amount(sub.get_one::<String>("amount").unwrap())?;
    let currency = sub
        .get_one::<String>("currency")
        .cloned()
        .unwrap_or_else(|| CURRENCY.to_string());
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let notes = sub
        .get_one::<String>("notes")
        .cloned()
        .unwrap_or_default();

    let mut incomes = store.load_incomes()?;
    let taken: Vec<i64> = incomes.iter().map(|i| i.id).collect();
    let income = Income {
        id: fresh_id(&taken),
        source,
        amount,
        currency,
        date,
        notes,
    };
    println!(
        "Recorded income '{}' of {} on {} (id: {})",
        income.source,
        fmt_money(&income.amount),
        income.date,
        income.id
    );
    incomes.push(income);
    store.save_incomes(&incomes)?;
    hub.publish(store, StoreKey::Incomes);
    Ok(())
}

fn rm(store: &Store, hub: &SyncHub, sub: &clap::ArgMatches) -> Result<()> {
    let id: i64 = *sub.get_one::<i64>("id").unwrap();
    let mut incomes = store.load_incomes()?;
    let before = incomes.len();
    incomes.retain(|i| i.id != id);
    if incomes.len() == before {
        bail!("Income {} not found", id);
    }
    store.save_incomes(&incomes)?;
    hub.publish(store, StoreKey::Incomes);
    println!("Removed income {}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let incomes = store.load_incomes()?;

    if maybe_print_json(json_flag, jsonl_flag, &incomes)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = incomes
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.source.clone(),
                format!("{}{:.2}", i.currency, i.amount),
                i.date.to_string(),
                i.notes.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Source", "Amount", "Date", "Notes"], rows)
    );
    let total = incomes.iter().map(|i| i.amount).sum();
    println!("Total: {}", fmt_money(&total));
    Ok(())
}
