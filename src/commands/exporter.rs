// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::models::Transaction;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

/// The unified income+expense list, oldest first.
pub fn unified_transactions(store: &Store) -> Result<Vec<Transaction>> {
    let incomes = store.load_incomes()?;
    let expenses = store.load_expenses()?;
    let mut all: Vec<Transaction> = incomes
        .iter()
        .map(Transaction::from_income)
        .chain(expenses.iter().map(Transaction::from_expense))
        .collect();
    all.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(all)
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let all = unified_transactions(store)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "type", "category", "amount", "notes"])?;
            for tx in &all {
                wtr.write_record([
                    tx.date.to_string(),
                    tx.kind.as_str().to_string(),
                    tx.category.clone(),
                    tx.amount.to_string(),
                    tx.notes.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = all
                .iter()
                .map(|tx| {
                    json!({
                        "date": tx.date, "type": tx.kind.as_str(), "category": tx.category,
                        "amount": tx.amount, "notes": tx.notes
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", all.len(), out);
    Ok(())
}
