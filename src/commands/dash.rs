// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dashboard::{self, usage_percent};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, short_label};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let snap = dashboard::snapshot(store)?;

    if maybe_print_json(json_flag, jsonl_flag, &snap)? {
        return Ok(());
    }

    println!("Balance:  {}", fmt_money(&snap.balance));
    println!("Income:   {}", fmt_money(&snap.total_income));
    println!("Expenses: {}", fmt_money(&snap.total_expenses));
    println!();

    let bs = &snap.budget_summary;
    println!(
        "Budgets ({}): total {}  used {}  remaining {}",
        bs.budget_count,
        fmt_money(&bs.total_budget),
        fmt_money(&bs.total_used),
        fmt_money(&bs.total_remaining)
    );
    if !snap.budgets.is_empty() {
        let rows: Vec<Vec<String>> = snap
            .budgets
            .iter()
            .map(|b| {
                vec![
                    b.name.clone(),
                    b.kind.as_str().to_string(),
                    format!("{} / {}", fmt_money(&b.used), fmt_money(&b.amount)),
                    format!("{:.0}% used", usage_percent(b)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Budget", "Type", "Progress", "Used"], rows));
    }
    println!();

    if snap.recent.is_empty() {
        println!("No recent transactions");
    } else {
        let rows: Vec<Vec<String>> = snap
            .recent
            .iter()
            .map(|t| {
                vec![
                    t.kind.as_str().to_string(),
                    t.category.clone(),
                    format!(
                        "{}{}",
                        match t.kind {
                            crate::models::TxKind::Income => "+",
                            crate::models::TxKind::Expense => "-",
                        },
                        fmt_money(&t.amount)
                    ),
                    t.date.to_string(),
                    t.notes.clone(),
                ]
            })
            .collect();
        println!("Recent transactions:");
        println!(
            "{}",
            pretty_table(&["Type", "Category", "Amount", "Date", "Notes"], rows)
        );
    }
    println!();

    println!("Last 7 days:");
    let rows: Vec<Vec<String>> = (0..snap.week.labels.len())
        .map(|i| {
            vec![
                snap.week.labels[i].clone(),
                fmt_money(&snap.week.income[i]),
                fmt_money(&snap.week.expenses[i]),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Day", "Income", "Expenses"], rows));
    println!();

    println!("Balance trend:");
    let rows: Vec<Vec<String>> = snap
        .history
        .iter()
        .map(|p| vec![short_label(p.date), fmt_money(&p.amount)])
        .collect();
    println!("{}", pretty_table(&["Date", "Balance"], rows));
    Ok(())
}
