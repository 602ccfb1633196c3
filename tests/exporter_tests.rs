// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use kuzu::cli;
use kuzu::commands::exporter::{self, unified_transactions};
use kuzu::models::{Expense, Income, TxKind};
use kuzu::store::Store;

fn seeded_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    store
        .save_incomes(&[Income {
            id: 1,
            source: "Salary".to_string(),
            amount: Decimal::from(500),
            currency: "Nu.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            notes: "jan".to_string(),
        }])
        .unwrap();
    store
        .save_expenses(&[Expense {
            id: 2,
            category: "Food".to_string(),
            amount: Decimal::from(-20),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            notes: String::new(),
        }])
        .unwrap();
    store
}

#[test]
fn unified_list_is_oldest_first_with_magnitudes() {
    let store = seeded_store();
    let all = unified_transactions(&store).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].kind, TxKind::Expense);
    assert_eq!(all[0].amount, Decimal::from(20));
    assert_eq!(all[1].kind, TxKind::Income);
    assert_eq!(all[1].amount, Decimal::from(500));
}

#[test]
fn csv_export_writes_header_and_rows() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tx.csv");

    let matches = cli::build_cli().get_matches_from([
        "kuzu",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&store, sub).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next().unwrap(), "date,type,category,amount,notes");
    assert_eq!(lines.next().unwrap(), "2024-01-01,expense,Food,20,");
    assert_eq!(lines.next().unwrap(), "2024-01-02,income,Salary,500,jan");
}

#[test]
fn json_export_round_trips() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tx.json");

    let matches = cli::build_cli().get_matches_from([
        "kuzu",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&store, sub).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["type"], "expense");
    assert_eq!(items[1]["category"], "Salary");
}
