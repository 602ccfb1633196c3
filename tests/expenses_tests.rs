// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use kuzu::cli;
use kuzu::commands::expenses;
use kuzu::store::Store;
use kuzu::sync::SyncHub;

fn run(store: &Store, hub: &SyncHub, args: &[&str]) {
    let mut argv = vec!["kuzu", "expense"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    expenses::handle(store, hub, sub).unwrap();
}

#[test]
fn add_stores_negated_amount_with_fresh_id() {
    let store = Store::open_in_memory().unwrap();
    let hub = SyncHub::new();
    run(
        &store,
        &hub,
        &["add", "--category", "Food", "--amount", "25.50", "--date", "2024-01-01"],
    );

    let expenses = store.load_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert!(expenses[0].amount < Decimal::ZERO);
    assert_eq!(expenses[0].magnitude(), "25.50".parse().unwrap());
    assert!(expenses[0].id > 0);
}

#[test]
fn update_addresses_records_by_id() {
    let store = Store::open_in_memory().unwrap();
    let hub = SyncHub::new();
    run(
        &store,
        &hub,
        &["add", "--category", "Food", "--amount", "10", "--date", "2024-01-01"],
    );
    run(
        &store,
        &hub,
        &["add", "--category", "Shopping", "--amount", "30", "--date", "2024-01-02"],
    );

    let id = store.load_expenses().unwrap()[0].id;
    run(
        &store,
        &hub,
        &["update", "--id", &id.to_string(), "--amount", "15"],
    );

    let expenses = store.load_expenses().unwrap();
    assert_eq!(expenses[0].magnitude(), Decimal::from(15));
    assert_eq!(expenses[0].category, "Food");
    // the other record is untouched
    assert_eq!(expenses[1].magnitude(), Decimal::from(30));
}

#[test]
fn rm_unknown_id_is_an_error() {
    let store = Store::open_in_memory().unwrap();
    let matches =
        cli::build_cli().get_matches_from(["kuzu", "expense", "rm", "--id", "424242"]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let hub = SyncHub::new();
    let err = expenses::handle(&store, &hub, sub).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn rm_removes_exactly_one_record() {
    let store = Store::open_in_memory().unwrap();
    let hub = SyncHub::new();
    run(
        &store,
        &hub,
        &["add", "--category", "Food", "--amount", "10", "--date", "2024-01-01"],
    );
    run(
        &store,
        &hub,
        &["add", "--category", "Food", "--amount", "20", "--date", "2024-01-02"],
    );

    let id = store.load_expenses().unwrap()[1].id;
    run(&store, &hub, &["rm", "--id", &id.to_string()]);

    let expenses = store.load_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].magnitude(), Decimal::from(10));
}

#[test]
fn zero_amount_is_rejected() {
    let store = Store::open_in_memory().unwrap();
    let matches = cli::build_cli().get_matches_from([
        "kuzu", "expense", "add", "--category", "Food", "--amount", "0",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let hub = SyncHub::new();
    assert!(expenses::handle(&store, &hub, sub).is_err());
    assert!(store.load_expenses().unwrap().is_empty());
}
