// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kuzu::cli;
use kuzu::commands::categories;
use kuzu::store::Store;

fn run(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["kuzu", "category"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("category", sub)) = matches.subcommand() else {
        panic!("no category subcommand");
    };
    categories::handle(store, sub)
}

#[test]
fn add_then_rm_round_trips() {
    let store = Store::open_in_memory().unwrap();
    run(&store, &["add", "Rent"]).unwrap();
    assert!(store.load_categories().unwrap().contains(&"Rent".to_string()));

    run(&store, &["rm", "Rent"]).unwrap();
    assert!(!store.load_categories().unwrap().contains(&"Rent".to_string()));
}

#[test]
fn rm_unknown_category_is_an_error() {
    let store = Store::open_in_memory().unwrap();
    let err = run(&store, &["rm", "Nonexistent"]).unwrap_err();
    assert!(err.to_string().contains("not found"));
    // the seeded list is untouched
    assert_eq!(store.load_categories().unwrap().len(), 4);
}

#[test]
fn duplicate_add_is_idempotent() {
    let store = Store::open_in_memory().unwrap();
    run(&store, &["add", "Rent"]).unwrap();
    run(&store, &["add", "Rent"]).unwrap();
    let categories = store.load_categories().unwrap();
    assert_eq!(categories.iter().filter(|c| *c == "Rent").count(), 1);
}
