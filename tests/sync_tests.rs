// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use kuzu::cli;
use kuzu::commands::{budgets, expenses};
use kuzu::store::Store;
use kuzu::sync::{StoreKey, SyncHub};
use kuzu::{summary, usage};

#[test]
fn publish_reaches_only_matching_subscribers() {
    let store = Store::open_in_memory().unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let mut hub = SyncHub::new();
    let log = seen.clone();
    hub.subscribe(&[StoreKey::Expenses], move |_, key| {
        log.borrow_mut().push(("expenses", key));
        Ok(())
    });
    let log = seen.clone();
    hub.subscribe(&[StoreKey::Budgets, StoreKey::Incomes], move |_, key| {
        log.borrow_mut().push(("other", key));
        Ok(())
    });

    assert_eq!(hub.subscriber_count(), 2);
    hub.publish(&store, StoreKey::Expenses);
    hub.publish(&store, StoreKey::Incomes);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ("expenses", StoreKey::Expenses));
    assert_eq!(seen[1], ("other", StoreKey::Incomes));
}

#[test]
fn failing_subscriber_does_not_block_delivery() {
    let store = Store::open_in_memory().unwrap();
    let reached = Rc::new(RefCell::new(false));

    let mut hub = SyncHub::new();
    hub.subscribe(&[StoreKey::Expenses], |_, _| {
        anyhow::bail!("subscriber exploded")
    });
    let flag = reached.clone();
    hub.subscribe(&[StoreKey::Expenses], move |_, _| {
        *flag.borrow_mut() = true;
        Ok(())
    });

    hub.publish(&store, StoreKey::Expenses);
    assert!(*reached.borrow());
}

/// End to end through the CLI: adding an expense publishes to the hub,
/// which re-derives budget usage from the expense store.
#[test]
fn expense_add_refreshes_budget_usage() {
    let store = Store::open_in_memory().unwrap();
    let mut hub = SyncHub::new();
    hub.subscribe(&[StoreKey::Expenses], |store, _| {
        usage::update_budget_usage(store)
    });
    hub.subscribe(&[StoreKey::Budgets], |store, _| {
        summary::refresh_summary(store).map(|_| ())
    });

    let matches = cli::build_cli().get_matches_from([
        "kuzu", "budget", "add", "--name", "Groceries", "--amount", "100", "--category", "Food",
    ]);
    let Some(("budget", sub)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    budgets::handle(&store, &hub, sub).unwrap();

    let matches = cli::build_cli().get_matches_from([
        "kuzu", "expense", "add", "--category", "Food", "--amount", "20", "--date", "2024-01-01",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    expenses::handle(&store, &hub, sub).unwrap();

    let budgets = store.load_budgets().unwrap();
    assert_eq!(budgets[0].used, Decimal::from(20));
    assert_eq!(budgets[0].amount - budgets[0].used, Decimal::from(80));
}

/// Budget mutations rewrite the cached finance summary wholesale.
#[test]
fn budget_add_refreshes_finance_summary() {
    let store = Store::open_in_memory().unwrap();
    let mut hub = SyncHub::new();
    hub.subscribe(&[StoreKey::Budgets], |store, _| {
        summary::refresh_summary(store).map(|_| ())
    });

    let matches = cli::build_cli().get_matches_from([
        "kuzu", "budget", "add", "--name", "Transport", "--type", "weekly", "--amount", "50",
        "--category", "Transportation",
    ]);
    let Some(("budget", sub)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    budgets::handle(&store, &hub, sub).unwrap();

    let cached = summary::load_summary(&store).unwrap();
    assert_eq!(cached.budget_summary.budget_count, 1);
    assert_eq!(cached.budget_summary.total_budget, Decimal::from(50));
    assert_eq!(cached.budgets.len(), 1);
}
