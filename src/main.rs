// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use kuzu::sync::{StoreKey, SyncHub};
use kuzu::{cli, commands, store, summary, usage};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_or_init()?;

    // Standing subscribers: budget usage follows every expense mutation,
    // and the cached finance summary follows every budget mutation.
    let mut hub = SyncHub::new();
    hub.subscribe(&[StoreKey::Expenses], |store, _| {
        usage::update_budget_usage(store)
    });
    hub.subscribe(&[StoreKey::Budgets], |store, _| {
        summary::refresh_summary(store).map(|_| ())
    });

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::store_path()?.display());
        }
        Some(("expense", sub)) => commands::expenses::handle(&store, &hub, sub)?,
        Some(("income", sub)) => commands::incomes::handle(&store, &hub, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, &hub, sub)?,
        Some(("category", sub)) => commands::categories::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dash::handle(&store, sub)?,
        Some(("profile", sub)) => commands::profile::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
