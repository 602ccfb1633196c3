// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                anyhow::bail!("Category name must not be empty");
            }
            let mut categories = store.load_categories()?;
            if categories.contains(&name) {
                println!("Category '{}' already present", name);
                return Ok(());
            }
            categories.push(name.clone());
            store.save_categories(&categories)?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let categories = store.load_categories()?;
            let data = categories.into_iter().map(|c| vec![c]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let mut categories = store.load_categories()?;
            let before = categories.len();
            categories.retain(|c| c != name);
            if categories.len() == before {
                anyhow::bail!("Category '{}' not found", name);
            }
            store.save_categories(&categories)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
