// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::achievements::{self, description, title};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("achievements", sub)) => show_achievements(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn show_achievements(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let (merged, newly) = achievements::recompute(store)?;

    for id in &newly {
        println!("Unlocked: {} - {}", title(id), description(id));
    }

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &merged)? {
        return Ok(());
    }

    let status = |earned: bool| {
        if earned { "Unlocked" } else { "Locked" }.to_string()
    };
    let rows = vec![
        vec![
            title("budgetMaster").to_string(),
            description("budgetMaster").to_string(),
            status(merged.budget_master),
        ],
        vec![
            title("savingsHero").to_string(),
            description("savingsHero").to_string(),
            status(merged.savings_hero),
        ],
        vec![
            title("goalSetter").to_string(),
            description("goalSetter").to_string(),
            status(merged.goal_setter),
        ],
    ];
    println!(
        "{}",
        pretty_table(&["Achievement", "Criteria", "Status"], rows)
    );
    Ok(())
}
