// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Emit pretty-printed JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Emit one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("kuzu")
        .about("Kuzu: local personal finance tracker")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the store and print its location"))
        .subcommand(
            Command::new("expense")
                .about("Record and list expenses")
                .subcommand(
                    Command::new("add")
                        .about("Add an expense")
                        .arg(Arg::new("category").long("category").short('c').required(true))
                        .arg(Arg::new("amount").long("amount").short('a').required(true)
                            .help("Positive magnitude; stored negated"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update an expense by id")
                        .arg(Arg::new("id").long("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove an expense by id")
                        .arg(Arg::new("id").long("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses for a month (default: current)")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("all").long("all").action(ArgAction::SetTrue)
                            .help("List every month")),
                )),
        )
        .subcommand(
            Command::new("income")
                .about("Record and list income")
                .subcommand(
                    Command::new("add")
                        .about("Add an income record")
                        .arg(Arg::new("source").long("source").short('s').required(true))
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove an income record by id")
                        .arg(Arg::new("id").long("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(json_flags(Command::new("list").about("List income records"))),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage budgets")
                .subcommand(
                    Command::new("add")
                        .about("Add a budget")
                        .arg(Arg::new("name").long("name").short('n').required(true))
                        .arg(Arg::new("type").long("type").default_value("monthly")
                            .help("weekly|monthly"))
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(Arg::new("category").long("category").short('c').required(true)),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a budget by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("used").long("used"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("type").long("type")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a budget by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List budgets by type")))
                .subcommand(json_flags(Command::new("report").about("Per-budget usage report"))),
        )
        .subcommand(
            Command::new("category")
                .about("Manage expense categories")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("list"))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true))),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Derived totals, series, and recent activity"),
        ))
        .subcommand(
            Command::new("profile")
                .about("Profile views")
                .subcommand(json_flags(
                    Command::new("achievements").about("Recompute and show achievements"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export the unified transaction list")
                        .arg(Arg::new("format").long("format").default_value("csv")
                            .help("csv|json"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the stores for inconsistencies"))
}
