// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON value per line"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("month").long("month").help("Short month, e.g. Jan (or All)"))
        .arg(Arg::new("year").long("year").help("Four digit year (or All)"))
        .arg(Arg::new("search").long("search").help("Match name or note, any case"))
        .arg(Arg::new("status").long("status").help("Success | Failed | All"))
        .arg(Arg::new("category").long("category").help("Food | Rent | ... | All"))
        .arg(Arg::new("method").long("method").help("UPI | Cash | Credit Card | Debit Card | All"))
}

fn draft_args(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("name").long("name").required(required))
        .arg(Arg::new("amount").long("amount").required(required))
        .arg(
            Arg::new("date")
                .long("date")
                .required(required)
                .help("YYYY-MM-DD"),
        )
        .arg(Arg::new("method").long("method"))
        .arg(Arg::new("category").long("category"))
        .arg(Arg::new("status").long("status"))
        .arg(Arg::new("note").long("note"))
}

pub fn build_cli() -> Command {
    Command::new("smartspend")
        .version(crate_version!())
        .about("Track spending and see where the money goes")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a config.toml overriding the default location"),
        )
        .subcommand(json_args(
            Command::new("home").about("This month against the budget"),
        ))
        .subcommand(json_args(filter_args(
            Command::new("dashboard").about("Totals, trends and goal progress"),
        )))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(json_args(filter_args(
                    Command::new("list").about("List transactions"),
                )))
                .subcommand(draft_args(
                    Command::new("add").about("Record a transaction"),
                    true,
                ))
                .subcommand(draft_args(
                    Command::new("edit")
                        .about("Change fields of a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                    false,
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget goal")
                .subcommand(json_args(
                    Command::new("show").about("Goal, spend and progress").arg(
                        Arg::new("view")
                            .long("view")
                            .value_parser(["home", "dashboard"])
                            .default_value("home"),
                    ),
                ))
                .subcommand(
                    Command::new("set")
                        .about("Save a new goal")
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Theme preference")
                .subcommand(Command::new("get"))
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("theme")
                            .required(true)
                            .value_parser(["light", "dark"]),
                    ),
                )
                .subcommand(Command::new("toggle")),
        )
        .subcommand(filter_args(
            Command::new("export")
                .about("Write the filtered transactions to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv | json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        ))
}
