// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn json_flags(cmd: Command) -> Command {
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
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("gofinances")
        .version(clap::crate_version!())
        .about("Track income and expenses, with dashboard highlights and a monthly resume by category")
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("auth")
                .about("Sign in, inspect or end the current session")
                .subcommand(Command::new("url").about("Print the Google authorization URL"))
                .subcommand(
                    Command::new("login")
                        .about("Sign in with a Google access token or a local profile")
                        .arg(
                            Arg::new("access-token")
                                .long("access-token")
                                .value_name("TOKEN")
                                .required_unless_present("name")
                                .help("Access token or the full redirect URL"),
                        )
                        .arg(
                            arg!(--name <NAME> "Local profile name (no provider)")
                                .required(false)
                                .conflicts_with("access-token"),
                        )
                        .arg(
                            arg!(--email <EMAIL> "Local profile email")
                                .required(false)
                                .requires("name"),
                        ),
                )
                .subcommand(Command::new("whoami").about("Show the signed-in user"))
                .subcommand(Command::new("logout").about("Forget the signed-in user")),
        )
        .subcommand(
            Command::new("tx")
                .about("Register and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Register a transaction")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(arg!(--amount <AMOUNT>).required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .required(true)
                                .help("positive (income) or negative (expense)"),
                        )
                        .arg(arg!(--category <KEY>).required(true))
                        .arg(
                            arg!(--date <DATE> "RFC 3339 timestamp or YYYY-MM-DD; defaults to now")
                                .required(false),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions as shown on the dashboard")
                        .arg(
                            arg!(--limit <N>)
                                .required(false)
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Entries, expenses and net total highlights"),
        ))
        .subcommand(json_flags(
            Command::new("resume")
                .about("Expenses by category for one month")
                .arg(arg!(--month <MONTH> "YYYY-MM; defaults to the current month").required(false))
                .arg(
                    arg!(--prev "Step one month back from --month")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("next"),
                )
                .arg(arg!(--next "Step one month forward from --month").action(ArgAction::SetTrue)),
        ))
        .subcommand(
            Command::new("category")
                .about("Category registry")
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("config")
                .about("Local settings")
                .subcommand(Command::new("show").about("Show settings"))
                .subcommand(
                    Command::new("set-offset")
                        .about("UTC offset used to place transactions on calendar days")
                        .arg(
                            arg!(--offset <OFFSET> "e.g. -03:00")
                                .required(true)
                                .allow_hyphen_values(true),
                        ),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export the signed-in user's transactions")
                    .arg(arg!(--format <FORMAT> "csv|json").required(true))
                    .arg(arg!(--out <PATH>).required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored transactions for problems"))
}
