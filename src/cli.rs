// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{command, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

fn kind_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Record a new entry")
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('d')
                        .required(true),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .short('a')
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List entries, most recent first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(clap::value_parser!(usize)),
                )
                .args(json_args()),
        )
}

pub fn build_cli() -> Command {
    command!()
        .name("formalize")
        .about("Track income and expenses and watch the formalization threshold")
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .env("FORMALIZE_USER")
                .default_value("1")
                .help("Session user id"),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("FORMALIZE_DB")
                .help("Database file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database and print its path"))
        .subcommand(kind_command("income", "Record and list income"))
        .subcommand(kind_command("expense", "Record and list expenses"))
        .subcommand(
            Command::new("summary")
                .about("Total income, expenses and net profit")
                .args(json_args()),
        )
        .subcommand(
            Command::new("alerts")
                .about("Estimated annual income and formalization alert")
                .args(json_args()),
        )
        .subcommand(
            Command::new("report")
                .about("Totals, counts, estimate and alert together")
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Export session data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("session")
                .about("Manage the user session")
                .subcommand_required(true)
                .subcommand(Command::new("end").about("End the session and discard its data")),
        )
        .subcommand(
            Command::new("config")
                .about("Engine settings")
                .subcommand_required(true)
                .subcommand(Command::new("show").args(json_args()))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").long("key").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                ),
        )
}
