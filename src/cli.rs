// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .help("Only this category (e.g. Food or Alimentação)"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .short('t')
            .help("Only this type (income/Receita or expense/Despesa)"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .help("Earliest date, inclusive (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .help("Latest date, inclusive (YYYY-MM-DD)"),
    )
    .arg(Arg::new("min").long("min").help("Minimum value, inclusive"))
    .arg(Arg::new("max").long("max").help("Maximum value, inclusive"))
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("extrato")
        .about("Personal-finance transaction ledger: record, import, filter and summarize")
        .version(crate_version!())
        .arg(
            Arg::new("user")
                .long("user")
                .short('u')
                .global(true)
                .help("Owner id, overriding the stored selection"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("user")
                .about("Select or inspect the ledger owner")
                .subcommand(
                    Command::new("set")
                        .about("Store the owner id used by every command")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(Command::new("show").about("Print the stored owner id")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .required(true)
                                .help("income/Receita or expense/Despesa"),
                        )
                        .arg(
                            Arg::new("value")
                                .long("value")
                                .short('v')
                                .required(true)
                                .help("Positive amount; comma or point decimals accepted"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true)
                                .help("Food, Housing, Health, Education or Transport (Portuguese labels accepted)"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .short('d')
                                .help("YYYY-MM-DD; defaults to today"),
                        ),
                )
                .subcommand(json_flags(filter_args(
                    Command::new("list")
                        .about("List the ledger, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N entries"),
                        ),
                )))
                .subcommand(
                    Command::new("update")
                        .about("Edit fields of a persisted transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("type").long("type").short('t'))
                        .arg(Arg::new("value").long("value").short('v'))
                        .arg(Arg::new("category").long("category").short('c'))
                        .arg(Arg::new("date").long("date").short('d')),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a persisted transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Bulk-load transactions")
                .subcommand(
                    Command::new("transactions")
                        .about("Import a type,value,category,date CSV file")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            filter_args(Command::new("statement").about("Monthly statement of the filtered ledger"))
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .value_parser(value_parser!(usize))
                        .default_value("4")
                        .help("Entries revealed initially"),
                )
                .arg(
                    Arg::new("page-increment")
                        .long("page-increment")
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                        .help("Entries revealed per load-more"),
                )
                .arg(
                    Arg::new("more")
                        .long("more")
                        .value_parser(value_parser!(usize))
                        .default_value("0")
                        .help("Number of load-more presses to apply"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and category breakdown")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expense and net balance"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category").about("Expense totals per category"),
                )),
        )
}
