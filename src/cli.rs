// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, crate_version};

fn with_counterparty(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("client")
            .long("client")
            .value_name("ID")
            .help("Client id"),
    )
    .arg(
        Arg::new("partner")
            .long("partner")
            .value_name("NUMBER")
            .help("Partner number"),
    )
    .group(
        ArgGroup::new("counterparty")
            .args(["client", "partner"])
            .required(true)
            .multiple(false),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Start day (ignored unless --to is also set)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("End day (ignored unless --from is also set)"),
    )
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
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .value_name("TEXT")
        .help("Case-insensitive name filter")
}

pub fn build_cli() -> Command {
    Command::new("reconact")
        .version(crate_version!())
        .about("Multi-currency reconciliation acts for clients and partners")
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_name("DIR")
                .help("Snapshot directory (overrides config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Config file (JSON)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging"),
        )
        .subcommand(json_flags(with_counterparty(
            Command::new("act").about("Show the reconciliation act for one counterparty"),
        )))
        .subcommand(with_counterparty(
            Command::new("print")
                .about("Write the printable act as a standalone HTML document")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .help("Output path (default: <output_dir>/act-<kind>-<id>.html)"),
                )
                .arg(
                    Arg::new("open")
                        .long("open")
                        .action(ArgAction::SetTrue)
                        .help("Hand the document to the configured print command"),
                ),
        ))
        .subcommand(with_counterparty(
            Command::new("export")
                .about("Export the currency summary")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .value_name("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true).value_name("FILE")),
        ))
        .subcommand(json_flags(
            Command::new("clients")
                .about("List clients")
                .arg(search_arg()),
        ))
        .subcommand(json_flags(
            Command::new("partners")
                .about("List partners and their catalog parts")
                .arg(search_arg()),
        ))
        .subcommand(json_flags(
            Command::new("debtors")
                .about("Debts grouped by debtor")
                .arg(search_arg()),
        ))
        .subcommand(Command::new("doctor").about("Report data-quality issues in the snapshot"))
        .subcommand(Command::new("shell").about("Interactive act selection"))
}
