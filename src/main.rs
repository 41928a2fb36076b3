// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use reconact::config::{self, DATA_DIR_ENV};
use reconact::snapshot::Snapshot;
use reconact::{cli, commands, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_flag("verbose"));

    let cfg = config::resolve(
        matches.get_one::<String>("config").map(Path::new),
        std::env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        matches.get_one::<String>("data").map(PathBuf::from),
    )?;

    if matches.subcommand().is_none() {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    }

    let snapshot = Snapshot::load(&cfg.data_dir)
        .with_context(|| format!("Loading snapshot from {}", cfg.data_dir.display()))?;

    match matches.subcommand() {
        Some(("act", sub)) => commands::act::handle(&snapshot, &cfg, sub)?,
        Some(("print", sub)) => commands::print::handle(&snapshot, &cfg, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&snapshot, &cfg, sub)?,
        Some(("clients", sub)) => commands::parties::handle_clients(&snapshot, sub)?,
        Some(("partners", sub)) => commands::parties::handle_partners(&snapshot, sub)?,
        Some(("debtors", sub)) => commands::debtors::handle(&snapshot, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&snapshot, &cfg)?,
        Some(("shell", _)) => commands::shell::handle(&snapshot, &cfg)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
