// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::config::Config;
use crate::models::Counterparty;
use crate::render::statement;
use crate::snapshot::Snapshot;

pub fn handle(snapshot: &Snapshot, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (rec, header) = crate::commands::act::prepare(snapshot, cfg, sub)?;
    // aggregation is complete before anything is written or launched
    let html = statement::render(&rec, Some(&header), cfg.offset()?)?;
    let path = sub
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path(cfg, &header.counterparty));
    write_statement(&path, &html)?;
    println!("Wrote act to {}", path.display());
    if sub.get_flag("open") {
        hand_off(cfg, &path)?;
    }
    Ok(())
}

/// `<output_dir>/act-<kind>-<id>.html`, with the id reduced to filename-safe
/// characters.
pub fn default_path(cfg: &Config, counterparty: &Counterparty) -> PathBuf {
    let id: String = counterparty
        .id()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    cfg.output_dir
        .join(format!("act-{}-{}.html", counterparty.kind(), id))
}

pub fn write_statement(path: &Path, html: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "statement written");
    Ok(())
}

/// Runs the configured print command with the document path appended.
pub fn hand_off(cfg: &Config, path: &Path) -> Result<()> {
    let Some((program, args)) = cfg.print_command.as_deref().and_then(|c| c.split_first()) else {
        bail!("No print_command configured; open {} manually", path.display());
    };
    info!(program = %program, path = %path.display(), "handing statement to print command");
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to run print command '{}'", program))?;
    if !status.success() {
        bail!("Print command '{}' exited with {}", program, status);
    }
    Ok(())
}
