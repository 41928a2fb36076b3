// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::ensure_known;
use crate::config::Config;
use crate::engine::{Reconciliation, Summary, reconcile};
use crate::error::ReconError;
use crate::models::Counterparty;
use crate::render::{PartyHeader, live};
use crate::snapshot::Snapshot;
use crate::utils::{maybe_print_json, selection_from_args};

pub fn handle(snapshot: &Snapshot, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (rec, header) = prepare(snapshot, cfg, sub)?;
    let out = ActJson {
        counterparty: &header.counterparty,
        name: &header.name,
        summary: &rec.summary,
    };
    if !maybe_print_json(json_flag, jsonl_flag, &out)? {
        print!("{}", live::render(&rec, Some(&header), cfg.offset()?));
    }
    Ok(())
}

#[derive(Serialize)]
struct ActJson<'a> {
    counterparty: &'a Counterparty,
    name: &'a str,
    summary: &'a Summary,
}

/// Selection from the command line, checked against the snapshot, then the
/// full reconciliation pass.
pub fn prepare(
    snapshot: &Snapshot,
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<(Reconciliation, PartyHeader)> {
    let query = selection_from_args(cfg, sub)?.query();
    let cp = query
        .counterparty
        .clone()
        .ok_or(ReconError::NoCounterparty)?;
    ensure_known(snapshot, &cp)?;
    let rec = reconcile(snapshot, &query);
    let header = PartyHeader::lookup(snapshot, &cp);
    Ok((rec, header))
}
