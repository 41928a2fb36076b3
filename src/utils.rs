// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::config::Config;
use crate::selection::Selection;

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Picker search: case-insensitive substring of the option label.
pub fn label_matches(label: &str, input: Option<&str>) -> bool {
    match input {
        Some(q) if !q.is_empty() => label.to_lowercase().contains(&q.to_lowercase()),
        _ => true,
    }
}

/// Builds the selection from `--client/--partner/--from/--to`.
pub fn selection_from_args(cfg: &Config, sub: &clap::ArgMatches) -> Result<Selection> {
    let mut sel = Selection::new(cfg.offset()?);
    if let Some(id) = sub.get_one::<String>("client") {
        sel.select_client(id);
    }
    if let Some(number) = sub.get_one::<String>("partner") {
        sel.select_partner(number);
    }
    let from = sub.get_one::<String>("from").map(String::as_str).unwrap_or("");
    let to = sub.get_one::<String>("to").map(String::as_str).unwrap_or("");
    sel.set_start(from).context("Invalid --from")?;
    sel.set_end(to).context("Invalid --to")?;
    Ok(sel)
}
