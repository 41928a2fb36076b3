// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::engine::Summary;
use crate::error::ReconError;
use crate::models::{Currency, Unit};
use crate::snapshot::Snapshot;

pub fn handle(snapshot: &Snapshot, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        return Err(ReconError::UnsupportedFormat(fmt).into());
    }

    let (rec, _) = crate::commands::act::prepare(snapshot, cfg, sub)?;
    let rows = summary_rows(&rec.summary);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
    }
    println!("Exported summary to {}", out);
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub currency: Currency,
    pub sales: f64,
    pub debt: f64,
    pub gross_credits: f64,
    pub net_balance: f64,
    pub products: f64,
    pub unit: Unit,
    pub units_sold: f64,
}

pub fn summary_rows(summary: &Summary) -> Vec<SummaryRow> {
    Currency::ALL
        .iter()
        .zip(Unit::ALL)
        .map(|(c, unit)| {
            let s = summary.get(*c);
            SummaryRow {
                currency: *c,
                sales: s.sales,
                debt: s.debt,
                gross_credits: s.gross_credits,
                net_balance: s.net_balance,
                products: s.products,
                unit,
                units_sold: summary.units.get(unit),
            }
        })
        .collect()
}
