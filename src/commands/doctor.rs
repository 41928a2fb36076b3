// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::FixedOffset;

use crate::config::Config;
use crate::engine::window::parse_timestamp;
use crate::models::{Currency, PartStatus};
use crate::snapshot::Snapshot;
use crate::utils::pretty_table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

fn issue(kind: &'static str, detail: String) -> Issue {
    Issue { kind, detail }
}

fn check_timestamp(
    out: &mut Vec<Issue>,
    stream: &str,
    id: Option<&str>,
    raw: Option<&str>,
    offset: FixedOffset,
) {
    let id = id.unwrap_or("?");
    match raw {
        None => out.push(issue("missing_date", format!("{} {}", stream, id))),
        Some(r) if parse_timestamp(r, offset).is_none() => {
            out.push(issue("bad_date", format!("{} {} '{}'", stream, id, r)))
        }
        _ => {}
    }
}

fn check_currency(out: &mut Vec<Issue>, stream: &str, id: Option<&str>, raw: Option<&str>) {
    if Currency::parse(raw).is_none() {
        out.push(issue(
            "untracked_currency",
            format!("{} {} '{}'", stream, id.unwrap_or("?"), raw.unwrap_or("")),
        ));
    }
}

/// Records that date filtering or currency bucketing will silently drop,
/// plus inconsistencies the engine trusts upstream to avoid.
pub fn diagnose(snapshot: &Snapshot, offset: FixedOffset) -> Vec<Issue> {
    let mut out = Vec::new();

    for s in &snapshot.sales {
        check_timestamp(&mut out, "sale", s.id.as_deref(), s.created_at.as_deref(), offset);
        check_currency(&mut out, "sale", s.id.as_deref(), s.currency.as_deref());
    }
    for d in &snapshot.debtors {
        check_timestamp(&mut out, "debt", d.id.as_deref(), d.created_at.as_deref(), offset);
        check_currency(&mut out, "debt", d.id.as_deref(), d.currency.as_deref());
        if d.remaining_amount() > d.total_amount() {
            out.push(issue(
                "remaining_exceeds_total",
                format!(
                    "debt {} {} > {}",
                    d.id.as_deref().unwrap_or("?"),
                    d.remaining_amount(),
                    d.total_amount()
                ),
            ));
        }
    }
    for (i, r) in snapshot.reports.iter().enumerate() {
        let id = r.id.clone().unwrap_or_else(|| format!("#{}", i));
        check_timestamp(&mut out, "report", Some(id.as_str()), r.created_at.as_deref(), offset);
        match r.kind.as_deref() {
            Some("debt") => {}
            // absent payment currencies fall out of every bucket
            Some("payment") => check_currency(&mut out, "report", Some(id.as_str()), r.currency.as_deref()),
            other => out.push(issue(
                "unknown_report_type",
                format!("report {} '{}'", id, other.unwrap_or("")),
            )),
        }
    }
    for p in &snapshot.partner_products {
        check_timestamp(&mut out, "partner_product", p.id.as_deref(), p.created_at.as_deref(), offset);
        check_currency(&mut out, "partner_product", p.id.as_deref(), p.currency.as_deref());
    }
    for partner in &snapshot.partners {
        for part in partner.parts.iter().filter(|p| p.status == PartStatus::Inactive) {
            let has_products = snapshot.partner_products.iter().any(|p| {
                p.partner_number.as_deref() == Some(partner.partner_number.as_str())
                    && p.part.as_deref() == Some(part.part.as_str())
            });
            if !has_products {
                out.push(issue(
                    "empty_inactive_part",
                    format!("partner {} part {}", partner.partner_number, part.part),
                ));
            }
        }
    }
    out
}

pub fn handle(snapshot: &Snapshot, cfg: &Config) -> Result<()> {
    let issues = diagnose(snapshot, cfg.offset()?);
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
