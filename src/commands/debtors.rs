// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Debts grouped by who owes them.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::models::{Currency, DebtRecord, DebtStatus, DocRef};
use crate::render::format::fmt_fixed;
use crate::snapshot::Snapshot;
use crate::utils::{label_matches, maybe_print_json, pretty_table};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DebtTotals {
    pub total: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtorGroup {
    pub debtor: String,
    pub debts: usize,
    pub open: usize,
    pub by_currency: BTreeMap<Currency, DebtTotals>,
}

fn debtor_name<'a>(snapshot: &'a Snapshot, debt: &'a DebtRecord) -> Option<&'a str> {
    debt.client
        .as_ref()
        .and_then(DocRef::name)
        .filter(|n| !n.is_empty())
        .or_else(|| {
            debt.partner
                .as_ref()
                .and_then(DocRef::id)
                .and_then(|number| snapshot.partner_name(number))
        })
}

/// Groups the debtor stream by client name, or by partner name for partner
/// debts; debts naming neither are left out. Groups keep first-seen order.
pub fn group_debtors(snapshot: &Snapshot, search: Option<&str>) -> Vec<DebtorGroup> {
    let mut groups: Vec<DebtorGroup> = Vec::new();
    for debt in &snapshot.debtors {
        let Some(name) = debtor_name(snapshot, debt) else {
            continue;
        };
        let idx = match groups.iter().position(|g| g.debtor == name) {
            Some(i) => i,
            None => {
                groups.push(DebtorGroup {
                    debtor: name.to_string(),
                    debts: 0,
                    open: 0,
                    by_currency: BTreeMap::new(),
                });
                groups.len() - 1
            }
        };
        let g = &mut groups[idx];
        g.debts += 1;
        if debt.status != Some(DebtStatus::Paid) {
            g.open += 1;
        }
        if let Some(c) = debt.currency() {
            let t = g.by_currency.entry(c).or_default();
            t.total += debt.total_amount();
            t.remaining += debt.remaining_amount();
        }
    }
    groups.retain(|g| label_matches(&g.debtor, search));
    groups
}

pub fn handle(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let search = sub.get_one::<String>("search").map(String::as_str);
    let data = group_debtors(snapshot, search);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let mut rows = Vec::new();
        for g in &data {
            if g.by_currency.is_empty() {
                rows.push(vec![
                    g.debtor.clone(),
                    format!("{}/{}", g.open, g.debts),
                    "-".into(),
                    fmt_fixed(0.0),
                    fmt_fixed(0.0),
                ]);
            }
            for (c, t) in &g.by_currency {
                rows.push(vec![
                    g.debtor.clone(),
                    format!("{}/{}", g.open, g.debts),
                    c.to_string(),
                    fmt_fixed(t.total),
                    fmt_fixed(t.remaining),
                ]);
            }
        }
        println!(
            "{}",
            pretty_table(&["Qarzdor", "Open/All", "CCY", "Umumiy summa", "Qoldiq"], rows)
        );
    }
    Ok(())
}
