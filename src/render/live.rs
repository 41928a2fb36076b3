// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::FixedOffset;
use comfy_table::Table;

use crate::engine::{Reconciliation, Summary};
use crate::models::{Counterparty, Currency, Unit};
use crate::render::format::{fmt_grouped, fmt_quantity, unit_label};
use crate::render::{Cell, Lang, PartyHeader, Section, sections};
use crate::utils::pretty_table;

pub const SUMMARY_HEADERS: [&str; 7] = [
    "Valyuta",
    "Umumiy sotuv",
    "Umumiy qarz",
    "To'lovlar",
    "Oldi-berdi",
    "Umumiy tovar (olish narxi)",
    "Sotilgan miqdor",
];

/// One row per currency. The last column pairs each row with one unit kind
/// (USD/Dona, SUM/Pachka, KGS/Karobka); it is a quantity, not money.
pub fn summary_rows(summary: &Summary) -> Vec<Vec<String>> {
    Currency::ALL
        .iter()
        .zip(Unit::ALL)
        .map(|(c, unit)| {
            let s = summary.get(*c);
            vec![
                c.code().to_string(),
                fmt_grouped(s.sales),
                fmt_grouped(s.debt),
                fmt_grouped(s.gross_credits),
                fmt_grouped(s.net_balance),
                fmt_grouped(s.products),
                format!("{} {}", fmt_quantity(Some(summary.units.get(unit))), unit_label(unit)),
            ]
        })
        .collect()
}

pub fn summary_table(summary: &Summary) -> Table {
    pretty_table(&SUMMARY_HEADERS, summary_rows(summary))
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Quantity(q) => fmt_quantity(*q),
        Cell::Money(m) => fmt_grouped(m.unwrap_or(0.0)),
    }
}

pub fn section_table(section: &Section) -> Table {
    let headers = section.kind.headers(Lang::Uz);
    let mut rows: Vec<Vec<String>> = section
        .rows
        .iter()
        .map(|r| r.iter().map(cell_text).collect())
        .collect();
    let mut total = vec!["Jami".to_string()];
    total.extend(
        section
            .subtotals
            .iter()
            .map(|(c, v)| format!("{} {}", fmt_grouped(*v), c)),
    );
    total.resize(headers.len().max(total.len()), String::new());
    rows.push(total);
    pretty_table(headers, rows)
}

/// The whole on-screen act as text.
pub fn render(rec: &Reconciliation, header: Option<&PartyHeader>, offset: FixedOffset) -> String {
    let mut out = String::new();
    if let Some(h) = header {
        let who = match h.counterparty {
            Counterparty::Client(_) => "Mijoz",
            Counterparty::Partner(_) => "Hamkor",
        };
        out.push_str(&format!("{}: {} ({})\n", who, h.name, h.counterparty.id()));
    }
    out.push_str(&summary_table(&rec.summary).to_string());
    out.push('\n');
    for section in sections(rec, offset) {
        out.push('\n');
        out.push_str(section.kind.title(Lang::Uz));
        out.push('\n');
        out.push_str(&section_table(&section).to_string());
        out.push('\n');
    }
    out
}
