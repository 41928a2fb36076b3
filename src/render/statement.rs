// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Standalone HTML "reconciliation act" for hard copy.
//!
//! Numbers are fixed two-decimal with a currency suffix, whatever the caller's
//! locale. All record text is escaped.

use std::fmt::{self, Write as _};

use ammonia::clean_text;
use chrono::FixedOffset;

use crate::engine::{Reconciliation, Summary};
use crate::models::{Counterparty, Currency, Unit};
use crate::render::format::{fmt_fixed_opt, fmt_money, fmt_quantity, unit_label};
use crate::render::{Cell, Lang, PartyHeader, Section, sections};

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; }
    table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
    th, td { border: 1px solid #000; padding: 5px; text-align: left; font-size: 12px; }
    tr.subtotal td { font-weight: bold; }
"#;

fn esc(s: &str) -> String {
    clean_text(s)
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => esc(s),
        Cell::Quantity(q) => fmt_quantity(*q),
        Cell::Money(m) => fmt_fixed_opt(*m),
    }
}

fn balance_table(out: &mut String, summary: &Summary) -> fmt::Result {
    out.push_str("<h2>Oldi-berdi</h2>\n<table>\n<thead><tr>");
    for c in Currency::ALL {
        write!(out, "<th>{}</th>", c)?;
    }
    out.push_str("</tr></thead>\n<tbody><tr>");
    for c in Currency::ALL {
        write!(out, "<td>{}</td>", fmt_money(summary.get(c).net_balance, c.code()))?;
    }
    out.push_str("</tr></tbody>\n</table>\n");
    Ok(())
}

fn summary_table(out: &mut String, summary: &Summary) -> fmt::Result {
    out.push_str("<h2>Сводка по валютам</h2>\n<table>\n<thead><tr>");
    for h in [
        "Валюта",
        "Продажи",
        "Долг",
        "Платежи",
        "Баланс",
        "Товары (цена покупки)",
        "Продано",
    ] {
        write!(out, "<th>{}</th>", h)?;
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for (c, unit) in Currency::ALL.iter().zip(Unit::ALL) {
        let s = summary.get(*c);
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} {}</td></tr>",
            c,
            fmt_money(s.sales, c.code()),
            fmt_money(s.debt, c.code()),
            fmt_money(s.gross_credits, c.code()),
            fmt_money(s.net_balance, c.code()),
            fmt_money(s.products, c.code()),
            fmt_quantity(Some(summary.units.get(unit))),
            unit_label(unit),
        )?;
    }
    out.push_str("</tbody>\n</table>\n");
    Ok(())
}

fn party(out: &mut String, header: &PartyHeader) -> fmt::Result {
    match &header.counterparty {
        Counterparty::Client(_) => {
            writeln!(out, "<h2>Клиент: {}</h2>", esc(&header.name))?;
            writeln!(
                out,
                "<p>Номер телефона: {}</p>",
                esc(header.phone.as_deref().unwrap_or_default())
            )?;
            writeln!(
                out,
                "<p>Адрес: {}</p>",
                esc(header.address.as_deref().unwrap_or_default())
            )?;
        }
        Counterparty::Partner(number) => {
            writeln!(out, "<h2>Партнер: {}</h2>", esc(&header.name))?;
            writeln!(out, "<p>Номер партнёра: {}</p>", esc(number))?;
        }
    }
    Ok(())
}

/// Subtotal cells spread the three currencies across the table width.
fn subtotal_row(out: &mut String, section: &Section, width: usize) -> fmt::Result {
    let n = section.subtotals.len().max(1);
    let span = (width / n).max(1);
    out.push_str("<tr class=\"subtotal\">");
    for (i, (c, v)) in section.subtotals.iter().enumerate() {
        let cols = if i + 1 == n { width.saturating_sub(span * (n - 1)).max(1) } else { span };
        write!(out, "<td colspan=\"{}\">{}</td>", cols, fmt_money(*v, c.code()))?;
    }
    out.push_str("</tr>\n");
    Ok(())
}

fn section_table(out: &mut String, section: &Section) -> fmt::Result {
    let headers = section.kind.headers(Lang::Ru);
    writeln!(out, "<h2>{}</h2>", section.kind.title(Lang::Ru))?;
    out.push_str("<table>\n<thead><tr>");
    for h in headers {
        write!(out, "<th>{}</th>", h)?;
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &section.rows {
        out.push_str("<tr>");
        for cell in row {
            write!(out, "<td>{}</td>", cell_html(cell))?;
        }
        out.push_str("</tr>\n");
    }
    subtotal_row(out, section, headers.len())?;
    out.push_str("</tbody>\n</table>\n");
    Ok(())
}

/// Builds the complete document. `header` is required for the identity
/// block; without a counterparty only the balance tables are emitted.
pub fn render(
    rec: &Reconciliation,
    header: Option<&PartyHeader>,
    offset: FixedOffset,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Акт сверки</title>\n<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");

    let w = &rec.query.window;
    if let (Some(start), Some(end)) = (w.start, w.end) {
        writeln!(
            out,
            "<p>Период: {} – {}</p>",
            start.format("%d.%m.%Y"),
            end.format("%d.%m.%Y")
        )?;
    }

    balance_table(&mut out, &rec.summary)?;
    if let Some(h) = header {
        party(&mut out, h)?;
    }
    summary_table(&mut out, &rec.summary)?;
    for section in sections(rec, offset) {
        section_table(&mut out, &section)?;
    }
    out.push_str("</body>\n</html>\n");
    Ok(out)
}
