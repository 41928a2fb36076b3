// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::FixedOffset;
use reconact::engine::{ActQuery, DateWindow, reconcile};
use reconact::models::{Counterparty, Currency};
use reconact::render::format::{NOT_SPECIFIED, fmt_fixed, fmt_money};
use reconact::render::{Cell, PartyHeader, SectionKind, live, sections, statement};
use reconact::snapshot::Snapshot;
use serde_json::json;

fn utc() -> FixedOffset {
    DateWindow::unbounded().offset
}

fn snapshot() -> Snapshot {
    Snapshot {
        clients: serde_json::from_value(json!([
            {"_id": "c1", "name": "Ali & Sons <Ltd>", "phone": "+998"}
        ]))
        .unwrap(),
        partners: serde_json::from_value(json!([
            {"partner_number": "P-7", "parts": [{"part": "1", "status": "inactive"}]}
        ]))
        .unwrap(),
        sales: serde_json::from_value(json!([
            {"clientId": "c1", "currency": "USD", "quantity": 1234, "sellingPrice": 1000.5,
             "unit": "quantity", "createdAt": "2025-05-01T08:00:00Z"},
            {"clientId": "c1", "currency": "KGS", "quantity": 2, "sellingPrice": 7.25},
            {"clientId": "c1", "quantity": 1, "sellingPrice": 3},
            {"partnerId": "P-7", "currency": "SUM", "quantity": 5, "sellingPrice": 100}
        ]))
        .unwrap(),
        debtors: serde_json::from_value(json!([
            {"clientId": "c1", "currency": "USD", "totalAmount": 900, "remainingAmount": 600.75}
        ]))
        .unwrap(),
        reports: serde_json::from_value(json!([
            {"type": "payment", "clientId": "c1", "amount": 250, "currency": "USD",
             "createdAt": "2025-05-02T10:00:00Z"},
            {"type": "payment", "clientId": "c1", "amount": 1}
        ]))
        .unwrap(),
        partner_products: serde_json::from_value(json!([
            {"partner_number": "P-7", "name_partner": "Hamkor", "part": "1", "quantity": 4,
             "purchasePrice": {"value": 2.5}, "currency": "USD",
             "createdAt": "2025-05-03T00:00:00Z"}
        ]))
        .unwrap(),
        revision: 1,
    }
}

fn act(snap: &Snapshot, cp: Counterparty) -> reconact::engine::Reconciliation {
    reconcile(
        snap,
        &ActQuery {
            counterparty: Some(cp),
            window: DateWindow::unbounded(),
        },
    )
}

#[test]
fn missing_product_renders_placeholder_everywhere() {
    let snap = snapshot();
    let rec = act(&snap, Counterparty::Client("c1".into()));
    let secs = sections(&rec, utc());
    let sales = &secs[0];
    assert_eq!(sales.kind, SectionKind::Sales);
    for row in &sales.rows {
        for cell in &row[..3] {
            assert_eq!(cell, &Cell::Text(NOT_SPECIFIED.to_string()));
        }
    }
    // currency missing on the third sale
    assert_eq!(sales.rows[2][6], Cell::Text("-".into()));

    let html = statement::render(&rec, None, utc()).unwrap();
    assert!(!html.contains("undefined"));
    assert!(!html.contains("null"));
    assert!(!html.contains("<td></td>"));
}

#[test]
fn subtotals_come_from_the_summary() {
    let snap = snapshot();
    let rec = act(&snap, Counterparty::Client("c1".into()));
    for section in sections(&rec, utc()) {
        for (c, v) in &section.subtotals {
            assert_eq!(*v, section.kind.subtotal(&rec.summary.get(*c)));
        }
    }
    // the currency-less sale is listed but not summed
    assert_eq!(rec.sales.len(), 3);
    assert_eq!(rec.summary.get(Currency::Usd).sales, 1234.0 * 1000.5);
    assert_eq!(rec.summary.get(Currency::Kgs).sales, 14.5);
}

#[test]
fn live_and_printed_totals_agree() {
    let snap = snapshot();
    for cp in [
        Counterparty::Client("c1".into()),
        Counterparty::Partner("P-7".into()),
    ] {
        let rec = act(&snap, cp.clone());
        let header = PartyHeader::lookup(&snap, &cp);
        let screen = live::render(&rec, Some(&header), utc());
        let html = statement::render(&rec, Some(&header), utc()).unwrap();

        let rows = live::summary_rows(&rec.summary);
        for (row, c) in rows.iter().zip(Currency::ALL) {
            let s = rec.summary.get(c);
            for (i, v) in [s.sales, s.debt, s.gross_credits, s.net_balance, s.products]
                .into_iter()
                .enumerate()
            {
                // same value, grouping stripped
                assert_eq!(row[i + 1].replace(',', ""), fmt_fixed(v));
                assert!(html.contains(&fmt_money(v, c.code())));
            }
        }
        assert!(screen.contains(&rows[0][1]));
    }
}

#[test]
fn client_statement_layout() {
    let snap = snapshot();
    let cp = Counterparty::Client("c1".into());
    let rec = act(&snap, cp.clone());
    let header = PartyHeader::lookup(&snap, &cp);
    let html = statement::render(&rec, Some(&header), utc()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h2>Oldi-berdi</h2>"));
    assert!(html.contains(&ammonia::clean_text("Ali & Sons <Ltd>")));
    assert!(!html.contains("<Ltd>"));
    assert!(html.contains(&format!("Адрес: {}", ammonia::clean_text(NOT_SPECIFIED))));
    assert!(html.contains("<h2>Продажи</h2>"));
    assert!(html.contains("<h2>Долги</h2>"));
    assert!(html.contains("<h2>Платежи</h2>"));
    assert!(!html.contains("Товары партнёра"));
    // net USD: 250 - 600.75
    assert!(html.contains("-350.75 USD"));
    assert_eq!(html.matches("class=\"subtotal\"").count(), 3);

    let oldi = html.find("Oldi-berdi").unwrap();
    let party = html.find("Клиент").unwrap();
    assert!(oldi < party);
}

#[test]
fn partner_statement_lists_products() {
    let snap = snapshot();
    let cp = Counterparty::Partner("P-7".into());
    let rec = act(&snap, cp.clone());
    let header = PartyHeader::lookup(&snap, &cp);
    assert_eq!(header.name, "Hamkor");

    let html = statement::render(&rec, Some(&header), utc()).unwrap();
    assert!(html.contains("Партнер"));
    assert!(html.contains("Товары партнёра"));
    assert_eq!(html.matches("class=\"subtotal\"").count(), 4);
    // settlement: 4 * 2.5
    assert!(html.contains("10.00 USD"));
}

#[test]
fn bounded_statement_shows_period() {
    let snap = snapshot();
    let rec = reconcile(
        &snap,
        &ActQuery {
            counterparty: Some(Counterparty::Client("c1".into())),
            window: DateWindow::new(
                chrono::NaiveDate::from_ymd_opt(2025, 5, 1),
                chrono::NaiveDate::from_ymd_opt(2025, 5, 31),
                utc(),
            ),
        },
    );
    let html = statement::render(&rec, None, utc()).unwrap();
    assert!(html.contains("01.05.2025"));
    assert!(html.contains("31.05.2025"));
    // undated records fall outside the window
    assert_eq!(rec.sales.len(), 1);
    assert_eq!(rec.payments.len(), 1);
}

#[test]
fn live_view_lists_payment_days() {
    let snap = snapshot();
    let cp = Counterparty::Client("c1".into());
    let rec = act(&snap, cp.clone());
    let screen = live::render(&rec, Some(&PartyHeader::lookup(&snap, &cp)), utc());
    assert!(screen.contains("02.05.2025"));
    assert!(screen.contains(NOT_SPECIFIED));
    assert!(screen.contains("Jami"));
    assert!(!screen.contains("Hamkor tovarlari"));
}

#[test]
fn sale_line_total_prefers_the_supplied_amount() {
    let snap = Snapshot {
        clients: serde_json::from_value(json!([{"_id": "c1", "name": "Ali"}])).unwrap(),
        sales: serde_json::from_value(json!([
            {"clientId": "c1", "currency": "USD", "quantity": 2, "sellingPrice": 50,
             "totalAmount": 90},
            {"clientId": "c1", "currency": "USD", "quantity": 3, "sellingPrice": 4}
        ]))
        .unwrap(),
        ..Default::default()
    };
    let rec = act(&snap, Counterparty::Client("c1".into()));
    let secs = sections(&rec, utc());
    let jami: Vec<&Cell> = secs[0].rows.iter().map(|r| &r[7]).collect();
    assert_eq!(jami, vec![&Cell::Money(Some(90.0)), &Cell::Money(Some(12.0))]);
    // the currency subtotal is built from quantity * price
    assert_eq!(rec.summary.get(Currency::Usd).sales, 112.0);
}
