// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Projections of a `Reconciliation` for people.
//!
//! Both outputs are built from the same `Section`s, and every subtotal row is
//! read from `Summary`, so the live view and the printed act cannot disagree.

pub mod format;
pub mod live;
pub mod statement;

use chrono::FixedOffset;

use crate::engine::{CurrencySummary, Reconciliation};
use crate::models::{Counterparty, Currency, PaymentSource};
use crate::snapshot::Snapshot;
use format::{
    NOT_SPECIFIED, currency_text, fmt_day, product_code, product_name, product_size, text_or,
    unit_text,
};

/// Label language: Uzbek on screen, Russian on the printed act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Uz,
    Ru,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Quantity(Option<f64>),
    Money(Option<f64>),
}

impl Cell {
    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Sales,
    Debts,
    Payments,
    PartnerProducts,
}

impl SectionKind {
    pub fn title(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (SectionKind::Sales, Lang::Uz) => "Sotuvlar",
            (SectionKind::Sales, Lang::Ru) => "Продажи",
            (SectionKind::Debts, Lang::Uz) => "Qarzlar",
            (SectionKind::Debts, Lang::Ru) => "Долги",
            (SectionKind::Payments, Lang::Uz) => "To'lovlar",
            (SectionKind::Payments, Lang::Ru) => "Платежи",
            (SectionKind::PartnerProducts, Lang::Uz) => "Hamkor tovarlari",
            (SectionKind::PartnerProducts, Lang::Ru) => "Товары партнёра",
        }
    }

    pub fn headers(self, lang: Lang) -> &'static [&'static str] {
        match (self, lang) {
            (SectionKind::Sales, Lang::Uz) => {
                &["Mahsulot", "Kodi", "Razmeri", "Miqdor", "Birlik", "Narx", "Valyuta", "Jami"]
            }
            (SectionKind::Sales, Lang::Ru) => {
                &["Продукт", "Код", "Размер", "Количество", "Единица", "Цена", "Валюта", "Общий"]
            }
            (SectionKind::Debts, Lang::Uz) => &[
                "Mahsulot", "Kodi", "Razmeri", "Miqdor", "Birlik", "Narx", "Valyuta", "Jami",
                "Qolgan",
            ],
            (SectionKind::Debts, Lang::Ru) => &[
                "Продукт", "Код", "Размер", "Количество", "Единица", "Цена", "Валюта", "Общий",
                "Остаток",
            ],
            (SectionKind::Payments, Lang::Uz) => &["Summa", "Valyuta", "Sana", "Manba"],
            (SectionKind::Payments, Lang::Ru) => &["Сумма", "Валюта", "Дата", "Источник"],
            (SectionKind::PartnerProducts, Lang::Uz) => &[
                "Mahsulot", "Kodi", "Hajmi", "Miqdor", "Paket", "Quti", "Olish narxi",
                "Sotish narxi", "Valyuta", "Jami",
            ],
            (SectionKind::PartnerProducts, Lang::Ru) => &[
                "Продукт", "Код", "Размер", "Количество", "Пачка", "Коробка", "Цена покупки",
                "Цена продажи", "Валюта", "Общий",
            ],
        }
    }

    /// The `Summary` field this section's subtotal row shows.
    pub fn subtotal(self, s: &CurrencySummary) -> f64 {
        match self {
            SectionKind::Sales => s.sales,
            SectionKind::Debts => s.debt,
            SectionKind::Payments => s.gross_credits,
            SectionKind::PartnerProducts => s.products,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<Vec<Cell>>,
    /// One entry per tracked currency, in `Currency::ALL` order.
    pub subtotals: Vec<(Currency, f64)>,
}

/// Identity block printed above the act.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyHeader {
    pub counterparty: Counterparty,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl PartyHeader {
    pub fn lookup(snapshot: &Snapshot, counterparty: &Counterparty) -> PartyHeader {
        match counterparty {
            Counterparty::Client(id) => {
                let client = snapshot.client(id);
                PartyHeader {
                    counterparty: counterparty.clone(),
                    name: text_or(client.and_then(|c| c.name.as_deref()), NOT_SPECIFIED).to_string(),
                    phone: Some(
                        text_or(client.and_then(|c| c.phone.as_deref()), NOT_SPECIFIED).to_string(),
                    ),
                    address: Some(
                        text_or(client.and_then(|c| c.address.as_deref()), NOT_SPECIFIED)
                            .to_string(),
                    ),
                }
            }
            Counterparty::Partner(number) => PartyHeader {
                counterparty: counterparty.clone(),
                name: text_or(snapshot.partner_name(number), NOT_SPECIFIED).to_string(),
                phone: None,
                address: None,
            },
        }
    }
}

fn subtotals(kind: SectionKind, rec: &Reconciliation) -> Vec<(Currency, f64)> {
    Currency::ALL
        .iter()
        .map(|c| (*c, kind.subtotal(&rec.summary.get(*c))))
        .collect()
}

/// Detail sections for the selected counterparty; partner products only for
/// partners, nothing at all without a selection.
pub fn sections(rec: &Reconciliation, offset: FixedOffset) -> Vec<Section> {
    let Some(cp) = rec.query.counterparty.as_ref() else {
        return Vec::new();
    };

    let sales = rec
        .sales
        .iter()
        .map(|s| {
            let product = s.product.as_ref();
            vec![
                Cell::text(product_name(product)),
                Cell::text(product_code(product)),
                Cell::text(product_size(product)),
                Cell::Quantity(s.quantity),
                Cell::text(unit_text(s.unit.as_deref())),
                Cell::Money(s.selling_price),
                Cell::text(currency_text(s.currency.as_deref())),
                Cell::Money(Some(s.total_amount())),
            ]
        })
        .collect();

    let debts = rec
        .debts
        .iter()
        .map(|d| {
            let product = d.product.as_ref();
            vec![
                Cell::text(product_name(product)),
                Cell::text(product_code(product)),
                Cell::text(product_size(product)),
                Cell::Quantity(d.quantity),
                Cell::text(unit_text(d.unit.as_deref())),
                Cell::Money(d.selling_price),
                Cell::text(currency_text(d.currency.as_deref())),
                Cell::Money(d.total_amount),
                Cell::Money(d.remaining_amount),
            ]
        })
        .collect();

    let payments = rec
        .payments
        .iter()
        .map(|p| {
            let source = match &p.source {
                PaymentSource::Ledger => "-".to_string(),
                PaymentSource::PartSettlement { part } => format!("part {}", part),
            };
            vec![
                Cell::Money(Some(p.amount)),
                Cell::text(currency_text(p.currency.as_deref())),
                Cell::Text(fmt_day(p.created_at.as_deref(), offset)),
                Cell::Text(source),
            ]
        })
        .collect();

    let mut out = vec![
        Section {
            kind: SectionKind::Sales,
            rows: sales,
            subtotals: subtotals(SectionKind::Sales, rec),
        },
        Section {
            kind: SectionKind::Debts,
            rows: debts,
            subtotals: subtotals(SectionKind::Debts, rec),
        },
        Section {
            kind: SectionKind::Payments,
            rows: payments,
            subtotals: subtotals(SectionKind::Payments, rec),
        },
    ];

    if let Counterparty::Partner(_) = cp {
        let products = rec
            .products
            .iter()
            .map(|p| {
                vec![
                    Cell::text(text_or(p.name.as_deref(), NOT_SPECIFIED)),
                    Cell::text(text_or(p.code.as_deref(), NOT_SPECIFIED)),
                    Cell::text(text_or(p.size.as_deref(), NOT_SPECIFIED)),
                    Cell::Quantity(p.quantity),
                    p.package_quantity
                        .map_or_else(|| Cell::text(NOT_SPECIFIED), |q| Cell::Quantity(Some(q))),
                    p.box_quantity
                        .map_or_else(|| Cell::text(NOT_SPECIFIED), |q| Cell::Quantity(Some(q))),
                    Cell::Money(Some(p.purchase_price())),
                    Cell::Money(Some(p.selling_price())),
                    Cell::text(currency_text(p.currency.as_deref())),
                    Cell::Money(Some(p.purchase_value())),
                ]
            })
            .collect();
        out.push(Section {
            kind: SectionKind::PartnerProducts,
            rows: products,
            subtotals: subtotals(SectionKind::PartnerProducts, rec),
        });
    }
    out
}
