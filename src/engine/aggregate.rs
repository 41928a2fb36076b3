// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-currency folding of matched records into a `Summary`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Currency, DebtRecord, PartnerProductRecord, PaymentRecord, SaleRecord, Unit};

/// Financial position in one currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencySummary {
    /// Σ sellingPrice × quantity over sales.
    pub sales: f64,
    /// Σ remainingAmount over debts.
    pub debt: f64,
    /// Σ amount over ledger payments and part settlements.
    pub gross_credits: f64,
    /// `gross_credits - debt`.
    pub net_balance: f64,
    /// Σ purchasePrice × quantity over partner products.
    pub products: f64,
}

/// Quantity sold per unit kind, across all currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitTotals {
    pub quantity: f64,
    pub package_quantity: f64,
    pub box_quantity: f64,
}

impl UnitTotals {
    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Quantity => self.quantity,
            Unit::PackageQuantity => self.package_quantity,
            Unit::BoxQuantity => self.box_quantity,
        }
    }

    fn slot(&mut self, unit: Unit) -> &mut f64 {
        match unit {
            Unit::Quantity => &mut self.quantity,
            Unit::PackageQuantity => &mut self.package_quantity,
            Unit::BoxQuantity => &mut self.box_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub by_currency: BTreeMap<Currency, CurrencySummary>,
    pub units: UnitTotals,
}

impl Summary {
    fn zeroed() -> Self {
        Summary {
            by_currency: Currency::ALL
                .iter()
                .map(|c| (*c, CurrencySummary::default()))
                .collect(),
            units: UnitTotals::default(),
        }
    }

    pub fn get(&self, currency: Currency) -> CurrencySummary {
        self.by_currency.get(&currency).copied().unwrap_or_default()
    }

    fn bucket(&mut self, currency: Option<Currency>) -> Option<&mut CurrencySummary> {
        currency.and_then(|c| self.by_currency.get_mut(&c))
    }
}

/// Folds already matched and filtered records into one summary per currency.
///
/// `debts` carries stream debts and normalized ledger debts; `payments`
/// carries ledger payments and part settlements. Records in untracked or
/// missing currencies contribute to no bucket. The net balance is derived
/// after every other field is complete.
pub fn aggregate(
    sales: &[SaleRecord],
    debts: &[DebtRecord],
    payments: &[PaymentRecord],
    products: &[PartnerProductRecord],
) -> Summary {
    let mut summary = Summary::zeroed();

    for s in sales {
        if let Some(b) = summary.bucket(s.currency()) {
            b.sales += s.line_total();
        }
        if let Some(unit) = Unit::parse(s.unit.as_deref()) {
            *summary.units.slot(unit) += s.quantity();
        }
    }
    for p in payments {
        if let Some(b) = summary.bucket(p.currency()) {
            b.gross_credits += p.amount;
        }
    }
    for d in debts {
        if let Some(b) = summary.bucket(d.currency()) {
            b.debt += d.remaining_amount();
        }
    }
    for p in products {
        if let Some(b) = summary.bucket(p.currency()) {
            b.products += p.purchase_value();
        }
    }

    for b in summary.by_currency.values_mut() {
        b.net_balance = b.gross_credits - b.debt;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::normalize_ledger_entry;
    use crate::models::LedgerEntry;
    use serde_json::json;

    fn sales(v: serde_json::Value) -> Vec<SaleRecord> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn single_usd_sale() {
        let s = sales(json!([{"currency": "USD", "quantity": 2, "sellingPrice": 50}]));
        let out = aggregate(&s, &[], &[], &[]);
        assert_eq!(
            out.get(Currency::Usd),
            CurrencySummary { sales: 100.0, ..Default::default() }
        );
        assert_eq!(out.get(Currency::Sum), CurrencySummary::default());
    }

    #[test]
    fn ledger_debt_drives_balance_negative() {
        let entry: LedgerEntry =
            serde_json::from_value(json!({"type": "debt", "amount": 30, "currency": "USD"})).unwrap();
        let out = aggregate(&[], &[normalize_ledger_entry(&entry)], &[], &[]);
        assert_eq!(out.get(Currency::Usd).debt, 30.0);
        assert_eq!(out.get(Currency::Usd).net_balance, -30.0);
    }

    #[test]
    fn unknown_currency_is_excluded() {
        let s = sales(json!([
            {"currency": "EUR", "quantity": 1, "sellingPrice": 10, "unit": "quantity"},
            {"quantity": 1, "sellingPrice": 10}
        ]));
        let out = aggregate(&s, &[], &[], &[]);
        for c in Currency::ALL {
            assert_eq!(out.get(c).sales, 0.0);
        }
        // unit totals ignore currency
        assert_eq!(out.units.quantity, 1.0);
    }

    #[test]
    fn unit_totals_split_by_unit() {
        let s = sales(json!([
            {"currency": "USD", "quantity": 2, "unit": "quantity"},
            {"currency": "SUM", "quantity": 3, "unit": "quantity"},
            {"currency": "KGS", "quantity": 4, "unit": "package_quantity"},
            {"currency": "USD", "quantity": 5, "unit": "box_quantity"},
            {"currency": "USD", "unit": "box_quantity"}
        ]));
        let u = aggregate(&s, &[], &[], &[]).units;
        assert_eq!((u.quantity, u.package_quantity, u.box_quantity), (5.0, 4.0, 5.0));
    }
}
