// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ledger ("report") entries into canonical debt and payment records.

use tracing::debug;

use crate::models::{
    DebtRecord, DebtStatus, DocRef, LedgerEntry, PaymentRecord, PaymentSource, ProductRef, Unit,
};

pub const MISSING_PRODUCT_NAME: &str = "Mahsulot nomi yo'q";
pub const MISSING_PRODUCT_FIELD: &str = "-";

/// A ledger entry after its `type` tag has been interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerItem {
    Debt(DebtRecord),
    Payment(PaymentRecord),
}

impl LedgerEntry {
    /// `index` is the entry's position in the source collection; it names
    /// entries that carry no `_id`.
    pub fn classify(&self, index: usize) -> Option<LedgerItem> {
        match self.kind.as_deref() {
            Some("debt") => {
                let mut debt = normalize_ledger_entry(self);
                if debt.id.is_none() {
                    debt.id = Some(format!("report-{}", index));
                }
                Some(LedgerItem::Debt(debt))
            }
            Some("payment") => Some(LedgerItem::Payment(self.to_payment(index))),
            other => {
                debug!(index, kind = ?other, "skipping ledger entry with unknown type");
                None
            }
        }
    }

    fn to_payment(&self, index: usize) -> PaymentRecord {
        PaymentRecord {
            id: self.id.clone().unwrap_or_else(|| format!("report-{}", index)),
            client_id: self.client.as_ref().and_then(DocRef::id).map(str::to_string),
            partner_id: self.partner.as_ref().and_then(DocRef::id).map(str::to_string),
            amount: self.amount.unwrap_or(0.0),
            currency: self.currency.clone(),
            created_at: self.created_at.clone(),
            source: PaymentSource::Ledger,
        }
    }
}

fn present(s: &Option<String>) -> Option<String> {
    s.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Builds the canonical debt for a `type = "debt"` ledger entry. Every field
/// falls back independently; this never fails.
pub fn normalize_ledger_entry(entry: &LedgerEntry) -> DebtRecord {
    let product = entry.product.clone().unwrap_or_default();
    let name = present(&product.name)
        .or_else(|| present(&entry.product_name))
        .unwrap_or_else(|| MISSING_PRODUCT_NAME.to_string());
    let code = present(&product.code)
        .or_else(|| present(&entry.product_code))
        .unwrap_or_else(|| MISSING_PRODUCT_FIELD.to_string());
    let size = present(&product.size)
        .or_else(|| present(&entry.product_size))
        .unwrap_or_else(|| MISSING_PRODUCT_FIELD.to_string());

    let amount = entry.amount.unwrap_or(0.0);

    DebtRecord {
        id: entry.id.clone(),
        client: entry.client.clone(),
        partner: entry.partner.clone(),
        product: Some(ProductRef {
            name: Some(name),
            code: Some(code),
            size: Some(size),
        }),
        quantity: Some(entry.quantity.or(entry.product_quantity).unwrap_or(0.0)),
        unit: Some(present(&entry.unit).unwrap_or_else(|| Unit::Quantity.key().to_string())),
        selling_price: Some(entry.selling_price.or(entry.price).unwrap_or(0.0)),
        currency: Some(present(&entry.currency).unwrap_or_else(|| "USD".to_string())),
        total_amount: Some(amount),
        remaining_amount: Some(entry.remaining_amount.unwrap_or(amount)),
        payment_method: Some("credit".to_string()),
        status: Some(DebtStatus::Pending),
        payment_history: Vec::new(),
        created_at: entry.created_at.clone(),
    }
}
