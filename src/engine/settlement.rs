// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Synthetic payments for a partner's inactive catalog parts.
//!
//! An inactive part is consigned stock that has been settled outside the
//! debt/payment streams, so its purchase value counts toward the partner's
//! balance as if it had been paid.

use tracing::debug;

use crate::engine::window::DateWindow;
use crate::models::{
    Currency, PartStatus, Partner, PartnerProductRecord, PaymentRecord, PaymentSource,
};

/// One payment per inactive part of `partner_number` that has matching
/// products inside `window`. Parts are visited in catalog order and products
/// in source order, so identical input yields identical output.
pub fn derive_settlements(
    partner_number: &str,
    products: &[PartnerProductRecord],
    partners: &[Partner],
    window: &DateWindow,
) -> Vec<PaymentRecord> {
    let Some(partner) = partners.iter().find(|p| p.partner_number == partner_number) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for part in partner.parts.iter().filter(|p| p.status == PartStatus::Inactive) {
        let matching: Vec<&PartnerProductRecord> = products
            .iter()
            .filter(|p| {
                p.partner_number.as_deref() == Some(partner_number)
                    && p.part.as_deref() == Some(part.part.as_str())
                    && window.contains(p.created_at.as_deref())
            })
            .collect();
        let Some(first) = matching.first() else {
            continue;
        };
        let amount = matching
            .iter()
            .map(|p| p.quantity() * p.purchase_price())
            .sum::<f64>();
        debug!(partner = partner_number, part = %part.part, products = matching.len(), amount, "part settled");
        out.push(PaymentRecord {
            id: format!("part-{}-{}", partner_number, part.part),
            client_id: None,
            partner_id: Some(partner_number.to_string()),
            amount,
            currency: Some(Currency::Usd.code().to_string()),
            created_at: first.created_at.clone(),
            source: PaymentSource::PartSettlement {
                part: part.part.clone(),
            },
        });
    }
    out
}
