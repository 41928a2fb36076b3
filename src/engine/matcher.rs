// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ownership and date predicates shared by every record stream.

use crate::engine::window::DateWindow;
use crate::models::{
    Counterparty, DebtRecord, DocRef, PartnerProductRecord, PaymentRecord, SaleRecord,
};

/// A record that belongs (or not) to a counterparty.
pub trait Owned {
    fn owned_by(&self, counterparty: &Counterparty) -> bool;
}

/// A record carrying a creation timestamp.
pub trait Dated {
    fn created_at(&self) -> Option<&str>;
}

fn ref_id(r: &Option<DocRef>) -> Option<&str> {
    r.as_ref().and_then(DocRef::id)
}

fn ref_present(r: &Option<DocRef>) -> bool {
    match r {
        None => false,
        Some(DocRef::Id(id)) => !id.is_empty(),
        Some(DocRef::Doc { .. }) => true,
    }
}

impl Owned for SaleRecord {
    /// Partner selection takes every sale that has a partner reference at all,
    /// whichever partner it names. Totals reported for partners depend on this.
    fn owned_by(&self, counterparty: &Counterparty) -> bool {
        match counterparty {
            Counterparty::Client(id) => ref_id(&self.client) == Some(id.as_str()),
            Counterparty::Partner(_) => ref_present(&self.partner),
        }
    }
}

impl Owned for DebtRecord {
    fn owned_by(&self, counterparty: &Counterparty) -> bool {
        match counterparty {
            Counterparty::Client(id) => ref_id(&self.client) == Some(id.as_str()),
            Counterparty::Partner(number) => ref_id(&self.partner) == Some(number.as_str()),
        }
    }
}

impl Owned for PaymentRecord {
    fn owned_by(&self, counterparty: &Counterparty) -> bool {
        match counterparty {
            Counterparty::Client(id) => self.client_id.as_deref() == Some(id.as_str()),
            Counterparty::Partner(number) => self.partner_id.as_deref() == Some(number.as_str()),
        }
    }
}

impl Owned for PartnerProductRecord {
    fn owned_by(&self, counterparty: &Counterparty) -> bool {
        match counterparty {
            Counterparty::Client(_) => false,
            Counterparty::Partner(number) => self.partner_number.as_deref() == Some(number.as_str()),
        }
    }
}

impl Dated for SaleRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Dated for DebtRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Dated for PaymentRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Dated for PartnerProductRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Records owned by `counterparty` and inside `window`, in source order.
/// Nothing matches when no counterparty is selected.
pub fn select<'a, T, I>(records: I, counterparty: Option<&Counterparty>, window: &DateWindow) -> Vec<T>
where
    T: Owned + Dated + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(cp) = counterparty else {
        return Vec::new();
    };
    records
        .into_iter()
        .filter(|r| r.owned_by(cp) && window.contains(r.created_at()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sale(v: serde_json::Value) -> SaleRecord {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn client_sales_match_on_identity() {
        let s = sale(json!({"clientId": {"_id": "c1", "name": "Ali"}}));
        assert!(s.owned_by(&Counterparty::Client("c1".into())));
        assert!(!s.owned_by(&Counterparty::Client("c2".into())));
        assert!(!s.owned_by(&Counterparty::Partner("p1".into())));
    }

    #[test]
    fn partner_sales_match_on_presence_only() {
        let s = sale(json!({"partnerId": "p9"}));
        assert!(s.owned_by(&Counterparty::Partner("p1".into())));
        assert!(!sale(json!({"partnerId": ""})).owned_by(&Counterparty::Partner("p1".into())));
        assert!(!sale(json!({})).owned_by(&Counterparty::Partner("p1".into())));
    }

    #[test]
    fn partner_debts_match_on_identity() {
        let d: DebtRecord = serde_json::from_value(json!({"partnerId": "p1"})).unwrap();
        assert!(d.owned_by(&Counterparty::Partner("p1".into())));
        assert!(!d.owned_by(&Counterparty::Partner("p2".into())));
    }

    #[test]
    fn products_never_belong_to_clients() {
        let p: PartnerProductRecord =
            serde_json::from_value(json!({"partner_number": "p1"})).unwrap();
        assert!(p.owned_by(&Counterparty::Partner("p1".into())));
        assert!(!p.owned_by(&Counterparty::Client("p1".into())));
    }

    #[test]
    fn select_without_counterparty_is_empty() {
        let sales = vec![sale(json!({"clientId": "c1"}))];
        assert!(select(&sales, None, &DateWindow::unbounded()).is_empty());
        assert_eq!(
            select(&sales, Some(&Counterparty::Client("c1".into())), &DateWindow::unbounded()).len(),
            1
        );
    }
}
