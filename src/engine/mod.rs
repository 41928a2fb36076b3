// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The reconciliation core: pure functions of (records, query) to summary.

pub mod aggregate;
pub mod matcher;
pub mod normalize;
pub mod settlement;
pub mod window;

use std::rc::Rc;

use tracing::debug;

use crate::models::{Counterparty, DebtRecord, PartnerProductRecord, PaymentRecord, SaleRecord};
use crate::snapshot::Snapshot;

pub use aggregate::{CurrencySummary, Summary, UnitTotals, aggregate};
pub use matcher::{Dated, Owned, select};
pub use normalize::{LedgerItem, normalize_ledger_entry};
pub use settlement::derive_settlements;
pub use window::{DateWindow, in_range};

/// What an act is computed for. At most one counterparty is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActQuery {
    pub counterparty: Option<Counterparty>,
    pub window: DateWindow,
}

/// The filtered record collections and the summary computed from them.
/// Renderers read totals from `summary` only.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub query: ActQuery,
    pub sales: Vec<SaleRecord>,
    /// Stream debts first, then normalized ledger debts.
    pub debts: Vec<DebtRecord>,
    /// Ledger payments first, then part settlements.
    pub payments: Vec<PaymentRecord>,
    pub products: Vec<PartnerProductRecord>,
    pub summary: Summary,
}

pub fn reconcile(snapshot: &Snapshot, query: &ActQuery) -> Reconciliation {
    let cp = query.counterparty.as_ref();
    let window = &query.window;

    let mut ledger_debts = Vec::new();
    let mut ledger_payments = Vec::new();
    for (i, entry) in snapshot.reports.iter().enumerate() {
        match entry.classify(i) {
            Some(LedgerItem::Debt(d)) => ledger_debts.push(d),
            Some(LedgerItem::Payment(p)) => ledger_payments.push(p),
            None => {}
        }
    }

    let sales = select(&snapshot.sales, cp, window);

    let mut debts = select(&snapshot.debtors, cp, window);
    debts.extend(select(&ledger_debts, cp, window));

    let mut payments = select(&ledger_payments, cp, window);
    if let Some(Counterparty::Partner(number)) = cp {
        payments.extend(derive_settlements(
            number,
            &snapshot.partner_products,
            &snapshot.partners,
            window,
        ));
    }

    let products = select(&snapshot.partner_products, cp, window);

    debug!(
        counterparty = ?cp,
        sales = sales.len(),
        debts = debts.len(),
        payments = payments.len(),
        products = products.len(),
        "records selected"
    );

    let summary = aggregate(&sales, &debts, &payments, &products);
    Reconciliation {
        query: query.clone(),
        sales,
        debts,
        payments,
        products,
        summary,
    }
}

/// Remembers the last reconciliation and reuses it while neither the query
/// nor the snapshot revision changes.
#[derive(Debug, Default)]
pub struct ActCache {
    last: Option<(u64, ActQuery, Rc<Reconciliation>)>,
    misses: usize,
}

impl ActCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, snapshot: &Snapshot, query: &ActQuery) -> Rc<Reconciliation> {
        if let Some((rev, q, r)) = &self.last {
            if *rev == snapshot.revision && q == query {
                return Rc::clone(r);
            }
        }
        self.misses += 1;
        let r = Rc::new(reconcile(snapshot, query));
        self.last = Some((snapshot.revision, query.clone(), Rc::clone(&r)));
        r
    }

    /// Number of full recomputations performed.
    pub fn misses(&self) -> usize {
        self.misses
    }
}
