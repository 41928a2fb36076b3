// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod act;
pub mod print;
pub mod exporter;
pub mod parties;
pub mod debtors;
pub mod doctor;
pub mod shell;

use crate::error::{ReconError, Result};
use crate::models::Counterparty;
use crate::snapshot::Snapshot;

/// Rejects identifiers the snapshot has never seen.
pub fn ensure_known(snapshot: &Snapshot, counterparty: &Counterparty) -> Result<()> {
    match counterparty {
        Counterparty::Client(id) => {
            if snapshot.client(id).is_none() {
                return Err(ReconError::UnknownClient(id.clone()));
            }
        }
        Counterparty::Partner(number) => {
            let on_products = snapshot
                .partner_products
                .iter()
                .any(|p| p.partner_number.as_deref() == Some(number.as_str()));
            if snapshot.partner(number).is_none() && !on_products {
                return Err(ReconError::UnknownPartner(number.clone()));
            }
        }
    }
    Ok(())
}
