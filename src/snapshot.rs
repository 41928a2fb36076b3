// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ReconError, Result};
use crate::models::{Client, DebtRecord, LedgerEntry, Partner, PartnerProductRecord, SaleRecord};

pub const CLIENTS_FILE: &str = "clients.json";
pub const PARTNERS_FILE: &str = "act_partners.json";
pub const SALES_FILE: &str = "sales.json";
pub const DEBTORS_FILE: &str = "debtors.json";
pub const REPORTS_FILE: &str = "reports.json";
pub const PARTNER_PRODUCTS_FILE: &str = "partner_products.json";

static REVISION: AtomicU64 = AtomicU64::new(1);

/// Every input collection, as last exported from the remote API.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub clients: Vec<Client>,
    pub partners: Vec<Partner>,
    pub sales: Vec<SaleRecord>,
    pub debtors: Vec<DebtRecord>,
    pub reports: Vec<LedgerEntry>,
    pub partner_products: Vec<PartnerProductRecord>,
    /// Changes whenever the collections are replaced; keys `ActCache`.
    pub revision: u64,
}

impl Snapshot {
    pub fn load(dir: &Path) -> Result<Snapshot> {
        let snap = Snapshot {
            clients: read_collection(dir, CLIENTS_FILE)?,
            partners: read_collection(dir, PARTNERS_FILE)?,
            sales: read_collection(dir, SALES_FILE)?,
            debtors: read_collection(dir, DEBTORS_FILE)?,
            reports: read_collection(dir, REPORTS_FILE)?,
            partner_products: read_collection(dir, PARTNER_PRODUCTS_FILE)?,
            revision: next_revision(),
        };
        debug!(
            dir = %dir.display(),
            clients = snap.clients.len(),
            partners = snap.partners.len(),
            sales = snap.sales.len(),
            debtors = snap.debtors.len(),
            reports = snap.reports.len(),
            partner_products = snap.partner_products.len(),
            "snapshot loaded"
        );
        Ok(snap)
    }

    /// Marks the collections as changed after an in-place edit.
    pub fn touch(&mut self) {
        self.revision = next_revision();
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn partner(&self, number: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.partner_number == number)
    }

    /// Display name for a partner: the act-partner list first, then the name
    /// recorded on its products.
    pub fn partner_name(&self, number: &str) -> Option<&str> {
        self.partner(number)
            .and_then(|p| p.partner_name.as_deref())
            .or_else(|| {
                self.partner_products
                    .iter()
                    .filter(|p| p.partner_number.as_deref() == Some(number))
                    .find_map(|p| p.name_partner.as_deref())
            })
    }
}

fn next_revision() -> u64 {
    REVISION.fetch_add(1, Ordering::Relaxed)
}

fn read_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path: PathBuf = dir.join(file);
    let raw = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "collection missing, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => return Err(ReconError::Io { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| ReconError::Json { path, source })
}
