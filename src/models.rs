// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record shapes as the remote API emits them.
//!
//! Every field the API may omit is an `Option` with `#[serde(default)]`, so a
//! sparse document still deserializes. Defaulting happens in the accessors and
//! in `engine::normalize`, never at the call sites.

use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads like an absent key: empty collections, default statuses.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// Currencies tracked by the reconciliation act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "SUM")]
    Sum,
    #[serde(rename = "KGS")]
    Kgs,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Sum, Currency::Kgs];

    /// Unknown and missing codes map to `None`: they belong to no bucket.
    pub fn parse(code: Option<&str>) -> Option<Currency> {
        match code? {
            "USD" => Some(Currency::Usd),
            "SUM" => Some(Currency::Sum),
            "KGS" => Some(Currency::Kgs),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Sum => "SUM",
            Currency::Kgs => "KGS",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Quantity,
    PackageQuantity,
    BoxQuantity,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Quantity, Unit::PackageQuantity, Unit::BoxQuantity];

    pub fn parse(raw: Option<&str>) -> Option<Unit> {
        match raw? {
            "quantity" => Some(Unit::Quantity),
            "package_quantity" => Some(Unit::PackageQuantity),
            "box_quantity" => Some(Unit::BoxQuantity),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Unit::Quantity => "quantity",
            Unit::PackageQuantity => "package_quantity",
            Unit::BoxQuantity => "box_quantity",
        }
    }
}

/// A reference field that arrives either as a bare id or as a populated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocRef {
    Id(String),
    Doc {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl DocRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            DocRef::Id(id) => Some(id),
            DocRef::Doc { id, .. } => id.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            DocRef::Id(_) => None,
            DocRef::Doc { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

/// `{ "value": 12.5 }` as used by partner product prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartStatus {
    Active,
    Inactive,
    /// Missing or unrecognised; never settled.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A named segment of a partner's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerPart {
    pub part: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PartStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub partner_number: String,
    #[serde(default)]
    pub partner_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<PartnerPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "productId", default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(rename = "sellingPrice", default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "clientId", default)]
    pub client: Option<DocRef>,
    #[serde(rename = "partnerId", default)]
    pub partner: Option<DocRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl SaleRecord {
    pub fn quantity(&self) -> f64 {
        self.quantity.unwrap_or(0.0)
    }

    pub fn selling_price(&self) -> f64 {
        self.selling_price.unwrap_or(0.0)
    }

    /// `quantity * sellingPrice`; the amount every sales total is built from.
    pub fn line_total(&self) -> f64 {
        self.selling_price() * self.quantity()
    }

    /// Supplied `totalAmount`, derived from the line when absent.
    pub fn total_amount(&self) -> f64 {
        self.total_amount.unwrap_or_else(|| self.line_total())
    }

    pub fn currency(&self) -> Option<Currency> {
        Currency::parse(self.currency.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEvent {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    Pending,
    Paid,
    #[serde(other)]
    Unknown,
}

/// A debt from the debtor stream, or one synthesized from a ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "clientId", default)]
    pub client: Option<DocRef>,
    #[serde(rename = "partnerId", default)]
    pub partner: Option<DocRef>,
    #[serde(rename = "productId", default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(rename = "sellingPrice", default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "remainingAmount", default)]
    pub remaining_amount: Option<f64>,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: Option<DebtStatus>,
    #[serde(rename = "paymentHistory", default, deserialize_with = "null_as_default")]
    pub payment_history: Vec<PaymentEvent>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl DebtRecord {
    pub fn remaining_amount(&self) -> f64 {
        self.remaining_amount.unwrap_or(0.0)
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0)
    }

    pub fn currency(&self) -> Option<Currency> {
        Currency::parse(self.currency.as_deref())
    }
}

/// Untyped "report" ledger entry. Nothing is guaranteed present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "clientId", default)]
    pub client: Option<DocRef>,
    #[serde(rename = "partnerId", default)]
    pub partner: Option<DocRef>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "productId", default)]
    pub product: Option<ProductRef>,
    #[serde(rename = "productName", default)]
    pub product_name: Option<String>,
    #[serde(rename = "productCode", default)]
    pub product_code: Option<String>,
    #[serde(rename = "productSize", default)]
    pub product_size: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(rename = "productQuantity", default)]
    pub product_quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(rename = "sellingPrice", default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "remainingAmount", default)]
    pub remaining_amount: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerProductRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub partner_number: Option<String>,
    #[serde(default)]
    pub name_partner: Option<String>,
    #[serde(default)]
    pub part: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub package_quantity: Option<f64>,
    #[serde(default)]
    pub box_quantity: Option<f64>,
    #[serde(rename = "purchasePrice", default)]
    pub purchase_price: Option<Price>,
    #[serde(rename = "sellingPrice", default)]
    pub selling_price: Option<Price>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl PartnerProductRecord {
    pub fn quantity(&self) -> f64 {
        self.quantity.unwrap_or(0.0)
    }

    pub fn purchase_price(&self) -> f64 {
        self.purchase_price.and_then(|p| p.value).unwrap_or(0.0)
    }

    pub fn selling_price(&self) -> f64 {
        self.selling_price.and_then(|p| p.value).unwrap_or(0.0)
    }

    /// Inventory value at purchase price.
    pub fn purchase_value(&self) -> f64 {
        self.purchase_price() * self.quantity()
    }

    pub fn currency(&self) -> Option<Currency> {
        Currency::parse(self.currency.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentSource {
    Ledger,
    PartSettlement { part: String },
}

/// Payment-like record: a ledger payment or a synthesized part settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub client_id: Option<String>,
    pub partner_id: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
    pub created_at: Option<String>,
    pub source: PaymentSource,
}

impl PaymentRecord {
    pub fn currency(&self) -> Option<Currency> {
        Currency::parse(self.currency.as_deref())
    }
}

/// The party a reconciliation act is produced against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Counterparty {
    Client(String),
    Partner(String),
}

impl Counterparty {
    pub fn id(&self) -> &str {
        match self {
            Counterparty::Client(id) | Counterparty::Partner(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Counterparty::Client(_) => "client",
            Counterparty::Partner(_) => "partner",
        }
    }
}
