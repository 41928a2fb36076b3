// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Picker state for the act: one counterparty at a time plus a date range.

use chrono::{FixedOffset, NaiveDate};

use crate::engine::{ActQuery, DateWindow};
use crate::engine::window::parse_bound;
use crate::error::Result;
use crate::models::Counterparty;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    client: Option<String>,
    partner: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    offset: FixedOffset,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(DateWindow::unbounded().offset)
    }
}

fn non_empty(id: &str) -> Option<String> {
    let id = id.trim();
    (!id.is_empty()).then(|| id.to_string())
}

impl Selection {
    pub fn new(offset: FixedOffset) -> Self {
        Selection {
            client: None,
            partner: None,
            start: None,
            end: None,
            offset,
        }
    }

    /// Selects a client and drops any selected partner.
    pub fn select_client(&mut self, id: &str) {
        self.client = non_empty(id);
        self.partner = None;
    }

    /// Selects a partner and drops any selected client.
    pub fn select_partner(&mut self, number: &str) {
        self.partner = non_empty(number);
        self.client = None;
    }

    pub fn set_start(&mut self, raw: &str) -> Result<()> {
        self.start = parse_bound(raw)?;
        Ok(())
    }

    pub fn set_end(&mut self, raw: &str) -> Result<()> {
        self.end = parse_bound(raw)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Selection::new(self.offset);
    }

    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }

    pub fn partner(&self) -> Option<&str> {
        self.partner.as_deref()
    }

    pub fn counterparty(&self) -> Option<Counterparty> {
        match (&self.client, &self.partner) {
            (Some(id), _) => Some(Counterparty::Client(id.clone())),
            (None, Some(number)) => Some(Counterparty::Partner(number.clone())),
            (None, None) => None,
        }
    }

    pub fn query(&self) -> ActQuery {
        ActQuery {
            counterparty: self.counterparty(),
            window: DateWindow::new(self.start, self.end, self.offset),
        }
    }
}
