// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The two counterparty pickers.

use anyhow::Result;
use serde::Serialize;

use crate::models::PartStatus;
use crate::render::format::{NOT_SPECIFIED, text_or};
use crate::snapshot::Snapshot;
use crate::utils::{label_matches, maybe_print_json, pretty_table};

#[derive(Debug, Serialize, PartialEq)]
pub struct ClientOption {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PartnerOption {
    pub number: String,
    pub name: String,
    pub inactive_parts: Vec<String>,
    pub active_parts: Vec<String>,
}

pub fn client_options(snapshot: &Snapshot, search: Option<&str>) -> Vec<ClientOption> {
    snapshot
        .clients
        .iter()
        .filter(|c| label_matches(c.name.as_deref().unwrap_or_default(), search))
        .map(|c| ClientOption {
            id: c.id.clone(),
            name: text_or(c.name.as_deref(), NOT_SPECIFIED).to_string(),
            phone: text_or(c.phone.as_deref(), NOT_SPECIFIED).to_string(),
            address: text_or(c.address.as_deref(), NOT_SPECIFIED).to_string(),
        })
        .collect()
}

pub fn partner_options(snapshot: &Snapshot, search: Option<&str>) -> Vec<PartnerOption> {
    snapshot
        .partners
        .iter()
        .filter(|p| label_matches(p.partner_name.as_deref().unwrap_or_default(), search))
        .map(|p| {
            let parts = |status: PartStatus| {
                p.parts
                    .iter()
                    .filter(|part| part.status == status)
                    .map(|part| part.part.clone())
                    .collect::<Vec<_>>()
            };
            PartnerOption {
                number: p.partner_number.clone(),
                name: text_or(p.partner_name.as_deref(), NOT_SPECIFIED).to_string(),
                inactive_parts: parts(PartStatus::Inactive),
                active_parts: parts(PartStatus::Active),
            }
        })
        .collect()
}

pub fn handle_clients(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let search = sub.get_one::<String>("search").map(String::as_str);
    let data = client_options(snapshot, search);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|c| vec![c.id, c.name, c.phone, c.address])
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Phone", "Address"], rows));
    }
    Ok(())
}

pub fn handle_partners(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let search = sub.get_one::<String>("search").map(String::as_str);
    let data = partner_options(snapshot, search);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|p| {
                vec![
                    p.number,
                    p.name,
                    p.active_parts.join(", "),
                    p.inactive_parts.join(", "),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Number", "Name", "Active parts", "Inactive parts"], rows)
        );
    }
    Ok(())
}
