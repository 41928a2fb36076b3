// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid UTC offset '{0}', expected e.g. +05:00")]
    InvalidOffset(String),

    #[error("Client '{0}' not found")]
    UnknownClient(String),

    #[error("Partner '{0}' not found")]
    UnknownPartner(String),

    #[error("Unknown format: {0} (use csv|json)")]
    UnsupportedFormat(String),

    #[error("No counterparty selected")]
    NoCounterparty,
}

pub type Result<T> = std::result::Result<T, ReconError>;
