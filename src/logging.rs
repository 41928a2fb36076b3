// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "RECONACT_LOG";

/// Logs go to stderr so tables and JSON on stdout stay clean.
pub fn init(verbose: bool) {
    let default = if verbose { "reconact=debug" } else { "warn" };
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| default.into());

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
