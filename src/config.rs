// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::FixedOffset;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::window::parse_offset;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Reconact", "reconact"));

pub const CONFIG_FILE: &str = "config.json";
pub const DATA_DIR_ENV: &str = "RECONACT_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the exported record collections.
    pub data_dir: PathBuf,
    /// Where printable statements are written.
    pub output_dir: PathBuf,
    /// Program (and leading args) that receives the statement path.
    pub print_command: Option<Vec<String>>,
    /// Offset that defines day boundaries for date filtering.
    pub utc_offset: String,
}

impl Default for Config {
    fn default() -> Self {
        let base = project_dirs()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Config {
            data_dir: base.join("snapshot"),
            output_dir: base.join("acts"),
            print_command: None,
            utc_offset: "+00:00".to_string(),
        }
    }
}

impl Config {
    pub fn offset(&self) -> Result<FixedOffset> {
        Ok(parse_offset(&self.utc_offset)?)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().join(CONFIG_FILE))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading config file: {}", path.display()))?;
    let cfg: Config = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing config JSON in {}", path.display()))?;
    cfg.offset()
        .with_context(|| format!("Invalid utc_offset in {}", path.display()))?;
    Ok(cfg)
}

/// Explicit `--config` path, else the platform config file if present, else
/// defaults. `env_data_dir` then `cli_data_dir` override `data_dir`, in that
/// order of increasing precedence.
pub fn resolve(
    explicit: Option<&Path>,
    env_data_dir: Option<PathBuf>,
    cli_data_dir: Option<PathBuf>,
) -> Result<Config> {
    let mut cfg = match explicit {
        Some(p) => load_config(p)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(p) => load_config(&p)?,
            None => Config::default(),
        },
    };
    if let Some(dir) = env_data_dir {
        cfg.data_dir = dir;
    }
    if let Some(dir) = cli_data_dir {
        cfg.data_dir = dir;
    }
    debug!(data_dir = %cfg.data_dir.display(), output_dir = %cfg.output_dir.display(), "config resolved");
    Ok(cfg)
}
