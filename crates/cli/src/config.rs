// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Order: `--config <path>` → `$CMDLINT_CONFIG` → `<config dir>/cmdlint/config.toml`
//! (only if present) → built-in defaults. An explicitly named file must exist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cmdlint_shell::ValidatorConfig;

use crate::env;

/// Resolve the validator config for this invocation.
pub fn resolve(explicit: Option<&Path>) -> Result<ValidatorConfig> {
    let named = explicit.map(Path::to_path_buf).or_else(env::config_path);
    resolve_from(named.as_deref(), default_path().as_deref())
}

/// `<config dir>/cmdlint/config.toml`, e.g. `~/.config/cmdlint/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cmdlint").join("config.toml"))
}

fn resolve_from(named: Option<&Path>, fallback: Option<&Path>) -> Result<ValidatorConfig> {
    let path = match (named, fallback) {
        (Some(path), _) => path,
        (None, Some(path)) if path.is_file() => path,
        _ => {
            tracing::debug!("no config file, using defaults");
            return Ok(ValidatorConfig::default());
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    ValidatorConfig::load(path).with_context(|| format!("loading config {}", path.display()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
