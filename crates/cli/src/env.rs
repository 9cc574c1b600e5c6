// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Config ---

/// Config file named by `CMDLINT_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("CMDLINT_CONFIG")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Logging ---

/// Log filter directives from `CMDLINT_LOG`.
pub fn log_filter() -> Option<String> {
    std::env::var("CMDLINT_LOG").ok().filter(|s| !s.is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
