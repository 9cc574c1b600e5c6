// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes carried through `anyhow`.

use std::fmt;

/// At least one command failed validation.
pub const INVALID: i32 = 1;

/// Bad arguments, unreadable input or config.
pub const USAGE: i32 = 2;

/// An error that asks `main` to exit with a specific code.
///
/// An empty message exits silently, for results that have already been
/// reported on stdout.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Silent exit with [`INVALID`].
    pub fn invalid() -> Self {
        Self::new(INVALID, String::new())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
