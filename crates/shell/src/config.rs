// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validator configuration, loadable from TOML.
//!
//! ```toml
//! snippet-width = 30
//!
//! [cross-check]
//! kind = "external"
//! program = "python3"
//! args = ["-c", "import shlex, sys; print(*shlex.split(sys.argv[1]), sep='\\n')"]
//! timeout-ms = 500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::DEFAULT_SNIPPET_WIDTH;
use crate::tokenize::{ExternalTokenizer, ShellWords, Tokenizer};

/// Errors loading a [`ValidatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which secondary tokenizer cross-checks the quote scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CrossCheck {
    /// No cross-check.
    None,
    /// The built-in [`ShellWords`] splitter.
    #[default]
    ShellWords,
    /// An external program receiving the command as its last argument.
    #[serde(rename_all = "kebab-case")]
    External {
        program: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

fn default_timeout_ms() -> u64 {
    ExternalTokenizer::DEFAULT_TIMEOUT.as_millis() as u64
}

impl CrossCheck {
    /// Build the configured tokenizer, if any.
    pub fn tokenizer(&self) -> Option<Box<dyn Tokenizer>> {
        match self {
            CrossCheck::None => None,
            CrossCheck::ShellWords => Some(Box::new(ShellWords)),
            CrossCheck::External {
                program,
                args,
                timeout_ms,
            } => Some(Box::new(
                ExternalTokenizer::new(program.clone())
                    .args(args.iter().cloned())
                    .timeout(Duration::from_millis(*timeout_ms)),
            )),
        }
    }
}

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Characters of context shown around an error position in messages.
    pub snippet_width: usize,
    pub cross_check: CrossCheck,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            snippet_width: DEFAULT_SNIPPET_WIDTH,
            cross_check: CrossCheck::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// This config with the cross-check disabled.
    pub fn without_cross_check(mut self) -> Self {
        self.cross_check = CrossCheck::None;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
