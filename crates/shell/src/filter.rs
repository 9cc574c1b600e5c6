// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch filtering of candidate commands.

use tracing::debug;

use crate::result::ValidationResult;
use crate::validator::{validate, Validator};

/// Keep the candidates that validate with the default configuration,
/// preserving order.
pub fn filter_valid<I, S>(candidates: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    partition_with(candidates, |c| validate(c)).0
}

/// Split candidates into those that validate and those that don't, the
/// latter paired with their results.
pub fn partition<I, S>(candidates: I) -> (Vec<S>, Vec<(S, ValidationResult)>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    partition_with(candidates, |c| validate(c))
}

impl Validator {
    /// [`filter_valid`] with this validator's configuration.
    pub fn filter_valid<I, S>(&self, candidates: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.partition(candidates).0
    }

    /// [`partition`] with this validator's configuration.
    pub fn partition<I, S>(&self, candidates: I) -> (Vec<S>, Vec<(S, ValidationResult)>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        partition_with(candidates, |c| self.validate(c))
    }
}

fn partition_with<I, S, F>(candidates: I, check: F) -> (Vec<S>, Vec<(S, ValidationResult)>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> ValidationResult,
{
    let mut valid = Vec::new();
    let mut rejected = Vec::new();
    for candidate in candidates {
        let result = check(candidate.as_ref());
        if result.is_valid() {
            valid.push(candidate);
        } else {
            debug!(
                command = candidate.as_ref(),
                code = ?result.error_code(),
                "dropping invalid candidate"
            );
            rejected.push((candidate, result));
        }
    }
    (valid, rejected)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
