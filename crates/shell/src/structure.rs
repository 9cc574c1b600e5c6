// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural anomalies: runs of semicolons and nameless assignments.

use crate::patterns::{
    unquoted_matches, CONSECUTIVE_SEMICOLONS, NAMELESS_ASSIGNMENT, TRIPLE_SEMICOLONS,
};
use crate::result::{ErrorCode, ValidationResult};
use crate::scan::Source;

pub(crate) fn check(source: &Source<'_>) -> ValidationResult {
    // `;;` terminates case patterns, so only `;;;` is suspect there
    let has_case = source.words().iter().any(|w| w.is_bare("case"));

    if has_case {
        if let Some(span) = unquoted_matches(&TRIPLE_SEMICOLONS, source).first() {
            return ValidationResult::invalid(
                ErrorCode::ConsecutiveSemicolons,
                format!("Too many consecutive semicolons at position {}", span.start),
            )
            .at(span.start)
            .suggest("Use ';;' to end case patterns, not more semicolons");
        }
    } else if let Some(span) = unquoted_matches(&CONSECUTIVE_SEMICOLONS, source).first() {
        return ValidationResult::invalid(
            ErrorCode::ConsecutiveSemicolons,
            format!("Multiple consecutive semicolons at position {}", span.start),
        )
        .at(span.start)
        .suggest("Remove extra semicolons; use single ';' to separate commands");
    }

    if let Some(span) = unquoted_matches(&NAMELESS_ASSIGNMENT, source).first() {
        return ValidationResult::invalid(
            ErrorCode::InvalidVariableAssignment,
            "Invalid variable assignment - missing variable name before '='",
        )
        .at(span.end - 1)
        .suggest("Variable assignment requires a name, e.g., 'VAR=value'");
    }

    ValidationResult::valid()
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
