// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unclosed quote detection with an optional tokenizer cross-check.

use tracing::debug;

use crate::result::{ErrorCode, ValidationResult};
use crate::scan::{CharClass, Source};
use crate::tokenize::Tokenizer;

pub(crate) fn check(source: &Source<'_>, tokenizer: Option<&dyn Tokenizer>) -> ValidationResult {
    let state = source.end_state();

    if let Some(pos) = state.single_quote {
        return ValidationResult::invalid(
            ErrorCode::UnclosedSingleQuote,
            format!(
                "Unclosed single quote starting at position {pos}: {}",
                source.snippet(pos)
            ),
        )
        .at(pos)
        .suggest("Add a closing single quote (') to match the opening quote");
    }

    if let Some(pos) = state.double_quote {
        return ValidationResult::invalid(
            ErrorCode::UnclosedDoubleQuote,
            format!(
                "Unclosed double quote starting at position {pos}: {}",
                source.snippet(pos)
            ),
        )
        .at(pos)
        .suggest("Add a closing double quote (\") to match the opening quote");
    }

    if let Some(pos) = state.backtick {
        return ValidationResult::invalid(
            ErrorCode::UnclosedBacktick,
            format!(
                "Unclosed backtick starting at position {pos}: {}",
                source.snippet(pos)
            ),
        )
        .at(pos)
        .suggest("Add a closing backtick (`) or use $(...) for command substitution instead");
    }

    match tokenizer {
        Some(tokenizer) => cross_check(source, tokenizer),
        None => ValidationResult::valid(),
    }
}

fn cross_check(source: &Source<'_>, tokenizer: &dyn Tokenizer) -> ValidationResult {
    let err = match tokenizer.tokenize(&source.tokenizable()) {
        Ok(_) => return ValidationResult::valid(),
        Err(err) => err,
    };

    if err.is_inconclusive() {
        debug!(tokenizer = tokenizer.name(), error = %err, "cross-check inconclusive");
        return ValidationResult::valid();
    }

    // A lone trailing backslash is reported by the trailing-operator check
    if ends_with_escape(source) {
        return ValidationResult::valid();
    }

    ValidationResult::invalid(
        ErrorCode::ParseError,
        format!("Shell parsing error: {err}"),
    )
    .suggest("Check for unclosed quotes or escape sequences")
}

fn ends_with_escape(source: &Source<'_>) -> bool {
    source
        .last_significant()
        .is_some_and(|pos| {
            source.class_at(pos) == Some(CharClass::Escape)
                && matches!(source.char_at(pos + 1), None | Some('\n'))
        })
}

#[cfg(test)]
#[path = "quotes_tests.rs"]
mod tests;
