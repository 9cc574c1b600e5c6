// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Precompiled matchers, built once and shared read-only across threads.

use std::sync::LazyLock;

use regex::Regex;

use crate::scan::Source;
use crate::span::Span;

/// `< <` with whitespace between (the valid forms are `<<` and `<<<`).
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub(crate) static SPLIT_INPUT_REDIRECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s+<").expect("constant regex pattern is valid"));

/// `> >` with whitespace between (the valid form is `>>`).
#[allow(clippy::expect_used)]
pub(crate) static SPLIT_OUTPUT_REDIRECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+>").expect("constant regex pattern is valid"));

/// Two semicolons separated only by optional whitespace.
#[allow(clippy::expect_used)]
pub(crate) static CONSECUTIVE_SEMICOLONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*;").expect("constant regex pattern is valid"));

/// Three or more semicolons; too many even for a `case` terminator.
#[allow(clippy::expect_used)]
pub(crate) static TRIPLE_SEMICOLONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";;;+").expect("constant regex pattern is valid"));

/// An assignment with no name before `=`.
#[allow(clippy::expect_used)]
pub(crate) static NAMELESS_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*=").expect("constant regex pattern is valid"));

/// Every match of `re` in `source` whose first and last characters are
/// unquoted, as character spans. Matches may overlap: the search resumes one
/// character after each match start.
pub(crate) fn unquoted_matches(re: &Regex, source: &Source<'_>) -> Vec<Span> {
    let text = source.text();
    let mut spans = Vec::new();
    let mut at = 0;
    while let Some(m) = re.find_at(text, at) {
        at = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        let span = Span::new(source.char_offset(m.start()), source.char_offset(m.end()));
        if !span.is_empty() && source.is_plain(span.start) && source.is_plain(span.end - 1) {
            spans.push(span);
        }
    }
    spans
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
