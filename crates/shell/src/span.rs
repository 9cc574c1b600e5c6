// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command diagnostics.
//!
//! Every position the validator reports is a zero-based **character**
//! offset, not a byte offset, so that callers can index the command the way
//! a user reads it.

use serde::{Deserialize, Serialize};

/// Default number of characters shown around an error position.
pub const DEFAULT_SNIPPET_WIDTH: usize = 20;

/// A span representing a range of characters in a command string.
///
/// # Examples
///
/// ```
/// use cmdlint_shell::Span;
///
/// let span = Span::new(5, 10);
/// assert_eq!(span.slice("echo hello"), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end character positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create a span covering the single character at `pos`.
    #[inline]
    pub fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Returns the length of the span in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Out-of-range spans are clamped to the end of the source.
    pub fn slice(&self, source: &str) -> String {
        source.chars().skip(self.start).take(self.len()).collect()
    }
}

/// Render a bounded snippet of `input` centered on `position`.
///
/// At most `width` characters are shown; `...` marks each truncated side and
/// the whole snippet is wrapped in single quotes so it reads as a literal
/// inside an error message. Positions past the end are clamped.
///
/// # Example
///
/// ```
/// use cmdlint_shell::context_snippet;
///
/// assert_eq!(context_snippet("echo 'hello", 5, 20), "'echo 'hello'");
/// ```
pub fn context_snippet(input: &str, position: usize, width: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    let half = width / 2;
    let start = position.saturating_sub(half).min(chars.len());
    let end = position.saturating_add(half).min(chars.len());

    let mut snippet = String::with_capacity(width + 8);
    snippet.push('\'');
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str("...");
    }
    snippet.push('\'');
    snippet
}

/// Locate a character position in source, returning
/// `(line_number, column, line_content)`.
///
/// Line numbers are 1-indexed, columns are 0-indexed from line start.
///
/// # Example
///
/// ```
/// use cmdlint_shell::locate;
///
/// let (line, col, content) = locate("echo hello\necho world", 11);
/// assert_eq!((line, col, content), (2, 0, "echo world"));
/// ```
pub fn locate(source: &str, position: usize) -> (usize, usize, &str) {
    let mut line_num = 1;
    let mut line_start = 0;
    let mut col = 0;

    for (idx, (byte, ch)) in source.char_indices().enumerate() {
        if idx >= position {
            break;
        }
        if ch == '\n' {
            line_num += 1;
            line_start = byte + 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    (line_num, col, &source[line_start..line_end])
}

/// Generate a rich diagnostic message with line/column info.
///
/// Produces output in a format similar to rustc errors:
///
/// ```text
/// error: unexpected token '|'
///   --> line 1, column 8
///    |
///  1 | echo | | bad
///    |        ^
/// ```
pub fn diagnostic_context(source: &str, position: usize, message: &str) -> String {
    let (line_num, col, line_content) = locate(source, position);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}^",
        message,
        line_num,
        col + 1, // 1-indexed for user display
        line_num,
        line_content,
        " ".repeat(col),
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
