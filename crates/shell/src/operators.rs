// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator boundary checks: dangling operators at either end of the
//! command, empty segments between chained operators and malformed
//! redirection shapes.

use crate::patterns::{unquoted_matches, SPLIT_INPUT_REDIRECT, SPLIT_OUTPUT_REDIRECT};
use crate::result::{ErrorCode, ValidationResult};
use crate::scan::{CharClass, Source};
use crate::span::Span;

/// A chaining operator that segments are split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChainOp {
    /// `|` or `|&`, never the first half of `||`.
    Pipe,
    And,
    Or,
}

/// One operand of a chain plus the offset of the operator that ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    pub span: Span,
    pub next_op: Option<usize>,
}

pub(crate) fn check_trailing(source: &Source<'_>) -> ValidationResult {
    let Some(last) = source.last_significant() else {
        return ValidationResult::valid();
    };

    if source.class_at(last) == Some(CharClass::Escape)
        && matches!(source.char_at(last + 1), None | Some('\n'))
    {
        return ValidationResult::invalid(
            ErrorCode::TrailingBackslash,
            "Command ends with line continuation backslash but no following line",
        )
        .at(last)
        .suggest("Remove the trailing backslash or add the continued command");
    }

    if !source.is_plain(last) {
        return ValidationResult::valid();
    }

    let prev_is = |ch: char| last > 0 && source.is_plain_char(last - 1, ch);

    match source.char_at(last) {
        Some('|') if prev_is('|') => ValidationResult::invalid(
            ErrorCode::TrailingOr,
            "Command ends with incomplete OR operator '||'",
        )
        .at(last - 1)
        .suggest("Add a command after ||, e.g., 'cmd1 || cmd2'"),
        Some('|') => trailing_pipe(last),
        Some('&') if prev_is('&') => ValidationResult::invalid(
            ErrorCode::TrailingAnd,
            "Command ends with incomplete AND operator '&&'",
        )
        .at(last - 1)
        .suggest("Add a command after &&, e.g., 'cmd1 && cmd2'"),
        Some('&') if prev_is('|') => trailing_pipe(last - 1),
        Some('&') if prev_is('<') || prev_is('>') => ValidationResult::invalid(
            ErrorCode::RedirectWithoutTarget,
            "Redirection operator missing target file",
        )
        .at(last)
        .suggest("Specify a file after the redirection, e.g., 'cmd &> file'"),
        Some('<' | '>') => {
            let mut start = last;
            while start > 0
                && (source.is_plain_char(start - 1, '<') || source.is_plain_char(start - 1, '>'))
            {
                start -= 1;
            }
            let op = Span::new(start, last + 1).slice(source.text());
            ValidationResult::invalid(
                ErrorCode::RedirectWithoutTarget,
                format!("Redirection operator '{op}' missing target file"),
            )
            .at(start)
            .suggest(format!("Specify a file after '{op}', e.g., 'cmd {op} filename'"))
        }
        Some(';') if source.first_significant() == Some(last) => ValidationResult::invalid(
            ErrorCode::TrailingSemicolon,
            "Command contains only a semicolon",
        )
        .at(last)
        .suggest("Provide a command before the semicolon"),
        _ => ValidationResult::valid(),
    }
}

fn trailing_pipe(pos: usize) -> ValidationResult {
    ValidationResult::invalid(
        ErrorCode::TrailingPipe,
        "Command ends with incomplete pipe operator '|'",
    )
    .at(pos)
    .suggest("Add a command after the pipe, e.g., 'cmd1 | cmd2'")
}

pub(crate) fn check_leading(source: &Source<'_>) -> ValidationResult {
    let Some(first) = source.first_significant() else {
        return ValidationResult::valid();
    };
    if !source.is_plain(first) {
        return ValidationResult::valid();
    }

    let doubled = |ch: char| source.is_plain_char(first + 1, ch);

    match source.char_at(first) {
        Some('|') if doubled('|') => ValidationResult::invalid(
            ErrorCode::LeadingOr,
            "Command cannot start with OR operator '||'",
        )
        .at(first)
        .suggest("'||' provides fallback; add a command before it, e.g., 'cmd1 || cmd2'"),
        Some('|') => ValidationResult::invalid(
            ErrorCode::LeadingPipe,
            "Command cannot start with pipe operator '|'",
        )
        .at(first)
        .suggest("Pipes connect commands; add a command before '|', e.g., 'cmd1 | cmd2'"),
        Some('&') if doubled('&') => ValidationResult::invalid(
            ErrorCode::LeadingAnd,
            "Command cannot start with AND operator '&&'",
        )
        .at(first)
        .suggest("'&&' chains commands; add a command before it, e.g., 'cmd1 && cmd2'"),
        Some(';') => ValidationResult::invalid(
            ErrorCode::LeadingSemicolon,
            "Command cannot start with semicolon ';'",
        )
        .at(first)
        .suggest("Remove the leading semicolon or add a command before it"),
        _ => ValidationResult::valid(),
    }
}

pub(crate) fn check_pipe_chain(source: &Source<'_>) -> ValidationResult {
    match first_empty_interior(source, ChainOp::Pipe) {
        Some((index, pos)) => ValidationResult::invalid(
            ErrorCode::EmptyPipeSegment,
            format!("Empty command in pipe chain at segment {}", index + 1),
        )
        .at(pos)
        .suggest("Each segment in a pipe chain must contain a command, e.g., 'cmd1 | cmd2 | cmd3'"),
        None => ValidationResult::valid(),
    }
}

pub(crate) fn check_logical_chains(source: &Source<'_>) -> ValidationResult {
    if let Some((_, pos)) = first_empty_interior(source, ChainOp::And) {
        return ValidationResult::invalid(
            ErrorCode::EmptyAndSegment,
            "Empty command between '&&' operators",
        )
        .at(pos)
        .suggest("Add a command between the '&&' operators, e.g., 'cmd1 && cmd2 && cmd3'");
    }
    if let Some((_, pos)) = first_empty_interior(source, ChainOp::Or) {
        return ValidationResult::invalid(
            ErrorCode::EmptyOrSegment,
            "Empty command between '||' operators",
        )
        .at(pos)
        .suggest("Add a command between the '||' operators, e.g., 'cmd1 || cmd2 || cmd3'");
    }
    ValidationResult::valid()
}

pub(crate) fn check_redirections(source: &Source<'_>) -> ValidationResult {
    if let Some(span) = split_redirect(source, &SPLIT_INPUT_REDIRECT, '<') {
        return ValidationResult::invalid(
            ErrorCode::RedirectWithoutTarget,
            "Invalid redirection '< <' - did you mean '<<' (here-doc) or '<<<' (here-string)?",
        )
        .at(span.start)
        .suggest("Use '<<' for here-documents or '<<<' for here-strings");
    }
    if let Some(span) = split_redirect(source, &SPLIT_OUTPUT_REDIRECT, '>') {
        return ValidationResult::invalid(
            ErrorCode::RedirectWithoutTarget,
            "Invalid redirection '> >' - did you mean '>>' (append)?",
        )
        .at(span.start)
        .suggest("Use '>>' without space for append redirection");
    }
    ValidationResult::valid()
}

// A split `< <` / `> >` that is not the start of `< <<`, `< <(cmd)` and the
// like: the character after the match must not continue an operator.
fn split_redirect(source: &Source<'_>, re: &regex::Regex, op: char) -> Option<Span> {
    unquoted_matches(re, source).into_iter().find(|span| {
        !source.is_plain_char(span.end, op) && !source.is_plain_char(span.end, '(')
    })
}

/// The first empty segment that is neither the first nor the last, as
/// `(segment index, offset of the operator that follows it)`.
fn first_empty_interior(source: &Source<'_>, op: ChainOp) -> Option<(usize, usize)> {
    let segments = split_unquoted(source, op);
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .filter(|&(i, _)| i > 0 && i < last)
        .find(|(_, segment)| is_blank(source, segment.span))
        .and_then(|(i, segment)| segment.next_op.map(|pos| (i, pos)))
}

fn is_blank(source: &Source<'_>, span: Span) -> bool {
    (span.start..span.end).all(|i| {
        source.class_at(i) == Some(CharClass::Comment)
            || source.char_at(i).is_some_and(char::is_whitespace)
    })
}

/// Split the command on `op` wherever it appears unquoted and outside any
/// parentheses. Once an unbalanced `)` drives the depth negative (as a
/// case pattern does) no further splits happen.
pub(crate) fn split_unquoted(source: &Source<'_>, op: ChainOp) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut depth: i64 = 0;
    let mut start = 0;
    let mut i = 0;

    while i < source.len() {
        if !source.is_plain(i) {
            i += 1;
            continue;
        }
        match source.char_at(i) {
            Some('(') => depth += 1,
            Some(')') => depth -= 1,
            _ => {}
        }
        if depth != 0 {
            i += 1;
            continue;
        }

        let Some(width) = operator_width(source, i, op) else {
            i += 1;
            continue;
        };
        segments.push(Segment {
            span: Span::new(start, i),
            next_op: Some(i),
        });
        i += width;
        start = i;
    }

    segments.push(Segment {
        span: Span::new(start.min(source.len()), source.len()),
        next_op: None,
    });
    segments
}

/// Width of the `op` token starting at `pos`, if any. Neither half of `||`
/// (nor the `|` of a `>|` clobber) counts as a pipe.
fn operator_width(source: &Source<'_>, pos: usize, op: ChainOp) -> Option<usize> {
    let at = |offset: usize, ch: char| source.is_plain_char(offset, ch);
    let after_pipe = pos > 0 && at(pos - 1, '|');

    match op {
        ChainOp::Pipe if at(pos, '|') => {
            let clobber = pos > 0 && at(pos - 1, '>');
            if after_pipe || clobber || at(pos + 1, '|') {
                None
            } else if at(pos + 1, '&') {
                Some(2)
            } else {
                Some(1)
            }
        }
        ChainOp::And if at(pos, '&') && at(pos + 1, '&') => Some(2),
        ChainOp::Or if at(pos, '|') && at(pos + 1, '|') && !after_pipe => Some(2),
        _ => None,
    }
}

#[cfg(test)]
#[path = "operators_tests.rs"]
mod tests;
