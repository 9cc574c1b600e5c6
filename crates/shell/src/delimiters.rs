// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stack-based matching of `()`, `{}`, `[]` and `$(...)`.
//!
//! Each family keeps its own stack of opener positions. A `)` closes a
//! command substitution in preference to a plain parenthesis when the
//! substitution was opened more recently.
//!
//! Inside a `case ... in` body, an unmatched `)` is accepted as a pattern
//! terminator. This is a heuristic rather than a case-pattern parser: it
//! applies regardless of nesting depth, so it can hide a genuinely
//! unmatched `)` inside a case body.

use crate::result::{ErrorCode, ValidationResult};
use crate::scan::{Source, Word};

/// A delimiter family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Substitution,
    Parenthesis,
    Brace,
    Bracket,
}

impl Delimiter {
    const ALL: [Delimiter; 4] = [
        Delimiter::Substitution,
        Delimiter::Parenthesis,
        Delimiter::Brace,
        Delimiter::Bracket,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default)]
struct DelimiterStacks {
    open: [Vec<usize>; 4],
}

impl DelimiterStacks {
    fn push(&mut self, delimiter: Delimiter, pos: usize) {
        self.open[delimiter.index()].push(pos);
    }

    fn pop(&mut self, delimiter: Delimiter) -> Option<usize> {
        self.open[delimiter.index()].pop()
    }

    fn top(&self, delimiter: Delimiter) -> Option<usize> {
        self.open[delimiter.index()].last().copied()
    }

    /// Close the most recently opened of `$(` and `(`.
    fn close_paren(&mut self) -> Option<usize> {
        match (self.top(Delimiter::Substitution), self.top(Delimiter::Parenthesis)) {
            (Some(sub), Some(paren)) if sub > paren => self.pop(Delimiter::Substitution),
            (Some(_), None) => self.pop(Delimiter::Substitution),
            _ => self.pop(Delimiter::Parenthesis),
        }
    }

    /// The oldest opener still waiting for its close, across all families.
    fn oldest_unclosed(&self) -> Option<(Delimiter, usize)> {
        Delimiter::ALL
            .into_iter()
            .filter_map(|d| self.open[d.index()].first().map(|&pos| (d, pos)))
            .min_by_key(|&(_, pos)| pos)
    }
}

/// Offset after which unmatched `)` are treated as case-pattern terminators:
/// the end of the first bare `in` that follows a bare `case`.
fn case_patterns_start(words: &[Word]) -> Option<usize> {
    let case_idx = words.iter().position(|w| w.is_bare("case"))?;
    words[case_idx + 1..]
        .iter()
        .find(|w| w.is_bare("in"))
        .map(|w| w.span.end)
}

pub(crate) fn check(source: &Source<'_>) -> ValidationResult {
    let patterns_start = case_patterns_start(&source.words());
    let mut stacks = DelimiterStacks::default();
    let mut i = 0;

    while i < source.len() {
        if !source.is_plain(i) {
            i += 1;
            continue;
        }

        match source.char_at(i) {
            Some('$') if source.is_plain_char(i + 1, '(') => {
                stacks.push(Delimiter::Substitution, i);
                i += 2;
                continue;
            }
            Some('(') => stacks.push(Delimiter::Parenthesis, i),
            Some('{') => stacks.push(Delimiter::Brace, i),
            Some('[') => stacks.push(Delimiter::Bracket, i),
            Some(')') => {
                let in_case_body = patterns_start.is_some_and(|start| i >= start);
                if stacks.close_paren().is_none() && !in_case_body {
                    return unmatched(source, Delimiter::Parenthesis, i);
                }
            }
            Some('}') => {
                if stacks.pop(Delimiter::Brace).is_none() {
                    return unmatched(source, Delimiter::Brace, i);
                }
            }
            Some(']') => {
                if stacks.pop(Delimiter::Bracket).is_none() {
                    return unmatched(source, Delimiter::Bracket, i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    match stacks.oldest_unclosed() {
        Some((delimiter, pos)) => unclosed(source, delimiter, pos),
        None => ValidationResult::valid(),
    }
}

fn unmatched(source: &Source<'_>, delimiter: Delimiter, pos: usize) -> ValidationResult {
    let snippet = source.snippet(pos);
    let (code, message, suggestion) = match delimiter {
        Delimiter::Brace => (
            ErrorCode::UnmatchedBrace,
            format!("Unmatched closing brace '}}' at position {pos}: {snippet}"),
            "Remove the extra '}' or add a matching '{' earlier in the command",
        ),
        Delimiter::Bracket => (
            ErrorCode::UnmatchedBracket,
            format!("Unmatched closing bracket ']' at position {pos}: {snippet}"),
            "Remove the extra ']' or add a matching '[' earlier in the command",
        ),
        Delimiter::Substitution | Delimiter::Parenthesis => (
            ErrorCode::UnmatchedParenthesis,
            format!("Unmatched closing parenthesis ')' at position {pos}: {snippet}"),
            "Remove the extra ')' or add a matching '(' earlier in the command",
        ),
    };
    ValidationResult::invalid(code, message)
        .at(pos)
        .suggest(suggestion)
}

fn unclosed(source: &Source<'_>, delimiter: Delimiter, pos: usize) -> ValidationResult {
    let snippet = source.snippet(pos);
    let (code, message, suggestion) = match delimiter {
        Delimiter::Substitution => (
            ErrorCode::UnclosedCommandSubstitution,
            format!("Unclosed command substitution '$(' starting at position {pos}: {snippet}"),
            "Add a closing ')' to complete the $(...) command substitution",
        ),
        Delimiter::Parenthesis => (
            ErrorCode::UnclosedParenthesis,
            format!("Unclosed parenthesis '(' starting at position {pos}: {snippet}"),
            "Add a closing ')' to match the opening '('",
        ),
        Delimiter::Brace => (
            ErrorCode::UnclosedBrace,
            format!("Unclosed brace '{{' starting at position {pos}: {snippet}"),
            "Add a closing '}' to match the opening '{'",
        ),
        Delimiter::Bracket => (
            ErrorCode::UnclosedBracket,
            format!("Unclosed bracket '[' starting at position {pos}: {snippet}"),
            "Add a closing ']' to match the opening '['",
        ),
    };
    ValidationResult::invalid(code, message)
        .at(pos)
        .suggest(suggestion)
}

#[cfg(test)]
#[path = "delimiters_tests.rs"]
mod tests;
