// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword balance for `if/fi`, `for|while|until|select/done` and
//! `case/esac`.
//!
//! Each opening keyword family keeps a counter. The four loop families all
//! close with `done`, which cannot say which loop it ends; it closes the
//! first open family in the order `for`, `while`, `until`, `select`. That
//! attribution is approximate for mixed nesting, but the total balance is
//! exact.

use crate::result::{ErrorCode, ValidationResult};
use crate::scan::Source;

/// An opening control-flow keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opener {
    If,
    For,
    While,
    Until,
    Select,
    Case,
}

impl Opener {
    /// Report order for constructs left open at end of input.
    const ALL: [Opener; 6] = [
        Opener::If,
        Opener::For,
        Opener::While,
        Opener::Until,
        Opener::Select,
        Opener::Case,
    ];

    /// Loop families in the order `done` closes them.
    const LOOPS: [Opener; 4] = [Opener::For, Opener::While, Opener::Until, Opener::Select];

    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "if" => Some(Opener::If),
            "for" => Some(Opener::For),
            "while" => Some(Opener::While),
            "until" => Some(Opener::Until),
            "select" => Some(Opener::Select),
            "case" => Some(Opener::Case),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn code(self) -> ErrorCode {
        match self {
            Opener::If => ErrorCode::UnmatchedIfThenFi,
            Opener::For | Opener::Select => ErrorCode::UnmatchedForDoDone,
            Opener::While | Opener::Until => ErrorCode::UnmatchedWhileDoDone,
            Opener::Case => ErrorCode::UnmatchedCaseEsac,
        }
    }

    fn unclosed(self, count: usize) -> ValidationResult {
        let (message, suggestion) = match self {
            Opener::If => (
                format!("Unclosed 'if' statement - missing 'fi' ({count} unclosed)"),
                "Add 'fi' to close the 'if' statement: if condition; then commands; fi",
            ),
            Opener::For => (
                format!("Unclosed 'for' loop - missing 'done' ({count} unclosed)"),
                "Add 'done' to close the 'for' loop: for var in list; do commands; done",
            ),
            Opener::While => (
                format!("Unclosed 'while' loop - missing 'done' ({count} unclosed)"),
                "Add 'done' to close the 'while' loop: while condition; do commands; done",
            ),
            Opener::Until => (
                format!("Unclosed 'until' loop - missing 'done' ({count} unclosed)"),
                "Add 'done' to close the 'until' loop: until condition; do commands; done",
            ),
            Opener::Select => (
                format!("Unclosed 'select' statement - missing 'done' ({count} unclosed)"),
                "Add 'done' to close the 'select' statement: select var in list; do commands; done",
            ),
            Opener::Case => (
                format!("Unclosed 'case' statement - missing 'esac' ({count} unclosed)"),
                "Add 'esac' to close the 'case' statement: case $var in pattern) commands;; esac",
            ),
        };
        ValidationResult::invalid(self.code(), message).suggest(suggestion)
    }
}

#[derive(Debug, Default)]
struct Counters([usize; 6]);

impl Counters {
    fn open(&mut self, opener: Opener) {
        self.0[opener.index()] += 1;
    }

    /// Close one of `openers`, trying them in order. False if none is open.
    fn close_any(&mut self, openers: &[Opener]) -> bool {
        match openers.iter().find(|o| self.0[o.index()] > 0) {
            Some(o) => {
                self.0[o.index()] -= 1;
                true
            }
            None => false,
        }
    }

    fn first_open(&self) -> Option<(Opener, usize)> {
        Opener::ALL
            .into_iter()
            .map(|o| (o, self.0[o.index()]))
            .find(|&(_, count)| count > 0)
    }
}

pub(crate) fn check(source: &Source<'_>) -> ValidationResult {
    let mut counters = Counters::default();

    for word in source.words().iter().filter(|w| !w.quoted) {
        if let Some(opener) = Opener::from_keyword(&word.text) {
            counters.open(opener);
            continue;
        }

        let closed = match word.text.as_str() {
            "fi" => counters.close_any(&[Opener::If]),
            "done" => counters.close_any(&Opener::LOOPS),
            "esac" => counters.close_any(&[Opener::Case]),
            _ => continue,
        };
        if !closed {
            return unmatched(&word.text).at(word.span.start);
        }
    }

    match counters.first_open() {
        Some((opener, count)) => opener.unclosed(count),
        None => ValidationResult::valid(),
    }
}

fn unmatched(closer: &str) -> ValidationResult {
    match closer {
        "fi" => ValidationResult::invalid(
            ErrorCode::UnmatchedIfThenFi,
            "Unmatched 'fi' - missing corresponding 'if'",
        )
        .suggest("Add an 'if' statement before 'fi', or remove the extra 'fi'"),
        "esac" => ValidationResult::invalid(
            ErrorCode::UnmatchedCaseEsac,
            "Unmatched 'esac' - missing corresponding 'case'",
        )
        .suggest("Add a 'case' statement before 'esac', or remove the extra 'esac'"),
        _ => ValidationResult::invalid(
            ErrorCode::UnmatchedForDoDone,
            "Unmatched 'done' - missing corresponding 'for', 'while', 'until', or 'select'",
        )
        .suggest("Add a loop statement before 'done', or remove the extra 'done'"),
    }
}

#[cfg(test)]
#[path = "control_flow_tests.rs"]
mod tests;
