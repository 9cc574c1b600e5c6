// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Passing marks.
    pub const PASS: u8 = 32;
    /// Failing marks and messages.
    pub const FAIL: u8 = 31;
    /// Suggestions.
    pub const HINT: u8 = 33;
    /// Diagnostics and secondary text: medium grey.
    pub const CONTEXT: u8 = 245;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

const RESET: &str = "\x1b[0m";

fn paint(enabled: bool, start: String, text: &str) -> String {
    if enabled {
        format!("{start}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn pass(enabled: bool, text: &str) -> String {
    paint(enabled, format!("\x1b[{}m", codes::PASS), text)
}

pub fn fail(enabled: bool, text: &str) -> String {
    paint(enabled, format!("\x1b[{}m", codes::FAIL), text)
}

pub fn hint(enabled: bool, text: &str) -> String {
    paint(enabled, format!("\x1b[{}m", codes::HINT), text)
}

pub fn context(enabled: bool, text: &str) -> String {
    paint(enabled, format!("\x1b[38;5;{}m", codes::CONTEXT), text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
