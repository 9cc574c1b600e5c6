// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use cmdlint_shell::ValidationResult;
use serde::Serialize;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How results are rendered for this invocation.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub format: OutputFormat,
    pub verbose: bool,
    pub color: bool,
}

/// One validated command, as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub command: &'a str,
    #[serde(flatten)]
    pub result: &'a ValidationResult,
}

/// Render a result as human-readable text (no trailing newline).
///
/// ```text
/// ✗ Command ends with incomplete pipe operator '|' (position 3)
///   → Add a command after the pipe, e.g., 'cmd1 | cmd2'
/// ```
pub fn render_text(command: &str, result: &ValidationResult, style: &Style) -> String {
    if result.is_valid() {
        return color::pass(style.color, "✓ Command is valid");
    }

    let message = result.error_message().unwrap_or("Invalid command");
    let mut line = format!("✗ {message}");
    if let Some(position) = result.error_position() {
        line.push_str(&format!(" (position {position})"));
    }
    let mut out = color::fail(style.color, &line);

    if let Some(suggestion) = result.suggestion() {
        out.push('\n');
        out.push_str(&color::hint(style.color, &format!("  → {suggestion}")));
    }

    if style.verbose {
        if let Some(diagnostic) = result.diagnostic(command) {
            for diag_line in diagnostic.lines() {
                out.push('\n');
                out.push_str(&color::context(style.color, &format!("  {diag_line}")));
            }
        }
    }
    out
}

/// Render a result as one line of JSON.
pub fn render_json(command: &str, result: &ValidationResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&Report { command, result })?)
}
