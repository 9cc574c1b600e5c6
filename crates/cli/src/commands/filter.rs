// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cmdlint filter`

use std::io::Write;

use anyhow::Result;
use clap::Args;
use cmdlint_shell::{ValidationResult, Validator};
use serde::Serialize;

use crate::color;
use crate::output::{render_text, OutputFormat, Report, Style};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Also report each rejected command and why on stderr
    #[arg(long)]
    pub show_rejected: bool,
}

#[derive(Serialize)]
struct FilterReport<'a> {
    valid: &'a [String],
    rejected: Vec<Report<'a>>,
}

pub fn handle(args: FilterArgs, validator: &Validator, style: &Style) -> Result<()> {
    let candidates = super::read_lines(std::io::stdin().lock())?;
    let (valid, rejected) = validator.partition(candidates);
    tracing::debug!(
        valid = valid.len(),
        rejected = rejected.len(),
        "filtered candidates"
    );

    write_valid(&valid, &rejected, style, &mut std::io::stdout().lock())?;
    if args.show_rejected && style.format == OutputFormat::Text {
        write_rejected(&rejected, style, &mut std::io::stderr().lock())?;
    }
    Ok(())
}

/// Text: the valid commands, one per line. JSON: both lists in one document.
pub fn write_valid(
    valid: &[String],
    rejected: &[(String, ValidationResult)],
    style: &Style,
    out: &mut impl Write,
) -> Result<()> {
    match style.format {
        OutputFormat::Text => {
            for command in valid {
                writeln!(out, "{command}")?;
            }
        }
        OutputFormat::Json => {
            let report = FilterReport {
                valid,
                rejected: rejected
                    .iter()
                    .map(|(command, result)| Report { command, result })
                    .collect(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

pub fn write_rejected(
    rejected: &[(String, ValidationResult)],
    style: &Style,
    out: &mut impl Write,
) -> Result<()> {
    for (command, result) in rejected {
        writeln!(out, "{}", color::context(style.color, &format!("$ {command}")))?;
        writeln!(out, "{}", render_text(command, result, style))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
