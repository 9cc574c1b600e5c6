// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cmdlint check`

use std::io::Write;

use anyhow::Result;
use clap::Args;
use cmdlint_shell::Validator;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{render_json, render_text, OutputFormat, Style};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Commands to validate; read from stdin (one per line) when omitted
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Treat all of stdin as one (possibly multi-line) command
    #[arg(long, conflicts_with = "commands")]
    pub stdin_whole: bool,
}

pub fn handle(args: CheckArgs, validator: &Validator, style: &Style) -> Result<()> {
    let commands = if args.stdin_whole {
        vec![super::read_whole(std::io::stdin().lock())?]
    } else if args.commands.is_empty() {
        super::read_lines(std::io::stdin().lock())?
    } else {
        args.commands
    };

    let all_valid = report(&commands, validator, style, &mut std::io::stdout().lock())?;
    if all_valid {
        Ok(())
    } else {
        Err(ExitError::invalid().into())
    }
}

/// Validate each command and write its result. Returns whether all passed.
pub fn report(
    commands: &[String],
    validator: &Validator,
    style: &Style,
    out: &mut impl Write,
) -> Result<bool> {
    let mut all_valid = true;
    for command in commands {
        let result = validator.validate(command.as_str());
        all_valid &= result.is_valid();

        match style.format {
            OutputFormat::Json => writeln!(out, "{}", render_json(command, &result)?)?,
            OutputFormat::Text => {
                if commands.len() > 1 {
                    writeln!(out, "{}", color::context(style.color, &format!("$ {command}")))?;
                }
                writeln!(out, "{}", render_text(command, &result, style))?;
            }
        }
    }
    Ok(all_valid)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
