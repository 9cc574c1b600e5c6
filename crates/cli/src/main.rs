// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cmdlint - structural syntax checks for shell commands

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmdlint_shell::Validator;

use commands::{check, filter};
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "cmdlint",
    version,
    about = "Check shell commands for structural syntax errors without running them"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (defaults to $CMDLINT_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the tokenizer cross-check
    #[arg(long, global = true)]
    no_cross_check: bool,

    /// Show a caret diagnostic under each error
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate commands given as arguments or read from stdin
    Check(check::CheckArgs),
    /// Print only the valid commands among stdin lines
    Filter(filter::FilterArgs),
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(exit_error::USAGE, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr, filtered by `CMDLINT_LOG` (or `RUST_LOG`), default `warn`.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::resolve(cli.config.as_deref())?;
    if cli.no_cross_check {
        config = config.without_cross_check();
    }
    let validator = Validator::new(config);
    tracing::debug!(?validator, "validator ready");

    let style = output::Style {
        format: cli.output,
        verbose: cli.verbose,
        color: color::should_colorize(),
    };

    match cli.command {
        Commands::Check(args) => check::handle(args, &validator, &style),
        Commands::Filter(args) => filter::handle(args, &validator, &style),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
