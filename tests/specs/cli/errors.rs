//! CLI error handling specs
//!
//! Usage errors exit 2, separate from the "invalid command" exit 1.

use crate::prelude::*;

#[test]
fn no_subcommand_exits_two() {
    cli().exits_with(2).stderr_has("Usage:");
}

#[test]
fn unknown_subcommand_exits_two() {
    cli()
        .args(&["lint", "ls"])
        .exits_with(2)
        .stderr_has("unrecognized subcommand");
}

#[test]
fn stdin_whole_with_arguments_exits_two() {
    cli()
        .args(&["check", "--stdin-whole", "ls"])
        .exits_with(2)
        .stderr_has("cannot be used with");
}

#[test]
fn unknown_output_format_exits_two() {
    cli()
        .args(&["-o", "yaml", "check", "ls"])
        .exits_with(2)
        .stderr_has("invalid value 'yaml'");
}
