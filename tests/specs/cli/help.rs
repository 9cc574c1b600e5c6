//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("check")
        .stdout_has("filter");
}

#[test]
fn check_help_shows_stdin_whole() {
    cli()
        .args(&["check", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--stdin-whole");
}

#[test]
fn filter_help_shows_show_rejected() {
    cli()
        .args(&["filter", "--help"])
        .passes()
        .stdout_has("--show-rejected");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
