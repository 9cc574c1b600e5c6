//! `cmdlint check` specs
//!
//! Exit codes, text output and JSON output for checked commands.

use crate::prelude::*;

#[test]
fn valid_command_exits_zero() {
    cli()
        .args(&["check", "ls | grep foo"])
        .passes()
        .stdout_eq("✓ Command is valid\n");
}

#[test]
fn invalid_command_exits_one_with_suggestion() {
    cli()
        .args(&["check", "ls |"])
        .exits_with(1)
        .stdout_eq(
            "✗ Command ends with incomplete pipe operator '|' (position 3)\n  \
             → Add a command after the pipe, e.g., 'cmd1 | cmd2'\n",
        );
}

#[test]
fn invalid_command_prints_nothing_on_stderr() {
    let run = cli().args(&["check", "echo 'oops"]).exits_with(1);
    assert_eq!(run.stderr(), "");
}

#[test]
fn verbose_adds_caret_diagnostic() {
    cli()
        .args(&["check", "--verbose", "echo 'oops"])
        .exits_with(1)
        .stdout_has("    --> line 1, column 6\n")
        .stdout_has("  1 | echo 'oops\n")
        .stdout_has("     |      ^\n");
}

#[test]
fn several_commands_are_labelled() {
    cli()
        .args(&["check", "ls", "ls |"])
        .exits_with(1)
        .stdout_has("$ ls\n✓ Command is valid\n")
        .stdout_has("$ ls |\n✗ Command ends with incomplete pipe operator");
}

#[test]
fn all_valid_commands_exit_zero() {
    cli()
        .args(&["check", "make", "make test && make install"])
        .passes()
        .stdout_lacks("✗");
}

#[test]
fn json_output_is_one_object_per_command() {
    let run = cli()
        .args(&["--output", "json", "check", "ls", "for i in 1; do echo; done done"])
        .exits_with(1);
    let lines = run.stdout_json_lines();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["command"], "ls");
    assert_eq!(lines[0]["is_valid"], true);
    assert!(lines[0].get("error_code").is_none());

    assert_eq!(lines[1]["is_valid"], false);
    assert_eq!(lines[1]["error_code"], "UNMATCHED_FOR_DO_DONE");
    assert_eq!(lines[1]["error_position"], 26);
    assert!(lines[1]["suggestion"].is_string());
}

#[test]
fn global_flags_follow_subcommand() {
    let run = cli().args(&["check", "-o", "json", "ls |"]).exits_with(1);
    let lines = run.stdout_json_lines();
    assert_eq!(lines[0]["error_code"], "TRAILING_PIPE");
}

#[test]
fn commands_are_read_from_stdin_lines() {
    cli()
        .args(&["check"])
        .stdin("ls\n\n   \nls | wc -l\n")
        .passes()
        .stdout_eq("$ ls\n✓ Command is valid\n$ ls | wc -l\n✓ Command is valid\n");
}

#[test]
fn stdin_line_failure_exits_one() {
    cli()
        .args(&["check"])
        .stdin("ls\n&& ls\n")
        .exits_with(1)
        .stdout_has("Command cannot start with AND operator '&&'");
}

#[test]
fn stdin_whole_keeps_multiline_command() {
    cli()
        .args(&["check", "--stdin-whole"])
        .stdin("if true; then\n  echo yes\nfi\n")
        .passes()
        .stdout_eq("✓ Command is valid\n");
}

#[test]
fn stdin_whole_reports_unclosed_block() {
    let run = cli()
        .args(&["-o", "json", "check", "--stdin-whole"])
        .stdin("while true; do\n  sleep 1\n")
        .exits_with(1);
    assert_eq!(run.stdout_json_lines()[0]["error_code"], "UNMATCHED_WHILE_DO_DONE");
}

#[test]
fn empty_argument_is_empty_command() {
    let run = cli().args(&["-o", "json", "check", "  "]).exits_with(1);
    let line = &run.stdout_json_lines()[0];
    assert_eq!(line["error_code"], "EMPTY_COMMAND");
    assert_eq!(line["error_message"], "Command is empty or contains only whitespace");
}

#[test]
fn color_is_forced_with_color_env() {
    cli()
        .env("COLOR", "1")
        .env("NO_COLOR", "0")
        .args(&["check", "ls"])
        .passes()
        .stdout_has("\x1b[32m");
}
