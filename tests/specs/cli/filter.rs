//! `cmdlint filter` specs
//!
//! Only valid candidates reach stdout, in input order.

use crate::prelude::*;

const CANDIDATES: &str = "\
ls -la
ls |
git status && git diff
echo 'unterminated
for f in *; do echo $f; done
";

#[test]
fn keeps_valid_commands_in_order() {
    cli()
        .args(&["filter"])
        .stdin(CANDIDATES)
        .passes()
        .stdout_eq("ls -la\ngit status && git diff\nfor f in *; do echo $f; done\n");
}

#[test]
fn exits_zero_even_when_everything_is_rejected() {
    cli()
        .args(&["filter"])
        .stdin("ls |\n&& ls\n")
        .passes()
        .stdout_eq("");
}

#[test]
fn show_rejected_reports_on_stderr() {
    cli()
        .args(&["filter", "--show-rejected"])
        .stdin(CANDIDATES)
        .passes()
        .stdout_lacks("unterminated")
        .stderr_has("$ ls |\n✗ Command ends with incomplete pipe operator '|' (position 3)")
        .stderr_has("$ echo 'unterminated\n✗ Unclosed single quote");
}

#[test]
fn json_output_lists_both_sides() {
    let run = cli()
        .args(&["filter", "--output", "json"])
        .stdin(CANDIDATES)
        .passes();
    let report = run.stdout_json();

    assert_eq!(
        report["valid"],
        serde_json::json!(["ls -la", "git status && git diff", "for f in *; do echo $f; done"])
    );
    let rejected = report["rejected"].as_array().unwrap();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0]["command"], "ls |");
    assert_eq!(rejected[0]["error_code"], "TRAILING_PIPE");
    assert_eq!(rejected[1]["error_code"], "UNCLOSED_SINGLE_QUOTE");
    assert_eq!(rejected[1]["error_position"], 5);
}

#[test]
fn empty_input_yields_empty_output() {
    cli().args(&["filter"]).passes().stdout_eq("");
}
