//! Invalid syntax specs
//!
//! Each broken command reports the expected error code and position.

use crate::prelude::*;

/// (command, error code, position)
const BROKEN: &[(&str, &str, Option<u64>)] = &[
    ("echo 'hello", "UNCLOSED_SINGLE_QUOTE", Some(5)),
    ("echo \"hello", "UNCLOSED_DOUBLE_QUOTE", Some(5)),
    ("echo `date", "UNCLOSED_BACKTICK", Some(5)),
    ("ls |", "TRAILING_PIPE", Some(3)),
    ("make &&", "TRAILING_AND", Some(5)),
    ("test -f x ||", "TRAILING_OR", Some(10)),
    ("echo hi >", "REDIRECT_WITHOUT_TARGET", Some(8)),
    ("echo foo \\", "TRAILING_BACKSLASH", Some(9)),
    ("| grep x", "LEADING_PIPE", Some(0)),
    ("&& ls", "LEADING_AND", Some(0)),
    ("|| ls", "LEADING_OR", Some(0)),
    ("; ls", "LEADING_SEMICOLON", Some(0)),
    ("echo (a", "UNCLOSED_PARENTHESIS", Some(5)),
    ("echo a)", "UNMATCHED_PARENTHESIS", Some(6)),
    ("{ echo a", "UNCLOSED_BRACE", Some(0)),
    ("echo $(date", "UNCLOSED_COMMAND_SUBSTITUTION", Some(5)),
    ("ls | | wc", "EMPTY_PIPE_SEGMENT", Some(5)),
    ("a && && b", "EMPTY_AND_SEGMENT", Some(5)),
    ("cat < < file", "REDIRECT_WITHOUT_TARGET", Some(4)),
    ("ls ;; pwd", "CONSECUTIVE_SEMICOLONS", Some(3)),
    ("=value", "INVALID_VARIABLE_ASSIGNMENT", Some(0)),
    ("if true; then echo hi", "UNMATCHED_IF_THEN_FI", None),
    ("echo hi; fi", "UNMATCHED_IF_THEN_FI", Some(9)),
    ("for i in 1 2; do echo $i", "UNMATCHED_FOR_DO_DONE", None),
    ("while true; do sleep 1", "UNMATCHED_WHILE_DO_DONE", None),
    ("case $x in a) echo a;;", "UNMATCHED_CASE_ESAC", None),
];

#[test]
fn broken_commands_report_code_and_position() {
    let mut args = vec!["-o", "json", "check"];
    args.extend(BROKEN.iter().map(|(command, _, _)| *command));
    let run = cli().args(&args).exits_with(1);

    let lines = run.stdout_json_lines();
    assert_eq!(lines.len(), BROKEN.len());
    for (line, (command, code, position)) in lines.iter().zip(BROKEN) {
        assert_eq!(line["command"], *command);
        assert_eq!(line["is_valid"], false, "{command:?}");
        assert_eq!(line["error_code"], *code, "{command:?}");
        assert_eq!(line["error_position"].as_u64(), *position, "{command:?}");
        assert!(line["suggestion"].is_string(), "{command:?}");
    }
}

#[test]
fn filter_drops_every_broken_command() {
    let input: Vec<&str> = BROKEN.iter().map(|(command, _, _)| *command).collect();
    cli()
        .args(&["filter"])
        .stdin(&input.join("\n"))
        .passes()
        .stdout_eq("");
}
