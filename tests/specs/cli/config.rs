//! Config file specs
//!
//! `--config`, `$CMDLINT_CONFIG` and `--no-cross-check`.

use crate::prelude::*;

// The quote inside backticks is only caught by the tokenizer cross-check.
const BACKTICK_QUOTE: &str = "echo `echo \"hi`";

#[test]
fn cross_check_is_on_by_default() {
    let run = cli()
        .args(&["-o", "json", "check", BACKTICK_QUOTE])
        .exits_with(1);
    assert_eq!(run.stdout_json_lines()[0]["error_code"], "PARSE_ERROR");
}

#[test]
fn no_cross_check_flag_disables_it() {
    cli()
        .args(&["check", "--no-cross-check", BACKTICK_QUOTE])
        .passes();
}

#[test]
fn config_file_can_disable_cross_check() {
    let scratch = Scratch::new();
    let path = scratch.file("cmdlint.toml", "[cross-check]\nkind = \"none\"\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "check", BACKTICK_QUOTE])
        .passes();
}

#[test]
fn config_env_var_is_honored() {
    let scratch = Scratch::new();
    let path = scratch.file("cmdlint.toml", "[cross-check]\nkind = \"none\"\n");

    cli()
        .env("CMDLINT_CONFIG", &path)
        .args(&["check", BACKTICK_QUOTE])
        .passes();
}

#[test]
fn default_config_dir_is_used_when_present() {
    let scratch = Scratch::new();
    std::fs::create_dir_all(scratch.path().join("cmdlint")).unwrap();
    scratch.file("cmdlint/config.toml", "snippet-width = 4\n");

    let run = cli()
        .env("XDG_CONFIG_HOME", scratch.path())
        .args(&["-o", "json", "check", "some long prefix 'open"])
        .exits_with(1);
    assert_eq!(
        run.stdout_json_lines()[0]["error_message"],
        "Unclosed single quote starting at position 17: '...x 'o...'"
    );
}

#[test]
fn external_tokenizer_rejection_is_a_parse_error() {
    let scratch = Scratch::new();
    let path = scratch.file(
        "cmdlint.toml",
        "[cross-check]\nkind = \"external\"\nprogram = \"false\"\n",
    );

    let run = cli()
        .args(&["-o", "json", "--config", path.to_str().unwrap(), "check", "ls"])
        .exits_with(1);
    let line = &run.stdout_json_lines()[0];
    assert_eq!(line["error_code"], "PARSE_ERROR");
    assert!(line.get("error_position").is_none());
}

#[test]
fn missing_external_tokenizer_is_ignored() {
    let scratch = Scratch::new();
    let path = scratch.file(
        "cmdlint.toml",
        "[cross-check]\nkind = \"external\"\nprogram = \"cmdlint-no-such-tokenizer\"\n",
    );

    cli()
        .args(&["--config", path.to_str().unwrap(), "check", "ls | wc"])
        .passes();
}

#[test]
fn malformed_config_exits_two() {
    let scratch = Scratch::new();
    let path = scratch.file("cmdlint.toml", "snippet-width = \"wide\"\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "check", "ls"])
        .exits_with(2)
        .stderr_has("Error: loading config")
        .stderr_has("invalid config:");
}

#[test]
fn missing_named_config_exits_two() {
    let scratch = Scratch::new();
    let path = scratch.path().join("absent.toml");

    cli()
        .args(&["--config", path.to_str().unwrap(), "check", "ls"])
        .exits_with(2)
        .stderr_has("failed to read config");
}
