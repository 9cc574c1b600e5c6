//! Real-world command specs
//!
//! Idiomatic commands people actually type must pass unchanged.

use crate::prelude::*;

const COMMANDS: &[&str] = &[
    "git log --oneline | head -20",
    "find . -name '*.rs' -exec grep -l 'TODO' {} \\;",
    "docker ps -q | xargs -r docker stop",
    "cargo build --release 2>&1 | tee build.log",
    "for f in *.log; do gzip \"$f\"; done",
    "while read -r line; do echo \"$line\"; done < input.txt",
    "if [ -f ~/.bashrc ]; then source ~/.bashrc; fi",
    "case \"$1\" in start) run;; stop) halt;; *) usage;; esac",
    "[[ $x == y ]] && echo same || echo different",
    "echo \"$(date +%Y-%m-%d) $((1 + 2))\"",
    "tar -czf backup.tgz --exclude='*.tmp' ./data",
    "diff <(sort a.txt) <(sort b.txt)",
    "curl -fsSL https://example.com/install.sh | sh -s -- --yes",
    "awk '{ sum += $1 } END { print sum }' numbers.txt",
    "ssh host 'cd /srv && ./deploy.sh' || echo 'deploy failed'",
    "sleep 30 &",
    "FOO=bar BAZ=qux env | grep -E '^(FOO|BAZ)='",
    "ls -la # show everything",
];

#[test]
fn real_world_commands_pass_check() {
    let mut args = vec!["check"];
    args.extend_from_slice(COMMANDS);
    cli().args(&args).passes().stdout_lacks("✗");
}

#[test]
fn real_world_commands_survive_filter() {
    let input = COMMANDS.join("\n");
    let expected = format!("{input}\n");
    cli().args(&["filter"]).stdin(&input).passes().stdout_eq(&expected);
}

#[test]
fn multiline_here_document_passes() {
    cli()
        .args(&["check", "--stdin-whole"])
        .stdin("cat <<'EOF' > notes.txt\nit's a (partial) | list\nEOF\n")
        .passes();
}
