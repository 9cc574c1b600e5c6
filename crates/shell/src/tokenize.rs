// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secondary word tokenizers used to cross-check the scanner.
//!
//! The validator's own scanner is the primary authority on quoting. A
//! [`Tokenizer`] gives an independent second opinion: if it cannot split a
//! command into words even though the scanner saw balanced quotes, the
//! command is reported as a parse error. Tokenizers that fail for their own
//! reasons (missing program, timeout) are treated as inconclusive.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// How often a running external tokenizer is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Errors produced while splitting a command into words.
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("{0}")]
    Unbalanced(#[from] shell_words::ParseError),

    #[error("{message}")]
    Rejected { message: String },

    #[error("tokenizer timed out after {after:?}")]
    TimedOut { after: Duration },

    #[error("tokenizer '{program}' unavailable: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl TokenizeError {
    /// True when the failure says nothing about the command itself.
    pub fn is_inconclusive(&self) -> bool {
        matches!(
            self,
            TokenizeError::TimedOut { .. } | TokenizeError::Unavailable { .. }
        )
    }
}

/// A pluggable word splitter.
pub trait Tokenizer: Send + Sync {
    /// Split `input` into shell words.
    fn tokenize(&self, input: &str) -> Result<Vec<String>, TokenizeError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// POSIX word splitting via the `shell-words` crate.
///
/// Backticks are ordinary characters to it, which is what lets it catch a
/// quote left open inside a backtick region.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellWords;

impl Tokenizer for ShellWords {
    fn tokenize(&self, input: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(shell_words::split(input)?)
    }

    fn name(&self) -> &str {
        "shell-words"
    }
}

/// Runs an external program as the tokenizer.
///
/// The command is passed as the last argument; each line the program writes
/// to stdout is one word. A non-zero exit is a rejection (stderr becomes the
/// message). The child is killed if it outlives `timeout`.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use cmdlint_shell::{ExternalTokenizer, Tokenizer};
///
/// let python = ExternalTokenizer::new("python3")
///     .args([
///         "-c",
///         "import shlex, sys; print('\\n'.join(shlex.split(sys.argv[1])))",
///     ])
///     .timeout(Duration::from_millis(500));
/// let words = python.tokenize("echo 'a b'")?;
/// assert_eq!(words, vec!["echo", "a b"]);
/// # Ok::<(), cmdlint_shell::TokenizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTokenizer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ExternalTokenizer {
    /// Default time an external tokenizer may run.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Arguments placed before the command.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn unavailable(&self, source: std::io::Error) -> TokenizeError {
        TokenizeError::Unavailable {
            program: self.program.clone(),
            source,
        }
    }
}

impl Tokenizer for ExternalTokenizer {
    fn tokenize(&self, input: &str) -> Result<Vec<String>, TokenizeError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        // Drain pipes on their own threads so a chatty child cannot block.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(TokenizeError::TimedOut {
                        after: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return Err(self.unavailable(e));
                }
            }
        };

        let stdout = stdout.join().unwrap_or_default();
        if !status.success() {
            let stderr = stderr.join().unwrap_or_default();
            let message = match stderr.trim() {
                "" => format!("{} exited with {status}", self.program),
                msg => msg.to_string(),
            };
            return Err(TokenizeError::Rejected { message });
        }

        Ok(stdout.lines().map(str::to_string).collect())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
