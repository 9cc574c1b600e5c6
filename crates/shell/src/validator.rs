// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The validation pipeline.
//!
//! A command is scanned once, then run through a fixed sequence of checks.
//! The first failing check decides the result, so quoting and delimiter
//! defects are always reported ahead of the weaker structural heuristics.

use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::config::ValidatorConfig;
use crate::result::{ErrorCode, ValidationResult};
use crate::scan::Source;
use crate::tokenize::Tokenizer;
use crate::{control_flow, delimiters, operators, quotes, structure};

/// One stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check {
    Quotes,
    TrailingOperators,
    LeadingOperators,
    Delimiters,
    PipeChain,
    LogicalChains,
    Redirections,
    Structure,
    ControlFlow,
}

impl Check {
    /// Pipeline order.
    pub(crate) const ORDER: [Check; 9] = [
        Check::Quotes,
        Check::TrailingOperators,
        Check::LeadingOperators,
        Check::Delimiters,
        Check::PipeChain,
        Check::LogicalChains,
        Check::Redirections,
        Check::Structure,
        Check::ControlFlow,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Check::Quotes => "quotes",
            Check::TrailingOperators => "trailing-operators",
            Check::LeadingOperators => "leading-operators",
            Check::Delimiters => "delimiters",
            Check::PipeChain => "pipe-chain",
            Check::LogicalChains => "logical-chains",
            Check::Redirections => "redirections",
            Check::Structure => "structure",
            Check::ControlFlow => "control-flow",
        }
    }

    pub(crate) fn run(
        self,
        source: &Source<'_>,
        tokenizer: Option<&dyn Tokenizer>,
    ) -> ValidationResult {
        match self {
            Check::Quotes => quotes::check(source, tokenizer),
            Check::TrailingOperators => operators::check_trailing(source),
            Check::LeadingOperators => operators::check_leading(source),
            Check::Delimiters => delimiters::check(source),
            Check::PipeChain => operators::check_pipe_chain(source),
            Check::LogicalChains => operators::check_logical_chains(source),
            Check::Redirections => operators::check_redirections(source),
            Check::Structure => structure::check(source),
            Check::ControlFlow => control_flow::check(source),
        }
    }
}

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Validate `command` with the default configuration.
///
/// Accepts `&str` or `Option<&str>`; `None` is rejected as
/// [`ErrorCode::EmptyCommand`].
///
/// # Example
///
/// ```
/// use cmdlint_shell::{validate, ErrorCode};
///
/// assert!(validate("ls | grep foo").is_valid());
/// assert_eq!(validate("ls |").error_code(), Some(ErrorCode::TrailingPipe));
/// assert_eq!(validate(None).error_code(), Some(ErrorCode::EmptyCommand));
/// ```
pub fn validate<'a>(command: impl Into<Option<&'a str>>) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(command)
}

/// Validate `command` with a custom configuration.
///
/// Builds a fresh [`Validator`]; prefer [`Validator::new`] when validating
/// many commands with the same config.
pub fn validate_with_config<'a>(
    command: impl Into<Option<&'a str>>,
    config: &ValidatorConfig,
) -> ValidationResult {
    Validator::new(config.clone()).validate(command)
}

/// A reusable, thread-safe command validator.
///
/// Holds only immutable configuration and the optional cross-check
/// tokenizer, so one instance can serve any number of threads.
pub struct Validator {
    config: ValidatorConfig,
    tokenizer: Option<Box<dyn Tokenizer>>,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        let tokenizer = config.cross_check.tokenizer();
        Self { config, tokenizer }
    }

    /// Replace the cross-check tokenizer with a custom implementation.
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Some(Box::new(tokenizer));
        self
    }

    /// Disable the cross-check entirely.
    pub fn without_cross_check(mut self) -> Self {
        self.tokenizer = None;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate one command.
    pub fn validate<'a>(&self, command: impl Into<Option<&'a str>>) -> ValidationResult {
        let Some(command) = command.into() else {
            return ValidationResult::invalid(ErrorCode::EmptyCommand, "Command cannot be None")
                .suggest("Provide a valid shell command string");
        };

        if command.trim().is_empty() {
            return ValidationResult::invalid(
                ErrorCode::EmptyCommand,
                "Command is empty or contains only whitespace",
            )
            .suggest("Provide a non-empty shell command");
        }

        let source = Source::scan(command, self.config.snippet_width);
        for check in Check::ORDER {
            trace!(check = check.name(), "running check");
            let result = check.run(&source, self.tokenizer.as_deref());
            if !result.is_valid() {
                debug!(
                    check = check.name(),
                    code = ?result.error_code(),
                    position = ?result.error_position(),
                    "command rejected"
                );
                return result;
            }
        }

        ValidationResult::valid()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.as_ref().map(|t| t.name()))
            .finish()
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
