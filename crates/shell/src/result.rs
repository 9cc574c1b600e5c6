// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::diagnostic_context;

/// Closed set of reasons a command can be rejected.
///
/// Serialized (and displayed) as the upper-case snake name, e.g.
/// `"UNCLOSED_SINGLE_QUOTE"`, so callers can branch on it across a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyCommand,
    UnclosedSingleQuote,
    UnclosedDoubleQuote,
    UnclosedBacktick,
    TrailingPipe,
    TrailingAnd,
    TrailingOr,
    /// Reserved; dangling redirections are reported as
    /// [`ErrorCode::RedirectWithoutTarget`].
    TrailingRedirect,
    TrailingSemicolon,
    TrailingBackslash,
    LeadingPipe,
    LeadingAnd,
    LeadingOr,
    LeadingSemicolon,
    UnclosedParenthesis,
    UnclosedBrace,
    UnclosedBracket,
    UnmatchedParenthesis,
    UnmatchedBrace,
    UnmatchedBracket,
    EmptyPipeSegment,
    EmptyAndSegment,
    EmptyOrSegment,
    ConsecutiveSemicolons,
    InvalidVariableAssignment,
    RedirectWithoutTarget,
    UnclosedCommandSubstitution,
    UnmatchedIfThenFi,
    UnmatchedForDoDone,
    UnmatchedWhileDoDone,
    UnmatchedCaseEsac,
    ParseError,
}

/// Coarse grouping of error codes, useful for summaries and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    Empty,
    Quoting,
    Operator,
    Delimiter,
    Segment,
    Redirect,
    Structure,
    ControlFlow,
    Parse,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 32] = [
        ErrorCode::EmptyCommand,
        ErrorCode::UnclosedSingleQuote,
        ErrorCode::UnclosedDoubleQuote,
        ErrorCode::UnclosedBacktick,
        ErrorCode::TrailingPipe,
        ErrorCode::TrailingAnd,
        ErrorCode::TrailingOr,
        ErrorCode::TrailingRedirect,
        ErrorCode::TrailingSemicolon,
        ErrorCode::TrailingBackslash,
        ErrorCode::LeadingPipe,
        ErrorCode::LeadingAnd,
        ErrorCode::LeadingOr,
        ErrorCode::LeadingSemicolon,
        ErrorCode::UnclosedParenthesis,
        ErrorCode::UnclosedBrace,
        ErrorCode::UnclosedBracket,
        ErrorCode::UnmatchedParenthesis,
        ErrorCode::UnmatchedBrace,
        ErrorCode::UnmatchedBracket,
        ErrorCode::EmptyPipeSegment,
        ErrorCode::EmptyAndSegment,
        ErrorCode::EmptyOrSegment,
        ErrorCode::ConsecutiveSemicolons,
        ErrorCode::InvalidVariableAssignment,
        ErrorCode::RedirectWithoutTarget,
        ErrorCode::UnclosedCommandSubstitution,
        ErrorCode::UnmatchedIfThenFi,
        ErrorCode::UnmatchedForDoDone,
        ErrorCode::UnmatchedWhileDoDone,
        ErrorCode::UnmatchedCaseEsac,
        ErrorCode::ParseError,
    ];

    /// The wire name of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyCommand => "EMPTY_COMMAND",
            ErrorCode::UnclosedSingleQuote => "UNCLOSED_SINGLE_QUOTE",
            ErrorCode::UnclosedDoubleQuote => "UNCLOSED_DOUBLE_QUOTE",
            ErrorCode::UnclosedBacktick => "UNCLOSED_BACKTICK",
            ErrorCode::TrailingPipe => "TRAILING_PIPE",
            ErrorCode::TrailingAnd => "TRAILING_AND",
            ErrorCode::TrailingOr => "TRAILING_OR",
            ErrorCode::TrailingRedirect => "TRAILING_REDIRECT",
            ErrorCode::TrailingSemicolon => "TRAILING_SEMICOLON",
            ErrorCode::TrailingBackslash => "TRAILING_BACKSLASH",
            ErrorCode::LeadingPipe => "LEADING_PIPE",
            ErrorCode::LeadingAnd => "LEADING_AND",
            ErrorCode::LeadingOr => "LEADING_OR",
            ErrorCode::LeadingSemicolon => "LEADING_SEMICOLON",
            ErrorCode::UnclosedParenthesis => "UNCLOSED_PARENTHESIS",
            ErrorCode::UnclosedBrace => "UNCLOSED_BRACE",
            ErrorCode::UnclosedBracket => "UNCLOSED_BRACKET",
            ErrorCode::UnmatchedParenthesis => "UNMATCHED_PARENTHESIS",
            ErrorCode::UnmatchedBrace => "UNMATCHED_BRACE",
            ErrorCode::UnmatchedBracket => "UNMATCHED_BRACKET",
            ErrorCode::EmptyPipeSegment => "EMPTY_PIPE_SEGMENT",
            ErrorCode::EmptyAndSegment => "EMPTY_AND_SEGMENT",
            ErrorCode::EmptyOrSegment => "EMPTY_OR_SEGMENT",
            ErrorCode::ConsecutiveSemicolons => "CONSECUTIVE_SEMICOLONS",
            ErrorCode::InvalidVariableAssignment => "INVALID_VARIABLE_ASSIGNMENT",
            ErrorCode::RedirectWithoutTarget => "REDIRECT_WITHOUT_TARGET",
            ErrorCode::UnclosedCommandSubstitution => "UNCLOSED_COMMAND_SUBSTITUTION",
            ErrorCode::UnmatchedIfThenFi => "UNMATCHED_IF_THEN_FI",
            ErrorCode::UnmatchedForDoDone => "UNMATCHED_FOR_DO_DONE",
            ErrorCode::UnmatchedWhileDoDone => "UNMATCHED_WHILE_DO_DONE",
            ErrorCode::UnmatchedCaseEsac => "UNMATCHED_CASE_ESAC",
            ErrorCode::ParseError => "PARSE_ERROR",
        }
    }

    /// Which family of defect this code belongs to.
    pub fn category(self) -> ErrorCategory {
        use ErrorCode::*;
        match self {
            EmptyCommand => ErrorCategory::Empty,
            UnclosedSingleQuote | UnclosedDoubleQuote | UnclosedBacktick => ErrorCategory::Quoting,
            TrailingPipe | TrailingAnd | TrailingOr | TrailingSemicolon | TrailingBackslash
            | LeadingPipe | LeadingAnd | LeadingOr | LeadingSemicolon => ErrorCategory::Operator,
            UnclosedParenthesis
            | UnclosedBrace
            | UnclosedBracket
            | UnmatchedParenthesis
            | UnmatchedBrace
            | UnmatchedBracket
            | UnclosedCommandSubstitution => ErrorCategory::Delimiter,
            EmptyPipeSegment | EmptyAndSegment | EmptyOrSegment => ErrorCategory::Segment,
            TrailingRedirect | RedirectWithoutTarget => ErrorCategory::Redirect,
            ConsecutiveSemicolons | InvalidVariableAssignment => ErrorCategory::Structure,
            UnmatchedIfThenFi | UnmatchedForDoDone | UnmatchedWhileDoDone | UnmatchedCaseEsac => {
                ErrorCategory::ControlFlow
            }
            ParseError => ErrorCategory::Parse,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one command.
///
/// A valid result carries nothing else. An invalid result always carries an
/// [`ErrorCode`] and a message; the position and suggestion are best-effort.
///
/// # Example
///
/// ```
/// use cmdlint_shell::{validate, ErrorCode};
///
/// let result = validate("echo 'hello");
/// assert!(!result.is_valid());
/// assert_eq!(result.error_code(), Some(ErrorCode::UnclosedSingleQuote));
/// assert_eq!(result.error_position(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_code: None,
            error_message: None,
            error_position: None,
            suggestion: None,
        }
    }

    /// A failing result with the given code and message.
    pub fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_code: Some(code),
            error_message: Some(message.into()),
            error_position: None,
            suggestion: None,
        }
    }

    /// Attach the character offset where the defect was detected.
    ///
    /// Ignored on valid results.
    pub fn at(mut self, position: usize) -> Self {
        if !self.is_valid {
            self.error_position = Some(position);
        }
        self
    }

    /// Attach remediation text.
    ///
    /// Ignored on valid results.
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        if !self.is_valid {
            self.suggestion = Some(suggestion.into());
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error_code
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn error_position(&self) -> Option<usize> {
        self.error_position
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Render a caret diagnostic against the validated `input`, or `None`
    /// when the result is valid or not localized.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        let position = self.error_position?;
        let message = self.error_message.as_deref().unwrap_or("invalid command");
        Some(diagnostic_context(input, position, message))
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return f.write_str("Valid command");
        }
        f.write_str(self.error_message.as_deref().unwrap_or("Unknown error"))?;
        if let Some(position) = self.error_position {
            write!(f, " (at position {position})")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
