// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Structural syntax validation for shell commands.
//!
//! This crate decides, without executing anything, whether a string is a
//! structurally well-formed POSIX-like shell command, and if not, reports
//! what is wrong, where, and how to fix it.
//!
//! # Quick Start
//!
//! ```
//! use cmdlint_shell::{validate, ErrorCode};
//!
//! assert!(validate("ls | grep foo").is_valid());
//!
//! let result = validate("for i in 1 2 3; do echo $i; done done");
//! assert_eq!(result.error_code(), Some(ErrorCode::UnmatchedForDoDone));
//! println!("{result}");
//! ```
//!
//! # Checks
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. **Quotes**: unclosed `'`, `"` and `` ` ``, plus a tokenizer cross-check
//! 2. **Trailing operators**: `ls |`, `make &&`, `echo >`, `foo \`
//! 3. **Leading operators**: `| grep`, `&& ls`, `; pwd`
//! 4. **Delimiters**: `()`, `{}`, `[]` and `$(...)`
//! 5. **Pipe chain**: `ls | | wc`
//! 6. **Logical chains**: `a && && b`, `a || || b`
//! 7. **Redirections**: `cat < < file`, `echo > > out`
//! 8. **Structure**: `ls;; pwd`, `=value`
//! 9. **Control flow**: `if/fi`, `for|while|until|select/done`, `case/esac`
//!
//! The checker is an approximation, not a shell parser. It understands
//! quoting, escapes, here-documents, comments and case patterns well enough
//! not to reject idiomatic commands, and nothing more.
//!
//! # Positions
//!
//! All reported positions are zero-based character offsets.

mod config;
mod control_flow;
mod delimiters;
mod filter;
mod operators;
mod patterns;
mod quotes;
mod result;
mod scan;
pub mod span;
mod structure;
mod tokenize;
mod validator;

pub use config::{ConfigError, CrossCheck, ValidatorConfig};
pub use filter::{filter_valid, partition};
pub use result::{ErrorCategory, ErrorCode, ValidationResult};
pub use span::{context_snippet, diagnostic_context, locate, Span, DEFAULT_SNIPPET_WIDTH};
pub use tokenize::{ExternalTokenizer, ShellWords, TokenizeError, Tokenizer};
pub use validator::{validate, validate_with_config, Validator};
