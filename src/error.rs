// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three kinds of thing can go wrong, and they happen at different times:
//!
//! | Error              | When                                   |
//! |--------------------|----------------------------------------|
//! | `EveryError`       | building an `Every` from an empty source |
//! | `ConfigError`      | building a matcher with bad arguments  |
//! | `AssertionFailure` | a checked assertion did not hold       |

use thiserror::Error;

/// An `Every` was requested from a source with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Every must contain at least one element")]
pub struct EveryError;

/// A matcher word rejected its arguments.
///
/// Raised while the matcher is being built, before any value is inspected.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The argument list repeats a value.
    #[error("{word} must not contain duplicated value")]
    Duplicate { word: &'static str },

    /// The word needs more arguments than it was given.
    #[error("{word} requires at least {min} elements, got {actual}")]
    TooFew {
        word: &'static str,
        min: usize,
        actual: usize,
    },

    /// The word needs at least one argument.
    #[error("{word} must not be empty")]
    Empty { word: &'static str },

    /// A string matcher was given a pattern that does not compile.
    #[error("invalid regex {pattern:?}: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A non-destructively evaluated assertion that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The fully formatted failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
