// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring and regex matchers on anything that is `AsRef<str>`.
//!
//! Regex words compile their pattern up front and return a `ConfigError` for
//! a bad one. The pattern is anchored per word (`^(?:p)` for "start with",
//! `(?:p)$` for "end with", both for "fully match") so matching is a single
//! `is_match` call.

use super::Matcher;
use crate::error::ConfigError;
use crate::prettify::Prettifier;
use crate::result::MatchResult;
use log::warn;
use regex::Regex;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Start,
    End,
    Anywhere,
    Whole,
}

// ============================================================================
// SUBSTRINGS
// ============================================================================

#[derive(Debug, Clone)]
pub struct StringMatcher {
    position: Position,
    needle: String,
}

pub fn start_with(prefix: impl Into<String>) -> StringMatcher {
    StringMatcher {
        position: Position::Start,
        needle: prefix.into(),
    }
}

pub fn end_with(suffix: impl Into<String>) -> StringMatcher {
    StringMatcher {
        position: Position::End,
        needle: suffix.into(),
    }
}

pub fn include(substring: impl Into<String>) -> StringMatcher {
    StringMatcher {
        position: Position::Anywhere,
        needle: substring.into(),
    }
}

impl<T: AsRef<str> + Debug + ?Sized> Matcher<T> for StringMatcher {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        let haystack = left.as_ref();
        let (holds, failure, negated) = match self.position {
            Position::Start => (
                haystack.starts_with(&self.needle),
                "{0} did not start with substring {1}",
                "{0} started with substring {1}",
            ),
            Position::End => (
                haystack.ends_with(&self.needle),
                "{0} did not end with substring {1}",
                "{0} ended with substring {1}",
            ),
            Position::Anywhere | Position::Whole => (
                haystack.contains(&self.needle),
                "{0} did not include substring {1}",
                "{0} included substring {1}",
            ),
        };
        MatchResult::new(
            holds,
            failure,
            negated,
            vec![prettifier.render(&left), prettifier.render(&self.needle)],
        )
    }
}

// ============================================================================
// REGEX
// ============================================================================

#[derive(Debug, Clone)]
pub struct RegexMatcher {
    position: Position,
    pattern: String,
    compiled: Regex,
}

fn compile(position: Position, pattern: &str) -> Result<RegexMatcher, ConfigError> {
    let anchored = match position {
        Position::Start => format!("^(?:{})", pattern),
        Position::End => format!("(?:{})$", pattern),
        Position::Anywhere => pattern.to_string(),
        Position::Whole => format!("^(?:{})$", pattern),
    };
    let compiled = Regex::new(&anchored).map_err(|source| {
        warn!("rejecting regex matcher for {:?}: {}", pattern, source);
        ConfigError::Regex {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    Ok(RegexMatcher {
        position,
        pattern: pattern.to_string(),
        compiled,
    })
}

pub fn start_with_regex(pattern: &str) -> Result<RegexMatcher, ConfigError> {
    compile(Position::Start, pattern)
}

pub fn end_with_regex(pattern: &str) -> Result<RegexMatcher, ConfigError> {
    compile(Position::End, pattern)
}

pub fn include_regex(pattern: &str) -> Result<RegexMatcher, ConfigError> {
    compile(Position::Anywhere, pattern)
}

pub fn fully_match_regex(pattern: &str) -> Result<RegexMatcher, ConfigError> {
    compile(Position::Whole, pattern)
}

impl<T: AsRef<str> + Debug + ?Sized> Matcher<T> for RegexMatcher {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        let (failure, negated) = match self.position {
            Position::Start => (
                "{0} did not start with a substring that matched the regular expression {1}",
                "{0} started with a substring that matched the regular expression {1}",
            ),
            Position::End => (
                "{0} did not end with a substring that matched the regular expression {1}",
                "{0} ended with a substring that matched the regular expression {1}",
            ),
            Position::Anywhere => (
                "{0} did not include substring that matched regex {1}",
                "{0} included substring that matched regex {1}",
            ),
            Position::Whole => (
                "{0} did not fully match the regular expression {1}",
                "{0} fully matched the regular expression {1}",
            ),
        };
        MatchResult::new(
            self.compiled.is_match(left.as_ref()),
            failure,
            negated,
            vec![prettifier.render(&left), prettifier.render(&self.pattern)],
        )
    }
}
