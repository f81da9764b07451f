// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The outcome of applying a matcher.
//!
//! A `MatchResult` carries both possible sentences, not just the one that
//! applies. `should` reports the failure message; `should_not` reports the
//! negated one; `and`/`or` stitch several results into one sentence.
//!
//! Messages are stored as templates with positional placeholders (`{0}`,
//! `{1}`, ...) plus already-rendered arguments, and filled in on demand.
//!
//! ```
//! use affirm::MatchResult;
//!
//! let r = MatchResult::new(
//!     false,
//!     "{0} did not equal {1}",
//!     "{0} equaled {1}",
//!     vec!["1".into(), "2".into()],
//! );
//! assert_eq!(r.failure_message(), "1 did not equal 2");
//! assert_eq!(r.negated().negated_failure_message(), "1 did not equal 2");
//! ```

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    matches: bool,
    failure_template: String,
    negated_failure_template: String,
    failure_args: Vec<String>,
    negated_failure_args: Vec<String>,
}

impl MatchResult {
    /// A result whose two messages share one argument list.
    pub fn new(
        matches: bool,
        failure_template: impl Into<String>,
        negated_failure_template: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            matches,
            failure_template: failure_template.into(),
            negated_failure_template: negated_failure_template.into(),
            negated_failure_args: args.clone(),
            failure_args: args,
        }
    }

    /// A result whose messages take different arguments.
    pub fn with_args(
        matches: bool,
        failure_template: impl Into<String>,
        negated_failure_template: impl Into<String>,
        failure_args: Vec<String>,
        negated_failure_args: Vec<String>,
    ) -> Self {
        Self {
            matches,
            failure_template: failure_template.into(),
            negated_failure_template: negated_failure_template.into(),
            failure_args,
            negated_failure_args,
        }
    }

    pub fn matches(&self) -> bool {
        self.matches
    }

    pub fn failure_template(&self) -> &str {
        &self.failure_template
    }

    pub fn negated_failure_template(&self) -> &str {
        &self.negated_failure_template
    }

    pub fn failure_args(&self) -> &[String] {
        &self.failure_args
    }

    /// The sentence explaining why the match did not hold.
    pub fn failure_message(&self) -> String {
        fill(&self.failure_template, &self.failure_args)
    }

    /// The sentence explaining why the match held (used by `should_not`).
    pub fn negated_failure_message(&self) -> String {
        fill(&self.negated_failure_template, &self.negated_failure_args)
    }

    /// The message matching the current outcome: the failure message if the
    /// match did not hold, the negated one otherwise.
    pub fn message(&self) -> String {
        if self.matches {
            self.negated_failure_message()
        } else {
            self.failure_message()
        }
    }

    /// Flip the outcome and swap the two sentences.
    pub fn negated(self) -> Self {
        Self {
            matches: !self.matches,
            failure_template: self.negated_failure_template,
            negated_failure_template: self.failure_template,
            failure_args: self.negated_failure_args,
            negated_failure_args: self.failure_args,
        }
    }

    /// Both must hold. Short-circuits on the left failure.
    ///
    /// | left | right | failure message                  |
    /// |------|-------|----------------------------------|
    /// | fail | -     | left's failure                   |
    /// | ok   | fail  | `{left negated}, but {right failure}` |
    /// | ok   | ok    | (negated) `{left negated}, and {right negated}` |
    pub fn and(self, right: impl FnOnce() -> MatchResult) -> Self {
        if !self.matches {
            return self;
        }
        let right = right();
        let left_negated = self.negated_failure_message();
        Self::with_args(
            right.matches,
            "{0}, but {1}",
            "{0}, and {1}",
            vec![left_negated.clone(), right.failure_message()],
            vec![left_negated, right.negated_failure_message()],
        )
    }

    /// Either may hold. Short-circuits on the left success.
    ///
    /// | left | right | failure message                     |
    /// |------|-------|-------------------------------------|
    /// | ok   | -     | (negated) left's negated            |
    /// | fail | ok    | (negated) `{left failure}, but {right negated}` |
    /// | fail | fail  | `{left failure}, and {right failure}` |
    pub fn or(self, right: impl FnOnce() -> MatchResult) -> Self {
        if self.matches {
            return self;
        }
        let right = right();
        let left_failure = self.failure_message();
        Self::with_args(
            right.matches,
            "{0}, and {1}",
            "{0}, but {1}",
            vec![left_failure.clone(), right.failure_message()],
            vec![left_failure, right.negated_failure_message()],
        )
    }
}

/// Substitute `{n}` placeholders. Placeholders without an argument are left as-is.
fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
