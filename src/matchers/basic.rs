// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality, size, ordering and `Option`/`Result` shape.

use super::Matcher;
use crate::container::Length;
use crate::equality::{DefaultEquality, Equality};
use crate::prettify::Prettifier;
use crate::result::MatchResult;
use std::fmt::Debug;

// ============================================================================
// EQUALITY
// ============================================================================

#[derive(Debug, Clone)]
pub struct Equal<V, Q = DefaultEquality> {
    expected: V,
    equality: Q,
}

/// The left value equals `expected`.
pub fn equal<V>(expected: V) -> Equal<V> {
    Equal {
        expected,
        equality: DefaultEquality,
    }
}

impl<V, Q> Equal<V, Q> {
    /// Compare with `equality` instead of `PartialEq`.
    pub fn using<Q2>(self, equality: Q2) -> Equal<V, Q2> {
        Equal {
            expected: self.expected,
            equality,
        }
    }
}

impl<T, V, Q> Matcher<T> for Equal<V, Q>
where
    T: Debug + ?Sized,
    V: Debug,
    Q: Equality<T, V>,
{
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            self.equality.are_equal(left, &self.expected),
            "{0} did not equal {1}",
            "{0} equaled {1}",
            vec![prettifier.render(&left), prettifier.render(&self.expected)],
        )
    }
}

// ============================================================================
// SIZE
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct BeEmpty;

/// The left value has length zero.
pub fn be_empty() -> BeEmpty {
    BeEmpty
}

impl<T: Length + Debug + ?Sized> Matcher<T> for BeEmpty {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            left.length() == 0,
            "{0} was not empty",
            "{0} was empty",
            vec![prettifier.render(&left)],
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HaveLength {
    expected: usize,
    noun: &'static str,
}

/// The left value has exactly `expected` elements (bytes, for strings).
pub fn have_length(expected: usize) -> HaveLength {
    HaveLength {
        expected,
        noun: "length",
    }
}

/// Same check as [`have_length`], phrased as "size".
pub fn have_size(expected: usize) -> HaveLength {
    HaveLength {
        expected,
        noun: "size",
    }
}

impl<T: Length + Debug + ?Sized> Matcher<T> for HaveLength {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        let actual = left.length();
        MatchResult::with_args(
            actual == self.expected,
            format!("{{0}} had {0} {{1}} instead of expected {0} {{2}}", self.noun),
            format!("{{0}} had {} {{1}}", self.noun),
            vec![
                prettifier.render(&left),
                actual.to_string(),
                self.expected.to_string(),
            ],
            vec![prettifier.render(&left), actual.to_string()],
        )
    }
}

// ============================================================================
// ORDERING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Relation {
    fn phrase(self) -> &'static str {
        match self {
            Relation::Less => "less than",
            Relation::LessOrEqual => "less than or equal to",
            Relation::Greater => "greater than",
            Relation::GreaterOrEqual => "greater than or equal to",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Compare<V> {
    relation: Relation,
    bound: V,
}

pub fn be_lt<V>(bound: V) -> Compare<V> {
    Compare {
        relation: Relation::Less,
        bound,
    }
}

pub fn be_le<V>(bound: V) -> Compare<V> {
    Compare {
        relation: Relation::LessOrEqual,
        bound,
    }
}

pub fn be_gt<V>(bound: V) -> Compare<V> {
    Compare {
        relation: Relation::Greater,
        bound,
    }
}

pub fn be_ge<V>(bound: V) -> Compare<V> {
    Compare {
        relation: Relation::GreaterOrEqual,
        bound,
    }
}

impl<T, V> Matcher<T> for Compare<V>
where
    T: PartialOrd<V> + Debug + ?Sized,
    V: Debug,
{
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        let holds = match self.relation {
            Relation::Less => *left < self.bound,
            Relation::LessOrEqual => *left <= self.bound,
            Relation::Greater => *left > self.bound,
            Relation::GreaterOrEqual => *left >= self.bound,
        };
        let phrase = self.relation.phrase();
        MatchResult::new(
            holds,
            format!("{{0}} was not {} {{1}}", phrase),
            format!("{{0}} was {} {{1}}", phrase),
            vec![prettifier.render(&left), prettifier.render(&self.bound)],
        )
    }
}

// ============================================================================
// OPTION / RESULT SHAPE
// ============================================================================

/// Checks which variant an `Option` holds.
#[derive(Debug, Clone, Copy)]
pub struct OptionMatcher {
    some: bool,
}

pub fn be_some() -> OptionMatcher {
    OptionMatcher { some: true }
}

pub fn be_none() -> OptionMatcher {
    OptionMatcher { some: false }
}

impl<X: Debug> Matcher<Option<X>> for OptionMatcher {
    fn apply(&self, left: &Option<X>, prettifier: &Prettifier) -> MatchResult {
        let (wanted, other) = if self.some { ("Some", "None") } else { ("None", "Some") };
        MatchResult::new(
            left.is_some() == self.some,
            format!("{{0}} was not {}", wanted),
            format!("{{0}} was {}, not {}", wanted, other),
            vec![prettifier.render(left)],
        )
    }
}

/// Checks which variant a `Result` holds.
#[derive(Debug, Clone, Copy)]
pub struct ResultMatcher {
    ok: bool,
}

pub fn be_ok() -> ResultMatcher {
    ResultMatcher { ok: true }
}

pub fn be_err() -> ResultMatcher {
    ResultMatcher { ok: false }
}

impl<X: Debug, E: Debug> Matcher<Result<X, E>> for ResultMatcher {
    fn apply(&self, left: &Result<X, E>, prettifier: &Prettifier) -> MatchResult {
        let (wanted, other) = if self.ok { ("Ok", "Err") } else { ("Err", "Ok") };
        MatchResult::new(
            left.is_ok() == self.ok,
            format!("{{0}} was not {}", wanted),
            format!("{{0}} was {}, not {}", wanted, other),
            vec![prettifier.render(left)],
        )
    }
}

// ============================================================================
// ARBITRARY PREDICATE
// ============================================================================

#[derive(Clone)]
pub struct Satisfy<F> {
    description: String,
    predicate: F,
}

/// The left value passes `predicate`. `description` completes the sentence
/// "{left} did not satisfy ...".
pub fn satisfy<F>(description: impl Into<String>, predicate: F) -> Satisfy<F> {
    Satisfy {
        description: description.into(),
        predicate,
    }
}

impl<T, F> Matcher<T> for Satisfy<F>
where
    T: Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            (self.predicate)(left),
            "{0} did not satisfy {1}",
            "{0} satisfied {1}",
            vec![prettifier.render(&left), self.description.clone()],
        )
    }
}
