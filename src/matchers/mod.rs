// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matchers: reusable, composable checks on a left-hand value.
//!
//! A matcher is a small value built by a word (`equal(3)`, `include("x")`,
//! `contain().one_of([1, 2])?`). Applying it to a value produces a
//! [`MatchResult`] with the outcome and both possible sentences.
//!
//! # Layout
//!
//! | Module    | Words                                                  |
//! |-----------|--------------------------------------------------------|
//! | `basic`   | `equal`, `be_empty`, `have_length`, ordering, `Option`/`Result` |
//! | `string`  | `start_with`, `end_with`, `include`, regex variants    |
//! | `contain` | `contain()` and everything that hangs off it           |
//!
//! # Combining
//!
//! ```
//! use affirm::{be_gt, be_lt, expect, not, MatcherExt};
//!
//! expect(&5).should(be_gt(1).and(be_lt(10)));
//! expect(&5).should(not(be_gt(7)).or(be_lt(0)));
//! ```

mod basic;
mod contain;
mod string;

pub use basic::{
    be_empty, be_err, be_ge, be_gt, be_le, be_lt, be_none, be_ok, be_some, equal, have_length,
    have_size, satisfy, BeEmpty, Compare, Equal, HaveLength, OptionMatcher, ResultMatcher, Satisfy,
};
pub use contain::{
    contain, ContainElement, ContainEntry, ContainKey, ContainList, ContainSequence, ContainValue,
    ContainWord, ListWord, SequenceWord,
};
pub use string::{
    end_with, end_with_regex, fully_match_regex, include, include_regex, start_with,
    start_with_regex, RegexMatcher, StringMatcher,
};

use crate::prettify::Prettifier;
use crate::result::MatchResult;

/// A check that can be applied to a `T`.
pub trait Matcher<T: ?Sized> {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult;
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        (**self).apply(left, prettifier)
    }
}

// ============================================================================
// COMBINATORS
// ============================================================================

/// Both matchers must hold.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

/// Either matcher may hold.
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

/// The matcher must not hold.
#[derive(Debug, Clone)]
pub struct Not<M>(M);

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for And<A, B> {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        self.0
            .apply(left, prettifier)
            .and(|| self.1.apply(left, prettifier))
    }
}

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for Or<A, B> {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        self.0
            .apply(left, prettifier)
            .or(|| self.1.apply(left, prettifier))
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    fn apply(&self, left: &T, prettifier: &Prettifier) -> MatchResult {
        self.0.apply(left, prettifier).negated()
    }
}

/// Invert a matcher.
pub fn not<M>(matcher: M) -> Not<M> {
    Not(matcher)
}

/// `and` / `or` on any matcher.
pub trait MatcherExt: Sized {
    fn and<B>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    fn or<B>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }
}

impl<M> MatcherExt for M {}
