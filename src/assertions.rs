// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The assertion surface: `expect(&value).should(matcher)`.
//!
//! Two flavors:
//!
//! | Call                     | On failure                         |
//! |--------------------------|------------------------------------|
//! | `should` / `should_not`  | panics with the failure message    |
//! | `check` / `check_not`    | returns `Err(AssertionFailure)`    |
//!
//! `should` returns the subject again so assertions on one value chain:
//!
//! ```
//! use affirm::{be_gt, expect, have_length};
//!
//! let xs = vec![1, 2, 3];
//! expect(&xs).should(have_length(3)).should_not(have_length(0));
//! expect(&xs[0]).should(be_gt(0));
//! ```

use crate::error::AssertionFailure;
use crate::matchers::{be_empty, contain, equal, Matcher};
use crate::prettify::Prettifier;
use crate::result::MatchResult;
use crate::container::{Aggregating, Length};
use log::{debug, trace};
use std::fmt::Debug;

/// A value under test.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a, T: ?Sized> {
    left: &'a T,
    prettifier: Prettifier,
}

/// Start an assertion on `left`.
///
/// Messages are rendered with [`Prettifier::from_env`].
pub fn expect<T: ?Sized>(left: &T) -> Subject<'_, T> {
    Subject {
        left,
        prettifier: Prettifier::from_env(),
    }
}

impl<'a, T: ?Sized> Subject<'a, T> {
    /// Render messages with `prettifier` instead of the environment default.
    pub fn with_prettifier(mut self, prettifier: Prettifier) -> Self {
        self.prettifier = prettifier;
        self
    }

    pub fn value(&self) -> &'a T {
        self.left
    }

    /// Apply `matcher` without asserting anything.
    pub fn evaluate<M: Matcher<T>>(&self, matcher: M) -> MatchResult {
        let result = matcher.apply(self.left, &self.prettifier);
        trace!("evaluated matcher: matches={} ({})", result.matches(), result.message());
        result
    }

    /// `Ok` if `matcher` holds.
    pub fn check<M: Matcher<T>>(&self, matcher: M) -> Result<(), AssertionFailure> {
        let result = self.evaluate(matcher);
        if result.matches() {
            Ok(())
        } else {
            let message = result.failure_message();
            debug!("assertion failed: {}", message);
            Err(AssertionFailure::new(message))
        }
    }

    /// `Ok` if `matcher` does not hold.
    pub fn check_not<M: Matcher<T>>(&self, matcher: M) -> Result<(), AssertionFailure> {
        let result = self.evaluate(matcher);
        if result.matches() {
            let message = result.negated_failure_message();
            debug!("negated assertion failed: {}", message);
            Err(AssertionFailure::new(message))
        } else {
            Ok(())
        }
    }

    /// Panic with the failure message unless `matcher` holds.
    #[track_caller]
    pub fn should<M: Matcher<T>>(&self, matcher: M) -> &Self {
        if let Err(failure) = self.check(matcher) {
            panic!("{}", failure);
        }
        self
    }

    /// Panic with the negated failure message if `matcher` holds.
    #[track_caller]
    pub fn should_not<M: Matcher<T>>(&self, matcher: M) -> &Self {
        if let Err(failure) = self.check_not(matcher) {
            panic!("{}", failure);
        }
        self
    }

    #[track_caller]
    pub fn should_equal<V>(&self, expected: V) -> &Self
    where
        T: PartialEq<V> + Debug,
        V: Debug,
    {
        self.should(equal(expected))
    }

    #[track_caller]
    pub fn should_be_empty(&self) -> &Self
    where
        T: Length + Debug,
    {
        self.should(be_empty())
    }

    #[track_caller]
    pub fn should_contain<E>(&self, element: E) -> &Self
    where
        T: Aggregating + Debug,
        T::Item: PartialEq<E>,
        E: Debug,
    {
        self.should(contain().element(element))
    }
}

/// Assert that a value satisfies a matcher.
///
/// ```
/// use affirm::{assert_that, equal, include};
///
/// assert_that!(1 + 1, equal(2));
/// assert_that!("hello world", include("o w"));
/// assert_that!(3, not equal(4));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($left:expr, not $matcher:expr $(,)?) => {
        $crate::expect(&$left).should_not($matcher)
    };
    ($left:expr, $matcher:expr $(,)?) => {
        $crate::expect(&$left).should($matcher)
    };
}
