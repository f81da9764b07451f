//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It holds the reference implementations the property tests compare against
//! and shorthands for applying a matcher with default rendering.

#![doc(hidden)]

use crate::matchers::Matcher;
use crate::prettify::Prettifier;
use crate::result::MatchResult;

/// Apply `matcher` to `left` with an unlimited prettifier.
pub fn apply<T: ?Sized, M: Matcher<T>>(matcher: M, left: &T) -> MatchResult {
    matcher.apply(left, &Prettifier::default())
}

/// The failure message `should` would panic with.
pub fn failure_of<T: ?Sized, M: Matcher<T>>(matcher: M, left: &T) -> String {
    apply(matcher, left).failure_message()
}

/// The failure message `should_not` would panic with.
pub fn negated_failure_of<T: ?Sized, M: Matcher<T>>(matcher: M, left: &T) -> String {
    apply(matcher, left).negated_failure_message()
}

/// Brute-force first occurrence of `needle` starting at or after `from`.
pub fn naive_index_of_slice<T: PartialEq>(hay: &[T], needle: &[T], from: usize) -> Option<usize> {
    if from > hay.len() {
        return None;
    }
    (from..=hay.len()).find(|&i| {
        i + needle.len() <= hay.len() && (0..needle.len()).all(|j| hay[i + j] == needle[j])
    })
}

/// Brute-force last occurrence of `needle` starting at or before `end`.
pub fn naive_last_index_of_slice<T: PartialEq>(hay: &[T], needle: &[T], end: usize) -> Option<usize> {
    (0..=end.min(hay.len())).rev().find(|&i| {
        i + needle.len() <= hay.len() && (0..needle.len()).all(|j| hay[i + j] == needle[j])
    })
}

/// Number of distinct values from `listed` that appear in `left`.
pub fn count_present<T: PartialEq>(left: &[T], listed: &[T]) -> usize {
    listed.iter().filter(|x| left.contains(x)).count()
}

