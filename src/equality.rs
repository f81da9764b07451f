// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pluggable equality for matchers.
//!
//! Matchers compare with [`DefaultEquality`] (plain `PartialEq`) unless told
//! otherwise with `.using(...)`. The trait is generic over both sides, so a
//! matcher holding `&str` arguments can be applied to a `Vec<String>`.
//!
//! ```
//! use affirm::{contain, expect, CaseInsensitive};
//!
//! let langs = vec!["Rust", "Lean"];
//! expect(&langs).should(contain().element("rust").using(CaseInsensitive));
//! ```

/// Decides whether a left-hand element equals a right-hand argument.
pub trait Equality<A: ?Sized, B: ?Sized> {
    fn are_equal(&self, left: &A, right: &B) -> bool;
}

/// `PartialEq`, across types where an impl exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<A, B> Equality<A, B> for DefaultEquality
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    fn are_equal(&self, left: &A, right: &B) -> bool {
        left == right
    }
}

/// String equality ignoring case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<A, B> Equality<A, B> for CaseInsensitive
where
    A: AsRef<str> + ?Sized,
    B: AsRef<str> + ?Sized,
{
    fn are_equal(&self, left: &A, right: &B) -> bool {
        left.as_ref().to_lowercase() == right.as_ref().to_lowercase()
    }
}

/// String equality ignoring leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trimmed;

impl<A, B> Equality<A, B> for Trimmed
where
    A: AsRef<str> + ?Sized,
    B: AsRef<str> + ?Sized,
{
    fn are_equal(&self, left: &A, right: &B) -> bool {
        left.as_ref().trim() == right.as_ref().trim()
    }
}

/// Equality decided by a closure. Build one with [`decided_by`].
#[derive(Debug, Clone, Copy)]
pub struct Decided<F>(F);

impl<A, B, F> Equality<A, B> for Decided<F>
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A, &B) -> bool,
{
    fn are_equal(&self, left: &A, right: &B) -> bool {
        (self.0)(left, right)
    }
}

/// Equality decided by `f`.
///
/// ```
/// use affirm::{decided_by, Equality};
///
/// let within_one = decided_by(|a: &i32, b: &i32| (a - b).abs() <= 1);
/// assert!(within_one.are_equal(&3, &4));
/// assert!(!within_one.are_equal(&3, &5));
/// ```
pub fn decided_by<A, B, F>(f: F) -> Decided<F>
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A, &B) -> bool,
{
    Decided(f)
}
