// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the crate's invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. They are **zero-cost in release builds** (`debug_assert!`)
//! 2. They fail **at the point the invariant broke**, not where it was noticed
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant                                        |
//! |--------------------------|--------------------------------------------------|
//! | `check_every_non_empty`  | an `Every` always has `len() >= 1`               |
//! | `check_match_at`         | a reported match lies inside the sequence        |
//! | `check_distinct_args`    | a validated matcher argument list has no repeats |

// ============================================================================
// EVERY CONTRACTS
// ============================================================================

/// Check that a freshly built `Every` is non-empty.
///
/// # Panics (debug builds only)
/// Panics if `len == 0`.
#[inline]
pub fn check_every_non_empty(len: usize) {
    debug_assert!(len >= 1, "Contract violation: Every built with no elements");
}

/// Check that a match of `width` elements starting at `index` fits in `len`.
///
/// # Panics (debug builds only)
/// Panics if `index + width > len`.
#[inline]
pub fn check_match_at(len: usize, index: usize, width: usize) {
    debug_assert!(
        index + width <= len,
        "Contract violation: match at {} of width {} overruns length {}",
        index,
        width,
        len
    );
}

// ============================================================================
// MATCHER CONTRACTS
// ============================================================================

/// Check that no two arguments are equal under `eq`.
///
/// Matcher words validate this themselves and return a `ConfigError`; this
/// re-check guards the validated list that the matcher actually keeps.
#[inline]
pub fn check_distinct_args<R>(args: &[R], eq: impl Fn(&R, &R) -> bool) {
    if cfg!(debug_assertions) {
        for (i, a) in args.iter().enumerate() {
            for (j, b) in args.iter().enumerate().skip(i + 1) {
                debug_assert!(
                    !eq(a, b),
                    "Contract violation: matcher arguments {} and {} are equal",
                    i,
                    j
                );
            }
        }
    }
}
