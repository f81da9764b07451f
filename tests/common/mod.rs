//! Shared test utilities and fixtures.

#![allow(dead_code)]

use affirm::{every, Every};
use proptest::prelude::*;
use std::collections::BTreeMap;

// Re-export canonical test utilities from affirm::testing
pub use affirm::testing::{
    apply, count_present, failure_of, naive_index_of_slice, naive_last_index_of_slice,
    negated_failure_of,
};

// ============================================================================
// LOGGING
// ============================================================================

/// Route `log` output to the test harness. Set `RUST_LOG=affirm=trace` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// FIXTURES
// ============================================================================

/// A small sequence with a repeated run, used by the search tests.
pub fn digits() -> Every<i32> {
    every![1, 2, 3, 1, 2, 3, 4]
}

/// A sorted map of names to ages.
pub fn ages() -> BTreeMap<&'static str, i32> {
    [("ann", 31), ("bob", 27), ("cy", 31)].into_iter().collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small integers, so random sequences repeat values often.
pub fn small_int() -> impl Strategy<Value = i32> {
    0..6i32
}

/// A non-empty `Every` of small integers.
pub fn every_strategy() -> impl Strategy<Value = Every<i32>> {
    prop::collection::vec(small_int(), 1..24)
        .prop_map(|items| Every::from_vec(items).expect("strategy never yields an empty vec"))
}

/// Distinct small integers, at least two of them.
pub fn distinct_args() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(small_int(), 2..5).prop_map(|set| set.into_iter().collect())
}
