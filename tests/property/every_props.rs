//! Properties of `Every` search and transforms.

use super::common::{
    every_strategy, naive_index_of_slice, naive_last_index_of_slice, small_int,
};
use affirm::Every;
use proptest::prelude::*;

// ============================================================================
// ELEMENT SEARCH
// ============================================================================

proptest! {
    /// Property: `index_of` agrees with `Iterator::position`.
    #[test]
    fn prop_index_of_matches_position(xs in every_strategy(), x in small_int()) {
        prop_assert_eq!(xs.index_of(&x), xs.iter().position(|y| *y == x));
        prop_assert_eq!(xs.contains(&x), xs.index_of(&x).is_some());
    }

    /// Property: a reported index holds the needle and nothing earlier does.
    #[test]
    fn prop_index_of_from_is_first_at_or_after(
        xs in every_strategy(),
        x in small_int(),
        from in 0usize..30,
    ) {
        match xs.index_of_from(&x, from) {
            Some(i) => {
                prop_assert!(i >= from);
                prop_assert_eq!(xs[i], x);
                prop_assert!(xs.as_slice()[from..i].iter().all(|y| *y != x));
            }
            None => {
                let tail = xs.as_slice().get(from..).unwrap_or(&[]);
                prop_assert!(!tail.contains(&x));
            }
        }
    }

    /// Property: `last_index_of_before` never reports a position past `end`.
    #[test]
    fn prop_last_index_of_before_bounded(
        xs in every_strategy(),
        x in small_int(),
        end in 0usize..30,
    ) {
        if let Some(i) = xs.last_index_of_before(&x, end) {
            prop_assert!(i <= end);
            prop_assert_eq!(xs[i], x);
        }
    }
}

// ============================================================================
// SLICE SEARCH
// ============================================================================

proptest! {
    /// Property: slice search agrees with a brute-force scan.
    #[test]
    fn prop_index_of_slice_matches_naive(
        xs in every_strategy(),
        needle in prop::collection::vec(small_int(), 0..4),
        from in 0usize..30,
    ) {
        prop_assert_eq!(
            xs.index_of_slice_from(&needle, from),
            naive_index_of_slice(xs.as_slice(), &needle, from)
        );
    }

    /// Property: last slice search agrees with a brute-force scan.
    #[test]
    fn prop_last_index_of_slice_matches_naive(
        xs in every_strategy(),
        needle in prop::collection::vec(small_int(), 0..4),
        end in 0usize..30,
    ) {
        prop_assert_eq!(
            xs.last_index_of_slice_before(&needle, end),
            naive_last_index_of_slice(xs.as_slice(), &needle, end)
        );
    }

    /// Property: every window of the sequence is found.
    #[test]
    fn prop_every_window_is_contained(xs in every_strategy(), start in 0usize..24, width in 0usize..4) {
        let items = xs.as_slice();
        prop_assume!(start + width <= items.len());
        let window = &items[start..start + width];
        prop_assert!(xs.contains_slice(window));
        prop_assert!(xs.index_of_slice(window).is_some_and(|i| i <= start));
    }
}

// ============================================================================
// NON-EMPTINESS
// ============================================================================

proptest! {
    /// Property: transforms never produce an empty sequence.
    #[test]
    fn prop_transforms_stay_non_empty(xs in every_strategy(), size in 1usize..6) {
        prop_assert!(xs.clone().distinct().len() >= 1);
        prop_assert_eq!(xs.map(|x| x + 1).len(), xs.len());
        prop_assert_eq!(xs.scan_left(0, |a, x| a + x).len(), xs.len() + 1);
        let groups = xs.grouped(size).expect("size is positive");
        prop_assert_eq!(groups.iter().map(Every::len).sum::<usize>(), xs.len());
        let windows = xs.sliding(size).expect("size is positive");
        prop_assert!(windows.iter().all(|w| w.len() == size.min(xs.len())));
    }

    /// Property: `from_vec` succeeds exactly for non-empty input.
    #[test]
    fn prop_from_vec_iff_non_empty(items in prop::collection::vec(small_int(), 0..5)) {
        prop_assert_eq!(Every::from_vec(items.clone()).is_ok(), !items.is_empty());
    }

    /// Property: `min_element`/`max_element` agree with the iterator versions.
    #[test]
    fn prop_min_max_agree(xs in every_strategy()) {
        prop_assert_eq!(Some(xs.min_element()), xs.iter().min());
        prop_assert_eq!(Some(xs.max_element()), xs.iter().max());
        prop_assert_eq!(xs.clone().reduce(|a, b| a + b), xs.iter().sum::<i32>());
    }
}
