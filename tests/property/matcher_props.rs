//! Properties of matcher words and result composition.

use super::common::{apply, count_present, distinct_args, every_strategy, small_int};
use affirm::{contain, equal, not, ConfigError, ContainList, ContainSequence, MatcherExt};
use proptest::prelude::*;

proptest! {
    /// Property: `not` flips the outcome and swaps the messages.
    #[test]
    fn prop_not_is_a_mirror(x in small_int(), y in small_int()) {
        let plain = apply(equal(y), &x);
        let flipped = apply(not(equal(y)), &x);
        prop_assert_eq!(plain.matches(), !flipped.matches());
        prop_assert_eq!(plain.failure_message(), flipped.negated_failure_message());
        prop_assert_eq!(plain.negated_failure_message(), flipped.failure_message());
    }

    /// Property: `and`/`or` follow boolean logic.
    #[test]
    fn prop_combinators_are_boolean(x in small_int(), a in small_int(), b in small_int()) {
        prop_assert_eq!(apply(equal(a).and(equal(b)), &x).matches(), x == a && x == b);
        prop_assert_eq!(apply(equal(a).or(equal(b)), &x).matches(), x == a || x == b);
    }

    /// Property: the counting words agree with a direct count.
    #[test]
    fn prop_counting_words_agree(xs in every_strategy(), args in distinct_args()) {
        let left = xs.to_vec();
        let n = count_present(&left, &args);
        let check = |m: affirm::ContainList<i32>| apply(m, &left).matches();

        prop_assert_eq!(check(contain().one_of(args.clone()).unwrap()), n == 1);
        prop_assert_eq!(check(contain().at_least_one_of(args.clone()).unwrap()), n >= 1);
        prop_assert_eq!(check(contain().at_most_one_of(args.clone()).unwrap()), n <= 1);
        prop_assert_eq!(check(contain().none_of(args.clone()).unwrap()), n == 0);
        prop_assert_eq!(check(contain().all_of(args.clone()).unwrap()), n == args.len());
    }

    /// Property: a sequence holds the same elements as any permutation of itself.
    #[test]
    fn prop_same_elements_under_reversal(xs in every_strategy()) {
        let left = xs.to_vec();
        let reversed: Vec<i32> = left.iter().rev().copied().collect();
        prop_assert!(apply(contain().the_same_elements_as(reversed).unwrap(), &left).matches());
        prop_assert!(apply(contain().the_same_elements_in_order_as(left.clone()).unwrap(), &left).matches());
    }

    /// Property: `in_order_only` holds when each listed value is repeated in place.
    #[test]
    fn prop_in_order_only_of_runs(
        runs in distinct_args(),
        repeats in prop::collection::vec(1usize..4, 5),
    ) {
        let left: Vec<i32> = runs
            .iter()
            .zip(&repeats)
            .flat_map(|(x, n)| std::iter::repeat(*x).take(*n))
            .collect();
        prop_assert!(apply(contain().in_order_only(runs.clone()).unwrap(), &left).matches());

        let mut swapped = runs;
        swapped.swap(0, 1);
        prop_assert!(!apply(contain().in_order_only(swapped).unwrap(), &left).matches());
    }

    /// Property: every word that needs distinct arguments rejects a repeat,
    /// and names itself in the error.
    #[test]
    fn prop_duplicates_rejected(mut args in distinct_args(), pick in 0usize..8) {
        let repeated = args[pick % args.len()];
        args.push(repeated);
        let c = contain();

        let list_words: Vec<(&str, Result<ContainList<i32>, ConfigError>)> = vec![
            ("one_of", c.one_of(args.clone())),
            ("one_element_of", c.one_element_of(args.clone())),
            ("at_least_one_of", c.at_least_one_of(args.clone())),
            ("at_least_one_element_of", c.at_least_one_element_of(args.clone())),
            ("at_most_one_of", c.at_most_one_of(args.clone())),
            ("at_most_one_element_of", c.at_most_one_element_of(args.clone())),
            ("none_of", c.none_of(args.clone())),
            ("no_element_of", c.no_element_of(args.clone())),
            ("all_of", c.all_of(args.clone())),
            ("all_elements_of", c.all_elements_of(args.clone())),
            ("only", c.only(args.clone())),
        ];
        for (name, built) in list_words {
            let rejected = matches!(built, Err(ConfigError::Duplicate { word }) if word == name);
            prop_assert!(rejected, "{} accepted {:?}", name, args);
        }

        let sequence_words: Vec<(&str, Result<ContainSequence<i32>, ConfigError>)> = vec![
            ("in_order", c.in_order(args.clone())),
            ("in_order_elements_of", c.in_order_elements_of(args.clone())),
            ("in_order_only", c.in_order_only(args.clone())),
        ];
        for (name, built) in sequence_words {
            let rejected = matches!(built, Err(ConfigError::Duplicate { word }) if word == name);
            prop_assert!(rejected, "{} accepted {:?}", name, args);
        }

        prop_assert!(c.the_same_elements_as(args.clone()).is_ok());
        prop_assert!(c.the_same_elements_in_order_as(args).is_ok());
    }
}
