//! Tests for the `contain()` family across container kinds.

use super::common::{ages, apply, digits, failure_of, negated_failure_of};
use affirm::{
    contain, every, CaseInsensitive, ConfigError, Equality, Matcher, Prettifier, Trimmed,
};
use std::collections::{BTreeSet, HashMap, VecDeque};

#[test]
fn test_element_on_every_container_kind() {
    assert!(apply(contain().element(3), &digits()).matches());
    assert!(apply(contain().element(3), &[1, 2, 3]).matches());
    assert!(apply(contain().element(3), &VecDeque::from(vec![3])).matches());
    assert!(apply(contain().element(3), &BTreeSet::from([3])).matches());
    assert!(apply(contain().element(3), &Some(3)).matches());
    assert!(!apply(contain().element(3), &None::<i32>).matches());
}

#[test]
fn test_mapping_words() {
    let ages = ages();
    assert!(apply(contain().key("bob"), &ages).matches());
    assert!(apply(contain().value(31), &ages).matches());
    assert!(apply(contain().entry("cy", 31), &ages).matches());
    assert_eq!(
        failure_of(contain().entry("cy", 30), &ages),
        "{\"ann\": 31, \"bob\": 27, \"cy\": 31} did not contain entry (\"cy\", 30)"
    );

    let scores: HashMap<String, u8> = HashMap::from([("Ann".to_string(), 1)]);
    assert!(apply(contain().key("ann").using(CaseInsensitive), &scores).matches());
    assert!(!apply(contain().key("ann"), &scores).matches());
}

/// Case-insensitive names, exact ages.
struct NameAndAge;

impl Equality<&str, &str> for NameAndAge {
    fn are_equal(&self, left: &&str, right: &&str) -> bool {
        CaseInsensitive.are_equal(left, right)
    }
}

impl Equality<i32, i32> for NameAndAge {
    fn are_equal(&self, left: &i32, right: &i32) -> bool {
        left == right
    }
}

#[test]
fn test_entry_with_custom_equality() {
    let ages = ages();
    assert!(!apply(contain().entry("ANN", 31), &ages).matches());
    assert!(apply(contain().entry("ANN", 31).using(NameAndAge), &ages).matches());
    assert!(!apply(contain().entry("ANN", 27).using(NameAndAge), &ages).matches());
    assert_eq!(
        negated_failure_of(contain().entry("Bob", 27).using(NameAndAge), &ages),
        "{\"ann\": 31, \"bob\": 27, \"cy\": 31} contained entry (\"Bob\", 27)"
    );
}

#[test]
fn test_of_words_render_parenthesized() {
    let xs = every![1, 2, 3];
    assert_eq!(
        failure_of(contain().all_of([1, 9]).unwrap(), &xs),
        "[1, 2, 3] did not contain all of (1, 9)"
    );
    assert_eq!(
        negated_failure_of(contain().at_least_one_of([1, 9]).unwrap(), &xs),
        "[1, 2, 3] contained at least one of (1, 9)"
    );
    assert_eq!(
        failure_of(contain().only([1, 2]).unwrap(), &xs),
        "[1, 2, 3] did not contain only (1, 2)"
    );
}

#[test]
fn test_elements_of_words_render_bracketed() {
    let xs = vec!["a", "b"];
    assert_eq!(
        failure_of(contain().at_least_one_element_of(vec!["z"]).unwrap(), &xs),
        "[\"a\", \"b\"] did not contain at least one element of [\"z\"]"
    );
    assert_eq!(
        failure_of(contain().the_same_elements_as(vec!["a"]).unwrap(), &xs),
        "[\"a\", \"b\"] did not contain the same elements as [\"a\"]"
    );
    assert_eq!(
        failure_of(contain().the_same_elements_in_order_as(vec!["b", "a"]).unwrap(), &xs),
        "[\"a\", \"b\"] did not contain the same elements in the same (iterated) order as [\"b\", \"a\"]"
    );
}

#[test]
fn test_at_most_one_counts_present_values_only() {
    let xs = vec![1, 1, 1, 2];
    assert!(apply(contain().at_most_one_of([1, 7]).unwrap(), &xs).matches());
    assert!(!apply(contain().at_most_one_of([1, 2]).unwrap(), &xs).matches());
    assert!(apply(contain().at_most_one_element_of(Vec::<i32>::new()).unwrap(), &xs).matches());
}

#[test]
fn test_in_order_only_allows_consecutive_repeats() {
    let xs = vec!["a", "a", "b", "c", "c"];
    assert!(apply(contain().in_order_only(["a", "b", "c"]).unwrap(), &xs).matches());
    assert!(!apply(contain().in_order_only(["a", "c"]).unwrap(), &xs).matches());

    let back_again = vec!["a", "b", "a"];
    assert!(!apply(contain().in_order_only(["a", "b"]).unwrap(), &back_again).matches());
}

#[test]
fn test_in_order_elements_of_with_empty_list() {
    assert!(apply(contain().in_order_elements_of(Vec::<i32>::new()).unwrap(), &digits()).matches());
}

#[test]
fn test_normalized_equality() {
    let lines = vec!["  first ".to_string(), "second".to_string()];
    assert!(apply(
        contain().all_of(["first", "second "]).unwrap().using(Trimmed),
        &lines
    )
    .matches());
    assert!(!apply(
        contain()
            .the_same_elements_in_order_as(["FIRST  ", " Second"])
            .unwrap()
            .using(Trimmed),
        &lines
    )
    .matches());
}

#[test]
fn test_argument_validation() {
    assert!(matches!(
        contain().at_least_one_of(["x"]),
        Err(ConfigError::TooFew { min: 2, actual: 1, .. })
    ));
    assert!(matches!(
        contain().all_elements_of(["x", "x"]),
        Err(ConfigError::Duplicate { word: "all_elements_of" })
    ));
    assert!(matches!(
        contain().in_order(Vec::<u8>::new()),
        Err(ConfigError::TooFew { word: "in_order", .. })
    ));
    assert_eq!(
        contain().only(Vec::<u8>::new()).unwrap_err().to_string(),
        "only must not be empty"
    );
}

#[test]
fn test_long_argument_lists_are_cut() {
    let prettifier = Prettifier::default().with_max_items(2);
    let r = contain()
        .none_of([1, 2, 3, 4])
        .unwrap()
        .apply(&vec![4], &prettifier);
    assert_eq!(r.failure_message(), "[4] contained at least one of (1, 2, ...)");
}
