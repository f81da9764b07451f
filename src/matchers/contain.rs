// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `contain()` and the words that hang off it.
//!
//! ```
//! use affirm::{contain, expect};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), affirm::ConfigError> {
//! let xs = vec![1, 2, 3];
//! expect(&xs).should(contain().element(2));
//! expect(&xs).should(contain().one_of([3, 7, 9])?);
//! expect(&xs).should(contain().in_order([1, 3])?);
//!
//! let ages = HashMap::from([("ann", 31)]);
//! expect(&ages).should(contain().key("ann"));
//! # Ok(())
//! # }
//! ```
//!
//! # Word rules
//!
//! Argument lists are checked when the matcher is built. A word that needs
//! distinct arguments rejects repeats (compared with `PartialEq`), and a word
//! with a minimum arity rejects short lists.
//!
//! | Word                            | Min | Distinct | Holds when (n = listed values present in left)   |
//! |---------------------------------|-----|----------|--------------------------------------------------|
//! | `one_of` / `one_element_of`     | 2/0 | yes      | n == 1                                           |
//! | `at_least_one_of` / `..._element_of` | 2/0 | yes | n >= 1                                           |
//! | `at_most_one_of` / `..._element_of`  | 2/0 | yes | n <= 1                                           |
//! | `none_of` / `no_element_of`     | 2/0 | yes      | n == 0                                           |
//! | `all_of` / `all_elements_of`    | 2/0 | yes      | every listed value present                       |
//! | `only`                          | 1   | yes      | every listed value present, nothing else in left |
//! | `the_same_elements_as`          | 0   | no       | equal as multisets                               |
//! | `in_order` / `in_order_elements_of` | 2/0 | yes  | listed values appear as a subsequence            |
//! | `in_order_only`                 | 2   | yes      | left is the listed values in order, repeats allowed |
//! | `the_same_elements_in_order_as` | 0   | no       | element-wise equal                               |
//!
//! The ordered words need a [`Sequencing`] left-hand value.

use super::Matcher;
use crate::container::{Aggregating, Mapping, Sequencing};
use crate::contracts::check_distinct_args;
use crate::equality::{DefaultEquality, Equality};
use crate::error::ConfigError;
use crate::prettify::Prettifier;
use crate::result::MatchResult;
use log::warn;
use std::fmt::Debug;

/// Start a `contain` sentence.
pub fn contain() -> ContainWord {
    ContainWord
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContainWord;

// ============================================================================
// WORD TABLES
// ============================================================================

/// How a list word validates its arguments and phrases its result.
struct Rules {
    name: &'static str,
    min: usize,
    distinct: bool,
    /// Render the arguments as `[a, b]` rather than `(a, b)` in the template.
    bracketed: bool,
    failure: &'static str,
    negated: &'static str,
}

/// Words that treat the left value as an unordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWord {
    OneOf,
    OneElementOf,
    AtLeastOneOf,
    AtLeastOneElementOf,
    AtMostOneOf,
    AtMostOneElementOf,
    NoneOf,
    NoElementOf,
    AllOf,
    AllElementsOf,
    Only,
    TheSameElementsAs,
}

impl ListWord {
    fn rules(self) -> Rules {
        let (name, min, distinct, bracketed, failure, negated) = match self {
            ListWord::OneOf => (
                "one_of",
                2,
                true,
                false,
                "{0} did not contain one of ({1})",
                "{0} contained one of ({1})",
            ),
            ListWord::OneElementOf => (
                "one_element_of",
                0,
                true,
                true,
                "{0} did not contain one element of {1}",
                "{0} contained one element of {1}",
            ),
            ListWord::AtLeastOneOf => (
                "at_least_one_of",
                2,
                true,
                false,
                "{0} did not contain at least one of ({1})",
                "{0} contained at least one of ({1})",
            ),
            ListWord::AtLeastOneElementOf => (
                "at_least_one_element_of",
                0,
                true,
                true,
                "{0} did not contain at least one element of {1}",
                "{0} contained at least one element of {1}",
            ),
            ListWord::AtMostOneOf => (
                "at_most_one_of",
                2,
                true,
                false,
                "{0} did not contain at most one of ({1})",
                "{0} contained at most one of ({1})",
            ),
            ListWord::AtMostOneElementOf => (
                "at_most_one_element_of",
                0,
                true,
                true,
                "{0} did not contain at most one element of {1}",
                "{0} contained at most one element of {1}",
            ),
            ListWord::NoneOf => (
                "none_of",
                2,
                true,
                false,
                "{0} contained at least one of ({1})",
                "{0} did not contain at least one of ({1})",
            ),
            ListWord::NoElementOf => (
                "no_element_of",
                0,
                true,
                true,
                "{0} contained at least one element of {1}",
                "{0} did not contain at least one element of {1}",
            ),
            ListWord::AllOf => (
                "all_of",
                2,
                true,
                false,
                "{0} did not contain all of ({1})",
                "{0} contained all of ({1})",
            ),
            ListWord::AllElementsOf => (
                "all_elements_of",
                0,
                true,
                true,
                "{0} did not contain all elements of {1}",
                "{0} contained all elements of {1}",
            ),
            ListWord::Only => (
                "only",
                1,
                true,
                false,
                "{0} did not contain only ({1})",
                "{0} contained only ({1})",
            ),
            ListWord::TheSameElementsAs => (
                "the_same_elements_as",
                0,
                false,
                true,
                "{0} did not contain the same elements as {1}",
                "{0} contained the same elements as {1}",
            ),
        };
        Rules {
            name,
            min,
            distinct,
            bracketed,
            failure,
            negated,
        }
    }
}

/// Words that care about the iteration order of the left value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceWord {
    InOrder,
    InOrderElementsOf,
    InOrderOnly,
    TheSameElementsInOrderAs,
}

impl SequenceWord {
    fn rules(self) -> Rules {
        let (name, min, distinct, bracketed, failure, negated) = match self {
            SequenceWord::InOrder => (
                "in_order",
                2,
                true,
                false,
                "{0} did not contain all of ({1}) in order",
                "{0} contained all of ({1}) in order",
            ),
            SequenceWord::InOrderElementsOf => (
                "in_order_elements_of",
                0,
                true,
                true,
                "{0} did not contain all elements of {1} in order",
                "{0} contained all elements of {1} in order",
            ),
            SequenceWord::InOrderOnly => (
                "in_order_only",
                2,
                true,
                false,
                "{0} did not contain only ({1}) in order",
                "{0} contained only ({1}) in order",
            ),
            SequenceWord::TheSameElementsInOrderAs => (
                "the_same_elements_in_order_as",
                0,
                false,
                true,
                "{0} did not contain the same elements in the same (iterated) order as {1}",
                "{0} contained the same elements in the same (iterated) order as {1}",
            ),
        };
        Rules {
            name,
            min,
            distinct,
            bracketed,
            failure,
            negated,
        }
    }
}

fn validate<R: PartialEq>(rules: &Rules, items: Vec<R>) -> Result<Vec<R>, ConfigError> {
    let rejection = if rules.min == 1 && items.is_empty() {
        Some(ConfigError::Empty { word: rules.name })
    } else if items.len() < rules.min {
        Some(ConfigError::TooFew {
            word: rules.name,
            min: rules.min,
            actual: items.len(),
        })
    } else if rules.distinct && has_duplicate(&items) {
        Some(ConfigError::Duplicate { word: rules.name })
    } else {
        None
    };

    if let Some(err) = rejection {
        warn!("rejecting contain().{}: {}", rules.name, err);
        return Err(err);
    }
    if rules.distinct {
        check_distinct_args(&items, |a, b| a == b);
    }
    Ok(items)
}

fn has_duplicate<R: PartialEq>(items: &[R]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].iter().any(|b| a == b))
}

fn render_args<R: Debug>(rules: &Rules, items: &[R], prettifier: &Prettifier) -> String {
    if rules.bracketed {
        prettifier.render_bracketed(items)
    } else {
        prettifier.render_list(items)
    }
}

// ============================================================================
// BUILDERS
// ============================================================================

impl ContainWord {
    /// The left collection holds `element`.
    pub fn element<E>(self, element: E) -> ContainElement<E> {
        ContainElement {
            element,
            equality: DefaultEquality,
        }
    }

    /// The left mapping has `key`.
    pub fn key<K>(self, key: K) -> ContainKey<K> {
        ContainKey {
            key,
            equality: DefaultEquality,
        }
    }

    /// The left mapping has some key mapped to `value`.
    pub fn value<V>(self, value: V) -> ContainValue<V> {
        ContainValue {
            value,
            equality: DefaultEquality,
        }
    }

    /// The left mapping maps `key` to `value`.
    pub fn entry<K, V>(self, key: K, value: V) -> ContainEntry<K, V> {
        ContainEntry {
            key,
            value,
            equality: DefaultEquality,
        }
    }

    fn list<R: PartialEq>(
        word: ListWord,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        let items = validate(&word.rules(), items.into_iter().collect())?;
        Ok(ContainList {
            word,
            items,
            equality: DefaultEquality,
        })
    }

    fn sequence<R: PartialEq>(
        word: SequenceWord,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainSequence<R>, ConfigError> {
        let items = validate(&word.rules(), items.into_iter().collect())?;
        Ok(ContainSequence {
            word,
            items,
            equality: DefaultEquality,
        })
    }

    pub fn one_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::OneOf, items)
    }

    pub fn one_element_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::OneElementOf, items)
    }

    pub fn at_least_one_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::AtLeastOneOf, items)
    }

    pub fn at_least_one_element_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::AtLeastOneElementOf, items)
    }

    pub fn at_most_one_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::AtMostOneOf, items)
    }

    pub fn at_most_one_element_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::AtMostOneElementOf, items)
    }

    pub fn none_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::NoneOf, items)
    }

    pub fn no_element_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::NoElementOf, items)
    }

    pub fn all_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::AllOf, items)
    }

    pub fn all_elements_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::AllElementsOf, items)
    }

    pub fn only<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::Only, items)
    }

    /// Multiset equality. Repeated values are allowed and counted.
    pub fn the_same_elements_as<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainList<R>, ConfigError> {
        Self::list(ListWord::TheSameElementsAs, items)
    }

    pub fn in_order<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainSequence<R>, ConfigError> {
        Self::sequence(SequenceWord::InOrder, items)
    }

    pub fn in_order_elements_of<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainSequence<R>, ConfigError> {
        Self::sequence(SequenceWord::InOrderElementsOf, items)
    }

    pub fn in_order_only<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainSequence<R>, ConfigError> {
        Self::sequence(SequenceWord::InOrderOnly, items)
    }

    pub fn the_same_elements_in_order_as<R: PartialEq>(
        self,
        items: impl IntoIterator<Item = R>,
    ) -> Result<ContainSequence<R>, ConfigError> {
        Self::sequence(SequenceWord::TheSameElementsInOrderAs, items)
    }
}

// ============================================================================
// SINGLE ELEMENT / MAPPING MATCHERS
// ============================================================================

#[derive(Debug, Clone)]
pub struct ContainElement<E, Q = DefaultEquality> {
    element: E,
    equality: Q,
}

impl<E, Q> ContainElement<E, Q> {
    pub fn using<Q2>(self, equality: Q2) -> ContainElement<E, Q2> {
        ContainElement {
            element: self.element,
            equality,
        }
    }
}

impl<C, E, Q> Matcher<C> for ContainElement<E, Q>
where
    C: Aggregating + Debug + ?Sized,
    E: Debug,
    Q: Equality<C::Item, E>,
{
    fn apply(&self, left: &C, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            left.items()
                .any(|item| self.equality.are_equal(item, &self.element)),
            "{0} did not contain element {1}",
            "{0} contained element {1}",
            vec![prettifier.render(&left), prettifier.render(&self.element)],
        )
    }
}

#[derive(Debug, Clone)]
pub struct ContainKey<K, Q = DefaultEquality> {
    key: K,
    equality: Q,
}

impl<K, Q> ContainKey<K, Q> {
    pub fn using<Q2>(self, equality: Q2) -> ContainKey<K, Q2> {
        ContainKey {
            key: self.key,
            equality,
        }
    }
}

impl<M, K, Q> Matcher<M> for ContainKey<K, Q>
where
    M: Mapping + Debug + ?Sized,
    K: Debug,
    Q: Equality<M::Key, K>,
{
    fn apply(&self, left: &M, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            left.entries()
                .any(|(key, _)| self.equality.are_equal(key, &self.key)),
            "{0} did not contain key {1}",
            "{0} contained key {1}",
            vec![prettifier.render(&left), prettifier.render(&self.key)],
        )
    }
}

#[derive(Debug, Clone)]
pub struct ContainValue<V, Q = DefaultEquality> {
    value: V,
    equality: Q,
}

impl<V, Q> ContainValue<V, Q> {
    pub fn using<Q2>(self, equality: Q2) -> ContainValue<V, Q2> {
        ContainValue {
            value: self.value,
            equality,
        }
    }
}

impl<M, V, Q> Matcher<M> for ContainValue<V, Q>
where
    M: Mapping + Debug + ?Sized,
    V: Debug,
    Q: Equality<M::Value, V>,
{
    fn apply(&self, left: &M, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            left.entries()
                .any(|(_, value)| self.equality.are_equal(value, &self.value)),
            "{0} did not contain value {1}",
            "{0} contained value {1}",
            vec![prettifier.render(&left), prettifier.render(&self.value)],
        )
    }
}

/// Matches an entry. One equality compares both the key and the value.
#[derive(Debug, Clone)]
pub struct ContainEntry<K, V, Q = DefaultEquality> {
    key: K,
    value: V,
    equality: Q,
}

impl<K, V, Q> ContainEntry<K, V, Q> {
    pub fn using<Q2>(self, equality: Q2) -> ContainEntry<K, V, Q2> {
        ContainEntry {
            key: self.key,
            value: self.value,
            equality,
        }
    }
}

impl<M, K, V, Q> Matcher<M> for ContainEntry<K, V, Q>
where
    M: Mapping + Debug + ?Sized,
    K: Debug,
    V: Debug,
    Q: Equality<M::Key, K> + Equality<M::Value, V>,
{
    fn apply(&self, left: &M, prettifier: &Prettifier) -> MatchResult {
        MatchResult::new(
            left.entries().any(|(key, value)| {
                Equality::<M::Key, K>::are_equal(&self.equality, key, &self.key)
                    && Equality::<M::Value, V>::are_equal(&self.equality, value, &self.value)
            }),
            "{0} did not contain entry ({1}, {2})",
            "{0} contained entry ({1}, {2})",
            vec![
                prettifier.render(&left),
                prettifier.render(&self.key),
                prettifier.render(&self.value),
            ],
        )
    }
}

// ============================================================================
// LIST MATCHERS
// ============================================================================

#[derive(Debug, Clone)]
pub struct ContainList<R, Q = DefaultEquality> {
    word: ListWord,
    items: Vec<R>,
    equality: Q,
}

impl<R, Q> ContainList<R, Q> {
    pub fn using<Q2>(self, equality: Q2) -> ContainList<R, Q2> {
        ContainList {
            word: self.word,
            items: self.items,
            equality,
        }
    }

    pub fn word(&self) -> ListWord {
        self.word
    }
}

impl<C, R, Q> Matcher<C> for ContainList<R, Q>
where
    C: Aggregating + Debug + ?Sized,
    R: Debug,
    Q: Equality<C::Item, R>,
{
    fn apply(&self, left: &C, prettifier: &Prettifier) -> MatchResult {
        let eq = |l: &C::Item, r: &R| self.equality.are_equal(l, r);
        let present = || {
            self.items
                .iter()
                .filter(|&r| left.items().any(|l| eq(l, r)))
                .count()
        };
        let holds = match self.word {
            ListWord::OneOf | ListWord::OneElementOf => present() == 1,
            ListWord::AtLeastOneOf | ListWord::AtLeastOneElementOf => present() >= 1,
            ListWord::AtMostOneOf | ListWord::AtMostOneElementOf => present() <= 1,
            ListWord::NoneOf | ListWord::NoElementOf => present() == 0,
            ListWord::AllOf | ListWord::AllElementsOf => present() == self.items.len(),
            ListWord::Only => {
                present() == self.items.len()
                    && left.items().all(|l| self.items.iter().any(|r| eq(l, r)))
            }
            ListWord::TheSameElementsAs => same_multiset(left.items(), &self.items, eq),
        };
        let rules = self.word.rules();
        MatchResult::new(
            holds,
            rules.failure,
            rules.negated,
            vec![
                prettifier.render(&left),
                render_args(&rules, &self.items, prettifier),
            ],
        )
    }
}

/// Pair every left element with a distinct, equal right element, using up `right`.
///
/// This is a bipartite matching found by augmenting paths, so an equality that
/// is not transitive (a tolerance, say) still finds a pairing when one exists.
fn same_multiset<'a, L: 'a, R>(
    left: impl Iterator<Item = &'a L>,
    right: &[R],
    eq: impl Fn(&L, &R) -> bool,
) -> bool {
    let left: Vec<&L> = left.collect();
    if left.len() != right.len() {
        return false;
    }
    let edges: Vec<Vec<usize>> = left
        .iter()
        .map(|&l| (0..right.len()).filter(|&r| eq(l, &right[r])).collect())
        .collect();
    let mut owner: Vec<Option<usize>> = vec![None; right.len()];
    (0..left.len()).all(|l| {
        let mut seen = vec![false; right.len()];
        augment(l, &edges, &mut owner, &mut seen)
    })
}

/// Find a right partner for left element `l`, re-seating earlier owners if needed.
fn augment(
    l: usize,
    edges: &[Vec<usize>],
    owner: &mut [Option<usize>],
    seen: &mut [bool],
) -> bool {
    for &r in &edges[l] {
        if seen[r] {
            continue;
        }
        seen[r] = true;
        let free = match owner[r] {
            None => true,
            Some(other) => augment(other, edges, owner, seen),
        };
        if free {
            owner[r] = Some(l);
            return true;
        }
    }
    false
}

// ============================================================================
// SEQUENCE MATCHERS
// ============================================================================

#[derive(Debug, Clone)]
pub struct ContainSequence<R, Q = DefaultEquality> {
    word: SequenceWord,
    items: Vec<R>,
    equality: Q,
}

impl<R, Q> ContainSequence<R, Q> {
    pub fn using<Q2>(self, equality: Q2) -> ContainSequence<R, Q2> {
        ContainSequence {
            word: self.word,
            items: self.items,
            equality,
        }
    }

    pub fn word(&self) -> SequenceWord {
        self.word
    }
}

impl<C, R, Q> Matcher<C> for ContainSequence<R, Q>
where
    C: Sequencing + Debug + ?Sized,
    R: Debug,
    Q: Equality<C::Item, R>,
{
    fn apply(&self, left: &C, prettifier: &Prettifier) -> MatchResult {
        let eq = |l: &C::Item, r: &R| self.equality.are_equal(l, r);
        let holds = match self.word {
            SequenceWord::InOrder | SequenceWord::InOrderElementsOf => {
                is_subsequence(left.items(), &self.items, eq)
            }
            SequenceWord::InOrderOnly => is_in_order_only(left.items(), &self.items, eq),
            SequenceWord::TheSameElementsInOrderAs => {
                pairwise_equal(left.items(), &self.items, eq)
            }
        };
        let rules = self.word.rules();
        MatchResult::new(
            holds,
            rules.failure,
            rules.negated,
            vec![
                prettifier.render(&left),
                render_args(&rules, &self.items, prettifier),
            ],
        )
    }
}

/// `right` appears in `left` in order, other elements allowed in between.
fn is_subsequence<'a, L: 'a, R>(
    left: impl Iterator<Item = &'a L>,
    right: &[R],
    eq: impl Fn(&L, &R) -> bool,
) -> bool {
    let mut next = 0;
    for l in left {
        if next < right.len() && eq(l, &right[next]) {
            next += 1;
        }
    }
    next == right.len()
}

/// `left` is `right` in order, where each value may repeat consecutively.
///
/// Tracks every run the input so far could be in, since a custom equality may
/// let one element match both the current value and the next.
fn is_in_order_only<'a, L: 'a, R>(
    left: impl Iterator<Item = &'a L>,
    right: &[R],
    eq: impl Fn(&L, &R) -> bool,
) -> bool {
    // in_run[i]: some reading of the input so far ends inside the run of right[i]
    let mut in_run = vec![false; right.len()];
    let mut started = false;
    for l in left {
        let next: Vec<bool> = (0..right.len())
            .map(|i| {
                let reachable = if started {
                    in_run[i] || (i > 0 && in_run[i - 1])
                } else {
                    i == 0
                };
                reachable && eq(l, &right[i])
            })
            .collect();
        if !next.contains(&true) {
            return false;
        }
        in_run = next;
        started = true;
    }
    in_run.last().copied().unwrap_or(false)
}

fn pairwise_equal<'a, L: 'a, R>(
    mut left: impl Iterator<Item = &'a L>,
    right: &[R],
    eq: impl Fn(&L, &R) -> bool,
) -> bool {
    let mut right = right.iter();
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) if eq(l, r) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}
