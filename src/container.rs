// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a left-hand value must be able to do for a matcher to apply.
//!
//! Each trait is a capability. A matcher states the capability it needs as a
//! bound, so applying it to a value that lacks the capability is a compile
//! error rather than a runtime surprise.
//!
//! | Trait         | Capability                    | Needed by                      |
//! |---------------|-------------------------------|--------------------------------|
//! | `Aggregating` | iterate elements              | `contain().one_of(..)` and co. |
//! | `Sequencing`  | iterate in a meaningful order | `contain().in_order(..)` and co. |
//! | `Mapping`     | iterate key/value pairs       | `contain().key(..)`, `value`, `entry` |
//! | `Length`      | report a size                 | `have_length`, `be_empty`      |
//!
//! `HashSet` is `Aggregating` but not `Sequencing`: asking whether a hash set
//! holds elements "in order" does not compile.

use crate::every::Every;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

// ============================================================================
// AGGREGATING
// ============================================================================

/// A container whose elements can be iterated.
pub trait Aggregating {
    type Item;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

/// A container whose iteration order is meaningful.
pub trait Sequencing: Aggregating {}

impl<T> Aggregating for Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Aggregating for [T] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Aggregating for [T; N] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Aggregating for VecDeque<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Aggregating for Every<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Aggregating for Option<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Aggregating for HashSet<T, S> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Aggregating for BTreeSet<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<C: Aggregating + ?Sized> Aggregating for &C {
    type Item = C::Item;

    fn items(&self) -> impl Iterator<Item = &C::Item> {
        (**self).items()
    }
}

impl<T> Sequencing for Vec<T> {}
impl<T> Sequencing for [T] {}
impl<T, const N: usize> Sequencing for [T; N] {}
impl<T> Sequencing for VecDeque<T> {}
impl<T> Sequencing for Every<T> {}
impl<T> Sequencing for BTreeSet<T> {}
impl<C: Sequencing + ?Sized> Sequencing for &C {}

// ============================================================================
// MAPPING
// ============================================================================

/// A container of key/value pairs.
pub trait Mapping {
    type Key;
    type Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<M: Mapping + ?Sized> Mapping for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn entries(&self) -> impl Iterator<Item = (&M::Key, &M::Value)> {
        (**self).entries()
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Anything with a size. Strings report their length in bytes, like `str::len`.
pub trait Length {
    fn length(&self) -> usize;
}

macro_rules! impl_length {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Length for $ty {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_length! {
    str => [],
    String => [],
    Vec<T> => [T],
    [T] => [T],
    VecDeque<T> => [T],
    Every<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    BTreeMap<K, V> => [K, V],
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Option<T> {
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<L: Length + ?Sized> Length for &L {
    fn length(&self) -> usize {
        (**self).length()
    }
}
