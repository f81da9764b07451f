// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A sequence that always has at least one element.
//!
//! `Every<T>` checks non-emptiness once, at construction, and never loses it:
//! there is no `remove`, no `clear`, no `filter`. Anything that could produce
//! an empty result either returns a plain `Vec` or an `Option`.
//!
//! Because emptiness is ruled out, the usual partial operations are total
//! here. `head()`, `last()`, `reduce()`, `min_element()` and `max_element()`
//! return values rather than `Option`s. (The plain `min`/`max` names belong to
//! `Ord`, which `Every` implements by comparing whole sequences.)
//!
//! # Example
//!
//! ```
//! use affirm::{every, Every};
//!
//! let xs = every![3, 1, 2];
//! assert_eq!(*xs.head(), 3);
//! assert_eq!(*xs.max_element(), 3);
//! assert_eq!(xs.index_of(&2), Some(2));
//!
//! assert!(Every::<i32>::from_vec(vec![]).is_err());
//! ```
//!
//! The search family lives in `search.rs`; serde support in `serde_impl.rs`.

mod search;
mod serde_impl;

use crate::contracts::check_every_non_empty;
use crate::error::EveryError;
use std::fmt;
use std::ops::Index;

/// A non-empty, immutable, ordered sequence.
///
/// # Invariants (enforced at construction)
/// - `len() >= 1`
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Every<T> {
    items: Vec<T>,
}

/// Build an [`Every`] from one or more elements.
///
/// The first element is mandatory, so `every![]` does not compile.
///
/// ```
/// use affirm::every;
///
/// let one = every!["a"];
/// let many = every![1, 2, 3];
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.len(), 3);
/// ```
#[macro_export]
macro_rules! every {
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::Every::new($head, [$($rest),*])
    };
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<T> Every<T> {
    /// A single-element sequence.
    pub fn one(head: T) -> Self {
        Self { items: vec![head] }
    }

    /// A sequence starting with `head` followed by everything in `rest`.
    pub fn new(head: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut items = vec![head];
        items.extend(rest);
        Self { items }
    }

    /// Take ownership of a vector, rejecting it if empty.
    pub fn from_vec(items: Vec<T>) -> Result<Self, EveryError> {
        if items.is_empty() {
            return Err(EveryError);
        }
        Ok(Self { items })
    }

    /// Collect an iterator, rejecting it if it yields nothing.
    pub fn try_from_iter(iter: impl IntoIterator<Item = T>) -> Result<Self, EveryError> {
        Self::from_vec(iter.into_iter().collect())
    }

    /// Wrap a vector already known to be non-empty.
    fn from_non_empty(items: Vec<T>) -> Self {
        check_every_non_empty(items.len());
        Self { items }
    }
}

impl<T> TryFrom<Vec<T>> for Every<T> {
    type Error = EveryError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items)
    }
}

impl<T: Clone> TryFrom<&[T]> for Every<T> {
    type Error = EveryError;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        Self::from_vec(items.to_vec())
    }
}

impl<T> From<Every<T>> for Vec<T> {
    fn from(every: Every<T>) -> Self {
        every.items
    }
}

// ============================================================================
// ACCESSORS
// ============================================================================

impl<T> Every<T> {
    /// The first element.
    pub fn head(&self) -> &T {
        // Non-empty by construction
        &self.items[0]
    }

    /// The last element.
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Everything after the head. May be empty.
    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    /// Everything before the last element. May be empty.
    pub fn init(&self) -> &[T] {
        &self.items[..self.items.len() - 1]
    }

    /// Number of elements, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this is a single-element sequence.
    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Index<usize> for Every<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for Every<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Every<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Every<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// TRANSFORMS (all preserve non-emptiness)
// ============================================================================

impl<T> Every<T> {
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Every<U> {
        Every::from_non_empty(self.items.iter().map(f).collect())
    }

    /// Map every element to a non-empty sequence and flatten the results.
    pub fn flat_map<U>(&self, mut f: impl FnMut(&T) -> Every<U>) -> Every<U> {
        let items = self.items.iter().flat_map(|item| f(item).items).collect();
        Every::from_non_empty(items)
    }

    /// Add an element at the end.
    pub fn append(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    /// Add an element at the front.
    pub fn prepend(mut self, item: T) -> Self {
        self.items.insert(0, item);
        self
    }

    /// Join two non-empty sequences.
    pub fn concat(mut self, other: Every<T>) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Extend with any (possibly empty) iterator; the result is still non-empty.
    pub fn concat_iter(mut self, other: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(other);
        self
    }

    pub fn reverse(mut self) -> Self {
        self.items.reverse();
        self
    }

    pub fn sorted(mut self) -> Self
    where
        T: Ord,
    {
        self.items.sort();
        self
    }

    pub fn sorted_by(mut self, compare: impl FnMut(&T, &T) -> std::cmp::Ordering) -> Self {
        self.items.sort_by(compare);
        self
    }

    pub fn sorted_by_key<K: Ord>(mut self, key: impl FnMut(&T) -> K) -> Self {
        self.items.sort_by_key(key);
        self
    }

    /// Drop repeated elements, keeping the first occurrence of each.
    pub fn distinct(self) -> Self
    where
        T: PartialEq,
    {
        let mut kept: Vec<T> = Vec::with_capacity(self.items.len());
        for item in self.items {
            if !kept.contains(&item) {
                kept.push(item);
            }
        }
        Self::from_non_empty(kept)
    }

    pub fn zip_with_index(self) -> Every<(T, usize)> {
        Every::from_non_empty(self.items.into_iter().zip(0..).collect())
    }

    /// Running accumulation, starting with `init`. The result has `len() + 1` elements.
    pub fn scan_left<B>(&self, init: B, mut f: impl FnMut(&B, &T) -> B) -> Every<B> {
        let mut out = Vec::with_capacity(self.items.len() + 1);
        out.push(init);
        for item in &self.items {
            let next = f(&out[out.len() - 1], item);
            out.push(next);
        }
        Every::from_non_empty(out)
    }

    /// Replace the element at `index`. `None` when the index is out of range.
    pub fn updated(mut self, index: usize, item: T) -> Option<Self> {
        let slot = self.items.get_mut(index)?;
        *slot = item;
        Some(self)
    }

    /// Split into consecutive chunks of `size` (the last one may be shorter).
    /// `None` when `size` is zero.
    pub fn grouped(&self, size: usize) -> Option<Every<Every<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return None;
        }
        let groups = self
            .items
            .chunks(size)
            .map(|chunk| Every::from_non_empty(chunk.to_vec()))
            .collect();
        Some(Every::from_non_empty(groups))
    }

    /// Overlapping windows of `size`. A `size` larger than the sequence yields
    /// the whole sequence as one window. `None` when `size` is zero.
    pub fn sliding(&self, size: usize) -> Option<Every<Every<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return None;
        }
        if size >= self.items.len() {
            return Some(Every::one(self.clone()));
        }
        let windows = self
            .items
            .windows(size)
            .map(|window| Every::from_non_empty(window.to_vec()))
            .collect();
        Some(Every::from_non_empty(windows))
    }
}

// ============================================================================
// TOTAL REDUCTIONS
// ============================================================================

impl<T> Every<T> {
    /// Combine all elements left to right. Never fails: there is always a first element.
    pub fn reduce(self, f: impl FnMut(T, T) -> T) -> T {
        let mut items = self.items;
        let rest = items.split_off(1);
        let first = items.swap_remove(0);
        rest.into_iter().fold(first, f)
    }

    pub fn fold<B>(&self, init: B, f: impl FnMut(B, &T) -> B) -> B {
        self.items.iter().fold(init, f)
    }

    /// The smallest element; the first one on ties.
    pub fn min_element(&self) -> &T
    where
        T: Ord,
    {
        self.tail()
            .iter()
            .fold(self.head(), |best, item| if item < best { item } else { best })
    }

    /// The largest element; the last one on ties.
    pub fn max_element(&self) -> &T
    where
        T: Ord,
    {
        self.tail()
            .iter()
            .fold(self.head(), |best, item| if item >= best { item } else { best })
    }

    pub fn min_by_key<K: Ord>(&self, mut key: impl FnMut(&T) -> K) -> &T {
        let mut best = self.head();
        let mut best_key = key(best);
        for item in self.tail() {
            let item_key = key(item);
            if item_key < best_key {
                best = item;
                best_key = item_key;
            }
        }
        best
    }

    pub fn max_by_key<K: Ord>(&self, mut key: impl FnMut(&T) -> K) -> &T {
        let mut best = self.head();
        let mut best_key = key(best);
        for item in self.tail() {
            let item_key = key(item);
            if item_key >= best_key {
                best = item;
                best_key = item_key;
            }
        }
        best
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

impl<T: fmt::Debug> fmt::Debug for Every<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// Renders as `Every(1, 2, 3)`.
impl<T: fmt::Debug> fmt::Display for Every<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Every(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", item)?;
        }
        f.write_str(")")
    }
}
