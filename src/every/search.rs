// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Element and slice search on `Every`.
//!
//! Every search value is typed separately from the element type and gated by
//! `T: PartialEq<U>`. Searching an `Every<String>` for a `&str` works;
//! searching it for an `i32` does not compile. That bound is the whole safety
//! story: there is no runtime check that could be forgotten.
//!
//! # Index conventions
//!
//! | Operation                     | Range searched                       |
//! |-------------------------------|--------------------------------------|
//! | `index_of_from(x, from)`      | `from..len`                          |
//! | `last_index_of_before(x, end)`| `0..=min(end, len - 1)`              |
//! | `index_of_slice_from(s, from)`| starts in `from..=len - s.len()`     |
//! | `last_index_of_slice_before`  | starts in `0..=min(end, len - s.len())` |
//!
//! An empty needle slice is found at every position including `len`, so
//! `index_of_slice_from(&[], from)` is `Some(from)` whenever `from <= len`.

use super::Every;
use crate::contracts::check_match_at;

impl<T> Every<T> {
    /// Whether any element equals `item`.
    pub fn contains<U: ?Sized>(&self, item: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.items.iter().any(|x| x == item)
    }

    /// Position of the first element equal to `item`.
    pub fn index_of<U: ?Sized>(&self, item: &U) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.index_of_from(item, 0)
    }

    /// Position of the first element equal to `item` at or after `from`.
    pub fn index_of_from<U: ?Sized>(&self, item: &U, from: usize) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        let found = self
            .items
            .get(from..)?
            .iter()
            .position(|x| x == item)
            .map(|i| i + from);
        if let Some(i) = found {
            check_match_at(self.items.len(), i, 1);
        }
        found
    }

    /// Position of the last element equal to `item`.
    pub fn last_index_of<U: ?Sized>(&self, item: &U) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.items.iter().rposition(|x| x == item)
    }

    /// Position of the last element equal to `item` at or before `end`.
    pub fn last_index_of_before<U: ?Sized>(&self, item: &U, end: usize) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        let end = end.min(self.items.len() - 1);
        self.items[..=end].iter().rposition(|x| x == item)
    }

    /// Whether `slice` occurs as a contiguous run.
    pub fn contains_slice<U>(&self, slice: &[U]) -> bool
    where
        T: PartialEq<U>,
    {
        self.index_of_slice(slice).is_some()
    }

    /// Start of the first occurrence of `slice`.
    pub fn index_of_slice<U>(&self, slice: &[U]) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.index_of_slice_from(slice, 0)
    }

    /// Start of the first occurrence of `slice` beginning at or after `from`.
    pub fn index_of_slice_from<U>(&self, slice: &[U], from: usize) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        let items = self.items.as_slice();
        if from > items.len() {
            return None;
        }
        if slice.is_empty() {
            return Some(from);
        }
        let found = items[from..]
            .windows(slice.len())
            .position(|window| window == slice)
            .map(|i| i + from);
        if let Some(i) = found {
            check_match_at(items.len(), i, slice.len());
        }
        found
    }

    /// Start of the last occurrence of `slice`.
    pub fn last_index_of_slice<U>(&self, slice: &[U]) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        self.last_index_of_slice_before(slice, self.items.len())
    }

    /// Start of the last occurrence of `slice` beginning at or before `end`.
    pub fn last_index_of_slice_before<U>(&self, slice: &[U], end: usize) -> Option<usize>
    where
        T: PartialEq<U>,
    {
        let items = self.items.as_slice();
        if slice.len() > items.len() {
            return None;
        }
        let last_start = (items.len() - slice.len()).min(end);
        if slice.is_empty() {
            return Some(last_start);
        }
        (0..=last_start)
            .rev()
            .find(|&i| items[i..i + slice.len()] == *slice)
    }

    pub fn starts_with<U>(&self, prefix: &[U]) -> bool
    where
        T: PartialEq<U>,
    {
        prefix.len() <= self.items.len() && self.items[..prefix.len()] == *prefix
    }

    pub fn ends_with<U>(&self, suffix: &[U]) -> bool
    where
        T: PartialEq<U>,
    {
        let len = self.items.len();
        suffix.len() <= len && self.items[len - suffix.len()..] == *suffix
    }

    // ------------------------------------------------------------------------
    // Predicate searches
    // ------------------------------------------------------------------------

    pub fn index_where(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.index_where_from(predicate, 0)
    }

    pub fn index_where_from(
        &self,
        mut predicate: impl FnMut(&T) -> bool,
        from: usize,
    ) -> Option<usize> {
        self.items
            .get(from..)?
            .iter()
            .position(|x| predicate(x))
            .map(|i| i + from)
    }

    pub fn last_index_where(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().rposition(predicate)
    }

    pub fn last_index_where_before(
        &self,
        predicate: impl FnMut(&T) -> bool,
        end: usize,
    ) -> Option<usize> {
        let end = end.min(self.items.len() - 1);
        self.items[..=end].iter().rposition(predicate)
    }

    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|x| predicate(x))
    }

    pub fn exists(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(predicate)
    }

    pub fn forall(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().all(predicate)
    }

    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.items.iter().filter(|x| predicate(x)).count()
    }
}
