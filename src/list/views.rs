//! Derived read-only surface over the live sequence.
//!
//! Nothing here touches temporal state; every operation is a plain view over
//! the live slots.

use super::ChronoList;
use crate::error::{ChronoListError, Result};
use crate::slot::Slot;
use std::ops::Index;

impl<T> ChronoList<T> {
    /// Iterator over the live elements, in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.live.iter(),
        }
    }
}

impl<T: PartialEq> ChronoList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Index of the first live element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Index of the last live element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|v| v == value)
    }

    /// Whether every value in `values` appears among the live elements.
    pub fn contains_all<'a>(&self, values: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        values.into_iter().all(|v| self.contains(v))
    }
}

impl<T: Clone> ChronoList<T> {
    /// The live elements as a plain vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copy of the contiguous live range `[start, end)`.
    ///
    /// Fails with `IndexOutOfRange` unless `start <= end <= len`.
    pub fn sublist(&self, start: usize, end: usize) -> Result<Vec<T>> {
        let len = self.len();
        if start > end || end > len {
            let index = if start > end { start } else { end };
            return Err(ChronoListError::IndexOutOfRange { index, len });
        }
        Ok(self.live[start..end]
            .iter()
            .map(|slot| slot.value().clone())
            .collect())
    }
}

/// Iterator over a list's live elements.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(Slot::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Slot::value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ChronoList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for ChronoList<T> {
    type Output = T;

    /// Panics on an out-of-range index, per indexing convention; use
    /// [`ChronoList::get`] for a fallible lookup.
    fn index(&self, index: usize) -> &T {
        self.live[index].value()
    }
}

impl<T> Default for ChronoList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ChronoList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl<T> Extend<T> for ChronoList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Equality compares live contents only; history is ignored.
impl<T: PartialEq> PartialEq for ChronoList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
