//! Thin wrapper over `Vec<T>` with index-checked, non-panicking operations.
//!
//! Every lookup or removal that cannot be satisfied returns `None` instead of
//! panicking, and index-based insertion reports whether it happened.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DynamicArray<T> {
    items: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// True unless `0 <= index < len`.
    pub fn out_of_bounds(&self, index: isize) -> bool {
        index < 0 || index as usize >= self.items.len()
    }

    pub fn prepend(&mut self, elem: T) {
        self.items.insert(0, elem);
    }

    pub fn append(&mut self, elem: T) {
        self.items.push(elem);
    }

    /// Insert `elem` before the element currently at `index`. Only existing
    /// positions are accepted, so this never inserts into an empty array.
    pub fn insert_at_index(&mut self, elem: T, index: isize) -> bool {
        if self.out_of_bounds(index) {
            return false;
        }
        self.items.insert(index as usize, elem);
        true
    }

    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn remove_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    pub fn remove_at_index(&mut self, index: isize) -> Option<T> {
        if self.out_of_bounds(index) {
            return None;
        }
        Some(self.items.remove(index as usize))
    }

    pub fn value_at(&self, index: isize) -> Option<&T> {
        if self.out_of_bounds(index) {
            return None;
        }
        self.items.get(index as usize)
    }

    /// Apply `f` to every element. `f` also sees the index and the whole array.
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> U,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| f(item, i, self.items.as_slice()))
            .collect()
    }

    /// Accumulate from an explicit start value. Returns `init` when empty.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize, &[T]) -> A,
    {
        self.items
            .iter()
            .enumerate()
            .fold(init, |acc, (i, item)| f(acc, item, i, self.items.as_slice()))
    }

    /// Replace the contents with the items of `iter`.
    pub fn replace_with<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items = iter.into_iter().collect();
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Independent copy of the contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Append a copy of `other` to the end.
    pub fn merge(&mut self, other: &[T]) {
        self.items.extend_from_slice(other);
    }

    pub fn filter<F>(&self, mut keep: F) -> Vec<T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, item)| keep(*item, *i, self.items.as_slice()))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Accumulate with the first element as the start value, folding from
    /// index 1. `None` when empty.
    pub fn reduce<F>(&self, mut f: F) -> Option<T>
    where
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        let (first, rest) = self.items.split_first()?;
        Some(
            rest.iter()
                .enumerate()
                .fold(first.clone(), |acc, (i, item)| f(acc, item, i + 1, self.items.as_slice())),
        )
    }
}

impl<T: PartialEq> DynamicArray<T> {
    pub fn contains(&self, target: &T) -> bool {
        self.items.contains(target)
    }

    pub fn index_of(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|item| item == target)
    }
}

impl<T: Ord> DynamicArray<T> {
    pub fn sort(&mut self) {
        self.items.sort();
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
