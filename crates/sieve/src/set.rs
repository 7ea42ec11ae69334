//! Owned set containers: [`MutableSet`] and [`ImmutableSet`].
//!
//! Sets hold distinct values by `Eq`/`Hash` equality. Iteration order is
//! unspecified; use [`MutableSet::to_sorted_list`] when a stable order is
//! needed.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::list::MutableList;

/// An owned, growable set of distinct values.
///
/// # Example
///
/// ```
/// use sieve::{MutableSet, Sequence};
///
/// let items = ["cup", "bowl", "cup", "saucer", "bowl"];
/// let distinct = items.to_set();
///
/// assert_eq!(distinct.size(), 3);
/// assert_eq!(distinct, MutableSet::of(["saucer", "cup", "bowl"]));
/// ```
#[derive(Clone)]
pub struct MutableSet<T> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> MutableSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        MutableSet {
            items: HashSet::new(),
        }
    }

    /// Creates a set from `items`, dropping duplicates.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    /// Adds an item and returns the set, for building by chaining.
    pub fn with(mut self, item: T) -> Self {
        self.items.insert(item);
        self
    }

    /// Adds an item. Returns `true` if it was not already present.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes an item. Returns `true` if it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    /// Returns `true` if the set contains `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns the number of distinct items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns some item of the set, or `None` if it is empty.
    ///
    /// Which item is returned is unspecified.
    pub fn get_first(&self) -> Option<&T> {
        self.items.iter().next()
    }

    /// Returns the items that satisfy `predicate`.
    pub fn select<F>(&self, mut predicate: F) -> MutableSet<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(*item)).collect()
    }

    /// Returns the items that do not satisfy `predicate`.
    pub fn reject<F>(&self, mut predicate: F) -> MutableSet<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.select(|item| !predicate(item))
    }

    /// Maps every item, collapsing results that compare equal.
    pub fn collect<'a, R, F>(&'a self, function: F) -> MutableSet<R>
    where
        R: Eq + Hash,
        F: FnMut(&'a T) -> R,
    {
        self.items.iter().map(function).collect()
    }

    /// Counts the items that satisfy `predicate`.
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(*item)).count()
    }

    /// Returns `true` if any item satisfies `predicate`.
    pub fn any_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Returns a new set holding the items of both sets.
    pub fn union(&self, other: &MutableSet<T>) -> MutableSet<T>
    where
        T: Clone,
    {
        self.items.union(&other.items).cloned().collect()
    }

    /// Copies the items into a list, in unspecified order.
    pub fn to_list(&self) -> MutableList<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Copies the items into a list sorted by their natural order.
    pub fn to_sorted_list(&self) -> MutableList<T>
    where
        T: Clone + Ord,
    {
        let mut sorted: Vec<T> = self.items.iter().cloned().collect();
        sorted.sort();
        MutableList::from(sorted)
    }

    /// Copies the items into an [`ImmutableSet`].
    pub fn to_immutable(&self) -> ImmutableSet<T>
    where
        T: Clone,
    {
        ImmutableSet {
            items: Arc::new(self.items.clone()),
        }
    }

    /// Converts into an [`ImmutableSet`] without copying the items.
    pub fn into_immutable(self) -> ImmutableSet<T> {
        ImmutableSet {
            items: Arc::new(self.items),
        }
    }
}

impl<T: Clone + Eq + Hash> MutableSet<&T> {
    /// Clones the referenced items into a set of owned values.
    pub fn cloned(&self) -> MutableSet<T> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

impl<T: Eq + Hash> Default for MutableSet<T> {
    fn default() -> Self {
        MutableSet::new()
    }
}

impl<T: Eq + Hash> PartialEq for MutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for MutableSet<T> {}

impl<T: Eq + Hash> PartialEq<ImmutableSet<T>> for MutableSet<T> {
    fn eq(&self, other: &ImmutableSet<T>) -> bool {
        self.items == *other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for MutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MutableSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for MutableSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for MutableSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MutableSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A set fixed at construction, cheap to clone and share across threads.
pub struct ImmutableSet<T> {
    items: Arc<HashSet<T>>,
}

impl<T: Eq + Hash> ImmutableSet<T> {
    /// Creates a set from `items`, dropping duplicates.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        MutableSet::of(items).into_immutable()
    }

    /// Returns `true` if the set contains `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Returns the number of distinct items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a copy of the set with `item` added.
    pub fn new_with(&self, item: T) -> Self
    where
        T: Clone,
    {
        let mut items = (*self.items).clone();
        items.insert(item);
        ImmutableSet {
            items: Arc::new(items),
        }
    }

    /// Copies the items into a [`MutableSet`].
    pub fn to_mutable(&self) -> MutableSet<T>
    where
        T: Clone,
    {
        MutableSet {
            items: (*self.items).clone(),
        }
    }
}

impl<T> Clone for ImmutableSet<T> {
    fn clone(&self) -> Self {
        ImmutableSet {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Eq + Hash> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for ImmutableSet<T> {}

impl<T: Eq + Hash> PartialEq<MutableSet<T>> for ImmutableSet<T> {
    fn eq(&self, other: &MutableSet<T>) -> bool {
        *self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableSet::of(iter)
    }
}

impl<T: Eq + Hash> From<MutableSet<T>> for ImmutableSet<T> {
    fn from(set: MutableSet<T>) -> Self {
        set.into_immutable()
    }
}
