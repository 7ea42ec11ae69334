//! Owned list containers: [`MutableList`], [`ImmutableList`] and [`Partition`].
//!
//! Both lists deref to a slice, so `len`, indexing and `iter` come for free,
//! and both implement [`Sequence`], so pipeline results can be queried again.
//! Converting between the two always copies; neither aliases the other.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::ordering::{compare_keys, Dir};
use crate::sequence::Sequence;

/// An owned, growable, ordered list.
///
/// This is the result type of most [`Sequence`] operations.
///
/// # Example
///
/// ```
/// use sieve::{MutableList, Sequence};
///
/// let mut names = MutableList::new().with("Fred").with("Mary");
/// names.add("Bill");
/// assert_eq!(names, ["Fred", "Mary", "Bill"]);
///
/// let short = names.select(|n| n.len() == 4);
/// assert_eq!(short.size(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutableList<T> {
    items: Vec<T>,
}

impl<T> MutableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        MutableList { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        MutableList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates a list holding `items` in iteration order.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    /// Appends an item and returns the list, for building by chaining.
    pub fn with(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    /// Appends all items and returns the list.
    pub fn with_all<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self
    }

    /// Appends an item.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends all items, in order.
    pub fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    /// Removes and returns the item at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes every item that satisfies `predicate` and returns how many
    /// were removed. Remaining items keep their order.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Stably sorts the list in place by `key`.
    pub fn sort_this_by<K, F>(&mut self, mut key: F, dir: Dir) -> &mut Self
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.items
            .sort_by(|a, b| compare_keys(&key(a), &key(b), dir));
        self
    }

    /// Reverses the list in place.
    pub fn reverse_this(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Converts into an [`ImmutableList`] without copying the elements.
    pub fn into_immutable(self) -> ImmutableList<T> {
        ImmutableList::from(self.items)
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> MutableList<&T> {
    /// Clones the referenced elements into a list of owned values.
    pub fn cloned(&self) -> MutableList<T> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

impl<T> Default for MutableList<T> {
    fn default() -> Self {
        MutableList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Deref for MutableList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Sequence for MutableList<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for MutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MutableList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for MutableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for MutableList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for MutableList<T> {
    fn from(items: Vec<T>) -> Self {
        MutableList { items }
    }
}

impl<T, const N: usize> From<[T; N]> for MutableList<T> {
    fn from(items: [T; N]) -> Self {
        MutableList {
            items: Vec::from(items),
        }
    }
}

impl<T> From<MutableList<T>> for Vec<T> {
    fn from(list: MutableList<T>) -> Self {
        list.items
    }
}

impl<T: PartialEq> PartialEq<ImmutableList<T>> for MutableList<T> {
    fn eq(&self, other: &ImmutableList<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for MutableList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for MutableList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for MutableList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

/// A list fixed at construction.
///
/// Storage is shared behind an [`Arc`], so cloning is cheap and the list can
/// be read from several threads at once. "Modifying" methods return a new
/// list and leave the receiver untouched.
///
/// # Example
///
/// ```
/// use sieve::{ImmutableList, Sequence};
///
/// let suppliers = ImmutableList::of(["Shedtastic", "SFD", "Doxins"]);
/// let more = suppliers.new_with("Gnomes 'R' Us");
///
/// assert_eq!(suppliers.size(), 3);
/// assert_eq!(more.size(), 4);
/// assert_eq!(suppliers.detect(|s| s.starts_with('D')), Some(&"Doxins"));
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct ImmutableList<T> {
    items: Arc<[T]>,
}

impl<T> ImmutableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        ImmutableList::from(Vec::new())
    }

    /// Creates a list holding `items` in iteration order.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    /// Returns a copy of the list with `item` appended.
    pub fn new_with(&self, item: T) -> Self
    where
        T: Clone,
    {
        self.items
            .iter()
            .cloned()
            .chain(std::iter::once(item))
            .collect()
    }

    /// Returns a copy of the list without the item at `index`.
    ///
    /// An out-of-range index returns an equal list.
    pub fn new_without_index(&self, index: usize) -> Self
    where
        T: Clone,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        ImmutableList {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        ImmutableList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Deref for ImmutableList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Sequence for ImmutableList<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(items: Vec<T>) -> Self {
        ImmutableList {
            items: Arc::from(items),
        }
    }
}

impl<T> From<MutableList<T>> for ImmutableList<T> {
    fn from(list: MutableList<T>) -> Self {
        list.into_immutable()
    }
}

impl<T: PartialEq> PartialEq<MutableList<T>> for ImmutableList<T> {
    fn eq(&self, other: &MutableList<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ImmutableList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.items == *other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ImmutableList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self.items == *other.as_slice()
    }
}

/// The result of [`Sequence::partition`]: matching and non-matching elements,
/// each in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// Elements that satisfied the predicate.
    pub selected: MutableList<T>,
    /// Elements that did not.
    pub rejected: MutableList<T>,
}

impl<T> Partition<T> {
    /// Consumes the partition, returning `(selected, rejected)`.
    pub fn into_parts(self) -> (MutableList<T>, MutableList<T>) {
        (self.selected, self.rejected)
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Partition {
            selected: MutableList::new(),
            rejected: MutableList::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutable_list_builders() {
        let list = MutableList::new().with(1).with(2).with_all([3, 4]);
        assert_eq!(list, [1, 2, 3, 4]);
        assert_eq!(MutableList::of(vec![1, 2]), [1, 2]);
        assert_eq!(MutableList::from([5, 6]), vec![5, 6]);
        assert!(MutableList::<u8>::default().is_empty());
    }

    #[test]
    fn mutable_list_mutation_reflects_in_queries() {
        let mut list = MutableList::of(["a", "b", "c"]);
        assert_eq!(list.size(), 3);

        list.add("d");
        list.add_all(["e"]);
        assert_eq!(list.size(), 5);
        assert_eq!(list.get_last(), Some(&"e"));

        assert_eq!(list.remove_at(0), Some("a"));
        assert_eq!(list.remove_at(10), None);
        assert_eq!(list.remove_if(|s| *s == "c" || *s == "e"), 2);
        assert_eq!(list, ["b", "d"]);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn mutable_list_sorting() {
        let mut list = MutableList::of([(2, 'x'), (1, 'y'), (2, 'z')]);
        list.sort_this_by(|p| p.0, Dir::Asc);
        assert_eq!(list, [(1, 'y'), (2, 'x'), (2, 'z')]);

        list.sort_this_by(|p| p.0, Dir::Desc).reverse_this();
        assert_eq!(list, [(1, 'y'), (2, 'z'), (2, 'x')]);
    }

    #[test]
    fn cloned_turns_references_into_values() {
        let source = vec![String::from("x"), String::from("y")];
        let refs = source.select(|s| s == "y");
        let owned: MutableList<String> = refs.cloned();
        assert_eq!(owned, [String::from("y")]);
    }

    #[test]
    fn immutable_list_is_a_snapshot() {
        let mut list = MutableList::of([1, 2, 3]);
        let snapshot = list.to_immutable();
        list.add(4);

        assert_eq!(snapshot, [1, 2, 3]);
        assert_eq!(list.size(), 4);
    }

    #[test]
    fn immutable_list_new_with_leaves_original() {
        let list = ImmutableList::of([1, 2]);
        let longer = list.new_with(3);
        let shorter = longer.new_without_index(0);

        assert_eq!(list, [1, 2]);
        assert_eq!(longer, [1, 2, 3]);
        assert_eq!(shorter, [2, 3]);
        assert_eq!(list.new_without_index(9), list);
    }

    #[test]
    fn immutable_list_clone_shares_storage() {
        let list = ImmutableList::of(vec![String::from("a")]);
        let copy = list.clone();
        assert!(std::ptr::eq(list.as_ptr(), copy.as_ptr()));
    }

    #[test]
    fn conversions_between_kinds_copy() {
        let immutable = ImmutableList::of([1, 2, 3]);
        let mut mutable = immutable.to_list();
        mutable.add(4);
        assert_eq!(immutable.size(), 3);
        assert_eq!(mutable, [1, 2, 3, 4]);

        assert_eq!(mutable.clone().into_immutable(), mutable);
        assert_eq!(ImmutableList::from(MutableList::of([7])), vec![7]);
    }

    #[test]
    fn debug_formats_as_list() {
        assert_eq!(format!("{:?}", MutableList::of([1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", ImmutableList::of(["a"])), "[\"a\"]");
    }

    #[test]
    fn partition_into_parts() {
        let partition = [1, 2, 3, 4].partition(|n| n % 2 == 0);
        let (even, odd) = partition.into_parts();
        assert_eq!(even, [&2, &4]);
        assert_eq!(odd, [&1, &3]);
    }
}
