//! The [`Sequence`] trait: eager, order-preserving operations over any slice.
//!
//! A `Sequence` is an ordered, finite, read-only view. Every slice is one,
//! so a domain collection (`Vec<Order>`, `[String; 3]`, `&[Supplier]`) can be
//! queried in place without copying. Owned containers ([`MutableList`],
//! [`ImmutableList`]) implement it too, which is what lets pipelines chain.
//!
//! All operations borrow their input, never mutate it, and return freshly
//! allocated results. Element-returning operations (`select`, `detect`,
//! `partition`, ...) hand back references into the input; call
//! [`MutableList::cloned`] for owned copies.

use std::hash::Hash;

use crate::error::{Result, SieveError};
use crate::list::{ImmutableList, MutableList, Partition};
use crate::ordering::{compare_keys, Dir};
use crate::primitive::{DoubleList, IntList, LongList};
use crate::set::MutableSet;

/// An ordered, finite, read-only sequence of elements.
///
/// Only [`as_slice`](Sequence::as_slice) must be implemented; every other
/// operation is provided.
///
/// # Example
///
/// ```
/// use sieve::Sequence;
///
/// struct Customer {
///     name: String,
///     city: String,
/// }
///
/// let customers = vec![
///     Customer { name: "Fred".into(), city: "London".into() },
///     Customer { name: "Mary".into(), city: "Liphook".into() },
///     Customer { name: "Bill".into(), city: "London".into() },
/// ];
///
/// let names = customers.collect(|c| c.name.as_str());
/// assert_eq!(names, ["Fred", "Mary", "Bill"]);
///
/// let londoners = customers.select_with(|c, city| c.city.eq_ignore_ascii_case(city), "london");
/// assert_eq!(londoners.len(), 2);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the elements as a slice, in sequence order.
    fn as_slice(&self) -> &[Self::Item];

    /// Returns the number of elements.
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the sequence has at least one element.
    fn not_empty(&self) -> bool {
        !self.as_slice().is_empty()
    }

    /// Returns the first element, or `None` for an empty sequence.
    fn get_first(&self) -> Option<&Self::Item> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` for an empty sequence.
    fn get_last(&self) -> Option<&Self::Item> {
        self.as_slice().last()
    }

    // ========================================================================
    // Mapping
    // ========================================================================

    /// Maps every element through `function`, preserving order and length.
    ///
    /// `output[i] == function(&input[i])` for every index. An empty input
    /// yields an empty list.
    fn collect<'a, R, F>(&'a self, function: F) -> MutableList<R>
    where
        F: FnMut(&'a Self::Item) -> R,
    {
        self.as_slice().iter().map(function).collect()
    }

    /// Like [`collect`](Sequence::collect), passing `parameter` to every call.
    fn collect_with<'a, P, R, F>(&'a self, mut function: F, parameter: P) -> MutableList<R>
    where
        F: FnMut(&'a Self::Item, &P) -> R,
    {
        self.as_slice()
            .iter()
            .map(|item| function(item, &parameter))
            .collect()
    }

    /// Maps the elements that satisfy `predicate`, in a single pass.
    ///
    /// Equivalent to `select(predicate)` followed by `collect(function)`.
    fn collect_if<'a, R, P, F>(&'a self, mut predicate: P, mut function: F) -> MutableList<R>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(&'a Self::Item) -> R,
    {
        self.as_slice()
            .iter()
            .filter_map(|item| {
                if predicate(item) {
                    Some(function(item))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Expands every element into zero or more values and concatenates the
    /// expansions in input order.
    fn flat_collect<'a, I, F>(&'a self, function: F) -> MutableList<I::Item>
    where
        F: FnMut(&'a Self::Item) -> I,
        I: IntoIterator,
    {
        self.as_slice().iter().flat_map(function).collect()
    }

    /// Maps every element to an `f64` without boxing the values.
    fn collect_double<F>(&self, function: F) -> DoubleList
    where
        F: FnMut(&Self::Item) -> f64,
    {
        self.as_slice().iter().map(function).collect()
    }

    /// Maps every element to an `i64` without boxing the values.
    fn collect_long<F>(&self, function: F) -> LongList
    where
        F: FnMut(&Self::Item) -> i64,
    {
        self.as_slice().iter().map(function).collect()
    }

    /// Maps every element to an `i32` without boxing the values.
    fn collect_int<F>(&self, function: F) -> IntList
    where
        F: FnMut(&Self::Item) -> i32,
    {
        self.as_slice().iter().map(function).collect()
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Returns the elements that satisfy `predicate`, in order, duplicates kept.
    fn select<F>(&self, mut predicate: F) -> MutableList<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|item| predicate(*item))
            .collect()
    }

    /// Like [`select`](Sequence::select) with a two-argument predicate that
    /// receives the same `parameter` for every element.
    fn select_with<P, F>(&self, mut predicate: F, parameter: P) -> MutableList<&Self::Item>
    where
        F: FnMut(&Self::Item, &P) -> bool,
    {
        self.select(|item| predicate(item, &parameter))
    }

    /// Returns the elements that do not satisfy `predicate`.
    fn reject<F>(&self, mut predicate: F) -> MutableList<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.select(|item| !predicate(item))
    }

    /// Like [`reject`](Sequence::reject) with a fixed `parameter`.
    fn reject_with<P, F>(&self, mut predicate: F, parameter: P) -> MutableList<&Self::Item>
    where
        F: FnMut(&Self::Item, &P) -> bool,
    {
        self.select(|item| !predicate(item, &parameter))
    }

    /// Splits the elements into those that satisfy `predicate` and those that
    /// do not. Both sides keep source order.
    fn partition<F>(&self, mut predicate: F) -> Partition<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut partition = Partition::default();
        for item in self.as_slice() {
            if predicate(item) {
                partition.selected.add(item);
            } else {
                partition.rejected.add(item);
            }
        }
        partition
    }

    // ========================================================================
    // Searching
    // ========================================================================

    /// Returns the first element that satisfies `predicate`.
    ///
    /// Stops at the first match; `predicate` is never called on later
    /// elements. Returns `None` when nothing matches.
    fn detect<F>(&self, mut predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.as_slice().iter().find(|item| predicate(*item))
    }

    /// Like [`detect`](Sequence::detect) with a fixed `parameter`.
    fn detect_with<P, F>(&self, mut predicate: F, parameter: P) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &P) -> bool,
    {
        self.detect(|item| predicate(item, &parameter))
    }

    /// Returns the index of the first element that satisfies `predicate`.
    fn detect_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.as_slice().iter().position(|item| predicate(item))
    }

    /// Like [`detect`](Sequence::detect), but reports a missing match as
    /// [`SieveError::NoMatch`].
    fn detect_required<F>(&self, predicate: F) -> Result<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.detect(predicate).ok_or(SieveError::NoMatch)
    }

    // ========================================================================
    // Counting and testing
    // ========================================================================

    /// Counts the elements that satisfy `predicate`.
    fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|item| predicate(*item))
            .count()
    }

    /// Like [`count`](Sequence::count) with a fixed `parameter`.
    fn count_with<P, F>(&self, mut predicate: F, parameter: P) -> usize
    where
        F: FnMut(&Self::Item, &P) -> bool,
    {
        self.count(|item| predicate(item, &parameter))
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Short-circuits; an empty sequence returns `false`.
    fn any_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.as_slice().iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Short-circuits; an empty sequence returns `true`.
    fn all_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.as_slice().iter().all(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`.
    fn none_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        !self.any_satisfy(predicate)
    }

    // ========================================================================
    // Folding
    // ========================================================================

    /// Folds the elements left to right, starting from `initial`.
    fn inject_into<A, F>(&self, initial: A, function: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.as_slice().iter().fold(initial, function)
    }

    /// Sums `function(element)` over the sequence, in order.
    fn sum_of_double<F>(&self, mut function: F) -> f64
    where
        F: FnMut(&Self::Item) -> f64,
    {
        self.inject_into(0.0, |sum, item| sum + function(item))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Copies the elements into a new [`MutableList`].
    fn to_list(&self) -> MutableList<Self::Item>
    where
        Self::Item: Clone,
    {
        self.as_slice().iter().cloned().collect()
    }

    /// Copies the elements into a new [`ImmutableList`] snapshot.
    fn to_immutable(&self) -> ImmutableList<Self::Item>
    where
        Self::Item: Clone,
    {
        self.as_slice().iter().cloned().collect()
    }

    /// Copies the distinct elements into a new [`MutableSet`].
    ///
    /// Iteration order of the result is unspecified.
    fn to_set(&self) -> MutableSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.as_slice().iter().cloned().collect()
    }

    /// Returns references to all elements, stably sorted by `key`.
    fn sorted_by<K, F>(&self, mut key: F, dir: Dir) -> MutableList<&Self::Item>
    where
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        let mut sorted: Vec<&Self::Item> = self.as_slice().iter().collect();
        sorted.sort_by(|a, b| compare_keys(&key(*a), &key(*b), dir));
        MutableList::from(sorted)
    }

    // ========================================================================
    // Fallible variants
    // ========================================================================

    /// Like [`collect`](Sequence::collect) with a fallible function.
    ///
    /// The first failure stops the pass and is returned as
    /// [`SieveError::Function`] carrying the failing element's index.
    fn try_collect<'a, R, E, F>(&'a self, mut function: F) -> Result<MutableList<R>, E>
    where
        F: FnMut(&'a Self::Item) -> std::result::Result<R, E>,
    {
        let mut results = MutableList::with_capacity(self.size());
        for (index, item) in self.as_slice().iter().enumerate() {
            let value = function(item).map_err(|source| SieveError::function(index, source))?;
            results.add(value);
        }
        Ok(results)
    }

    /// Like [`collect_if`](Sequence::collect_if) with a fallible predicate
    /// and function.
    ///
    /// The function is only called for elements the predicate accepted. A
    /// failure from either stops the pass at that element.
    fn try_collect_if<'a, R, E, P, F>(
        &'a self,
        mut predicate: P,
        mut function: F,
    ) -> Result<MutableList<R>, E>
    where
        P: FnMut(&Self::Item) -> std::result::Result<bool, E>,
        F: FnMut(&'a Self::Item) -> std::result::Result<R, E>,
    {
        let mut results = MutableList::new();
        for (index, item) in self.as_slice().iter().enumerate() {
            let wrap = |source: E| SieveError::function(index, source);
            if predicate(item).map_err(wrap)? {
                results.add(function(item).map_err(wrap)?);
            }
        }
        Ok(results)
    }

    /// Like [`collect_double`](Sequence::collect_double) with a fallible
    /// function.
    fn try_collect_double<E, F>(&self, mut function: F) -> Result<DoubleList, E>
    where
        F: FnMut(&Self::Item) -> std::result::Result<f64, E>,
    {
        let mut values = DoubleList::with_capacity(self.size());
        for (index, item) in self.as_slice().iter().enumerate() {
            values.add(function(item).map_err(|source| SieveError::function(index, source))?);
        }
        Ok(values)
    }

    /// Like [`select`](Sequence::select) with a fallible predicate.
    fn try_select<E, F>(&self, mut predicate: F) -> Result<MutableList<&Self::Item>, E>
    where
        F: FnMut(&Self::Item) -> std::result::Result<bool, E>,
    {
        let mut results = MutableList::new();
        for (index, item) in self.as_slice().iter().enumerate() {
            if predicate(item).map_err(|source| SieveError::function(index, source))? {
                results.add(item);
            }
        }
        Ok(results)
    }

    /// Like [`detect`](Sequence::detect) with a fallible predicate.
    ///
    /// A failure before the first match is returned as an error; elements
    /// after the first match are never evaluated.
    fn try_detect<E, F>(&self, mut predicate: F) -> Result<Option<&Self::Item>, E>
    where
        F: FnMut(&Self::Item) -> std::result::Result<bool, E>,
    {
        for (index, item) in self.as_slice().iter().enumerate() {
            if predicate(item).map_err(|source| SieveError::function(index, source))? {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: u32,
        value: f64,
        items: Vec<&'static str>,
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            Order {
                id: 1,
                value: 372.5,
                items: vec!["sofa", "chair", "gnome"],
            },
            Order {
                id: 2,
                value: 0.5,
                items: vec!["saucer"],
            },
            Order {
                id: 3,
                value: 1.75,
                items: vec![],
            },
            Order {
                id: 4,
                value: 12.0,
                items: vec!["chair", "cup"],
            },
        ]
    }

    #[test]
    fn collect_preserves_order_and_length() {
        let orders = sample_orders();
        let ids = orders.collect(|o| o.id);
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn collect_on_empty_is_empty() {
        let orders: Vec<Order> = Vec::new();
        assert!(orders.collect(|o| o.id).is_empty());
        assert!(orders.select(|_| true).is_empty());
        assert!(orders.flat_collect(|o| o.items.iter()).is_empty());
        assert!(orders.collect_if(|_| true, |o| o.id).is_empty());
        assert!(orders.collect_double(|o| o.value).is_empty());
        assert!(orders.detect(|_| true).is_none());
    }

    #[test]
    fn collect_with_passes_parameter() {
        let orders = sample_orders();
        let scaled = orders.collect_with(|o, factor| o.value * factor, 2.0);
        assert_eq!(scaled, [745.0, 1.0, 3.5, 24.0]);
    }

    #[test]
    fn collect_can_borrow_from_elements() {
        let names = vec![String::from("Fred"), String::from("Mary")];
        let borrowed = names.collect(|n| n.as_str());
        assert_eq!(borrowed, ["Fred", "Mary"]);
    }

    #[test]
    fn select_and_reject() {
        let orders = sample_orders();
        let high = orders.select(|o| o.value > 2.0);
        assert_eq!(high.collect(|o| o.id), [1, 4]);

        let low = orders.reject(|o| o.value > 2.0);
        assert_eq!(low.collect(|o| o.id), [2, 3]);
    }

    #[test]
    fn select_keeps_duplicates() {
        let values = [1, 2, 2, 3, 2];
        assert_eq!(values.select(|v| *v == 2), [&2, &2, &2]);
    }

    #[test]
    fn select_with_and_reject_with() {
        let orders = sample_orders();
        let above = orders.select_with(|o, threshold| o.value > *threshold, 1.5);
        assert_eq!(above.size(), 3);

        let below = orders.reject_with(|o, threshold| o.value > *threshold, 1.5);
        assert_eq!(below.collect(|o| o.id), [2]);
    }

    #[test]
    fn flat_collect_concatenates_in_order() {
        let orders = sample_orders();
        let items = orders.flat_collect(|o| o.items.iter().copied());
        assert_eq!(items, ["sofa", "chair", "gnome", "saucer", "chair", "cup"]);
    }

    #[test]
    fn collect_if_matches_select_then_collect() {
        let orders = sample_orders();
        let fused = orders.collect_if(|o| o.value > 1.5, |o| o.value);
        let composed = orders.select(|o| o.value > 1.5).collect(|o| o.value);
        assert_eq!(fused, [372.5, 1.75, 12.0]);
        assert_eq!(fused, composed);
    }

    #[test]
    fn detect_short_circuits() {
        let orders = sample_orders();
        let calls = Cell::new(0);
        let found = orders.detect(|o| {
            calls.set(calls.get() + 1);
            o.value < 1.0
        });
        assert_eq!(found.map(|o| o.id), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn detect_no_match() {
        let orders = sample_orders();
        assert!(orders.detect(|o| o.value > 1000.0).is_none());
        assert!(orders
            .detect_required(|o| o.value > 1000.0)
            .unwrap_err()
            .is_no_match());
        assert_eq!(orders.detect_index(|o| o.id == 3), Some(2));
        assert_eq!(orders.detect_index(|o| o.id == 9), None);
    }

    #[test]
    fn detect_with_parameter() {
        let suppliers = [
            ("Shedtastic", ["shed", "big shed", "huge shed"]),
            ("Doxins", ["kettle", "plasma screen", "sandwich toaster"]),
        ];
        let found = suppliers.detect_with(
            |(_, items), wanted| items.any_satisfy(|i| i.eq_ignore_ascii_case(wanted)),
            "Sandwich Toaster",
        );
        assert_eq!(found.map(|(name, _)| *name), Some("Doxins"));
    }

    #[test]
    fn partition_splits_in_order() {
        let orders = sample_orders();
        let partition = orders.partition(|o| o.value > 1.5);
        assert_eq!(partition.selected.collect(|o| o.id), [1, 3, 4]);
        assert_eq!(partition.rejected.collect(|o| o.id), [2]);
    }

    #[test]
    fn counting_and_testing() {
        let orders = sample_orders();
        assert_eq!(orders.count(|o| o.items.is_empty()), 1);
        assert_eq!(orders.count_with(|o, n| o.items.len() > *n, 1), 2);
        assert!(orders.any_satisfy(|o| o.value > 300.0));
        assert!(!orders.all_satisfy(|o| o.value > 1.0));
        assert!(orders.none_satisfy(|o| o.value < 0.0));

        let empty: [Order; 0] = [];
        assert!(!empty.any_satisfy(|_| true));
        assert!(empty.all_satisfy(|_| false));
        assert!(empty.none_satisfy(|_| true));
    }

    #[test]
    fn folding() {
        let orders = sample_orders();
        assert_eq!(orders.sum_of_double(|o| o.value), 386.75);
        let item_count = orders.inject_into(0, |acc, o| acc + o.items.len());
        assert_eq!(item_count, 6);
    }

    #[test]
    fn numeric_collect_variants() {
        let orders = sample_orders();
        assert_eq!(
            orders.collect_double(|o| o.value),
            DoubleList::of([372.5, 0.5, 1.75, 12.0])
        );
        assert_eq!(orders.collect_long(|o| o.id as i64), LongList::of([1, 2, 3, 4]));
        assert_eq!(
            orders.collect_int(|o| o.items.len() as i32),
            IntList::of([3, 1, 0, 2])
        );
    }

    #[test]
    fn conversions_copy() {
        let values = vec![3, 1, 3, 2];
        let list = values.to_list();
        let immutable = values.to_immutable();
        assert_eq!(list, values);
        assert_eq!(immutable, values);

        let set = values.to_set();
        assert_eq!(set.size(), 3);
        assert!(set.contains(&3));
    }

    #[test]
    fn sorted_by_is_stable() {
        let orders = sample_orders();
        let by_item_count = orders.sorted_by(|o| o.items.len(), Dir::Desc);
        assert_eq!(by_item_count.collect(|o| o.id), [1, 4, 2, 3]);

        let pairs = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = pairs.sorted_by(|p| p.0, Dir::Asc);
        assert_eq!(sorted.collect(|p| p.1), ['b', 'd', 'a', 'c']);
    }

    #[test]
    fn first_last_and_size() {
        let orders = sample_orders();
        assert_eq!(orders.get_first().map(|o| o.id), Some(1));
        assert_eq!(orders.get_last().map(|o| o.id), Some(4));
        assert_eq!(orders.size(), 4);
        assert!(orders.not_empty());

        let empty: Vec<Order> = Vec::new();
        assert!(empty.get_first().is_none());
        assert!(!empty.not_empty());
    }

    #[derive(Debug, PartialEq)]
    struct Negative(i32);

    fn checked(value: &i32) -> std::result::Result<u32, Negative> {
        u32::try_from(*value).map_err(|_| Negative(*value))
    }

    #[test]
    fn try_collect_reports_failing_index() {
        let values = [4, 7, -2, -9];
        match values.try_collect(checked) {
            Err(SieveError::Function { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(source, Negative(-2));
            }
            other => panic!("expected function failure, got {other:?}"),
        }

        let ok = [4, 7].try_collect(checked);
        assert_eq!(ok.ok(), Some(MutableList::of([4u32, 7])));
    }

    #[test]
    fn fallible_passes_stop_at_first_failure() {
        let values = [4, 7, -2, 5, -9];
        let calls = Cell::new(0);
        let counted = |v: &i32| {
            calls.set(calls.get() + 1);
            checked(v)
        };

        let err = values.try_collect(counted).unwrap_err();
        assert_eq!(err.failed_index(), Some(2));
        assert_eq!(calls.get(), 3);

        calls.set(0);
        let err = values.try_select(|v| counted(v).map(|v| v > 4)).unwrap_err();
        assert_eq!(err.failed_index(), Some(2));
        assert_eq!(calls.get(), 3);

        calls.set(0);
        let err = values.try_detect(|v| counted(v).map(|v| v > 100)).unwrap_err();
        assert_eq!(err.failed_index(), Some(2));
        assert_eq!(calls.get(), 3);

        calls.set(0);
        let err = values
            .try_collect_double(|v| counted(v).map(f64::from))
            .unwrap_err();
        assert_eq!(err.failed_index(), Some(2));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn try_collect_if_maps_accepted_elements() {
        let values = [1, 6, 3, 8];
        let mapped = values.try_collect_if(|v| checked(v).map(|v| v > 2), checked);
        assert_eq!(mapped.ok(), Some(MutableList::of([6u32, 3, 8])));

        let calls = Cell::new(0);
        let err = [5, 1, -4, 9]
            .try_collect_if(
                |v| {
                    calls.set(calls.get() + 1);
                    Ok::<bool, Negative>(*v != 1)
                },
                checked,
            )
            .unwrap_err();
        assert_eq!(err.failed_index(), Some(2));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn try_collect_double_matches_collect_double() {
        let orders = sample_orders();
        let values = orders.try_collect_double(|o| Ok::<f64, Negative>(o.value));
        assert_eq!(values.ok(), Some(orders.collect_double(|o| o.value)));
    }

    #[test]
    fn try_select_and_try_detect() {
        let values = [1, 2, -3, 4];
        let err = values
            .try_select(|v| checked(v).map(|v| v % 2 == 0))
            .unwrap_err();
        assert_eq!(err.failed_index(), Some(2));

        let found = values.try_detect(|v| checked(v).map(|v| v == 2)).ok();
        assert_eq!(found, Some(Some(&2)));

        let none = [1, 3].try_detect(|v| checked(v).map(|v| v == 2)).ok();
        assert_eq!(none, Some(None));
    }
}
