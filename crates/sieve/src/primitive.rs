//! Primitive-specialized numeric lists.
//!
//! [`PrimitiveList`] stores numbers in a flat `Vec<N>`; values are never
//! wrapped per element. [`DoubleList`], [`LongList`] and [`IntList`] are the
//! instantiations produced by [`Sequence::collect_double`],
//! [`Sequence::collect_long`] and [`Sequence::collect_int`].
//!
//! Equality is exact element-wise comparison with no tolerance: a list
//! holding `0.1 + 0.2` is not equal to one holding `0.3`.
//!
//! [`Sequence::collect_double`]: crate::Sequence::collect_double
//! [`Sequence::collect_long`]: crate::Sequence::collect_long
//! [`Sequence::collect_int`]: crate::Sequence::collect_int

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref};
use std::sync::Arc;

use crate::list::MutableList;
use crate::ordering::{compare_keys, Dir};

/// A fixed-width numeric element type.
pub trait Primitive:
    Copy + PartialOrd + fmt::Debug + Default + Add<Output = Self> + Send + Sync + 'static
{
    /// The type sums are accumulated in, wide enough that adding any list
    /// of elements cannot overflow in practice.
    type Sum: Copy + PartialEq + fmt::Debug + Default + Add<Output = Self::Sum>;

    /// Widens the value to `f64`, used for averaging.
    fn to_f64(self) -> f64;

    /// Widens the value to its [`Sum`](Primitive::Sum) type.
    fn widen(self) -> Self::Sum;
}

macro_rules! impl_primitive {
    ($($ty:ty => $sum:ty),*) => {
        $(
            impl Primitive for $ty {
                type Sum = $sum;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn widen(self) -> $sum {
                    <$sum>::from(self)
                }
            }
        )*
    };
}

impl_primitive!(f64 => f64, i64 => i128, i32 => i64);

/// Operations shared by the mutable and immutable primitive lists.
///
/// Predicates and functions receive elements by value.
pub trait PrimitiveSequence {
    /// The numeric element type.
    type Elem: Primitive;

    /// Returns the elements as a slice, in order.
    fn as_slice(&self) -> &[Self::Elem];

    /// Returns the number of elements.
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns the elements that satisfy `predicate`, in order.
    fn select<F>(&self, mut predicate: F) -> PrimitiveList<Self::Elem>
    where
        F: FnMut(Self::Elem) -> bool,
    {
        self.as_slice()
            .iter()
            .copied()
            .filter(|value| predicate(*value))
            .collect()
    }

    /// Returns the elements that do not satisfy `predicate`, in order.
    fn reject<F>(&self, mut predicate: F) -> PrimitiveList<Self::Elem>
    where
        F: FnMut(Self::Elem) -> bool,
    {
        self.select(|value| !predicate(value))
    }

    /// Maps every element to another primitive, preserving order.
    fn collect_primitive<M, F>(&self, function: F) -> PrimitiveList<M>
    where
        M: Primitive,
        F: FnMut(Self::Elem) -> M,
    {
        self.as_slice().iter().copied().map(function).collect()
    }

    /// Maps every element to an arbitrary value, preserving order.
    fn collect<R, F>(&self, function: F) -> MutableList<R>
    where
        F: FnMut(Self::Elem) -> R,
    {
        self.as_slice().iter().copied().map(function).collect()
    }

    /// Returns the first element that satisfies `predicate`.
    fn detect<F>(&self, mut predicate: F) -> Option<Self::Elem>
    where
        F: FnMut(Self::Elem) -> bool,
    {
        self.as_slice().iter().copied().find(|value| predicate(*value))
    }

    /// Counts the elements that satisfy `predicate`.
    fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(Self::Elem) -> bool,
    {
        self.as_slice()
            .iter()
            .filter(|value| predicate(**value))
            .count()
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn any_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Self::Elem) -> bool,
    {
        self.as_slice().iter().copied().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn all_satisfy<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Self::Elem) -> bool,
    {
        self.as_slice().iter().copied().all(predicate)
    }

    /// Sums the elements in order. An empty list sums to zero.
    ///
    /// Integers are widened before adding (`i32` to `i64`, `i64` to `i128`),
    /// so the total of an [`IntList`] or [`LongList`] does not overflow.
    fn sum(&self) -> <Self::Elem as Primitive>::Sum {
        self.as_slice()
            .iter()
            .fold(Default::default(), |sum, value| sum + value.widen())
    }

    /// Returns the smallest element, or `None` if empty.
    ///
    /// Elements that cannot be compared (NaN) are skipped unless they come
    /// first.
    fn min(&self) -> Option<Self::Elem> {
        extreme(self.as_slice(), Ordering::Less)
    }

    /// Returns the largest element, or `None` if empty.
    fn max(&self) -> Option<Self::Elem> {
        extreme(self.as_slice(), Ordering::Greater)
    }

    /// Returns the arithmetic mean as `f64`, or `None` if empty.
    fn average(&self) -> Option<f64> {
        if self.as_slice().is_empty() {
            return None;
        }
        let total: f64 = self.as_slice().iter().map(|value| value.to_f64()).sum();
        Some(total / self.as_slice().len() as f64)
    }

    /// Copies the elements into a list of plain values.
    fn boxed(&self) -> MutableList<Self::Elem> {
        self.as_slice().iter().copied().collect()
    }

    /// Copies the elements into a `Vec`.
    fn to_array(&self) -> Vec<Self::Elem> {
        self.as_slice().to_vec()
    }

    /// Copies the elements into a new list sorted in `dir` order.
    fn to_sorted_list(&self, dir: Dir) -> PrimitiveList<Self::Elem> {
        let mut sorted = self.as_slice().to_vec();
        sorted.sort_by(|a, b| compare_keys(a, b, dir));
        PrimitiveList::from(sorted)
    }
}

fn extreme<N: Primitive>(values: &[N], wanted: Ordering) -> Option<N> {
    let mut values = values.iter().copied();
    let first = values.next()?;
    Some(values.fold(first, |best, value| {
        if value.partial_cmp(&best) == Some(wanted) {
            value
        } else {
            best
        }
    }))
}

/// An owned, growable list of primitive numbers.
///
/// # Example
///
/// ```
/// use sieve::{DoubleList, PrimitiveSequence, Sequence};
///
/// struct Order {
///     value: f64,
/// }
///
/// let orders = [Order { value: 372.5 }, Order { value: 0.5 }, Order { value: 1.75 }];
/// let values = orders.collect_double(|o| o.value);
/// let high = values.select(|v| v > 1.5);
///
/// assert_eq!(high, DoubleList::of([372.5, 1.75]));
/// assert_eq!(values.sum(), 374.75);
/// ```
#[derive(Clone, PartialEq)]
pub struct PrimitiveList<N> {
    items: Vec<N>,
}

/// A mutable list of `f64` values.
pub type DoubleList = PrimitiveList<f64>;
/// A mutable list of `i64` values.
pub type LongList = PrimitiveList<i64>;
/// A mutable list of `i32` values.
pub type IntList = PrimitiveList<i32>;

impl<N: Primitive> PrimitiveList<N> {
    /// Creates an empty list.
    pub fn new() -> Self {
        PrimitiveList { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        PrimitiveList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates a list holding `values` in order.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        values.into_iter().collect()
    }

    /// Appends a value and returns the list, for building by chaining.
    pub fn with(mut self, value: N) -> Self {
        self.items.push(value);
        self
    }

    /// Appends a value.
    pub fn add(&mut self, value: N) {
        self.items.push(value);
    }

    /// Appends all values, in order.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = N>,
    {
        self.items.extend(values);
    }

    /// Removes and returns the value at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<N> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sorts the list in place.
    pub fn sort_this(&mut self, dir: Dir) -> &mut Self {
        self.items.sort_by(|a, b| compare_keys(a, b, dir));
        self
    }

    /// Copies the values into an [`ImmutablePrimitiveList`].
    pub fn to_immutable(&self) -> ImmutablePrimitiveList<N> {
        ImmutablePrimitiveList {
            items: Arc::from(self.items.as_slice()),
        }
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<N> {
        self.items
    }
}

impl<N: Primitive> PrimitiveSequence for PrimitiveList<N> {
    type Elem = N;

    fn as_slice(&self) -> &[N] {
        &self.items
    }
}

impl<N> Default for PrimitiveList<N> {
    fn default() -> Self {
        PrimitiveList { items: Vec::new() }
    }
}

impl<N: fmt::Debug> fmt::Debug for PrimitiveList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<N> Deref for PrimitiveList<N> {
    type Target = [N];

    fn deref(&self) -> &[N] {
        &self.items
    }
}

impl<N> FromIterator<N> for PrimitiveList<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        PrimitiveList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<N> From<Vec<N>> for PrimitiveList<N> {
    fn from(items: Vec<N>) -> Self {
        PrimitiveList { items }
    }
}

impl<N: PartialEq, const M: usize> PartialEq<[N; M]> for PrimitiveList<N> {
    fn eq(&self, other: &[N; M]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

impl<N: PartialEq> PartialEq<ImmutablePrimitiveList<N>> for PrimitiveList<N> {
    fn eq(&self, other: &ImmutablePrimitiveList<N>) -> bool {
        *self.items == *other.items
    }
}

/// A primitive list fixed at construction.
#[derive(PartialEq)]
pub struct ImmutablePrimitiveList<N> {
    items: Arc<[N]>,
}

/// An immutable list of `f64` values.
pub type ImmutableDoubleList = ImmutablePrimitiveList<f64>;

impl<N: Primitive> ImmutablePrimitiveList<N> {
    /// Creates a list holding `values` in order.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        ImmutablePrimitiveList {
            items: values.into_iter().collect(),
        }
    }

    /// Returns a copy of the list with `value` appended.
    pub fn new_with(&self, value: N) -> Self {
        ImmutablePrimitiveList::of(self.items.iter().copied().chain(std::iter::once(value)))
    }

    /// Copies the values into a [`PrimitiveList`].
    pub fn to_list(&self) -> PrimitiveList<N> {
        PrimitiveList::from(self.items.to_vec())
    }
}

impl<N: Primitive> PrimitiveSequence for ImmutablePrimitiveList<N> {
    type Elem = N;

    fn as_slice(&self) -> &[N] {
        &self.items
    }
}

impl<N> Clone for ImmutablePrimitiveList<N> {
    fn clone(&self) -> Self {
        ImmutablePrimitiveList {
            items: Arc::clone(&self.items),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for ImmutablePrimitiveList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<N> Deref for ImmutablePrimitiveList<N> {
    type Target = [N];

    fn deref(&self) -> &[N] {
        &self.items
    }
}

impl<N: PartialEq> PartialEq<PrimitiveList<N>> for ImmutablePrimitiveList<N> {
    fn eq(&self, other: &PrimitiveList<N>) -> bool {
        *self.items == *other.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_reject_preserve_order() {
        let values = DoubleList::of([372.5, 0.5, 1.75]);
        assert_eq!(values.select(|v| v > 1.5), DoubleList::of([372.5, 1.75]));
        assert_eq!(values.reject(|v| v > 1.5), [0.5]);
    }

    #[test]
    fn equality_is_exact() {
        let computed = DoubleList::of([0.1 + 0.2]);
        assert_ne!(computed, DoubleList::of([0.3]));
        assert_ne!(DoubleList::of([f64::NAN]), DoubleList::of([f64::NAN]));
        assert_eq!(DoubleList::of([1.75]), [1.75]);
    }

    #[test]
    fn mapping() {
        let values = LongList::of([1, 2, 3]);
        assert_eq!(values.collect_primitive(|v| v as f64 / 2.0), [0.5, 1.0, 1.5]);
        assert_eq!(values.collect(|v| v * 10), [10, 20, 30]);
    }

    #[test]
    fn aggregates() {
        let values = DoubleList::of([372.5, 0.5, 1.75]);
        assert_eq!(values.sum(), 374.75);
        assert_eq!(values.min(), Some(0.5));
        assert_eq!(values.max(), Some(372.5));
        assert_eq!(IntList::of([1, 2, 3, 4]).average(), Some(2.5));

        let empty = DoubleList::new();
        assert_eq!(empty.sum(), 0.0);
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
        assert_eq!(empty.average(), None);
    }

    #[test]
    fn integer_sums_are_widened() {
        assert_eq!(IntList::of([i32::MAX, 1]).sum(), i64::from(i32::MAX) + 1);
        assert_eq!(IntList::of([i32::MIN, -1]).sum(), i64::from(i32::MIN) - 1);
        assert_eq!(
            LongList::of([i64::MAX, i64::MAX]).sum(),
            i128::from(i64::MAX) * 2
        );
        assert_eq!(IntList::new().sum(), 0);
    }

    #[test]
    fn min_max_skip_nan_after_first() {
        let values = DoubleList::of([2.0, f64::NAN, 1.0, 3.0]);
        assert_eq!(values.min(), Some(1.0));
        assert_eq!(values.max(), Some(3.0));
    }

    #[test]
    fn detect_count_and_tests() {
        let values = IntList::of([5, 8, 13, 21]);
        assert_eq!(values.detect(|v| v % 2 == 0), Some(8));
        assert_eq!(values.detect(|v| v > 100), None);
        assert_eq!(values.count(|v| v > 6), 3);
        assert!(values.any_satisfy(|v| v == 13));
        assert!(values.all_satisfy(|v| v > 0));
    }

    #[test]
    fn boxed_matches_values() {
        let values = DoubleList::of([1.5, 2.5]);
        assert_eq!(values.boxed(), [1.5, 2.5]);
        assert_eq!(values.to_array(), vec![1.5, 2.5]);
    }

    #[test]
    fn sorting() {
        let mut values = IntList::of([3, 1, 2]);
        assert_eq!(values.to_sorted_list(Dir::Desc), [3, 2, 1]);
        values.sort_this(Dir::Asc);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn mutation() {
        let mut values = DoubleList::new().with(1.0);
        values.add(2.0);
        values.add_all([3.0, 4.0]);
        assert_eq!(values.remove_at(0), Some(1.0));
        assert_eq!(values.remove_at(7), None);
        assert_eq!(values.len(), 3);
        values.clear();
        assert!(values.is_empty());
    }

    #[test]
    fn immutable_round_trip() {
        let mut values = DoubleList::of([1.0, 2.0]);
        let frozen = values.to_immutable();
        values.add(3.0);

        assert_eq!(frozen, DoubleList::of([1.0, 2.0]));
        assert_eq!(frozen.new_with(3.0), values);
        assert_eq!(frozen.to_list().sum(), 3.0);
        assert_eq!(frozen.size(), 2);
    }
}
