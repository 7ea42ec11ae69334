//! Composable predicates with result shaping.
//!
//! [`Criteria`] groups closure predicates into AND, OR and NOT clauses and
//! can order, offset and limit the matches when applied to a [`Sequence`].

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

use crate::error::Result;
use crate::list::MutableList;
use crate::op::Op;
use crate::ordering::{compare_keys, Dir};
use crate::sequence::Sequence;

type Clause<'f, T> = Box<dyn Fn(&T) -> bool + 'f>;
type Comparator<'f, T> = Box<dyn Fn(&T, &T) -> Ordering + 'f>;

/// A reusable predicate built from clause groups.
///
/// Criteria consist of three clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
/// - **NOT**: No clause may match
///
/// The overall match logic is:
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// # Example
///
/// ```
/// use sieve::{Criteria, Dir, Op};
///
/// struct Order {
///     id: u32,
///     value: f64,
///     rush: bool,
/// }
///
/// let orders = vec![
///     Order { id: 1, value: 372.5, rush: false },
///     Order { id: 2, value: 0.5, rush: true },
///     Order { id: 3, value: 1.75, rush: false },
///     Order { id: 4, value: 80.0, rush: true },
/// ];
///
/// let criteria = Criteria::new()
///     .and_attr(|o: &Order| o.value, Op::Gt, 1.0)
///     .not(|o: &Order| o.id == 4)
///     .order_by(|o: &Order| o.value, Dir::Asc);
///
/// let picked = criteria.select_from(&orders);
/// assert_eq!(picked.len(), 2);
/// assert_eq!(picked[0].id, 3);
/// assert!(!criteria.matches(&orders[1]));
/// ```
pub struct Criteria<'f, T> {
    and_clauses: Vec<Clause<'f, T>>,
    or_clauses: Vec<Clause<'f, T>>,
    not_clauses: Vec<Clause<'f, T>>,
    orderings: Vec<Comparator<'f, T>>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl<'f, T> Criteria<'f, T> {
    /// Creates empty criteria.
    ///
    /// Empty criteria match every item.
    pub fn new() -> Self {
        Criteria {
            and_clauses: Vec::new(),
            or_clauses: Vec::new(),
            not_clauses: Vec::new(),
            orderings: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    // ========================================================================
    // Generic clause builders
    // ========================================================================

    /// Adds an AND clause.
    ///
    /// All AND clauses must match for an item to be included.
    pub fn and<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'f,
    {
        self.and_clauses.push(Box::new(predicate));
        self
    }

    /// Adds an OR clause.
    ///
    /// At least one OR clause must match (unless there are no OR clauses).
    pub fn or<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'f,
    {
        self.or_clauses.push(Box::new(predicate));
        self
    }

    /// Adds a NOT clause.
    ///
    /// No NOT clause may match for an item to be included.
    pub fn not<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'f,
    {
        self.not_clauses.push(Box::new(predicate));
        self
    }

    // ========================================================================
    // Attribute shorthands
    // ========================================================================

    /// Adds an AND clause comparing `key(item)` against `value` with `op`.
    pub fn and_attr<V, K>(self, key: K, op: Op, value: V) -> Self
    where
        V: PartialOrd + 'f,
        K: Fn(&T) -> V + 'f,
    {
        self.and(attribute(key, op, value))
    }

    /// Adds an OR attribute clause.
    pub fn or_attr<V, K>(self, key: K, op: Op, value: V) -> Self
    where
        V: PartialOrd + 'f,
        K: Fn(&T) -> V + 'f,
    {
        self.or(attribute(key, op, value))
    }

    /// Adds a NOT attribute clause.
    pub fn not_attr<V, K>(self, key: K, op: Op, value: V) -> Self
    where
        V: PartialOrd + 'f,
        K: Fn(&T) -> V + 'f,
    {
        self.not(attribute(key, op, value))
    }

    /// Adds an AND clause matching `key(item)` against `text`, ignoring
    /// ASCII case.
    pub fn and_eq_ignore_case<K>(self, key: K, text: impl Into<String>) -> Self
    where
        K: Fn(&T) -> &str + 'f,
    {
        self.and(equals_ignore_case(key, text.into()))
    }

    /// Adds an OR case-insensitive equality clause.
    pub fn or_eq_ignore_case<K>(self, key: K, text: impl Into<String>) -> Self
    where
        K: Fn(&T) -> &str + 'f,
    {
        self.or(equals_ignore_case(key, text.into()))
    }

    /// Adds a NOT case-insensitive equality clause.
    pub fn not_eq_ignore_case<K>(self, key: K, text: impl Into<String>) -> Self
    where
        K: Fn(&T) -> &str + 'f,
    {
        self.not(equals_ignore_case(key, text.into()))
    }

    /// Adds an AND regex clause.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn and_regex<K>(self, key: K, pattern: &str) -> Result<Self>
    where
        K: Fn(&T) -> &str + 'f,
    {
        let regex = Regex::new(pattern)?;
        Ok(self.and(move |item| regex.is_match(key(item))))
    }

    /// Adds an OR regex clause.
    pub fn or_regex<K>(self, key: K, pattern: &str) -> Result<Self>
    where
        K: Fn(&T) -> &str + 'f,
    {
        let regex = Regex::new(pattern)?;
        Ok(self.or(move |item| regex.is_match(key(item))))
    }

    /// Adds a NOT regex clause.
    pub fn not_regex<K>(self, key: K, pattern: &str) -> Result<Self>
    where
        K: Fn(&T) -> &str + 'f,
    {
        let regex = Regex::new(pattern)?;
        Ok(self.not(move |item| regex.is_match(key(item))))
    }

    // ========================================================================
    // Ordering and limits
    // ========================================================================

    /// Adds an ordering key. Later keys break ties left by earlier ones.
    pub fn order_by<V, K>(mut self, key: K, dir: Dir) -> Self
    where
        V: PartialOrd,
        K: Fn(&T) -> V + 'f,
    {
        self.orderings
            .push(Box::new(move |a, b| compare_keys(&key(a), &key(b), dir)));
        self
    }

    /// Sets the maximum number of results to return.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of results to skip.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` if there are no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    /// Returns the limit, if set.
    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the offset, if set.
    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches.
    pub fn matches(&self, item: &T) -> bool {
        let and_pass = self.and_clauses.iter().all(|clause| clause(item));
        if !and_pass {
            return false;
        }

        let or_pass =
            self.or_clauses.is_empty() || self.or_clauses.iter().any(|clause| clause(item));
        if !or_pass {
            return false;
        }

        !self.not_clauses.iter().any(|clause| clause(item))
    }

    /// Borrows the criteria as a plain predicate, for use with
    /// [`Sequence::select`], [`Sequence::partition`] and friends.
    pub fn as_predicate(&self) -> Box<dyn Fn(&T) -> bool + '_> {
        Box::new(move |item| self.matches(item))
    }

    /// Returns references to the matching items.
    ///
    /// Matches are sorted by the ordering keys (stably, so ties keep source
    /// order), then offset and limit are applied.
    pub fn select_from<'a, S>(&self, items: &'a S) -> MutableList<&'a T>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let mut results: Vec<&'a T> = items
            .as_slice()
            .iter()
            .filter(|item| self.matches(item))
            .collect();

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| self.compare(a, b));
        }

        let offset = self.offset.unwrap_or(0);
        if offset >= results.len() {
            return MutableList::new();
        }
        let end = match self.limit {
            Some(limit) => offset.saturating_add(limit).min(results.len()),
            None => results.len(),
        };

        results[offset..end].iter().copied().collect()
    }

    /// Counts the matching items. Ignores ordering, offset and limit.
    pub fn count_in<S>(&self, items: &S) -> usize
    where
        S: Sequence<Item = T> + ?Sized,
    {
        items.count(|item| self.matches(item))
    }

    /// Finds the first matching item in source order.
    pub fn detect_in<'a, S>(&self, items: &'a S) -> Option<&'a T>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        items.detect(|item| self.matches(item))
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.orderings
            .iter()
            .map(|comparator| comparator(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

fn attribute<'f, T, V, K>(key: K, op: Op, value: V) -> impl Fn(&T) -> bool + 'f
where
    V: PartialOrd + 'f,
    K: Fn(&T) -> V + 'f,
{
    move |item| op.compare(&key(item), &value)
}

fn equals_ignore_case<'f, T, K>(key: K, text: String) -> impl Fn(&T) -> bool + 'f
where
    K: Fn(&T) -> &str + 'f,
{
    move |item| key(item).eq_ignore_ascii_case(&text)
}

impl<T> Default for Criteria<'_, T> {
    fn default() -> Self {
        Criteria::new()
    }
}

impl<T> fmt::Debug for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criteria")
            .field("and_clauses", &self.and_clauses.len())
            .field("or_clauses", &self.or_clauses.len())
            .field("not_clauses", &self.not_clauses.len())
            .field("orderings", &self.orderings.len())
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Customer {
        name: String,
        city: String,
        spend: f64,
    }

    fn customer(name: &str, city: &str, spend: f64) -> Customer {
        Customer {
            name: name.to_string(),
            city: city.to_string(),
            spend,
        }
    }

    fn sample_customers() -> Vec<Customer> {
        vec![
            customer("Fred", "London", 120.0),
            customer("Mary", "Liphook", 40.5),
            customer("Bill", "London", 374.75),
            customer("Anne", "Leeds", 374.75),
        ]
    }

    fn city(c: &Customer) -> &str {
        &c.city
    }

    fn name(c: &Customer) -> &str {
        &c.name
    }

    #[test]
    fn empty_criteria_matches_all() {
        let customers = sample_customers();
        let criteria = Criteria::new();
        assert!(criteria.is_empty());
        assert_eq!(criteria.select_from(&customers).len(), 4);
    }

    #[test]
    fn and_clauses_all_must_match() {
        let customers = sample_customers();
        let criteria = Criteria::new()
            .and_eq_ignore_case(city, "london")
            .and_attr(|c: &Customer| c.spend, Op::Gt, 200.0);

        let results = criteria.select_from(&customers);
        assert_eq!(results.collect(|c| c.name.as_str()), ["Bill"]);
    }

    #[test]
    fn or_clauses_need_one_match() {
        let customers = sample_customers();
        let criteria = Criteria::new()
            .or_eq_ignore_case(city, "LIPHOOK")
            .or_eq_ignore_case(city, "leeds");

        assert_eq!(criteria.count_in(&customers), 2);
    }

    #[test]
    fn not_clauses_exclude() {
        let customers = sample_customers();
        let criteria = Criteria::new()
            .not_eq_ignore_case(city, "london")
            .not_attr(|c: &Customer| c.spend, Op::Lt, 50.0);

        let results = criteria.select_from(&customers);
        assert_eq!(results.collect(|c| c.name.as_str()), ["Anne"]);
    }

    #[test]
    fn combined_and_or_not() {
        let customers = sample_customers();
        let criteria = Criteria::new()
            .and_attr(|c: &Customer| c.spend, Op::Gte, 100.0)
            .or_attr(|c: &Customer| c.spend, Op::Eq, 374.75)
            .or(|c: &Customer| c.name.starts_with('F'))
            .not(|c: &Customer| c.city == "Leeds");

        let results = criteria.select_from(&customers);
        assert_eq!(results.collect(|c| c.name.as_str()), ["Fred", "Bill"]);
    }

    #[test]
    fn ordering_multiple_keys() {
        let customers = sample_customers();
        let criteria = Criteria::new()
            .order_by(|c: &Customer| c.spend, Dir::Desc)
            .order_by(|c: &Customer| c.name.clone(), Dir::Asc);

        let results = criteria.select_from(&customers);
        assert_eq!(
            results.collect(|c| c.name.as_str()),
            ["Anne", "Bill", "Fred", "Mary"]
        );
    }

    #[test]
    fn offset_and_limit() {
        let customers = sample_customers();
        let criteria = Criteria::new().offset(1).limit(2);
        assert_eq!(criteria.get_offset(), Some(1));
        assert_eq!(criteria.get_limit(), Some(2));

        let results = criteria.select_from(&customers);
        assert_eq!(results.collect(|c| c.name.as_str()), ["Mary", "Bill"]);

        assert!(Criteria::new().offset(4).select_from(&customers).is_empty());
        assert!(Criteria::new().limit(0).select_from(&customers).is_empty());
        assert_eq!(Criteria::new().limit(99).select_from(&customers).len(), 4);
    }

    #[test]
    fn regex_clause() {
        let customers = sample_customers();
        let criteria = Criteria::new().and_regex(name, "^[A-F]").unwrap();
        assert_eq!(criteria.count_in(&customers), 3);

        let err = Criteria::new().or_regex(name, "(").unwrap_err();
        assert!(matches!(err, crate::SieveError::InvalidRegex(_)));
    }

    #[test]
    fn detect_and_predicate() {
        let customers = sample_customers();
        let criteria = Criteria::new().and_eq_ignore_case(city, "london");

        assert_eq!(
            criteria.detect_in(&customers).map(|c| c.name.as_str()),
            Some("Fred")
        );

        let partition = customers.partition(criteria.as_predicate());
        assert_eq!(partition.selected.len(), 2);
        assert_eq!(partition.rejected.len(), 2);
    }

    #[test]
    fn nan_attribute_never_matches() {
        let customers = vec![customer("Ghost", "Nowhere", f64::NAN)];
        let criteria = Criteria::new().and_attr(|c: &Customer| c.spend, Op::Ne, 1.0);
        assert_eq!(criteria.count_in(&customers), 0);
    }

    #[test]
    fn debug_shows_clause_counts() {
        let criteria: Criteria<'_, Customer> = Criteria::new().and(|_| true).limit(3);
        let rendered = format!("{criteria:?}");
        assert!(rendered.contains("and_clauses: 1"));
        assert!(rendered.contains("limit: Some(3)"));
    }
}
