//! Comparison operators for attribute clauses.
//!
//! The [`Op`] enum is used by [`Criteria`](crate::Criteria) attribute
//! shorthands to compare an extracted key against a fixed value.

use std::cmp::Ordering;

/// Comparison operator for an attribute clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact match, no tolerance for floating point).
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Compares `left` against `right` with this operator.
    ///
    /// Values that cannot be ordered (a NaN on either side) never match,
    /// not even for [`Op::Ne`].
    pub fn compare<V: PartialOrd + ?Sized>(self, left: &V, right: &V) -> bool {
        match left.partial_cmp(right) {
            Some(ordering) => self.eval_ordering(ordering),
            None => false,
        }
    }
}
