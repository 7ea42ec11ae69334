//! Sort direction and key comparison.
//!
//! [`compare_keys`] is the single comparator behind every sorting operation:
//! [`Sequence::sorted_by`](crate::Sequence::sorted_by),
//! [`MutableList::sort_this_by`](crate::MutableList::sort_this_by), the
//! primitive list sorts and [`Criteria::order_by`](crate::Criteria::order_by).

use std::cmp::Ordering;

/// Which way a sort runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl Dir {
    fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// Compares two sort keys in the given direction.
///
/// Keys that cannot be ordered (NaN) compare as equal, so a stable sort keeps
/// them in source order instead of panicking.
pub fn compare_keys<K: PartialOrd + ?Sized>(a: &K, b: &K, dir: Dir) -> Ordering {
    dir.orient(a.partial_cmp(b).unwrap_or(Ordering::Equal))
}
