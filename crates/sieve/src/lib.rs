//! Sieve - Eager collection pipelines over Rust slices and owned lists.
//!
//! Sieve gives any ordered collection a fluent set of whole-collection
//! operations. It supports:
//!
//! - Transforming: `collect`, `collect_with`, `collect_if`, `flat_collect`
//! - Filtering: `select`, `select_with`, `reject`, `partition`
//! - Finding: `detect`, `detect_with`, `any_satisfy`, `all_satisfy`
//! - Aggregating: `count`, `inject_into`, `sum_of_double`
//! - Unboxed numeric lists: `collect_double` and friends return a [`DoubleList`]
//! - Mutable and immutable lists and sets with value equality
//! - Reusable [`Criteria`] with AND, OR and NOT clause groups
//!
//! Every operation is eager, preserves encounter order and leaves its input
//! untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use sieve::{PrimitiveSequence, Sequence};
//!
//! struct LineItem {
//!     name: String,
//!     value: f64,
//! }
//!
//! struct Order {
//!     line_items: Vec<LineItem>,
//! }
//!
//! impl Order {
//!     fn value(&self) -> f64 {
//!         self.line_items.sum_of_double(|item| item.value)
//!     }
//! }
//!
//! let item = |name: &str, value: f64| LineItem { name: name.into(), value };
//! let orders = vec![
//!     Order { line_items: vec![item("shed", 50.0), item("saw", 1.5)] },
//!     Order { line_items: vec![item("cup", 1.5)] },
//! ];
//!
//! // One primitive double per order, in order
//! let values = orders.collect_double(Order::value);
//! assert_eq!(values, [51.5, 1.5]);
//! assert_eq!(values.sum(), 53.0);
//!
//! // Flatten every order's items into a single list
//! let names = orders.flat_collect(|order| order.line_items.iter().map(|i| i.name.as_str()));
//! assert_eq!(names, ["shed", "saw", "cup"]);
//!
//! // Distinct names
//! assert!(names.to_set().contains(&"cup"));
//! ```
//!
//! # Ownership
//!
//! Operations that return elements of the input (`select`, `detect`,
//! `partition`, `sorted_by`) return references, so nothing is copied until
//! the caller asks for it with [`MutableList::cloned`]. Operations that
//! compute new values (`collect`, `flat_collect`) return whatever the
//! function produces.
//!
//! # Fallible functions
//!
//! `try_collect`, `try_select` and `try_detect` accept functions returning
//! `Result`. The first failure stops the pipeline and is reported as
//! [`SieveError::Function`] with the index of the offending element.

mod criteria;
mod error;
mod list;
mod op;
mod ordering;
mod primitive;
mod sequence;
mod set;

// Re-export public API
pub use criteria::Criteria;
pub use error::{Result, SieveError};
pub use list::{ImmutableList, MutableList, Partition};
pub use op::Op;
pub use ordering::{compare_keys, Dir};
pub use primitive::{
    DoubleList, ImmutableDoubleList, ImmutablePrimitiveList, IntList, LongList, Primitive,
    PrimitiveList, PrimitiveSequence,
};
pub use sequence::Sequence;
pub use set::{ImmutableSet, MutableSet};
