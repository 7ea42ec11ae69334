//! Error types for the sieve crate.

use std::convert::Infallible;

use thiserror::Error;

/// Errors surfaced by pipeline operations.
///
/// `E` is the error type of a caller-supplied function. Operations that take
/// infallible closures use the default, [`Infallible`], so only the
/// [`NoMatch`](SieveError::NoMatch) and
/// [`InvalidRegex`](SieveError::InvalidRegex) variants can occur.
#[derive(Debug, Error)]
pub enum SieveError<E = Infallible> {
    /// A find-first operation scanned the whole input without a match.
    #[error("no element satisfied the predicate")]
    NoMatch,

    /// A caller-supplied function failed while processing an element.
    ///
    /// The pass stops at the first failure; no partial result is returned.
    #[error("function failed on element at index {index}: {source}")]
    Function {
        /// Position of the element being processed when the function failed.
        index: usize,
        /// The error returned by the function.
        #[source]
        source: E,
    },

    /// Invalid regular expression pattern in a criteria clause.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

impl<E> SieveError<E> {
    /// Returns `true` if this is a [`NoMatch`](SieveError::NoMatch) error.
    pub fn is_no_match(&self) -> bool {
        matches!(self, SieveError::NoMatch)
    }

    /// Returns the index of the failing element, if a function failed.
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            SieveError::Function { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn function(index: usize, source: E) -> Self {
        SieveError::Function { index, source }
    }
}

/// Result type for sieve operations.
pub type Result<T, E = Infallible> = std::result::Result<T, SieveError<E>>;
