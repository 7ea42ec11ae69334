//! Error types for loading and querying a company.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading or querying a company.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    /// The company file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not a valid company.
    #[error("Invalid company document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A name filter is not a valid regular expression.
    #[error("Invalid name pattern: {0}")]
    Pattern(#[from] sieve::SieveError),

    /// No customer has the requested name.
    #[error("No customer named '{0}'.")]
    UnknownCustomer(String),
}

impl CompanyError {
    /// Create an unknown-customer error.
    pub fn unknown_customer(name: impl Into<String>) -> Self {
        Self::UnknownCustomer(name.into())
    }
}
