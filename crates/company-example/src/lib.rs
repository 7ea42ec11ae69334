//! A worked example of sieve pipelines over a company object graph.
//!
//! The graph is a [`Company`] with [`Customer`]s, their [`Order`]s and
//! [`LineItem`]s, and [`Supplier`]s. [`Company::fixture`] builds the sample
//! company "Bloggs Shed Supplies"; [`load_company`] reads one from JSON.
//! The [`report`] module holds the queries the `company-report` binary runs.
//!
//! ```rust
//! use company_example::{report, Company};
//! use sieve::Sequence;
//!
//! let company = Company::fixture().unwrap();
//!
//! assert_eq!(report::customer_names(&company), ["Fred", "Mary", "Bill"]);
//! assert_eq!(report::customers_in(&company, "london").len(), 2);
//!
//! let bill = company.most_recent_customer().unwrap();
//! let big = bill.orders().collect_if(|o| o.value() > 1.5, |o| o.value());
//! assert_eq!(big, [372.5, 1.75]);
//! ```

pub mod cli;
mod domain;
mod error;
mod fixture;
mod output;
pub mod report;

pub use domain::{Company, Customer, LineItem, Order, Supplier};
pub use error::CompanyError;
pub use fixture::{load_company, parse_company};
pub use output::OutputMode;
