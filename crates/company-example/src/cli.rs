//! The `company-report` command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sieve::{PrimitiveSequence, Sequence};

use crate::domain::Company;
use crate::fixture::load_company;
use crate::output::OutputMode;
use crate::report;

/// Query a company's customers, orders and suppliers.
#[derive(Debug, Parser)]
#[command(name = "company-report")]
#[command(version, about)]
pub struct Cli {
    /// Load the company from a JSON file instead of the built-in sample
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List customer names
    Customers {
        /// Only customers living in this city (case-insensitive)
        #[arg(long)]
        city: Option<String>,

        /// Only customers whose orders total at least this much
        #[arg(long, value_name = "VALUE")]
        min_total: Option<f64>,

        /// Only customers whose name matches this regular expression
        #[arg(long, value_name = "REGEX")]
        name_pattern: Option<String>,
    },

    /// List the distinct names of all ordered items
    Items,

    /// List order values
    Orders {
        /// Only this customer's orders
        #[arg(long, value_name = "NAME")]
        customer: Option<String>,

        /// Only orders worth more than this
        #[arg(long, value_name = "VALUE")]
        min_value: Option<f64>,
    },

    /// List supplier names
    Suppliers {
        /// Find the supplier of this item (case-insensitive)
        #[arg(long, value_name = "NAME", conflicts_with = "min_items")]
        item: Option<String>,

        /// Only suppliers selling more than this many items
        #[arg(long, value_name = "N")]
        min_items: Option<usize>,
    },
}

impl Cli {
    fn company(&self) -> anyhow::Result<Company> {
        match &self.data {
            Some(path) => load_company(path)
                .with_context(|| format!("loading company from {}", path.display())),
            None => Company::fixture().context("loading the built-in company"),
        }
    }
}

/// Exit status when a supplier search finds nothing.
pub const NOT_FOUND: u8 = 1;

/// Runs a parsed command, writing the report to `out` and diagnostics to
/// `err`.
///
/// Returns the process exit status: 0, or [`NOT_FOUND`] when a supplier
/// search finds nothing.
pub fn run(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<u8> {
    let company = cli.company()?;
    let mode = cli.output;

    let rendered = match &cli.command {
        Commands::Customers {
            city,
            min_total,
            name_pattern,
        } => {
            let customers = report::customers_matching(
                &company,
                city.as_deref(),
                *min_total,
                name_pattern.as_deref(),
            )?;
            mode.render(&customers.collect(|c| c.name()))?
        }
        Commands::Items => mode.render(&report::ordered_item_names(&company))?,
        Commands::Orders {
            customer,
            min_value,
        } => {
            let values = report::order_values(&company, customer.as_deref())?;
            let values = match min_value {
                Some(min) => values.select(|value| value > *min),
                None => values,
            };
            mode.render(&values)?
        }
        Commands::Suppliers {
            item: Some(item), ..
        } => match report::supplier_of(&company, item) {
            Some(supplier) => mode.render(&[supplier.name()])?,
            None => {
                writeln!(err, "no supplier for '{item}'")?;
                return Ok(NOT_FOUND);
            }
        },
        Commands::Suppliers {
            item: None,
            min_items,
        } => {
            let names = match min_items {
                Some(n) => report::suppliers_with_more_than(&company, *n).collect(|s| s.name()),
                None => report::supplier_names(&company),
            };
            mode.render(&names)?
        }
    };

    out.write_all(rendered.as_bytes())?;
    Ok(0)
}
