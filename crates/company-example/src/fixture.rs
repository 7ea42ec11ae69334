//! The built-in company and the JSON loader.

use std::fs;
use std::path::Path;

use crate::domain::Company;
use crate::error::CompanyError;

const FIXTURE: &str = include_str!("../data/company.json");

impl Company {
    /// The sample company "Bloggs Shed Supplies": three customers placing
    /// five orders, and seven suppliers.
    pub fn fixture() -> Result<Company, CompanyError> {
        parse_company(FIXTURE)
    }
}

/// Parses a company from a JSON document.
pub fn parse_company(json: &str) -> Result<Company, CompanyError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a company JSON file.
pub fn load_company(path: impl AsRef<Path>) -> Result<Company, CompanyError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CompanyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_company(&json)
}
