//! Output mode control for reports.
//!
//! [`OutputMode`] decides how a list of report values is written: one value
//! per line, or as a JSON array.

use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;

/// Controls how report output is rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// One value per line
    #[default]
    Text,
    /// A JSON array
    Json,
}

impl OutputMode {
    /// Returns true if this is a structured output mode.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    /// Renders `values` in this mode. Non-empty output ends with a newline.
    pub fn render<T>(&self, values: &[T]) -> serde_json::Result<String>
    where
        T: Serialize + Display,
    {
        if self.is_structured() {
            let mut json = serde_json::to_string_pretty(values)?;
            json.push('\n');
            return Ok(json);
        }

        Ok(values.iter().map(|value| format!("{value}\n")).collect())
    }
}
