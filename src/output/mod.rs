//! Output formatting for subnet plans.
//!
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON document
//! - [`terminal`] - Terminal table with colors

mod csv;
mod json;
mod terminal;

pub use csv::render_csv;
pub use json::render_json;
pub use terminal::{format_field, render_table, TABLE_HEADERS};

use crate::models::SubnetAllocation;
use crate::processing::PlanSummary;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', expected table, csv or json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render a plan in the requested format.
pub fn render(
    format: OutputFormat,
    allocations: &[SubnetAllocation],
    summary: &PlanSummary,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Table => Ok(render_table(allocations, summary)),
        OutputFormat::Csv => Ok(render_csv(allocations)),
        OutputFormat::Json => render_json(allocations, summary),
    }
}
