//! Serialization of verification results and delivery of the output.

pub mod csv;
pub mod delivery;
pub mod json;

pub use self::csv::{to_csv, CsvExporter, CSV_HEADERS};
pub use delivery::{deliver, OutputTarget};
pub use json::to_json;

use clap::ValueEnum;

/// Output format for exported results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}
