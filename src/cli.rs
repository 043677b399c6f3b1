//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use email_sift_core::ExportFormat;
use std::path::{Path, PathBuf};

/// How input text is turned into candidate addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Any delimited field containing `@`, deduplicated.
    Csv,
    /// One address per line.
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "email-sift",
    version,
    about = "Classify email lists by validity and lead value, then export the results."
)]
pub struct Cli {
    /// Input file. Omit or use '-' to read stdin.
    #[arg(short, long, value_name = "PATH", conflicts_with = "emails")]
    pub input: Option<PathBuf>,

    /// Input format. Defaults to csv for *.csv files and text otherwise.
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Address to verify; repeat for several.
    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Output path, or '-' for stdout. Defaults to the configured filename.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Export format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Field delimiter for CSV input and output (single character or 'tab').
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Double embedded quotes in exported CSV fields.
    #[arg(long)]
    pub escape_csv: bool,

    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH", env = "EMAIL_SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the simulated invalidation, for reproducible runs.
    #[arg(long, env = "EMAIL_SIFT_SEED")]
    pub seed: Option<u64>,

    /// Share of valid addresses reported as "Domain does not exist" (0.0-1.0).
    #[arg(long)]
    pub invalid_rate: Option<f64>,

    /// Simulated verification latency in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.emails.is_empty() && self.input.as_deref().map_or(true, |p| p == Path::new("-"))
    }

    pub fn resolved_input_format(&self) -> InputFormat {
        if let Some(format) = self.input_format {
            return format;
        }
        match self.input.as_deref().and_then(Path::extension) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Text,
        }
    }
}
