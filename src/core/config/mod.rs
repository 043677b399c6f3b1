//! Defines the core runtime `Config` struct, its defaults, and related utilities.
//! Submodules handle loading, building, and validation.

pub(crate) mod builder;
pub(crate) mod file;
pub(crate) mod loading;
pub(crate) mod validation;

pub use builder::{parse_delimiter, ConfigBuilder};
pub use file::ConfigFile;
pub use loading::load_config_file;

use crate::core::domains::{DomainLists, SUSPICIOUS_LOCAL_PATTERNS};
use regex::Regex;
use std::time::Duration;

/// Shape check applied before any domain rule: `local@domain.tld` with no
/// whitespace and no extra `@`. U+FEFF counts as whitespace here.
pub const EMAIL_FORMAT_PATTERN: &str = r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$";

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILENAME: &str = "email_verification_results.csv";

/// Runtime configuration settings used by the email-sift core logic.
#[derive(Clone)]
pub struct Config {
    pub verification_delay: Duration,
    pub invalid_domain_rate: f64,
    pub rng_seed: Option<u64>,
    pub max_batch_size: usize,

    pub domains: DomainLists,
    pub suspicious_patterns: Vec<String>,
    pub email_regex: Regex,

    pub csv_delimiter: char,
    pub escape_csv: bool,
    pub output_filename: String,

    pub loaded_config_path: Option<String>,
}

impl Config {
    fn build_default() -> Self {
        let email_regex = Regex::new(EMAIL_FORMAT_PATTERN)
            .expect("Default email regex pattern failed to compile. This is a bug.");

        Config {
            verification_delay: Duration::from_millis(1500),
            invalid_domain_rate: 0.05,
            rng_seed: None,
            max_batch_size: 100_000,
            domains: DomainLists::default(),
            suspicious_patterns: SUSPICIOUS_LOCAL_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            email_regex,
            csv_delimiter: ',',
            escape_csv: false,
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            loaded_config_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::build_default()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("verification_delay", &self.verification_delay)
            .field("invalid_domain_rate", &self.invalid_domain_rate)
            .field("rng_seed", &self.rng_seed)
            .field("max_batch_size", &self.max_batch_size)
            .field("free_domains_count", &self.domains.free.len())
            .field("business_domains_count", &self.domains.business.len())
            .field("risky_domains_count", &self.domains.risky.len())
            .field("suspicious_patterns", &self.suspicious_patterns)
            .field("email_regex", &self.email_regex.as_str())
            .field("csv_delimiter", &self.csv_delimiter)
            .field("escape_csv", &self.escape_csv)
            .field("output_filename", &self.output_filename)
            .field("loaded_config_path", &self.loaded_config_path)
            .finish()
    }
}
