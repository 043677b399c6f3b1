//! Builder for layering defaults, a config file and CLI overrides into a [`Config`].

use super::file::ConfigFile;
use super::validation::validate_config;
use super::Config;
use crate::core::domains::DomainLists;
use crate::core::error::{AppError, Result};
use std::time::Duration;

/// Builds a [`Config`] from defaults, then a file, then explicit overrides.
///
/// Later layers win. [`ConfigBuilder::build`] validates the final result.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every value present in a parsed configuration file.
    pub fn with_file(mut self, file: &ConfigFile, path: Option<String>) -> Result<Self> {
        let verification = &file.verification;
        if let Some(ms) = verification.delay_ms {
            self.config.verification_delay = Duration::from_millis(ms);
        }
        if let Some(rate) = verification.invalid_domain_rate {
            self.config.invalid_domain_rate = rate;
        }
        if let Some(seed) = verification.seed {
            self.config.rng_seed = Some(seed);
        }
        if let Some(max) = verification.max_batch_size {
            self.config.max_batch_size = max;
        }

        let domains = &file.domains;
        if let Some(ref free) = domains.free {
            DomainLists::extend_unique(&mut self.config.domains.free, free);
        }
        if let Some(ref business) = domains.business {
            DomainLists::extend_unique(&mut self.config.domains.business, business);
        }
        if let Some(ref risky) = domains.risky {
            DomainLists::extend_unique(&mut self.config.domains.risky, risky);
        }

        if let Some(ref patterns) = file.patterns.suspicious_local_parts {
            self.config.suspicious_patterns = patterns.clone();
        }

        if let Some(ref delimiter) = file.export.delimiter {
            self.config.csv_delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(escape) = file.export.escape {
            self.config.escape_csv = escape;
        }
        if let Some(ref filename) = file.export.filename {
            self.config.output_filename = filename.clone();
        }

        self.config.loaded_config_path = path;
        Ok(self)
    }

    pub fn verification_delay(mut self, delay: Duration) -> Self {
        self.config.verification_delay = delay;
        self
    }

    pub fn invalid_domain_rate(mut self, rate: f64) -> Self {
        self.config.invalid_domain_rate = rate;
        self
    }

    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    pub fn max_batch_size(mut self, max: usize) -> Self {
        self.config.max_batch_size = max;
        self
    }

    pub fn csv_delimiter(mut self, delimiter: char) -> Self {
        self.config.csv_delimiter = delimiter;
        self
    }

    pub fn escape_csv(mut self, escape: bool) -> Self {
        self.config.escape_csv = escape;
        self
    }

    pub fn build(self) -> Result<Config> {
        validate_config(&self.config)?;
        tracing::debug!("Final configuration: {:?}", self.config);
        Ok(self.config)
    }
}

/// Accepts exactly one character, with `\t` and `tab` as aliases for a tab.
pub fn parse_delimiter(raw: &str) -> Result<char> {
    match raw {
        "\\t" | "tab" => return Ok('\t'),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AppError::Config(format!(
            "Delimiter must be a single character, got '{}'",
            raw
        ))),
    }
}
