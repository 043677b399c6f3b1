//! Sanity checks run on a fully assembled [`Config`].

use super::Config;
use crate::core::error::{AppError, Result};

pub(crate) fn validate_config(config: &Config) -> Result<()> {
    if !(0.0..=1.0).contains(&config.invalid_domain_rate) {
        return Err(AppError::Config(format!(
            "invalid_domain_rate must be between 0.0 and 1.0, got {}",
            config.invalid_domain_rate
        )));
    }
    if config.max_batch_size == 0 {
        return Err(AppError::Config(
            "max_batch_size must be greater than zero".to_string(),
        ));
    }
    if config.suspicious_patterns.iter().any(|p| p.is_empty()) {
        // An empty pattern would match every local part.
        return Err(AppError::Config(
            "suspicious_local_parts must not contain empty entries".to_string(),
        ));
    }
    if matches!(config.csv_delimiter, '"' | '\n' | '\r') {
        return Err(AppError::Config(format!(
            "{:?} cannot be used as a CSV delimiter",
            config.csv_delimiter
        )));
    }
    if config.output_filename.trim().is_empty() {
        return Err(AppError::Config(
            "Output filename must not be empty".to_string(),
        ));
    }
    if config.verification_delay.as_secs() > 60 {
        tracing::warn!(
            "Verification delay of {:?} is unusually long",
            config.verification_delay
        );
    }
    Ok(())
}
