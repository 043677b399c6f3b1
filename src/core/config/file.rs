//! Defines the structure mirroring the TOML configuration file format.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub(crate) verification: VerificationConfig,
    #[serde(default)]
    pub(crate) domains: DomainsConfig,
    #[serde(default)]
    pub(crate) patterns: PatternsConfig,
    #[serde(default)]
    pub(crate) export: ExportConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct VerificationConfig {
    pub(crate) delay_ms: Option<u64>,
    pub(crate) invalid_domain_rate: Option<f64>,
    pub(crate) seed: Option<u64>,
    pub(crate) max_batch_size: Option<usize>,
}

/// Entries here are appended to the built-in lists.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct DomainsConfig {
    pub(crate) free: Option<Vec<String>>,
    pub(crate) business: Option<Vec<String>>,
    pub(crate) risky: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct PatternsConfig {
    pub(crate) suspicious_local_parts: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct ExportConfig {
    pub(crate) delimiter: Option<String>,
    pub(crate) escape: Option<bool>,
    pub(crate) filename: Option<String>,
}
