//! Locates and parses the optional TOML configuration file.

use super::file::ConfigFile;
use crate::core::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_NAME: &str = "email-sift.toml";

/// Candidate locations, in priority order, when no explicit path is given.
fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_NAME)];
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(format!(
            "{}/.config/email-sift/config.toml",
            home
        )));
    }
    paths
}

/// Loads the configuration file.
///
/// An explicit path must exist. Without one, the default locations are
/// probed and the first existing file is used; finding none is not an error.
/// Returns the parsed file together with the path it came from.
pub fn load_config_file(explicit: Option<&Path>) -> Result<Option<(ConfigFile, String)>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "Config file '{}' not found",
                path.display()
            )));
        }
        return parse_file(path).map(Some);
    }

    for candidate in default_locations() {
        if candidate.is_file() {
            tracing::debug!("Found config file at {}", candidate.display());
            return parse_file(&candidate).map(Some);
        }
    }

    tracing::debug!("No config file found; using built-in defaults");
    Ok(None)
}

fn parse_file(path: &Path) -> Result<(ConfigFile, String)> {
    let text = fs::read_to_string(path)?;
    let parsed: ConfigFile = toml::from_str(&text)?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok((parsed, path.display().to_string()))
}
