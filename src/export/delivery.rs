//! Writes exported text to its destination.

use crate::core::error::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where exported results go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

/// Writes `content` to `target`, creating parent directories as needed.
pub fn deliver(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.write_all(b"\n")?;
            handle.flush()?;
            tracing::debug!(target: "export", "Wrote {} bytes to stdout", content.len());
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            tracing::info!(target: "export", "Results written to {}", path.display());
        }
    }
    Ok(())
}
