//! email-sift core library.
//!
//! Classifies email address lists by validity and lead value and exports the
//! results. The classifier is a local simulation: it performs no DNS or SMTP
//! lookups.
//!
//! ```no_run
//! # async fn demo() -> email_sift_core::Result<()> {
//! use email_sift_core::{parse_csv_emails, to_csv, verify_emails, Config};
//!
//! let config = Config::default();
//! let emails = parse_csv_emails("name,email\nAnn,ann@acme.io\n", config.csv_delimiter);
//! let results = verify_emails(&config, emails).await?;
//! println!("{}", to_csv(&results));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod export;
pub mod ingest;
pub mod verification;

pub use crate::core::config::{
    load_config_file, parse_delimiter, Config, ConfigBuilder, ConfigFile,
};
pub use crate::core::domains::DomainLists;
pub use crate::core::error::{AppError, Result};
pub use crate::core::models::{Classification, EmailResult, EmailStatus, VerificationSummary};
pub use export::{deliver, to_csv, to_json, CsvExporter, ExportFormat, OutputTarget};
pub use ingest::{decode_input, parse_csv_emails, parse_manual_emails};
pub use verification::batch::BatchRunner;
pub use verification::invalidation::{
    AlwaysInvalidate, InvalidationSource, NeverInvalidate, RandomInvalidation,
};
pub use verification::Verifier;

/// Verifies a batch with the configured delay and random invalidation.
pub async fn verify_emails(config: &Config, emails: Vec<String>) -> Result<Vec<EmailResult>> {
    BatchRunner::new(config).run(emails).await
}
