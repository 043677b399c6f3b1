//! Runs a whole batch of addresses through the [`Verifier`].

use super::Verifier;
use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use crate::core::models::{EmailResult, VerificationSummary};
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Applies the verifier to an ordered list of addresses.
///
/// A run waits once for the configured delay (emulating a remote call), then
/// classifies every address in input order. Results are all-or-nothing.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    verifier: Arc<Verifier>,
    delay: Duration,
    max_batch_size: usize,
}

impl BatchRunner {
    pub fn new(config: &Config) -> Self {
        Self::with_verifier(Verifier::new(config), config)
    }

    pub fn with_verifier(verifier: Verifier, config: &Config) -> Self {
        Self {
            verifier: Arc::new(verifier),
            delay: config.verification_delay,
            max_batch_size: config.max_batch_size,
        }
    }

    pub async fn run(&self, emails: Vec<String>) -> Result<Vec<EmailResult>> {
        self.run_with_progress(emails, |_| {}).await
    }

    /// Like [`run`](Self::run), calling `on_progress` with the number of
    /// completed addresses after each one.
    pub async fn run_with_progress<F>(
        &self,
        emails: Vec<String>,
        on_progress: F,
    ) -> Result<Vec<EmailResult>>
    where
        F: Fn(usize) + Send + 'static,
    {
        if emails.is_empty() {
            tracing::debug!(target: "batch", "Empty batch, nothing to verify");
            return Ok(Vec::new());
        }
        if emails.len() > self.max_batch_size {
            tracing::error!(
                target: "batch",
                "Rejecting batch of {} emails (limit {})",
                emails.len(),
                self.max_batch_size
            );
            return Err(AppError::BatchTooLarge {
                size: emails.len(),
                max: self.max_batch_size,
            });
        }

        let count = emails.len();
        tracing::info!(target: "batch", "Verifying {} email addresses...", count);
        let start_time = Instant::now();

        sleep(self.delay).await;

        let verifier = Arc::clone(&self.verifier);
        let results = tokio::task::spawn_blocking(move || {
            emails
                .iter()
                .enumerate()
                .map(|(idx, email)| {
                    let result = verifier.verify_one(email);
                    on_progress(idx + 1);
                    result
                })
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| {
            tracing::error!(target: "batch", "Verification batch failed: {}", e);
            AppError::from(e)
        })?;

        tracing::info!(
            target: "batch",
            "Verified {} emails in {:.2?}",
            count,
            start_time.elapsed()
        );
        tracing::debug!(target: "batch", "{}", VerificationSummary::from_results(&results));
        Ok(results)
    }

    /// Streams results as they are produced, after the same initial delay.
    ///
    /// Unlike [`run`](Self::run) this does not enforce the batch size limit
    /// and lets callers consume partial output.
    pub fn stream(&self, emails: Vec<String>) -> BoxStream<'static, EmailResult> {
        let verifier = Arc::clone(&self.verifier);
        let mut pending = Some(emails);
        stream::once(sleep(self.delay))
            .flat_map(move |_| {
                let verifier = Arc::clone(&verifier);
                let emails = pending.take().unwrap_or_default();
                stream::iter(emails).map(move |email| verifier.verify_one(&email))
            })
            .boxed()
    }
}
