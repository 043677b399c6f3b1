//! Email verification: the deterministic classifier, the simulated
//! invalidation step composed after it, and the batch runner.

pub mod batch;
pub mod classifier;
pub mod invalidation;

use crate::core::config::Config;
use crate::core::models::{Classification, EmailResult, EmailStatus};
use classifier::{reasons, Classifier, Verdict};
use invalidation::{InvalidationSource, RandomInvalidation};
use std::sync::Arc;

/// Classifies single addresses and applies the invalidation step.
#[derive(Clone)]
pub struct Verifier {
    classifier: Classifier,
    invalidation: Arc<dyn InvalidationSource>,
}

impl Verifier {
    /// Uses a [`RandomInvalidation`] driven by the configured rate and seed.
    pub fn new(config: &Config) -> Self {
        let source = RandomInvalidation::new(config.invalid_domain_rate, config.rng_seed);
        Self::with_invalidation(config, Arc::new(source))
    }

    pub fn with_invalidation(config: &Config, invalidation: Arc<dyn InvalidationSource>) -> Self {
        Self {
            classifier: Classifier::new(config),
            invalidation,
        }
    }

    /// Verifies one address. Rejected addresses are returned untouched;
    /// classified ones may be overridden to "Domain does not exist".
    pub fn verify_one(&self, email: &str) -> EmailResult {
        match self.classifier.classify(email) {
            Verdict::Rejected(result) => result,
            Verdict::Classified(result) => {
                if self.invalidation.should_invalidate() {
                    tracing::trace!(target: "batch", "Simulated missing domain for {}", email);
                    EmailResult::new(
                        email,
                        &result.domain,
                        EmailStatus::Invalid,
                        Classification::LowValue,
                        reasons::DOMAIN_NOT_FOUND,
                    )
                } else {
                    result
                }
            }
        }
    }
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}
