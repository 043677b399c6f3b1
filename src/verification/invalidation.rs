//! Simulated upstream failures.
//!
//! After the deterministic rules, a configurable share of otherwise valid
//! addresses is reported as "Domain does not exist". The decision source is
//! a trait so callers and tests can swap in a fixed or seeded source.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides, per eligible address, whether to override it as invalid.
pub trait InvalidationSource: Send + Sync {
    fn should_invalidate(&self) -> bool;
}

/// Never overrides. Makes verification a pure function.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInvalidate;

impl InvalidationSource for NeverInvalidate {
    fn should_invalidate(&self) -> bool {
        false
    }
}

/// Always overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysInvalidate;

impl InvalidationSource for AlwaysInvalidate {
    fn should_invalidate(&self) -> bool {
        true
    }
}

/// Bernoulli draw with probability `rate` per call.
///
/// The generator sits behind a mutex so one source can be shared across
/// worker threads.
#[derive(Debug)]
pub struct RandomInvalidation {
    rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomInvalidation {
    /// `seed = None` seeds from OS entropy.
    pub fn new(rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rate: rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl InvalidationSource for RandomInvalidation {
    fn should_invalidate(&self) -> bool {
        if self.rate <= 0.0 {
            return false;
        }
        self.rng.lock().gen::<f64>() < self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sources() {
        assert!(!NeverInvalidate.should_invalidate());
        assert!(AlwaysInvalidate.should_invalidate());
    }

    #[test]
    fn test_rate_bounds() {
        let never = RandomInvalidation::new(0.0, Some(1));
        let always = RandomInvalidation::new(1.0, Some(1));
        for _ in 0..1_000 {
            assert!(!never.should_invalidate());
            assert!(always.should_invalidate());
        }
        assert_eq!(RandomInvalidation::new(3.0, None).rate(), 1.0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = RandomInvalidation::new(0.5, Some(99));
        let b = RandomInvalidation::new(0.5, Some(99));
        let seq_a: Vec<bool> = (0..64).map(|_| a.should_invalidate()).collect();
        let seq_b: Vec<bool> = (0..64).map(|_| b.should_invalidate()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_observed_rate_near_configured() {
        let source = RandomInvalidation::new(0.05, None);
        let n = 100_000;
        let hits = (0..n).filter(|_| source.should_invalidate()).count();
        let fraction = hits as f64 / n as f64;
        assert!((fraction - 0.05).abs() < 0.01, "observed {}", fraction);
    }
}
