//! Defines the core data structures produced by verification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deliverability verdict for a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Valid,
    Invalid,
    Risky,
}

impl EmailStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Valid => "valid",
            EmailStatus::Invalid => "invalid",
            EmailStatus::Risky => "risky",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated lead value of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    HighValue,
    Standard,
    LowValue,
}

impl Classification {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Classification::HighValue => "high-value",
            Classification::Standard => "standard",
            Classification::LowValue => "low-value",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of verifying one input string.
///
/// `email` is always the input exactly as received; `domain` is the
/// lowercased text after the first `@` (empty when there is none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailResult {
    pub email: String,
    pub status: EmailStatus,
    pub classification: Classification,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

impl EmailResult {
    pub(crate) fn new(
        email: &str,
        domain: &str,
        status: EmailStatus,
        classification: Classification,
        reason: &str,
    ) -> Self {
        Self {
            email: email.to_string(),
            status,
            classification,
            domain: domain.to_string(),
            reason: Some(reason.to_string()),
        }
    }
}

/// Aggregate counts over one batch of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub risky: usize,
    pub high_value: usize,
}

impl VerificationSummary {
    pub fn from_results(results: &[EmailResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                EmailStatus::Valid => acc.valid += 1,
                EmailStatus::Invalid => acc.invalid += 1,
                EmailStatus::Risky => acc.risky += 1,
            }
            if r.classification == Classification::HighValue {
                acc.high_value += 1;
            }
            acc
        })
    }

    /// Percentage of valid results, 0.0 for an empty batch.
    pub fn valid_percentage(&self) -> f64 {
        percentage(self.valid, self.total)
    }

    /// Percentage of high-value results, 0.0 for an empty batch.
    pub fn high_value_percentage(&self) -> f64 {
        percentage(self.high_value, self.total)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

impl fmt::Display for VerificationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total processed: {} | Valid: {} ({:.1}%) | Invalid/Risky: {} ({} invalid, {} risky) | High value: {} ({:.1}%)",
            self.total,
            self.valid,
            self.valid_percentage(),
            self.invalid + self.risky,
            self.invalid,
            self.risky,
            self.high_value,
            self.high_value_percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: EmailStatus, classification: Classification) -> EmailResult {
        EmailResult::new("a@b.com", "b.com", status, classification, "x")
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            result(EmailStatus::Valid, Classification::HighValue),
            result(EmailStatus::Valid, Classification::LowValue),
            result(EmailStatus::Invalid, Classification::LowValue),
            result(EmailStatus::Risky, Classification::LowValue),
        ];
        let summary = VerificationSummary::from_results(&results);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.risky, 1);
        assert_eq!(summary.high_value, 1);
        assert!((summary.valid_percentage() - 50.0).abs() < f64::EPSILON);
        assert!((summary.high_value_percentage() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary_has_zero_percentages() {
        let summary = VerificationSummary::from_results(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.valid_percentage(), 0.0);
        assert_eq!(summary.high_value_percentage(), 0.0);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&result(EmailStatus::Risky, Classification::HighValue))
            .unwrap();
        assert!(json.contains("\"status\":\"risky\""));
        assert!(json.contains("\"classification\":\"high-value\""));
    }
}
