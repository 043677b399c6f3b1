//! Rule chain that maps one raw address to a classified result.
//!
//! The rules run in a fixed order and the first match wins:
//!
//! 1. shape check (`local@domain.tld`)
//! 2. disposable domain
//! 3. suspicious local part
//! 4. domain-based lead classification
//!
//! Rules 1-3 produce a final [`Verdict::Rejected`]. Rule 4 produces a
//! [`Verdict::Classified`] result, which is the only kind later eligible for
//! simulated invalidation (see [`super::invalidation`]).

use crate::core::config::Config;
use crate::core::domains::{DomainLists, INSTITUTIONAL_MARKERS};
use crate::core::models::{Classification, EmailResult, EmailStatus};
use regex::Regex;

pub mod reasons {
    pub const INVALID_FORMAT: &str = "Invalid email format";
    pub const DISPOSABLE_DOMAIN: &str = "Temporary/disposable email domain";
    pub const SUSPICIOUS_PATTERN: &str = "Suspicious email pattern";
    pub const CORPORATE_DOMAIN: &str = "Corporate/business domain";
    pub const FREE_PROVIDER: &str = "Free email provider";
    pub const INSTITUTIONAL_DOMAIN: &str = "Educational/government/organization domain";
    pub const CUSTOM_DOMAIN: &str = "Custom business domain";
    pub const STANDARD_DOMAIN: &str = "Standard email domain";
    pub const DOMAIN_NOT_FOUND: &str = "Domain does not exist";
}

/// Outcome of the deterministic rules for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Stopped by the format, disposable or suspicious-pattern rule.
    Rejected(EmailResult),
    /// Passed the rejection rules and was classified by domain.
    Classified(EmailResult),
}

impl Verdict {
    pub fn result(&self) -> &EmailResult {
        match self {
            Verdict::Rejected(r) | Verdict::Classified(r) => r,
        }
    }

    pub fn into_result(self) -> EmailResult {
        match self {
            Verdict::Rejected(r) | Verdict::Classified(r) => r,
        }
    }
}

/// Stateless classifier. Cloning is cheap enough to hand one to each worker.
#[derive(Debug, Clone)]
pub struct Classifier {
    domains: DomainLists,
    suspicious_patterns: Vec<String>,
    email_regex: Regex,
}

impl Classifier {
    pub fn new(config: &Config) -> Self {
        Self {
            domains: config.domains.clone(),
            suspicious_patterns: config.suspicious_patterns.clone(),
            email_regex: config.email_regex.clone(),
        }
    }

    /// Applies the rule chain to `email`. Never fails and has no side effects.
    pub fn classify(&self, email: &str) -> Verdict {
        let domain = extract_domain(email);
        let local_part = email.split('@').next().unwrap_or_default();

        if !self.email_regex.is_match(email) {
            return Verdict::Rejected(EmailResult::new(
                email,
                &domain,
                EmailStatus::Invalid,
                Classification::LowValue,
                reasons::INVALID_FORMAT,
            ));
        }

        if self.domains.is_risky(&domain) {
            return Verdict::Rejected(EmailResult::new(
                email,
                &domain,
                EmailStatus::Risky,
                Classification::LowValue,
                reasons::DISPOSABLE_DOMAIN,
            ));
        }

        if self
            .suspicious_patterns
            .iter()
            .any(|p| local_part.contains(p.as_str()))
        {
            return Verdict::Rejected(EmailResult::new(
                email,
                &domain,
                EmailStatus::Risky,
                Classification::LowValue,
                reasons::SUSPICIOUS_PATTERN,
            ));
        }

        let (classification, reason) = self.classify_domain(&domain);
        Verdict::Classified(EmailResult::new(
            email,
            &domain,
            EmailStatus::Valid,
            classification,
            reason,
        ))
    }

    fn classify_domain(&self, domain: &str) -> (Classification, &'static str) {
        if self.domains.is_business(domain) {
            (Classification::HighValue, reasons::CORPORATE_DOMAIN)
        } else if self.domains.is_free(domain) {
            (Classification::LowValue, reasons::FREE_PROVIDER)
        } else if INSTITUTIONAL_MARKERS.iter().any(|m| domain.contains(m)) {
            (Classification::HighValue, reasons::INSTITUTIONAL_DOMAIN)
        } else if domain.contains('.') {
            (Classification::HighValue, reasons::CUSTOM_DOMAIN)
        } else {
            // Any address that passed the shape check has a dot in its domain,
            // so this arm only matters if the pattern is loosened.
            (Classification::Standard, reasons::STANDARD_DOMAIN)
        }
    }
}

/// Lowercased text between the first and second `@`, or empty.
pub fn extract_domain(email: &str) -> String {
    email
        .split('@')
        .nth(1)
        .map(str::to_lowercase)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> Classifier {
        Classifier::new(&Config::default())
    }

    fn check(email: &str, status: EmailStatus, class: Classification, reason: &str) {
        let result = classifier().classify(email).into_result();
        assert_eq!(result.email, email);
        assert_eq!(result.status, status, "status for {}", email);
        assert_eq!(result.classification, class, "classification for {}", email);
        assert_eq!(result.reason.as_deref(), Some(reason), "reason for {}", email);
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("User@GMAIL.com"), "gmail.com");
        assert_eq!(extract_domain("no-at-sign"), "");
        assert_eq!(extract_domain("a@b@c.com"), "b");
        assert_eq!(extract_domain("trailing@"), "");
    }

    #[test]
    fn test_invalid_formats() {
        for email in ["", "plain", "a@b", "@b.com", "a@.com.", "a b@c.com", "a@b@c.com", "a@b."] {
            let verdict = classifier().classify(email);
            assert!(matches!(verdict, Verdict::Rejected(_)), "{}", email);
            let result = verdict.into_result();
            assert_eq!(result.status, EmailStatus::Invalid, "{}", email);
            assert_eq!(result.classification, Classification::LowValue);
            assert_eq!(result.reason.as_deref(), Some(reasons::INVALID_FORMAT));
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        for email in ["a\u{FEFF}b@acme.io", "\u{FEFF}a@acme.io", "a@acme.io\u{FEFF}"] {
            let result = classifier().classify(email).into_result();
            assert_eq!(result.status, EmailStatus::Invalid, "{:?}", email);
            assert_eq!(result.reason.as_deref(), Some(reasons::INVALID_FORMAT));
        }
    }

    #[test]
    fn test_invalid_format_keeps_domain() {
        let result = classifier().classify("someone@Localhost").into_result();
        assert_eq!(result.domain, "localhost");
        assert_eq!(result.status, EmailStatus::Invalid);
    }

    #[test]
    fn test_disposable_domain_substring() {
        check(
            "foo@sub.mailinator.com",
            EmailStatus::Risky,
            Classification::LowValue,
            reasons::DISPOSABLE_DOMAIN,
        );
        check(
            "jane@TempMail.org",
            EmailStatus::Risky,
            Classification::LowValue,
            reasons::DISPOSABLE_DOMAIN,
        );
    }

    #[test]
    fn test_disposable_beats_suspicious() {
        check(
            "test@mailinator.com",
            EmailStatus::Risky,
            Classification::LowValue,
            reasons::DISPOSABLE_DOMAIN,
        );
    }

    #[test]
    fn test_suspicious_local_part_is_case_sensitive() {
        check(
            "my-test-box@acme.io",
            EmailStatus::Risky,
            Classification::LowValue,
            reasons::SUSPICIOUS_PATTERN,
        );
        check(
            "spammer@gmail.com",
            EmailStatus::Risky,
            Classification::LowValue,
            reasons::SUSPICIOUS_PATTERN,
        );
        check(
            "TEST@acme.io",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::CUSTOM_DOMAIN,
        );
    }

    #[test]
    fn test_suspicious_only_checks_local_part() {
        check(
            "jane@fake-corp.com",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::CUSTOM_DOMAIN,
        );
    }

    #[test]
    fn test_domain_classification() {
        check(
            "sam@microsoft.com",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::CORPORATE_DOMAIN,
        );
        check(
            "sam@gmail.com",
            EmailStatus::Valid,
            Classification::LowValue,
            reasons::FREE_PROVIDER,
        );
        check(
            "prof@mit.edu",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::INSTITUTIONAL_DOMAIN,
        );
        check(
            "info@redcross.org",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::INSTITUTIONAL_DOMAIN,
        );
        check(
            "ceo@acme.io",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::CUSTOM_DOMAIN,
        );
    }

    #[test]
    fn test_business_beats_free() {
        // mail.google.com contains google.com
        check(
            "x@mail.google.com",
            EmailStatus::Valid,
            Classification::HighValue,
            reasons::CORPORATE_DOMAIN,
        );
    }

    #[test]
    fn test_domain_lowercasing() {
        let a = classifier().classify("User@GMAIL.com").into_result();
        let b = classifier().classify("user@gmail.com").into_result();
        assert_eq!(a.status, b.status);
        assert_eq!(a.classification, Classification::LowValue);
        assert_eq!(a.classification, b.classification);
        assert_eq!(a.reason, b.reason);
        assert_eq!(a.reason.as_deref(), Some(reasons::FREE_PROVIDER));
        assert_eq!(a.email, "User@GMAIL.com");
    }

    #[test]
    fn test_standard_fallback_with_loosened_pattern() {
        let mut config = Config::default();
        config.email_regex = Regex::new(r"^[^\s@]+@[^\s@]+$").unwrap();
        let result = Classifier::new(&config).classify("root@localhost").into_result();
        assert_eq!(result.classification, Classification::Standard);
        assert_eq!(result.reason.as_deref(), Some(reasons::STANDARD_DOMAIN));
    }

    proptest! {
        #[test]
        fn prop_no_at_sign_is_invalid(s in "[^@]*") {
            let verdict = classifier().classify(&s);
            prop_assert!(matches!(verdict, Verdict::Rejected(_)));
            prop_assert_eq!(verdict.result().status, EmailStatus::Invalid);
            prop_assert_eq!(verdict.result().domain.as_str(), "");
        }

        #[test]
        fn prop_classification_is_deterministic(s in "\\PC{0,40}") {
            let c = classifier();
            prop_assert_eq!(c.classify(&s), c.classify(&s));
        }
    }
}
