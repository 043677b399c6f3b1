//! Built-in domain lists used by the classifier.
//!
//! These are process-wide constants. [`DomainLists::default`] copies them so
//! a configuration file can extend a run's lists without touching the
//! originals.

use once_cell::sync::Lazy;

/// Consumer mailbox providers. Matched by exact domain equality.
pub const FREE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "zoho.com",
    "yandex.com",
    "mail.com",
];

/// Well-known companies. Matched by substring containment.
pub const BUSINESS_DOMAINS: &[&str] = &[
    "microsoft.com",
    "apple.com",
    "google.com",
    "amazon.com",
    "salesforce.com",
    "hubspot.com",
    "stripe.com",
    "slack.com",
    "dropbox.com",
    "atlassian.com",
];

/// Temporary / disposable mailbox providers. Matched by substring containment.
pub const RISKY_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "tempmail.org",
    "guerrillamail.com",
    "mailinator.com",
    "throwaway.email",
    "temp-mail.org",
];

/// Fragments of a local part that mark an address as suspicious.
pub const SUSPICIOUS_LOCAL_PATTERNS: &[&str] = &["test", "fake", "spam"];

/// Domain fragments that mark educational, government and non-profit domains.
pub const INSTITUTIONAL_MARKERS: &[&str] = &[".edu", ".gov", ".org"];

static DEFAULT_LISTS: Lazy<DomainLists> = Lazy::new(|| DomainLists {
    free: owned_list(FREE_EMAIL_DOMAINS),
    business: owned_list(BUSINESS_DOMAINS),
    risky: owned_list(RISKY_DOMAINS),
});

fn owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The three domain sets consulted during classification, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLists {
    pub free: Vec<String>,
    pub business: Vec<String>,
    pub risky: Vec<String>,
}

impl Default for DomainLists {
    fn default() -> Self {
        (*DEFAULT_LISTS).clone()
    }
}

impl DomainLists {
    /// Exact match against the free-provider list.
    pub fn is_free(&self, domain: &str) -> bool {
        self.free.iter().any(|d| d == domain)
    }

    /// Substring match against the business list.
    pub fn is_business(&self, domain: &str) -> bool {
        self.business.iter().any(|d| domain.contains(d.as_str()))
    }

    /// Substring match against the disposable list, so `sub.mailinator.com`
    /// is caught by `mailinator.com`.
    pub fn is_risky(&self, domain: &str) -> bool {
        self.risky.iter().any(|d| domain.contains(d.as_str()))
    }

    /// Appends entries not already present, normalized to lowercase.
    pub(crate) fn extend_unique(list: &mut Vec<String>, extra: &[String]) {
        for entry in extra {
            let normalized = entry.trim().to_lowercase();
            if !normalized.is_empty() && !list.contains(&normalized) {
                list.push(normalized);
            }
        }
    }
}
