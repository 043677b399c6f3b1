//! Turns raw uploaded text into the list of candidate addresses.

use std::borrow::Cow;
use std::collections::HashSet;

const BOM: char = '\u{FEFF}';

/// Decodes raw input bytes, replacing invalid UTF-8 with U+FFFD and dropping
/// a leading byte-order mark.
pub fn decode_input(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        tracing::warn!(
            target: "ingest",
            "Input is not valid UTF-8; undecodable bytes were replaced with U+FFFD"
        );
    }
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// Trims whitespace and U+FEFF from both ends.
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Extracts candidate addresses from CSV-like text.
///
/// Every line is split on `delimiter`; each token is trimmed and stripped of
/// all `'` and `"` characters, and kept if it contains `@`. Column layout is
/// irrelevant, so headers and non-address columns simply fall away.
/// Duplicates are removed, keeping the first occurrence.
pub fn parse_csv_emails(text: &str, delimiter: char) -> Vec<String> {
    let mut seen = HashSet::new();
    let emails: Vec<String> = text
        .split('\n')
        .flat_map(|line| line.split(delimiter))
        .map(|token| trim_token(token).replace(['\'', '"'], ""))
        .filter(|token| token.contains('@'))
        .filter(|token| seen.insert(token.clone()))
        .collect();

    tracing::debug!(target: "ingest", "Parsed {} unique candidate emails from CSV input", emails.len());
    emails
}

/// Extracts addresses typed one per line. Blank lines and lines without `@`
/// are dropped; duplicates are kept.
pub fn parse_manual_emails(text: &str) -> Vec<String> {
    let emails: Vec<String> = text
        .split('\n')
        .map(trim_token)
        .filter(|line| !line.is_empty() && line.contains('@'))
        .map(str::to_string)
        .collect();

    tracing::debug!(target: "ingest", "Parsed {} manually entered emails", emails.len());
    emails
}
