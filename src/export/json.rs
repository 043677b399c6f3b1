//! JSON export of verification results.

use crate::core::error::Result;
use crate::core::models::EmailResult;

/// Pretty-printed JSON array of results.
pub fn to_json(results: &[EmailResult]) -> Result<String> {
    let json = serde_json::to_string_pretty(results)?;
    tracing::debug!(target: "export", "Serialized {} results to JSON", results.len());
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Classification, EmailStatus};

    #[test]
    fn test_json_array() {
        let results = vec![EmailResult {
            email: "x@gmail.com".to_string(),
            status: EmailStatus::Valid,
            classification: Classification::LowValue,
            domain: "gmail.com".to_string(),
            reason: Some("Free email provider".to_string()),
        }];
        let json = to_json(&results).unwrap();
        let parsed: Vec<EmailResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);
        assert!(json.contains("\"low-value\""));
    }

    #[test]
    fn test_empty_json_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
