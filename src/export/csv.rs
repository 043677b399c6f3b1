//! CSV export of verification results.

use crate::core::config::Config;
use crate::core::models::EmailResult;

pub const CSV_HEADERS: [&str; 5] = ["Email", "Status", "Classification", "Domain", "Reason"];

/// Writes results as quoted CSV.
///
/// Every data field is wrapped in double quotes; the header is not. By
/// default field contents are passed through unchanged, so a value holding a
/// `"` or the delimiter produces a row other tools may misread. Enable
/// `escape` to double embedded quotes as RFC 4180 requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvExporter {
    pub delimiter: char,
    pub escape: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            escape: false,
        }
    }
}

impl CsvExporter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            delimiter: config.csv_delimiter,
            escape: config.escape_csv,
        }
    }

    /// Header line followed by one line per result, joined by `\n` with no
    /// trailing newline.
    pub fn export(&self, results: &[EmailResult]) -> String {
        let separator = self.delimiter.to_string();
        let mut lines = Vec::with_capacity(results.len() + 1);
        lines.push(CSV_HEADERS.join(&separator));

        for result in results {
            let fields = [
                result.email.as_str(),
                result.status.as_str(),
                result.classification.as_str(),
                result.domain.as_str(),
                result.reason.as_deref().unwrap_or(""),
            ];
            let row: Vec<String> = fields.iter().map(|f| self.quote(f)).collect();
            lines.push(row.join(&separator));
        }

        tracing::debug!(target: "export", "Serialized {} results to CSV", results.len());
        lines.join("\n")
    }

    fn quote(&self, field: &str) -> String {
        if self.escape {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            format!("\"{}\"", field)
        }
    }
}

/// Comma-separated, unescaped export.
pub fn to_csv(results: &[EmailResult]) -> String {
    CsvExporter::default().export(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Classification, EmailStatus};

    fn sample() -> EmailResult {
        EmailResult {
            email: "jane@acme.io".to_string(),
            status: EmailStatus::Valid,
            classification: Classification::HighValue,
            domain: "acme.io".to_string(),
            reason: Some("Custom business domain".to_string()),
        }
    }

    #[test]
    fn test_header_only_for_empty_input() {
        assert_eq!(to_csv(&[]), "Email,Status,Classification,Domain,Reason");
    }

    #[test]
    fn test_single_row_layout() {
        let csv = to_csv(&[sample()]);
        assert_eq!(
            csv,
            "Email,Status,Classification,Domain,Reason\n\"jane@acme.io\",\"valid\",\"high-value\",\"acme.io\",\"Custom business domain\""
        );
    }

    #[test]
    fn test_naive_split_recovers_fields() {
        let csv = to_csv(&[sample()]);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').map(|f| f.trim_matches('"')).collect();
        assert_eq!(
            fields,
            vec!["jane@acme.io", "valid", "high-value", "acme.io", "Custom business domain"]
        );
    }

    #[test]
    fn test_missing_reason_is_empty_quoted() {
        let mut result = sample();
        result.reason = None;
        let csv = to_csv(&[result]);
        assert!(csv.ends_with(",\"acme.io\",\"\""));
    }

    #[test]
    fn test_embedded_quotes_pass_through_by_default() {
        let mut result = sample();
        result.email = "a\"b@acme.io".to_string();
        let csv = to_csv(&[result]);
        assert!(csv.contains("\"a\"b@acme.io\""));
    }

    #[test]
    fn test_escaping_doubles_quotes() {
        let mut result = sample();
        result.email = "a\"b@acme.io".to_string();
        let exporter = CsvExporter {
            escape: true,
            ..CsvExporter::default()
        };
        assert!(exporter.export(&[result]).contains("\"a\"\"b@acme.io\""));
    }

    #[test]
    fn test_custom_delimiter() {
        let exporter = CsvExporter {
            delimiter: ';',
            escape: false,
        };
        let csv = exporter.export(&[sample()]);
        assert!(csv.starts_with("Email;Status;Classification;Domain;Reason\n"));
        assert!(csv.contains("\"jane@acme.io\";\"valid\""));
    }

    #[test]
    fn test_no_trailing_newline() {
        let csv = to_csv(&[sample(), sample()]);
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.ends_with('\n'));
    }
}
