//! Pulls the labeled location/purpose lines out of a model summary.

use crate::core::models::SummaryFields;
use crate::errors::BotError;
use crate::prompt::{LOCATION_PREFIX, PURPOSE_PREFIX};

/// Scans `summary` line by line for the exact template prefixes.
///
/// Matching is literal and case-sensitive; the remainder of a matching line is
/// trimmed at both ends. A later matching line overwrites an earlier one. Fields
/// that never match stay empty.
#[must_use]
pub fn extract_fields(summary: &str) -> SummaryFields {
    let mut fields = SummaryFields::default();

    for line in summary.split('\n') {
        if let Some(rest) = line.strip_prefix(LOCATION_PREFIX) {
            fields.location = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(PURPOSE_PREFIX) {
            fields.purpose = rest.trim().to_string();
        }
    }

    fields
}

/// Like [`extract_fields`], but fails when either field came out empty.
pub fn require_fields(summary: &str) -> Result<SummaryFields, BotError> {
    let fields = extract_fields(summary);
    if fields.is_complete() {
        Ok(fields)
    } else {
        Err(BotError::MissingFields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let fields = extract_fields("1. 장소: 홍대\r\n2. 목적: 술집\r\n");
        assert_eq!(fields.location, "홍대");
        assert_eq!(fields.purpose, "술집");
    }

    #[test]
    fn indented_label_does_not_match() {
        let fields = extract_fields("  1. 장소: 홍대\n2. 목적: 술집");
        assert!(fields.location.is_empty());
        assert_eq!(fields.purpose, "술집");
    }

    #[test]
    fn label_with_blank_value_counts_as_missing() {
        assert!(matches!(
            require_fields("1. 장소:   \n2. 목적: 맛집"),
            Err(BotError::MissingFields)
        ));
    }
}
