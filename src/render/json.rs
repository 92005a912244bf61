//! JSON rendering of the logical document tree.
//!
//! A structural dump for inspection and downstream tooling; the primary
//! output format is HTML.

use crate::error::{Error, Result};
use crate::model::LogicalDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a logical document to JSON.
pub fn to_json(doc: &LogicalDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogicalBlock, LogicalPage, Role};

    fn sample_doc() -> LogicalDocument {
        LogicalDocument::new(vec![LogicalPage::new(
            1,
            vec![LogicalBlock::new(Role::Header, "HEADING")],
        )])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_doc(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"role\""));
        assert!(json.contains("header"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_doc(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_round_trips_through_model() {
        let json = to_json(&sample_doc(), JsonFormat::Compact).unwrap();
        let parsed: LogicalDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_doc());
    }
}
