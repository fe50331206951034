//! Raw payload shapes
//!
//! Splits a textual payload into positioned JSON values. No facility semantics
//! live here; see [`super::load_facilities`] for that.

use crate::domain::{RecordPosition, Result, SentinelError};
use serde_json::Value;

/// One element of a payload before facility validation
#[derive(Debug, Clone)]
pub(crate) struct RawRecord {
    pub position: RecordPosition,
    pub parsed: std::result::Result<Value, String>,
}

/// Parses a payload holding a single JSON array
///
/// Any syntax error, or a top-level value other than an array, rejects the whole
/// payload.
pub(crate) fn parse_array(text: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| SentinelError::MalformedPayload(format!("invalid JSON array: {e}")))?;

    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(i, item)| RawRecord {
                position: RecordPosition::Index(i),
                parsed: Ok(item),
            })
            .collect()),
        _ => Err(SentinelError::MalformedPayload(
            "expected a JSON array at the top level".to_string(),
        )),
    }
}

/// Parses a newline-delimited JSON payload
///
/// Blank lines are ignored. Lines that are not valid JSON become per-record
/// failures, unless no line parses at all, in which case the payload is rejected.
pub(crate) fn parse_lines(text: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut parsed_any = false;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parsed = serde_json::from_str::<Value>(trimmed).map_err(|e| e.to_string());
        parsed_any |= parsed.is_ok();
        records.push(RawRecord {
            position: RecordPosition::Line(idx + 1),
            parsed,
        });
    }

    if !records.is_empty() && !parsed_any {
        let first = records
            .first()
            .and_then(|r| r.parsed.as_ref().err().map(|e| format!("{}: {e}", r.position)))
            .unwrap_or_default();
        return Err(SentinelError::MalformedPayload(format!(
            "none of {} non-blank lines is valid JSON (first failure at {first})",
            records.len()
        )));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_positions() {
        let records = parse_array(r#"[{"a": 1}, {"b": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].position, RecordPosition::Index(1));
        assert!(records.iter().all(|r| r.parsed.is_ok()));
    }

    #[test]
    fn test_parse_array_rejects_object() {
        let err = parse_array(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, SentinelError::MalformedPayload(_)));
    }

    #[test]
    fn test_parse_array_rejects_truncated() {
        assert!(parse_array(r#"[{"a": 1}, "#).is_err());
    }

    #[test]
    fn test_parse_lines_skips_blank_lines() {
        let records = parse_lines("{\"a\": 1}\n\n   \n{\"b\": 2}\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position, RecordPosition::Line(1));
        assert_eq!(records[1].position, RecordPosition::Line(4));
    }

    #[test]
    fn test_parse_lines_keeps_bad_lines_as_failures() {
        let records = parse_lines("{\"a\": 1}\nnot json\n").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].parsed.is_err());
        assert_eq!(records[1].position, RecordPosition::Line(2));
    }

    #[test]
    fn test_parse_lines_all_bad_is_malformed() {
        let err = parse_lines("garbage\nmore garbage\n").unwrap_err();
        assert!(matches!(err, SentinelError::MalformedPayload(ref m) if m.contains("line 1")));
    }

    #[test]
    fn test_parse_lines_crlf() {
        let records = parse_lines("{\"a\": 1}\r\n{\"b\": 2}\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.parsed.is_ok()));
    }
}
