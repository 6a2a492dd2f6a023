//! Decoding the narrative generator's JSON output.
//!
//! The generator is an opaque collaborator. Its text is trusted for shape
//! only: every numeric or cipher fact in it is replaced during merge.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ReportError;

/// Remove Markdown code fences the generator sometimes wraps JSON in.
pub fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```") {
        // drop the info string ("json", "JSON", ...) up to the first newline
        s = match rest.find('\n') {
            Some(nl) => &rest[nl + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        };
    }
    if let Some(rest) = s.trim_end().strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// Parse generator output into a narrative type.
pub fn parse_narrative<T: DeserializeOwned>(text: &str) -> Result<T, ReportError> {
    let clean = strip_code_fences(text);
    if clean.is_empty() {
        return Err(ReportError::EmptyResponse);
    }
    serde_json::from_str(clean).map_err(|e| {
        warn!(error = %e, "narrative output is not valid JSON");
        ReportError::Format(e)
    })
}

/// Decode a number slot that the merge overwrites with a computed value.
///
/// Anything other than a non-negative integer (`"11/2"`, `null`, `6.0`)
/// decodes as 0 instead of failing the whole narrative.
pub(crate) fn overwritten_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
        Some(n) => Ok(n),
        None => {
            debug!(%value, "non-integer narrative number, decoding as 0");
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_untouched() {
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn json_fence_removed() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn bare_fence_removed() {
        let text = "```\n[1, 2]\n```\n";
        assert_eq!(strip_code_fences(text), "[1, 2]");
    }

    #[test]
    fn single_line_fence_removed() {
        assert_eq!(strip_code_fences("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn parse_fenced_value() {
        let v: Value = parse_narrative("```json\n{\"a\": [1, 2]}\n```").unwrap();
        assert_eq!(v["a"][1], 2);
    }

    #[test]
    fn empty_is_error() {
        assert!(matches!(
            parse_narrative::<Value>("  ```json\n```  "),
            Err(ReportError::EmptyResponse)
        ));
    }

    #[test]
    fn garbage_is_format_error() {
        assert!(matches!(
            parse_narrative::<Value>("The oracle is silent."),
            Err(ReportError::Format(_))
        ));
    }

    #[derive(Debug, Default, serde::Deserialize)]
    #[serde(default)]
    struct Slot {
        #[serde(deserialize_with = "overwritten_number")]
        n: u32,
    }

    #[test]
    fn overwritten_number_tolerates_junk() {
        for text in [r#"{"n": "11/2"}"#, r#"{"n": null}"#, r#"{"n": 6.0}"#, r#"{"n": -3}"#, "{}"] {
            let slot: Slot = parse_narrative(text).unwrap();
            assert_eq!(slot.n, 0, "{text}");
        }
        let slot: Slot = parse_narrative(r#"{"n": 22}"#).unwrap();
        assert_eq!(slot.n, 22);
    }
}
