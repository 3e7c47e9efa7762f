//! Identifier and payload parsing.

use chrono::{DateTime, Utc};

/// Length of the timestamp prefix of an object id, in hex digits.
const OBJECT_ID_TIMESTAMP_LEN: usize = 8;

/// Creation time embedded in a 12-byte object id.
///
/// The first eight hex digits are the Unix time in seconds.
#[must_use]
pub fn date_from_object_id(object_id: &str) -> Option<DateTime<Utc>> {
    let prefix = object_id.get(..OBJECT_ID_TIMESTAMP_LEN)?;
    if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let seconds = i64::from_str_radix(prefix, 16).ok()?;
    DateTime::from_timestamp(seconds, 0)
}

/// Strips a `\suffix` from a GUID, as in `{guid}\0001`.
///
/// A backslash in the first position is left alone.
#[must_use]
pub fn only_guid(uuid: &str) -> &str {
    match uuid.find('\\') {
        Some(pos) if pos > 0 => &uuid[..pos],
        _ => uuid,
    }
}

/// Parses JSON, returning `None` instead of an error.
#[must_use]
pub fn parse_json_safely(raw: &str) -> Option<serde_json::Value> {
    serde_json::from_str(raw)
        .inspect_err(|e| tracing::debug!(error = %e, "discarding malformed JSON"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_timestamp() {
        let date = date_from_object_id("5f1d7b2c9d8e4a0012345678").map(|d| d.timestamp());
        assert_eq!(date, Some(0x5f1d_7b2c));
    }

    #[test]
    fn object_id_rejects_short_or_non_hex() {
        assert!(date_from_object_id("5f1d7b").is_none());
        assert!(date_from_object_id("zzzzzzzz0000").is_none());
    }

    #[test]
    fn guid_suffix_is_stripped() {
        assert_eq!(only_guid("{1234-abcd}\\0001"), "{1234-abcd}");
        assert_eq!(only_guid("{1234-abcd}"), "{1234-abcd}");
        assert_eq!(only_guid("\\leading"), "\\leading");
    }

    #[test]
    fn json_parses_or_yields_none() {
        let value = parse_json_safely(r#"{"a": [1, 2]}"#);
        assert_eq!(value.and_then(|v| v["a"].as_array().map(Vec::len)), Some(2));
        assert!(parse_json_safely("{not json").is_none());
    }
}
