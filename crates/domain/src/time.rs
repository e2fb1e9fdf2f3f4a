//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `fed_at`, `played_at`, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time. Default for timestamps missing from a payload.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a stored RFC 3339 timestamp, normalising any offset to UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `value` is not RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.to_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalise_offset_to_utc() {
        let ts = parse_rfc3339("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn should_roundtrip_sub_second_precision() {
        let ts = now();
        assert_eq!(parse_rfc3339(&ts.to_rfc3339()).unwrap(), ts);
    }

    #[test]
    fn should_reject_non_rfc3339_text() {
        assert!(parse_rfc3339("yesterday").is_err());
    }
}
