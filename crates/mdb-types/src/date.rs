use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::error::TypeError;

/// Parse a "consumed date" string into a Unix timestamp (seconds).
///
/// Accepted grammar, in order:
/// - the empty string, which normalizes to the Unix epoch,
/// - a bare `yyyy-mm-dd` calendar date, interpreted as UTC midnight,
/// - a full RFC 3339 offset timestamp.
pub fn parse_consumed_date(s: &str) -> Result<i64, TypeError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp());
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp())
        .map_err(|e| TypeError::InvalidDate {
            input: s.to_string(),
            reason: e.to_string(),
        })
}

/// Render a Unix timestamp as a `yyyy-mm-dd` calendar date (UTC).
///
/// Out-of-range timestamps fall back to the raw number.
pub fn format_unix_date(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_epoch() {
        assert_eq!(parse_consumed_date("").unwrap(), 0);
        assert_eq!(parse_consumed_date("   ").unwrap(), 0);
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        // 2021-06-01T00:00:00Z
        assert_eq!(parse_consumed_date("2021-06-01").unwrap(), 1_622_505_600);
    }

    #[test]
    fn epoch_date_parses_to_zero() {
        assert_eq!(parse_consumed_date("1970-01-01").unwrap(), 0);
    }

    #[test]
    fn rfc3339_timestamp_is_accepted() {
        assert_eq!(
            parse_consumed_date("2021-06-01T12:30:00+02:00").unwrap(),
            1_622_543_400
        );
    }

    #[test]
    fn garbage_is_rejected() {
        for input in ["tomorrow", "2021/06/01", "2021-13-01", "2021-06-32", "06-01-2021"] {
            let err = parse_consumed_date(input).unwrap_err();
            assert!(matches!(err, TypeError::InvalidDate { .. }), "accepted {input:?}");
        }
    }

    #[test]
    fn error_carries_offending_input() {
        let err = parse_consumed_date("not-a-date").unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn format_roundtrip() {
        let ts = parse_consumed_date("1999-12-31").unwrap();
        assert_eq!(format_unix_date(ts), "1999-12-31");
        assert_eq!(format_unix_date(0), "1970-01-01");
    }
}
