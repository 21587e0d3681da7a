//! Date coercion: turn whatever date text the page carries into a precise
//! local timestamp, or into [`EventStart::Unconfirmed`] when it can't be one.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::types::EventStart;

/// Combined date-and-time formats without an offset, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M",
    "%d %B %Y %H:%M",
];

/// Date-only formats. These parse, but a bare date is no use for a timed
/// calendar entry, so they coerce to Unconfirmed just like a TBC marker.
const DATE_ONLY_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%Y-%m-%d"];

lazy_static! {
    static ref TBC_REGEX: Regex = Regex::new(r"(?i)\b(TBC|TBA)\b").unwrap();
}

/// Coerce a date token into an [`EventStart`].
///
/// Offset-carrying tokens (RFC 3339) are resolved to UTC once, then the
/// offset is dropped: the feed renders every timestamp against a single
/// TZID, so the clock value is all that survives. Tokens matching nothing
/// in the accepted set degrade to Unconfirmed rather than erroring.
pub fn coerce_datetime(token: &str) -> EventStart {
    let token = token.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return EventStart::At(dt.with_timezone(&Utc).naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(token, format) {
            return EventStart::At(dt);
        }
    }

    for format in DATE_ONLY_FORMATS {
        if NaiveDate::parse_from_str(token, format).is_ok() {
            return EventStart::Unconfirmed;
        }
    }

    if TBC_REGEX.is_match(token) {
        return EventStart::Unconfirmed;
    }

    EventStart::Unconfirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> EventStart {
        EventStart::At(
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap(),
        )
    }

    #[test]
    fn test_iso_datetime() {
        assert_eq!(
            coerce_datetime("2025-06-01T15:00:00"),
            at(2025, 6, 1, 15, 0, 0)
        );
    }

    #[test]
    fn test_iso_datetime_no_seconds() {
        assert_eq!(coerce_datetime("2025-06-01T15:00"), at(2025, 6, 1, 15, 0, 0));
    }

    #[test]
    fn test_space_separated_datetime() {
        assert_eq!(
            coerce_datetime("2025-06-01 15:00"),
            at(2025, 6, 1, 15, 0, 0)
        );
    }

    #[test]
    fn test_human_datetime_abbreviated_month() {
        assert_eq!(
            coerce_datetime("9 Oct 2025 19:45"),
            at(2025, 10, 9, 19, 45, 0)
        );
    }

    #[test]
    fn test_human_datetime_full_month() {
        assert_eq!(
            coerce_datetime("9 October 2025 19:45"),
            at(2025, 10, 9, 19, 45, 0)
        );
    }

    #[test]
    fn test_offset_is_resolved_to_utc_then_dropped() {
        // 19:45 at +01:00 is 18:45 UTC; the clock value kept is the UTC one.
        assert_eq!(
            coerce_datetime("2025-06-01T19:45:00+01:00"),
            at(2025, 6, 1, 18, 45, 0)
        );
        assert_eq!(
            coerce_datetime("2025-06-01T19:45:00Z"),
            at(2025, 6, 1, 19, 45, 0)
        );
    }

    #[test]
    fn test_bare_dates_are_unconfirmed() {
        assert_eq!(coerce_datetime("9 Oct 2025"), EventStart::Unconfirmed);
        assert_eq!(coerce_datetime("9 October 2025"), EventStart::Unconfirmed);
        assert_eq!(coerce_datetime("2025-10-09"), EventStart::Unconfirmed);
    }

    #[test]
    fn test_tbc_and_tba_markers() {
        assert_eq!(coerce_datetime("TBC"), EventStart::Unconfirmed);
        assert_eq!(coerce_datetime("Date tba"), EventStart::Unconfirmed);
        assert_eq!(coerce_datetime("Kick-off TBC "), EventStart::Unconfirmed);
    }

    #[test]
    fn test_garbage_is_unconfirmed_not_an_error() {
        assert_eq!(coerce_datetime(""), EventStart::Unconfirmed);
        assert_eq!(coerce_datetime("next Tuesday"), EventStart::Unconfirmed);
        assert_eq!(coerce_datetime("{\"not\":\"a date\"}"), EventStart::Unconfirmed);
    }

    #[test]
    fn test_trailing_text_does_not_parse() {
        // Formats must consume the whole token.
        assert_eq!(
            coerce_datetime("2025-06-01T15:00:00 doors"),
            EventStart::Unconfirmed
        );
    }
}
