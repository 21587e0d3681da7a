//! Collapse records that describe the same real-world event.

use std::collections::HashSet;

use crate::types::EventRecord;

/// Remove records sharing an identity key of (lowercased title, date key).
///
/// First occurrence wins; relative order of survivors is untouched. Final
/// ordering is the synthesizer's job, not this one's.
pub fn dedupe_events(events: Vec<EventRecord>) -> Vec<EventRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    events
        .into_iter()
        .filter(|event| {
            seen.insert((event.title.to_lowercase(), event.date_key().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventStart;

    fn record(title: &str, token: Option<&str>, url: &str) -> EventRecord {
        EventRecord {
            title: title.to_string(),
            start: match token {
                Some(t) => crate::dates::coerce_datetime(t),
                None => EventStart::Unconfirmed,
            },
            raw_date_token: token.map(str::to_string),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_same_title_same_date_collapses() {
        let events = vec![
            record("Cup Final", Some("2025-06-01T15:00:00"), "https://a"),
            record("Cup Final", Some("2025-06-01T15:00:00"), "https://b"),
        ];
        let out = dedupe_events(events);
        assert_eq!(out.len(), 1);
        // First occurrence wins.
        assert_eq!(out[0].url, "https://a");
    }

    #[test]
    fn test_title_comparison_is_case_insensitive() {
        let events = vec![
            record("Cup Final", Some("2025-06-01T15:00:00"), "https://a"),
            record("CUP FINAL", Some("2025-06-01T15:00:00"), "https://b"),
        ];
        assert_eq!(dedupe_events(events).len(), 1);
    }

    #[test]
    fn test_same_title_different_date_kept() {
        let events = vec![
            record("Concert", Some("2025-06-01T20:00:00"), "https://a"),
            record("Concert", Some("2025-06-02T20:00:00"), "https://a"),
        ];
        assert_eq!(dedupe_events(events).len(), 2);
    }

    #[test]
    fn test_dateless_records_share_the_tbc_key() {
        let events = vec![
            record("Mystery Gig", None, "https://a"),
            record("Mystery Gig", None, "https://b"),
        ];
        assert_eq!(dedupe_events(events).len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let events = vec![
            record("Cup Final", Some("2025-06-01T15:00:00"), "https://a"),
            record("Concert", None, "https://b"),
            record("Cup Final", Some("2025-06-01T15:00:00"), "https://c"),
        ];
        let once = dedupe_events(events);
        let twice = dedupe_events(once.clone());
        assert_eq!(once, twice);
    }
}
