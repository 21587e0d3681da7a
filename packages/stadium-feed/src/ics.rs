//! iCalendar synthesis: deterministic ordering, stable UIDs, and the
//! VCALENDAR envelope.
//!
//! Output is plain RFC 5545 text with `\n` separators throughout. Timed
//! entries span a fixed two hours and carry the feed's TZID; entries
//! without a known start render as all-day placeholders on the build date
//! so subscribers still see that something is coming.

use chrono::{Days, NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};

use crate::config::FeedConfig;
use crate::types::{EventRecord, EventStart};

/// DTSTART/DTEND clock format used with a TZID qualifier.
const DT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Fixed duration for timed entries. The source page never carries an end
/// time.
const EVENT_HOURS: i64 = 2;

/// Escape text per RFC 5545: backslash first, then newline, comma,
/// semicolon.
pub fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Deterministic UID for an event.
///
/// Hashes `title|start|salt` (start in ISO form, or the literal "TBC") so
/// rebuilding the feed from unchanged source reproduces the same UID and
/// calendar clients treat the entry as the same event.
pub fn stable_uid(event: &EventRecord, config: &FeedConfig) -> String {
    let date_part = match &event.start {
        EventStart::At(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        EventStart::Unconfirmed => "TBC".to_string(),
    };
    let seed = format!("{}|{}|{}", event.title, date_part, config.uid_salt);
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    format!("{:x}@{}", hasher.finalize(), config.uid_domain)
}

fn vevent(event: &EventRecord, config: &FeedConfig, today: NaiveDate) -> String {
    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", stable_uid(event, config)),
        format!("SUMMARY:{}", escape_text(&event.title)),
    ];
    match &event.start {
        EventStart::At(start) => {
            let end = *start + chrono::Duration::hours(EVENT_HOURS);
            lines.push(format!(
                "DTSTART;TZID={}:{}",
                config.timezone,
                start.format(DT_FORMAT)
            ));
            lines.push(format!(
                "DTEND;TZID={}:{}",
                config.timezone,
                end.format(DT_FORMAT)
            ));
        }
        EventStart::Unconfirmed => {
            // All-day placeholder on the build date; the next build picks
            // up the real time once the page announces it.
            let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
            lines.push(format!("DTSTART;VALUE=DATE:{}", today.format("%Y%m%d")));
            lines.push(format!("DTEND;VALUE=DATE:{}", tomorrow.format("%Y%m%d")));
            lines.push("CATEGORIES:TBC".to_string());
        }
    }
    lines.push(format!("URL:{}", event.url));
    if event.is_unconfirmed() {
        lines.push("DESCRIPTION:Time TBC—check event page for updates.".to_string());
    }
    lines.push("END:VEVENT".to_string());
    lines.join("\n")
}

/// Serialize the full calendar document.
///
/// Records are ordered ascending by start; unconfirmed records sort after
/// every dated one. The ordering depends only on the records themselves,
/// never on input order, so identical input sets always yield identical
/// documents.
pub fn build_calendar(
    events: &[EventRecord],
    config: &FeedConfig,
    today: NaiveDate,
) -> String {
    let mut ordered: Vec<&EventRecord> = events.iter().collect();
    ordered.sort_by_key(|event| {
        (
            event.start.as_datetime().unwrap_or(NaiveDateTime::MAX),
            event.title.clone(),
        )
    });

    let mut body = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//Wembley Auto Feed//EN".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(&config.calendar_name)),
        "CALSCALE:GREGORIAN".to_string(),
        format!("X-WR-TIMEZONE:{}", config.timezone),
        "METHOD:PUBLISH".to_string(),
    ];
    for event in ordered {
        body.push(vevent(event, config, today));
    }
    body.push("END:VCALENDAR".to_string());
    body.join("\n")
}
