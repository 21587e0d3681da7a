//! End-to-end feed build: markup in, calendar document out.

use chrono::{NaiveDate, Utc};
use scraper::Html;
use tracing::{debug, info};

use crate::config::FeedConfig;
use crate::dedupe::dedupe_events;
use crate::extract::{fallback_cards, structured_events};
use crate::ics::build_calendar;

/// Result of one feed build.
#[derive(Debug, Clone)]
pub struct FeedOutput {
    /// The complete VCALENDAR document.
    pub document: String,
    /// Events that made it into the document after deduplication.
    pub event_count: usize,
}

/// Build the feed from raw markup, dating TBC placeholders to today.
pub fn build_feed(html: &str, config: &FeedConfig) -> FeedOutput {
    build_feed_at(html, config, Utc::now().date_naive())
}

/// Same as [`build_feed`] but with an explicit build date, so output is
/// fully deterministic.
pub fn build_feed_at(html: &str, config: &FeedConfig, today: NaiveDate) -> FeedOutput {
    let document = Html::parse_document(html);

    let mut events = structured_events(&document, config);
    if events.is_empty() {
        debug!("no structured events, trying card fallback");
        events = fallback_cards(&document, config);
    }
    let events = dedupe_events(events);
    info!(events = events.len(), "feed build complete");

    FeedOutput {
        document: build_calendar(&events, config, today),
        event_count: events.len(),
    }
}
