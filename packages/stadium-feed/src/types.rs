use chrono::NaiveDateTime;

/// When an event starts, as far as the source page tells us.
///
/// Modeled as a tagged variant rather than an `Option` field so that
/// downstream code has to say what it does with an unconfirmed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStart {
    /// Precise local timestamp in the feed's timezone, offset already
    /// normalized away.
    At(NaiveDateTime),
    /// Date unknown or marked TBC/TBA on the page.
    Unconfirmed,
}

impl EventStart {
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            EventStart::At(dt) => Some(*dt),
            EventStart::Unconfirmed => None,
        }
    }
}

/// One event scraped from the page, the interchange type for the whole
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Entity-decoded, never empty (empty-title candidates are dropped
    /// at extraction).
    pub title: String,
    pub start: EventStart,
    /// Date text exactly as it appeared in the source. Kept even when
    /// parsing failed, so deduplication can still key on it.
    pub raw_date_token: Option<String>,
    /// Absolute link to the event detail page, or the listing page when
    /// the source had none.
    pub url: String,
}

impl EventRecord {
    pub fn is_unconfirmed(&self) -> bool {
        matches!(self.start, EventStart::Unconfirmed)
    }

    /// Deduplication key component for the date: the source token as
    /// written, or a literal marker when there was none.
    pub fn date_key(&self) -> &str {
        match self.raw_date_token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => "tbc",
        }
    }
}
