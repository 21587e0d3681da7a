//! Stadium events → iCalendar feed
//!
//! Scrapes a stadium's public events page and synthesizes a subscribable
//! `.ics` feed from it. Extraction prefers embedded JSON-LD `Event`
//! objects and degrades to a heuristic card scan; records are deduplicated,
//! ordered deterministically, and serialized with stable UIDs so repeated
//! builds against unchanged markup produce byte-identical feeds.
//!
//! Partial or malformed input never aborts a build: unparseable dates
//! become all-day "TBC" placeholder entries, broken JSON-LD blocks are
//! skipped, and a page with no events still yields a well-formed empty
//! calendar.
//!
//! # Modules
//!
//! - [`config`] - feed configuration (URL, calendar name, timezone, UID salt)
//! - [`types`] - the [`EventRecord`] interchange type
//! - [`dates`] - date coercion for the formats the page uses
//! - [`extract`] - JSON-LD and card-fallback extractors
//! - [`dedupe`] - identity-key deduplication
//! - [`ics`] - calendar serialization
//! - [`pipeline`] - markup-in, document-out entry point
//! - [`fetch`] / [`publish`] - the I/O edges around the pipeline

pub mod config;
pub mod dates;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod ics;
pub mod pipeline;
pub mod publish;
pub mod types;

pub use config::FeedConfig;
pub use error::{FetchError, PublishError};
pub use fetch::PageFetcher;
pub use pipeline::{build_feed, build_feed_at, FeedOutput};
pub use publish::publish_feed;
pub use types::{EventRecord, EventStart};
