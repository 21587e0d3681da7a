//! Event extraction from the listing page markup.
//!
//! Two independent strategies over the same parsed document:
//! - [`structured_events`] reads JSON-LD `Event` objects out of
//!   `application/ld+json` script blocks (the reliable path);
//! - [`fallback_cards`] heuristically scans link "cards" for a title and
//!   nearby date text, for pages that ship no structured data.
//!
//! The caller uses the fallback only when the structured pass finds nothing.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::config::FeedConfig;
use crate::dates::coerce_datetime;
use crate::types::{EventRecord, EventStart};

lazy_static! {
    // "9 Oct 2025 19:45", "25 October 2025", etc.
    static ref CARD_DATE_REGEX: Regex =
        Regex::new(r"\d{1,2}\s+\w+\s+\d{4}(?:\s+\d{1,2}:\d{2})?").unwrap();
}

/// Extract events from embedded JSON-LD blocks.
///
/// Tolerates blocks that hold a single object or an array, walks `@graph`
/// arrays (including graphs nested inside graph items), and silently skips
/// anything that fails to parse. Objects qualify when `@type` is `"Event"`
/// or a list containing `"Event"`.
pub fn structured_events(document: &Html, config: &FeedConfig) -> Vec<EventRecord> {
    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut items: Vec<Value> = Vec::new();
    for tag in document.select(&selector) {
        let raw = tag.text().collect::<String>();
        let data: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(_) => continue,
        };
        match data {
            Value::Array(list) => items.extend(list),
            other => items.push(other),
        }
    }

    // Worklist scan: graphs found while iterating are appended and
    // scanned in turn.
    let mut i = 0;
    while i < items.len() {
        if let Some(graph) = items[i].get("@graph").and_then(Value::as_array) {
            let nested = graph.clone();
            items.extend(nested);
        }
        i += 1;
    }

    let mut events = Vec::new();
    for item in &items {
        if !is_event_object(item) {
            continue;
        }
        let name = item
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if name.is_empty() {
            continue;
        }
        let url = item
            .get("url")
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())
            .unwrap_or(&config.events_url)
            .to_string();
        let raw_date_token = ["startDate", "startTime", "start"]
            .iter()
            .find_map(|key| item.get(*key).filter(|v| !v.is_null()))
            .map(stringify);
        let start = match raw_date_token.as_deref() {
            Some(token) => coerce_datetime(token),
            None => EventStart::Unconfirmed,
        };
        events.push(EventRecord {
            title: decode_entities(name),
            start,
            raw_date_token,
            url,
        });
    }

    debug!(count = events.len(), "structured extraction finished");
    events
}

/// Heuristic card scan, used only when [`structured_events`] finds nothing.
///
/// Takes each event/card-flavoured link's own text as the title, resolves
/// its href against the site origin, and searches the enclosing container's
/// text for a date-like substring to feed into date coercion.
pub fn fallback_cards(document: &Html, config: &FeedConfig) -> Vec<EventRecord> {
    let selector = match Selector::parse("[class*=event] a, .event-card, .card a") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut events = Vec::new();
    for link in document.select(&selector) {
        let title = element_text(link);
        if title.is_empty() {
            continue;
        }
        let href = link.value().attr("href").unwrap_or("");
        let url = absolutize(href, config);

        let container = link
            .parent()
            .and_then(ElementRef::wrap)
            .unwrap_or(link);
        let nearby = element_text(container);
        let raw_date_token = CARD_DATE_REGEX
            .find(&nearby)
            .map(|m| m.as_str().to_string());
        let start = match raw_date_token.as_deref() {
            Some(token) => coerce_datetime(token),
            None => EventStart::Unconfirmed,
        };

        events.push(EventRecord {
            title,
            start,
            raw_date_token,
            url,
        });
    }

    debug!(count = events.len(), "card fallback finished");
    events
}

fn is_event_object(item: &Value) -> bool {
    match item.get("@type") {
        Some(Value::String(t)) => t == "Event",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Event")),
        _ => false,
    }
}

/// Raw date token as written in the source. Non-string JSON values are
/// kept in serialized form so deduplication still sees them.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Collapse an element's text nodes into one whitespace-normalized string.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a card href: absolute http(s) links pass through, root-relative
/// paths get the site origin prepended, anything else falls back to the
/// listing page.
fn absolutize(href: &str, config: &FeedConfig) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if href.starts_with('/') {
        if let Some(origin) = config.site_origin() {
            return format!("{origin}{href}");
        }
    }
    config.events_url.clone()
}

/// Decode HTML entities left in JSON-LD strings (`&amp;` etc.).
///
/// The markup parser already decodes entities in document text; JSON-LD
/// payloads arrive as plain strings, so names need one more pass.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let fragment = Html::parse_fragment(s);
    fragment.root_element().text().collect()
}
