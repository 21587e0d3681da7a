use url::Url;

/// Configuration for one feed build.
///
/// The defaults target the Wembley Stadium events page; every value can be
/// overridden so the same pipeline works against a different venue.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Events listing page. Also the fallback URL for records without
    /// a detail link of their own.
    pub events_url: String,
    /// Calendar display name (X-WR-CALNAME).
    pub calendar_name: String,
    /// IANA timezone identifier used for every timed entry (TZID).
    pub timezone: String,
    /// Salt mixed into UID hashing so identifiers are namespaced to
    /// this feed.
    pub uid_salt: String,
    /// Domain tag suffixed onto every UID.
    pub uid_domain: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            events_url: "https://www.wembleystadium.com/events".to_string(),
            calendar_name: "Wembley Stadium Events (Auto)".to_string(),
            timezone: "Europe/London".to_string(),
            uid_salt: "wembley".to_string(),
            uid_domain: "wembley-auto".to_string(),
        }
    }
}

impl FeedConfig {
    pub fn with_events_url(mut self, url: impl Into<String>) -> Self {
        self.events_url = url.into();
        self
    }

    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = name.into();
        self
    }

    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = tz.into();
        self
    }

    /// Site origin (scheme + host) of the events page, used to absolutize
    /// root-relative hrefs found by the card fallback.
    pub fn site_origin(&self) -> Option<String> {
        let url = Url::parse(&self.events_url).ok()?;
        let origin = url.origin();
        origin.is_tuple().then(|| origin.ascii_serialization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_wembley() {
        let config = FeedConfig::default();
        assert!(config.events_url.contains("wembleystadium.com"));
        assert_eq!(config.timezone, "Europe/London");
    }

    #[test]
    fn test_site_origin_strips_path() {
        let config = FeedConfig::default();
        assert_eq!(
            config.site_origin().as_deref(),
            Some("https://www.wembleystadium.com")
        );
    }

    #[test]
    fn test_site_origin_invalid_url() {
        let config = FeedConfig::default().with_events_url("not a url");
        assert_eq!(config.site_origin(), None);
    }
}
