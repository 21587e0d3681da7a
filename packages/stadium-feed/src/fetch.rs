//! HTTP retrieval of the events page.

use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;

/// Request timeout for the events page.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches pages with a browser-like User-Agent so the stadium site serves
/// the same markup it serves a visitor.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent("Mozilla/5.0")
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page body as text.
    ///
    /// Non-success statuses are errors; character decoding is best-effort
    /// (reqwest replaces undecodable bytes rather than failing).
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "fetching events page");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
