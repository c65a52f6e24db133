//! Rate-limited page fetching.

use std::thread;
use std::time::Duration;

use crate::error::{Result, ScrapeError};

/// Browser-emulating identification sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Blocking HTTP client with courtesy rate limiting.
///
/// Profile scraping issues one request per player and the player count
/// can run into the thousands; the post-fetch delay is the only
/// backpressure protecting the origin. Every `batch_size` requests the
/// longer `batch_delay_ms` pause replaces the per-request delay.
pub struct PageFetcher {
    client: reqwest::blocking::Client,
    delay_ms: u64,
    batch_size: usize,
    batch_delay_ms: u64,
    requests_in_batch: usize,
}

impl PageFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(100, 25, 1000, 30)
    }

    /// Create a fetcher with custom rate limiting configuration.
    ///
    /// # Arguments
    /// * `delay_ms` - Delay after each profile request in milliseconds
    /// * `batch_size` - Number of requests before a longer pause
    /// * `batch_delay_ms` - Duration of the longer pause in milliseconds
    /// * `timeout_secs` - Per-request timeout in seconds
    pub fn with_config(
        delay_ms: u64,
        batch_size: usize,
        batch_delay_ms: u64,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            delay_ms,
            batch_size,
            batch_delay_ms,
            requests_in_batch: 0,
        })
    }

    /// GET a page body. Non-success status is an error, as is timeout
    /// expiry; callers treat both as the same soft failure.
    pub fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text()?)
    }

    /// Courtesy pause after a profile request, success or failure.
    pub fn pause(&mut self) {
        self.requests_in_batch += 1;

        if self.batch_size > 0 && self.requests_in_batch >= self.batch_size {
            thread::sleep(Duration::from_millis(self.batch_delay_ms));
            self.requests_in_batch = 0;
        } else {
            thread::sleep(Duration::from_millis(self.delay_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_club_page() {
        let fetcher = PageFetcher::new().unwrap();
        let body = fetcher
            .get("https://www.transfermarkt.co.uk/afc-wimbledon/leistungsdaten/verein/3884")
            .unwrap();
        assert!(body.contains("items"));
    }

    #[test]
    fn test_batch_counter_wraps() {
        let mut fetcher = PageFetcher::with_config(0, 2, 0, 30).unwrap();
        fetcher.pause();
        assert_eq!(fetcher.requests_in_batch, 1);
        fetcher.pause();
        assert_eq!(fetcher.requests_in_batch, 0);
    }
}
