// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP with reqwest.
//
// One Client is built per crawl and reused for every request, so reqwest can
// keep connections alive between pages on the same host. Requests are still
// made one after another; nothing here runs concurrently.
//
// Error mapping:
// - request took too long      -> ScrapeError::Timeout
// - status outside 200..=299   -> ScrapeError::Status
// - anything else from reqwest -> ScrapeError::Http
// =============================================================================

use reqwest::Client;
use std::time::Duration;

use super::PageFetcher;
use crate::config::CrawlConfig;
use crate::error::ScrapeError;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    // Builds the client with the configured timeout and User-Agent header
    pub fn new(config: &CrawlConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    // Timeouts get their own variant so the log says what actually happened
    fn categorize_error(&self, error: reqwest::Error) -> ScrapeError {
        if error.is_timeout() {
            ScrapeError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else {
            ScrapeError::Http(error)
        }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.categorize_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await.map_err(|e| self.categorize_error(e))?;
        tracing::debug!(url, status = status.as_u16(), bytes = html.len(), "fetched page");

        Ok(html)
    }
}
