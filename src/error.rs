// src/error.rs
// =============================================================================
// Error types for the scraper.
//
// Two layers of error handling live in this project:
// - ScrapeError (this file): typed errors produced while fetching, parsing
//   and writing. The crawl loop inspects these per page.
// - anyhow::Result (main.rs): the application layer, which only needs to
//   print the error and pick an exit code.
//
// Rust concepts:
// - thiserror: derive macro that implements Display and Error for us
// - #[from]: generates From impls so `?` converts errors automatically
// =============================================================================

use thiserror::Error;

// Everything that can go wrong while scraping
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A queued URL (usually the seed) could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network-level failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {code} for url ({url})")]
    Status { code: u16, url: String },

    /// The request took longer than the configured timeout
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Invalid crawl settings
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the results failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    // Helper for building InvalidUrl from anything printable
    pub fn invalid_url(url: &str, reason: impl ToString) -> Self {
        ScrapeError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    // True for errors the crawl loop recovers from by skipping the page
    pub fn is_page_local(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidUrl { .. }
                | ScrapeError::Http(_)
                | ScrapeError::Status { .. }
                | ScrapeError::Timeout { .. }
        )
    }
}
