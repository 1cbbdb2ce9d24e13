// src/config.rs
// =============================================================================
// Crawl settings.
//
// CrawlConfig collects every knob the crawler needs in one place so the
// crawl engine, the URL filter and the HTTP fetcher all read from the same
// source. The CLI builds one of these; tests build them with the builder.
// =============================================================================

use std::time::Duration;

use crate::error::ScrapeError;

// Sent with every request. Some sites refuse obviously non-browser clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Links whose path ends with one of these are never queued (case-sensitive)
pub const DEFAULT_EXCLUDED_EXTENSIONS: [&str; 4] = [".pdf", ".jpg", ".png", ".gif"];

pub const DEFAULT_MAX_PAGES: usize = 20;
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Stop once this many pages have been recorded
    pub max_pages: usize,
    /// Link distance from the seed; the seed itself is depth 0
    pub max_depth: usize,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    /// Path suffixes that disqualify a link
    pub excluded_extensions: Vec<String>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_depth: DEFAULT_MAX_DEPTH,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl CrawlConfig {
    pub fn builder() -> CrawlConfigBuilder {
        CrawlConfigBuilder::default()
    }

    // max_pages = 0 would write an empty file without fetching anything,
    // which is never what the caller meant
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.max_pages == 0 {
            return Err(ScrapeError::Config(
                "max_pages must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ScrapeError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// Builder for CrawlConfig, starting from the defaults
#[derive(Debug, Default)]
pub struct CrawlConfigBuilder {
    config: CrawlConfig,
}

impl CrawlConfigBuilder {
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    // Adds to the default denylist rather than replacing it.
    // "docx" and ".docx" are both accepted.
    pub fn exclude_extension(mut self, ext: &str) -> Self {
        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };
        if !self.config.excluded_extensions.contains(&ext) {
            self.config.excluded_extensions.push(ext);
        }
        self
    }

    pub fn build(self) -> CrawlConfig {
        self.config
    }
}
