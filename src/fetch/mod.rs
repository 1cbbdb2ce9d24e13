// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// The crawler only needs "give me the HTML for this URL", so that is all the
// PageFetcher trait asks for. The real implementation (HttpFetcher) uses
// reqwest; tests plug in a fake that serves HTML from memory.
//
// Rust concepts:
// - Traits: a shared interface that several types can implement
// - async fn in traits: supported since Rust 1.75
// =============================================================================

mod http;

pub use http::HttpFetcher;

use crate::error::ScrapeError;

// Anything that can turn a URL into an HTML string
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    // Fetches the page body. Non-2xx responses and network problems are
    // returned as errors; the caller decides whether they are fatal.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}
