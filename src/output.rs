// src/output.rs
// =============================================================================
// Writes the scraped pages to disk as JSON.
//
// Format: a pretty-printed array (2-space indent) of
//   {"title": ..., "date": ..., "link": ..., "content": ...}
// in the order the pages were crawled. serde_json keeps non-ASCII text as
// UTF-8 rather than \u escapes, so accented titles stay readable.
// =============================================================================

use std::fs;
use std::path::Path;

use crate::crawl::PageRecord;
use crate::error::ScrapeError;

// Serializes `results` and writes them to `path`, replacing any existing file
pub fn write_results(results: &[PageRecord], path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;

    tracing::debug!(pages = results.len(), path = %path.display(), "results written");
    println!("Scraped {} pages", results.len());
    println!("Results saved to {}", path.display());

    Ok(())
}
