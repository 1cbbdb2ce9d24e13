// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Same-domain restriction (exact host match, subdomains excluded)
// - Depth and page-count limits
// - One page at a time; a failing page is skipped, never fatal
//
// Submodules:
// - filter: which links are worth following
// - queue: the crawl loop and the records it produces
// =============================================================================

mod filter;
mod queue;

pub use queue::{crawl, PageRecord};
