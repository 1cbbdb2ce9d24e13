// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself, breadth-first.
//
// How it works:
// 1. Start with the seed URL in a queue, at depth 0
// 2. Take the next URL from the front of the queue and fetch it
// 3. Extract title/date/content and record the page
// 4. If we may go deeper (and still need pages), queue every new
//    same-domain link found on the page at depth + 1
// 5. Repeat until the queue is empty or we have max_pages records
//
// A page that fails to download is reported and skipped. It never stops the
// crawl and it does not count towards max_pages.
//
// Rust concepts:
// - HashSet: To remember every URL we ever queued (O(1) lookup)
// - VecDeque: First-in first-out queue for breadth-first crawling
// - Generics: Crawler<F> works with any PageFetcher (real HTTP or a fake)
// =============================================================================

use scraper::{Html, Selector};
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use url::Url;

use super::filter::{raw_authority, LinkFilter};
use crate::config::CrawlConfig;
use crate::error::ScrapeError;
use crate::extract::{extract, PageContent};
use crate::fetch::{HttpFetcher, PageFetcher};

// A URL waiting in the queue
#[derive(Debug, Clone)]
struct CrawlItem {
    url: String,
    depth: usize, // Link hops from the seed (seed = 0)
}

// One scraped page, as written to the output file.
// Field order here is the key order in the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub title: String,
    pub date: String,
    /// The URL exactly as it was fetched
    pub link: String,
    pub content: String,
}

impl PageRecord {
    fn new(link: String, page: PageContent) -> Self {
        PageRecord {
            title: page.title,
            date: page.date,
            link,
            content: page.content,
        }
    }
}

// State for a single crawl run. Build a new one for every crawl.
pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
    filter: LinkFilter,
    queue: VecDeque<CrawlItem>,
    // Every URL that was ever queued, so nothing is queued twice
    visited: HashSet<String>,
    results: Vec<PageRecord>,
    failures: usize,
}

impl<F: PageFetcher> Crawler<F> {
    // Prepares a crawl starting at `seed_url`.
    //
    // Only links whose authority is written exactly like the seed's
    // (host, port, userinfo) will be followed. A seed that is not a valid
    // URL is not an error here: it fails like any other page when the crawl
    // runs, and the crawl ends with no records.
    pub fn new(seed_url: &str, config: CrawlConfig, fetcher: F) -> Result<Self, ScrapeError> {
        config.validate()?;

        let base_domain = raw_authority(seed_url).unwrap_or_default();
        let filter = LinkFilter::new(base_domain, config.excluded_extensions.clone());

        let mut queue = VecDeque::new();
        queue.push_back(CrawlItem {
            url: seed_url.to_string(),
            depth: 0,
        });

        // The seed goes in as typed, and also in the form links to it take,
        // so "#top" on http://example.com doesn't queue http://example.com/
        let mut visited = HashSet::new();
        visited.insert(seed_url.to_string());
        if let Ok(seed) = Url::parse(seed_url) {
            visited.insert(filter.canonical(&seed));
        }

        Ok(Self {
            fetcher,
            config,
            filter,
            queue,
            visited,
            results: Vec::new(),
            failures: 0,
        })
    }

    // Runs the crawl to completion and returns the pages in visiting order
    pub async fn run(mut self) -> Vec<PageRecord> {
        tracing::debug!(
            base_domain = self.filter.base_domain(),
            max_pages = self.config.max_pages,
            max_depth = self.config.max_depth,
            "starting crawl"
        );

        while self.results.len() < self.config.max_pages {
            let Some(item) = self.queue.pop_front() else {
                break;
            };

            println!(
                "Scraping page {}/{}: {}",
                self.results.len() + 1,
                self.config.max_pages,
                item.url
            );

            if let Err(e) = self.process(&item).await {
                // Page-level failure: report it and move on to the next URL
                println!("Error processing {}: {}", item.url, e);
                if e.is_page_local() {
                    tracing::debug!(url = %item.url, depth = item.depth, error = %e, "page skipped");
                } else {
                    tracing::warn!(url = %item.url, error = %e, "unexpected error, page skipped");
                }
                self.failures += 1;
            }
        }

        tracing::debug!(
            pages = self.results.len(),
            failures = self.failures,
            still_queued = self.queue.len(),
            "crawl finished"
        );

        self.results
    }

    // Fetch, then hand the HTML to the synchronous part
    async fn process(&mut self, item: &CrawlItem) -> Result<(), ScrapeError> {
        let page_url = Url::parse(&item.url).map_err(|e| ScrapeError::invalid_url(&item.url, e))?;
        let html = self.fetcher.fetch(&item.url).await?;
        self.handle_page(item, &page_url, &html);
        Ok(())
    }

    // Parse, extract, record, discover links
    fn handle_page(&mut self, item: &CrawlItem, page_url: &Url, html: &str) {
        let mut document = Html::parse_document(html);

        // Strips nav/header/footer from `document` as a side effect
        let page = extract(&mut document);
        self.results.push(PageRecord::new(item.url.clone(), page));

        // Checked once per page: either all of its links are considered or none
        if item.depth < self.config.max_depth && self.results.len() < self.config.max_pages {
            self.discover_links(&document, page_url, item.depth + 1);
        }
    }

    // Queues every acceptable link that has not been seen before.
    // Runs on the stripped document, so navigation menus don't add links.
    fn discover_links(&mut self, document: &Html, page_url: &Url, next_depth: usize) {
        let Ok(selector) = Selector::parse("a[href]") else {
            return;
        };

        let mut queued = 0;
        for element in document.root_element().select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            let Some(link) = self.filter.accept(page_url, href) else {
                tracing::trace!(href, "link rejected");
                continue;
            };

            // insert() returns false if the URL was already there
            if self.visited.insert(link.clone()) {
                self.queue.push_back(CrawlItem {
                    url: link,
                    depth: next_depth,
                });
                queued += 1;
            }
        }

        tracing::debug!(page = %page_url, queued, depth = next_depth, "links discovered");
    }
}

// Crawls a website over HTTP
//
// Parameters:
//   seed_url: where to start (e.g. "https://example.com/blog")
//   config: page/depth limits, timeout, user agent, extension denylist
//
// Returns: the scraped pages in breadth-first order.
// Only setup problems (bad config, HTTP client) are errors; individual
// pages that fail are skipped, and that includes an unusable seed URL.
pub async fn crawl(seed_url: &str, config: CrawlConfig) -> Result<Vec<PageRecord>, ScrapeError> {
    let fetcher = HttpFetcher::new(&config)?;
    let crawler = Crawler::new(seed_url, config, fetcher)?;
    Ok(crawler.run().await)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why mark URLs visited when they are queued, not when they are fetched?
//    - Two pages often link to the same URL before either is crawled
//    - Marking at queue time means the second link is ignored right away
//    - So a URL can never sit in the queue twice
//
// 2. What does `let Some(item) = ... else { break; }` do?
//    - "let-else": bind the value if the pattern matches, otherwise run the
//      else block, which must leave the scope (break, return, continue)
//
// 3. Why is handle_page not async?
//    - scraper::Html is not Send, so we keep it out of the async part
//    - After the fetch there is nothing left to wait for anyway
//
// 4. Why `impl PageFetcher for &FakeSite` in the tests?
//    - The crawler takes its fetcher by value
//    - Giving it a reference lets the test inspect the recorded requests
//      after the crawl is done
// -----------------------------------------------------------------------------
