// src/extract/metadata.rs
// =============================================================================
// Title and publication date extraction.
//
// Pages publish this information in many different places, so each field
// has an ordered list of candidates. Every candidate is a small function
// that looks in one place; the first one that finds a non-empty value wins.
//
// Keeping the candidates in a list (instead of nested if/else) means the
// fallback order is visible at a glance and each step can be tested alone.
// =============================================================================

use scraper::Html;

use super::{element_text, select_first};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_DATE: &str = "Unknown Date";

// One place to look for a value, with a name for logging
pub(crate) type Candidate = (&'static str, fn(&Html) -> Option<String>);

const TITLE_CANDIDATES: [Candidate; 3] = [
    ("h1", h1_text),
    ("og:title", og_title),
    ("title", title_text),
];

const DATE_CANDIDATES: [Candidate; 4] = [
    ("article:published_time", published_time),
    ("meta date", meta_date),
    ("meta publication_date", meta_publication_date),
    ("time.entry-date", entry_date),
];

// Runs candidates in order and returns the first non-empty value,
// tagged with the name of the candidate that produced it
pub(crate) fn first_match(
    document: &Html,
    candidates: &[Candidate],
) -> Option<(&'static str, String)> {
    candidates.iter().find_map(|(name, candidate)| {
        candidate(document)
            .filter(|value| !value.is_empty())
            .map(|value| (*name, value))
    })
}

// <h1>, then <meta property="og:title">, then <title>.
//
// A blank <h1> counts as missing and we move on to the next candidate.
pub fn extract_title(document: &Html) -> String {
    match first_match(document, &TITLE_CANDIDATES) {
        Some((source, title)) => {
            tracing::trace!(source, "title found");
            title
        }
        None => UNKNOWN_TITLE.to_string(),
    }
}

// Common publication-date markers, most specific first
pub fn extract_date(document: &Html) -> String {
    match first_match(document, &DATE_CANDIDATES) {
        Some((source, date)) => {
            tracing::trace!(source, "date found");
            date
        }
        None => UNKNOWN_DATE.to_string(),
    }
}

fn trimmed_text(document: &Html, css: &str) -> Option<String> {
    select_first(document.root_element(), css).map(|el| element_text(el).trim().to_string())
}

// content="" of the first element matching `css`, exactly as written
fn content_attr(document: &Html, css: &str) -> Option<String> {
    select_first(document.root_element(), css)
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.to_string())
}

fn h1_text(document: &Html) -> Option<String> {
    trimmed_text(document, "h1")
}

fn og_title(document: &Html) -> Option<String> {
    content_attr(document, r#"meta[property="og:title"]"#).map(|title| title.trim().to_string())
}

fn title_text(document: &Html) -> Option<String> {
    trimmed_text(document, "title")
}

fn published_time(document: &Html) -> Option<String> {
    content_attr(document, r#"meta[property="article:published_time"]"#)
}

fn meta_date(document: &Html) -> Option<String> {
    content_attr(document, r#"meta[name="date"]"#)
}

fn meta_publication_date(document: &Html) -> Option<String> {
    content_attr(document, r#"meta[name="publication_date"]"#)
}

fn entry_date(document: &Html) -> Option<String> {
    trimmed_text(document, "time.entry-date")
}
