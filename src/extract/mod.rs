// src/extract/mod.rs
// =============================================================================
// This module turns a parsed HTML page into the fields we store:
// title, publication date and readable body text.
//
// Submodules:
// - metadata: title and date, each chosen from an ordered list of candidates
// - body: strips boilerplate (nav, footer, scripts...) and collects paragraphs
//
// Order matters! Title and date are read from the untouched document first.
// Body extraction then removes nodes from the tree, and anything that reads
// the document afterwards (link discovery in the crawler) sees the stripped
// version.
// =============================================================================

mod body;
mod metadata;

use scraper::{ElementRef, Html, Selector};

pub use body::extract_body;
pub use metadata::{extract_date, extract_title};

// The extracted fields for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub date: String,
    pub content: String,
}

// Extracts title, date and body text from a document.
//
// The document is modified: boilerplate elements are detached from the tree
// while extracting the body. Don't expect the original tree afterwards.
pub fn extract(document: &mut Html) -> PageContent {
    let title = extract_title(document);
    let date = extract_date(document);
    let content = extract_body(document);

    PageContent { title, date, content }
}

// First element under `root` matching a CSS selector.
//
// Queries always start from an element (never Html::select), because
// Html::select walks every node in the arena, including the ones we detached.
pub(crate) fn select_first<'a>(root: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    // Bound to a local so the Select iterator is dropped before `selector`;
    // returning the expression directly does not borrow-check
    let found = root.select(&selector).next();
    found
}

// All text inside an element, concatenated in document order
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
