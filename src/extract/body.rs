// src/extract/body.rs
// =============================================================================
// Body text extraction.
//
// Steps:
// 1. Remove elements that never hold article text (scripts, styles, nav,
//    header, footer). This edits the document in place!
// 2. Pick the element most likely to wrap the article, by trying a list of
//    common selectors. Fall back to <body>.
// 3. Join the text of every <p> inside it, each followed by a blank line.
// 4. Pages without paragraphs get the container's whole text instead.
//
// scraper stores the DOM in an `ego_tree` arena (`Html::tree`). Removing a
// node means detaching it from its parent: it stays in the arena, but it is
// no longer reachable from the root element.
// =============================================================================

use scraper::{Html, Selector};

use super::{element_text, select_first};

const BOILERPLATE_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

// Tried in order, first match wins
const CONTAINER_SELECTORS: [&str; 6] = ["article", "main", ".content", "#content", ".post", ".article"];

// Extracts readable text from the document, stripping boilerplate first.
//
// Example:
//   <article><p>A</p><p></p><p>B</p></article>  ->  "A\n\nB\n\n"
pub fn extract_body(document: &mut Html) -> String {
    strip_boilerplate(document);

    let root = document.root_element();
    let container = CONTAINER_SELECTORS
        .iter()
        .find_map(|css| select_first(root, css))
        .or_else(|| select_first(root, "body"))
        .unwrap_or(root);

    let mut content = String::new();
    if let Ok(paragraphs) = Selector::parse("p") {
        for paragraph in container.select(&paragraphs) {
            let text = element_text(paragraph);
            let text = text.trim();
            if !text.is_empty() {
                content.push_str(text);
                content.push_str("\n\n");
            }
        }
    }

    if content.trim().is_empty() {
        content = element_text(container).trim().to_string();
    }

    content
}

// Detaches every boilerplate element from the tree
fn strip_boilerplate(document: &mut Html) {
    let Ok(selector) = Selector::parse(&BOILERPLATE_TAGS.join(", ")) else {
        return;
    };

    // Collect ids first: we can't mutate the tree while iterating it
    let ids: Vec<_> = document
        .root_element()
        .select(&selector)
        .map(|element| element.id())
        .collect();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(html: &str) -> String {
        let mut document = Html::parse_document(html);
        extract_body(&mut document)
    }

    #[test]
    fn test_paragraphs_joined_and_empty_ones_skipped() {
        let html = "<body><p>A</p><p></p><p>B</p></body>";
        assert_eq!(body_of(html), "A\n\nB\n\n");
    }

    #[test]
    fn test_whitespace_only_paragraph_skipped() {
        let html = "<body><p>  A  </p><p>   </p></body>";
        assert_eq!(body_of(html), "A\n\n");
    }

    #[test]
    fn test_article_container_preferred_over_body() {
        let html = r#"<body>
            <div class="sidebar"><p>Related posts</p></div>
            <article><p>Real text</p></article>
        </body>"#;
        assert_eq!(body_of(html), "Real text\n\n");
    }

    #[test]
    fn test_container_selector_order() {
        // "main" is tried before ".content"
        let html = r#"<body>
            <div class="content"><p>Class content</p></div>
            <main><p>Main content</p></main>
        </body>"#;
        assert_eq!(body_of(html), "Main content\n\n");
    }

    #[test]
    fn test_id_content_container() {
        let html = r#"<body><p>Outside</p><div id="content"><p>Inside</p></div></body>"#;
        assert_eq!(body_of(html), "Inside\n\n");
    }

    #[test]
    fn test_boilerplate_removed() {
        let html = r#"<body>
            <nav><p>Home | About</p></nav>
            <header><p>Banner</p></header>
            <p>Story</p>
            <script>var tracking = 1;</script>
            <footer><p>Copyright</p></footer>
        </body>"#;
        assert_eq!(body_of(html), "Story\n\n");
    }

    #[test]
    fn test_falls_back_to_container_text() {
        let html = r#"<body><main>  <div>Just a div</div>  <script>x()</script></main></body>"#;
        assert_eq!(body_of(html), "Just a div");
    }

    #[test]
    fn test_stripped_nodes_are_gone_from_the_tree() {
        let mut document = Html::parse_document(
            r#"<body><nav><a href="/menu">Menu</a></nav><p><a href="/post">Post</a></p></body>"#,
        );
        extract_body(&mut document);

        let links = Selector::parse("a[href]").unwrap();
        let hrefs: Vec<_> = document
            .root_element()
            .select(&links)
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/post"]);
    }
}
