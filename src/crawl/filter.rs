// src/crawl/filter.rs
// =============================================================================
// Decides which links found on a page are worth crawling.
//
// For every <a href> we:
// 1. Resolve it against the page it was found on (relative -> absolute)
// 2. Keep only http:// and https:// links
// 3. Drop the query string and #fragment (canonical form)
// 4. Keep only links on exactly the same host as the seed
// 5. Drop links to files we can't extract text from (.pdf, .jpg, ...)
//
// There is no I/O here, which makes this the easiest part to test.
//
// Rust concepts:
// - Option<T>: None means "skip this link", it is not an error
// - Url::join: the same relative-link rules a browser uses
// =============================================================================

use url::Url;

// The authority of an absolute URL string exactly as written:
// everything between "://" and the next '/', '?' or '#'.
//
// Examples:
//   http://example.com/a          -> Some("example.com")
//   http://user:pw@Example.com:80 -> Some("user:pw@Example.com:80")
//   example.com/a                 -> None (no scheme)
pub fn raw_authority(url: &str) -> Option<&str> {
    let (scheme, rest) = url.trim().split_once("://")?;
    if !is_scheme(scheme) {
        return None;
    }
    let end = rest.find(|c| matches!(c, '/' | '?' | '#')).unwrap_or(rest.len());
    Some(&rest[..end])
}

// The authority an href spells out itself ("http://host/x" or "//host/x").
// None means the href inherits the authority of the page it is on.
fn explicit_authority(href: &str) -> Option<&str> {
    let href = href.trim();
    let rest = match href.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => href,
    };
    let rest = rest.strip_prefix("//")?;
    let end = rest.find(|c| matches!(c, '/' | '?' | '#')).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// The normalized host plus a non-default port, as the url crate sees it.
// Only used to make sure the resolved URL really points at the same place
// as the raw text we compared.
fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

// Same-domain link filter for one crawl
#[derive(Debug, Clone)]
pub struct LinkFilter {
    // Raw authority of the seed URL ("example.com", "127.0.0.1:8080", ...)
    base_domain: String,
    excluded_extensions: Vec<String>,
}

impl LinkFilter {
    pub fn new(base_domain: impl Into<String>, excluded_extensions: Vec<String>) -> Self {
        Self {
            base_domain: base_domain.into(),
            excluded_extensions,
        }
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    // scheme://authority/path with the authority spelled like the seed's.
    // This is the key used to remember visited pages.
    pub fn canonical(&self, url: &Url) -> String {
        format!("{}://{}{}", url.scheme(), self.base_domain, url.path())
    }

    // Returns the canonical URL for `href` if it should be crawled
    //
    // Parameters:
    //   source: the page the link was found on (always on the base domain)
    //   href: the raw href attribute value
    //
    // Examples (base domain "example.com"):
    //   source = http://example.com/blog/, href = "post-1?ref=x#top"
    //     -> Some("http://example.com/blog/post-1")
    //   href = "http://blog.example.com/x" -> None (subdomain)
    //   href = "http://EXAMPLE.com/x"      -> None (not the same text)
    //   href = "mailto:me@example.com"     -> None (not http)
    //   href = "/files/report.pdf"         -> None (denylisted)
    pub fn accept(&self, source: &Url, href: &str) -> Option<String> {
        let resolved = source.join(href).ok()?;

        if !matches!(resolved.scheme(), "http" | "https") {
            return None;
        }

        // Exact string match on the authority as written: "blog.example.com",
        // "EXAMPLE.com", "example.com:80" and "user@example.com" are all
        // different from "example.com"
        let authority = explicit_authority(href).unwrap_or(&self.base_domain);
        if authority != self.base_domain {
            return None;
        }

        // Backslash tricks can make the url crate resolve a "relative" href
        // to another host; the text check above would not see that
        if host_with_port(&resolved) != host_with_port(source) {
            return None;
        }

        let canonical = self.canonical(&resolved);

        // Case-sensitive on purpose: ".PDF" is let through
        if self
            .excluded_extensions
            .iter()
            .any(|ext| canonical.ends_with(ext.as_str()))
        {
            return None;
        }

        Some(canonical)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does the `?` after `.ok()` do in accept()?
//    - .ok() turns Result into Option
//    - `?` on an Option returns None from the function early
//    - A bad href simply means "skip this link"
//
// 2. Why compare the authority text instead of using Url::domain()?
//    - The url crate lowercases hosts and drops ":80", so "EXAMPLE.com:80"
//      would look identical to "example.com"
//    - domain() is None for IP addresses like 127.0.0.1
//    - We want the text exactly as written: :8080 and :9090 are different
//      sites, and so are "example.com" and "user@example.com"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlConfig;

    fn filter() -> LinkFilter {
        LinkFilter::new("example.com", CrawlConfig::default().excluded_extensions)
    }

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_resolves_relative_and_strips_query_and_fragment() {
        let result = filter().accept(&page("http://example.com/blog/"), "post-1?ref=x#top");
        assert_eq!(result, Some("http://example.com/blog/post-1".to_string()));
    }

    #[test]
    fn test_parent_relative_link() {
        let result = filter().accept(&page("https://example.com/a/b/c"), "../d");
        assert_eq!(result, Some("https://example.com/a/d".to_string()));
    }

    #[test]
    fn test_rejects_subdomain() {
        let result = filter().accept(&page("http://example.com/"), "http://blog.example.com/x");
        assert_eq!(result, None);
    }

    #[test]
    fn test_rejects_other_domain() {
        let result = filter().accept(&page("http://example.com/"), "https://rust-lang.org/");
        assert_eq!(result, None);
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        let source = page("http://example.com/");
        assert_eq!(filter().accept(&source, "mailto:me@example.com"), None);
        assert_eq!(filter().accept(&source, "javascript:void(0)"), None);
        assert_eq!(filter().accept(&source, "ftp://example.com/file"), None);
    }

    #[test]
    fn test_rejects_denylisted_extensions() {
        let source = page("http://example.com/");
        assert_eq!(filter().accept(&source, "/report.pdf"), None);
        assert_eq!(filter().accept(&source, "/img/logo.png?v=2"), None);
        assert_eq!(filter().accept(&source, "/anim.gif#frame"), None);
    }

    #[test]
    fn test_extension_check_is_case_sensitive() {
        let result = filter().accept(&page("http://example.com/"), "/REPORT.PDF");
        assert_eq!(result, Some("http://example.com/REPORT.PDF".to_string()));
    }

    #[test]
    fn test_extended_denylist() {
        let filter = LinkFilter::new(
            "example.com",
            CrawlConfig::builder().exclude_extension("zip").build().excluded_extensions,
        );
        assert_eq!(filter.accept(&page("http://example.com/"), "/dl/archive.zip"), None);
    }

    #[test]
    fn test_port_is_part_of_the_domain() {
        let filter = LinkFilter::new("127.0.0.1:8080", Vec::new());
        let source = page("http://127.0.0.1:8080/");
        assert_eq!(
            filter.accept(&source, "/about"),
            Some("http://127.0.0.1:8080/about".to_string())
        );
        assert_eq!(filter.accept(&source, "http://127.0.0.1:9090/about"), None);
    }

    #[test]
    fn test_authority_must_match_as_written() {
        let source = page("http://example.com/");
        assert_eq!(filter().accept(&source, "http://user:pw@example.com/x"), None);
        assert_eq!(filter().accept(&source, "http://example.com:80/x"), None);
        assert_eq!(filter().accept(&source, "http://EXAMPLE.com/x"), None);
        assert_eq!(filter().accept(&source, "//EXAMPLE.com/x"), None);
        assert_eq!(
            filter().accept(&source, "http://example.com/x"),
            Some("http://example.com/x".to_string())
        );
        assert_eq!(
            filter().accept(&source, "//example.com/y"),
            Some("http://example.com/y".to_string())
        );
    }

    #[test]
    fn test_relative_links_keep_the_seed_spelling() {
        let filter = LinkFilter::new("Example.com", Vec::new());
        let source = page("http://Example.com/blog/");
        assert_eq!(
            filter.accept(&source, "post"),
            Some("http://Example.com/blog/post".to_string())
        );
        assert_eq!(filter.accept(&source, "http://example.com/blog/post"), None);
    }

    #[test]
    fn test_same_page_links_resolve_to_the_page() {
        let source = page("http://example.com");
        let expected = Some("http://example.com/".to_string());
        assert_eq!(filter().accept(&source, "#top"), expected);
        assert_eq!(filter().accept(&source, ""), expected);
        assert_eq!(filter().accept(&source, "http://example.com"), expected);
        assert_eq!(filter().canonical(&source), "http://example.com/");
    }

    #[test]
    fn test_raw_authority() {
        assert_eq!(raw_authority("http://example.com"), Some("example.com"));
        assert_eq!(raw_authority("https://example.com:8443/a?b#c"), Some("example.com:8443"));
        assert_eq!(
            raw_authority("http://user:pw@Example.com:80/"),
            Some("user:pw@Example.com:80")
        );
        assert_eq!(raw_authority("example.com/a"), None);
        assert_eq!(raw_authority("not a url"), None);
    }
}
