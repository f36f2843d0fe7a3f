//! HTML document loading
//!
//! Any text is accepted. html5ever's error recovery handles unclosed tags,
//! stray end tags and missing structure; nothing here can fail.

use scraper::Html;

/// Parses a response body into a queryable document
///
/// # Example
///
/// ```
/// use seo_audit::analyzer::parse_document;
/// use scraper::Selector;
///
/// let document = parse_document("<title>Test</title><p>unclosed");
/// let selector = Selector::parse("title").unwrap();
/// assert_eq!(document.select(&selector).count(), 1);
/// ```
pub fn parse_document(body: &str) -> Html {
    let document = Html::parse_document(body);

    if !document.errors.is_empty() {
        tracing::trace!(
            "Recovered from {} HTML parse errors",
            document.errors.len()
        );
    }

    document
}
