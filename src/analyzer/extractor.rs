//! SEO signal extraction
//!
//! This module walks a parsed document and computes each report field
//! independently:
//! - Title and meta description, with placeholders when absent or empty
//! - Meta keywords, comma-split and trimmed
//! - Heading counts for h1 through h6
//! - Images with no `alt` attribute
//! - Anchor classification into internal, external and broken
//!
//! A missing element never fails extraction; each field falls back to its
//! default instead.

use crate::config::ReportConfig;
use crate::report::{LinkCounts, LinkKind, PageSignals, HEADING_TAGS};
use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// Extracts every SEO signal from a parsed document
///
/// # Example
///
/// ```
/// use seo_audit::analyzer::{extract_signals, parse_document};
/// use seo_audit::config::ReportConfig;
///
/// let html = r#"<html><head><title>Test</title></head><body><a>z</a></body></html>"#;
/// let document = parse_document(html);
/// let signals = extract_signals(&document, &ReportConfig::default());
/// assert_eq!(signals.title, "Test");
/// assert_eq!(signals.links.broken, 1);
/// ```
pub fn extract_signals(document: &Html, config: &ReportConfig) -> PageSignals {
    PageSignals {
        title: extract_title(document, &config.title_placeholder),
        description: extract_description(document, &config.description_placeholder),
        keywords: extract_keywords(document),
        heading_tags: count_headings(document),
        images_without_alt: count_images_without_alt(document),
        links: classify_links(document),
    }
}

/// Text of the first `<title>`, or the placeholder if missing or empty
fn extract_title(document: &Html, placeholder: &str) -> String {
    let title = Selector::parse("title").ok().and_then(|selector| {
        document
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>())
    });

    match title {
        Some(title) if !title.is_empty() => title,
        _ => placeholder.to_string(),
    }
}

/// `content` of the first matching `<meta name=...>` element
fn meta_content<'a>(document: &'a Html, name: &str) -> Option<&'a str> {
    let selector = Selector::parse(&format!("meta[name=\"{}\"]", name)).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
}

fn extract_description(document: &Html, placeholder: &str) -> String {
    match meta_content(document, "description") {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Splits the keywords meta content on commas
///
/// Order and duplicates are kept, and empty tokens are not dropped, so a
/// missing tag yields `[""]`.
fn extract_keywords(document: &Html) -> Vec<String> {
    split_keywords(meta_content(document, "keywords").unwrap_or(""))
}

/// Comma-splits and trims a raw keywords string
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(|k| k.trim().to_string()).collect()
}

/// Counts each heading level; all six keys are always present
fn count_headings(document: &Html) -> BTreeMap<String, u64> {
    HEADING_TAGS
        .iter()
        .map(|tag| {
            let count = Selector::parse(tag)
                .map(|selector| document.select(&selector).count() as u64)
                .unwrap_or(0);
            (tag.to_string(), count)
        })
        .collect()
}

/// Counts `<img>` elements with no `alt` attribute (`alt=""` is present)
fn count_images_without_alt(document: &Html) -> u64 {
    let Ok(selector) = Selector::parse("img") else {
        return 0;
    };

    document
        .select(&selector)
        .filter(|element| element.value().attr("alt").is_none())
        .count() as u64
}

/// Classifies every anchor on the page, once each
fn classify_links(document: &Html) -> LinkCounts {
    let mut links = LinkCounts::default();

    if let Ok(selector) = Selector::parse("a") {
        for element in document.select(&selector) {
            links.record(classify_href(element.value().attr("href")));
        }
    }

    links
}

/// Classifies a single anchor by its `href` attribute
///
/// - no `href` at all → broken
/// - starts with `http` or `//` → external
/// - anything else, including an empty string → internal
pub fn classify_href(href: Option<&str>) -> LinkKind {
    match href {
        None => LinkKind::Broken,
        Some(href) if href.starts_with("http") || href.starts_with("//") => LinkKind::External,
        Some(_) => LinkKind::Internal,
    }
}
