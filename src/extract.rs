use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::debug;

use crate::config::Config;
use crate::record::ExtractedRecord;

/// Parse a CSS selector that is known at compile time
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid CSS selector")
}

/// Whitespace-normalized text of an element, descendants included
fn text_of(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matched by `css`, or None if nothing matches
pub fn first_text(document: &Html, css: &str) -> Option<String> {
    let sel = selector(css);
    document.select(&sel).next().map(|el| text_of(&el))
}

/// Texts of all elements matched by `css`, in document order
pub fn each_text(document: &Html, css: &str) -> Vec<String> {
    let sel = selector(css);
    document.select(&sel).map(|el| text_of(&el)).collect()
}

/// Attribute values of all elements matched by `css`, in document order.
/// Elements missing the attribute are skipped.
pub fn each_attr(document: &Html, css: &str, attr: &str) -> Vec<String> {
    let sel = selector(css);
    document
        .select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
        .collect()
}

/// Map from anchor visible text to href over every `a[href]` in the document.
/// Duplicate texts resolve to the last occurrence.
pub fn link_map(document: &Html) -> HashMap<String, String> {
    let sel = selector("a[href]");
    document
        .select(&sel)
        .filter_map(|el| {
            el.value()
                .attr("href")
                .map(|href| (text_of(&el), href.to_string()))
        })
        .collect()
}

/// Text directly contained by an element, excluding descendant text
pub fn own_text(element: &ElementRef) -> String {
    let mut out = String::new();
    for child in element.children() {
        if let scraper::Node::Text(text) = child.value() {
            out.push_str(&text.text);
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Star count of the first pinned item, resolved through its fixed nesting:
/// container div, 2nd paragraph inside it, stargazers anchor inside that.
/// Each step is optional and a missing level short-circuits to None, since
/// this encodes a page layout that may not exist.
fn pinned_star_count(document: &Html) -> Option<String> {
    let container_sel = selector(Config::PINNED_ITEM_SELECTOR);
    let paragraph_sel = selector(Config::PINNED_PARAGRAPH_SELECTOR);
    let anchor_sel = selector(Config::STARGAZERS_ANCHOR_SELECTOR);

    let container = document.select(&container_sel).next()?;
    let paragraph = container
        .select(&paragraph_sel)
        .nth(Config::PINNED_PARAGRAPH_INDEX)?;
    let anchor = paragraph.select(&anchor_sel).next()?;
    Some(own_text(&anchor))
}

/// Evaluate the fixed selector rules against an HTML document and build the
/// record. Every rule is independent and non-fatal: a missing match yields
/// the field's default instead of an error.
///
/// # Examples
/// ```
/// use profile_scrape::extract_record;
///
/// let html = r#"<div class="h-card"><span class="p-nickname">skrapeit</span></div>"#;
/// let record = extract_record("OK", html);
/// assert_eq!(record.user_name, "skrapeit");
/// assert_eq!(record.overview_link, "not found");
/// ```
pub fn extract_record(status_message: &str, html: &str) -> ExtractedRecord {
    let document = Html::parse_document(html);

    // The repo selector feeds two fields: the filtered name list and the
    // positional third entry. Fewer than 3 matches leaves the latter empty.
    let repos = each_text(&document, Config::REPO_SELECTOR);
    let mut links = link_map(&document);

    let record = ExtractedRecord {
        http_message: status_message.to_string(),
        user_name: first_text(&document, Config::NICKNAME_SELECTOR).unwrap_or_default(),
        repository_name: repos
            .iter()
            .filter(|text| text.contains(Config::REPO_FILTER))
            .cloned()
            .collect(),
        the_third_repositories_name: repos
            .get(Config::THIRD_REPO_INDEX)
            .cloned()
            .unwrap_or_default(),
        first_three_hrefs: each_attr(&document, Config::HREF_SELECTOR, "href")
            .into_iter()
            .take(Config::MAX_LIST_ITEMS)
            .collect(),
        overview_link: links
            .remove(Config::OVERVIEW_LINK_TEXT)
            .unwrap_or_else(|| Config::OVERVIEW_FALLBACK.to_string()),
        first_three_image_sources: each_attr(&document, Config::IMAGE_SELECTOR, "src")
            .into_iter()
            .take(Config::MAX_LIST_ITEMS)
            .collect(),
        title: first_text(&document, Config::TITLE_SELECTOR).unwrap_or_default(),
        star_count: pinned_star_count(&document).unwrap_or_default(),
    };

    debug!(
        "extracted {} repo elements, {} hrefs, {} image sources",
        repos.len(),
        record.first_three_hrefs.len(),
        record.first_three_image_sources.len()
    );

    record
}
