//! Same-host link discovery.

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

use crate::app::url::{is_internal_url, resolve_href};
use crate::utils::parse_selector_unsafe;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// Extracts the crawlable same-host links from a page.
///
/// Each `href` is resolved against the page URL and normalized; external
/// hosts, unfollowable schemes, and malformed values are dropped. Document
/// order is preserved (it feeds the breadth-first frontier) with duplicates
/// within the page removed.
pub fn discover_links(html: &str, page_url: &Url, hostname: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(resolved) = resolve_href(page_url, href) else {
            continue;
        };
        if !is_internal_url(&resolved, hostname) {
            continue;
        }
        if seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    links
}
