//! Basic HTML extraction utilities.
//!
//! Element counts and text extraction for the SEO-relevant basics: title,
//! meta description, heading/image/script tallies, and the dynamic score
//! derived from script count.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::parse_selector_unsafe;

const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const H1_SELECTOR_STR: &str = "h1";
const IMG_SELECTOR_STR: &str = "img";
const SCRIPT_SELECTOR_STR: &str = "script";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));

/// Extracts the page title from an HTML document.
///
/// Returns the first `<title>` element's text content, trimmed. Missing or
/// empty titles are tracked as a warning and returned as `None`.
pub fn extract_title(document: &Html, stats: &ProcessingStats) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    if title.is_none() {
        stats.increment_warning(WarningType::MissingTitle);
    }
    title
}

/// Extracts the meta description from an HTML document.
pub fn extract_meta_description(document: &Html, stats: &ProcessingStats) -> Option<String> {
    let description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|d| !d.is_empty());

    if description.is_none() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    description
}

/// Counts `<h1>` elements.
pub fn count_h1(document: &Html) -> usize {
    document.select(&H1_SELECTOR).count()
}

/// Counts `<img>` elements and the subset carrying a non-empty `alt`
/// attribute. The second count never exceeds the first.
pub fn count_images(document: &Html) -> (usize, usize) {
    let mut total = 0;
    let mut with_alt = 0;
    for element in document.select(&IMG_SELECTOR) {
        total += 1;
        if element
            .value()
            .attr("alt")
            .map(|alt| !alt.trim().is_empty())
            .unwrap_or(false)
        {
            with_alt += 1;
        }
    }
    (total, with_alt)
}

/// Counts `<script>` elements.
pub fn count_scripts(document: &Html) -> usize {
    document.select(&SCRIPT_SELECTOR).count()
}

/// Maps a script count onto the 0-100 dynamic score.
///
/// Five points per script tag, saturating at 100 (20 or more scripts). The
/// score only has to be monotonic in script count; the slope is a tuning
/// choice.
pub fn dynamic_score(script_count: usize) -> u32 {
    (script_count as u32).saturating_mul(5).min(100)
}
