//! Per-page analysis assembly.
//!
//! Combines the fetched page state with the individual extractors into one
//! immutable [`PageAnalysis`]. Fetch failures produce an analysis with
//! failure markers instead of aborting anything: failure isolation is per
//! page, and the crawl loop continues either way.

use scraper::Html;
use strum::IntoEnumIterator;
use url::Url;

use crate::app::url::normalize_url;
use crate::driver::FetchedPage;
use crate::error_handling::{DriverError, ProcessingStats, WarningType};
use crate::robots::RobotsTxtData;

use super::canonical::classify_canonical;
use super::html::{
    count_h1, count_images, count_scripts, dynamic_score, extract_meta_description, extract_title,
};
use super::indexing::{compute_indexability, extract_robots_meta};
use super::social::extract_social;
use super::structured::extract_structured_data;
use super::types::{
    CanonicalFacts, CanonicalType, IndexingFacts, PageAnalysis, SocialFacts, SocialPlatform,
    StructuredDataFacts,
};

/// Detects a soft-404: an HTTP 200 whose content says the page is missing.
fn is_soft_404(status: u16, title: Option<&str>, document: &Html) -> bool {
    if status != 200 {
        return false;
    }
    if let Some(title) = title {
        let lower = title.to_ascii_lowercase();
        if lower.contains("not found") || lower.contains("404") {
            return true;
        }
    }
    let body_text = document
        .root_element()
        .text()
        .collect::<String>()
        .to_ascii_lowercase();
    body_text.contains("page not found")
}

/// Analyzes one successfully fetched page.
pub fn analyze_fetched(
    page_url: &Url,
    fetched: &FetchedPage,
    robots: &RobotsTxtData,
    stats: &ProcessingStats,
) -> PageAnalysis {
    let url = normalize_url(page_url.as_str());
    let document = Html::parse_document(&fetched.html);

    let title = extract_title(&document, stats);
    let meta_description = extract_meta_description(&document, stats);
    let h1_count = count_h1(&document);
    let (image_count, images_with_alt) = count_images(&document);
    let script_count = count_scripts(&document);

    let robots_meta = extract_robots_meta(&document);
    let x_robots_tag = fetched.header("x-robots-tag").map(String::from);
    let indexing = compute_indexability(&url, robots_meta, x_robots_tag, robots);
    let canonical = classify_canonical(&document, page_url, stats);

    let soft_404 = is_soft_404(fetched.status, title.as_deref(), &document);
    if soft_404 {
        stats.increment_warning(WarningType::SoftNotFound);
    }

    PageAnalysis {
        url,
        status: fetched.status,
        load_time_ms: fetched.load_time_ms,
        size_kb: fetched.size_kb(),
        title,
        meta_description,
        h1_count,
        image_count,
        images_with_alt,
        dynamic_score: dynamic_score(script_count),
        indexing,
        canonical,
        is_soft_404: soft_404,
        is_server_error: fetched.status >= 500,
        crawl_error: None,
        social: extract_social(&document),
        structured_data: extract_structured_data(&fetched.html, stats),
    }
}

/// Records a page whose fetch failed.
///
/// The page keeps its place in the report with server-error-style markers and
/// the error message; everything content-derived is empty.
pub fn failed_page(page_url: &Url, error: &DriverError) -> PageAnalysis {
    let url = normalize_url(page_url.as_str());
    let message = error.to_string();

    PageAnalysis {
        url,
        status: 0,
        load_time_ms: 0,
        size_kb: 0.0,
        title: None,
        meta_description: None,
        h1_count: 0,
        image_count: 0,
        images_with_alt: 0,
        dynamic_score: 0,
        indexing: IndexingFacts {
            robots_meta_tag: None,
            x_robots_tag: None,
            is_indexable: false,
            indexing_issues: vec![format!("Page failed to load: {}", message)],
        },
        canonical: CanonicalFacts {
            canonical_url: None,
            canonical_type: CanonicalType::Missing,
            canonical_issues: vec!["Page failed to load".to_string()],
        },
        is_soft_404: false,
        is_server_error: true,
        crawl_error: Some(message),
        social: SocialFacts {
            open_graph: Default::default(),
            twitter: Default::default(),
            platforms_covered: Vec::new(),
            platforms_not_covered: SocialPlatform::iter().collect(),
        },
        structured_data: StructuredDataFacts::default(),
    }
}
