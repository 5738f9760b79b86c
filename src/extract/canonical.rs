//! Canonical link classification.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::app::url::normalize_url;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::parse_selector_unsafe;

use super::types::{CanonicalFacts, CanonicalType};

const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";

static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));

/// Classifies a page's canonical declaration.
///
/// All `<link rel="canonical">` hrefs are resolved against the page URL and
/// normalized before comparison:
/// - zero tags → `Missing`
/// - one tag equal to the page itself → `SelfReferential`
/// - one tag on a different hostname → `CrossDomain`
/// - one tag elsewhere on the same host → `Conflicting`
/// - more than one tag → `Conflicting` regardless of targets
pub fn classify_canonical(
    document: &Html,
    page_url: &Url,
    stats: &ProcessingStats,
) -> CanonicalFacts {
    let targets: Vec<String> = document
        .select(&CANONICAL_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| page_url.join(href).ok())
        .map(|resolved| normalize_url(resolved.as_str()))
        .collect();

    if targets.is_empty() {
        stats.increment_warning(WarningType::MissingCanonical);
        return CanonicalFacts {
            canonical_url: None,
            canonical_type: CanonicalType::Missing,
            canonical_issues: vec!["No canonical tag found".to_string()],
        };
    }

    if targets.len() > 1 {
        return CanonicalFacts {
            canonical_url: Some(targets[0].clone()),
            canonical_type: CanonicalType::Conflicting,
            canonical_issues: vec![format!(
                "{} canonical tags found; a page must declare at most one",
                targets.len()
            )],
        };
    }

    let target = &targets[0];
    let page_normalized = normalize_url(page_url.as_str());

    if *target == page_normalized {
        return CanonicalFacts {
            canonical_url: Some(target.clone()),
            canonical_type: CanonicalType::SelfReferential,
            canonical_issues: Vec::new(),
        };
    }

    let target_host = Url::parse(target).ok().and_then(|u| u.host_str().map(String::from));
    let page_host = page_url.host_str().map(String::from);

    if target_host != page_host {
        CanonicalFacts {
            canonical_url: Some(target.clone()),
            canonical_type: CanonicalType::CrossDomain,
            canonical_issues: vec![format!(
                "Canonical points to a different domain: {}",
                target
            )],
        }
    } else {
        CanonicalFacts {
            canonical_url: Some(target.clone()),
            canonical_type: CanonicalType::Conflicting,
            canonical_issues: vec![format!(
                "Canonical points to a different URL on the same host: {}",
                target
            )],
        }
    }
}
