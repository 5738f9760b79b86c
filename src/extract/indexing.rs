//! Indexability computation.
//!
//! A page is indexable unless one of three independent signals says
//! otherwise: its robots meta tag, its `X-Robots-Tag` response header, or a
//! robots.txt disallow rule. Each signal that fires appends its own reason,
//! so a page blocked three ways reports all three.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::robots::RobotsTxtData;
use crate::utils::parse_selector_unsafe;

use super::types::IndexingFacts;

const ROBOTS_META_SELECTOR_STR: &str = "meta[name='robots']";

static ROBOTS_META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ROBOTS_META_SELECTOR_STR, "ROBOTS_META_SELECTOR"));

/// Reads `<meta name="robots">` content, if present.
pub fn extract_robots_meta(document: &Html) -> Option<String> {
    document
        .select(&ROBOTS_META_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Combines the three indexing signals into the page's indexability verdict.
///
/// `noindex` in the meta tag or header clears indexability; `nofollow` in
/// either is recorded as an issue but does not affect it. A robots.txt
/// disallow match clears indexability regardless of what the meta/header
/// signals say.
pub fn compute_indexability(
    url: &str,
    robots_meta_tag: Option<String>,
    x_robots_tag: Option<String>,
    robots: &RobotsTxtData,
) -> IndexingFacts {
    let mut is_indexable = true;
    let mut issues = Vec::new();

    if let Some(meta) = robots_meta_tag.as_deref() {
        let lower = meta.to_ascii_lowercase();
        if lower.contains("noindex") {
            is_indexable = false;
            issues.push(format!("Robots meta tag contains noindex: \"{}\"", meta));
        }
        if lower.contains("nofollow") {
            issues.push(format!("Robots meta tag contains nofollow: \"{}\"", meta));
        }
    }

    if let Some(header) = x_robots_tag.as_deref() {
        let lower = header.to_ascii_lowercase();
        if lower.contains("noindex") {
            is_indexable = false;
            issues.push(format!("X-Robots-Tag header contains noindex: \"{}\"", header));
        }
        if lower.contains("nofollow") {
            issues.push(format!("X-Robots-Tag header contains nofollow: \"{}\"", header));
        }
    }

    if robots.is_blocked(url) {
        is_indexable = false;
        issues.push("Blocked by a robots.txt Disallow rule".to_string());
    }

    IndexingFacts {
        robots_meta_tag,
        x_robots_tag,
        is_indexable,
        indexing_issues: issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::parse_robots_txt;

    const URL: &str = "https://example.com/page";

    #[test]
    fn test_default_is_indexable_with_no_issues() {
        let facts = compute_indexability(URL, None, None, &RobotsTxtData::absent());
        assert!(facts.is_indexable);
        assert!(facts.indexing_issues.is_empty());
    }

    #[test]
    fn test_meta_noindex_clears_indexability() {
        let facts = compute_indexability(
            URL,
            Some("noindex, follow".to_string()),
            None,
            &RobotsTxtData::absent(),
        );
        assert!(!facts.is_indexable);
        assert_eq!(facts.indexing_issues.len(), 1);
    }

    #[test]
    fn test_header_noindex_clears_indexability() {
        let facts = compute_indexability(
            URL,
            None,
            Some("noindex".to_string()),
            &RobotsTxtData::absent(),
        );
        assert!(!facts.is_indexable);
    }

    #[test]
    fn test_nofollow_is_issue_only() {
        let facts = compute_indexability(
            URL,
            Some("index, nofollow".to_string()),
            None,
            &RobotsTxtData::absent(),
        );
        assert!(facts.is_indexable);
        assert_eq!(facts.indexing_issues.len(), 1);
        assert!(facts.indexing_issues[0].contains("nofollow"));
    }

    #[test]
    fn test_robots_txt_block_dominates_meta_signals() {
        let robots = parse_robots_txt("User-agent: *\nDisallow: /page\n");
        // An explicitly index-me meta tag does not rescue a robots.txt block
        let facts = compute_indexability(URL, Some("index, follow".to_string()), None, &robots);
        assert!(!facts.is_indexable);
        assert!(facts
            .indexing_issues
            .iter()
            .any(|i| i.contains("robots.txt")));
    }

    #[test]
    fn test_robots_txt_block_applies_to_mixed_case_rule() {
        let robots = parse_robots_txt("User-agent: *\nDisallow: /Admin\n");
        let facts =
            compute_indexability("https://example.com/Admin/panel", None, None, &robots);
        assert!(!facts.is_indexable);
    }

    #[test]
    fn test_all_three_signals_all_reported() {
        let robots = parse_robots_txt("User-agent: *\nDisallow: /\n");
        let facts = compute_indexability(
            URL,
            Some("noindex".to_string()),
            Some("noindex, nofollow".to_string()),
            &robots,
        );
        assert!(!facts.is_indexable);
        assert_eq!(facts.indexing_issues.len(), 4);
    }
}
