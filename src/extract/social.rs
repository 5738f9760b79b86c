//! Social metadata extraction.
//!
//! Extracts Open Graph and Twitter Card meta tags and derives platform
//! coverage from them. Coverage is a fixed-rule heuristic - the presence of
//! any OG tag is taken to satisfy every OG-consuming platform - and is not
//! verified against each platform's actual crawler requirements.

use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

use crate::utils::parse_selector_unsafe;

use super::types::{SocialFacts, SocialPlatform};

const OPEN_GRAPH_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;
const TWITTER_SELECTOR_STR: &str = r#"meta[name^="twitter:"]"#;

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OPEN_GRAPH_SELECTOR_STR, "OPEN_GRAPH_SELECTOR"));
static TWITTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_SELECTOR_STR, "TWITTER_SELECTOR"));

/// Extracts Open Graph tags (`meta[property^="og:"]`), property to content.
fn extract_open_graph(document: &Html) -> HashMap<String, String> {
    let mut tags = HashMap::new();
    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        if let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) {
            tags.insert(property.to_string(), content.to_string());
        }
    }
    tags
}

/// Extracts Twitter Card tags (`meta[name^="twitter:"]`), name to content.
fn extract_twitter_cards(document: &Html) -> HashMap<String, String> {
    let mut tags = HashMap::new();
    for element in document.select(&TWITTER_SELECTOR) {
        if let (Some(name), Some(content)) = (
            element.value().attr("name"),
            element.value().attr("content"),
        ) {
            tags.insert(name.to_string(), content.to_string());
        }
    }
    tags
}

/// Extracts social metadata and derives platform coverage.
///
/// Any OG tag covers {facebook, linkedin, instagram, whatsapp, slack,
/// discord, pinterest}; any Twitter Card tag covers {twitter}.
pub fn extract_social(document: &Html) -> SocialFacts {
    let open_graph = extract_open_graph(document);
    let twitter = extract_twitter_cards(document);

    let covered: Vec<SocialPlatform> = SocialPlatform::iter()
        .filter(|platform| match platform {
            SocialPlatform::Twitter => !twitter.is_empty(),
            _ => !open_graph.is_empty(),
        })
        .collect();
    let not_covered: Vec<SocialPlatform> = SocialPlatform::iter()
        .filter(|platform| !covered.contains(platform))
        .collect();

    SocialFacts {
        open_graph,
        twitter,
        platforms_covered: covered,
        platforms_not_covered: not_covered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tags_covers_nothing() {
        let document = Html::parse_document("<html><head></head></html>");
        let facts = extract_social(&document);
        assert!(facts.platforms_covered.is_empty());
        assert_eq!(facts.platforms_not_covered.len(), 8);
    }

    #[test]
    fn test_og_tags_cover_seven_platforms() {
        let document = Html::parse_document(
            r#"<head><meta property="og:title" content="T"><meta property="og:image" content="i.png"></head>"#,
        );
        let facts = extract_social(&document);
        assert_eq!(facts.open_graph.len(), 2);
        assert_eq!(facts.platforms_covered.len(), 7);
        assert!(!facts.platforms_covered.contains(&SocialPlatform::Twitter));
        assert_eq!(facts.platforms_not_covered, vec![SocialPlatform::Twitter]);
    }

    #[test]
    fn test_twitter_tag_covers_twitter_only() {
        let document = Html::parse_document(
            r#"<head><meta name="twitter:card" content="summary"></head>"#,
        );
        let facts = extract_social(&document);
        assert_eq!(facts.platforms_covered, vec![SocialPlatform::Twitter]);
        assert_eq!(facts.platforms_not_covered.len(), 7);
    }

    #[test]
    fn test_both_tag_families_cover_all_eight() {
        let document = Html::parse_document(
            r#"<head>
                <meta property="og:title" content="T">
                <meta name="twitter:card" content="summary">
            </head>"#,
        );
        let facts = extract_social(&document);
        assert_eq!(facts.platforms_covered.len(), 8);
        assert!(facts.platforms_not_covered.is_empty());
    }
}
