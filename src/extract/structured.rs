//! Structured data extraction (JSON-LD).

use regex::Regex;
use std::sync::LazyLock;

use crate::error_handling::{ProcessingStats, WarningType};

use super::types::StructuredDataFacts;

// Two patterns: one for double quotes, one for single quotes around the type
// attribute. Matching the raw HTML keeps script bodies intact, which the DOM
// text API does not guarantee for every parser.
static JSON_LD_DOUBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?is)<script[^>]*type\\s*=\\s*\"application/ld\\+json\"[^>]*>(.*?)</script>")
        .unwrap_or_else(|e| panic!("Failed to compile JSON-LD pattern: {}. This is a programming error.", e))
});
static JSON_LD_SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?is)<script[^>]*type\\s*=\\s*'application/ld\\+json'[^>]*>(.*?)</script>")
        .unwrap_or_else(|e| panic!("Failed to compile JSON-LD pattern: {}. This is a programming error.", e))
});

/// Extracts every JSON-LD block from raw HTML.
///
/// Malformed JSON in one block skips that block only (tracked as a warning);
/// top-level arrays are flattened; `@type` values are collected for the
/// schema-type summary.
pub fn extract_structured_data(html: &str, stats: &ProcessingStats) -> StructuredDataFacts {
    let mut json_ld = Vec::new();

    for re in [&JSON_LD_DOUBLE_RE, &JSON_LD_SINGLE_RE] {
        for cap in re.captures_iter(html) {
            let Some(body) = cap.get(1) else { continue };
            let body = body.as_str().trim();
            if body.is_empty() {
                continue;
            }
            match serde_json::from_str::<serde_json::Value>(body) {
                Ok(serde_json::Value::Array(values)) => json_ld.extend(values),
                Ok(value) => json_ld.push(value),
                Err(e) => {
                    log::debug!("Skipping malformed JSON-LD block: {}", e);
                    stats.increment_warning(WarningType::MalformedJsonLd);
                }
            }
        }
    }

    let mut schema_types = Vec::new();
    for value in &json_ld {
        match value.get("@type") {
            Some(serde_json::Value::String(t)) => schema_types.push(t.clone()),
            Some(serde_json::Value::Array(types)) => {
                schema_types.extend(types.iter().filter_map(|t| t.as_str().map(String::from)));
            }
            _ => {}
        }
    }

    StructuredDataFacts {
        has_schema: !json_ld.is_empty(),
        json_ld,
        schema_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> StructuredDataFacts {
        extract_structured_data(html, &ProcessingStats::new())
    }

    #[test]
    fn test_single_block() {
        let html = r#"<script type="application/ld+json">{"@type": "WebPage"}</script>"#;
        let facts = extract(html);
        assert!(facts.has_schema);
        assert_eq!(facts.json_ld.len(), 1);
        assert_eq!(facts.schema_types, vec!["WebPage"]);
    }

    #[test]
    fn test_array_block_is_flattened() {
        let html = r#"<script type="application/ld+json">[{"@type": "WebPage"}, {"@type": "Organization"}]</script>"#;
        let facts = extract(html);
        assert_eq!(facts.json_ld.len(), 2);
        assert_eq!(facts.schema_types, vec!["WebPage", "Organization"]);
    }

    #[test]
    fn test_type_array_collects_all() {
        let html = r#"<script type="application/ld+json">{"@type": ["WebPage", "Article"]}</script>"#;
        let facts = extract(html);
        assert_eq!(facts.schema_types, vec!["WebPage", "Article"]);
    }

    #[test]
    fn test_malformed_block_skipped_others_kept() {
        let html = r#"
            <script type="application/ld+json">{not valid json</script>
            <script type="application/ld+json">{"@type": "WebPage"}</script>
        "#;
        let stats = ProcessingStats::new();
        let facts = extract_structured_data(html, &stats);
        assert_eq!(facts.json_ld.len(), 1);
        assert_eq!(stats.get_warning_count(WarningType::MalformedJsonLd), 1);
    }

    #[test]
    fn test_single_quoted_type_attribute() {
        let html = r#"<script type='application/ld+json'>{"@type": "WebPage"}</script>"#;
        assert_eq!(extract(html).json_ld.len(), 1);
    }

    #[test]
    fn test_no_blocks() {
        let facts = extract("<html><body>plain page</body></html>");
        assert!(!facts.has_schema);
        assert!(facts.json_ld.is_empty());
        assert!(facts.schema_types.is_empty());
    }
}
