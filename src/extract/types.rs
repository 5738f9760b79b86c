//! Per-page analysis types.

use std::collections::HashMap;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// How a page's canonical declaration classifies.
///
/// Exactly one of these applies to every page; more than one canonical tag
/// forces `Conflicting` regardless of where the tags point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalType {
    /// One canonical tag whose normalized target is the page itself.
    #[serde(rename = "self")]
    SelfReferential,
    /// No canonical tag at all.
    Missing,
    /// One canonical tag pointing at a different hostname.
    CrossDomain,
    /// Conflicting declarations: multiple tags, or a single tag pointing
    /// elsewhere on the same host.
    Conflicting,
}

/// The fixed set of platforms social-metadata coverage is reported over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)] // Variants are platform names
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
    Whatsapp,
    Slack,
    Discord,
    Pinterest,
}

/// Canonical declaration facts for one page.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalFacts {
    /// Normalized target of the first canonical tag, if any.
    pub canonical_url: Option<String>,
    /// Classification of the declaration.
    pub canonical_type: CanonicalType,
    /// Human-readable problems with the declaration.
    pub canonical_issues: Vec<String>,
}

/// Indexing eligibility facts for one page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexingFacts {
    /// Raw `<meta name="robots">` content, if present.
    pub robots_meta_tag: Option<String>,
    /// Raw `X-Robots-Tag` response header, if present.
    pub x_robots_tag: Option<String>,
    /// Whether the page is eligible for search indexing.
    pub is_indexable: bool,
    /// Reasons the page is not indexable, plus nofollow notes.
    ///
    /// Empty exactly when the page is indexable and robots.txt does not
    /// block it.
    pub indexing_issues: Vec<String>,
}

/// Social metadata coverage for one page.
///
/// Coverage is a fixed-rule heuristic, not a verified compatibility check:
/// any Open Graph tag is taken to cover the seven OG-consuming platforms, and
/// any Twitter Card tag to cover Twitter.
#[derive(Debug, Clone, Serialize)]
pub struct SocialFacts {
    /// Open Graph tags (`og:*`), property to content.
    pub open_graph: HashMap<String, String>,
    /// Twitter Card tags (`twitter:*`), name to content.
    pub twitter: HashMap<String, String>,
    /// Platforms the page's metadata is assumed to cover.
    pub platforms_covered: Vec<SocialPlatform>,
    /// The remainder of the fixed platform set.
    pub platforms_not_covered: Vec<SocialPlatform>,
}

/// Structured-data facts for one page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructuredDataFacts {
    /// Whether any JSON-LD block parsed.
    pub has_schema: bool,
    /// Parsed JSON-LD values (arrays flattened).
    pub json_ld: Vec<serde_json::Value>,
    /// `@type` values collected from the JSON-LD blocks.
    pub schema_types: Vec<String>,
}

/// Everything extracted from one crawled URL. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct PageAnalysis {
    /// Normalized page URL.
    pub url: String,
    /// Final HTTP status (0 when the page never loaded).
    pub status: u16,
    /// Wall-clock load time in milliseconds.
    pub load_time_ms: u64,
    /// Body size in kilobytes.
    pub size_kb: f64,

    /// Page title text, if any.
    pub title: Option<String>,
    /// Meta description content, if any.
    pub meta_description: Option<String>,
    /// Number of `<h1>` elements.
    pub h1_count: usize,
    /// Number of `<img>` elements.
    pub image_count: usize,
    /// Number of `<img>` elements with a non-empty `alt` attribute.
    /// Never exceeds `image_count`.
    pub images_with_alt: usize,
    /// 0-100 proxy for client-side dynamism, monotonic in script count.
    pub dynamic_score: u32,

    /// Indexing eligibility facts.
    #[serde(flatten)]
    pub indexing: IndexingFacts,
    /// Canonical declaration facts.
    #[serde(flatten)]
    pub canonical: CanonicalFacts,

    /// HTTP 200 with content that reads like a missing page.
    pub is_soft_404: bool,
    /// Status ≥ 500, or the page never loaded.
    pub is_server_error: bool,
    /// Populated when the fetch itself failed; `None` for loaded pages.
    pub crawl_error: Option<String>,

    /// Social metadata facts.
    #[serde(flatten)]
    pub social: SocialFacts,
    /// Structured-data facts.
    pub structured_data: StructuredDataFacts,
}
