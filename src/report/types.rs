//! Site-wide report types.

use serde::Serialize;

use crate::config::MAX_EXAMPLE_URLS;

/// Site character inferred from the mean per-page dynamic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    /// Mean dynamic score of 20 or less.
    Static,
    /// Mean dynamic score above 20.
    Hybrid,
    /// Mean dynamic score above 50.
    Dynamic,
}

/// A capped list of example URLs with its true count.
///
/// Report sections never carry more than [`MAX_EXAMPLE_URLS`] examples; the
/// count always reflects the full set, and a note flags the truncation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExampleList {
    /// Total number of matching URLs.
    pub count: usize,
    /// Up to [`MAX_EXAMPLE_URLS`] example URLs.
    pub examples: Vec<String>,
    /// "Showing first N of M" when truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExampleList {
    /// Builds the list, truncating to the example cap.
    pub fn from_urls(mut urls: Vec<String>) -> Self {
        let count = urls.len();
        let note = if count > MAX_EXAMPLE_URLS {
            urls.truncate(MAX_EXAMPLE_URLS);
            Some(format!("Showing first {} of {}", MAX_EXAMPLE_URLS, count))
        } else {
            None
        };
        Self {
            count,
            examples: urls,
            note,
        }
    }
}

/// Cross-page summary metrics.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlSummary {
    /// Number of pages analyzed.
    pub total_pages: usize,
    /// Pages loading in under 1000ms.
    pub fast_pages: usize,
    /// Pages loading in 1000-2999ms.
    pub moderate_pages: usize,
    /// Pages loading in 3000ms or more.
    pub slow_pages: usize,
    /// Mean load time across all pages (0 when no pages).
    pub average_load_time_ms: u64,
    /// Bucketed performance score: exactly one of 90, 80, 70, 50.
    pub on_page_performance_score: u32,
    /// Percentage of images carrying alt text, site-wide.
    pub image_alt_coverage_percent: u32,
    /// Mean `<h1>` count per page.
    pub average_h1_count: f64,
    /// Inferred site character.
    pub site_type: SiteType,
}

/// Cross-page indexing health.
#[derive(Debug, Clone, Serialize)]
pub struct IndexingHealth {
    /// Pages eligible for indexing.
    pub indexable_pages: usize,
    /// Pages matching a robots.txt disallow rule.
    pub blocked_by_robots: ExampleList,
    /// Pages carrying a noindex directive (meta or header).
    pub noindex_pages: ExampleList,
    /// Pages crawled but not indexable, for any reason.
    pub crawled_not_indexed: ExampleList,
    /// HTTP 200 pages whose content reads like a missing page.
    pub soft_404_pages: ExampleList,
    /// Pages with 5xx status or failed loads.
    pub server_error_pages: ExampleList,
    /// round(indexable / total × 100).
    pub index_health_score: u32,
}

/// Pages declaring the same non-self canonical target.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalGroup {
    /// The shared canonical target.
    pub target: String,
    /// The pages declaring it.
    pub pages: Vec<String>,
}

/// Cross-page canonical health.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalHealth {
    /// Pages whose single canonical tag points at themselves.
    pub self_canonical_count: usize,
    /// Pages with no canonical tag.
    pub missing_count: usize,
    /// Pages with conflicting declarations.
    pub conflicting_count: usize,
    /// Pages whose canonical points at another domain.
    pub cross_domain_count: usize,
    /// Non-self canonical targets shared by two or more pages.
    pub duplicate_canonical_targets: Vec<CanonicalGroup>,
    /// round(self-canonical / total × 100).
    pub canonical_health_score: u32,
}

/// Sitemap/crawl reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapSection {
    /// Whether a sitemap was found.
    pub has_sitemap: bool,
    /// Number of URLs listed across all resolved sitemaps.
    pub url_count: usize,
    /// The sitemap file URLs used.
    pub sources: Vec<String>,
    /// Sitemap URLs the crawl never reached.
    pub in_sitemap_not_crawled: ExampleList,
    /// Crawled URLs absent from the sitemap.
    pub crawled_not_in_sitemap: ExampleList,
}

/// robots.txt summary for the report.
#[derive(Debug, Clone, Serialize)]
pub struct RobotsTxtSection {
    /// Whether a robots.txt file was found.
    pub has_robots_txt: bool,
    /// Number of honored disallow rules.
    pub disallow_rule_count: usize,
    /// Distinct crawled URLs matching a disallow rule.
    pub blocked_urls: Vec<String>,
}

/// The site-wide aggregate, derived purely from the per-page analyses plus
/// robots/sitemap data.
#[derive(Debug, Clone, Serialize)]
pub struct SiteWideReport {
    /// Cross-page summary metrics.
    pub summary: CrawlSummary,
    /// Indexing eligibility across the crawl.
    pub indexing_health: IndexingHealth,
    /// Canonical declarations across the crawl.
    pub canonical_health: CanonicalHealth,
    /// Sitemap/crawl reconciliation.
    pub sitemap: SitemapSection,
    /// robots.txt summary.
    pub robots_txt: RobotsTxtSection,
    /// Caveats about the report itself (e.g. partial-crawl disclaimer).
    pub notes: Vec<String>,
}
