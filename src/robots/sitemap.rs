//! Sitemap fetching and parsing.
//!
//! Probes the well-known sitemap locations in order and flattens one level of
//! sitemap-index nesting into a single URL list. Individual candidate
//! failures are swallowed; a site with no usable sitemap simply has no
//! reconciliation data.

use log::{debug, warn};
use regex::Regex;
use std::future::Future;
use std::sync::LazyLock;
use url::Url;

use crate::config::SITEMAP_CANDIDATES;
use crate::error_handling::{ErrorType, ProcessingStats};

static LOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<loc[^>]*>(.*?)</loc>").unwrap_or_else(|e| {
        panic!("Failed to compile <loc> pattern: {}. This is a programming error.", e)
    })
});

/// Flattened sitemap contents for one site.
#[derive(Debug, Clone, Default)]
pub struct SitemapData {
    /// Whether any sitemap candidate was fetched and parsed.
    pub has_sitemap: bool,
    /// Every page URL listed, across all child sitemaps.
    pub urls: Vec<String>,
    /// The sitemap file URLs the list was assembled from.
    pub sources: Vec<String>,
}

impl SitemapData {
    /// Returns the state for a site with no usable sitemap.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// One parsed sitemap XML document.
#[derive(Debug, PartialEq)]
pub enum SitemapDocument {
    /// A `<sitemapindex>` listing child sitemap locations.
    Index(Vec<String>),
    /// A `<urlset>` listing page URLs.
    UrlSet(Vec<String>),
}

/// Parses one sitemap document, distinguishing indexes from URL sets.
///
/// Returns `None` for content that is neither (HTML error pages, empty
/// bodies), which makes the caller move on to the next candidate.
pub fn parse_sitemap_document(xml: &str) -> Option<SitemapDocument> {
    let lower = xml.to_ascii_lowercase();
    let locs = extract_locs(xml);
    if lower.contains("<sitemapindex") {
        Some(SitemapDocument::Index(locs))
    } else if lower.contains("<urlset") {
        Some(SitemapDocument::UrlSet(locs))
    } else {
        None
    }
}

/// Extracts `<loc>` values, trimmed and unwrapped from CDATA sections.
fn extract_locs(xml: &str) -> Vec<String> {
    LOC_RE
        .captures_iter(xml)
        .filter_map(|cap| cap.get(1))
        .map(|m| {
            let value = m.as_str().trim();
            value
                .strip_prefix("<![CDATA[")
                .and_then(|v| v.strip_suffix("]]>"))
                .unwrap_or(value)
                .trim()
                .to_string()
        })
        .filter(|loc| !loc.is_empty())
        .collect()
}

/// Capability to fetch one XML resource and return its body.
///
/// `reqwest::Client` is the production implementation; tests substitute a
/// canned-body fetcher so candidate fallback and index resolution run without
/// network.
pub trait XmlFetcher: Send + Sync {
    /// Returns the body for `url`, or `None` for any fetch failure.
    fn fetch_xml(&self, url: &str) -> impl Future<Output = Option<String>> + Send;
}

impl XmlFetcher for reqwest::Client {
    async fn fetch_xml(&self, url: &str) -> Option<String> {
        let response = match self.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("Sitemap candidate {} not fetchable: {}", url, e);
                return None;
            }
        };
        if !response.status().is_success() {
            debug!("Sitemap candidate {} returned {}", url, response.status());
            return None;
        }
        response.text().await.ok()
    }
}

/// Fetches the site's sitemap, resolving one level of index nesting.
///
/// Tries `sitemap.xml`, `sitemap_index.xml`, and `sitemap1.xml` in order and
/// stops at the first candidate that parses. For an index document, each
/// child sitemap's `<url><loc>` entries are collected; a child that is itself
/// another index is not recursed into.
pub async fn fetch_sitemap<F: XmlFetcher>(
    fetcher: &F,
    base_url: &Url,
    stats: &ProcessingStats,
) -> SitemapData {
    let origin = base_url.origin().ascii_serialization();

    for candidate in SITEMAP_CANDIDATES {
        let candidate_url = format!("{}/{}", origin, candidate);
        let Some(body) = fetcher.fetch_xml(&candidate_url).await else {
            continue;
        };
        let Some(document) = parse_sitemap_document(&body) else {
            debug!("Sitemap candidate {} did not parse as a sitemap", candidate_url);
            continue;
        };

        match document {
            SitemapDocument::UrlSet(urls) => {
                debug!("Using {} with {} URL(s)", candidate_url, urls.len());
                return SitemapData {
                    has_sitemap: true,
                    urls,
                    sources: vec![candidate_url],
                };
            }
            SitemapDocument::Index(children) => {
                let mut urls = Vec::new();
                let mut sources = vec![candidate_url.clone()];
                for child_url in children {
                    let Some(child_body) = fetcher.fetch_xml(&child_url).await else {
                        warn!("Child sitemap {} not fetchable, skipping", child_url);
                        continue;
                    };
                    match parse_sitemap_document(&child_body) {
                        Some(SitemapDocument::UrlSet(child_urls)) => {
                            urls.extend(child_urls);
                            sources.push(child_url);
                        }
                        // One level of recursion only: nested indexes are skipped
                        Some(SitemapDocument::Index(_)) | None => {
                            warn!("Child sitemap {} skipped (nested index or unparseable)", child_url);
                        }
                    }
                }
                debug!(
                    "Resolved sitemap index {} to {} URL(s) from {} child sitemap(s)",
                    candidate_url,
                    urls.len(),
                    sources.len().saturating_sub(1)
                );
                return SitemapData {
                    has_sitemap: true,
                    urls,
                    sources,
                };
            }
        }
    }

    stats.increment_error(ErrorType::SitemapFetchError);
    SitemapData::absent()
}
