//! Site-wide aggregation.
//!
//! A pure function over the per-page analyses plus robots/sitemap data. No
//! network I/O happens here; every number is derived from its inputs, so the
//! whole report is reproducible from a crawl's output.

use std::collections::{BTreeMap, HashSet};

use crate::app::url::normalize_url;
use crate::config::DEFAULT_MAX_PAGES;
use crate::extract::{CanonicalType, PageAnalysis};
use crate::robots::{RobotsTxtData, SitemapData};

use super::types::{
    CanonicalGroup, CanonicalHealth, CrawlSummary, ExampleList, IndexingHealth, RobotsTxtSection,
    SitemapSection, SiteType, SiteWideReport,
};

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn summarize(pages: &[PageAnalysis]) -> CrawlSummary {
    let total = pages.len();

    let fast = pages.iter().filter(|p| p.load_time_ms < 1000).count();
    let slow = pages.iter().filter(|p| p.load_time_ms >= 3000).count();
    let moderate = total - fast - slow;

    let average_load_time_ms = if total == 0 {
        0
    } else {
        pages.iter().map(|p| p.load_time_ms).sum::<u64>() / total as u64
    };

    // Discrete bucket table, deliberately not interpolated
    let on_page_performance_score = match average_load_time_ms {
        t if t < 1000 => 90,
        t if t < 2000 => 80,
        t if t < 3000 => 70,
        _ => 50,
    };

    let total_images: usize = pages.iter().map(|p| p.image_count).sum();
    let images_with_alt: usize = pages.iter().map(|p| p.images_with_alt).sum();

    let average_h1_count = if total == 0 {
        0.0
    } else {
        pages.iter().map(|p| p.h1_count).sum::<usize>() as f64 / total as f64
    };

    let mean_dynamic = if total == 0 {
        0.0
    } else {
        pages.iter().map(|p| p.dynamic_score as f64).sum::<f64>() / total as f64
    };
    let site_type = if mean_dynamic > 50.0 {
        SiteType::Dynamic
    } else if mean_dynamic > 20.0 {
        SiteType::Hybrid
    } else {
        SiteType::Static
    };

    CrawlSummary {
        total_pages: total,
        fast_pages: fast,
        moderate_pages: moderate,
        slow_pages: slow,
        average_load_time_ms,
        on_page_performance_score,
        image_alt_coverage_percent: percent(images_with_alt, total_images),
        average_h1_count,
        site_type,
    }
}

fn indexing_health(pages: &[PageAnalysis], robots: &RobotsTxtData) -> IndexingHealth {
    let total = pages.len();
    let urls_where = |pred: &dyn Fn(&PageAnalysis) -> bool| -> Vec<String> {
        pages
            .iter()
            .filter(|p| pred(p))
            .map(|p| p.url.clone())
            .collect()
    };

    let indexable = pages.iter().filter(|p| p.indexing.is_indexable).count();
    let has_noindex = |p: &PageAnalysis| {
        let meta = p
            .indexing
            .robots_meta_tag
            .as_deref()
            .map(|m| m.to_ascii_lowercase().contains("noindex"))
            .unwrap_or(false);
        let header = p
            .indexing
            .x_robots_tag
            .as_deref()
            .map(|h| h.to_ascii_lowercase().contains("noindex"))
            .unwrap_or(false);
        meta || header
    };

    IndexingHealth {
        indexable_pages: indexable,
        blocked_by_robots: ExampleList::from_urls(urls_where(&|p| robots.is_blocked(&p.url))),
        noindex_pages: ExampleList::from_urls(urls_where(&has_noindex)),
        crawled_not_indexed: ExampleList::from_urls(urls_where(&|p| !p.indexing.is_indexable)),
        soft_404_pages: ExampleList::from_urls(urls_where(&|p| p.is_soft_404)),
        server_error_pages: ExampleList::from_urls(urls_where(&|p| p.is_server_error)),
        index_health_score: percent(indexable, total),
    }
}

fn canonical_health(pages: &[PageAnalysis]) -> CanonicalHealth {
    let total = pages.len();
    let count_of = |t: CanonicalType| {
        pages
            .iter()
            .filter(|p| p.canonical.canonical_type == t)
            .count()
    };
    let self_count = count_of(CanonicalType::SelfReferential);

    // Group pages by shared non-self canonical target; BTreeMap keeps the
    // groups in a stable order for the report.
    let mut by_target: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for page in pages {
        if page.canonical.canonical_type == CanonicalType::SelfReferential {
            continue;
        }
        if let Some(target) = &page.canonical.canonical_url {
            by_target
                .entry(target.clone())
                .or_default()
                .push(page.url.clone());
        }
    }
    let duplicate_canonical_targets: Vec<CanonicalGroup> = by_target
        .into_iter()
        .filter(|(_, pages)| pages.len() >= 2)
        .map(|(target, pages)| CanonicalGroup { target, pages })
        .collect();

    CanonicalHealth {
        self_canonical_count: self_count,
        missing_count: count_of(CanonicalType::Missing),
        conflicting_count: count_of(CanonicalType::Conflicting),
        cross_domain_count: count_of(CanonicalType::CrossDomain),
        duplicate_canonical_targets,
        canonical_health_score: percent(self_count, total),
    }
}

fn sitemap_section(pages: &[PageAnalysis], sitemap: &SitemapData) -> SitemapSection {
    let crawled: HashSet<String> = pages.iter().map(|p| p.url.clone()).collect();
    let listed: HashSet<String> = sitemap
        .urls
        .iter()
        .map(|u| normalize_url(u))
        .collect();

    let mut in_sitemap_not_crawled: Vec<String> =
        listed.difference(&crawled).cloned().collect();
    let mut crawled_not_in_sitemap: Vec<String> =
        crawled.difference(&listed).cloned().collect();
    in_sitemap_not_crawled.sort();
    crawled_not_in_sitemap.sort();

    SitemapSection {
        has_sitemap: sitemap.has_sitemap,
        url_count: sitemap.urls.len(),
        sources: sitemap.sources.clone(),
        in_sitemap_not_crawled: ExampleList::from_urls(in_sitemap_not_crawled),
        crawled_not_in_sitemap: ExampleList::from_urls(crawled_not_in_sitemap),
    }
}

fn robots_section(pages: &[PageAnalysis], robots: &RobotsTxtData) -> RobotsTxtSection {
    // Distinct crawled URLs matching a rule; pages are already unique, so
    // checking each once keeps the list free of double counting.
    let blocked_urls: Vec<String> = pages
        .iter()
        .filter(|p| robots.is_blocked(&p.url))
        .map(|p| p.url.clone())
        .collect();

    RobotsTxtSection {
        has_robots_txt: robots.has_robots_txt,
        disallow_rule_count: robots.disallow_rules.len(),
        blocked_urls,
    }
}

/// Builds the site-wide report from a finished crawl.
pub fn aggregate(
    pages: &[PageAnalysis],
    robots: &RobotsTxtData,
    sitemap: &SitemapData,
) -> SiteWideReport {
    let summary = summarize(pages);

    let mut notes = Vec::new();
    if summary.total_pages < DEFAULT_MAX_PAGES {
        notes.push(format!(
            "Partial crawl: only {} page(s) analyzed; site-wide issue counts likely understate the full site.",
            summary.total_pages
        ));
    }

    SiteWideReport {
        summary,
        indexing_health: indexing_health(pages, robots),
        canonical_health: canonical_health(pages),
        sitemap: sitemap_section(pages, sitemap),
        robots_txt: robots_section(pages, robots),
        notes,
    }
}
