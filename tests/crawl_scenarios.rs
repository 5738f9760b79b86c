//! End-to-end crawl scenarios against the fake page driver.

mod helpers;

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;
use url::Url;

use helpers::FakeDriver;
use site_audit::crawl::run_crawl;
use site_audit::extract::CanonicalType;
use site_audit::report::aggregate;
use site_audit::robots::{parse_robots_txt, RobotsTxtData, SitemapData};
use site_audit::ProcessingStats;

async fn crawl(
    driver: &FakeDriver,
    base: &str,
    max_pages: usize,
    robots: &RobotsTxtData,
) -> Vec<site_audit::extract::PageAnalysis> {
    let base_url = Url::parse(base).unwrap();
    let stats = ProcessingStats::new();
    run_crawl(
        driver,
        &base_url,
        max_pages,
        robots,
        &stats,
        &CancellationToken::new(),
    )
    .await
}

#[tokio::test]
async fn basic_single_page_crawl() {
    let driver = FakeDriver::new().with_page(
        "https://example.com",
        "<html><head><title>Home</title></head><body>No links here.</body></html>",
    );

    let pages = crawl(&driver, "https://example.com/", 1, &RobotsTxtData::absent()).await;
    let report = aggregate(&pages, &RobotsTxtData::absent(), &SitemapData::absent());

    assert_eq!(report.summary.total_pages, 1);
    assert!(!report.sitemap.has_sitemap);
    assert_eq!(report.sitemap.crawled_not_in_sitemap.count, 1);
    assert_eq!(report.sitemap.in_sitemap_not_crawled.count, 0);
}

#[tokio::test]
async fn crawl_follows_internal_links_breadth_first() {
    let driver = FakeDriver::new()
        .with_page(
            "https://example.com",
            r#"<body><a href="/a">a</a><a href="/b">b</a></body>"#,
        )
        .with_page("https://example.com/a", r#"<body><a href="/c">c</a></body>"#)
        .with_page("https://example.com/b", "<body></body>")
        .with_page("https://example.com/c", "<body></body>");

    let pages = crawl(&driver, "https://example.com/", 10, &RobotsTxtData::absent()).await;
    let urls: Vec<&str> = pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://example.com",
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/c",
        ]
    );
}

#[tokio::test]
async fn crawl_respects_page_budget() {
    let driver = FakeDriver::new()
        .with_page(
            "https://example.com",
            r#"<body><a href="/a">a</a><a href="/b">b</a><a href="/c">c</a></body>"#,
        )
        .with_page("https://example.com/a", "<body></body>")
        .with_page("https://example.com/b", "<body></body>")
        .with_page("https://example.com/c", "<body></body>");

    let pages = crawl(&driver, "https://example.com/", 2, &RobotsTxtData::absent()).await;
    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn no_url_is_analyzed_twice() {
    // Every page links to every other page, including itself
    let nav = r#"<body>
        <a href="/">home</a><a href="/a">a</a><a href="/b">b</a>
    </body>"#;
    let driver = FakeDriver::new()
        .with_page("https://example.com", nav)
        .with_page("https://example.com/a", nav)
        .with_page("https://example.com/b", nav);

    let pages = crawl(&driver, "https://example.com/", 10, &RobotsTxtData::absent()).await;
    let mut urls: Vec<&str> = pages.iter().map(|p| p.url.as_str()).collect();
    let total = urls.len();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), total, "each URL must appear at most once");
    assert_eq!(total, 3);
}

#[tokio::test]
async fn external_links_are_not_followed() {
    let driver = FakeDriver::new().with_page(
        "https://example.com",
        r#"<body>
            <a href="https://other.com/page">external</a>
            <a href="https://blog.example.com/post">subdomain</a>
        </body>"#,
    );

    let pages = crawl(&driver, "https://example.com/", 10, &RobotsTxtData::absent()).await;
    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn robots_blocked_page_is_not_indexable() {
    let robots = parse_robots_txt("User-agent: *\nDisallow: /private\n");
    let driver = FakeDriver::new()
        .with_page(
            "https://example.com",
            r#"<body><a href="/private/page">secret</a></body>"#,
        )
        .with_page(
            "https://example.com/private/page",
            "<html><head><title>Secret</title></head></html>",
        );

    let pages = crawl(&driver, "https://example.com/", 10, &robots).await;
    let blocked = pages
        .iter()
        .find(|p| p.url == "https://example.com/private/page")
        .expect("blocked page should still be crawled and analyzed");

    assert!(!blocked.indexing.is_indexable);
    assert!(blocked
        .indexing
        .indexing_issues
        .iter()
        .any(|i| i.contains("robots.txt")));

    let report = aggregate(&pages, &robots, &SitemapData::absent());
    assert_eq!(report.indexing_health.blocked_by_robots.count, 1);
    assert_eq!(report.robots_txt.blocked_urls.len(), 1);
}

#[tokio::test]
async fn conflicting_canonical_with_two_tags() {
    let driver = FakeDriver::new().with_page(
        "https://example.com",
        r#"<head>
            <link rel="canonical" href="https://example.com">
            <link rel="canonical" href="https://example.com/alt">
        </head>"#,
    );

    let pages = crawl(&driver, "https://example.com/", 1, &RobotsTxtData::absent()).await;
    assert_eq!(
        pages[0].canonical.canonical_type,
        CanonicalType::Conflicting
    );

    let report = aggregate(&pages, &RobotsTxtData::absent(), &SitemapData::absent());
    assert_eq!(report.canonical_health.conflicting_count, 1);
    assert_eq!(report.canonical_health.self_canonical_count, 0);
}

#[tokio::test]
async fn soft_404_detected_and_reported() {
    let driver = FakeDriver::new().with_page(
        "https://example.com",
        "<html><head><title>404 - Page Not Found</title></head><body></body></html>",
    );

    let pages = crawl(&driver, "https://example.com/", 1, &RobotsTxtData::absent()).await;
    assert!(pages[0].is_soft_404);
    assert_eq!(pages[0].status, 200);

    let report = aggregate(&pages, &RobotsTxtData::absent(), &SitemapData::absent());
    assert_eq!(report.indexing_health.soft_404_pages.count, 1);
    assert_eq!(report.canonical_health.self_canonical_count, 0);
}

#[tokio::test]
async fn noindex_header_page_counted_not_indexed() {
    let mut headers = HashMap::new();
    headers.insert("x-robots-tag".to_string(), "noindex, nofollow".to_string());
    let driver = FakeDriver::new().with_response(
        "https://example.com",
        200,
        headers,
        "<html><head><title>Hidden</title></head></html>",
        100,
    );

    let pages = crawl(&driver, "https://example.com/", 1, &RobotsTxtData::absent()).await;
    assert!(!pages[0].indexing.is_indexable);

    let report = aggregate(&pages, &RobotsTxtData::absent(), &SitemapData::absent());
    assert_eq!(report.indexing_health.noindex_pages.count, 1);
    assert_eq!(report.indexing_health.crawled_not_indexed.count, 1);
    assert_eq!(report.indexing_health.index_health_score, 0);
}

#[tokio::test]
async fn failed_page_is_recorded_and_crawl_continues() {
    // /down has no canned response, so the driver fails it
    let driver = FakeDriver::new()
        .with_page(
            "https://example.com",
            r#"<body><a href="/down">down</a><a href="/up">up</a></body>"#,
        )
        .with_page("https://example.com/up", "<body>fine</body>");

    let pages = crawl(&driver, "https://example.com/", 10, &RobotsTxtData::absent()).await;
    assert_eq!(pages.len(), 3);

    let down = pages
        .iter()
        .find(|p| p.url == "https://example.com/down")
        .unwrap();
    assert!(down.is_server_error);
    assert!(down.crawl_error.is_some());
    assert_eq!(down.status, 0);

    let report = aggregate(&pages, &RobotsTxtData::absent(), &SitemapData::absent());
    assert_eq!(report.indexing_health.server_error_pages.count, 1);
}

#[tokio::test]
async fn cancellation_stops_the_crawl_between_pages() {
    let driver = FakeDriver::new().with_page("https://example.com", "<body></body>");
    let base_url = Url::parse("https://example.com/").unwrap();
    let stats = ProcessingStats::new();

    let cancel = CancellationToken::new();
    cancel.cancel();
    let pages = run_crawl(
        &driver,
        &base_url,
        10,
        &RobotsTxtData::absent(),
        &stats,
        &cancel,
    )
    .await;
    assert!(pages.is_empty());
}

#[tokio::test]
async fn sitemap_reconciliation_in_full_crawl() {
    let driver = FakeDriver::new()
        .with_page("https://example.com", r#"<body><a href="/a">a</a></body>"#)
        .with_page("https://example.com/a", "<body></body>");

    let pages = crawl(&driver, "https://example.com/", 10, &RobotsTxtData::absent()).await;
    let sitemap = SitemapData {
        has_sitemap: true,
        urls: vec![
            "https://example.com/".to_string(),
            "https://example.com/a".to_string(),
            "https://example.com/unlinked".to_string(),
        ],
        sources: vec!["https://example.com/sitemap.xml".to_string()],
    };
    let report = aggregate(&pages, &RobotsTxtData::absent(), &sitemap);

    assert_eq!(
        report.sitemap.in_sitemap_not_crawled.examples,
        vec!["https://example.com/unlinked"]
    );
    assert_eq!(report.sitemap.crawled_not_in_sitemap.count, 0);
}
