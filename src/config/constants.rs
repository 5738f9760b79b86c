//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the crate:
//! crawl budgets, network timeouts, and aggregation thresholds.

use std::time::Duration;

/// Default crawl budget when the caller supplies none.
///
/// This value is load-bearing beyond the crawl loop: the aggregator attaches a
/// partial-crawl disclaimer to any report covering fewer pages than this.
pub const DEFAULT_MAX_PAGES: usize = 15;

/// Hard ceiling on the crawl budget, regardless of what the caller asks for.
///
/// Every crawled page costs a full page load, so caller-supplied budgets are
/// clamped to this value.
pub const MAX_PAGES_CEILING: usize = 200;

/// Timeout for a full page load through the page driver.
pub const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for plain HTTP fetches of robots.txt and sitemap files.
pub const RESOURCE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// TCP connect timeout for the shared HTTP client.
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum URL length accepted anywhere in the pipeline.
///
/// Matches common browser and server limits; longer hrefs are dropped during
/// link discovery rather than enqueued.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of example URLs listed per reconciliation section of the
/// report. Longer lists are truncated with a "showing first N of M" note.
pub const MAX_EXAMPLE_URLS: usize = 20;

/// Sitemap locations probed in order; the first one that parses wins.
pub const SITEMAP_CANDIDATES: [&str; 3] = ["sitemap.xml", "sitemap_index.xml", "sitemap1.xml"];

/// Default User-Agent for page loads and robots/sitemap fetches.
///
/// Users can override this via the `--user-agent` CLI flag or the `Config`
/// struct when embedding the library.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
