//! Crawl orchestration.
//!
//! An explicit frontier/visited/budget state machine rather than a recursive
//! chain, so the termination and dedup invariants are unit-testable in
//! isolation from any I/O. The loop is sequential: one page in flight at a
//! time, breadth-first order, cancellation checked at every frontier pop.

mod links;

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::app::log_progress;
use crate::app::url::normalize_url;
use crate::driver::PageDriver;
use crate::error_handling::{ErrorType, ProcessingStats};
use crate::extract::{analyze_fetched, failed_page, PageAnalysis};
use crate::robots::RobotsTxtData;

// Re-export public API
pub use links::discover_links;

/// Ephemeral crawl state, owned by one crawl invocation.
///
/// Invariants:
/// - a URL enters `visited` exactly once, at dequeue time;
/// - nothing already visited is enqueued;
/// - frontier duplicates (the same URL enqueued twice before its first
///   dequeue) are tolerated and collapsed at pop time.
pub struct CrawlSession {
    hostname: String,
    visited: HashSet<String>,
    frontier: VecDeque<String>,
    max_pages: usize,
}

impl CrawlSession {
    /// Seeds the session with the normalized base URL.
    pub fn new(base_url: &Url, max_pages: usize) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(normalize_url(base_url.as_str()));
        Self {
            hostname: base_url.host_str().unwrap_or_default().to_string(),
            visited: HashSet::new(),
            frontier,
            max_pages,
        }
    }

    /// Hostname used for same-host link tests.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Number of URLs dequeued so far. Never exceeds the budget.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Current frontier length.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Whether the budget allows dequeuing another page.
    pub fn budget_remaining(&self) -> bool {
        self.visited.len() < self.max_pages
    }

    /// Pops the next URL to fetch and marks it visited.
    ///
    /// Skips over frontier entries that were visited since being enqueued
    /// (defensive pop-time dedupe). Returns `None` when the frontier is
    /// drained or the budget is spent.
    pub fn next_url(&mut self) -> Option<String> {
        if !self.budget_remaining() {
            return None;
        }
        while let Some(url) = self.frontier.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
            debug!("Skipping already-visited frontier entry: {}", url);
        }
        None
    }

    /// Appends newly discovered links to the frontier tail.
    ///
    /// Visited URLs are never enqueued; order of the input is preserved so
    /// the crawl stays breadth-first.
    pub fn enqueue_links<I: IntoIterator<Item = String>>(&mut self, links: I) {
        for link in links {
            if !self.visited.contains(&link) {
                self.frontier.push_back(link);
            }
        }
    }
}

/// Runs one crawl to completion and returns the per-page analyses.
///
/// Per-page fetch failures are recorded and the loop continues; only
/// cancellation, an empty frontier, or an exhausted budget end the crawl.
pub async fn run_crawl<D: PageDriver>(
    driver: &D,
    base_url: &Url,
    max_pages: usize,
    robots: &RobotsTxtData,
    stats: &ProcessingStats,
    cancel: &CancellationToken,
) -> Vec<PageAnalysis> {
    let start_time = Instant::now();
    let mut session = CrawlSession::new(base_url, max_pages);
    let mut pages = Vec::new();

    loop {
        if cancel.is_cancelled() {
            info!(
                "Crawl cancelled after {} page(s); returning partial results",
                session.visited_count()
            );
            break;
        }
        let Some(url) = session.next_url() else {
            break;
        };

        let page_url = match Url::parse(&url) {
            Ok(u) => u,
            Err(e) => {
                // Normalized URLs come from the url crate, so this is unexpected
                warn!("Dropping unparseable frontier URL {}: {}", url, e);
                continue;
            }
        };

        debug!("Fetching {}", url);
        match driver.fetch_page(&url).await {
            Ok(fetched) => {
                let analysis = analyze_fetched(&page_url, &fetched, robots, stats);
                if analysis.is_server_error {
                    stats.increment_error(ErrorType::PageServerError);
                }
                session.enqueue_links(discover_links(&fetched.html, &page_url, session.hostname()));
                pages.push(analysis);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", url, e);
                stats.increment_error(match e {
                    crate::error_handling::DriverError::Timeout(_) => ErrorType::PageLoadTimeout,
                    _ => ErrorType::PageLoadNetworkError,
                });
                pages.push(failed_page(&page_url, &e));
            }
        }

        log_progress(
            start_time,
            session.visited_count(),
            max_pages,
            session.frontier_len(),
        );
    }

    pages
}
