//! site_audit library: site crawling and SEO health reporting
//!
//! This library crawls a site's internal link graph with a bounded
//! breadth-first frontier, extracts indexing/canonical/social/structured-data
//! signals per page, and aggregates them into a site-wide report.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{crawl_and_analyze_site, Config, NoopSynthesizer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_url: "https://example.com".to_string(),
//!     max_pages: 25,
//!     ..Default::default()
//! };
//!
//! let audit = crawl_and_analyze_site(config, &NoopSynthesizer).await?;
//! println!("Analyzed {} pages, index health {}",
//!          audit.report.summary.total_pages,
//!          audit.report.indexing_health.index_health_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod crawl;
pub mod driver;
mod error_handling;
pub mod extract;
mod issues;
pub mod report;
pub mod robots;
pub mod initialization;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AuditError, DriverError, ErrorType, ProcessingStats, WarningType};
pub use issues::{Issue, IssueSeverity, IssueSynthesizer, NoopSynthesizer};
pub use run::{crawl_and_analyze_site, crawl_and_analyze_site_with_driver, SiteAudit};

// Internal run module (contains the top-level orchestration)
mod run {
    use std::time::Instant;

    use log::{info, warn};
    use serde::Serialize;
    use tokio_util::sync::CancellationToken;

    use crate::app::url::validate_base_url;
    use crate::config::Config;
    use crate::crawl::run_crawl;
    use crate::driver::{HttpPageDriver, PageDriver};
    use crate::error_handling::{log_statistics, AuditError, ErrorType, ProcessingStats};
    use crate::extract::PageAnalysis;
    use crate::initialization::init_client;
    use crate::issues::{Issue, IssueSynthesizer};
    use crate::report::{aggregate, SiteWideReport};
    use crate::robots::{fetch_robots_txt, fetch_sitemap};

    /// Results of one crawl-and-analyze invocation.
    #[derive(Debug, Clone, Serialize)]
    pub struct SiteAudit {
        /// Always `true` for a returned audit; fatal conditions surface as
        /// an error instead of partial data.
        pub success: bool,
        /// Normalized seed URL the audit covers.
        pub url: String,
        /// Issue category the synthesizer was asked for.
        pub category: String,
        /// Elapsed wall-clock time in seconds.
        pub elapsed_seconds: f64,
        /// The site-wide aggregate.
        pub report: SiteWideReport,
        /// Synthesized findings; empty when the synthesizer declined or
        /// failed.
        pub issues: Vec<Issue>,
        /// The per-page analyses the report was derived from.
        pub pages: Vec<PageAnalysis>,
    }

    /// Crawls a site with the default HTTP page driver.
    ///
    /// This is the main entry point for the library. It validates the seed
    /// URL, fetches robots.txt and the sitemap, crawls up to the configured
    /// page budget, aggregates the results, and passes the report through
    /// the issue synthesizer.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions: an invalid seed URL or a
    /// page driver that cannot be constructed. Per-page and per-resource
    /// failures degrade locally and still produce an audit.
    pub async fn crawl_and_analyze_site<S: IssueSynthesizer>(
        config: Config,
        synthesizer: &S,
    ) -> Result<SiteAudit, AuditError> {
        // Validate before allocating anything
        validate_base_url(&config.base_url)?;
        let driver = HttpPageDriver::new(&config.user_agent)?;
        crawl_and_analyze_site_with_driver(config, &driver, synthesizer, CancellationToken::new())
            .await
    }

    /// Crawls a site with a caller-supplied page driver and cancellation
    /// token.
    ///
    /// The token is checked at every frontier pop, so cancelling aborts the
    /// crawl between pages; pages analyzed before cancellation are still
    /// aggregated and returned.
    pub async fn crawl_and_analyze_site_with_driver<D, S>(
        config: Config,
        driver: &D,
        synthesizer: &S,
        cancel: CancellationToken,
    ) -> Result<SiteAudit, AuditError>
    where
        D: PageDriver,
        S: IssueSynthesizer,
    {
        let base_url = validate_base_url(&config.base_url)?;
        let max_pages = config.effective_max_pages();
        let start_time = Instant::now();

        let stats = ProcessingStats::new();
        let client = init_client(&config.user_agent)?;

        info!(
            "Starting audit of {} (budget: {} pages)",
            base_url, max_pages
        );

        let robots = fetch_robots_txt(&client, &base_url, &stats).await;
        let sitemap = fetch_sitemap(client.as_ref(), &base_url, &stats).await;

        let pages = run_crawl(driver, &base_url, max_pages, &robots, &stats, &cancel).await;
        let report = aggregate(&pages, &robots, &sitemap);

        let url = crate::app::url::normalize_url(base_url.as_str());
        let issues = match synthesizer
            .generate_issues(&report, &url, &config.category)
            .await
        {
            Ok(issues) => issues,
            Err(e) => {
                warn!("Issue synthesis failed, returning report without issues: {:#}", e);
                stats.increment_error(ErrorType::IssueSynthesisError);
                Vec::new()
            }
        };

        log_statistics(&stats);
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Audit of {} finished: {} page(s) in {:.1}s",
            url,
            report.summary.total_pages,
            elapsed_seconds
        );

        Ok(SiteAudit {
            success: true,
            url,
            category: config.category,
            elapsed_seconds,
            report,
            issues,
            pages,
        })
    }
}
