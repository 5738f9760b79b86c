//! Site-wide report assembly.
//!
//! The aggregator is pure: per-page analyses plus robots/sitemap data in,
//! [`SiteWideReport`] out, no I/O.

mod aggregate;
mod types;

// Re-export public API
pub use aggregate::aggregate;
pub use types::{
    CanonicalGroup, CanonicalHealth, CrawlSummary, ExampleList, IndexingHealth, RobotsTxtSection,
    SitemapSection, SiteType, SiteWideReport,
};
