//! robots.txt and sitemap retrieval.
//!
//! Both fetchers degrade to "not present" on any failure; downstream logic
//! treats absence as "no restriction" (robots) or "no reconciliation data"
//! (sitemap), never as a crawl-fatal condition.

pub mod sitemap;
mod txt;

// Re-export public API
pub use sitemap::{fetch_sitemap, parse_sitemap_document, SitemapData, SitemapDocument, XmlFetcher};
pub use txt::{fetch_robots_txt, parse_robots_txt, RobotsTxtData};
