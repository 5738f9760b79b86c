//! Page fetch & extract.
//!
//! This module turns one rendered page into a [`PageAnalysis`]:
//! - Basic content facts (title, meta description, heading/image/script counts)
//! - Indexability from robots meta, `X-Robots-Tag`, and robots.txt
//! - Canonical link classification
//! - Soft-404 and server-error detection
//! - Open Graph / Twitter Card maps with heuristic platform coverage
//! - JSON-LD structured data
//!
//! All parsing is done with CSS selectors via the `scraper` crate, except
//! JSON-LD which is matched against the raw HTML.

mod canonical;
mod html;
mod indexing;
mod page;
mod social;
mod structured;
mod types;

// Re-export public API
pub use canonical::classify_canonical;
pub use html::{dynamic_score, extract_meta_description, extract_title};
pub use indexing::compute_indexability;
pub use page::{analyze_fetched, failed_page};
pub use social::extract_social;
pub use structured::extract_structured_data;
pub use types::{
    CanonicalFacts, CanonicalType, IndexingFacts, PageAnalysis, SocialFacts, SocialPlatform,
    StructuredDataFacts,
};
