//! Configuration module.
//!
//! Groups the crawl configuration struct, CLI enums, and the operational
//! constants (budgets, timeouts, thresholds) used across the crate.

pub mod constants;
pub mod types;

// Re-export public API
pub use constants::{
    DEFAULT_MAX_PAGES, DEFAULT_USER_AGENT, MAX_EXAMPLE_URLS, MAX_PAGES_CEILING, MAX_URL_LENGTH,
    PAGE_LOAD_TIMEOUT, RESOURCE_FETCH_TIMEOUT, SITEMAP_CANDIDATES, TCP_CONNECT_TIMEOUT,
};
pub use types::{Config, LogFormat, LogLevel};
