//! Initialization of shared resources.
//!
//! This module provides functions to initialize the logger and the shared
//! HTTP client used by the robots/sitemap fetcher and the default page
//! driver.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
