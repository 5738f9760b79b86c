//! Main application modules.
//!
//! This module provides the URL normalization utilities used by every other
//! component, plus progress logging for the crawl loop.

pub mod logging;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use url::{is_internal_url, normalize_url, resolve_href, validate_base_url};
