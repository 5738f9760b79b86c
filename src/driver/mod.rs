//! Page driver abstraction.
//!
//! The crawl loop never talks to a browser or HTTP client directly; it goes
//! through the [`PageDriver`] trait. Any engine that can load a URL and hand
//! back the final status, headers, and rendered HTML satisfies the contract -
//! a WebDriver session, a CDP-driven headless browser, or the plain HTTP
//! driver shipped here. Tests substitute a fake driver returning canned HTML
//! per URL, which is what makes the crawl loop testable without network cost.

mod http;

use std::collections::HashMap;
use std::future::Future;

use crate::error_handling::DriverError;

// Re-export public API
pub use http::HttpPageDriver;

/// The result of loading one page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final HTTP status code.
    pub status: u16,
    /// Response headers, keys lower-cased.
    pub headers: HashMap<String, String>,
    /// Rendered HTML body.
    pub html: String,
    /// Wall-clock load time in milliseconds.
    pub load_time_ms: u64,
}

impl FetchedPage {
    /// Looks up a response header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(|s| s.as_str())
    }

    /// Body size in kilobytes, rounded to one decimal place.
    pub fn size_kb(&self) -> f64 {
        (self.html.len() as f64 / 1024.0 * 10.0).round() / 10.0
    }
}

/// Capability to load one page and return its rendered state.
///
/// Implementations own their engine exclusively for the lifetime of a crawl
/// and must apply their own per-page timeout, surfacing it as
/// [`DriverError::Timeout`] rather than hanging the loop.
pub trait PageDriver: Send + Sync {
    /// Loads `url` and returns the final status, headers, HTML, and timing.
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<FetchedPage, DriverError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-robots-tag".to_string(), "noindex".to_string());
        let page = FetchedPage {
            status: 200,
            headers,
            html: String::new(),
            load_time_ms: 0,
        };
        assert_eq!(page.header("X-Robots-Tag"), Some("noindex"));
        assert_eq!(page.header("content-type"), None);
    }

    #[test]
    fn test_size_kb_rounds_to_one_decimal() {
        let page = FetchedPage {
            status: 200,
            headers: HashMap::new(),
            html: "x".repeat(1536),
            load_time_ms: 0,
        };
        assert_eq!(page.size_kb(), 1.5);
    }
}
